//! sqlx 错误分类

use errors::AppError;

/// 是否为唯一约束冲突（SQLSTATE 23505）
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.is_unique_violation(),
        _ => false,
    }
}

/// 将 sqlx 错误包装为数据库错误
pub fn database_error(context: &str, err: sqlx::Error) -> AppError {
    AppError::database(format!("{}: {}", context, err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::error::{DatabaseError, ErrorKind};
    use std::borrow::Cow;
    use std::fmt;

    #[derive(Debug)]
    struct FakeDbError {
        unique: bool,
    }

    impl fmt::Display for FakeDbError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "fake database error")
        }
    }

    impl std::error::Error for FakeDbError {}

    impl DatabaseError for FakeDbError {
        fn message(&self) -> &str {
            "fake database error"
        }

        fn code(&self) -> Option<Cow<'_, str>> {
            self.unique.then_some(Cow::Borrowed("23505"))
        }

        fn as_error(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
            self
        }

        fn as_error_mut(&mut self) -> &mut (dyn std::error::Error + Send + Sync + 'static) {
            self
        }

        fn into_error(self: Box<Self>) -> Box<dyn std::error::Error + Send + Sync + 'static> {
            self
        }

        fn kind(&self) -> ErrorKind {
            if self.unique {
                ErrorKind::UniqueViolation
            } else {
                ErrorKind::Other
            }
        }
    }

    #[test]
    fn test_unique_violation_detected() {
        let err = sqlx::Error::Database(Box::new(FakeDbError { unique: true }));
        assert!(is_unique_violation(&err));
    }

    #[test]
    fn test_other_errors_are_not_unique_violations() {
        let err = sqlx::Error::Database(Box::new(FakeDbError { unique: false }));
        assert!(!is_unique_violation(&err));
        assert!(!is_unique_violation(&sqlx::Error::RowNotFound));
        assert!(!is_unique_violation(&sqlx::Error::PoolTimedOut));
    }

    #[test]
    fn test_database_error_keeps_context() {
        let err = database_error("Failed to insert work order", sqlx::Error::RowNotFound);
        assert!(matches!(err, AppError::Database(_)));
        assert!(err.message().starts_with("Failed to insert work order: "));
    }
}
