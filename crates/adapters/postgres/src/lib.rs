//! adapter-postgres - PostgreSQL 适配器

mod connection;
mod error;
mod health;
mod transaction;

pub use connection::*;
pub use error::*;
pub use health::*;
pub use transaction::*;
