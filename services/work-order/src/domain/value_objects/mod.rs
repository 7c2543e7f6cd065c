//! 值对象

mod field;
mod ids;
mod timestamp;

pub use field::Field;
pub use ids::WorkOrderId;
pub use timestamp::Timestamp;
