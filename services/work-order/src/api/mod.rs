//! HTTP API

mod dto;
mod routes;

pub use dto::*;
pub use routes::routes;
