//! HTTP adapter for unit endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{CreateUnitRequest, UnitResponse, UpdateUnitRequest};
pub use handlers::UnitHandlers;
pub use routes::unit_routes;
