//! HTTP adapter for visa type directory endpoints.

mod handlers;
mod routes;

pub use handlers::VisaTypeState;
pub use routes::visa_type_routes;
