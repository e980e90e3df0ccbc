//! HTTP adapter for consultation endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    AnswerRequest, AnswerResponse, AnswerValue, BackRequest, BackResponse, SessionRequest,
    StartRequest, StartResponse,
};
pub use handlers::ConsultationHandlers;
pub use routes::consultation_routes;
