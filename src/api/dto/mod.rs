//! Request/response shapes of the HTTP API

pub mod log_dto;
pub mod paginated_response;
