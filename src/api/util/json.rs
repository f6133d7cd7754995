use anyhow::Result;
use axum::Json;

use crate::errors::AppError;

/// Map a domain Result<T> into Json<T>, translating domain failures into
/// their HTTP counterparts.
pub fn to_json<T: serde::Serialize>(result: Result<T>) -> Result<Json<T>, AppError> {
    result.map(Json).map_err(AppError::from)
}
