use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use jetway_core::CoreError;
use jetway_order::ReservationError;
use serde_json::json;

#[derive(Debug)]
pub enum AppError {
    ValidationError(String),
    NotFoundError(String),
    ConflictError(String),
    Anyhow(anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFoundError(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::ConflictError(msg) => (StatusCode::CONFLICT, msg),
            AppError::Anyhow(err) => {
                tracing::error!("Internal Server Error: {:#}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error".to_string())
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

/// Domain errors are sorted into client errors by kind; anything else is a 500.
impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        let err = err.into();
        if let Some(reservation_err) = err.downcast_ref::<ReservationError>() {
            return if reservation_err.is_not_found() {
                Self::NotFoundError(reservation_err.to_string())
            } else {
                Self::ConflictError(reservation_err.to_string())
            };
        }
        if let Some(core_err) = err.downcast_ref::<CoreError>() {
            return Self::ValidationError(core_err.to_string());
        }
        Self::Anyhow(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_errors_map_to_status() {
        let not_found = AppError::from(ReservationError::FlightNotFound("XX999".to_string()));
        assert_eq!(not_found.into_response().status(), StatusCode::NOT_FOUND);

        let conflict = AppError::from(ReservationError::SeatAlreadyReserved {
            flight: "TK001".to_string(),
            seat: "1A".to_string(),
        });
        assert_eq!(conflict.into_response().status(), StatusCode::CONFLICT);

        let invalid = AppError::from(CoreError::InvalidDate("2024-13-01".to_string()));
        assert_eq!(invalid.into_response().status(), StatusCode::BAD_REQUEST);

        let internal = AppError::from(anyhow::anyhow!("boom"));
        assert_eq!(internal.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
