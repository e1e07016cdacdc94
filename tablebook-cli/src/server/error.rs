//! HTTP error responses.
//!
//! Client mistakes answer 400 or 404 with `{"mensagem": ...}`. Store and
//! internal failures answer 500 with a generic body; the detail goes to
//! the log only.

use std::fmt;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tablebook::Error;

/// The request an error came from, with the identifiers it carried.
/// Used for log context and the 404 text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// POST /reserva
    Create { mesa: i64, data: String, hora: String },
    /// DELETE /reserva/{id}
    Cancel { id: i64 },
    /// POST /confirmar/{id}
    Confirm { id: i64 },
    /// POST /finalizar/{id}
    Finalize { id: i64 },
    /// A read-only report, by name.
    Report(&'static str),
}

impl Operation {
    fn not_found_message(&self) -> &'static str {
        match self {
            Self::Confirm { .. } => "Reserva nao encontrada ou ja confirmada",
            Self::Finalize { .. } => "Reserva nao encontrada ou nao confirmada",
            Self::Create { .. } | Self::Cancel { .. } | Self::Report(_) => {
                "Reserva nao encontrada"
            }
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Create { mesa, data, hora } => {
                write!(f, "create table {mesa} on {data} at {hora}")
            }
            Self::Cancel { id } => write!(f, "cancel reservation {id}"),
            Self::Confirm { id } => write!(f, "confirm reservation {id}"),
            Self::Finalize { id } => write!(f, "finalize reservation {id}"),
            Self::Report(name) => write!(f, "{name} report"),
        }
    }
}

/// An error response.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: Option<String>,
}

impl ApiError {
    /// 400 with a message.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: Some(message.into()),
        }
    }

    /// 500 with the generic body. Logs `detail`.
    pub fn internal(operation: &Operation, detail: impl fmt::Display) -> Self {
        log::error!("{operation} failed: {detail}");
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: None,
        }
    }

    /// Maps a library error to a response.
    pub fn from_error(operation: &Operation, err: Error) -> Self {
        if err.is_not_found() {
            log::debug!("{operation}: {err}");
            return Self {
                status: StatusCode::NOT_FOUND,
                message: Some(operation.not_found_message().to_string()),
            };
        }

        if err.is_client_error() {
            log::debug!("{operation} rejected: {err}");
            return Self::bad_request(client_message(&err));
        }

        Self::internal(operation, err)
    }

    /// Response status.
    pub fn status(&self) -> StatusCode {
        self.status
    }
}

fn client_message(err: &Error) -> String {
    match err {
        Error::Validation { field, .. } if field == "mesa" => {
            "Mesa deve estar entre 1 e 20".to_string()
        }
        Error::PastDateTime { .. } => {
            "Não é possível fazer reservas para datas/horas passadas".to_string()
        }
        Error::DuplicateSlot { .. } => "Mesa ja reservada nesse horario".to_string(),
        Error::SlotInUse { .. } => "Mesa ja ocupada nesse horario".to_string(),
        Error::AlreadyConfirmed { .. } => {
            "Nao e possivel cancelar reserva ja confirmada pelo garcom".to_string()
        }
        Error::MissingField { field } => format!("Campo \"{field}\" e obrigatorio"),
        other => other.to_string(),
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = match self.message {
            Some(message) => json!({ "mensagem": message }),
            None => json!({ "error": "internal server error" }),
        };
        (self.status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let not_found = ApiError::from_error(
            &Operation::Cancel { id: 9 },
            Error::NotFound {
                resource: "reservation 9".into(),
            },
        );
        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);
        assert_eq!(not_found.message.as_deref(), Some("Reserva nao encontrada"));

        let confirmed = ApiError::from_error(
            &Operation::Cancel { id: 9 },
            Error::AlreadyConfirmed {
                id: 9,
                status: tablebook::Status::Confirmed,
            },
        );
        assert_eq!(confirmed.status(), StatusCode::BAD_REQUEST);

        let store = ApiError::from_error(
            &Operation::Report("period"),
            Error::Database(rusqlite::Error::InvalidQuery),
        );
        assert_eq!(store.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(store.message.is_none());
    }

    #[test]
    fn test_confirm_not_found_text() {
        let err = ApiError::from_error(
            &Operation::Confirm { id: 3 },
            Error::NotFound {
                resource: "booked reservation 3".into(),
            },
        );
        assert_eq!(
            err.message.as_deref(),
            Some("Reserva nao encontrada ou ja confirmada")
        );
    }

    #[test]
    fn test_missing_field_text() {
        let err = ApiError::from_error(
            &Operation::Confirm { id: 3 },
            Error::MissingField {
                field: "garcom".into(),
            },
        );
        assert_eq!(err.message.as_deref(), Some("Campo \"garcom\" e obrigatorio"));
    }

    #[test]
    fn test_operation_names_its_identifiers() {
        let create = Operation::Create {
            mesa: 5,
            data: "2099-03-14".into(),
            hora: "19:00".into(),
        };
        assert_eq!(create.to_string(), "create table 5 on 2099-03-14 at 19:00");
        assert_eq!(Operation::Cancel { id: 7 }.to_string(), "cancel reservation 7");
        assert_eq!(Operation::Confirm { id: 8 }.to_string(), "confirm reservation 8");
        assert_eq!(Operation::Finalize { id: 9 }.to_string(), "finalize reservation 9");
        assert_eq!(Operation::Report("pending").to_string(), "pending report");
    }
}
