use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use once_cell::sync::Lazy;
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

pub type Result<T> = std::result::Result<T, ApiError>;

/// Whether 500 responses may carry a stack trace. Off in production unless
/// EXPOSE_STACK_TRACES is set explicitly.
static EXPOSE_STACK_TRACES: Lazy<bool> = Lazy::new(|| {
    match std::env::var("EXPOSE_STACK_TRACES") {
        Ok(value) => matches!(value.as_str(), "1" | "true" | "yes"),
        Err(_) => std::env::var("ENVIRONMENT")
            .map(|env| env != "production")
            .unwrap_or(true),
    }
});

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{message}")]
    Unauthenticated { code: String, message: String },

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Validation(String),

    #[error("{message}")]
    Internal {
        message: String,
        stack: Option<String>,
    },
}

impl ApiError {
    /// Missing or malformed Authorization header.
    pub fn credentials_required() -> Self {
        ApiError::Unauthenticated {
            code: "credentials_required".to_string(),
            message: "No authorization token was found".to_string(),
        }
    }

    /// Token was present but failed verification.
    pub fn invalid_token(message: impl Into<String>) -> Self {
        ApiError::Unauthenticated {
            code: "invalid_token".to_string(),
            message: message.into(),
        }
    }

    /// Unknown failure. Captures a backtrace only when traces may be exposed.
    pub fn internal(message: impl Into<String>) -> Self {
        let stack = if *EXPOSE_STACK_TRACES {
            Some(std::backtrace::Backtrace::force_capture().to_string())
        } else {
            None
        };
        ApiError::Internal {
            message: message.into(),
            stack,
        }
    }

    /// Get status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Unauthenticated { .. } => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Log error with appropriate level
    fn log_error(&self) {
        match self.status_code() {
            status if status.is_server_error() => {
                error!(error = %self, "Server error occurred");
            }
            status if status.is_client_error() => {
                warn!(error = %self, "Client error occurred");
            }
            _ => {}
        }
    }
}

/// JSON error body. All non-401 errors carry only `message`; 401 adds the
/// authentication collaborator's `code`; 500 may add `stack`.
#[derive(Debug, PartialEq, Serialize)]
pub struct ErrorBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
}

impl ErrorBody {
    fn message(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
            stack: None,
        }
    }
}

/// What the error normalizer decided to do with an error.
#[derive(Debug, PartialEq)]
pub enum ErrorDisposition {
    /// A response is already on the wire; the error must be forwarded to the
    /// caller untouched and no response produced here.
    Delegate,
    /// Emit exactly this response.
    Respond { status: StatusCode, body: ErrorBody },
}

/// Map an error to its HTTP disposition, in strict priority order: an
/// already-sent response always delegates, authentication failures answer 401
/// with the error's own `{code, message}`, everything else falls through to
/// the status taxonomy (500 exposes the stack only when `expose_stack`).
pub fn normalize(error: &ApiError, headers_sent: bool, expose_stack: bool) -> ErrorDisposition {
    if headers_sent {
        return ErrorDisposition::Delegate;
    }

    let body = match error {
        ApiError::Unauthenticated { code, message } => ErrorBody {
            code: Some(code.clone()),
            message: message.clone(),
            stack: None,
        },
        ApiError::Internal { message, stack } => ErrorBody {
            code: None,
            message: message.clone(),
            stack: if expose_stack { stack.clone() } else { None },
        },
        other => ErrorBody::message(other.to_string()),
    };

    ErrorDisposition::Respond {
        status: error.status_code(),
        body,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.log_error();

        // The adapter runs before anything is written, so headers_sent is
        // always false here and Delegate cannot occur.
        match normalize(&self, false, *EXPOSE_STACK_TRACES) {
            ErrorDisposition::Respond { status, body } => (status, Json(body)).into_response(),
            ErrorDisposition::Delegate => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        }
    }
}
