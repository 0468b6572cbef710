use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};

/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Main application error type
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Malformed or out-of-range arguments (negative amounts, bad installment count or rate)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Installment count outside 1..=12
    #[error("Invalid input: installment count must be between 1 and 12, got {0}")]
    InvalidInstallmentCount(u32),

    /// Payment method name that is neither PIX nor card
    #[error("Invalid input: unknown payment method: {0}")]
    UnknownPaymentMethod(String),

    /// Checkout attempted with nothing in the cart
    #[error("Validation error: cart is empty")]
    EmptyCart,

    /// Fee schedule or platform configuration is incomplete or inconsistent
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Business rule violations in the checkout/settlement layer
    #[error("Validation error: {0}")]
    Validation(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Failures reported by external collaborators (order gateway, ledger)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();

        HttpResponse::build(status_code).json(serde_json::json!({
            "error": {
                "message": self.to_string(),
                "user_message": self.user_message(),
                "code": status_code.as_u16(),
            }
        }))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidInstallmentCount(_) => StatusCode::BAD_REQUEST,
            AppError::UnknownPaymentMethod(_) => StatusCode::BAD_REQUEST,
            AppError::EmptyCart => StatusCode::BAD_REQUEST,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Json(_) => StatusCode::BAD_REQUEST,
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Helper functions for common error scenarios
impl AppError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        AppError::InvalidInput(msg.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        AppError::Configuration(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }

    /// Storefront-facing text (pt-BR) for this error.
    pub fn user_message(&self) -> &'static str {
        match self {
            AppError::InvalidInstallmentCount(_) => "parcela inválida",
            AppError::UnknownPaymentMethod(_) => "forma de pagamento inválida",
            AppError::InvalidInput(_) | AppError::Json(_) => "valor inválido",
            AppError::EmptyCart => "carrinho vazio",
            AppError::Validation(_) => "operação não permitida",
            AppError::Configuration(_) => "erro de configuração",
            AppError::Internal(_) => "erro interno, tente novamente",
        }
    }
}
