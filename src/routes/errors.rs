use actix_web::http::StatusCode;
use actix_web::{
    HttpResponse,
    ResponseError,
};
use custom_error::custom_error;

use crate::domain::MalformedInput;
use crate::subscription_client::SubscriptionError;

custom_error! {
///! Error inside route handler
pub RouteError
    InvalidFormData{source:MalformedInput} = "Invalid body data: {source}",
    SubscriptionFailed{source:SubscriptionError} = "{source}",
    RenderError{source:askama::Error} = "{source}",
}

impl ResponseError for RouteError {
    fn status_code(&self) -> StatusCode {
        match self {
            RouteError::InvalidFormData { .. } => StatusCode::BAD_REQUEST,
            RouteError::SubscriptionFailed { .. } | RouteError::RenderError { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            RouteError::InvalidFormData { .. } => HttpResponse::BadRequest().finish(),
            RouteError::SubscriptionFailed { .. } | RouteError::RenderError { .. } => {
                HttpResponse::InternalServerError().finish()
            }
        }
    }
}
