use anyhow::Error;
use rocket::{
    http::Status,
    request::Request,
    response::{self, Responder, Response},
};
use tracing::error;

/// Failed endpoint outcome. The contract is status-only: callers get the
/// code and an empty body, the underlying error goes to the log.
#[derive(Debug)]
pub struct ApiError {
    pub status: Status,
    pub error: Option<Error>,
}

impl ApiError {
    pub fn new(status: Status, error: Error) -> ApiError {
        ApiError {
            status,
            error: Some(error),
        }
    }
}

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, _: &'r Request<'_>) -> response::Result<'static> {
        if let Some(error) = self.error {
            error!(%error, "Error from controller");
        }

        Response::build().status(self.status).ok()
    }
}

impl From<Error> for ApiError {
    fn from(e: Error) -> Self {
        ApiError::new(Status::InternalServerError, e)
    }
}
