use super::ApiError;
use anyhow::Error;
use rocket::serde::{json::Json, Serialize};
use rocket::Responder;

#[derive(Responder)]
#[response(bound = "T: Serialize")]
pub enum ApiResult<T> {
    Ok(Json<T>),
    Err(ApiError),
}

impl<T> ApiResult<T> {
    pub fn new(result: Result<T, Error>) -> ApiResult<T> {
        match result {
            Ok(val) => ApiResult::Ok(Json(val)),
            Err(e) => ApiResult::Err(e.into()),
        }
    }
}
