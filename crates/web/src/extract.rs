//! Custom Axum extractors

use std::str::FromStr;

use axum::extract::{Form, FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// Extract a record id from the single path parameter.
///
/// Anything that is not a non-negative integer is rejected before a
/// repository is touched.
pub struct ValidId<T>(pub T);

impl<S, T> FromRequestParts<S> for ValidId<T>
where
    S: Send + Sync,
    T: FromStr + Send,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::InvalidId { raw: String::new() })?;

        let id = raw.parse::<T>().map_err(|_| ApiError::InvalidId { raw })?;
        Ok(Self(id))
    }
}

/// Urlencoded form body whose rejections answer with the JSON error shape.
///
/// A wrong content type or an undecodable body becomes a 400
/// `invalid_input` instead of axum's plain-text 415/422.
pub struct ValidForm<T>(pub T);

impl<S, T> FromRequest<S> for ValidForm<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(value) = Form::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::InvalidForm {
                message: rejection.body_text(),
            })?;
        Ok(Self(value))
    }
}
