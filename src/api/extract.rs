//! Request body extraction rendered through [`AppError`].

use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};

use crate::error::AppError;

/// JSON body extractor whose rejections use the standard error envelope.
///
/// A body that is not valid JSON, has the wrong content type, or does not
/// match the target type (unknown `role`, non-integer `year`, ...) is a
/// 400 with the reason under `details.messages`.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::dto::VehicleRequest;
    use axum::body::Body;
    use axum::http::{StatusCode, header};

    fn json_request(body: &'static str) -> Request {
        Request::builder()
            .method("POST")
            .uri("/vehicles")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_valid_body() {
        let result =
            JsonBody::<VehicleRequest>::from_request(json_request(r#"{"year": 1980}"#), &()).await;

        assert_eq!(result.ok().map(|JsonBody(v)| v.year), Some(1980));
    }

    #[tokio::test]
    async fn test_wrong_type_is_bad_request() {
        let result =
            JsonBody::<VehicleRequest>::from_request(json_request(r#"{"year": "1980x"}"#), &())
                .await;

        let err = result.err().unwrap();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert!(err.to_error_info().details["messages"][0].is_string());
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let result = JsonBody::<VehicleRequest>::from_request(json_request("{"), &()).await;

        assert!(matches!(result, Err(AppError::Validation { .. })));
    }
}
