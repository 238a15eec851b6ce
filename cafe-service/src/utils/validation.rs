use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use service_core::error::AppError;
use validator::Validate;

/// JSON body that has been deserialized and passed `Validate`.
///
/// Every failure is reported through `AppError`, so clients always get the
/// `{error, details}` body.
pub struct ValidatedJson<T>(pub T);

#[axum::async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + 'static,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(rejection_to_error)?;

        value.validate()?;

        Ok(ValidatedJson(value))
    }
}

fn rejection_to_error(rejection: JsonRejection) -> AppError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            AppError::InvalidBody(anyhow::anyhow!(err.body_text()))
        }
        other => AppError::BadRequest(anyhow::anyhow!(other.body_text())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::StatusCode};

    #[derive(serde::Deserialize, Validate)]
    struct Ping {
        #[validate(range(min = 1))]
        count: i32,
    }

    fn json_request(body: &'static str) -> Request {
        Request::builder()
            .method("POST")
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    async fn extract(request: Request) -> Result<ValidatedJson<Ping>, AppError> {
        ValidatedJson::<Ping>::from_request(request, &()).await
    }

    #[tokio::test]
    async fn accepts_valid_body() {
        let ValidatedJson(ping) = extract(json_request(r#"{"count": 3}"#)).await.unwrap();
        assert_eq!(ping.count, 3);
    }

    #[tokio::test]
    async fn wrong_type_is_invalid_body() {
        let err = extract(json_request(r#"{"count": "three"}"#)).await.err().unwrap();
        assert!(matches!(err, AppError::InvalidBody(_)));
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(err.to_string().contains("count"));
    }

    #[tokio::test]
    async fn malformed_json_is_bad_request() {
        let err = extract(json_request("{not json")).await.err().unwrap();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn missing_content_type_is_bad_request() {
        let request = Request::builder()
            .method("POST")
            .body(Body::from(r#"{"count": 3}"#))
            .unwrap();
        let err = extract(request).await.err().unwrap();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn failed_validation_is_validation_error() {
        let err = extract(json_request(r#"{"count": 0}"#)).await.err().unwrap();
        assert!(matches!(err, AppError::ValidationError(_)));
    }
}
