use crate::errors::ApiError;
use crate::use_case_app_container::UseCaseAppContainer;
use actix_web::error::JsonPayloadError;
use actix_web::{web, HttpRequest, HttpResponse};
use anyhow::anyhow;
use serde::Serialize;
use serde_json::Value;

#[derive(Serialize, Debug)]
struct SubmitContactResponse {
    message: &'static str,
    id: String,
}

/// Body extraction failures (wrong content type, malformed JSON) are reported like any
/// other rejected submission.
pub(super) fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err: JsonPayloadError, _req: &HttpRequest| {
        ApiError::InternalServerError(anyhow!("Contact validation failed: {err}")).into()
    })
}

#[tracing::instrument(err, skip(app, submission), level = "info")]
pub(super) async fn submit_contact(
    submission: web::Json<Value>,
    app: web::Data<UseCaseAppContainer>,
) -> Result<HttpResponse, ApiError> {
    let contact = app
        .get_client()
        .submit_contact()
        .submit(submission.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(SubmitContactResponse {
        message: "Contact saved & email sent!",
        id: contact.id.inner(),
    }))
}
