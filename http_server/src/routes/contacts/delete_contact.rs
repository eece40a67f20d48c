use crate::errors::ApiError;
use crate::use_case_app_container::UseCaseAppContainer;
use actix_web::{web, HttpResponse};
use serde_json::json;

#[tracing::instrument(err, skip(app), level = "info")]
pub(super) async fn delete_contact(
    id: web::Path<String>,
    app: web::Data<UseCaseAppContainer>,
) -> Result<HttpResponse, ApiError> {
    app.get_client()
        .delete_contact()
        .delete(&id)
        .await
        .map_err(ApiError::masked)?;

    Ok(HttpResponse::Ok().json(json!({ "message": "Contact deleted successfully" })))
}
