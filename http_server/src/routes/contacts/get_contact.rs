use crate::errors::ApiError;
use crate::use_case_app_container::UseCaseAppContainer;
use actix_web::{web, HttpResponse};

#[tracing::instrument(err, skip(app), level = "info")]
pub(super) async fn get_contact(
    id: web::Path<String>,
    app: web::Data<UseCaseAppContainer>,
) -> Result<HttpResponse, ApiError> {
    let contact = app
        .get_client()
        .get_contact()
        .get(&id)
        .await
        .map_err(ApiError::masked)?;

    Ok(HttpResponse::Ok().json(contact))
}
