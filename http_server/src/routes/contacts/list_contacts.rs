use crate::authentication::AuthenticatedUserInfo;
use crate::errors::ApiError;
use crate::use_case_app_container::UseCaseAppContainer;
use actix_web::{web, HttpRequest, HttpResponse};

#[tracing::instrument(err, skip(app, req), level = "info")]
pub(super) async fn list_contacts(
    app: web::Data<UseCaseAppContainer>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let user: AuthenticatedUserInfo = (&req).try_into()?;
    let contacts = app.get_client().list_contacts().list(&user).await?;

    Ok(HttpResponse::Ok().json(contacts))
}
