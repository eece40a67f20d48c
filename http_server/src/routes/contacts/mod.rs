mod delete_contact;
pub(crate) mod download_contact;
mod get_contact;
mod list_contacts;
mod submit_contact;

use actix_web::web;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/contacts")
            .app_data(submit_contact::json_config())
            .service(
                web::resource("")
                    .route(web::post().to(submit_contact::submit_contact))
                    .route(web::get().to(list_contacts::list_contacts)),
            )
            // Registered ahead of `/{id}` so `download` is never taken for an id.
            .service(
                web::resource("/download/{id}")
                    .route(web::get().to(download_contact::download_contact)),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_contact::get_contact))
                    .route(web::delete().to(delete_contact::delete_contact)),
            ),
    );
}
