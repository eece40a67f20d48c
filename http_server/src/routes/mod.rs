pub mod contacts;
mod health_check;

use actix_web::web;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.configure(health_check::init_routes)
        .configure(contacts::init_routes);
}
