mod get_profile;
mod get_profile_role;
mod upsert_profile;

use actix_web::web;
use get_profile::get_profile_controller;
use get_profile_role::get_profile_role_controller;
use upsert_profile::upsert_profile_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/profile", web::post().to(upsert_profile_controller));
    cfg.route("/profile/{user_id}", web::get().to(get_profile_controller));
    cfg.route(
        "/profile/{user_id}/role",
        web::get().to(get_profile_role_controller),
    );
}
