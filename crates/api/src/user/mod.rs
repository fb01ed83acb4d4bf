mod login_user;
mod register_user;

use actix_web::web;
use login_user::login_user_controller;
use register_user::register_user_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/register", web::post().to(register_user_controller));
    cfg.route("/login", web::post().to(login_user_controller));
}
