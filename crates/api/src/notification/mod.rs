mod create_canceled_notification;
mod create_notification;
mod get_notifications;
pub mod notify_upcoming_events;

use actix_web::web;
use create_canceled_notification::create_canceled_notification_controller;
use create_notification::create_notification_controller;
use get_notifications::get_notifications_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/notifications",
        web::post().to(create_notification_controller),
    );
    cfg.route("/notifications", web::get().to(get_notifications_controller));
    cfg.route(
        "/notifications/canceled",
        web::post().to(create_canceled_notification_controller),
    );
}
