mod assign_volunteers;
mod find_candidates;
mod get_matches;
mod unassign_volunteers;
mod update_assignments;

use actix_web::web;
use find_candidates::find_candidates_controller;
use get_matches::{
    get_all_matches_controller, get_matched_controller, get_volunteer_details_controller,
};
use update_assignments::update_assignments_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/matching/match", web::post().to(find_candidates_controller));
    cfg.route(
        "/matching/assign",
        web::post().to(update_assignments_controller),
    );
    cfg.route("/matching/all", web::get().to(get_all_matches_controller));
    cfg.route("/matching/matched", web::get().to(get_matched_controller));
    cfg.route(
        "/matching/volunteer-details",
        web::get().to(get_volunteer_details_controller),
    );
}

/// Removes repeated ids, keeping the first occurrence of each
fn unique_ids(ids: Vec<volunteer_hub_domain::ID>) -> Vec<volunteer_hub_domain::ID> {
    let mut unique = Vec::with_capacity(ids.len());
    for id in ids {
        if !unique.contains(&id) {
            unique.push(id);
        }
    }
    unique
}
