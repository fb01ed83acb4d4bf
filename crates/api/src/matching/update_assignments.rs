use super::{
    assign_volunteers::AssignVolunteersUseCase, unassign_volunteers::UnassignVolunteersUseCase,
};
use crate::{error::HubError, shared::guard::Guard, shared::usecase::execute};
use actix_web::{web, HttpResponse};
use volunteer_hub_api_structs::{
    assign_volunteers::*,
    dtos::{MatchDTO, NotificationDTO},
};
use volunteer_hub_infra::HubContext;

#[derive(Debug, PartialEq)]
enum Action {
    Assign,
    Unassign,
}

impl Action {
    fn parse(action: Option<&str>) -> Result<Self, HubError> {
        match action {
            Some("assign") => Ok(Self::Assign),
            Some("unassign") => Ok(Self::Unassign),
            _ => Err(HubError::BadClientData(
                "Invalid action. Use 'assign' or 'unassign'.".into(),
            )),
        }
    }
}

/// Assigns or unassigns volunteers depending on the `action` of the request
pub async fn update_assignments_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<HubContext>,
) -> Result<HttpResponse, HubError> {
    let body = body.into_inner();
    let action = Action::parse(body.action.as_deref())?;
    let event_id = Guard::against_missing(body.event_id, "eventId")?;
    let event_id = Guard::against_malformed_id(event_id)?;
    let user_ids = body.user_id.map(UserIds::into_vec).unwrap_or_default();
    let user_ids = Guard::against_malformed_ids(user_ids)?;

    match action {
        Action::Assign => {
            let usecase = AssignVolunteersUseCase { event_id, user_ids };
            execute(usecase, &ctx)
                .await
                .map(|new_matches| {
                    HttpResponse::Created().json(AssignResponse {
                        message: "Users assigned to event successfully.".into(),
                        new_matches: new_matches.into_iter().map(MatchDTO::new).collect(),
                    })
                })
                .map_err(HubError::from)
        }
        Action::Unassign => {
            let targeted = !user_ids.is_empty();
            let usecase = UnassignVolunteersUseCase { event_id, user_ids };
            execute(usecase, &ctx)
                .await
                .map(|res| {
                    let message = if targeted {
                        "Users unassigned from event successfully and notifications created."
                    } else {
                        "All users unassigned from event successfully."
                    };
                    HttpResponse::Ok().json(UnassignResponse {
                        message: message.into(),
                        deleted_count: res.deleted_count,
                        notifications: res
                            .notifications
                            .into_iter()
                            .map(NotificationDTO::new)
                            .collect(),
                    })
                })
                .map_err(HubError::from)
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses_actions() {
        assert_eq!(Action::parse(Some("assign")).unwrap(), Action::Assign);
        assert_eq!(Action::parse(Some("unassign")).unwrap(), Action::Unassign);
        for invalid in [None, Some(""), Some("Assign"), Some("remove")] {
            assert!(matches!(
                Action::parse(invalid),
                Err(HubError::BadClientData(_))
            ));
        }
    }
}
