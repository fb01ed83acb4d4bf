mod helpers;

use helpers::setup::spawn_app;
use helpers::utils::{create_event, unique_email};
use volunteer_hub_sdk::{
    APIErrorVariant, CreateCanceledNotificationInput, CreateEventInput, CreateNotificationInput,
    LoginUserInput, NotificationKind, RegisterUserInput, Skill, Urgency, UpdateEventInput,
    UpsertProfileInput, UserRole, ID,
};

#[actix_web::main]
#[test]
async fn test_status_ok() {
    let (_, sdk, _) = spawn_app().await;
    assert!(sdk.status.check_health().await.is_ok());
}

#[actix_web::main]
#[test]
async fn test_register_and_login() {
    let (_, sdk, _) = spawn_app().await;
    let email = unique_email("Grace");
    let res = sdk
        .user
        .register(RegisterUserInput {
            name: "Grace".into(),
            email: email.clone(),
            password: "hunter22".into(),
        })
        .await
        .expect("Expected to register");
    assert_eq!(res.user_name, "Grace");
    assert!(!res.token.is_empty());

    let profile = sdk
        .profile
        .get(res.user_id)
        .await
        .expect("Expected blank profile");
    assert!(profile.skills.is_empty());

    let duplicate = sdk
        .user
        .register(RegisterUserInput {
            name: "Grace again".into(),
            email: email.to_uppercase(),
            password: "hunter22".into(),
        })
        .await;
    assert_eq!(duplicate.unwrap_err().variant, APIErrorVariant::Conflict);

    let login = sdk
        .user
        .login(LoginUserInput {
            email: email.clone(),
            password: "hunter22".into(),
        })
        .await
        .expect("Expected to login");
    assert_eq!(login.user_name, "Grace");

    let bad_login = sdk
        .user
        .login(LoginUserInput {
            email,
            password: "wrong".into(),
        })
        .await;
    assert_eq!(bad_login.unwrap_err().variant, APIErrorVariant::Unauthorized);
}

#[actix_web::main]
#[test]
async fn test_upsert_profile() {
    let (_, sdk, _) = spawn_app().await;
    let user = sdk
        .user
        .register(RegisterUserInput {
            name: "Linus".into(),
            email: unique_email("Linus"),
            password: "password".into(),
        })
        .await
        .expect("Expected to register");

    let res = sdk
        .profile
        .upsert(UpsertProfileInput {
            user_id: user.user_id,
            full_name: "Linus T".into(),
            state: "tx".into(),
            skills: vec![Skill::Handyman, Skill::Handyman, Skill::Cleaning],
            availability: vec!["2024-11-01".into()],
            ..Default::default()
        })
        .await
        .expect("Expected to update profile");
    assert_eq!(res.profile.state, "TX");
    assert_eq!(res.profile.skills, vec![Skill::Handyman, Skill::Cleaning]);
    assert_eq!(res.profile.availability.len(), 1);

    let role = sdk
        .profile
        .get_role(user.user_id)
        .await
        .expect("Expected profile with role");
    assert_eq!(role.role, UserRole::Volunteer);
    assert_eq!(role.profile.full_name, "Linus T");

    let invalid = sdk
        .profile
        .upsert(UpsertProfileInput {
            user_id: user.user_id,
            state: "XX".into(),
            ..Default::default()
        })
        .await;
    assert_eq!(invalid.unwrap_err().variant, APIErrorVariant::BadClientData);

    let unknown = sdk
        .profile
        .upsert(UpsertProfileInput {
            user_id: ID::new(),
            ..Default::default()
        })
        .await;
    assert_eq!(unknown.unwrap_err().variant, APIErrorVariant::NotFound);
}

#[actix_web::main]
#[test]
async fn test_crud_event() {
    let (_, sdk, _) = spawn_app().await;
    let event_id = create_event(&sdk, "Toy drive", vec![Skill::ChildCare], "2024-12-20").await;

    let event = sdk.event.get(event_id).await.expect("Expected to get event");
    assert_eq!(event.event_name, "Toy drive");
    assert_eq!(event.urgency, Urgency::High);

    let updated = sdk
        .event
        .update(UpdateEventInput {
            event_id,
            location: Some("Dallas".into()),
            ..Default::default()
        })
        .await
        .expect("Expected to update event");
    assert_eq!(updated.event.location, "Dallas");
    assert_eq!(updated.event.event_name, "Toy drive");

    let events = sdk.event.get_all().await.expect("Expected to list events");
    assert!(events.iter().any(|e| e.id == event_id));

    let notifications = sdk
        .notification
        .get_all()
        .await
        .expect("Expected notifications");
    let kinds = notifications
        .iter()
        .filter(|n| n.event_id == Some(event_id))
        .map(|n| n.kind)
        .collect::<Vec<_>>();
    assert_eq!(
        kinds,
        vec![NotificationKind::UpdatedEvent, NotificationKind::NewEvent]
    );

    assert!(sdk.event.delete(event_id).await.is_ok());
    let res = sdk.event.get(event_id).await;
    assert_eq!(res.unwrap_err().variant, APIErrorVariant::NotFound);
}

#[actix_web::main]
#[test]
async fn test_create_event_validation() {
    let (_, sdk, _) = spawn_app().await;
    let res = sdk
        .event
        .create(CreateEventInput {
            event_name: "Bad date".into(),
            event_description: "Nope".into(),
            location: "Nowhere".into(),
            required_skills: vec![],
            urgency: Urgency::Low,
            event_date: "next friday".into(),
        })
        .await;
    assert_eq!(res.unwrap_err().variant, APIErrorVariant::BadClientData);

    let res = sdk
        .event
        .create(CreateEventInput {
            event_name: " ".into(),
            event_description: "Nope".into(),
            location: "Nowhere".into(),
            required_skills: vec![],
            urgency: Urgency::Low,
            event_date: "2024-11-01".into(),
        })
        .await;
    assert_eq!(res.unwrap_err().variant, APIErrorVariant::BadClientData);
}

#[actix_web::main]
#[test]
async fn test_notifications() {
    let (_, sdk, _) = spawn_app().await;
    let event_id = create_event(&sdk, "Blood drive", vec![Skill::FirstAid], "2024-11-15").await;

    let created = sdk
        .notification
        .create(CreateNotificationInput {
            event_id,
            notif_type: "matched event".into(),
        })
        .await
        .expect("Expected to create notification");
    assert_eq!(created.message, "Notification created successfully.");
    assert_eq!(created.saved_notification.event_name, "Blood drive");
    assert_eq!(
        created.saved_notification.title,
        "You Have Been Matched To An Event!"
    );

    let invalid = sdk
        .notification
        .create(CreateNotificationInput {
            event_id,
            notif_type: "party".into(),
        })
        .await;
    assert_eq!(invalid.unwrap_err().variant, APIErrorVariant::BadClientData);

    let unknown = sdk
        .notification
        .create(CreateNotificationInput {
            event_id: ID::new(),
            notif_type: "new event".into(),
        })
        .await;
    assert_eq!(unknown.unwrap_err().variant, APIErrorVariant::NotFound);

    let canceled = sdk
        .notification
        .create_canceled(CreateCanceledNotificationInput {
            event_name: "Bake sale".into(),
            event_description: "Called off".into(),
            event_location: "School".into(),
            event_date: Some("2024-11-20".into()),
        })
        .await
        .expect("Expected to create canceled notification");
    assert_eq!(canceled.saved_notification.kind, NotificationKind::Canceled);
    assert!(canceled.saved_notification.event_id.is_none());

    let notifications = sdk
        .notification
        .get_all()
        .await
        .expect("Expected notifications");
    assert_eq!(notifications[0].id, canceled.saved_notification.id);
}
