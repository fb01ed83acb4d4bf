use volunteer_hub_sdk::{
    CreateEventInput, RegisterUserInput, Skill, Urgency, UpsertProfileInput, VolunteerHubSDK, ID,
};

pub fn unique_email(name: &str) -> String {
    format!("{}.{}@example.com", name.to_lowercase(), ID::new())
}

/// Registers a volunteer and fills in the skills and availability of the profile
pub async fn create_volunteer(
    sdk: &VolunteerHubSDK,
    name: &str,
    skills: Vec<Skill>,
    availability: &[&str],
) -> ID {
    let res = sdk
        .user
        .register(RegisterUserInput {
            name: name.into(),
            email: unique_email(name),
            password: "secret-password".into(),
        })
        .await
        .expect("Expected to register volunteer");

    sdk.profile
        .upsert(UpsertProfileInput {
            user_id: res.user_id,
            full_name: name.into(),
            city: "Houston".into(),
            state: "TX".into(),
            skills,
            availability: availability.iter().map(|d| d.to_string()).collect(),
            ..Default::default()
        })
        .await
        .expect("Expected to update profile");

    res.user_id
}

pub async fn create_event(sdk: &VolunteerHubSDK, name: &str, skills: Vec<Skill>, date: &str) -> ID {
    sdk.event
        .create(CreateEventInput {
            event_name: name.into(),
            event_description: format!("{} description", name),
            location: "Houston".into(),
            required_skills: skills,
            urgency: Urgency::High,
            event_date: date.into(),
        })
        .await
        .expect("Expected to create event")
        .event
        .id
}
