use volunteer_hub_api::Application;
use volunteer_hub_infra::{setup_context, Config};
use volunteer_hub_sdk::VolunteerHubSDK;

pub struct TestApp {
    pub config: Config,
}

// Launch the application as a background task
pub async fn spawn_app() -> (TestApp, VolunteerHubSDK, String) {
    let mut ctx = setup_context().await;
    ctx.config.port = 0; // Random port
    ctx.config.bcrypt_cost = 4;

    let config = ctx.config.clone();
    let application = Application::new(ctx)
        .await
        .expect("Failed to build application.");

    let address = format!("http://localhost:{}", application.port());
    let _ = actix_web::rt::spawn(async move {
        application
            .start()
            .await
            .expect("Expected application to start");
    });

    let app = TestApp { config };
    let sdk = VolunteerHubSDK::new(address.clone());
    (app, sdk, address)
}
