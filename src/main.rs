mod telemetry;

use telemetry::{get_subscriber, init_subscriber};
use volunteer_hub_api::Application;
use volunteer_hub_infra::setup_context;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    openssl_probe::init_ssl_cert_env_vars();

    let subscriber = get_subscriber("volunteer_hub_server".into(), "info".into());
    init_subscriber(subscriber);

    let context = setup_context().await;

    let app = Application::new(context).await?;
    app.start().await
}
