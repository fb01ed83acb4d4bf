mod error;
mod event;
mod history;
mod job_schedulers;
mod matching;
mod notification;
mod profile;
mod shared;
mod status;
mod user;

use actix_cors::Cors;
use actix_web::{dev::Server, middleware, web, App, HttpServer};
use error::HubError;
use job_schedulers::start_upcoming_events_job;
use std::net::TcpListener;
use tracing::info;
use tracing_actix_web::TracingLogger;
use volunteer_hub_infra::HubContext;

pub fn configure_server_api(cfg: &mut web::ServiceConfig) {
    event::configure_routes(cfg);
    history::configure_routes(cfg);
    matching::configure_routes(cfg);
    notification::configure_routes(cfg);
    profile::configure_routes(cfg);
    status::configure_routes(cfg);
    user::configure_routes(cfg);
}

pub struct Application {
    server: Server,
    port: u16,
}

impl Application {
    pub async fn new(context: HubContext) -> Result<Self, std::io::Error> {
        let (server, port) = Application::configure_server(context.clone()).await?;
        Application::start_job_schedulers(context);

        Ok(Self { server, port })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    fn start_job_schedulers(context: HubContext) {
        start_upcoming_events_job(context);
    }

    async fn configure_server(context: HubContext) -> Result<(Server, u16), std::io::Error> {
        let port = context.config.port;
        let address = format!("0.0.0.0:{}", port);
        let listener = TcpListener::bind(&address)?;
        let port = listener.local_addr()?.port();
        info!("Listening on port {}", port);

        let server = HttpServer::new(move || {
            let ctx = context.clone();

            // Malformed json bodies get the same error body as every other client error
            let json_config = web::JsonConfig::default()
                .error_handler(|err, _req| HubError::BadClientData(err.to_string()).into());

            App::new()
                .wrap(Cors::permissive())
                .wrap(middleware::Compress::default())
                .wrap(TracingLogger::default())
                .app_data(web::Data::new(ctx))
                .app_data(json_config)
                .service(web::scope("/api/v1").configure(configure_server_api))
        })
        .listen(listener)?
        .workers(4)
        .run();

        Ok((server, port))
    }

    pub async fn start(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}
