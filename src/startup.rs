use std::net::TcpListener;
use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{App, HttpServer, dev::Server, web};
use anyhow::Context;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tracing_actix_web::TracingLogger;

use crate::configuration::{DatabaseSettings, Settings, StorageSettings};
use crate::domain::ClientEmail;
use crate::email_client::EmailClient;
use crate::routes::{
    ResponseOptions, api_root, create_status_check, list_status_checks, list_submissions,
    submit_contact,
};
use crate::storage::{InMemoryStore, PostgresStore, Store};

pub fn get_connection_pool(configuration: &DatabaseSettings) -> PgPool {
    PgPoolOptions::new().connect_lazy_with(configuration.connect_options())
}

/// Builds whichever store the configuration asked for. Both ends up behind
/// the same `Store` trait object, the rest of the app cannot tell them apart.
fn build_store(configuration: &StorageSettings) -> Arc<dyn Store> {
    match configuration {
        StorageSettings::Postgres(database) => {
            Arc::new(PostgresStore::new(get_connection_pool(database)))
        }
        StorageSettings::Memory => {
            tracing::warn!("Using the in-memory store. Records will not survive a restart");
            Arc::new(InMemoryStore::new())
        }
    }
}

/// `Application` works as a wrapper for actix_web `dev::Server`.
/// `dev::Server` does not tell us which port the app was allocated, so we
/// keep the port alongside it. The tests bind port 0 and need to know where
/// the app actually ended up.
pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    /// Given a configuration of type `Settings`:
    /// 1. The backing store is constructed (lazy connection for Postgres)
    /// 2. An email client is configured; missing credentials are fine, the
    ///    notifier degrades instead of failing startup
    /// 3. A server is started with `run`, accessible via `run_until_stopped`
    pub async fn build(configuration: Settings) -> Result<Self, anyhow::Error> {
        let store = build_store(&configuration.storage);

        let sender = configuration
            .email_client
            .sender()
            .map_err(anyhow::Error::msg)
            .context("Invalid sender email address")?;
        let recipient = configuration
            .email_client
            .trainer_email
            .as_ref()
            .and_then(|raw| match ClientEmail::parse(raw.clone()) {
                Ok(email) => Some(email),
                Err(error) => {
                    tracing::warn!(
                        error = %error,
                        "Invalid trainer email address in configuration. \
                        Notifications are disabled",
                    );
                    None
                }
            });
        let timeout = configuration.email_client.timeout();
        let email_client = EmailClient::new(
            configuration.email_client.base_url,
            sender,
            configuration.email_client.api_key,
            recipient,
            timeout,
        )
        .context("Failed to build the email HTTP client")?;

        let address = format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        );
        let listener = TcpListener::bind(address)?;
        let port = listener.local_addr()?.port();

        let server = run(
            listener,
            store,
            email_client,
            configuration.application.cors_origins(),
            ResponseOptions {
                expose_submission_id: configuration.application.expose_submission_id,
            },
        )?;
        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// This function only returns when the application is stopped
    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

fn build_cors(origins: &[String]) -> Cors {
    if origins.iter().any(|origin| origin == "*") {
        // The public-website default: reflect any origin
        Cors::permissive()
    } else {
        let cors = Cors::default()
            .allow_any_method()
            .allow_any_header()
            .supports_credentials();
        origins
            .iter()
            .fold(cors, |cors, origin| cors.allowed_origin(origin))
    }
}

pub fn run(
    listener: TcpListener,
    store: Arc<dyn Store>,
    email_client: EmailClient,
    cors_origins: Vec<String>,
    response_options: ResponseOptions,
) -> Result<Server, std::io::Error> {
    // web::Data wraps our dependencies in an Arc<T>
    let store = web::Data::from(store);
    let email_client = web::Data::new(email_client);
    let response_options = web::Data::new(response_options);
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(build_cors(&cors_origins))
            .service(
                web::scope("/api")
                    .route("/", web::get().to(api_root))
                    .route("/status", web::post().to(create_status_check))
                    .route("/status", web::get().to(list_status_checks))
                    .route("/contact", web::post().to(submit_contact))
                    .route("/submissions", web::get().to(list_submissions)),
            )
            .app_data(store.clone())
            .app_data(email_client.clone())
            .app_data(response_options.clone())
    })
    .listen(listener)?
    .run();
    Ok(server)
}
