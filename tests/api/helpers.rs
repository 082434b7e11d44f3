use std::sync::LazyLock;

use fitness_api::{
    configuration::{Settings, StorageSettings, get_configuration},
    startup::Application,
    telemetry::{get_subscriber, init_subscriber_as_global_default},
};
use secrecy::Secret;
use wiremock::MockServer;

// Ensure that the 'Tracing' stack is only initialized once using `LazyLock`
static TRACING: LazyLock<()> = LazyLock::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    // We cannot assign the output of `get_subscriber` to a variable based on the
    // value TEST_LOG` because the sink is part of the type returned by
    // `get_subscriber`, therefore they are not the same type. We could work around
    // it, but this is the most straight-forward way of moving forward.
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber_as_global_default(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber_as_global_default(subscriber);
    }
});

pub struct TestApp {
    pub address: String,
    pub email_server: MockServer,
    pub api_client: reqwest::Client,
}

impl TestApp {
    pub async fn post_contact(&self, body: &serde_json::Value) -> reqwest::Response {
        self.api_client
            .post(format!("{}/api/contact", self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_submissions(&self) -> reqwest::Response {
        self.api_client
            .get(format!("{}/api/submissions", self.address))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_status(&self, body: &serde_json::Value) -> reqwest::Response {
        self.api_client
            .post(format!("{}/api/status", self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_status(&self) -> reqwest::Response {
        self.api_client
            .get(format!("{}/api/status", self.address))
            .send()
            .await
            .expect("Failed to execute request.")
    }
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with(|_| {}).await
}

/// Boots the real application on a random port, against the in-memory store
/// and with the email API replaced by a local mock server. `customize` runs
/// last, so individual tests can poke at any setting.
pub async fn spawn_app_with(customize: impl FnOnce(&mut Settings)) -> TestApp {
    // The first time `initialize` is invoked the code in `TRACING` is executed.
    // All other invocations will instead skip execution.
    LazyLock::force(&TRACING);

    let email_server = MockServer::start().await;

    let mut configuration = get_configuration().expect("Failed to read configuration.");
    // Port 0 is special-cased at the OS level: binding it triggers a scan
    // for an available port which is then bound to the application
    configuration.application.port = 0;
    configuration.storage = StorageSettings::Memory;
    configuration.email_client.base_url = email_server.uri();
    configuration.email_client.api_key = Some(Secret::new("test-api-key".to_string()));
    configuration.email_client.trainer_email = Some("trainer@example.com".to_string());
    customize(&mut configuration);

    let application = Application::build(configuration)
        .await
        .expect("Failed to build the application.");
    let address = format!("http://127.0.0.1:{}", application.port());
    // Launch the server as a background task
    let _ = tokio::spawn(application.run_until_stopped());

    TestApp {
        address,
        email_server,
        api_client: reqwest::Client::new(),
    }
}
