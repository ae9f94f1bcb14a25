use std::sync::{
    Arc,
    Mutex,
};

use reqwest::Response;
use serde_json::Value;
use wiremock::MockServer;

use launchpage::analytics::AnalyticsHook;
use launchpage::app::{
    load_configuration,
    setup_tracing,
    LaunchpageApp,
    Settings,
};

// ensure the `tracing` is instantiated only once
lazy_static::lazy_static! {
 static ref TRACING: () = setup_tracing("test".into(),"debug".into());
}

/// Analytics hook that records every event for later assertions.
pub struct RecordingAnalytics {
    events: Mutex<Vec<(String, Value)>>,
}

impl RecordingAnalytics {
    fn new() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
        }
    }

    pub fn events(&self) -> Vec<(String, Value)> {
        self.events.lock().unwrap().clone()
    }
}

impl AnalyticsHook for RecordingAnalytics {
    fn track(&self, event: &str, properties: Value) {
        self.events
            .lock()
            .unwrap()
            .push((event.to_string(), properties));
    }
}

pub struct TestApp {
    pub address: String,
    pub settings: Settings,
    pub vendor_server: MockServer,
    pub analytics: Arc<RecordingAnalytics>,
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with(|_| {}).await
}

/// Spawn the app on a random port, pointing the subscription client at a
/// wiremock vendor double, after applying `customize` to the loaded
/// configuration.
pub async fn spawn_app_with(customize: impl FnOnce(&mut Settings)) -> TestApp {
    lazy_static::initialize(&TRACING);
    let vendor_server = MockServer::start().await;

    let configuration = {
        let mut c = load_configuration().unwrap();
        c.application.port = 0;
        c.subscription.base_url = vendor_server.uri();
        customize(&mut c);
        c
    };
    let settings = configuration.clone();

    let analytics = Arc::new(RecordingAnalytics::new());
    let app = LaunchpageApp::with_analytics(configuration, analytics.clone())
        .await
        .expect("error building app");

    tokio::spawn(app.server.expect("error building server"));

    TestApp {
        // the request is done with the protocol:ip:port
        address: format!("http://127.0.0.1:{}", app.port),
        settings,
        vendor_server,
        analytics,
    }
}

pub async fn send_json_post_request(endpoint: &str, body: &Value) -> Response {
    reqwest::Client::new()
        .post(endpoint)
        .json(&body)
        .send()
        .await
        .expect("Fail to execute post request")
}

pub async fn send_get_request(endpoint: &str) -> Response {
    reqwest::Client::new()
        .get(endpoint)
        .send()
        .await
        .expect("Fail to execute get request")
}
