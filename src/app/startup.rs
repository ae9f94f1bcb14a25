use std::net::TcpListener;
use std::sync::Arc;

use actix_web::dev::Server;
use actix_web::{
    web,
    App,
    HttpServer,
};
use tracing_actix_web::TracingLogger;
use url::Url;

use crate::analytics::{
    AnalyticsHook,
    NoopAnalytics,
};
use crate::app::configuration::{
    Settings,
    SubscriptionSettings,
};
use crate::routes::*;
use crate::subscription_client::SubscriptionClient;

pub struct LaunchpageApp {
    pub server: Result<Server, std::io::Error>,
    pub port: u16,
}

impl LaunchpageApp {
    /// Build the app with the default no-op analytics hook.
    pub async fn from(configuration: Settings) -> Result<LaunchpageApp, std::io::Error> {
        LaunchpageApp::with_analytics(configuration, Arc::new(NoopAnalytics)).await
    }

    /// Build the app with an injected analytics hook. The hook is invoked on
    /// every accepted signup.
    pub async fn with_analytics(
        configuration: Settings,
        analytics: Arc<dyn AnalyticsHook>,
    ) -> Result<LaunchpageApp, std::io::Error> {
        let tcp_listener = TcpListener::bind(configuration.application.binding_address())?;
        let port = tcp_listener.local_addr()?.port();
        let subscription_client = web::Data::new(LaunchpageApp::subscription_client(
            configuration.subscription,
        ));
        let page = web::Data::new(configuration.page);
        let analytics = web::Data::from(analytics);

        // HttpServer handles all transport level concerns
        let server = HttpServer::new(move || {
            // App is where all the application logic lives: routing,
            // middlewares, request handlers, etc.
            App::new()
                .wrap(TracingLogger::default())
                .route("/", web::get().to(home))
                .route("/health_check", web::get().to(health_check))
                .route("/subscriptions", web::post().to(subscribe))
                .app_data(subscription_client.clone())
                .app_data(page.clone())
                .app_data(analytics.clone())
        })
        .backlog(configuration.application.max_pending_connections)
        .listen(tcp_listener)
        .map(HttpServer::run);
        Ok(LaunchpageApp { port, server })
    }

    fn subscription_client(subscription_config: SubscriptionSettings) -> SubscriptionClient {
        let base_url = Url::parse(&subscription_config.base_url).unwrap_or_else(|e| {
            panic!(
                "invalid base url: {} for subscription client: {}",
                subscription_config.base_url, e
            )
        });

        SubscriptionClient::new(
            base_url,
            subscription_config.company_id,
            subscription_config.list_id,
            subscription_config.revision,
            subscription_config.timeout_secs,
        )
        .unwrap_or_else(|e| panic!("error building subscription client: {}", e))
    }
}
