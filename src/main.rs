use launchpage::app::{
    load_configuration,
    setup_tracing,
    LaunchpageApp,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    setup_tracing("launchpage".into(), "info".into());

    let configuration = load_configuration().expect("error loading configuration");
    let app = LaunchpageApp::from(configuration)
        .await
        .expect("error building app");

    app.server?.await
}
