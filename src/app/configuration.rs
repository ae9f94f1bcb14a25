use std::env;

use config::{
    Config,
    ConfigError,
    File,
};
use custom_error::custom_error;

use crate::domain::Incentive;

#[derive(Clone, Debug, serde::Deserialize)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub page: PageSettings,
    pub subscription: SubscriptionSettings,
}

#[derive(Clone, Debug, serde::Deserialize)]
pub struct ApplicationSettings {
    pub host: String,
    pub max_pending_connections: u32,
    pub port: u16,
}

/// Everything the landing page renders: copy, incentives, social links and
/// theme tokens. The page template is a single parameterized view over this
/// struct, so page variants are configuration layers rather than duplicated
/// markup.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct PageSettings {
    pub title: String,
    pub badge: String,
    pub headline_prefix: String,
    pub headline_accent: String,
    pub headline_suffix: String,
    pub tagline: String,
    pub signup: SignupCopy,
    pub incentives_heading: String,
    pub incentives_tagline: String,
    pub incentives: Vec<Incentive>,
    pub socials: Vec<SocialLink>,
    pub footer_note: String,
    pub theme: ThemeSettings,
}

#[derive(Clone, Debug, serde::Deserialize)]
pub struct SignupCopy {
    pub placeholder: String,
    pub button_label: String,
    pub submitting_label: String,
    pub success_message: String,
    pub failure_message: String,
    pub network_failure_message: String,
    pub disclaimer: String,
}

#[derive(Clone, Debug, serde::Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
}

#[derive(Clone, Debug, serde::Deserialize)]
pub struct ThemeSettings {
    pub accent: String,
    pub background: String,
    pub surface: String,
    pub text: String,
    pub muted: String,
}

impl ApplicationSettings {
    pub fn binding_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Clone, Debug, serde::Deserialize)]
pub struct SubscriptionSettings {
    pub base_url: String,
    /// The vendor account receiving new profiles. Required: the shipped
    /// `configuration/base.yaml` carries the documented default, there is no
    /// in-code fallback.
    pub company_id: String,
    /// Optional marketing list. When unset, profiles are subscribed without
    /// a list relationship.
    pub list_id: Option<String>,
    pub revision: String,
    pub timeout_secs: u64,
}

custom_error! {
///! Custom error for invalid configuration files.
pub ConfigurationError
    InvalidConfig{source:ConfigError} = "{source}",
}

/// Load the configuration from the directory: `configuration`.
///
/// `APP_ENVIRONMENT` selects the override layer (`local` when unset).
///
/// It fails if:
/// - the `configuration/base` file is missing
/// - the `configuration/${APP_ENVIRONMENT}` file is missing
/// - the `configuration/*` files have missing or unexpected fields
///
/// # Examples
///
/// ```rust
/// use launchpage::app::load_configuration;
///
/// assert!(load_configuration().is_ok());
/// ```
pub fn load_configuration() -> Result<Settings, ConfigurationError> {
    let mut config = Config::new();
    config.merge(File::with_name("configuration/base").required(true))?;
    let app_environment = env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "local".into());
    config.merge(File::with_name(&format!("configuration/{}", app_environment)).required(true))?;

    // Add in settings from environment variables (with a prefix of APP and
    // '__' as separator) E.g. `APP_SUBSCRIPTION__COMPANY_ID=Xy12Ab` would set
    // `Settings.subscription.company_id`
    config.merge(config::Environment::with_prefix("app").separator("__"))?;

    config.try_into().map(Ok)?
}
