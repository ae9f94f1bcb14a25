use std::convert::TryInto;

use actix_web::{
    web,
    HttpResponse,
};
use serde::Deserialize;

use crate::analytics::AnalyticsHook;
use crate::domain::{
    MalformedInput,
    SubscriberEmail,
};
use crate::routes::RouteError;
use crate::subscription_client::SubscriptionClient;

/// Source tag attached to the analytics join event.
const SIGNUP_SOURCE: &str = "coming_soon";

#[derive(Deserialize)]
pub struct SignupData {
    email: String,
}

#[tracing::instrument(
    name = "adding new signup",
    skip(payload, subscription_client, analytics),
    fields(email = %payload.email)
)]
pub async fn subscribe(
    payload: web::Json<SignupData>,
    subscription_client: web::Data<SubscriptionClient>,
    analytics: web::Data<dyn AnalyticsHook>,
) -> Result<HttpResponse, RouteError> {
    let email = build_subscriber_email(payload)?;

    subscription_client.subscribe(&email).await?;
    record_join(analytics.get_ref(), &email);

    Ok(HttpResponse::Ok().finish())
}

#[tracing::instrument(name = "validating signup email", skip(payload))]
fn build_subscriber_email(
    payload: web::Json<SignupData>,
) -> Result<SubscriberEmail, MalformedInput> {
    payload.0.email.try_into().map_err(|e| {
        tracing::error!("{:?}", e);
        e
    })
}

#[tracing::instrument(name = "recording accepted signup", skip(analytics, email))]
fn record_join(analytics: &dyn AnalyticsHook, email: &SubscriberEmail) {
    analytics.track(
        "joined_waitlist",
        serde_json::json!({
            "email": email.as_ref(),
            "source": SIGNUP_SOURCE,
        }),
    );
}
