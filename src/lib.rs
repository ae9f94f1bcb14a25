//! A "coming soon" landing page that funnels email signups into a
//! third-party marketing list.

pub mod analytics;
pub mod app;
pub mod domain;
pub mod routes;
pub mod subscription_client;
