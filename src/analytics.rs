use serde_json::Value;

/// Optional tracking capability invoked when a signup is accepted.
///
/// The hook is injected at startup so the signup flow never reaches for a
/// runtime global; deployments without a tracking sink keep the no-op
/// default.
pub trait AnalyticsHook: Send + Sync {
    fn track(&self, event: &str, properties: Value);
}

/// Default hook: tolerates the absence of a tracking sink silently.
pub struct NoopAnalytics;

impl AnalyticsHook for NoopAnalytics {
    fn track(&self, _event: &str, _properties: Value) {}
}
