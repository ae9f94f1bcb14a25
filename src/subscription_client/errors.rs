use custom_error::custom_error;
use reqwest::Error;
use url::ParseError;

custom_error! {
///! Custom error for the subscription client.
pub SubscriptionError
    InvalidUri {source:ParseError} = "{source}",
    TransportFailure {source:Error} = "{source}",
    RejectedSubscription {status:u16, body:String} = "subscription rejected \
    with status: {status} and body: {body}",
}
