pub use errors::MalformedInput;
pub use incentive::{
    Incentive,
    IncentiveIcon,
};
pub use subscriber_email::SubscriberEmail;

mod errors;
mod incentive;
mod subscriber_email;
