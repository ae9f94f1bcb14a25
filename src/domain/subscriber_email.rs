use std::convert::TryFrom;

use validator::validate_email;

use crate::domain::errors::MalformedInput;

/// A trimmed, syntactically valid email address. The only form of an email
/// the rest of the crate accepts.
#[derive(Clone, Debug)]
pub struct SubscriberEmail(String);

impl AsRef<str> for SubscriberEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for SubscriberEmail {
    type Error = MalformedInput;

    fn try_from(email: String) -> Result<Self, Self::Error> {
        let email = email.trim();
        if email.is_empty() {
            return Err(MalformedInput::EmptyEmail);
        }
        if validate_email(email) {
            Ok(SubscriberEmail(email.to_string()))
        } else {
            Err(MalformedInput::InvalidEmail {
                email: email.to_string(),
            })
        }
    }
}
