use custom_error::custom_error;

custom_error! {
///! Custom error for signup input that cannot become a `SubscriberEmail`.
pub MalformedInput
    EmptyEmail = "the email is empty",
    InvalidEmail{email:String} = "invalid email: {email}",
}
