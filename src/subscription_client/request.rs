use serde::Serialize;

/// The vendor's subscription document: a typed `subscription` resource
/// wrapping a nested `profile` resource and, when a target list is
/// configured, a relationship to that `list`.
#[derive(Serialize)]
pub struct SubscriptionRequest<'a> {
    pub data: SubscriptionData<'a>,
}

#[derive(Serialize)]
pub struct SubscriptionData<'a> {
    #[serde(rename = "type")]
    pub resource_type: &'a str,
    pub attributes: SubscriptionAttributes<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relationships: Option<Relationships<'a>>,
}

#[derive(Serialize)]
pub struct SubscriptionAttributes<'a> {
    pub profile: ProfileDocument<'a>,
}

#[derive(Serialize)]
pub struct ProfileDocument<'a> {
    pub data: ProfileData<'a>,
}

#[derive(Serialize)]
pub struct ProfileData<'a> {
    #[serde(rename = "type")]
    pub resource_type: &'a str,
    pub attributes: ProfileAttributes<'a>,
}

#[derive(Serialize)]
pub struct ProfileAttributes<'a> {
    pub email: &'a str,
}

#[derive(Serialize)]
pub struct Relationships<'a> {
    pub list: ListDocument<'a>,
}

#[derive(Serialize)]
pub struct ListDocument<'a> {
    pub data: ListData<'a>,
}

#[derive(Serialize)]
pub struct ListData<'a> {
    #[serde(rename = "type")]
    pub resource_type: &'a str,
    pub id: &'a str,
}

impl<'a> SubscriptionRequest<'a> {
    const SUBSCRIPTION_TYPE: &'a str = "subscription";
    const PROFILE_TYPE: &'a str = "profile";
    const LIST_TYPE: &'a str = "list";

    pub fn new(email: &'a str, list_id: Option<&'a str>) -> Self {
        Self {
            data: SubscriptionData {
                resource_type: Self::SUBSCRIPTION_TYPE,
                attributes: SubscriptionAttributes {
                    profile: ProfileDocument {
                        data: ProfileData {
                            resource_type: Self::PROFILE_TYPE,
                            attributes: ProfileAttributes { email },
                        },
                    },
                },
                relationships: list_id.map(|id| Relationships {
                    list: ListDocument {
                        data: ListData {
                            resource_type: Self::LIST_TYPE,
                            id,
                        },
                    },
                }),
            },
        }
    }
}
