use serde::{Deserialize, Serialize};

// -- Envelope --

/// Every endpoint answers with this object. `code == 0` means success.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reply<T> {
    pub code: i32,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(rename = "Token", default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl Reply<()> {
    pub fn ok(message: impl Into<String>) -> Self {
        Self::new(0, message)
    }

    /// Envelope without payload; a nonzero `code` marks a failure.
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
            token: None,
        }
    }

    pub fn with_token(mut self, token: String) -> Self {
        self.token = Some(token);
        self
    }
}

impl<T> Reply<T> {
    pub fn with_data(message: impl Into<String>, data: T) -> Self {
        Self {
            code: 0,
            message: message.into(),
            data: Some(data),
            token: None,
        }
    }
}

// -- Auth --
//
// Every request field is optional on the wire: an omitted field takes its
// zero value (`""` or `0`). Only unparseable bodies and wrong JSON types are
// rejected, and a missing `Token` fails authentication like any unknown one.

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CredentialsRequest {
    pub user_name: String,
    pub password: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TokenRequest {
    pub token: String,
}

/// Omitted profile fields are treated as empty and overwrite the stored value.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct UpdateUserInfoRequest {
    pub token: String,
    pub user_name: String,
    pub password: String,
    pub avatar: String,
    pub nick_name: String,
    pub phone_number: String,
}

// -- Locations --

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AddLocationRequest {
    pub token: String,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct UpdateLocationRequest {
    pub token: String,
    #[serde(rename = "LocationID")]
    pub location_id: i64,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SearchLocationRequest {
    pub token: String,
    pub keyword: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct LocationInfoRequest {
    pub token: String,
    #[serde(rename = "LocationID")]
    pub location_id: i64,
}

// -- Records --

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ReservationRequest {
    pub token: String,
    #[serde(rename = "LocationID")]
    pub location_id: i64,
    pub date: String,
    pub time: String,
}
