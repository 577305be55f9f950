use serde::{Deserialize, Serialize};

/// Field names follow the JSON the booking clients already consume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "ID")]
    pub id: i64,
    #[serde(rename = "Username")]
    pub username: String,
    /// Always empty when sent to a client.
    #[serde(rename = "Password")]
    pub password: String,
    #[serde(rename = "Avatar")]
    pub avatar: String,
    #[serde(rename = "NickName")]
    pub nick_name: String,
    #[serde(rename = "PhoneNumber")]
    pub phone_number: String,
}

impl User {
    /// Copy of the user safe to put on the wire.
    pub fn redacted(mut self) -> Self {
        self.password.clear();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    #[serde(rename = "ID")]
    pub id: i64,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Description")]
    pub description: String,
}

/// A single reservation of one location by one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "ID")]
    pub id: i64,
    #[serde(rename = "UserID")]
    pub user_id: i64,
    #[serde(rename = "LocationID")]
    pub location_id: i64,
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Time")]
    pub time: String,
}

/// A record joined with its location. The location fields are empty when the
/// referenced location does not exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordDetail {
    #[serde(rename = "ID")]
    pub id: i64,
    #[serde(rename = "UserID")]
    pub user_id: i64,
    #[serde(rename = "LocationID")]
    pub location_id: i64,
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Time")]
    pub time: String,
    #[serde(rename = "LocationName")]
    pub location_name: String,
    #[serde(rename = "LocationDescription")]
    pub location_description: String,
}
