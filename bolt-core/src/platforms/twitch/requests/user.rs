// ========================================================
// File: bolt-core/src/platforms/twitch/requests/user.rs
// ========================================================
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::debug;

use super::id_string;
use crate::models::TwitchAccount;
use crate::platforms::twitch::client::TwitchApiClient;
use crate::utils::time::parse_twitch_time;
use crate::Error;

/// Response from the "Get Users" endpoint.
#[derive(Debug, Deserialize)]
pub struct UsersResponse {
    #[serde(rename = "_total", default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub users: Vec<UserData>,
}

/// Single user record.
#[derive(Debug, Clone, Deserialize)]
pub struct UserData {
    #[serde(rename = "_id", deserialize_with = "id_string")]
    pub id: String,
    pub name: String,
    pub display_name: String,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(rename = "type", default = "default_user_type")]
    pub user_type: String,
    pub created_at: String,
    pub updated_at: String,
}

fn default_user_type() -> String {
    "user".to_string()
}

impl UserData {
    /// Builds the row stored under `key`, stamped as refreshed at `now`.
    pub fn into_account(self, key: &str, now: DateTime<Utc>) -> Result<TwitchAccount, Error> {
        Ok(TwitchAccount {
            name: key.to_string(),
            user_id: self.id,
            display_name: self.display_name,
            profile_image_url: self.logo,
            bio: self.bio,
            account_type: self.user_type,
            created_at: parse_twitch_time(&self.created_at)?,
            api_updated_at: parse_twitch_time(&self.updated_at)?,
            last_refreshed: now,
        })
    }
}

/// Looks up a user by login name.
///
/// Zero matches is reported as [`Error::NotFound`] carrying the login.
pub async fn fetch_user(client: &TwitchApiClient, login: &str) -> Result<UserData, Error> {
    debug!("Calling `Get User` endpoint for {}...", login);

    let body = client.fetch(&client.users_url(login)).await?;
    let response: UsersResponse = serde_json::from_value(body)?;

    if response.total == Some(0) {
        return Err(Error::NotFound(login.to_string()));
    }
    response
        .users
        .into_iter()
        .next()
        .ok_or_else(|| Error::NotFound(login.to_string()))
}
