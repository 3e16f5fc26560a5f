// ========================================================
// File: bolt-core/src/platforms/twitch/requests/stream.rs
// ========================================================
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use super::id_string;
use crate::models::{CachedStream, StreamEntry};
use crate::platforms::twitch::client::TwitchApiClient;
use crate::utils::time::parse_twitch_time;
use crate::Error;

/// Response from the "Get Stream by User" endpoint. `stream` is `null`
/// while the channel is offline.
#[derive(Debug, Deserialize)]
pub struct StreamResponse {
    #[serde(default)]
    pub stream: Option<Value>,
}

/// The fields of a stream document this crate reads.
#[derive(Debug, Deserialize)]
pub struct StreamData {
    #[serde(rename = "_id", deserialize_with = "id_string")]
    pub id: String,
    #[serde(default)]
    pub game: Option<String>,
    #[serde(default)]
    pub viewers: u64,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub channel: Option<ChannelData>,
}

#[derive(Debug, Deserialize)]
pub struct ChannelData {
    #[serde(default)]
    pub status: Option<String>,
}

/// Fetches the live status of `user_id`, stamped as refreshed at `now`.
pub async fn fetch_stream(
    client: &TwitchApiClient,
    user_id: &str,
    now: DateTime<Utc>,
) -> Result<CachedStream, Error> {
    debug!("Getting Stream for user id {}...", user_id);

    let body = client.fetch(&client.stream_url(user_id)).await?;
    let response: StreamResponse = serde_json::from_value(body)?;

    let Some(raw) = response.stream else {
        debug!("User id {} is offline.", user_id);
        return Ok(CachedStream::Offline {
            user_id: user_id.to_string(),
            refreshed_at: now,
        });
    };

    let data: StreamData = serde_json::from_value(raw.clone())?;
    let started_at = data
        .created_at
        .as_deref()
        .map(parse_twitch_time)
        .transpose()?;

    Ok(CachedStream::Live(StreamEntry {
        user_id: user_id.to_string(),
        stream_id: data.id,
        title: data.channel.and_then(|c| c.status),
        game: data.game,
        viewer_count: data.viewers,
        started_at,
        raw,
        refreshed_at: now,
    }))
}
