pub mod client;
pub mod requests;

pub use client::{normalize_login, TwitchApiClient};
