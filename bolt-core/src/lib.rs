// src/lib.rs

pub mod config;
pub mod db;
pub mod http;
pub mod platforms;
pub mod repositories;
pub mod cache;
pub mod services;
pub mod utils;

pub use bolt_common::error::Error;
pub use bolt_common::models;
pub use config::TwitchConfig;
pub use db::Database;
pub use http::{ApiFetcher, DefaultHttpClient};
pub use services::TwitchLookup;
