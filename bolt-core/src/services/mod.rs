// File: src/services/mod.rs

pub mod account_resolver;
pub mod stream_resolver;
pub mod twitch_lookup;

pub use account_resolver::AccountResolver;
pub use stream_resolver::StreamResolver;
pub use twitch_lookup::TwitchLookup;
