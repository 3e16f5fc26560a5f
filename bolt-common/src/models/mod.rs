// File: bolt-common/src/models/mod.rs
pub mod account;
pub mod stream;

pub use account::TwitchAccount;
pub use stream::{CachedStream, StreamEntry, StreamSlot};
