// File: src/cache/mod.rs

pub mod stream_cache;

pub use stream_cache::StreamCache;
