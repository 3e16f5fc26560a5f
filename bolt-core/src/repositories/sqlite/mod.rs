// src/repositories/sqlite/mod.rs

pub mod account;

pub use self::account::SqliteAccountRepository;
