// src/repositories/mod.rs

pub mod sqlite;

pub use bolt_common::traits::AccountRepository;
pub use sqlite::SqliteAccountRepository;
