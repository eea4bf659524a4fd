//! Two-party console chat with flat-file accounts and transcripts.

pub mod accounts;
pub mod chat;
pub mod common;
pub mod config;
pub mod error;
pub mod shell;
pub mod storage;
