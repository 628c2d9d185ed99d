//! # Password-Reset Hooks Library
//!
//! Extension hooks for an identity platform's password-reset flow,
//! invoked at the post-challenge lifecycle point. Provides an email
//! allowlist hook and a lazy user-metadata initialization hook backed
//! by a cached management-API access token.
//!
//! Modules:
//! - `hooks` — the two post-challenge callbacks and the event/api contract
//! - `cache` — cached-token record, store capability, in-memory store
//! - `sources` — OAuth2 credential exchange and the cache-or-fetch provider
//! - `management` — management-API client for the user-metadata update

pub mod cache;
pub mod config;
pub mod helpers;
pub mod hooks;
pub mod management;
pub mod sources;
pub mod tests;
pub mod utils;

pub use crate::cache::token_cache::{CachedToken, MemoryStore, TokenStore};
pub use crate::config::credentials::Credentials;
pub use crate::sources::provider::get_access_token;
