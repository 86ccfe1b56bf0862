//! # Brewdex
//!
//! A registry of laptop-friendly cafes, usable both as a standalone binary
//! and as a library.
//!
//! ## Library Usage
//!
//! ```toml
//! [dependencies]
//! brewdex = "0.1"
//! ```
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use std::path::PathBuf;
//! use brewdex::server::{AppState, create_router};
//! use brewdex::store::{SqliteStore, Store};
//!
//! let store = SqliteStore::new(&PathBuf::from("./data/brewdex.db")).unwrap();
//! store.initialize().unwrap();
//!
//! let state = Arc::new(AppState {
//!     store: Arc::new(store),
//!     api_key: "TopSecretApiKey".to_string(),
//! });
//! let router = create_router(state);
//! // Serve with axum...
//! ```

pub mod config;
pub mod error;
pub mod server;
pub mod store;
pub mod types;
