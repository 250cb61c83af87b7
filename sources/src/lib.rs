//! Module to deal with the remote document store we fetch position data from.
//!
//! The store is a hosted, schema-less document database: every collection is a
//! sequence of JSON records keyed by a generated id.  The whole contract is
//! get-all/add/delete, writes become visible on the next read, nothing here
//! manages durability or replication.
//!
//! The different submodules deal with:
//!
//! - describing the endpoint and credentials (`config`, `auth`)
//! - the raw REST access method (`rest`)
//! - the typed, fail-open feed the views consume (`feed`)
//!

use std::fmt::Debug;

use async_trait::async_trait;
use serde_json::Value;

use bousai_formats::Collection;

// Re-export these modules for a shorter import path.
//
pub use auth::*;
pub use config::*;
pub use error::*;
pub use feed::*;
pub use rest::*;

mod auth;
mod config;
mod error;
mod feed;
mod rest;

/// This trait enables us to manage different ways of connecting to a document
/// store under a single interface.  All operations are suspension points, the
/// caller resumes on completion without blocking other event handling.
///
#[async_trait]
pub trait DocumentStore: Debug + Send + Sync {
    /// Full-collection scan, no pagination.
    async fn get_all(&self, collection: Collection) -> Result<Vec<Value>, StoreError>;
    /// Single-document append, returns the generated id.
    async fn add(&self, collection: Collection, doc: &Value) -> Result<String, StoreError>;
    /// Delete by generated document id.
    async fn delete(&self, collection: Collection, id: &str) -> Result<(), StoreError>;
}

pub fn version() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}
