//! esa-sweep is a batch-cleanup tool for [esa.io](https://esa.io/) workspaces: search for
//! posts matching a query, then delete every match, one request per second.
//!
//! ```no_run
//! use esa_sweep::Client;
//!
//! # async fn f() -> Result<(), Box<dyn std::error::Error>> {
//! // A client for one workspace, authenticated with a personal access token
//! let client = Client::new("my-team", "wLNWtyWMifBki...");
//!
//! // Find everything still marked work-in-progress
//! let results = client.search_posts("wip:true").await?;
//!
//! // Goodbye!
//! let ids = results.post_ids();
//! client.delete_posts(&ids).await?;
//! println!("deleted {} posts", ids.len());
//! # Ok(())
//! # }
//! ```
//!
//! The `esa-sweep` binary wires this up to the `ESA_TOKEN`, `ESA_TEAM`, and
//! `ESA_SEARCH_QUERY` environment variables.

#![deny(elided_lifetimes_in_paths)]
#![warn(clippy::pedantic, missing_docs)]
#![allow(clippy::missing_errors_doc)]

mod client;
mod config;
mod error;
mod post;

pub use crate::client::Client;
pub use crate::config::{Config, MissingEnv};
pub use crate::error::Error;
pub use crate::post::{Author, Post, PostId, SearchResult};
