//! # Atlantis News
//!
//! News ingestion and classification for the Atlantis smart-city portal,
//! plus the small pieces of logic its pages carry: the scripted FAQ
//! assistant, identity-provider error messages, the emergency services
//! directory and FIR report validation.
//!
//! ## Architecture
//!
//! The news feed is a linear pipeline:
//! 1. **Fetching** ([`api`]): one search per configured query, all in parallel
//! 2. **De-duplication** ([`pipeline::dedupe`]): one article per title
//! 3. **Classification** ([`pipeline::classify`]): category and location by keyword
//! 4. **Ranking** ([`pipeline::rank`], optional): keyword hits plus recency
//! 5. **Presentation** ([`feed`]): category filter and paging, with a fixed
//!    fallback set when the fetch fails

pub mod api;
pub mod auth;
pub mod chat;
pub mod cli;
pub mod config;
pub mod emergency;
pub mod feed;
pub mod models;
pub mod outputs;
pub mod pipeline;
pub mod utils;
