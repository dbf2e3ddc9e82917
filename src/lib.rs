//! # frontpage
//!
//! A client for today's top posts on Reddit, built around an in-memory
//! paging repository.
//!
//! ## Architecture
//!
//! ```text
//! Fetcher → Normalizer → Repository → Browse (reducer) → CLI
//! ```
//!
//! - [`fetcher`]: one HTTP round trip per page, no retries
//! - [`normalizer`]: listing JSON to domain [`Post`](domain::Post)s
//! - [`repository`]: session cache, dismiss/read overlays, load ceiling
//! - [`browse`]: list state machine and post detail
//!
//! ## Quick Start
//!
//! ```bash
//! # First page of today's top posts
//! frontpage top
//!
//! # Everything up to the session limit, as JSON
//! frontpage top --all --json
//!
//! # One post in detail
//! frontpage show k1a2b3
//! ```

/// Application context and error handling.
///
/// The [`AppContext`](app::AppContext) struct wires the HTTP source into the
/// repository from a loaded [`Config`](config::Config).
pub mod app;

/// List state reducer, its async driver, and post detail.
///
/// - [`ListController`](browse::ListController): runs reducer effects against the repository
/// - [`PostDetail`](browse::PostDetail): what the detail view shows for a post
pub mod browse;

/// Command-line interface using clap.
///
/// - `top [--count N] [--all] [--hide ID]... [--json]` - List top posts
/// - `show <id> [--json]` - Show one post and mark it read
/// - `config` - Print effective settings
pub mod cli;

/// Configuration loaded from `~/.config/frontpage/config.toml`.
pub mod config;

/// Core domain models.
///
/// - [`Post`](domain::Post): one listing entry, identified by its id
/// - [`Page`](domain::Page): posts plus the cursors around them
/// - [`Cursor`](domain::Cursor): opaque pagination token
pub mod domain;

/// Listing source abstraction.
///
/// - [`PostSource`](fetcher::PostSource): Async trait for fetching one page
/// - [`HttpPostSource`](fetcher::http_fetcher::HttpPostSource): reqwest-based implementation
pub mod fetcher;

/// Listing JSON to domain conversion.
pub mod normalizer;

/// In-memory post repository.
pub mod repository;
