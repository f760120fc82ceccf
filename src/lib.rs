//! # hnreader
//!
//! A small single-page Hacker News client driven by URL fragments.
//!
//! ## Architecture
//!
//! ```text
//! fragment → Router → Feed/Detail view → ResourceClient → Session → RenderSink
//! ```
//!
//! - [`router`]: maps `#/page/<n>` and `#/show/<id>` to views
//! - [`view`]: markup for the story list, story detail and comment tree
//! - [`store`]: per-run session with the cached listing and read flags
//! - [`fetcher`]: JSON resources over HTTP
//!
//! ## Quick Start
//!
//! ```bash
//! # Print the front page
//! hnreader render
//!
//! # Page 2, open a story, come back
//! hnreader render '#/page/2' '#/show/8863' '#/page/2' -o page.html
//!
//! # Interactive: one fragment per line, page.html re-rendered each time
//! hnreader browse -o page.html --open
//! ```

/// Application context and error handling.
///
/// The [`AppContext`](app::AppContext) struct wires together the
/// configuration, resource client and routers.
pub mod app;

/// Command-line interface using clap.
///
/// - `render [FRAGMENT]...` - Visit fragments in order and print the page
/// - `browse` - Re-render a page file for each fragment read from stdin
/// - `config` - Show the effective configuration
pub mod cli;

/// Configuration loaded from `~/.config/hnreader/config.toml`.
pub mod config;

/// Core domain models.
///
/// - [`FeedItem`](domain::FeedItem): listing entry with its read flag
/// - [`DetailItem`](domain::DetailItem) and [`Comment`](domain::Comment): story with comment tree
/// - [`Page`](domain::Page): page number coerced from a fragment
pub mod domain;

/// Fetching and decoding of the listing and item resources.
///
/// - [`Fetcher`](fetcher::Fetcher): Async trait for the transport
/// - [`HttpFetcher`](fetcher::HttpFetcher): reqwest-based implementation
/// - [`ResourceClient`](fetcher::ResourceClient): typed access on top of a fetcher
pub mod fetcher;

/// Fragment routing.
pub mod router;

/// Session state kept for the lifetime of a run.
pub mod store;

/// Page rendering and the document it is mounted into.
pub mod view;
