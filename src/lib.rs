//! Lab Site Populator
//!
//! Fills a static lab website skeleton with content from a single JSON
//! site document.
//!
//! - `document/`: typed Site Document (every section optional)
//! - `loader/`: fetch from URL (cache-busted) or file, one error class
//! - `page/`: skeleton with named `<!--@region-->` markers
//! - `populator/`: one render routine per section, fixed order
//! - `join/`: two-input readiness join gating the contact map
//! - `session/`: one page load tying the above together
//! - `server/`: axum server running a page load per request

pub mod config;
pub mod diagnostics;
pub mod document;
pub mod join;
pub mod loader;
pub mod page;
pub mod populator;
pub mod session;

#[cfg(feature = "server")]
pub mod server;

// Re-export commonly used types
pub use config::{ConfigError, PopulatorConfig, SiteConfig};
pub use diagnostics::{Diagnostics, TracingDiagnostics};
pub use document::SiteDocument;
pub use join::{JoinOutcome, ReadinessJoin, Signal};
pub use loader::{load_document, DocumentSource, LoadError, LoaderOptions};
pub use page::{Page, PageError};
pub use populator::{Fragment, PopulateReport, Populator, Section};
pub use session::PageLoad;

#[cfg(feature = "server")]
pub use server::{create_router, AppState};
