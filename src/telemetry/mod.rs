//! Release telemetry: fetch the latest published version of a project and
//! compare it with the running one
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Checker   │────▶│   Fetcher   │────▶│  Registry   │
//! │  (compare)  │     │   (fetch)   │     │  (remote)   │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        │                   │
//!        ▼                   ▼
//! ┌─────────────┐     ┌─────────────┐
//! │    Guard    │     │  Fetchers   │
//! │ (one-shot)  │     │   (http)    │
//! └─────────────┘     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`checker`]: One-shot version check and reporting
//! - [`fetcher`]: Fetcher trait for retrieving version info from a registry
//! - [`fetchers`]: Concrete fetcher implementations
//! - [`guard`]: Atomic check-once state
//! - [`logger`]: Logger collaborator used for reporting
//! - [`error`]: Error types for fetch and check operations
//! - [`semver`]: Version parsing and comparison
//! - [`types`]: `VersionInfo` and project identifiers

pub mod checker;
pub mod error;
pub mod fetcher;
pub mod fetchers;
pub mod guard;
pub mod logger;
pub mod semver;
pub mod types;
