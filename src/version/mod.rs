//! Version resolution layer
//!
//! Fetches the latest published version of each manifest component from its
//! upstream, concurrently and with per-component failure isolation.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │    Fetch    │────▶│  Dispatch   │────▶│   Sources   │
//! │ (join all)  │     │(kind lookup)│     │ (npm, pypi, │
//! └─────────────┘     └─────────────┘     │github,custom│
//!                                         └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`fetch`]: Concurrent orchestrator, one diagnostic per failed component
//! - [`dispatch`]: Kind to source mapping, tag prefix stripping, `FetchOutcome`
//! - [`source`]: Source trait for fetching a latest version
//! - [`sources`]: Concrete sources and the shared HTTP client
//! - [`error`]: Error type for fetch operations

pub mod dispatch;
pub mod error;
pub mod fetch;
pub mod source;
pub mod sources;
