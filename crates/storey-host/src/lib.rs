//! Host-document integration for Storey.
//!
//! The layout generator produces plain value records. This crate defines
//! the seam through which a host materializes them:
//!
//! - [`LayoutDocument`]: transactional element creation and deletion
//! - [`apply_setup`]: one transaction that stamps project info, creates
//!   grids, replaces every existing level, and rolls back on failure
//! - [`ProjectSetup`]: the full command flow from parameter collection
//!   to user confirmation, including cancellation
//! - [`MemoryDocument`]: an in-memory host for tests and tooling

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod apply;
pub mod document;
pub mod error;
pub mod memory;
pub mod setup;

pub use apply::{apply_setup, SetupReport, TRANSACTION_NAME};
pub use document::{LayoutDocument, LogNotifier, Notifier, ParameterSource};
pub use error::{HostError, SetupError};
pub use memory::{Element, MemoryDocument};
pub use setup::{ProjectSetup, SetupOptions, SetupOutcome, ValidationPolicy};
