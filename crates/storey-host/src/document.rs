//! Traits a host implements to receive a generated layout.

use storey_core::ElementId;
use storey_layout::{GridSpec, LayoutForm, LevelSpec, ProjectInfo};

use crate::error::HostError;

/// A persistent host document that grids and levels are materialized into.
///
/// Mutating calls are only valid between [`begin`](Self::begin) and
/// [`commit`](Self::commit) / [`rollback`](Self::rollback). Rolling back
/// must discard every change made since `begin`.
pub trait LayoutDocument {
    /// Open a named transaction.
    fn begin(&mut self, name: &str) -> Result<(), HostError>;

    /// Make every change since `begin` permanent.
    fn commit(&mut self) -> Result<(), HostError>;

    /// Discard every change since `begin`. No-op without an open transaction.
    fn rollback(&mut self);

    /// Overwrite the document's project information.
    fn set_project_info(&mut self, info: &ProjectInfo) -> Result<(), HostError>;

    /// Materialize a reference grid.
    fn create_grid(&mut self, grid: &GridSpec) -> Result<ElementId, HostError>;

    /// Handles of every level currently in the document.
    fn level_ids(&self) -> Vec<ElementId>;

    /// Remove a level.
    fn delete_level(&mut self, id: ElementId) -> Result<(), HostError>;

    /// Materialize a level.
    fn create_level(&mut self, level: &LevelSpec) -> Result<ElementId, HostError>;
}

/// Shows the user a confirmation once a setup has been applied.
pub trait Notifier {
    /// Present `message` under `title`.
    fn notify(&mut self, title: &str, message: &str);
}

/// A [`Notifier`] that writes confirmations to the `tracing` log.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&mut self, title: &str, message: &str) {
        tracing::info!(title, "{message}");
    }
}

/// Collects layout parameters from the user.
pub trait ParameterSource {
    /// Return the filled-in form, or `None` if the user cancelled.
    fn collect(&mut self) -> Option<LayoutForm>;
}

impl ParameterSource for Option<LayoutForm> {
    fn collect(&mut self) -> Option<LayoutForm> {
        self.take()
    }
}
