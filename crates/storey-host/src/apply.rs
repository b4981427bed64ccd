//! Transactional materialization of a generated layout.

use storey_core::ElementId;
use storey_layout::{LayoutResult, ProjectInfo};

use crate::document::LayoutDocument;
use crate::error::HostError;

/// Name of the host transaction that wraps a setup.
pub const TRANSACTION_NAME: &str = "Set Project Defaults";

/// What [`apply_setup`] changed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SetupReport {
    /// Handles of the created grids, in layout order.
    pub grids: Vec<ElementId>,
    /// Handles of the created levels, in layout order.
    pub levels: Vec<ElementId>,
    /// Number of pre-existing levels that were deleted.
    pub removed_levels: usize,
}

/// Apply `layout` to `doc` in a single transaction.
///
/// Order within the transaction:
///
/// 1. overwrite project information,
/// 2. create every grid in layout order,
/// 3. delete every level already in the document,
/// 4. create every new level in layout order.
///
/// Levels are replaced, never merged. On any host error the transaction
/// is rolled back and the document is left exactly as it was.
pub fn apply_setup<D>(
    doc: &mut D,
    info: &ProjectInfo,
    layout: &LayoutResult,
) -> Result<SetupReport, HostError>
where
    D: LayoutDocument + ?Sized,
{
    doc.begin(TRANSACTION_NAME)?;
    let result = materialize(doc, info, layout).and_then(|report| {
        doc.commit()?;
        Ok(report)
    });
    match result {
        Ok(report) => {
            tracing::info!(
                grids = report.grids.len(),
                levels = report.levels.len(),
                removed_levels = report.removed_levels,
                "layout committed"
            );
            Ok(report)
        }
        Err(e) => {
            tracing::warn!(error = %e, "layout rolled back");
            doc.rollback();
            Err(e)
        }
    }
}

fn materialize<D>(
    doc: &mut D,
    info: &ProjectInfo,
    layout: &LayoutResult,
) -> Result<SetupReport, HostError>
where
    D: LayoutDocument + ?Sized,
{
    doc.set_project_info(info)?;

    let grids = layout
        .grids
        .iter()
        .map(|g| doc.create_grid(g))
        .collect::<Result<Vec<_>, _>>()?;
    tracing::debug!(count = grids.len(), "grids created");

    let existing = doc.level_ids();
    for &id in &existing {
        doc.delete_level(id)?;
    }
    tracing::debug!(count = existing.len(), "existing levels removed");

    let levels = layout
        .levels
        .iter()
        .map(|l| doc.create_level(l))
        .collect::<Result<Vec<_>, _>>()?;
    tracing::debug!(count = levels.len(), "levels created");

    Ok(SetupReport {
        grids,
        levels,
        removed_levels: existing.len(),
    })
}
