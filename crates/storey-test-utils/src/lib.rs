//! Test utilities and mock hosts for Storey development.
//!
//! Provides a call-recording [`LayoutDocument`] that can be told to fail,
//! a scripted [`ParameterSource`], a recording [`Notifier`], and small
//! fixtures for building requests in meters.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{form, meters, request};

use std::collections::VecDeque;

use storey_core::ElementId;
use storey_host::{HostError, LayoutDocument, MemoryDocument, Notifier, ParameterSource};
use storey_layout::{GridSpec, LayoutForm, LevelSpec, ProjectInfo};

/// One call made against a [`RecordingDocument`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DocCall {
    Begin(String),
    Commit,
    Rollback,
    SetProjectInfo,
    CreateGrid(String),
    DeleteLevel(ElementId),
    CreateLevel(String),
}

/// A [`MemoryDocument`] that logs every call and can fail on demand.
///
/// Wrap pre-seeded documents with [`wrap`](RecordingDocument::wrap).
/// [`fail_at`](RecordingDocument::fail_at) makes the n-th mutating call
/// (0-based, counting project info, grid, and level operations) return
/// [`HostError::Rejected`].
pub struct RecordingDocument {
    inner: MemoryDocument,
    calls: Vec<DocCall>,
    mutations: usize,
    fail_at: Option<usize>,
}

impl RecordingDocument {
    pub fn new() -> Self {
        Self::wrap(MemoryDocument::new())
    }

    pub fn wrap(inner: MemoryDocument) -> Self {
        Self {
            inner,
            calls: Vec::new(),
            mutations: 0,
            fail_at: None,
        }
    }

    /// Fail the `n`-th mutating call.
    pub fn fail_at(mut self, n: usize) -> Self {
        self.fail_at = Some(n);
        self
    }

    pub fn calls(&self) -> &[DocCall] {
        &self.calls
    }

    pub fn inner(&self) -> &MemoryDocument {
        &self.inner
    }

    fn mutation(&mut self, call: DocCall) -> Result<(), HostError> {
        let n = self.mutations;
        self.mutations += 1;
        self.calls.push(call);
        if self.fail_at == Some(n) {
            return Err(HostError::Rejected {
                reason: format!("injected failure at mutation {n}"),
            });
        }
        Ok(())
    }
}

impl Default for RecordingDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutDocument for RecordingDocument {
    fn begin(&mut self, name: &str) -> Result<(), HostError> {
        self.calls.push(DocCall::Begin(name.to_string()));
        self.inner.begin(name)
    }

    fn commit(&mut self) -> Result<(), HostError> {
        self.calls.push(DocCall::Commit);
        self.inner.commit()
    }

    fn rollback(&mut self) {
        self.calls.push(DocCall::Rollback);
        self.inner.rollback();
    }

    fn set_project_info(&mut self, info: &ProjectInfo) -> Result<(), HostError> {
        self.mutation(DocCall::SetProjectInfo)?;
        self.inner.set_project_info(info)
    }

    fn create_grid(&mut self, grid: &GridSpec) -> Result<ElementId, HostError> {
        self.mutation(DocCall::CreateGrid(grid.name.clone()))?;
        self.inner.create_grid(grid)
    }

    fn level_ids(&self) -> Vec<ElementId> {
        self.inner.level_ids()
    }

    fn delete_level(&mut self, id: ElementId) -> Result<(), HostError> {
        self.mutation(DocCall::DeleteLevel(id))?;
        self.inner.delete_level(id)
    }

    fn create_level(&mut self, level: &LevelSpec) -> Result<ElementId, HostError> {
        self.mutation(DocCall::CreateLevel(level.name.clone()))?;
        self.inner.create_level(level)
    }
}

/// A [`ParameterSource`] that replays a fixed script of dialog results.
///
/// `None` entries model the user pressing cancel. An exhausted script
/// also cancels.
#[derive(Default)]
pub struct ScriptedSource {
    script: VecDeque<Option<LayoutForm>>,
    asked: usize,
}

impl ScriptedSource {
    pub fn new(script: impl IntoIterator<Item = Option<LayoutForm>>) -> Self {
        Self {
            script: script.into_iter().collect(),
            asked: 0,
        }
    }

    /// Number of times the source was asked for parameters.
    pub fn asked(&self) -> usize {
        self.asked
    }
}

impl ParameterSource for ScriptedSource {
    fn collect(&mut self) -> Option<LayoutForm> {
        self.asked += 1;
        self.script.pop_front().flatten()
    }
}

/// A [`Notifier`] that keeps every confirmation.
#[derive(Default)]
pub struct RecordingNotifier {
    pub messages: Vec<(String, String)>,
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, title: &str, message: &str) {
        self.messages.push((title.to_string(), message.to_string()));
    }
}
