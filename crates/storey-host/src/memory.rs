//! In-memory [`LayoutDocument`] implementation.
//!
//! Elements live in an insertion-ordered table keyed by [`ElementId`].
//! `begin` snapshots the whole document; `rollback` restores the
//! snapshot. Names must be unique per element kind, as hosts require.

use indexmap::IndexMap;
use storey_core::ElementId;
use storey_layout::{GridSpec, LevelSpec, ProjectInfo};

use crate::document::LayoutDocument;
use crate::error::HostError;

/// An element stored in a [`MemoryDocument`].
#[derive(Clone, Debug, PartialEq)]
pub enum Element {
    /// A reference grid.
    Grid(GridSpec),
    /// A level.
    Level(LevelSpec),
}

impl Element {
    /// The element's display name.
    pub fn name(&self) -> &str {
        match self {
            Self::Grid(g) => &g.name,
            Self::Level(l) => &l.name,
        }
    }

    fn same_kind(&self, other: &Element) -> bool {
        matches!(
            (self, other),
            (Self::Grid(_), Self::Grid(_)) | (Self::Level(_), Self::Level(_))
        )
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
struct State {
    elements: IndexMap<ElementId, Element>,
    project: Option<ProjectInfo>,
    next_id: u64,
}

/// A host document held entirely in memory.
///
/// # Examples
///
/// ```
/// use storey_host::{apply_setup, MemoryDocument};
/// use storey_layout::{LayoutGenerator, LayoutForm, LayoutConfig, ProjectInfo};
///
/// let config = LayoutConfig::default();
/// let layout = LayoutGenerator::new(&config)
///     .generate(&LayoutForm::default().to_request(&config));
///
/// let mut doc = MemoryDocument::new();
/// let report = apply_setup(&mut doc, &ProjectInfo::default(), &layout).unwrap();
/// assert_eq!(report.grids.len(), 10);
/// assert_eq!(doc.levels().count(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct MemoryDocument {
    state: State,
    open: Option<(String, State)>,
    history: Vec<String>,
}

impl MemoryDocument {
    /// An empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a level outside any transaction, as if it already existed
    /// when the document was opened.
    pub fn seed_level(&mut self, level: LevelSpec) -> ElementId {
        self.state.insert(Element::Level(level))
    }

    /// Insert a grid outside any transaction.
    pub fn seed_grid(&mut self, grid: GridSpec) -> ElementId {
        self.state.insert(Element::Grid(grid))
    }

    /// Look up an element.
    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.state.elements.get(&id)
    }

    /// Grids in creation order.
    pub fn grids(&self) -> impl Iterator<Item = &GridSpec> {
        self.state.elements.values().filter_map(|e| match e {
            Element::Grid(g) => Some(g),
            Element::Level(_) => None,
        })
    }

    /// Levels in creation order.
    pub fn levels(&self) -> impl Iterator<Item = &LevelSpec> {
        self.state.elements.values().filter_map(|e| match e {
            Element::Level(l) => Some(l),
            Element::Grid(_) => None,
        })
    }

    /// Project information, once set.
    pub fn project_info(&self) -> Option<&ProjectInfo> {
        self.state.project.as_ref()
    }

    /// Total number of elements.
    pub fn len(&self) -> usize {
        self.state.elements.len()
    }

    /// `true` if the document holds no elements.
    pub fn is_empty(&self) -> bool {
        self.state.elements.is_empty()
    }

    /// `true` while a transaction is open.
    pub fn in_transaction(&self) -> bool {
        self.open.is_some()
    }

    /// Names of committed transactions, oldest first.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    fn require_open(&self) -> Result<(), HostError> {
        if self.open.is_none() {
            return Err(HostError::NoTransaction);
        }
        Ok(())
    }

    fn create(&mut self, element: Element) -> Result<ElementId, HostError> {
        self.require_open()?;
        if self
            .state
            .elements
            .values()
            .any(|e| e.same_kind(&element) && e.name() == element.name())
        {
            return Err(HostError::DuplicateName {
                name: element.name().to_string(),
            });
        }
        Ok(self.state.insert(element))
    }
}

impl State {
    fn insert(&mut self, element: Element) -> ElementId {
        let id = ElementId(self.next_id);
        self.next_id += 1;
        self.elements.insert(id, element);
        id
    }
}

impl LayoutDocument for MemoryDocument {
    fn begin(&mut self, name: &str) -> Result<(), HostError> {
        if let Some((open, _)) = &self.open {
            return Err(HostError::TransactionAlreadyOpen { name: open.clone() });
        }
        self.open = Some((name.to_string(), self.state.clone()));
        Ok(())
    }

    fn commit(&mut self) -> Result<(), HostError> {
        let (name, _) = self.open.take().ok_or(HostError::NoTransaction)?;
        self.history.push(name);
        Ok(())
    }

    fn rollback(&mut self) {
        if let Some((_, snapshot)) = self.open.take() {
            self.state = snapshot;
        }
    }

    fn set_project_info(&mut self, info: &ProjectInfo) -> Result<(), HostError> {
        self.require_open()?;
        self.state.project = Some(info.clone());
        Ok(())
    }

    fn create_grid(&mut self, grid: &GridSpec) -> Result<ElementId, HostError> {
        self.create(Element::Grid(grid.clone()))
    }

    fn level_ids(&self) -> Vec<ElementId> {
        self.state
            .elements
            .iter()
            .filter(|(_, e)| matches!(e, Element::Level(_)))
            .map(|(&id, _)| id)
            .collect()
    }

    fn delete_level(&mut self, id: ElementId) -> Result<(), HostError> {
        self.require_open()?;
        match self.state.elements.get(&id) {
            Some(Element::Level(_)) => {
                self.state.elements.shift_remove(&id);
                Ok(())
            }
            _ => Err(HostError::UnknownElement { id }),
        }
    }

    fn create_level(&mut self, level: &LevelSpec) -> Result<ElementId, HostError> {
        self.create(Element::Level(level.clone()))
    }
}
