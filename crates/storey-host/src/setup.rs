//! The end-to-end project setup command.
//!
//! [`ProjectSetup::run`] collects parameters, generates the layout,
//! applies it to the document and confirms to the user. If parameter
//! collection is cancelled nothing is generated and the document is
//! not touched.

use storey_layout::{ConfigError, LayoutConfig, LayoutGenerator};

use crate::apply::{apply_setup, SetupReport};
use crate::document::{LayoutDocument, Notifier, ParameterSource};
use crate::error::SetupError;

/// Title of the confirmation shown after a successful setup.
pub const CONFIRMATION_TITLE: &str = "Project Setup";
/// Body of the confirmation shown after a successful setup.
pub const CONFIRMATION_MESSAGE: &str = "Project defaults have been applied.";

/// Whether collected parameters are checked before generation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ValidationPolicy {
    /// Accept degenerate input and generate whatever it implies.
    #[default]
    Permissive,
    /// Reject zero counts, non-positive spacing, and bad heights via
    /// [`LayoutRequest::validate`](storey_layout::LayoutRequest::validate).
    Strict,
}

/// Options for [`ProjectSetup`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SetupOptions {
    /// Request validation policy. Default: permissive.
    pub policy: ValidationPolicy,
}

/// Result of a setup run that did not fail.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SetupOutcome {
    /// The layout was applied and the user notified.
    Succeeded(SetupReport),
    /// The user aborted parameter collection; nothing was changed.
    Cancelled,
}

/// A validated, reusable project setup command.
#[derive(Clone, Debug)]
pub struct ProjectSetup {
    config: LayoutConfig,
    options: SetupOptions,
    generator: LayoutGenerator,
}

impl ProjectSetup {
    /// Validate `config` and build the command.
    pub fn new(config: LayoutConfig, options: SetupOptions) -> Result<Self, ConfigError> {
        config.validate()?;
        let generator = LayoutGenerator::new(&config);
        Ok(Self {
            config,
            options,
            generator,
        })
    }

    /// The configuration in use.
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Run the command once.
    pub fn run<S, D, N>(
        &self,
        source: &mut S,
        doc: &mut D,
        notifier: &mut N,
    ) -> Result<SetupOutcome, SetupError>
    where
        S: ParameterSource + ?Sized,
        D: LayoutDocument + ?Sized,
        N: Notifier + ?Sized,
    {
        let Some(form) = source.collect() else {
            tracing::info!("project setup cancelled");
            return Ok(SetupOutcome::Cancelled);
        };

        let request = form.to_request(&self.config);
        if self.options.policy == ValidationPolicy::Strict {
            request.validate()?;
        }
        tracing::debug!(
            grid_count_x = request.grid_count_x,
            grid_count_y = request.grid_count_y,
            levels = request.level_heights.len(),
            "generating layout"
        );

        let layout = self.generator.generate(&request);
        let report = apply_setup(doc, &self.config.project, &layout)?;
        notifier.notify(CONFIRMATION_TITLE, CONFIRMATION_MESSAGE);
        Ok(SetupOutcome::Succeeded(report))
    }
}

impl Default for ProjectSetup {
    fn default() -> Self {
        let config = LayoutConfig::default();
        Self {
            generator: LayoutGenerator::new(&config),
            config,
            options: SetupOptions::default(),
        }
    }
}
