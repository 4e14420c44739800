//! Control bar tying the state container, document renderer and zoom together.

use crate::error::Result;
use crate::files::{self, DocumentRenderer, LoadOutcome, SaveReport, DEFAULT_EXTENSION};
use crate::schema::DefaultState;
use crate::state::StateContainer;
use crate::types::{DocumentSize, Section};
use crate::zoom::{LayoutMetrics, ZoomConfig, ZoomController};
use serde::Deserialize;
use std::path::Path;
use std::sync::Arc;

/// Control bar configuration.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ControlBarConfig {
    /// Base name of saved files. The state file gets `.json` appended.
    pub file_name: String,

    /// Extension a selected file must have to be loaded.
    pub accepted_extension: String,

    pub zoom: ZoomConfig,

    pub metrics: LayoutMetrics,
}

impl Default for ControlBarConfig {
    fn default() -> Self {
        Self {
            file_name: "Resume.pdf".to_string(),
            accepted_extension: DEFAULT_EXTENSION.to_string(),
            zoom: ZoomConfig::default(),
            metrics: LayoutMetrics::default(),
        }
    }
}

impl ControlBarConfig {
    /// Parse a JSON config, filling unspecified fields with defaults.
    ///
    /// Fails if the resulting zoom range is unusable.
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.zoom.validate()?;
        Ok(config)
    }
}

/// The editor's control bar: zoom slider, save and load.
pub struct ControlBar<R> {
    config: ControlBarConfig,
    container: Arc<dyn StateContainer>,
    defaults: Arc<DefaultState>,
    renderer: R,
    zoom: ZoomController,
}

impl<R: DocumentRenderer> ControlBar<R> {
    /// Create a control bar over a shared state container.
    pub fn new(config: ControlBarConfig, container: Arc<dyn StateContainer>, renderer: R) -> Self {
        let zoom = ZoomController::new(config.zoom, config.metrics);
        Self {
            config,
            container,
            defaults: Arc::new(DefaultState::current().clone()),
            renderer,
            zoom,
        }
    }

    /// Reconcile loads against other defaults than the current schema.
    pub fn with_defaults(mut self, defaults: Arc<DefaultState>) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn config(&self) -> &ControlBarConfig {
        &self.config
    }

    pub fn zoom(&self) -> &ZoomController {
        &self.zoom
    }

    /// Save the rendered document and state next to each other in `dir`.
    pub fn save(&self, dir: &Path) -> Result<SaveReport> {
        files::save(&*self.container, &self.renderer, dir, &self.config.file_name)
    }

    /// Load the user's file selection.
    pub fn load<P: AsRef<Path>>(&self, selected: &[P]) -> Result<LoadOutcome> {
        files::load(
            &*self.container,
            &self.defaults,
            selected,
            &self.config.accepted_extension,
        )
    }

    /// Slider moved. Turns autoscale off.
    pub fn set_scale(&mut self, value: f64) -> f64 {
        self.zoom.set_scale(value)
    }

    pub fn toggle_autoscale(&mut self) -> bool {
        self.zoom.toggle_autoscale()
    }

    /// Viewport resized; the page size comes from the current settings.
    pub fn on_viewport_resize(&mut self, viewport_height_px: f64) -> f64 {
        let size = self.document_size();
        self.zoom.on_viewport_resize(viewport_height_px, size)
    }

    /// Text next to the slider.
    pub fn scale_label(&self) -> String {
        self.zoom.label()
    }

    fn document_size(&self) -> DocumentSize {
        let state = self.container.get_state();
        let setting = state
            .section(Section::Settings)
            .get("documentSize")
            .and_then(|v| v.as_str());
        DocumentSize::from_setting(setting)
    }
}
