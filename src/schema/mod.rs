//! Current schema of the application state.
//!
//! The typed structs here define what a fresh editor starts with. Their
//! serialized form is the baseline that older snapshots are reconciled
//! against, so adding a field with a sensible `Default` is all it takes for
//! old saved files to pick it up on load.

mod resume;
mod settings;

pub use resume::{
    Custom, Education, FeaturedSkill, Project, Resume, ResumeProfile, Skills, WorkExperience,
    DEFAULT_SKILL_RATING, FEATURED_SKILL_SLOTS,
};
pub use settings::{
    BulletForms, FormKey, PerForm, Settings, DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE,
    DEFAULT_THEME_COLOR,
};

use crate::error::{Result, StateError};
use crate::types::Section;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::OnceLock;

/// Per-section defaults in their untyped form.
#[derive(Clone, Debug, PartialEq)]
pub struct DefaultState {
    pub resume: Value,
    pub settings: Value,
}

impl DefaultState {
    /// Build defaults from the typed schema.
    pub fn from_schema(resume: &Resume, settings: &Settings) -> Result<Self> {
        Ok(Self {
            resume: serde_json::to_value(resume)?,
            settings: serde_json::to_value(settings)?,
        })
    }

    /// Process-wide defaults for the current schema.
    pub fn current() -> &'static DefaultState {
        static CURRENT: OnceLock<DefaultState> = OnceLock::new();
        CURRENT.get_or_init(|| {
            DefaultState::from_schema(&Resume::default(), &Settings::default())
                .expect("default schema always serializes")
        })
    }

    /// Default value for one section.
    pub fn section(&self, section: Section) -> &Value {
        match section {
            Section::Resume => &self.resume,
            Section::Settings => &self.settings,
        }
    }
}

/// Check a reconciled resume section against the current schema.
pub fn decode_resume(value: &Value) -> Result<Resume> {
    decode(value)
}

/// Check a reconciled settings section against the current schema.
pub fn decode_settings(value: &Value) -> Result<Settings> {
    decode(value)
}

fn decode<T: DeserializeOwned>(value: &Value) -> Result<T> {
    serde_json::from_value(value.clone()).map_err(|e| StateError::Schema(e.to_string()))
}
