//! Display settings section.

use serde::{Deserialize, Serialize};

pub const DEFAULT_THEME_COLOR: &str = "#38bdf8";
pub const DEFAULT_FONT_FAMILY: &str = "Roboto";
pub const DEFAULT_FONT_SIZE: &str = "11";

/// Per-form values, keyed by the resume's list sections.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerForm<T> {
    pub work_experiences: T,
    pub educations: T,
    pub projects: T,
    pub skills: T,
    pub custom: T,
}

/// Forms that can show bullet points (every form except work experiences).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulletForms {
    pub educations: bool,
    pub projects: bool,
    pub skills: bool,
    pub custom: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormKey {
    WorkExperiences,
    Educations,
    Projects,
    Skills,
    Custom,
}

/// Display settings as the editor currently expects them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub theme_color: String,
    pub font_family: String,
    pub font_size: String,
    pub document_size: String,
    pub form_to_show: PerForm<bool>,
    pub form_to_heading: PerForm<String>,
    pub forms_order: Vec<FormKey>,
    pub show_bullet_points: BulletForms,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme_color: DEFAULT_THEME_COLOR.to_string(),
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            font_size: DEFAULT_FONT_SIZE.to_string(),
            document_size: "Letter".to_string(),
            form_to_show: PerForm {
                work_experiences: true,
                educations: true,
                projects: true,
                skills: true,
                custom: false,
            },
            form_to_heading: PerForm {
                work_experiences: "WORK EXPERIENCE".to_string(),
                educations: "EDUCATION".to_string(),
                projects: "PROJECT".to_string(),
                skills: "SKILLS".to_string(),
                custom: "CUSTOM SECTION".to_string(),
            },
            forms_order: vec![
                FormKey::WorkExperiences,
                FormKey::Educations,
                FormKey::Projects,
                FormKey::Skills,
                FormKey::Custom,
            ],
            show_bullet_points: BulletForms {
                educations: true,
                projects: true,
                skills: true,
                custom: true,
            },
        }
    }
}
