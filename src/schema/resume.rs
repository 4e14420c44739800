//! Resume content section.

use serde::{Deserialize, Serialize};

/// Number of featured skill slots in a fresh resume.
pub const FEATURED_SKILL_SLOTS: usize = 6;

/// Rating given to an empty featured skill slot.
pub const DEFAULT_SKILL_RATING: u8 = 4;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeProfile {
    pub name: String,
    pub summary: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub url: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkExperience {
    pub company: String,
    pub job_title: String,
    pub date: String,
    pub descriptions: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub school: String,
    pub degree: String,
    pub gpa: String,
    pub date: String,
    pub descriptions: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub project: String,
    pub date: String,
    pub descriptions: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturedSkill {
    pub skill: String,
    pub rating: u8,
}

impl Default for FeaturedSkill {
    fn default() -> Self {
        Self {
            skill: String::new(),
            rating: DEFAULT_SKILL_RATING,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skills {
    pub featured_skills: Vec<FeaturedSkill>,
    pub descriptions: Vec<String>,
}

impl Default for Skills {
    fn default() -> Self {
        Self {
            featured_skills: vec![FeaturedSkill::default(); FEATURED_SKILL_SLOTS],
            descriptions: Vec::new(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Custom {
    pub descriptions: Vec<String>,
}

/// Resume content as the editor currently expects it.
///
/// `Default` is the blank resume: one empty entry per list section.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resume {
    pub profile: ResumeProfile,
    pub work_experiences: Vec<WorkExperience>,
    pub educations: Vec<Education>,
    pub projects: Vec<Project>,
    pub skills: Skills,
    pub custom: Custom,
}

impl Default for Resume {
    fn default() -> Self {
        Self {
            profile: ResumeProfile::default(),
            work_experiences: vec![WorkExperience::default()],
            educations: vec![Education::default()],
            projects: vec![Project::default()],
            skills: Skills::default(),
            custom: Custom::default(),
        }
    }
}
