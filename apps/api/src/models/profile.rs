use serde::{Deserialize, Serialize};

/// Returns the field's text when it holds something other than whitespace.
pub fn filled(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.trim().is_empty())
}

/// The CV content produced by the data-entry surface.
///
/// Every text field is optional free text and every list may be empty. The
/// engine reads a `Profile` but never mutates it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    pub personal_info: PersonalInfo,
    #[serde(alias = "professionalSummary")]
    pub summary: Option<String>,
    pub experiences: Vec<Experience>,
    pub education: Vec<Education>,
    pub skills: Vec<Skill>,
    pub languages: Vec<LanguageSkill>,
    pub interests: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub linkedin: Option<String>,
    /// Collected by the form but not part of the contact line.
    pub github: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Experience {
    pub job_title: Option<String>,
    pub company: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Education {
    pub degree: Option<String>,
    pub institution: Option<String>,
    pub year: Option<String>,
}

/// A skill and its level. The level is stored in the CV's working language
/// (e.g. "Avancé") and rendered verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Skill {
    pub name: Option<String>,
    pub level: Option<String>,
}

/// A spoken language and its CEFR level (A1..C2, or Native).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LanguageSkill {
    pub name: Option<String>,
    pub level: Option<String>,
}

impl Experience {
    pub fn is_blank(&self) -> bool {
        [
            &self.job_title,
            &self.company,
            &self.start_date,
            &self.end_date,
            &self.description,
        ]
        .into_iter()
        .all(|f| filled(f).is_none())
    }
}

impl Education {
    pub fn is_blank(&self) -> bool {
        [&self.degree, &self.institution, &self.year]
            .into_iter()
            .all(|f| filled(f).is_none())
    }
}

impl Skill {
    pub fn is_blank(&self) -> bool {
        filled(&self.name).is_none() && filled(&self.level).is_none()
    }
}

impl LanguageSkill {
    pub fn is_blank(&self) -> bool {
        filled(&self.name).is_none() && filled(&self.level).is_none()
    }
}
