use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Structured résumé form data as submitted by the editor, prior to markdown
/// serialization. Every field is optional on the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeDocument {
    /// Identity fields owned by the caller. Never rendered into markdown:
    /// templates rebuild the header from the verified profile instead.
    pub personal_info: Map<String, Value>,
    pub professional_summary: Option<String>,
    pub experience: Vec<ExperienceItem>,
    pub education: Vec<EducationItem>,
    pub skills: Vec<SkillItem>,
    pub projects: Vec<ProjectItem>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceItem {
    pub title: Option<String>,
    pub company: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub is_current: bool,
    /// Free text; may already contain `-` or `•` bullets.
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationItem {
    pub degree: Option<String>,
    pub school: Option<String>,
    pub graduation_date: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectItem {
    pub title: Option<String>,
    pub link: Option<String>,
    pub description: Option<String>,
}

/// A skill is either a bare label or a record carrying it in `type` or `name`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SkillItem {
    Label(String),
    Record {
        #[serde(default, rename = "type")]
        kind: Option<String>,
        #[serde(default)]
        name: Option<String>,
    },
}

impl SkillItem {
    /// The display label, preferring `type` over `name` for records.
    /// Blank labels yield `None`.
    pub fn label(&self) -> Option<&str> {
        let raw = match self {
            SkillItem::Label(s) => Some(s.as_str()),
            SkillItem::Record { kind, name } => non_blank(kind).or_else(|| non_blank(name)),
        };
        raw.map(str::trim).filter(|s| !s.is_empty())
    }
}

impl From<&str> for SkillItem {
    fn from(label: &str) -> Self {
        SkillItem::Label(label.to_string())
    }
}

/// Treats `None`, `""` and whitespace-only values alike.
pub fn non_blank(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_deserializes_camel_case_fields() {
        let json = r#"{
            "personalInfo": {"firstName": "Jane", "lastName": "Doe"},
            "professionalSummary": "Engineer.",
            "experience": [
                {"title": "Dev", "company": "Acme", "startDate": "2020", "isCurrent": true}
            ],
            "education": [{"degree": "BSc", "school": "MIT", "graduationDate": "2019"}],
            "skills": ["Rust", {"type": "Leadership"}, {"name": "Chess"}],
            "projects": [{"title": "Site", "link": null}]
        }"#;

        let draft: ResumeDocument = serde_json::from_str(json).unwrap();
        assert_eq!(draft.personal_info["firstName"], "Jane");
        assert_eq!(draft.professional_summary.as_deref(), Some("Engineer."));
        assert!(draft.experience[0].is_current);
        assert_eq!(draft.experience[0].start_date.as_deref(), Some("2020"));
        assert!(draft.experience[0].end_date.is_none());
        assert_eq!(draft.education[0].graduation_date.as_deref(), Some("2019"));
        assert_eq!(draft.skills.len(), 3);
        assert!(draft.projects[0].link.is_none());
    }

    #[test]
    fn test_empty_object_is_an_empty_draft() {
        let draft: ResumeDocument = serde_json::from_str("{}").unwrap();
        assert!(draft.experience.is_empty());
        assert!(draft.skills.is_empty());
        assert!(draft.professional_summary.is_none());
    }

    #[test]
    fn test_skill_label_prefers_type_over_name() {
        let skill = SkillItem::Record {
            kind: Some("Docker".to_string()),
            name: Some("Containers".to_string()),
        };
        assert_eq!(skill.label(), Some("Docker"));

        let skill = SkillItem::Record {
            kind: Some("  ".to_string()),
            name: Some("Containers".to_string()),
        };
        assert_eq!(skill.label(), Some("Containers"));
    }

    #[test]
    fn test_blank_skill_label_is_none() {
        assert_eq!(SkillItem::from("   ").label(), None);
        let empty = SkillItem::Record {
            kind: None,
            name: None,
        };
        assert_eq!(empty.label(), None);
    }

    #[test]
    fn test_non_blank_filters_whitespace() {
        assert_eq!(non_blank(&Some(" ".to_string())), None);
        assert_eq!(non_blank(&None), None);
        assert_eq!(non_blank(&Some("x".to_string())), Some("x"));
    }
}
