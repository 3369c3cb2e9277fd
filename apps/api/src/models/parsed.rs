use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Body of a parsed section: a bullet list when the text carried `-`/`*`
/// markers, otherwise the raw trimmed text.
///
/// Serialized untagged, so the wire shape is either a JSON array of strings
/// or a plain string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SectionBody {
    Bulleted(Vec<String>),
    Raw(String),
}

impl Default for SectionBody {
    fn default() -> Self {
        SectionBody::Raw(String::new())
    }
}

/// Contact details picked out of the lines under the name header.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactDetails {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub links: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalDetails {
    /// Text of the first non-vocabulary header, usually the owner's name.
    pub name: String,
    /// Trimmed text between the name header and the next header.
    pub raw: String,
    pub contact: ContactDetails,
}

/// Normalized result of parsing a markdown résumé.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedResume {
    pub personal_details: PersonalDetails,
    pub summary: String,
    pub experience: SectionBody,
    pub education: SectionBody,
    pub skills: SectionBody,
    pub projects: SectionBody,
    /// Sections whose titles match no known category, keyed by literal title.
    pub sections: BTreeMap<String, SectionBody>,
}
