//! Vocabulary tables shared by the parser and the generator.
//!
//! Section headers are recognised against `KNOWN_SECTIONS` (exact match) and
//! categorised against `SECTION_CATEGORIES` (substring match). Skills are
//! bucketed against `TECHNICAL_KEYWORDS` and `PROFESSIONAL_KEYWORDS`.

/// Lines consisting solely of one of these (any case, optional trailing
/// colon) are section headers.
pub const KNOWN_SECTIONS: &[&str] = &[
    "education",
    "experience",
    "work history",
    "employment",
    "skills",
    "projects",
    "summary",
    "professional summary",
    "profile",
    "contact",
    "languages",
    "certifications",
];

/// Where a parsed section's body ends up in `ParsedResume`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionCategory {
    Summary,
    Experience,
    Education,
    Skills,
    Projects,
}

/// Checked in order; the first category with a matching term wins, so
/// "Project Experience" lands in `Experience`.
pub const SECTION_CATEGORIES: &[(SectionCategory, &[&str])] = &[
    (SectionCategory::Summary, &["summary", "profile", "about"]),
    (
        SectionCategory::Experience,
        &["experience", "employment", "work history"],
    ),
    (SectionCategory::Education, &["education", "academic"]),
    (SectionCategory::Skills, &["skills", "technologies"]),
    (SectionCategory::Projects, &["project"]),
];

pub const TECHNICAL_KEYWORDS: &[&str] = &[
    "javascript",
    "typescript",
    "react",
    "angular",
    "vue",
    "node",
    "python",
    "java",
    "rust",
    "html",
    "css",
    "sql",
    "postgres",
    "mongodb",
    "graphql",
    "aws",
    "azure",
    "docker",
    "kubernetes",
    "linux",
    "git",
    "api",
    "agile",
    "devops",
    "cloud",
    "security",
    "machine learning",
];

pub const PROFESSIONAL_KEYWORDS: &[&str] = &[
    "leadership",
    "communication",
    "team",
    "management",
    "planning",
    "strategy",
    "mentoring",
    "negotiation",
    "problem",
    "critical",
    "creativity",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillBucket {
    Technical,
    Professional,
    Additional,
}

impl SkillBucket {
    pub const ALL: [SkillBucket; 3] = [
        SkillBucket::Technical,
        SkillBucket::Professional,
        SkillBucket::Additional,
    ];

    /// Bold label used on the generated skills line.
    pub fn heading(self) -> &'static str {
        match self {
            SkillBucket::Technical => "Technical",
            SkillBucket::Professional => "Professional",
            SkillBucket::Additional => "Additional Skills",
        }
    }
}

/// Lower-cases and strips one trailing colon.
fn normalize_header(text: &str) -> String {
    let lower = text.trim().to_lowercase();
    match lower.strip_suffix(':') {
        Some(stripped) => stripped.trim_end().to_string(),
        None => lower,
    }
}

/// Exact (case-insensitive, trailing-colon-tolerant) vocabulary match.
pub fn is_known_section(text: &str) -> bool {
    let normalized = normalize_header(text);
    KNOWN_SECTIONS.contains(&normalized.as_str())
}

/// Substring classification of a section title.
pub fn classify_section(title: &str) -> Option<SectionCategory> {
    let lower = title.to_lowercase();
    SECTION_CATEGORIES
        .iter()
        .find(|(_, terms)| terms.iter().any(|t| lower.contains(t)))
        .map(|(category, _)| *category)
}

pub fn bucket_for(skill: &str) -> SkillBucket {
    let lower = skill.to_lowercase();
    if TECHNICAL_KEYWORDS.iter().any(|k| lower.contains(k)) {
        SkillBucket::Technical
    } else if PROFESSIONAL_KEYWORDS.iter().any(|k| lower.contains(k)) {
        SkillBucket::Professional
    } else {
        SkillBucket::Additional
    }
}
