//! Draft → markdown generator.
//!
//! Section order is fixed: Professional Summary, Work History, Skills,
//! Education, Projects. A section is written only when its input is
//! non-empty. The personal-info header is never written; templates rebuild
//! it from the verified profile.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::markdown::bullets::normalize_description;
use crate::markdown::vocabulary::{bucket_for, SkillBucket};
use crate::models::draft::{
    non_blank, EducationItem, ExperienceItem, ProjectItem, ResumeDocument, SkillItem,
};

const CURRENT_ROLE_END: &str = "Present";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedMarkdown {
    pub markdown: String,
}

/// Serializes a draft into markdown. Output is byte-identical for identical
/// input; an empty draft yields an empty string.
pub fn generate_markdown(draft: &ResumeDocument) -> GeneratedMarkdown {
    let mut out = String::new();

    if let Some(summary) = non_blank(&draft.professional_summary) {
        out.push_str("## Professional Summary\n");
        out.push_str(summary.trim());
        out.push_str("\n\n");
    }

    if !draft.experience.is_empty() {
        out.push_str("## Work History\n");
        for item in &draft.experience {
            write_experience(&mut out, item);
        }
    }

    let skill_lines = skill_lines(&draft.skills);
    if !skill_lines.is_empty() {
        out.push_str("## Skills\n");
        for line in skill_lines {
            out.push_str(&line);
            out.push('\n');
        }
        out.push('\n');
    }

    if !draft.education.is_empty() {
        out.push_str("## Education\n");
        for item in &draft.education {
            write_education(&mut out, item);
        }
    }

    if !draft.projects.is_empty() {
        out.push_str("## Projects\n");
        for item in &draft.projects {
            write_project(&mut out, item);
        }
    }

    let markdown = out.trim_end().to_string();
    debug!("Generated {} bytes of markdown", markdown.len());
    GeneratedMarkdown { markdown }
}

fn field(value: &Option<String>) -> &str {
    value.as_deref().map(str::trim).unwrap_or("")
}

fn write_description(out: &mut String, description: &Option<String>) {
    if let Some(description) = non_blank(description) {
        for line in normalize_description(description) {
            out.push_str(&line);
            out.push('\n');
        }
    }
}

fn write_experience(out: &mut String, item: &ExperienceItem) {
    let end = if item.is_current {
        CURRENT_ROLE_END
    } else {
        field(&item.end_date)
    };
    out.push_str(&format!("### {}\n", field(&item.title)));
    out.push_str(&format!(
        "{} | {} - {}\n\n",
        field(&item.company),
        field(&item.start_date),
        end
    ));
    write_description(out, &item.description);
    out.push('\n');
}

fn write_education(out: &mut String, item: &EducationItem) {
    out.push_str(&format!("### {}\n", field(&item.degree)));
    out.push_str(&format!(
        "{} | {}\n",
        field(&item.school),
        field(&item.graduation_date)
    ));
    if let Some(description) = non_blank(&item.description) {
        out.push_str(&format!("- {}\n", description.trim()));
    }
    out.push('\n');
}

fn write_project(out: &mut String, item: &ProjectItem) {
    out.push_str(&format!("### {}\n", field(&item.title)));
    if let Some(link) = non_blank(&item.link) {
        let link = link.trim();
        out.push_str(&format!("Link: [{link}]({link})\n"));
    }
    out.push('\n');
    write_description(out, &item.description);
    out.push('\n');
}

/// One `- **Bucket:** a, b` line per non-empty bucket, in bucket order.
pub fn skill_lines(skills: &[SkillItem]) -> Vec<String> {
    SkillBucket::ALL
        .iter()
        .filter_map(|&bucket| {
            let members: Vec<&str> = skills
                .iter()
                .filter_map(SkillItem::label)
                .filter(|label| bucket_for(label) == bucket)
                .collect();
            if members.is_empty() {
                None
            } else {
                Some(format!("- **{}:** {}", bucket.heading(), members.join(", ")))
            }
        })
        .collect()
}
