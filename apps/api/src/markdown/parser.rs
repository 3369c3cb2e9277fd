//! Markdown résumé parser. Turns loosely structured markdown into a
//! `ParsedResume`.
//!
//! Single pass over lines. Headers are ATX headings (`#`..`###`), short
//! bold-only lines, or bare known-section names. The first header that is not
//! a known section name is taken as the owner's name.

use std::collections::BTreeMap;

use regex::Regex;
use tracing::debug;

use crate::markdown::bullets::parse_list_items;
use crate::markdown::contact::ContactExtractor;
use crate::markdown::vocabulary::{classify_section, is_known_section, SectionCategory};
use crate::models::parsed::{ParsedResume, PersonalDetails};

/// Bold-only lines at or above this trimmed length are body text.
const MAX_BOLD_HEADER_LEN: usize = 40;

/// Title of the accumulator that collects lines before the first header.
const PREAMBLE_TITLE: &str = "Header";

#[derive(Debug, PartialEq)]
enum SectionKind {
    Preamble,
    PersonalDetails { name: String },
    Titled(String),
}

#[derive(Debug)]
struct RawSection {
    kind: SectionKind,
    lines: Vec<String>,
}

impl RawSection {
    fn new(kind: SectionKind) -> Self {
        Self {
            kind,
            lines: Vec::new(),
        }
    }

    fn has_content(&self) -> bool {
        self.lines.iter().any(|l| !l.trim().is_empty())
    }

    fn text(&self) -> String {
        self.lines.join("\n").trim().to_string()
    }

    /// Closed sections are kept when they hold the name or saw any line at
    /// all, blank ones included. The preamble needs non-blank text.
    fn worth_keeping(&self) -> bool {
        match self.kind {
            SectionKind::Preamble => self.has_content(),
            SectionKind::PersonalDetails { .. } => true,
            SectionKind::Titled(_) => !self.lines.is_empty(),
        }
    }
}

pub struct MarkdownResumeParser {
    heading_pattern: Regex,
    bold_pattern: Regex,
    contact: ContactExtractor,
}

impl MarkdownResumeParser {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            heading_pattern: Regex::new(r"^#{1,3}\s+(.+)$")?,
            bold_pattern: Regex::new(r"^\*\*([^*](?:.*?[^*])?)\*\*$")?,
            contact: ContactExtractor::new()?,
        })
    }

    /// Parses a markdown résumé. Absent or blank input yields `None`; any
    /// other input yields a best-effort result and never fails.
    pub fn parse(&self, markdown: Option<&str>) -> Option<ParsedResume> {
        let markdown = markdown.filter(|m| !m.trim().is_empty())?;
        let sections = self.split_sections(markdown);
        let parsed = self.assemble(sections);
        debug!(
            "Parsed résumé: name={:?}, {} extra sections",
            parsed.personal_details.name,
            parsed.sections.len()
        );
        Some(parsed)
    }

    /// Returns the header text if the line is a section header.
    pub fn header_text(&self, line: &str) -> Option<String> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return None;
        }

        if let Some(caps) = self.heading_pattern.captures(trimmed) {
            return Some(caps[1].trim().to_string());
        }

        if trimmed.chars().count() < MAX_BOLD_HEADER_LEN {
            if let Some(caps) = self.bold_pattern.captures(trimmed) {
                if !caps[1].contains("**") {
                    return Some(caps[1].trim().to_string());
                }
            }
        }

        if is_known_section(trimmed) {
            let text = trimmed.strip_suffix(':').unwrap_or(trimmed).trim_end();
            return Some(text.to_string());
        }

        None
    }

    fn split_sections(&self, markdown: &str) -> Vec<RawSection> {
        let mut closed: Vec<RawSection> = Vec::new();
        let mut current = RawSection::new(SectionKind::Preamble);
        let mut name_taken = false;

        for line in markdown.lines() {
            let Some(header) = self.header_text(line) else {
                current.lines.push(line.to_string());
                continue;
            };

            // Only the very first header may name the owner.
            let kind = if !name_taken && !is_known_section(&header) {
                SectionKind::PersonalDetails { name: header }
            } else {
                SectionKind::Titled(header)
            };
            name_taken = true;

            let previous = std::mem::replace(&mut current, RawSection::new(kind));
            if previous.worth_keeping() {
                closed.push(previous);
            }
        }

        if current.kind != SectionKind::Preamble || current.has_content() {
            closed.push(current);
        }
        closed
    }

    fn assemble(&self, sections: Vec<RawSection>) -> ParsedResume {
        let mut parsed = ParsedResume::default();
        let mut by_category: Vec<(SectionCategory, String)> = Vec::new();
        let mut generic: BTreeMap<String, String> = BTreeMap::new();

        for section in sections {
            let text = section.text();
            let title = match section.kind {
                SectionKind::PersonalDetails { name } => {
                    parsed.personal_details = PersonalDetails {
                        name,
                        contact: self.contact.extract(&text),
                        raw: text,
                    };
                    continue;
                }
                SectionKind::Preamble => PREAMBLE_TITLE.to_string(),
                SectionKind::Titled(title) => title,
            };

            match classify_section(&title) {
                Some(category) => append_text(&mut by_category, category, text),
                None => {
                    let slot = generic.entry(title).or_default();
                    join_into(slot, &text);
                }
            }
        }

        for (category, text) in by_category {
            match category {
                SectionCategory::Summary => parsed.summary = text,
                SectionCategory::Experience => parsed.experience = parse_list_items(&text),
                SectionCategory::Education => parsed.education = parse_list_items(&text),
                SectionCategory::Skills => parsed.skills = parse_list_items(&text),
                SectionCategory::Projects => parsed.projects = parse_list_items(&text),
            }
        }

        parsed.sections = generic
            .into_iter()
            .map(|(title, text)| (title, parse_list_items(&text)))
            .collect();
        parsed
    }
}

fn append_text(
    slots: &mut Vec<(SectionCategory, String)>,
    category: SectionCategory,
    text: String,
) {
    match slots.iter_mut().find(|(c, _)| *c == category) {
        Some((_, existing)) => join_into(existing, &text),
        None => slots.push((category, text)),
    }
}

/// Repeated sections concatenate; empty bodies add nothing.
fn join_into(existing: &mut String, text: &str) {
    if text.is_empty() {
        return;
    }
    if !existing.is_empty() {
        existing.push('\n');
    }
    existing.push_str(text);
}
