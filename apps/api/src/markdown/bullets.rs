//! Bullet handling in both directions: splitting parsed section text into
//! list items, and normalizing free-form descriptions into markdown bullets.

use crate::models::parsed::SectionBody;

const BULLET_MARKERS: [&str; 2] = ["- ", "* "];

fn bullet_content(line: &str) -> Option<&str> {
    BULLET_MARKERS
        .iter()
        .find_map(|marker| line.strip_prefix(marker))
}

/// Splits section text into list items.
///
/// If any line starts with `- ` or `* `, the text is cut before every such
/// line, each fragment loses its own marker and is trimmed, and empty
/// fragments are dropped. Text before the first bullet becomes the first
/// item. Without any bullet line the trimmed text is returned as `Raw`.
pub fn parse_list_items(text: &str) -> SectionBody {
    let text = text.trim();
    if !text.lines().any(|line| bullet_content(line).is_some()) {
        return SectionBody::Raw(text.to_string());
    }

    let mut fragments: Vec<String> = Vec::new();
    let mut current = String::new();
    for (idx, line) in text.lines().enumerate() {
        match bullet_content(line) {
            Some(content) => {
                if idx > 0 {
                    fragments.push(std::mem::take(&mut current));
                }
                current.push_str(content);
            }
            None => {
                if idx > 0 {
                    current.push('\n');
                }
                current.push_str(line);
            }
        }
    }
    fragments.push(current);

    SectionBody::Bulleted(
        fragments
            .into_iter()
            .map(|f| f.trim().to_string())
            .filter(|f| !f.is_empty())
            .collect(),
    )
}

/// Turns a free-form description into markdown bullet lines.
///
/// A newline is inserted before every `•` so inline bullets get their own
/// line. Blank lines and bare `-`/`•` markers are dropped; lines already
/// starting with `-` or `•` are kept as they are, anything else gets a `- `
/// prefix.
pub fn normalize_description(description: &str) -> Vec<String> {
    description
        .replace('•', "\n•")
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && *line != "-" && *line != "•")
        .map(|line| {
            if line.starts_with('-') || line.starts_with('•') {
                line.to_string()
            } else {
                format!("- {line}")
            }
        })
        .collect()
}
