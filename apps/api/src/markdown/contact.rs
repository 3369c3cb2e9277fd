//! Contact extraction: pulls e-mail, phone and profile links out of the free
//! text under a résumé's name header.

use regex::Regex;

use crate::models::parsed::ContactDetails;

/// Phone candidates outside this digit range are dates, IDs or noise.
const MIN_PHONE_DIGITS: usize = 7;
const MAX_PHONE_DIGITS: usize = 15;

pub struct ContactExtractor {
    email_pattern: Regex,
    phone_pattern: Regex,
    link_pattern: Regex,
    year_range_pattern: Regex,
}

impl ContactExtractor {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            email_pattern: Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}")?,
            phone_pattern: Regex::new(r"\+?\d[\d\s().-]{5,}\d")?,
            link_pattern: Regex::new(
                r"(?i)\bhttps?://[^\s)\]>|,]+|\b(?:www\.)?(?:linkedin\.com|github\.com)/[^\s)\]>|,]+",
            )?,
            year_range_pattern: Regex::new(r"^(?:19|20)\d{2}\s*[-–]\s*(?:19|20)\d{2}$")?,
        })
    }

    pub fn extract(&self, raw: &str) -> ContactDetails {
        let email = self
            .email_pattern
            .find(raw)
            .map(|m| m.as_str().to_string());

        let without_email = self.email_pattern.replace_all(raw, " ");

        let mut links: Vec<String> = Vec::new();
        for m in self.link_pattern.find_iter(&without_email) {
            let link = m.as_str().trim_end_matches(['.', ';', ':']);
            let key = link_key(link);
            if !links.iter().any(|existing| link_key(existing) == key) {
                links.push(link.to_string());
            }
        }

        // Digits inside addresses and URLs never count towards a phone
        let scrubbed = self.link_pattern.replace_all(&without_email, " ");
        let phone = self
            .phone_pattern
            .find_iter(&scrubbed)
            .map(|m| m.as_str().trim())
            .find(|candidate| self.is_phone(candidate))
            .map(str::to_string);

        ContactDetails { email, phone, links }
    }

    fn is_phone(&self, candidate: &str) -> bool {
        let digits = candidate.chars().filter(char::is_ascii_digit).count();
        (MIN_PHONE_DIGITS..=MAX_PHONE_DIGITS).contains(&digits)
            && !self.year_range_pattern.is_match(candidate)
    }
}

/// Comparison key ignoring scheme, `www.` and a trailing slash.
fn link_key(link: &str) -> String {
    let lower = link.to_lowercase();
    let without_scheme = lower
        .strip_prefix("https://")
        .or_else(|| lower.strip_prefix("http://"))
        .unwrap_or(&lower);
    without_scheme
        .strip_prefix("www.")
        .unwrap_or(without_scheme)
        .trim_end_matches('/')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn extractor() -> ContactExtractor {
        ContactExtractor::new().unwrap()
    }

    #[test]
    fn test_extracts_pipe_separated_contact_line() {
        let details = extractor().extract(
            "jane.doe@example.com | +1 (555) 123-4567 | https://janedoe.dev | linkedin.com/in/janedoe",
        );
        assert_eq!(details.email.as_deref(), Some("jane.doe@example.com"));
        assert_eq!(details.phone.as_deref(), Some("+1 (555) 123-4567"));
        assert_eq!(
            details.links,
            vec!["https://janedoe.dev", "linkedin.com/in/janedoe"]
        );
    }

    #[test]
    fn test_markdown_link_duplicates_collapse() {
        let details =
            extractor().extract("[github.com/jane](https://github.com/jane/) · Lagos, Nigeria");
        assert_eq!(details.links, vec!["github.com/jane"]);
        assert_eq!(details.phone, None);
    }

    #[test]
    fn test_short_digit_runs_are_not_phones() {
        let details = extractor().extract("Apt 12-34, Berlin");
        assert_eq!(details.phone, None);
    }

    #[test]
    fn test_year_ranges_are_not_phones() {
        let e = extractor();
        assert_eq!(e.extract("Lagos | Open to work 2019 - 2024").phone, None);
        assert_eq!(e.extract("Berlin, 2015–2020").phone, None);
        assert_eq!(
            e.extract("2019 - 2024 | +44 20 7946 0958").phone.as_deref(),
            Some("+44 20 7946 0958")
        );
    }

    #[test]
    fn test_link_digits_are_not_a_phone() {
        let details = extractor().extract("linkedin.com/in/jane-doe-12345678 | Lagos");
        assert_eq!(details.phone, None);
        assert_eq!(details.links, vec!["linkedin.com/in/jane-doe-12345678"]);
    }

    #[test]
    fn test_email_digits_are_not_a_phone() {
        let details = extractor().extract("jane12345678@mail.com");
        assert_eq!(details.email.as_deref(), Some("jane12345678@mail.com"));
        assert_eq!(details.phone, None);
    }

    #[test]
    fn test_empty_raw_yields_default() {
        assert_eq!(extractor().extract(""), ContactDetails::default());
    }
}
