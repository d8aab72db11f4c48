//! In-memory document buffer and the text-surgery operations on it.
//!
//! A [`Document`] is the full file content as one string. Nothing here
//! understands the TypeScript/JSON structure of the data module; removal is
//! plain pattern matching and substring replacement, so correctness depends
//! on the entry pattern matching one coherent record per identifier.

use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

/// First `"name"` value inside a matched entry, for reporting only.
static NAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r#""name":\s*"([^"]+)""#).unwrap());

/// First `"city"` value inside a matched entry, for reporting only.
static CITY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r#""city":\s*"([^"]+)""#).unwrap());

/// A comma pair separated only by whitespace, left behind by a removal.
static DOUBLE_COMMA_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r",\s*,").unwrap());

/// Diagnostic fields recovered from a removed entry's text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovedEntry {
    pub name: String,
    pub city: String,
}

/// The full file content, edited as plain text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    content: String,
}

impl Document {
    pub fn new(content: impl Into<String>) -> Self {
        Document {
            content: content.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.content
    }

    pub fn into_string(self) -> String {
        self.content
    }

    /// Cuts the first entry whose `"id"` field equals `id` out of the buffer.
    ///
    /// The matched span runs from an optional leading comma through the
    /// entry's closing brace plus any trailing comma and whitespace. When the
    /// span carries a comma on both sides, a single comma is written back so
    /// the neighboring entries stay separated. Returns the name and city
    /// recovered from the removed text, or `None` when no entry matches.
    pub fn remove_entry(&mut self, id: &str) -> Result<Option<RemovedEntry>, regex::Error> {
        let pattern = format!(
            r#"(?s),?\s*\{{\s*"id":\s*"{}".*?\}},?\s*"#,
            regex::escape(id)
        );
        let entry_re = Regex::new(&pattern)?;

        let entry = match entry_re.find(&self.content) {
            Some(m) => m.as_str().to_string(),
            None => return Ok(None),
        };

        let name = capture_or_unknown(&NAME_RE, &entry);
        let city = capture_or_unknown(&CITY_RE, &entry);

        let trimmed = entry.trim();
        if trimmed.starts_with(',') && trimmed.ends_with(',') {
            // Both neighbors' commas landed in the span; keep one so the
            // surrounding entries stay comma-separated.
            self.content = self.content.replacen(entry.as_str(), ",", 1);
        } else if trimmed.starts_with(',') || trimmed.ends_with(',') {
            self.content = self.content.replacen(entry.as_str(), "", 1);
        } else {
            // Neither comma landed in the span; probe for an adjacent one
            // before falling back to the bare text. Each step only runs if
            // the previous attempt left the buffer unchanged.
            let before = self.content.clone();
            self.content = self.content.replacen(&format!("{},", entry), "", 1);
            if self.content == before {
                self.content = self.content.replacen(&format!(",{}", entry), "", 1);
            }
            if self.content == before {
                self.content = self.content.replacen(entry.as_str(), "", 1);
            }
        }

        Ok(Some(RemovedEntry { name, city }))
    }

    /// Collapses comma runs left behind by removals.
    ///
    /// Repeats until no `,<ws>,` pair remains, so a triple comma does not
    /// survive as a double.
    pub fn collapse_double_commas(&mut self) {
        loop {
            match DOUBLE_COMMA_RE.replace_all(&self.content, ",") {
                Cow::Borrowed(_) => break,
                Cow::Owned(collapsed) => self.content = collapsed,
            }
        }
    }
}

fn capture_or_unknown(re: &Regex, text: &str) -> String {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| "Unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn parks_module(entries: &[&str]) -> String {
        format!(
            "import {{ TrampolinePark }} from '../types/park';\n\n\
             export const texasParks: TrampolinePark[] = [\n{}\n];\n",
            entries.join(",\n")
        )
    }

    fn entry(id: &str, name: &str, city: &str) -> String {
        format!(
            "  {{\n    \"id\": \"{}\",\n    \"name\": \"{}\",\n    \"city\": \"{}\"\n  }}",
            id, name, city
        )
    }

    #[test]
    fn removes_middle_entry_and_keeps_one_separating_comma() {
        let a = entry("park-a", "Alpha Air", "Austin");
        let b = entry("park-b", "Bounce Barn", "Boerne");
        let c = entry("park-c", "Cosmic Jump", "Corpus Christi");
        let mut doc = Document::new(parks_module(&[&a, &b, &c]));

        let removed = doc.remove_entry("park-b").unwrap().unwrap();
        doc.collapse_double_commas();

        assert_eq!(removed.name, "Bounce Barn");
        assert_eq!(removed.city, "Boerne");
        assert!(!doc.as_str().contains("park-b"));
        assert!(doc.as_str().contains("park-a"));
        assert!(doc.as_str().contains("park-c"));

        // A and C must be joined by exactly one comma.
        let between = doc
            .as_str()
            .split("\"Austin\"")
            .nth(1)
            .unwrap()
            .split("\"id\": \"park-c\"")
            .next()
            .unwrap();
        assert_eq!(between.matches(',').count(), 1);
    }

    #[rstest]
    #[case::first("park-a")]
    #[case::middle("park-b")]
    #[case::last("park-c")]
    fn removed_id_is_gone_and_neighbors_survive(#[case] target: &str) {
        let a = entry("park-a", "Alpha Air", "Austin");
        let b = entry("park-b", "Bounce Barn", "Boerne");
        let c = entry("park-c", "Cosmic Jump", "Corpus Christi");
        let mut doc = Document::new(parks_module(&[&a, &b, &c]));

        assert!(doc.remove_entry(target).unwrap().is_some());
        doc.collapse_double_commas();

        assert!(!doc.as_str().contains(target));
        for survivor in ["park-a", "park-b", "park-c"]
            .iter()
            .filter(|id| **id != target)
        {
            assert!(doc.as_str().contains(*survivor), "{} missing", survivor);
        }
    }

    #[test]
    fn missing_id_leaves_document_untouched() {
        let a = entry("park-a", "Alpha Air", "Austin");
        let mut doc = Document::new(parks_module(&[&a]));
        let original = doc.clone();

        assert!(doc.remove_entry("no-such-id").unwrap().is_none());
        assert_eq!(doc, original);
    }

    #[test]
    fn second_removal_of_same_id_finds_nothing() {
        let a = entry("park-a", "Alpha Air", "Austin");
        let b = entry("park-b", "Bounce Barn", "Boerne");
        let mut doc = Document::new(parks_module(&[&a, &b]));

        assert!(doc.remove_entry("park-b").unwrap().is_some());
        doc.collapse_double_commas();
        let after_first = doc.clone();

        assert!(doc.remove_entry("park-b").unwrap().is_none());
        doc.collapse_double_commas();
        assert_eq!(doc, after_first);
    }

    #[test]
    fn name_and_city_default_to_unknown() {
        let bare = "  {\n    \"id\": \"park-x\"\n  }";
        let mut doc = Document::new(parks_module(&[bare]));

        let removed = doc.remove_entry("park-x").unwrap().unwrap();
        assert_eq!(removed.name, "Unknown");
        assert_eq!(removed.city, "Unknown");
    }

    #[test]
    fn regex_metacharacters_in_id_are_escaped() {
        let odd = entry("parkXaab", "Edge Case", "El Paso");
        let mut doc = Document::new(parks_module(&[&odd]));

        // Unescaped, `park.a+b` would match `parkXaab`. It must not.
        assert!(doc.remove_entry("park.a+b").unwrap().is_none());
        assert!(doc.remove_entry("parkXaab").unwrap().is_some());
    }

    #[test]
    fn bare_entry_without_adjacent_commas_is_removed() {
        let mut doc = Document::new("{\n  \"id\": \"solo\",\n  \"name\": \"Solo\"\n}");
        assert!(doc.remove_entry("solo").unwrap().is_some());
        assert!(!doc.as_str().contains("solo"));
    }

    #[rstest]
    #[case(", ,", ",")]
    #[case(",\n  ,", ",")]
    #[case(", , ,", ",")]
    #[case(",x,", ",x,")]
    fn double_comma_collapse(#[case] input: &str, #[case] expected: &str) {
        let mut doc = Document::new(input);
        doc.collapse_double_commas();
        assert_eq!(doc.as_str(), expected);
    }

    #[test]
    fn no_double_commas_after_removing_both_targets() {
        let a = entry("park-a", "Alpha Air", "Austin");
        let b = entry("park-b", "Bounce Barn", "Boerne");
        let c = entry("park-c", "Cosmic Jump", "Corpus Christi");
        let d = entry("park-d", "Drop Zone", "Dallas");
        let mut doc = Document::new(parks_module(&[&a, &b, &c, &d]));

        assert!(doc.remove_entry("park-b").unwrap().is_some());
        assert!(doc.remove_entry("park-c").unwrap().is_some());
        doc.collapse_double_commas();

        assert!(!DOUBLE_COMMA_RE.is_match(doc.as_str()));
        assert!(doc.as_str().contains("park-a"));
        assert!(doc.as_str().contains("park-d"));
    }
}
