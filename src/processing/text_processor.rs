//! Shared line and token helpers used by the section parsers

use regex::Regex;

/// List-item markers stripped from the start of a line
pub const BULLET_GLYPHS: [char; 3] = ['•', '-', '*'];

pub struct TextProcessor {
    blank_line_regex: Regex,
    bullet_split_regex: Regex,
}

impl Default for TextProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextProcessor {
    pub fn new() -> Self {
        let blank_line_regex = Regex::new(r"\n\s*\n+").expect("Invalid blank line regex");
        let bullet_split_regex = Regex::new(r"[\n•\-\*]+").expect("Invalid bullet split regex");

        Self {
            blank_line_regex,
            bullet_split_regex,
        }
    }

    /// Split on runs of blank lines, dropping blocks that are empty after trimming
    pub fn split_blocks<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.blank_line_regex
            .split(text)
            .map(str::trim)
            .filter(|block| !block.is_empty())
            .collect()
    }

    /// Split on runs of newlines and bullet glyphs (hyphens and asterisks included)
    pub fn split_bullets(&self, text: &str) -> Vec<String> {
        self.bullet_split_regex
            .split(text)
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Remove one leading bullet glyph and the whitespace around it
pub fn strip_bullet(line: &str) -> &str {
    let line = line.trim();
    match line.strip_prefix(&BULLET_GLYPHS[..]) {
        Some(rest) => rest.trim(),
        None => line,
    }
}

pub fn first_non_empty_line(text: &str) -> Option<&str> {
    text.lines().map(str::trim).find(|line| !line.is_empty())
}

/// Split once on the first comma, trimming both halves
pub fn split_first_comma(line: &str) -> Option<(&str, &str)> {
    line.split_once(',').map(|(head, tail)| (head.trim(), tail.trim()))
}

pub fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_blocks() {
        let processor = TextProcessor::new();
        let blocks = processor.split_blocks("Acme\nEngineer\n\n  \n\nGlobex\nAnalyst\n\n");
        assert_eq!(blocks, vec!["Acme\nEngineer", "Globex\nAnalyst"]);
        assert!(processor.split_blocks("\n\n").is_empty());
    }

    #[test]
    fn test_split_bullets() {
        let processor = TextProcessor::new();
        let items = processor.split_bullets("• AWS Certified\n- CKA\n\n* PMP");
        assert_eq!(items, vec!["AWS Certified", "CKA", "PMP"]);
    }

    #[test]
    fn test_strip_bullet() {
        assert_eq!(strip_bullet("• Shipped X"), "Shipped X");
        assert_eq!(strip_bullet("- Shipped X"), "Shipped X");
        assert_eq!(strip_bullet("* Shipped X"), "Shipped X");
        assert_eq!(strip_bullet("Shipped X"), "Shipped X");
        assert_eq!(strip_bullet("-- Double"), "- Double");
    }

    #[test]
    fn test_line_helpers() {
        assert_eq!(first_non_empty_line("\n  \n Jane Doe \nDev"), Some("Jane Doe"));
        assert_eq!(first_non_empty_line("   "), None);
        assert_eq!(split_first_comma("Acme Corp, New York, NY"), Some(("Acme Corp", "New York, NY")));
        assert_eq!(split_first_comma("Acme Corp"), None);
        assert_eq!(non_empty("  "), None);
        assert_eq!(non_empty(" NYC "), Some("NYC".to_string()));
    }
}
