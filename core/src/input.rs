use std::collections::HashMap;
use anyhow::{anyhow, Result};

/// Free text plus `key:value` fields, e.g. `Project sync venue:COM1 start:10:00`.
#[derive(Debug, PartialEq)]
pub struct ParsedInput {
    pub text: String,
    pub fields: HashMap<String, String>,
}

/// The text comes before the first field. Words after a field belong to
/// that field, so `notes:bring my laptop` keeps the whole phrase.
pub fn parse_args(args: &[String]) -> ParsedInput {
    let mut text_parts = Vec::new();
    let mut fields: HashMap<String, String> = HashMap::new();
    let mut current: Option<String> = None;

    for arg in args {
        if let Some((key, value)) = arg.split_once(':') {
            // "10:00" on its own is text, not a field
            if !key.is_empty() && key.chars().all(|c| c.is_ascii_alphabetic()) {
                let key = key.to_lowercase();
                fields.insert(key.clone(), value.to_string());
                current = Some(key);
                continue;
            }
        }
        match current.as_ref().and_then(|key| fields.get_mut(key)) {
            Some(value) => {
                if !value.is_empty() {
                    value.push(' ');
                }
                value.push_str(arg);
            }
            None => text_parts.push(arg.as_str()),
        }
    }

    ParsedInput {
        text: text_parts.join(" "),
        fields,
    }
}

pub fn expand_key(key: &str, candidates: &[&str]) -> Result<String> {
    // 1. Exact match
    if candidates.contains(&key) {
        return Ok(key.to_string());
    }

    // 2. Prefix match
    let matches: Vec<&str> = candidates
        .iter()
        .filter(|&&c| c.starts_with(key))
        .cloned()
        .collect();

    match matches.len() {
        1 => Ok(matches[0].to_string()),
        0 => Err(anyhow!("Unknown key: '{}'", key)),
        _ => Err(anyhow!("Ambiguous key: '{}' matches {:?}", key, matches)),
    }
}

impl ParsedInput {
    /// Rewrites abbreviated field keys to their full names.
    pub fn normalize(self, known_keys: &[&str]) -> Result<ParsedInput> {
        let mut fields = HashMap::new();
        for (key, value) in self.fields {
            fields.insert(expand_key(&key, known_keys)?, value);
        }
        Ok(ParsedInput { text: self.text, fields })
    }

    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(|v| v.as_str())
    }

    pub fn required(&self, key: &str) -> Result<&str> {
        self.field(key)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| anyhow!("Missing required field '{}:'", key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_simple() {
        let parsed = parse_args(&args(&["Project", "meeting", "venue:School", "start:10:00", "Date:19/04/2020"]));
        assert_eq!(parsed.text, "Project meeting");
        assert_eq!(parsed.field("venue"), Some("School"));
        assert_eq!(parsed.field("start"), Some("10:00"));
        assert_eq!(parsed.field("date"), Some("19/04/2020"));
    }

    #[test]
    fn test_bare_time_stays_text() {
        let parsed = parse_args(&args(&["Meet", "at", "10:00"]));
        assert_eq!(parsed.text, "Meet at 10:00");
        assert!(parsed.fields.is_empty());
    }

    #[test]
    fn test_words_after_a_field_extend_its_value() {
        let parsed = parse_args(&args(&["CS2103", "tutorial", "venue:COM1", "notes:bring", "my", "laptop", "start:10:00"]));
        assert_eq!(parsed.text, "CS2103 tutorial");
        assert_eq!(parsed.field("notes"), Some("bring my laptop"));
        assert_eq!(parsed.field("start"), Some("10:00"));

        let parsed = parse_args(&args(&["Report", "notes:", "first", "draft"]));
        assert_eq!(parsed.field("notes"), Some("first draft"));
    }

    #[test]
    fn test_expand_key() {
        let candidates = vec!["date", "day", "venue", "notes"];

        assert_eq!(expand_key("v", &candidates).unwrap(), "venue");
        assert_eq!(expand_key("dat", &candidates).unwrap(), "date");
        assert_eq!(expand_key("day", &candidates).unwrap(), "day");

        // Ambiguous
        assert!(expand_key("d", &candidates).is_err()); // matches date, day
        assert!(expand_key("da", &candidates).is_err());

        // Unknown
        assert!(expand_key("x", &candidates).is_err());
    }

    #[test]
    fn test_normalize_and_required() {
        let parsed = parse_args(&args(&["Report", "dat:today", "n:"]))
            .normalize(&["date", "time", "notes"])
            .unwrap();

        assert_eq!(parsed.required("date").unwrap(), "today");
        assert!(parsed.required("time").is_err());
        assert!(parsed.required("notes").is_err());
        assert_eq!(parsed.field("notes"), Some(""));

        assert!(parse_args(&args(&["x", "zzz:1"])).normalize(&["date"]).is_err());
    }
}
