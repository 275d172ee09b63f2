//! Word-level name conversions.

use heck::ToUpperCamelCase;

/// Struct field names that carry structural meaning and must survive
/// conversion untouched: the type-tag field and the extension-chain
/// pointer field.
const SENTINEL_FIELDS: &[&str] = &["sType", "pNext"];

/// Convert a raw struct-field or parameter name to its output form.
///
/// Strips the registry's pointer notation prefixes (`p`, `pp`, `pfn`,
/// `s`) and upper-cases the first letter. Sentinel fields pass through
/// unchanged.
pub fn field_name(raw: &str) -> String {
    if SENTINEL_FIELDS.contains(&raw) {
        return raw.to_string();
    }
    let stripped = strip_notation_prefix(raw);
    let mut chars = stripped.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn strip_notation_prefix(raw: &str) -> &str {
    for prefix in ["pfn", "pp", "p", "s"] {
        if let Some(rest) = raw.strip_prefix(prefix) {
            if rest.starts_with(|c: char| c.is_ascii_uppercase()) {
                return rest;
            }
        }
    }
    raw
}

/// Join underscore-separated registry words in title case:
/// `["SHADER", "READ"]` → `ShaderRead`.
pub fn title_case_words<'a>(words: impl Iterator<Item = &'a str>) -> String {
    let mut out = String::new();
    for word in words {
        if word.is_empty() {
            continue;
        }
        out.push_str(&word.to_lowercase().to_upper_camel_case());
    }
    out
}

/// Number of camel-case words in an identifier stem
/// (`StructureType` → 2, `Access` → 1).
pub(crate) fn camel_word_count(stem: &str) -> usize {
    let mut count = 0;
    let mut prev_upper = false;
    for c in stem.chars() {
        if c.is_ascii_uppercase() {
            if !prev_upper {
                count += 1;
            }
            prev_upper = true;
        } else {
            prev_upper = false;
        }
    }
    count
}
