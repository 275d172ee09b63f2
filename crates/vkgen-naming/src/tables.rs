//! The resolver's configuration value.

use std::collections::HashSet;

use crate::names::{camel_word_count, title_case_words};

/// Enums whose value names are historically irregular: compaction only
/// strips the universal prefix and title-cases the remaining words.
const COMPACTION_EXCEPTIONS: &[&str] = &["VkResult"];

/// Lookup tables threaded through the resolver: the known vendor tags and
/// the known handle type names, both taken from the loaded registry.
#[derive(Debug, Clone, Default)]
pub struct NameTables {
    /// Vendor tags sorted longest-first so suffix matching prefers the
    /// most specific tag.
    vendor_tags: Vec<String>,
    handle_names: HashSet<String>,
}

impl NameTables {
    pub fn new(
        vendor_tags: impl IntoIterator<Item = String>,
        handle_names: impl IntoIterator<Item = String>,
    ) -> Self {
        let mut vendor_tags: Vec<String> = vendor_tags.into_iter().collect();
        vendor_tags.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        Self {
            vendor_tags,
            handle_names: handle_names.into_iter().collect(),
        }
    }

    /// Longest vendor tag that is a suffix of the identifier.
    pub fn vendor_suffix(&self, identifier: &str) -> Option<&str> {
        self.vendor_tags
            .iter()
            .find(|tag| identifier.ends_with(tag.as_str()))
            .map(String::as_str)
    }

    /// Identifier stem with any trailing vendor tag removed.
    pub fn strip_vendor_suffix<'a>(&self, identifier: &'a str) -> &'a str {
        match self.vendor_suffix(identifier) {
            Some(tag) => {
                let stem = &identifier[..identifier.len() - tag.len()];
                stem.trim_end_matches('_')
            }
            None => identifier,
        }
    }

    pub fn is_handle(&self, type_name: &str) -> bool {
        self.handle_names.contains(type_name)
    }

    /// Compact a raw value name against its owning enum's name.
    ///
    /// `VK_STRUCTURE_TYPE_APPLICATION_INFO` under `VkStructureType`
    /// becomes `ApplicationInfo`; `VK_ACCESS_SHADER_READ_BIT` under
    /// `VkAccessFlags` becomes `ShaderRead`. Enums on the exception list
    /// keep all of their own words (`VK_ERROR_DEVICE_LOST` under
    /// `VkResult` becomes `ErrorDeviceLost`).
    pub fn enum_value_name(&self, enum_name: &str, value_name: &str) -> String {
        let stripped = value_name.strip_prefix("VK_").unwrap_or(value_name);

        if COMPACTION_EXCEPTIONS.contains(&enum_name) {
            return title_case_words(stripped.split('_'));
        }

        let mut words: Vec<&str> = stripped.split('_').filter(|w| !w.is_empty()).collect();

        // Leading words covered by the enum's own name, not counting the
        // vendor tag or the bit-container suffix.
        let stem = self.enum_stem(enum_name);
        let strip = camel_word_count(stem);
        if strip < words.len() {
            words.drain(..strip);
        }

        // Trailing vendor tag, then the `_BIT` marker.
        if let Some(last) = words.last() {
            if self.vendor_tags.iter().any(|t| t == last) {
                words.pop();
            }
        }
        if words.last() == Some(&"BIT") {
            words.pop();
        }

        let compacted = title_case_words(words.iter().copied());
        if compacted.is_empty() || compacted.starts_with(|c: char| c.is_ascii_digit()) {
            // Compaction would produce an invalid identifier; keep the
            // full word list instead.
            return title_case_words(stripped.split('_'));
        }
        compacted
    }

    /// Enum name minus the universal prefix, vendor tag, and the
    /// bit-container suffix (with any trailing width digits).
    fn enum_stem<'a>(&self, enum_name: &'a str) -> &'a str {
        let stem = enum_name.strip_prefix("Vk").unwrap_or(enum_name);
        let stem = self.strip_vendor_suffix(stem);
        match stem.find("FlagBits").or_else(|| stem.find("Flags")) {
            Some(i) => &stem[..i],
            None => stem,
        }
    }
}
