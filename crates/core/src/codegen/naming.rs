//! Export Names

use rustc_hash::FxHashMap;

const SUFFIX: &str = "Product";
const FALLBACK: &str = "unnamed";

/// Converts a display name into a camel-cased identifier.
///
/// Words are separated by whitespace, hyphens and underscores. Every word is
/// lowercased and every word after the first is capitalized. Characters that
/// cannot appear in an identifier are dropped.
pub fn camel_case(name: &str) -> String {
    let words = name
        .split(|c: char| c.is_whitespace() || c == '-' || c == '_')
        .map(|word| {
            word.chars()
                .filter(|c| c.is_alphabetic() || c.is_ascii_digit() || *c == '$')
                .flat_map(char::to_lowercase)
                .collect::<String>()
        })
        .filter(|word| !word.is_empty());

    let mut camel = String::with_capacity(name.len());

    for (index, word) in words.enumerate() {
        let mut chars = word.chars();

        if index > 0
            && let Some(first) = chars.next()
        {
            camel.extend(first.to_uppercase());
        }

        camel.push_str(chars.as_str());
    }

    camel
}

/// Export name of a product: its camel-cased name followed by `Product`.
pub fn export_name(name: &str) -> String {
    let mut base = camel_case(name);

    if base.is_empty() {
        base.push_str(FALLBACK);
    }

    if base.starts_with(|c: char| c.is_ascii_digit()) {
        base.insert(0, '_');
    }

    base.push_str(SUFFIX);
    base
}

/// Hands out export names, numbering repeated names from 2.
#[derive(Debug, Default)]
pub struct ExportNames {
    seen: FxHashMap<String, usize>,
}

impl ExportNames {
    /// Unique export name for a product called `name`.
    pub fn claim(&mut self, name: &str) -> String {
        let base = export_name(name);
        let count = self.seen.entry(base.clone()).or_insert(0);

        *count += 1;

        if *count == 1 {
            base
        } else {
            format!("{base}{count}")
        }
    }
}
