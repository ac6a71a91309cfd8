//! The generator registry: named whole-record-to-value functions.
//!
//! Generators synthesize one output column from the entire input record.
//! They always see the original record, untouched by column discards or
//! filters applied in the same pass.

use std::collections::BTreeMap;

/// Signature of a registered generator.
pub type GeneratorFn = fn(&[String]) -> String;

/// A registered generator with its listing description.
#[derive(Debug, Clone, Copy)]
pub struct Generator {
    /// One-line description shown by the `functions` listing.
    pub description: &'static str,
    /// The synthesis function itself.
    pub apply: GeneratorFn,
}

/// Immutable name-to-generator mapping, same lifecycle as
/// [`crate::FilterRegistry`].
#[derive(Debug, Clone)]
pub struct GeneratorRegistry {
    entries: BTreeMap<&'static str, Generator>,
}

impl GeneratorRegistry {
    /// The built-in generator set.
    pub fn builtin() -> Self {
        let mut entries = BTreeMap::new();
        entries.insert(
            "joinAll",
            Generator {
                description: "join every input field with ';'",
                apply: join_all,
            },
        );
        entries.insert(
            "fieldCount",
            Generator {
                description: "number of fields in the input record",
                apply: field_count,
            },
        );
        entries.insert(
            "firstNonEmpty",
            Generator {
                description: "first field with a non-blank value",
                apply: first_non_empty,
            },
        );
        Self { entries }
    }

    /// Looks up a generator by name.
    pub fn get(&self, name: &str) -> Option<&Generator> {
        self.entries.get(name)
    }

    /// All registered names, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        self.entries.keys().copied().collect()
    }

    /// Iterates over registered generators in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Generator)> {
        self.entries
            .iter()
            .map(|(name, generator)| (*name, generator))
    }
}

fn join_all(record: &[String]) -> String {
    record.join(";")
}

fn field_count(record: &[String]) -> String {
    record.len().to_string()
}

fn first_non_empty(record: &[String]) -> String {
    record
        .iter()
        .find(|field| !field.trim().is_empty())
        .cloned()
        .unwrap_or_default()
}
