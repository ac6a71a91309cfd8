//! The filter registry: named single-value text transformations.
//!
//! Filters are pure `&str -> String` functions applied to one sourced
//! field value at a time. The set is fixed at build time; configurations
//! referencing any other name fail the whole run.

use std::collections::BTreeMap;

/// Signature of a registered filter.
pub type FilterFn = fn(&str) -> String;

/// A registered filter with its listing description.
#[derive(Debug, Clone, Copy)]
pub struct Filter {
    /// One-line description shown by the `functions` listing.
    pub description: &'static str,
    /// The transformation itself.
    pub apply: FilterFn,
}

/// Immutable name-to-filter mapping.
///
/// Built once at startup and passed by reference into the transformer.
/// Names enumerate in sorted order, so diagnostics are deterministic.
#[derive(Debug, Clone)]
pub struct FilterRegistry {
    entries: BTreeMap<&'static str, Filter>,
}

impl FilterRegistry {
    /// The built-in filter set.
    pub fn builtin() -> Self {
        let mut entries = BTreeMap::new();
        entries.insert(
            "trim",
            Filter {
                description: "strip leading and trailing whitespace",
                apply: trim,
            },
        );
        entries.insert(
            "lowercase",
            Filter {
                description: "convert to lowercase",
                apply: lowercase,
            },
        );
        entries.insert(
            "uppercase",
            Filter {
                description: "convert to uppercase",
                apply: uppercase,
            },
        );
        entries.insert(
            "squeeze",
            Filter {
                description: "collapse whitespace runs into single spaces",
                apply: squeeze,
            },
        );
        Self { entries }
    }

    /// Looks up a filter by name.
    pub fn get(&self, name: &str) -> Option<&Filter> {
        self.entries.get(name)
    }

    /// All registered names, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        self.entries.keys().copied().collect()
    }

    /// Iterates over registered filters in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Filter)> {
        self.entries.iter().map(|(name, filter)| (*name, filter))
    }
}

fn trim(value: &str) -> String {
    value.trim().to_string()
}

fn lowercase(value: &str) -> String {
    value.to_lowercase()
}

fn uppercase(value: &str) -> String {
    value.to_uppercase()
}

fn squeeze(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}
