// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::collections::BTreeMap;

/// Enabled state per image category.
///
/// Tags are kept sorted so chrome can list them in a stable order. Tags the
/// set has never heard of are treated as disabled.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterSet {
    enabled: BTreeMap<String, bool>,
}

impl FilterSet {
    /// Creates an empty filter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the default set for a catalog: every tag enabled unless `overrides` says otherwise.
    ///
    /// Overrides for tags absent from the catalog are kept so chrome can still
    /// show them.
    #[must_use]
    pub fn with_defaults<'a>(
        tags: impl IntoIterator<Item = &'a str>,
        overrides: &BTreeMap<String, bool>,
    ) -> Self {
        let mut enabled: BTreeMap<String, bool> = tags
            .into_iter()
            .map(|tag| (tag.to_owned(), true))
            .collect();
        enabled.extend(overrides.iter().map(|(tag, on)| (tag.clone(), *on)));
        Self { enabled }
    }

    /// Returns `true` if images tagged `tag` are shown.
    #[must_use]
    pub fn is_enabled(&self, tag: &str) -> bool {
        self.enabled.get(tag).copied().unwrap_or(false)
    }

    /// Returns `true` if the set knows about `tag`.
    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.enabled.contains_key(tag)
    }

    /// Sets the state of `tag`, adding it if needed.
    pub fn set(&mut self, tag: impl Into<String>, enabled: bool) {
        self.enabled.insert(tag.into(), enabled);
    }

    /// Flips the state of a known tag and returns its new state.
    ///
    /// Returns `None` and leaves the set untouched if `tag` is unknown.
    pub fn toggle(&mut self, tag: &str) -> Option<bool> {
        let state = self.enabled.get_mut(tag)?;
        *state = !*state;
        Some(*state)
    }

    /// Iterates over `(tag, enabled)` pairs in tag order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.enabled.iter().map(|(tag, on)| (tag.as_str(), *on))
    }

    /// Number of tags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.enabled.len()
    }

    /// Returns `true` if the set holds no tag.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.enabled.is_empty()
    }
}
