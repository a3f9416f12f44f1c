//! Group index
//!
//! Partitions the hook catalog into named groups and orders the group names
//! with locale-aware collation. Rebuilt from scratch on every catalog reload;
//! there is no incremental update.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use icu_collator::{Collator, CollatorOptions, Strength};
use icu_locid::Locale;

use warden_hooks::Hook;

use crate::error::GroupError;
use crate::Result;

#[derive(Debug, Clone)]
pub struct GroupIndex {
    /// Distinct group names in collated order
    groups: Vec<String>,
    /// Group name -> member hooks in catalog encounter order
    members: HashMap<String, Vec<Hook>>,
}

impl GroupIndex {
    /// Build the index for a full hook catalog.
    ///
    /// Group names are ordered case- and accent-insensitively for the given
    /// locale; names comparing equal keep their first-seen order, so the
    /// result is deterministic for a fixed locale and input.
    pub fn build(catalog: &[Hook], locale: &Locale) -> Result<Self> {
        let mut groups: Vec<String> = Vec::new();
        let mut members: HashMap<String, Vec<Hook>> = HashMap::new();

        for hook in catalog {
            match members.entry(hook.group().to_string()) {
                Entry::Vacant(entry) => {
                    groups.push(hook.group().to_string());
                    entry.insert(vec![hook.clone()]);
                }
                Entry::Occupied(mut entry) => {
                    entry.get_mut().push(hook.clone());
                }
            }
        }

        let mut options = CollatorOptions::new();
        options.strength = Some(Strength::Primary);
        let collator = Collator::try_new(&locale.clone().into(), options)
            .map_err(|e| GroupError::Collation(e.to_string()))?;

        // Vec::sort_by is stable, so equal-comparing names stay in
        // encounter order
        groups.sort_by(|a, b| collator.compare(a, b));

        tracing::debug!(
            groups = groups.len(),
            hooks = catalog.len(),
            "Rebuilt group index"
        );

        Ok(Self { groups, members })
    }

    /// Distinct group names in display order
    pub fn groups(&self) -> &[String] {
        &self.groups
    }

    /// Member hooks of a group, in catalog encounter order
    pub fn members(&self, group: &str) -> &[Hook] {
        self.members.get(group).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, group: &str) -> bool {
        self.members.contains_key(group)
    }

    /// Iterate groups with their members, in display order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Hook])> {
        self.groups.iter().map(|g| (g.as_str(), self.members(g)))
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
