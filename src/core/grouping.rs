//! Grouping with first-appearance order
//!
//! Groups are kept in the order their key was first seen. Ranking uses a
//! stable sort, so groups with equal totals stay in that order.

use std::collections::HashMap;

/// Accumulator keyed by text, remembering first-appearance order
#[derive(Debug, Clone)]
pub struct FirstAppearanceGroups<V> {
    index: HashMap<String, usize>,
    groups: Vec<(String, V)>,
}

impl<V> Default for FirstAppearanceGroups<V> {
    fn default() -> Self {
        FirstAppearanceGroups {
            index: HashMap::new(),
            groups: Vec::new(),
        }
    }
}

impl<V: Default> FirstAppearanceGroups<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mutable accumulator for `key`, created on first sight
    pub fn entry(&mut self, key: &str) -> &mut V {
        let position = match self.index.get(key) {
            Some(&position) => position,
            None => {
                let position = self.groups.len();
                self.index.insert(key.to_string(), position);
                self.groups.push((key.to_string(), V::default()));
                position
            }
        };
        &mut self.groups[position].1
    }

    /// Groups ordered by accumulated value, largest first
    pub fn into_ranked(self) -> Vec<(String, V)>
    where
        V: Ord,
    {
        let mut groups = self.groups;
        // sort_by is stable: ties keep first-appearance order
        groups.sort_by(|a, b| b.1.cmp(&a.1));
        groups
    }
}
