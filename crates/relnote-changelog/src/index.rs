//! Label to group lookup

use std::collections::HashMap;

use relnote_core::GroupConfig;
use tracing::{debug, warn};

/// Maps label names to the group they route into.
///
/// Built from groups in declaration order. When two groups claim the same
/// label, the group declared first keeps it.
#[derive(Debug, Clone, Default)]
pub struct LabelIndex {
    groups: Vec<String>,
    labels: HashMap<String, usize>,
}

impl LabelIndex {
    /// Build the index from configured groups
    pub fn build(groups: &[GroupConfig]) -> Self {
        let mut index = Self::default();

        for (position, group) in groups.iter().enumerate() {
            index.groups.push(group.name.clone());

            for label in &group.labels {
                if let Some(&owner) = index.labels.get(label) {
                    warn!(
                        label = %label,
                        kept = %index.groups[owner],
                        ignored = %group.name,
                        "label claimed by more than one group, keeping the first"
                    );
                    continue;
                }
                index.labels.insert(label.clone(), position);
            }
        }

        debug!(
            groups = index.groups.len(),
            labels = index.labels.len(),
            "label index built"
        );
        index
    }

    /// Group a label routes into
    pub fn group_for(&self, label: &str) -> Option<&str> {
        self.labels
            .get(label)
            .map(|&position| self.groups[position].as_str())
    }

    /// Group names in declaration order
    pub fn group_names(&self) -> &[String] {
        &self.groups
    }

    /// Number of indexed labels
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Check if no label is indexed
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
