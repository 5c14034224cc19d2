//! Element registry for ID-based lookups
//!
//! Maps stable string IDs to layout nodes so anchors and reveal blocks can be
//! found after a rebuild. Rebuilt on every mount; the page is single-threaded
//! so no locking is involved.

use rustc_hash::FxHashMap;

use crate::tree::LayoutNodeId;

/// String ID to layout node mapping
#[derive(Debug, Default)]
pub struct ElementRegistry {
    ids: FxHashMap<String, LayoutNodeId>,
    reverse: FxHashMap<LayoutNodeId, String>,
}

impl ElementRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an element ID
    ///
    /// Duplicate IDs are last-wins and logged.
    pub fn register(&mut self, id: impl Into<String>, node_id: LayoutNodeId) {
        let id = id.into();
        if self.ids.contains_key(&id) {
            tracing::warn!("duplicate element id registered: {}", id);
        }
        self.reverse.insert(node_id, id.clone());
        self.ids.insert(id, node_id);
    }

    pub fn get(&self, id: &str) -> Option<LayoutNodeId> {
        self.ids.get(id).copied()
    }

    pub fn get_id(&self, node_id: LayoutNodeId) -> Option<&str> {
        self.reverse.get(&node_id).map(String::as_str)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn all_ids(&self) -> Vec<&str> {
        self.ids.keys().map(String::as_str).collect()
    }

    /// Clear all registrations (called between mounts)
    pub fn clear(&mut self) {
        self.ids.clear();
        self.reverse.clear();
    }
}
