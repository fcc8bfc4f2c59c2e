//! # Undo History
//!
//! Optional recorder the adjuster notifies right before it mutates a node.

/// Receives a node snapshot before an undoable change.
pub trait UndoRecorder<N: ?Sized> {
    /// Called once per adjustment, before the first mutation.
    fn record(&mut self, label: &str, node: &N);
}

/// Recorder that keeps nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHistory;

impl<N: ?Sized> UndoRecorder<N> for NoHistory {
    fn record(&mut self, _label: &str, _node: &N) {}
}

#[derive(Debug, Clone)]
struct HistoryEntry<N> {
    label: String,
    snapshot: N,
}

/// Recorder that stores full node snapshots and restores them on undo.
///
/// # Example
///
/// ```rust
/// use pivot_scene::{SceneNode, SnapshotHistory, UndoRecorder};
/// use glam::DVec3;
///
/// let mut node = SceneNode::new("Lamp");
/// let mut history = SnapshotHistory::<SceneNode>::new();
/// history.record("Move", &node);
/// node.transform.position = DVec3::X;
///
/// assert_eq!(history.undo(&mut node).as_deref(), Some("Move"));
/// assert_eq!(node.transform.position, DVec3::ZERO);
/// ```
#[derive(Debug, Clone)]
pub struct SnapshotHistory<N> {
    entries: Vec<HistoryEntry<N>>,
}

impl<N> Default for SnapshotHistory<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> SnapshotHistory<N> {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Number of undoable entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there is nothing to undo.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Label of the most recent entry.
    pub fn last_label(&self) -> Option<&str> {
        self.entries.last().map(|entry| entry.label.as_str())
    }

    /// Restores the most recent snapshot into `node` and returns its label.
    pub fn undo(&mut self, node: &mut N) -> Option<String> {
        let entry = self.entries.pop()?;
        *node = entry.snapshot;
        log::debug!("undid '{}'", entry.label);
        Some(entry.label)
    }
}

impl<N: Clone> UndoRecorder<N> for SnapshotHistory<N> {
    fn record(&mut self, label: &str, node: &N) {
        self.entries.push(HistoryEntry {
            label: label.to_string(),
            snapshot: node.clone(),
        });
    }
}
