//! Bounded undo/redo over the paired region and label-group lists.

use crate::model::{LabelGroup, TagRegion};

/// Two parallel stacks of (label group, region) pairs. Undo pops the most
/// recent tagging off the live lists; redo re-applies it. Label group 0
/// holds file-loaded content and is never removable, hence the `> 1` guard.
#[derive(Clone, Debug, Default)]
pub struct EditHistory {
    undo_stack: Vec<(LabelGroup, TagRegion)>,
    redo_stack: Vec<(LabelGroup, TagRegion)>,
}

impl EditHistory {
    pub fn new() -> Self {
        EditHistory::default()
    }

    /// Records an applied tagging so it can be undone later.
    pub fn record_removal(&mut self, group: LabelGroup, region: TagRegion) {
        self.undo_stack.push((group, region));
    }

    /// Removes the most recent tagging from the live lists. Returns false
    /// when there is nothing to undo or only the file-loaded group remains.
    pub fn undo(&mut self, labels: &mut Vec<LabelGroup>, regions: &mut Vec<TagRegion>) -> bool {
        if labels.len() <= 1 {
            return false;
        }
        let Some(pair) = self.undo_stack.pop() else {
            return false;
        };
        labels.pop();
        regions.pop();
        self.redo_stack.push(pair);
        true
    }

    /// Re-applies the most recently undone tagging.
    pub fn redo(&mut self, labels: &mut Vec<LabelGroup>, regions: &mut Vec<TagRegion>) -> bool {
        let Some((group, region)) = self.redo_stack.pop() else {
            return false;
        };
        labels.push(group.clone());
        regions.push(region.clone());
        self.undo_stack.push((group, region));
        true
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Drops both stacks, called when a new document loads.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}
