//! Tag regions, tagging labels, and the tag vocabulary.

use std::collections::HashMap;

use tracing::debug;

use crate::model::{LabelGroup, Rect, Stroke, TagLabel, TagRegion};

/// Tag given to the zero-area region recorded for a cancelled tagging.
pub const DUMMY_TAG: &str = "dummy";

/// Effective tag of a stroke: a tag loaded from the file wins outright,
/// otherwise the first region that inclusively contains both endpoints
/// supplies its tag, otherwise "". Later overlapping regions are ignored.
pub fn resolve_tag<'a>(stroke: &'a Stroke, regions: &'a [TagRegion]) -> &'a str {
    if !stroke.tag.is_empty() {
        return &stroke.tag;
    }
    regions
        .iter()
        .find(|r| r.bounds.contains_stroke(stroke))
        .map(|r| r.tag.as_str())
        .unwrap_or("")
}

/// Records tagging actions and the permissible tag vocabulary.
///
/// The region list and the label-group list stay index-aligned: every
/// tagging attempt, confirmed or cancelled, appends one entry to each.
/// Label group 0 is reserved for labels derived from tags already present
/// in the trace file and is never removed by undo.
#[derive(Clone, Debug, Default)]
pub struct AnnotationStore {
    regions: Vec<TagRegion>,
    labels: Vec<LabelGroup>,
    type_names: Vec<String>,
    tags: HashMap<String, Vec<String>>,
}

impl AnnotationStore {
    pub fn new() -> Self {
        AnnotationStore {
            regions: Vec::new(),
            labels: vec![LabelGroup::default()],
            type_names: Vec::new(),
            tags: HashMap::new(),
        }
    }

    pub fn regions(&self) -> &[TagRegion] {
        &self.regions
    }

    pub fn labels(&self) -> &[LabelGroup] {
        &self.labels
    }

    pub fn add_region(&mut self, bounds: Rect, tag: impl Into<String>) {
        self.regions.push(TagRegion::new(bounds, tag));
    }

    /// Confirms a tagging: appends the region and a label group with one
    /// label at the midpoint of every contained stroke. Returns how many
    /// strokes got a label.
    pub fn confirm_tagging(&mut self, bounds: Rect, tag: &str, strokes: &[Stroke]) -> usize {
        let mut group = LabelGroup::default();
        for stroke in strokes.iter().filter(|s| bounds.contains_stroke(s)) {
            let mid = stroke.midpoint();
            group.labels.push(TagLabel {
                x: mid.x,
                y: mid.y,
                text: tag.to_string(),
            });
        }
        debug!(tag, labeled = group.labels.len(), "tagging confirmed");
        let count = group.labels.len();
        self.regions.push(TagRegion::new(bounds, tag));
        self.labels.push(group);
        count
    }

    /// Cancelled tagging still consumes a slot in both lists so undo
    /// indices stay aligned with the visual marker list.
    pub fn cancel_tagging(&mut self) {
        self.regions.push(TagRegion::new(Rect::ZERO, DUMMY_TAG));
        self.labels.push(LabelGroup::default());
    }

    /// Rebuilds label group 0 from strokes whose tag came from the file.
    pub fn load_file_labels(&mut self, strokes: &[Stroke]) {
        let mut group = LabelGroup::default();
        for stroke in strokes.iter().filter(|s| !s.tag.is_empty()) {
            let mid = stroke.midpoint();
            group.labels.push(TagLabel {
                x: mid.x,
                y: mid.y,
                text: stroke.tag.clone(),
            });
        }
        self.labels[0] = group;
    }

    /// Strips every stroke tag and drops all tagging state back to the
    /// initial single empty file-loaded group.
    pub fn clear_tags(&mut self, strokes: &mut [Stroke]) {
        for stroke in strokes.iter_mut() {
            stroke.tag.clear();
        }
        self.regions.clear();
        self.labels.clear();
        self.labels.push(LabelGroup::default());
    }

    /// Parses the line-oriented vocabulary format: a `#`-prefixed line opens
    /// a drawing-type bucket, following non-empty lines are its tags. Lines
    /// before the first `#` and blank lines are ignored.
    pub fn load_vocabulary(&mut self, text: &str) {
        self.type_names.clear();
        self.tags.clear();
        let mut current: Option<String> = None;
        for line in text.lines() {
            let line = line.trim_end();
            if line.is_empty() {
                continue;
            }
            if let Some(name) = line.strip_prefix('#') {
                self.type_names.push(name.to_string());
                self.tags.insert(name.to_string(), Vec::new());
                current = Some(name.to_string());
            } else if let Some(name) = &current {
                if let Some(bucket) = self.tags.get_mut(name) {
                    bucket.push(line.to_string());
                }
            }
        }
        debug!(types = self.type_names.len(), "vocabulary loaded");
    }

    /// Drawing-type names in file order.
    pub fn drawing_types(&self) -> &[String] {
        &self.type_names
    }

    /// Permissible tags for a drawing type, empty when unknown.
    pub fn tags_for(&self, drawing_type: &str) -> &[String] {
        self.tags.get(drawing_type).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// Live region and label lists, for undo/redo to edit in lockstep.
    pub fn parts_mut(&mut self) -> (&mut Vec<TagRegion>, &mut Vec<LabelGroup>) {
        (&mut self.regions, &mut self.labels)
    }
}
