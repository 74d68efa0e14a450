use std::path::Path;

use tracing::{debug, warn};

use crate::annotations::resolve_tag;
use crate::model::{Stroke, TagRegion};

/// Marker line that introduces the stroke block. Any later line starting with
/// `<<` ends the block; everything outside is preserved byte-for-byte.
pub const SECTION_MARKER: &str = "<<Extracted_Lines>>";

const SECTION_PREFIX: &str = "<<";

/// Canvas padding beyond the outermost stroke coordinate.
pub const CANVAS_GAP: i32 = 20;

#[derive(Debug, thiserror::Error)]
pub enum TraceError {
    #[error("malformed stroke record at line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },
    #[error("trace contains no strokes between section markers")]
    CorruptedTrace,
    #[error("missing section marker: {0}")]
    MissingSectionMarker(&'static str),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A parsed trace file: the stroke list plus the surrounding text kept
/// verbatim so an unedited document saves back byte-identical.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TraceDocument {
    pub prefix_lines: Vec<String>,
    pub strokes: Vec<Stroke>,
    pub suffix_lines: Vec<String>,
}

enum ParseState {
    Prefix,
    Strokes,
    Suffix,
}

impl TraceDocument {
    /// Parses trace text. Lines up to and including the opening marker become
    /// the prefix; comma records follow until the next `<<` line, which opens
    /// the suffix. A single bad record aborts the whole parse so a previously
    /// loaded document is never replaced by a partial one.
    pub fn parse(text: &str) -> Result<TraceDocument, TraceError> {
        let mut doc = TraceDocument::default();
        let mut state = ParseState::Prefix;
        for (idx, line) in text.lines().enumerate() {
            match state {
                ParseState::Prefix => {
                    doc.prefix_lines.push(line.to_string());
                    if line == SECTION_MARKER {
                        state = ParseState::Strokes;
                    }
                }
                ParseState::Strokes => {
                    if line.starts_with(SECTION_PREFIX) {
                        doc.suffix_lines.push(line.to_string());
                        state = ParseState::Suffix;
                    } else {
                        doc.strokes.push(parse_record(idx + 1, line)?);
                    }
                }
                ParseState::Suffix => doc.suffix_lines.push(line.to_string()),
            }
        }
        match state {
            ParseState::Prefix => {
                return Err(TraceError::MissingSectionMarker("opening"));
            }
            ParseState::Strokes => {
                return Err(TraceError::MissingSectionMarker("closing"));
            }
            ParseState::Suffix => {}
        }
        if doc.strokes.is_empty() {
            return Err(TraceError::CorruptedTrace);
        }
        doc.strokes.sort_by_key(|s| s.time_start);
        debug!(strokes = doc.strokes.len(), "parsed trace");
        Ok(doc)
    }

    /// Writes the document back out: prefix verbatim, one record per stroke
    /// with its tag resolved against `regions`, suffix verbatim.
    pub fn serialize(&self, regions: &[TagRegion]) -> String {
        let mut out = String::new();
        for line in &self.prefix_lines {
            out.push_str(line);
            out.push('\n');
        }
        for stroke in &self.strokes {
            let tag = resolve_tag(stroke, regions);
            out.push_str(&format!(
                "{},{},{},{},{},{},{}",
                stroke.id,
                stroke.x_start,
                stroke.x_end,
                stroke.y_start,
                stroke.y_end,
                stroke.time_start,
                stroke.time_end
            ));
            if !tag.is_empty() {
                out.push(',');
                out.push_str(tag);
            }
            out.push('\n');
        }
        for line in &self.suffix_lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }

    pub fn load(path: impl AsRef<Path>) -> Result<TraceDocument, TraceError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading trace");
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text)
    }

    pub fn save(&self, path: impl AsRef<Path>, regions: &[TagRegion]) -> Result<(), TraceError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "saving trace");
        std::fs::write(path, self.serialize(regions))?;
        Ok(())
    }

    /// Width and height a canvas needs to show every stroke, with a fixed gap
    /// past the outermost coordinate.
    pub fn canvas_extent(&self) -> (i32, i32) {
        let mut max_x = 0;
        let mut max_y = 0;
        for s in &self.strokes {
            max_x = max_x.max(s.x_start).max(s.x_end);
            max_y = max_y.max(s.y_start).max(s.y_end);
        }
        (max_x + CANVAS_GAP, max_y + CANVAS_GAP)
    }
}

fn parse_record(line_no: usize, line: &str) -> Result<Stroke, TraceError> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != 7 && fields.len() != 8 {
        warn!(line = line_no, fields = fields.len(), "bad field count");
        return Err(TraceError::MalformedRecord {
            line: line_no,
            reason: format!("expected 7 or 8 fields, got {}", fields.len()),
        });
    }
    let int = |field: &str, name: &str| -> Result<i32, TraceError> {
        field
            .trim()
            .parse::<i32>()
            .map_err(|_| TraceError::MalformedRecord {
                line: line_no,
                reason: format!("{} is not an integer: {:?}", name, field),
            })
    };
    let long = |field: &str, name: &str| -> Result<i64, TraceError> {
        field
            .trim()
            .parse::<i64>()
            .map_err(|_| TraceError::MalformedRecord {
                line: line_no,
                reason: format!("{} is not an integer: {:?}", name, field),
            })
    };
    Ok(Stroke {
        id: int(fields[0], "id")?,
        x_start: int(fields[1], "xStart")?,
        x_end: int(fields[2], "xEnd")?,
        y_start: int(fields[3], "yStart")?,
        y_end: int(fields[4], "yEnd")?,
        time_start: long(fields[5], "timeStart")?,
        time_end: long(fields[6], "timeEnd")?,
        tag: fields.get(7).map(|t| t.to_string()).unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_splits_prefix_strokes_suffix() {
        let text = "header\n<<Extracted_Lines>>\n1,0,5,0,5,10,20\n<<End>>\ntrailer\n";
        let doc = TraceDocument::parse(text).unwrap();
        assert_eq!(doc.prefix_lines, vec!["header", "<<Extracted_Lines>>"]);
        assert_eq!(doc.strokes.len(), 1);
        assert_eq!(doc.suffix_lines, vec!["<<End>>", "trailer"]);
    }

    #[test]
    fn seven_fields_yield_empty_tag() {
        let text = "<<Extracted_Lines>>\n1,0,5,0,5,10,20\n<<End>>\n";
        let doc = TraceDocument::parse(text).unwrap();
        assert_eq!(doc.strokes[0].tag, "");
    }

    #[test]
    fn eighth_field_is_the_tag() {
        let text = "<<Extracted_Lines>>\n1,0,5,0,5,10,20,tree\n<<End>>\n";
        let doc = TraceDocument::parse(text).unwrap();
        assert_eq!(doc.strokes[0].tag, "tree");
    }

    #[test]
    fn strokes_sorted_by_time_start() {
        let text = "<<Extracted_Lines>>\n2,0,1,0,1,500,600\n1,0,1,0,1,100,200\n<<End>>\n";
        let doc = TraceDocument::parse(text).unwrap();
        assert_eq!(doc.strokes[0].id, 1);
        assert_eq!(doc.strokes[1].id, 2);
    }

    #[test]
    fn bad_field_count_is_malformed() {
        let text = "<<Extracted_Lines>>\n1,0,5\n<<End>>\n";
        assert!(matches!(
            TraceDocument::parse(text),
            Err(TraceError::MalformedRecord { line: 2, .. })
        ));
    }

    #[test]
    fn non_numeric_field_is_malformed() {
        let text = "<<Extracted_Lines>>\n1,zero,5,0,5,10,20\n<<End>>\n";
        assert!(matches!(
            TraceDocument::parse(text),
            Err(TraceError::MalformedRecord { .. })
        ));
    }

    #[test]
    fn zero_strokes_is_corrupted() {
        let text = "<<Extracted_Lines>>\n<<End>>\n";
        assert!(matches!(
            TraceDocument::parse(text),
            Err(TraceError::CorruptedTrace)
        ));
    }

    #[test]
    fn missing_opening_marker() {
        assert!(matches!(
            TraceDocument::parse("just some text\n"),
            Err(TraceError::MissingSectionMarker("opening"))
        ));
    }

    #[test]
    fn missing_closing_marker() {
        let text = "<<Extracted_Lines>>\n1,0,5,0,5,10,20\n";
        assert!(matches!(
            TraceDocument::parse(text),
            Err(TraceError::MissingSectionMarker("closing"))
        ));
    }

    #[test]
    fn canvas_extent_pads_the_maximum_coordinate() {
        let text = "<<Extracted_Lines>>\n1,0,30,5,80,10,20\n<<End>>\n";
        let doc = TraceDocument::parse(text).unwrap();
        assert_eq!(doc.canvas_extent(), (50, 100));
    }
}
