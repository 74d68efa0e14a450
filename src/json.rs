use serde::Serialize;
use serde_json::Value;

use crate::annotations::AnnotationStore;
use crate::geometry::curve::CurveChain;
use crate::markers::{arrows, endpoint_markers, ArrowMarker, EndpointMarker};
use crate::model::{LabelGroup, TagRegion, Vec2};
use crate::sequence::{drawing_sequence, line_sequence};
use crate::trace::TraceDocument;

pub fn scene_to_json(doc: &TraceDocument, store: &AnnotationStore) -> Value {
    #[derive(Serialize)]
    struct SegmentSer {
        start: Vec2,
        ctrl1: Vec2,
        ctrl2: Vec2,
        end: Vec2,
    }
    #[derive(Serialize)]
    struct ChainSer {
        segments: Vec<SegmentSer>,
        arrows: Vec<ArrowMarker>,
        endpoints: Vec<EndpointMarker>,
    }
    #[derive(Serialize)]
    struct CanvasSer {
        width: i32,
        height: i32,
    }
    #[derive(Serialize)]
    struct SceneSer<'a> {
        version: u32,
        canvas: CanvasSer,
        line_sequence: ChainSer,
        drawing_sequence: ChainSer,
        labels: &'a [LabelGroup],
        regions: &'a [TagRegion],
    }

    fn chain_ser(chain: &CurveChain) -> ChainSer {
        ChainSer {
            arrows: arrows(chain),
            endpoints: endpoint_markers(chain),
            segments: chain
                .segments
                .iter()
                .map(|seg| SegmentSer {
                    start: seg.start,
                    ctrl1: seg.ctrl1,
                    ctrl2: seg.ctrl2,
                    end: seg.end,
                })
                .collect(),
        }
    }

    let (width, height) = doc.canvas_extent();
    serde_json::to_value(SceneSer {
        version: 1,
        canvas: CanvasSer { width, height },
        line_sequence: chain_ser(&line_sequence(&doc.strokes)),
        drawing_sequence: chain_ser(&drawing_sequence(&doc.strokes)),
        labels: store.labels(),
        regions: store.regions(),
    })
    .unwrap()
}
