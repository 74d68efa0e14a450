use proptest::prelude::*;
use stroketrace::annotations::AnnotationStore;
use stroketrace::geometry::curve::CurveChain;
use stroketrace::history::EditHistory;
use stroketrace::model::{Rect, Stroke, Vec2};
use stroketrace::trace::TraceDocument;

fn stroke_strategy() -> impl Strategy<Value = Stroke> {
    (
        0i32..100,
        0i32..500,
        0i32..500,
        0i32..500,
        0i32..500,
        0i64..1_000_000,
        prop_oneof![Just(String::new()), "[a-z]{1,6}"],
    )
        .prop_map(|(id, x0, x1, y0, y1, t, tag)| Stroke {
            id,
            x_start: x0,
            x_end: x1,
            y_start: y0,
            y_end: y1,
            time_start: t,
            time_end: t + 10,
            tag,
        })
}

fn record_line(s: &Stroke) -> String {
    if s.tag.is_empty() {
        format!(
            "{},{},{},{},{},{},{}",
            s.id, s.x_start, s.x_end, s.y_start, s.y_end, s.time_start, s.time_end
        )
    } else {
        format!(
            "{},{},{},{},{},{},{},{}",
            s.id, s.x_start, s.x_end, s.y_start, s.y_end, s.time_start, s.time_end, s.tag
        )
    }
}

proptest! {
    #[test]
    fn parse_serialize_roundtrip(strokes in prop::collection::vec(stroke_strategy(), 1..40)) {
        let mut text = String::from("<<Extracted_Lines>>\n");
        for s in &strokes {
            text.push_str(&record_line(s));
            text.push('\n');
        }
        text.push_str("<<End>>\n");

        let doc = TraceDocument::parse(&text).unwrap();
        prop_assert_eq!(doc.strokes.len(), strokes.len());
        // non-decreasing time order regardless of input order
        for pair in doc.strokes.windows(2) {
            prop_assert!(pair[0].time_start <= pair[1].time_start);
        }
        // an already-sorted document round-trips byte-identical
        let sorted = doc.serialize(&[]);
        let again = TraceDocument::parse(&sorted).unwrap();
        prop_assert_eq!(again.serialize(&[]), sorted);
    }

    #[test]
    fn smoothing_preserves_anchors(points in prop::collection::vec((-500f32..500.0, -500f32..500.0), 0..30),
                                   pull in 0.05f32..0.5) {
        let points: Vec<Vec2> = points.into_iter().map(|(x, y)| Vec2::new(x, y)).collect();
        let mut chain = CurveChain::build(&points);
        let anchors_before = chain.anchors();
        chain.smooth(pull);
        prop_assert_eq!(chain.anchors(), anchors_before);
        if points.len() >= 2 {
            prop_assert_eq!(chain.len(), points.len() - 1);
        } else {
            prop_assert!(chain.is_empty());
        }
    }
}

#[derive(Clone, Debug)]
enum Op {
    Confirm { x: i32, y: i32, w: i32, h: i32 },
    Cancel,
    Undo,
    Redo,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0i32..400, 0i32..400, 1i32..100, 1i32..100)
            .prop_map(|(x, y, w, h)| Op::Confirm { x, y, w, h }),
        Just(Op::Cancel),
        Just(Op::Undo),
        Just(Op::Redo),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 1000, .. ProptestConfig::default() })]
    #[test]
    fn tagging_keeps_lists_index_aligned(seq in prop::collection::vec(op_strategy(), 1..40),
                                         strokes in prop::collection::vec(stroke_strategy(), 1..10)) {
        let mut store = AnnotationStore::new();
        let mut history = EditHistory::new();
        for op in seq {
            match op {
                Op::Confirm { x, y, w, h } => {
                    store.confirm_tagging(Rect::new(x, y, x + w, y + h), "tag", &strokes);
                    let group = store.labels().last().unwrap().clone();
                    let region = store.regions().last().unwrap().clone();
                    history.record_removal(group, region);
                }
                Op::Cancel => {
                    store.cancel_tagging();
                    let group = store.labels().last().unwrap().clone();
                    let region = store.regions().last().unwrap().clone();
                    history.record_removal(group, region);
                }
                Op::Undo => {
                    let (regions, labels) = store.parts_mut();
                    history.undo(labels, regions);
                }
                Op::Redo => {
                    let (regions, labels) = store.parts_mut();
                    history.redo(labels, regions);
                }
            }
            // label group 0 is always present; one group per region after it
            prop_assert_eq!(store.labels().len(), store.regions().len() + 1);
        }
    }
}
