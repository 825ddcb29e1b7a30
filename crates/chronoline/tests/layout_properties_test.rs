//! Property tests over the whole layout pipeline.

use chrono::{NaiveDate, TimeDelta};
use proptest::prelude::*;

use chronoline::{
    config::{LayoutConfig, StyleConfig},
    document::{Event, Instant, TimelineDocument, ViewWindow},
    layout::{ConflictPolicy, TimelineLayout},
    measure::FixedMetrics,
    scene::{Role, Scene},
};

fn origin() -> Instant {
    NaiveDate::from_ymd_opt(2025, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

fn document(span_days: i64, events: &[(i64, Option<i64>, usize)]) -> TimelineDocument {
    let start = origin();
    let view = ViewWindow::new(Some(start), Some(start + TimeDelta::days(span_days)));

    events.iter().enumerate().fold(
        TimelineDocument::new().with_view(view),
        |document, (index, (offset_hours, length_hours, label_len))| {
            let event_start = start + TimeDelta::hours(*offset_hours);
            let mut event = Event::new(event_start).with_text(format!("{index}{}", "x".repeat(*label_len)));
            if let Some(length) = length_hours {
                event = event.with_end(event_start + TimeDelta::hours(*length));
            }
            document.with_event(event)
        },
    )
}

fn events_strategy() -> impl Strategy<Value = Vec<(i64, Option<i64>, usize)>> {
    prop::collection::vec(
        (0i64..24 * 60, prop::option::of(0i64..24 * 10), 0usize..30),
        0..25,
    )
}

proptest! {
    #[test]
    fn test_visible_shapes_never_overlap(
        span_days in 1i64..90,
        events in events_strategy(),
        legacy in any::<bool>(),
    ) {
        let document = document(span_days, &events);
        let policy = if legacy { ConflictPolicy::Legacy } else { ConflictPolicy::Strict };
        let config = LayoutConfig::default().with_conflict_policy(policy);

        let layout = TimelineLayout::compute(&document, &config, FixedMetrics::default(), origin(), &[])
            .unwrap();
        let shapes = layout.events().shapes();
        prop_assert_eq!(shapes.len(), events.len());

        for (i, a) in shapes.iter().enumerate() {
            for b in &shapes[i + 1..] {
                if a.bounds().intersects(&b.bounds()) {
                    prop_assert!(layout.events().is_exempt(a.id(), b.id()));
                }
            }
        }
    }

    #[test]
    fn test_scene_draws_every_shape_once(
        span_days in 1i64..400,
        events in events_strategy(),
    ) {
        let document = document(span_days, &events);
        let layout = TimelineLayout::compute(
            &document,
            &LayoutConfig::default(),
            FixedMetrics::default(),
            origin(),
            &[],
        )
        .unwrap();
        let scene = Scene::build(&layout, &StyleConfig::default()).unwrap();

        for shape in layout.events().shapes() {
            let rects = scene
                .items_for_shape(shape.id())
                .filter(|item| matches!(item.role(), Role::EventRect { .. }))
                .count();
            prop_assert_eq!(rects, 1);
        }

        let window = layout.scale().window();
        for tick in layout.ticks() {
            prop_assert!(tick.instant() >= window.start() && tick.instant() <= window.end());
        }
    }
}
