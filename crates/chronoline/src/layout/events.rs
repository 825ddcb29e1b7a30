//! Greedy level packing of event rectangles.
//!
//! Events are processed in start order. Each one becomes a rectangle whose
//! width covers both its time span and its label, and is then stacked on the
//! first free level around the centerline:
//!
//! ```text
//!   level 2  ───  centerline - 90
//!   level 0  ───  centerline
//!   level 1  ───  centerline + 65
//!   level 3  ───  centerline + 115
//! ```

use std::fmt;

use log::{debug, trace, warn};
use serde::Deserialize;

use chronoline_core::{
    document::Event,
    geometry::{Bounds, Point, Size},
    measure::{MeasureError, TextMeasure},
};

use crate::scale::TimeScale;

/// Narrowest rectangle an event can get from its time span.
pub const MIN_EVENT_WIDTH: f32 = 40.0;
/// Span used for events without an end.
pub const DEFAULT_EVENT_SPAN: f32 = 100.0;
/// Horizontal room added around a measured label.
pub const LABEL_PADDING_X: f32 = 10.0;
/// Vertical room added around a measured label.
pub const LABEL_PADDING_Y: f32 = 8.0;
/// Distance of level 1 from the centerline, minus one [`LEVEL_SPACING`].
pub const LEVEL_BASE_OFFSET: f32 = 40.0;
/// Additional distance per level.
pub const LEVEL_SPACING: f32 = 25.0;
/// Height added to a rectangle overlapped under [`ConflictPolicy::Legacy`].
pub const WIDEN_STEP: f32 = 5.0;

/// How a candidate rectangle is checked against already placed ones.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConflictPolicy {
    /// A level is free only if the rectangle intersects no placed rectangle
    /// on any level.
    #[default]
    Strict,
    /// A level is free if the rectangle intersects nothing already recorded
    /// at that level. Rectangles at the chosen level that still intersect it
    /// are grown by [`WIDEN_STEP`]; intersections with other levels are left
    /// as they are.
    Legacy,
}

/// Identifier of a placed shape, unique within one [`EventLayout`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeId(usize);

impl ShapeId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "shape-{}", self.0)
    }
}

/// An event rectangle with its final position.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedShape<'a> {
    id: ShapeId,
    source_index: usize,
    event: &'a Event,
    bounds: Bounds,
    level: i32,
    label_size: Size,
}

impl<'a> PlacedShape<'a> {
    pub fn id(&self) -> ShapeId {
        self.id
    }

    /// Position of the event in the caller's input.
    pub fn source_index(&self) -> usize {
        self.source_index
    }

    pub fn event(&self) -> &'a Event {
        self.event
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Signed stacking index: 0 on the centerline, negative above it,
    /// positive below it.
    pub fn level(&self) -> i32 {
        self.level
    }

    /// Measured size of the label, without padding.
    pub fn label_size(&self) -> Size {
        self.label_size
    }
}

/// Why an [`Exemption`] was recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExemptionKind {
    /// Conflicting rectangles at the same level were grown instead of
    /// moving the new one.
    Widened,
    /// The rectangle was placed over others without changing them: the
    /// level cap was reached, or a legacy placement crosses other levels.
    Forced,
}

/// A placement that is allowed to intersect earlier rectangles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exemption {
    shape: ShapeId,
    conflicts: Vec<ShapeId>,
    kind: ExemptionKind,
}

impl Exemption {
    pub fn shape(&self) -> ShapeId {
        self.shape
    }

    /// Earlier shapes the new one intersects.
    pub fn conflicts(&self) -> &[ShapeId] {
        &self.conflicts
    }

    pub fn kind(&self) -> ExemptionKind {
        self.kind
    }

    /// `true` if this exemption covers an intersection of `a` and `b`.
    pub fn covers(&self, a: ShapeId, b: ShapeId) -> bool {
        (self.shape == a && self.conflicts.contains(&b))
            || (self.shape == b && self.conflicts.contains(&a))
    }
}

/// An event left out of the layout because its label could not be measured.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedEvent {
    source_index: usize,
    error: MeasureError,
}

impl SkippedEvent {
    pub fn source_index(&self) -> usize {
        self.source_index
    }

    pub fn error(&self) -> &MeasureError {
        &self.error
    }
}

/// Result of one packing pass.
#[derive(Debug, Clone, Default)]
pub struct EventLayout<'a> {
    shapes: Vec<PlacedShape<'a>>,
    exemptions: Vec<Exemption>,
    skipped: Vec<SkippedEvent>,
}

impl<'a> EventLayout<'a> {
    /// Placed shapes in processing order; `shapes()[i].id().index() == i`.
    pub fn shapes(&self) -> &[PlacedShape<'a>] {
        &self.shapes
    }

    pub fn shape(&self, id: ShapeId) -> Option<&PlacedShape<'a>> {
        self.shapes.get(id.0)
    }

    pub fn exemptions(&self) -> &[Exemption] {
        &self.exemptions
    }

    pub fn skipped(&self) -> &[SkippedEvent] {
        &self.skipped
    }

    /// `true` if the intersection of `a` and `b` is covered by an exemption.
    pub fn is_exempt(&self, a: ShapeId, b: ShapeId) -> bool {
        self.exemptions.iter().any(|exemption| exemption.covers(a, b))
    }
}

/// Stacks event rectangles so that they do not collide.
///
/// # Example
///
/// ```
/// # use chrono::NaiveDate;
/// # use chronoline::{layout::EventLayoutEngine, scale::TimeScale, window::TimeWindow};
/// # use chronoline_core::{document::Event, measure::FixedMetrics};
/// let hour = |h| NaiveDate::from_ymd_opt(2025, 1, 1).unwrap().and_hms_opt(h, 0, 0).unwrap();
/// let scale = TimeScale::new(TimeWindow::new(hour(0), hour(23)).unwrap(), 2000.0);
///
/// let a = Event::new(hour(1)).with_end(hour(3)).with_text("A");
/// let b = Event::new(hour(2)).with_end(hour(4)).with_text("B");
///
/// let engine = EventLayoutEngine::new(&scale, FixedMetrics::default(), 400.0);
/// let layout = engine.layout([&a, &b].into_iter().enumerate());
///
/// assert_eq!(layout.shapes()[0].level(), 0);
/// assert_ne!(layout.shapes()[1].level(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct EventLayoutEngine<'s, M> {
    scale: &'s TimeScale,
    measure: M,
    centerline: f32,
    policy: ConflictPolicy,
    max_levels: Option<usize>,
}

impl<'s, M: TextMeasure> EventLayoutEngine<'s, M> {
    pub fn new(scale: &'s TimeScale, measure: M, centerline: f32) -> Self {
        Self {
            scale,
            measure,
            centerline,
            policy: ConflictPolicy::default(),
            max_levels: None,
        }
    }

    pub fn with_policy(mut self, policy: ConflictPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Caps the number of levels searched. Values below 1 are treated as 1.
    pub fn with_max_levels(mut self, max_levels: Option<usize>) -> Self {
        self.max_levels = max_levels.map(|max| max.max(1));
        self
    }

    /// Top edge of a rectangle on the given unsigned level.
    pub fn level_y(&self, level: usize) -> f32 {
        if level == 0 {
            return self.centerline;
        }
        let direction = if level % 2 == 0 { -1.0 } else { 1.0 };
        self.centerline + direction * (LEVEL_BASE_OFFSET + LEVEL_SPACING * level as f32)
    }

    /// Places the given `(source_index, event)` pairs.
    ///
    /// Events are stably sorted by start before packing, so ties keep their
    /// input order.
    pub fn layout<'a, I>(&self, events: I) -> EventLayout<'a>
    where
        I: IntoIterator<Item = (usize, &'a Event)>,
    {
        let mut events: Vec<(usize, &'a Event)> = events.into_iter().collect();
        events.sort_by_key(|(_, event)| event.start());

        let mut packer = Packer::default();
        for (source_index, event) in events {
            let size = match self.event_size(event) {
                Ok(size) => size,
                Err(error) => {
                    warn!(source_index = source_index, err:% = error; "Skipping event with unmeasurable label");
                    packer.skipped.push(SkippedEvent {
                        source_index,
                        error,
                    });
                    continue;
                }
            };
            self.place(&mut packer, source_index, event, size);
        }

        debug!(
            shapes = packer.shapes.len(),
            levels = packer.levels.len(),
            exemptions = packer.exemptions.len(),
            skipped = packer.skipped.len();
            "Events laid out"
        );

        EventLayout {
            shapes: packer.shapes,
            exemptions: packer.exemptions,
            skipped: packer.skipped,
        }
    }

    /// Width and height of the rectangle, plus the raw label size.
    fn event_size(&self, event: &Event) -> Result<(Size, Size), MeasureError> {
        let start_x = self.scale.to_x(event.start());
        let end_x = event
            .end()
            .map(|end| self.scale.to_x(end))
            .unwrap_or(start_x + DEFAULT_EVENT_SPAN);
        let time_width = (end_x - start_x).max(MIN_EVENT_WIDTH);

        let label = self.measure.measure(event.label())?;
        let width = time_width.max(label.width() + LABEL_PADDING_X);
        let height = label.height() + LABEL_PADDING_Y;
        Ok((Size::new(width, height), label))
    }

    fn place<'a>(
        &self,
        packer: &mut Packer<'a>,
        source_index: usize,
        event: &'a Event,
        (size, label_size): (Size, Size),
    ) {
        let x = self.scale.to_x(event.start());
        let candidate = |level: usize| Bounds::new_from_top_left(Point::new(x, self.level_y(level)), size);

        let mut level = 0;
        let mut forced = false;
        while packer.is_blocked(self.policy, level, &candidate(level)) {
            if self.max_levels.is_some_and(|max| level + 1 >= max) {
                forced = true;
                break;
            }
            level += 1;
        }

        let bounds = candidate(level);
        let id = ShapeId(packer.shapes.len());
        let (same_level, other_levels) = packer.conflicts(level, &bounds);

        let (widened, forced_over) = match self.policy {
            ConflictPolicy::Legacy => (same_level, other_levels),
            ConflictPolicy::Strict => (Vec::new(), [same_level, other_levels].concat()),
        };
        for conflict in &widened {
            packer.widen(*conflict);
        }

        for (conflicts, kind) in [
            (widened, ExemptionKind::Widened),
            (forced_over, ExemptionKind::Forced),
        ] {
            if conflicts.is_empty() {
                continue;
            }
            warn!(
                shape:% = id,
                source_index = source_index,
                level = level,
                forced = forced,
                kind:? = kind,
                conflicts = conflicts.len();
                "Event placed over existing events"
            );
            packer.exemptions.push(Exemption {
                shape: id,
                conflicts,
                kind,
            });
        }

        if packer.levels.len() <= level {
            packer.levels.resize_with(level + 1, Vec::new);
        }
        packer.levels[level].push(id);
        packer.shapes.push(PlacedShape {
            id,
            source_index,
            event,
            bounds,
            level: signed_level(level),
            label_size,
        });
    }
}

/// Maps the unsigned search index onto the signed level.
fn signed_level(level: usize) -> i32 {
    let level = i32::try_from(level).unwrap_or(i32::MAX);
    if level % 2 == 0 { -level } else { level }
}

/// Occupancy state of one packing pass.
#[derive(Debug, Default)]
struct Packer<'a> {
    shapes: Vec<PlacedShape<'a>>,
    levels: Vec<Vec<ShapeId>>,
    exemptions: Vec<Exemption>,
    skipped: Vec<SkippedEvent>,
}

impl Packer<'_> {
    fn is_blocked(&self, policy: ConflictPolicy, level: usize, candidate: &Bounds) -> bool {
        match policy {
            ConflictPolicy::Strict => self
                .shapes
                .iter()
                .any(|shape| shape.bounds.intersects(candidate)),
            ConflictPolicy::Legacy => self.levels.get(level).is_some_and(|band| {
                band.iter()
                    .any(|id| self.shapes[id.0].bounds.intersects(candidate))
            }),
        }
    }

    /// Grows a placed shape by [`WIDEN_STEP`]. New overlaps caused by the
    /// growth are recorded as widened exemptions of that shape.
    fn widen(&mut self, id: ShapeId) {
        let grown = self.shapes[id.0].bounds.grow_height(WIDEN_STEP);
        let exemptions = &self.exemptions;
        let uncovered: Vec<ShapeId> = self
            .shapes
            .iter()
            .filter(|shape| shape.id != id && shape.bounds.intersects(&grown))
            .filter(|shape| !exemptions.iter().any(|e| e.covers(id, shape.id)))
            .map(|shape| shape.id)
            .collect();

        self.shapes[id.0].bounds = grown;
        if !uncovered.is_empty() {
            trace!(shape:% = id, conflicts = uncovered.len(); "Widened shape overlaps neighbours");
            self.exemptions.push(Exemption {
                shape: id,
                conflicts: uncovered,
                kind: ExemptionKind::Widened,
            });
        }
    }

    /// Placed shapes intersecting `candidate`, split into those recorded on
    /// `level` and those on other levels.
    fn conflicts(&self, level: usize, candidate: &Bounds) -> (Vec<ShapeId>, Vec<ShapeId>) {
        let band = self.levels.get(level).map(Vec::as_slice).unwrap_or_default();
        self.shapes
            .iter()
            .filter(|shape| shape.bounds.intersects(candidate))
            .map(|shape| shape.id)
            .partition(|id| band.contains(id))
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeDelta};
    use float_cmp::assert_approx_eq;
    use proptest::prelude::*;

    use chronoline_core::{document::Instant, measure::FixedMetrics};

    use super::*;
    use crate::window::TimeWindow;

    const CENTERLINE: f32 = 400.0;

    fn day0() -> Instant {
        NaiveDate::from_ymd_opt(2025, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn one_day_scale() -> TimeScale {
        TimeScale::new(TimeWindow::new(day0(), day0() + TimeDelta::days(1)).unwrap(), 2000.0)
    }

    fn engine(scale: &TimeScale) -> EventLayoutEngine<'_, FixedMetrics> {
        EventLayoutEngine::new(scale, FixedMetrics::new(6.0, 14.0), CENTERLINE)
    }

    fn indexed(events: &[Event]) -> impl Iterator<Item = (usize, &Event)> {
        events.iter().enumerate()
    }

    struct Failing;

    impl TextMeasure for Failing {
        fn measure(&self, text: &str) -> Result<Size, MeasureError> {
            if text == "bad" {
                Err(MeasureError::Rejected {
                    text: text.to_string(),
                    reason: "no glyphs".to_string(),
                })
            } else {
                FixedMetrics::default().measure(text)
            }
        }
    }

    #[test]
    fn test_overlapping_pair_is_stacked() {
        let scale = one_day_scale();
        let events = vec![
            Event::new(day0())
                .with_end(day0() + TimeDelta::hours(2))
                .with_text("A"),
            Event::new(day0() + TimeDelta::hours(1))
                .with_end(day0() + TimeDelta::hours(3))
                .with_text("B"),
        ];

        let layout = engine(&scale).layout(indexed(&events));
        let shapes = layout.shapes();

        assert_eq!(shapes.len(), 2);
        assert_eq!(shapes[0].level(), 0);
        assert_eq!(shapes[1].level(), 1);
        assert_approx_eq!(f32, shapes[0].bounds().min_y(), CENTERLINE);
        assert_approx_eq!(f32, shapes[1].bounds().min_y(), CENTERLINE + 65.0);
        assert!(!shapes[0].bounds().intersects(&shapes[1].bounds()));
        assert!(layout.exemptions().is_empty());
    }

    #[test]
    fn test_rectangle_dimensions() {
        let scale = one_day_scale();
        let events = vec![
            // 2h span is ~166.7 units, wider than the label
            Event::new(day0())
                .with_end(day0() + TimeDelta::hours(2))
                .with_text("Short"),
            // No end: default span of 100, label is wider
            Event::new(day0() + TimeDelta::hours(6)).with_text("A considerably longer label"),
            // Zero span floors at the minimum width
            Event::new(day0() + TimeDelta::hours(12))
                .with_end(day0() + TimeDelta::hours(12))
                .with_text("x"),
        ];

        let layout = engine(&scale).layout(indexed(&events));
        let shapes = layout.shapes();

        assert_approx_eq!(f32, shapes[0].bounds().width(), 2000.0 / 12.0, epsilon = 0.01);
        assert_approx_eq!(f32, shapes[0].bounds().height(), 22.0);
        assert_approx_eq!(f32, shapes[1].bounds().width(), 27.0 * 6.0 + 10.0);
        assert_approx_eq!(f32, shapes[2].bounds().width(), MIN_EVENT_WIDTH);
        assert_approx_eq!(f32, shapes[2].label_size().width(), 6.0);
    }

    #[test]
    fn test_inverted_event_floors_at_min_width() {
        let scale = one_day_scale();
        let events = vec![
            Event::new(day0() + TimeDelta::hours(5))
                .with_end(day0() + TimeDelta::hours(1))
                .with_text("x"),
        ];

        let layout = engine(&scale).layout(indexed(&events));
        assert_approx_eq!(f32, layout.shapes()[0].bounds().width(), MIN_EVENT_WIDTH);
    }

    #[test]
    fn test_levels_alternate_around_centerline() {
        let scale = one_day_scale();
        let events: Vec<Event> = (0..5).map(|_| Event::new(day0()).with_text("same")).collect();

        let layout = engine(&scale).layout(indexed(&events));
        let levels: Vec<i32> = layout.shapes().iter().map(PlacedShape::level).collect();
        assert_eq!(levels, vec![0, 1, -2, 3, -4]);

        let tops: Vec<f32> = layout.shapes().iter().map(|s| s.bounds().min_y()).collect();
        assert_approx_eq!(f32, tops[1], CENTERLINE + 65.0);
        assert_approx_eq!(f32, tops[2], CENTERLINE - 90.0);
        assert_approx_eq!(f32, tops[3], CENTERLINE + 115.0);
        assert_approx_eq!(f32, tops[4], CENTERLINE - 140.0);
    }

    #[test]
    fn test_events_sorted_by_start_keep_source_index() {
        let scale = one_day_scale();
        let events = vec![
            Event::new(day0() + TimeDelta::hours(10)).with_text("late"),
            Event::new(day0() + TimeDelta::hours(1)).with_text("early"),
        ];

        let layout = engine(&scale).layout(indexed(&events));
        assert_eq!(layout.shapes()[0].source_index(), 1);
        assert_eq!(layout.shapes()[0].event().label(), "early");
        assert_eq!(layout.shapes()[1].source_index(), 0);
        assert_eq!(layout.shapes()[1].id().index(), 1);
    }

    #[test]
    fn test_measurement_failure_skips_event() {
        let scale = one_day_scale();
        let events = vec![
            Event::new(day0()).with_text("bad"),
            Event::new(day0()).with_text("good"),
        ];

        let layout = EventLayoutEngine::new(&scale, Failing, CENTERLINE).layout(indexed(&events));
        assert_eq!(layout.shapes().len(), 1);
        assert_eq!(layout.shapes()[0].level(), 0);
        assert_eq!(layout.skipped().len(), 1);
        assert_eq!(layout.skipped()[0].source_index(), 0);
        assert!(matches!(layout.skipped()[0].error(), MeasureError::Rejected { .. }));
    }

    #[test]
    fn test_level_cap_forces_placement() {
        let scale = one_day_scale();
        let events: Vec<Event> = (0..3).map(|_| Event::new(day0()).with_text("same")).collect();

        let layout = engine(&scale)
            .with_max_levels(Some(2))
            .layout(indexed(&events));

        let shapes = layout.shapes();
        assert_eq!(shapes[2].level(), 1);
        assert_eq!(layout.exemptions().len(), 1);

        let exemption = &layout.exemptions()[0];
        assert_eq!(exemption.kind(), ExemptionKind::Forced);
        assert_eq!(exemption.shape(), shapes[2].id());
        assert_eq!(exemption.conflicts(), &[shapes[1].id()]);
        assert!(layout.is_exempt(shapes[1].id(), shapes[2].id()));
    }

    #[test]
    fn test_legacy_leaves_other_levels_unchanged() {
        let scale = one_day_scale();
        // The first label is tall enough to reach from level 0 into level 1.
        let events = vec![
            Event::new(day0()).with_text("1\n2\n3\n4\n5"),
            Event::new(day0()).with_text("level one"),
        ];

        let strict = engine(&scale).layout(indexed(&events));
        assert_eq!(strict.shapes()[1].level(), -2);
        assert!(strict.exemptions().is_empty());

        let legacy = engine(&scale)
            .with_policy(ConflictPolicy::Legacy)
            .layout(indexed(&events));
        let shapes = legacy.shapes();

        assert_eq!(shapes[1].level(), 1);
        assert_approx_eq!(f32, shapes[0].bounds().height(), 5.0 * 14.0 + 8.0);
        assert_eq!(legacy.exemptions().len(), 1);
        assert_eq!(legacy.exemptions()[0].kind(), ExemptionKind::Forced);
        assert_eq!(legacy.exemptions()[0].conflicts(), &[shapes[0].id()]);
        assert!(legacy.is_exempt(shapes[0].id(), shapes[1].id()));
    }

    #[test]
    fn test_legacy_widens_same_level_conflicts() {
        let scale = one_day_scale();
        let events: Vec<Event> = (0..2).map(|_| Event::new(day0()).with_text("same")).collect();

        let layout = engine(&scale)
            .with_policy(ConflictPolicy::Legacy)
            .with_max_levels(Some(1))
            .layout(indexed(&events));
        let shapes = layout.shapes();

        assert_eq!(shapes[1].level(), 0);
        assert_approx_eq!(f32, shapes[0].bounds().height(), 14.0 + 8.0 + WIDEN_STEP);
        assert_approx_eq!(f32, shapes[1].bounds().height(), 14.0 + 8.0);
        assert_eq!(layout.exemptions().len(), 1);
        assert_eq!(layout.exemptions()[0].kind(), ExemptionKind::Widened);
        assert_eq!(layout.exemptions()[0].conflicts(), &[shapes[0].id()]);
    }

    #[test]
    fn test_policy_deserialize() {
        let policy: ConflictPolicy = serde_json::from_str("\"legacy\"").unwrap();
        assert_eq!(policy, ConflictPolicy::Legacy);
    }

    fn arbitrary_events() -> impl Strategy<Value = Vec<Event>> {
        prop::collection::vec(
            (0i64..1440, prop::option::of(0i64..600), 0usize..30, 1usize..3),
            0..40,
        )
        .prop_map(|specs| {
            specs
                .into_iter()
                .map(|(start, span, text_len, lines)| {
                    let start = day0() + TimeDelta::minutes(start);
                    let text = vec!["w".repeat(text_len); lines].join("\n");
                    let event = Event::new(start).with_text(text);
                    match span {
                        Some(span) => event.with_end(start + TimeDelta::minutes(span)),
                        None => event,
                    }
                })
                .collect()
        })
    }

    proptest! {
        #[test]
        fn strict_layout_has_no_unexempt_overlap(
            events in arbitrary_events(),
            max_levels in prop::option::of(1usize..6),
        ) {
            let scale = one_day_scale();
            let layout = engine(&scale).with_max_levels(max_levels).layout(indexed(&events));
            let shapes = layout.shapes();

            prop_assert_eq!(shapes.len(), events.len());
            for (i, a) in shapes.iter().enumerate() {
                for b in &shapes[i + 1..] {
                    if a.bounds().intersects(&b.bounds()) {
                        prop_assert!(layout.is_exempt(a.id(), b.id()));
                    }
                }
            }
            if max_levels.is_none() {
                prop_assert!(layout.exemptions().is_empty());
            }
        }

        #[test]
        fn layout_is_deterministic(events in arbitrary_events()) {
            let scale = one_day_scale();
            let first = engine(&scale).layout(indexed(&events));
            let second = engine(&scale).layout(indexed(&events));
            prop_assert_eq!(first.shapes(), second.shapes());
        }
    }
}
