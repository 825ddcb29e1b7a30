//! Layout of a whole timeline.
//!
//! [`TimelineLayout::compute`] resolves the view window, builds the shared
//! [`TimeScale`] and runs every positioning stage against it:
//!
//! ```text
//! TimelineDocument
//!     ↓ resolve view window
//! TimeScale
//!     ├─ EraRenderer        → era bands
//!     ├─ EventLayoutEngine  → placed event shapes
//!     └─ AxisGenerator      → fine ticks and week bands
//! ```

mod eras;
mod events;

pub use eras::{EraBand, EraRenderer, MIN_ERA_WIDTH};
pub use events::{
    ConflictPolicy, DEFAULT_EVENT_SPAN, EventLayout, EventLayoutEngine, Exemption, ExemptionKind,
    LABEL_PADDING_X, LABEL_PADDING_Y, LEVEL_BASE_OFFSET, LEVEL_SPACING, MIN_EVENT_WIDTH,
    PlacedShape, ShapeId, SkippedEvent, WIDEN_STEP,
};

use log::info;

use chronoline_core::{
    document::{Event, Instant, TimelineDocument},
    geometry::Size,
    measure::TextMeasure,
};

use crate::{
    axis::{AxisGenerator, AxisTick, WeekBand},
    config::LayoutConfig,
    error::ChronolineError,
    label::LabelFormatter,
    scale::TimeScale,
    step::Step,
    window::TimeWindow,
};

/// Every positioned element of one timeline render.
#[derive(Debug, Clone)]
pub struct TimelineLayout<'a> {
    document: &'a TimelineDocument,
    scale: TimeScale,
    size: Size,
    centerline: f32,
    formatter: LabelFormatter,
    step: Step,
    eras: Vec<EraBand<'a>>,
    events: EventLayout<'a>,
    hidden_events: usize,
    ticks: Vec<AxisTick>,
    weeks: Vec<WeekBand>,
}

impl<'a> TimelineLayout<'a> {
    /// Lays out `document` on a canvas described by `config`.
    ///
    /// `now` stands in for a missing view start. Events whose category is
    /// hidden by the document or listed in `hidden` are left out.
    ///
    /// # Errors
    ///
    /// Returns [`ChronolineError::Config`] for a degenerate canvas or an
    /// empty or inverted view window.
    pub fn compute<M: TextMeasure>(
        document: &'a TimelineDocument,
        config: &LayoutConfig,
        measure: M,
        now: Instant,
        hidden: &[String],
    ) -> Result<Self, ChronolineError> {
        config.validate().map_err(ChronolineError::Config)?;

        let window = TimeWindow::resolve(document.view(), now)?;
        let scale = TimeScale::new(window, config.width());
        let formatter = LabelFormatter::new(config.locale());
        let centerline = config.centerline();

        let eras = EraRenderer::new(&scale).render(document.eras());

        let is_visible = |event: &Event| {
            event.category().is_none_or(|category| {
                !document.is_category_hidden(category) && !hidden.iter().any(|h| h == category)
            })
        };
        let visible: Vec<(usize, &'a Event)> = document
            .events()
            .iter()
            .enumerate()
            .filter(|(_, event)| is_visible(*event))
            .collect();
        let hidden_events = document.events().len() - visible.len();

        let events = EventLayoutEngine::new(&scale, measure, centerline)
            .with_policy(config.conflict_policy())
            .with_max_levels(config.max_levels())
            .layout(visible);

        let axis = AxisGenerator::new(&scale, formatter);
        let step = axis.step()?;
        let ticks = axis.fine_ticks()?;
        let weeks = axis.week_bands();

        info!(
            step:% = step,
            eras = eras.len(),
            events = events.shapes().len(),
            hidden_events = hidden_events,
            exemptions = events.exemptions().len(),
            skipped = events.skipped().len();
            "Timeline laid out"
        );

        Ok(Self {
            document,
            scale,
            size: Size::new(config.width(), config.height()),
            centerline,
            formatter,
            step,
            eras,
            events,
            hidden_events,
            ticks,
            weeks,
        })
    }

    pub fn document(&self) -> &'a TimelineDocument {
        self.document
    }

    pub fn scale(&self) -> &TimeScale {
        &self.scale
    }

    /// Canvas size.
    pub fn size(&self) -> Size {
        self.size
    }

    pub fn centerline(&self) -> f32 {
        self.centerline
    }

    pub fn formatter(&self) -> LabelFormatter {
        self.formatter
    }

    /// Step of the fine axis.
    pub fn step(&self) -> Step {
        self.step
    }

    pub fn eras(&self) -> &[EraBand<'a>] {
        &self.eras
    }

    pub fn events(&self) -> &EventLayout<'a> {
        &self.events
    }

    /// Number of events left out because their category is hidden.
    pub fn hidden_events(&self) -> usize {
        self.hidden_events
    }

    pub fn ticks(&self) -> &[AxisTick] {
        &self.ticks
    }

    pub fn weeks(&self) -> &[WeekBand] {
        &self.weeks
    }
}
