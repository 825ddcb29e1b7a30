//! Time axis generation.
//!
//! Two axes are derived from the same [`TimeScale`]:
//! - the fine axis, one [`AxisTick`] per adaptive [`Step`] from the window
//!   start up to and including the window end
//! - the week axis, consecutive seven-day [`WeekBand`]s from the window start

use chrono::TimeDelta;
use log::debug;

use chronoline_core::document::Instant;

use crate::{
    label::LabelFormatter,
    scale::TimeScale,
    step::{Step, StepError},
};

/// A labeled position on the fine axis.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    instant: Instant,
    x: f32,
    label: String,
    emphasized: bool,
}

impl AxisTick {
    pub fn instant(&self) -> Instant {
        self.instant
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// `true` for weekend ticks on day and week axes.
    pub fn emphasized(&self) -> bool {
        self.emphasized
    }
}

/// One seven-day window of the week axis.
///
/// `end` is six days after `start`, except for the last band, which ends at
/// the window end.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekBand {
    index: usize,
    start: Instant,
    end: Instant,
    x: f32,
    end_x: f32,
    label: String,
}

impl WeekBand {
    /// 1-based position of this week in the window.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn start(&self) -> Instant {
        self.start
    }

    pub fn end(&self) -> Instant {
        self.end
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn end_x(&self) -> f32 {
        self.end_x
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

/// Generates both axes for one scale and locale.
#[derive(Debug, Clone, Copy)]
pub struct AxisGenerator<'s> {
    scale: &'s TimeScale,
    formatter: LabelFormatter,
}

impl<'s> AxisGenerator<'s> {
    pub fn new(scale: &'s TimeScale, formatter: LabelFormatter) -> Self {
        Self { scale, formatter }
    }

    /// The step used by [`fine_ticks`](Self::fine_ticks).
    ///
    /// # Errors
    ///
    /// Propagates [`StepError`] for a non-positive window.
    pub fn step(&self) -> Result<Step, StepError> {
        Step::resolve(self.scale.window().duration())
    }

    /// Ticks at `start + k * step` for every `k` that does not pass the
    /// window end.
    ///
    /// # Errors
    ///
    /// Propagates [`StepError`] for a non-positive window.
    pub fn fine_ticks(&self) -> Result<Vec<AxisTick>, StepError> {
        let step = self.step()?;
        let window = self.scale.window();

        let mut ticks = Vec::new();
        let mut current = Some(window.start());
        while let Some(instant) = current.filter(|instant| *instant <= window.end()) {
            ticks.push(AxisTick {
                instant,
                x: self.scale.to_x(instant),
                label: self.formatter.format(instant, step),
                emphasized: self.formatter.is_emphasized(instant, step),
            });
            current = instant.checked_add_signed(step.duration());
        }

        debug!(step:% = step, ticks = ticks.len(); "Fine axis generated");
        Ok(ticks)
    }

    /// Consecutive seven-day bands covering the window.
    pub fn week_bands(&self) -> Vec<WeekBand> {
        let window = self.scale.window();
        let week = TimeDelta::days(7);
        let last_day = TimeDelta::days(6);

        let mut bands = Vec::new();
        let mut current = Some(window.start());
        while let Some(start) = current.filter(|start| *start < window.end()) {
            let next = start.checked_add_signed(week);
            let end = match next {
                Some(next) if next < window.end() => start + last_day,
                _ => window.end(),
            };
            let index = bands.len() + 1;

            bands.push(WeekBand {
                index,
                start,
                end,
                x: self.scale.to_x(start),
                end_x: self.scale.to_x(end),
                label: self.formatter.week_label(index, start, end),
            });
            current = next;
        }

        debug!(weeks = bands.len(); "Week axis generated");
        bands
    }
}
