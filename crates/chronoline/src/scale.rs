//! Linear mapping between instants and horizontal layout positions.

use chrono::{NaiveDateTime, TimeDelta};

use chronoline_core::document::Instant;

use crate::window::TimeWindow;

/// Maps instants to x coordinates across a fixed layout width.
///
/// `to_x(start) == 0` and `to_x(end) == width`. Instants outside the window
/// extrapolate linearly instead of clamping, so an event that starts before
/// the view gets a negative x.
///
/// # Example
///
/// ```
/// # use chrono::NaiveDate;
/// # use chronoline::{scale::TimeScale, window::TimeWindow};
/// let day = |d| NaiveDate::from_ymd_opt(2025, 1, d).unwrap().and_hms_opt(0, 0, 0).unwrap();
/// let window = TimeWindow::new(day(1), day(11)).unwrap();
/// let scale = TimeScale::new(window, 1000.0);
///
/// assert_eq!(scale.to_x(day(6)), 500.0);
/// assert_eq!(scale.to_instant(100.0), day(2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScale {
    window: TimeWindow,
    width: f32,
    window_ms: f64,
}

impl TimeScale {
    pub fn new(window: TimeWindow, width: f32) -> Self {
        Self {
            window,
            width,
            window_ms: window.duration().num_milliseconds() as f64,
        }
    }

    pub fn window(&self) -> TimeWindow {
        self.window
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    /// Horizontal position of `instant`.
    pub fn to_x(&self, instant: Instant) -> f32 {
        let offset_ms = (instant - self.window.start()).num_milliseconds() as f64;
        (offset_ms / self.window_ms * f64::from(self.width)) as f32
    }

    /// Instant at horizontal position `x`, to millisecond precision.
    ///
    /// Positions far enough outside the window to leave the representable
    /// calendar saturate at its limits.
    pub fn to_instant(&self, x: f32) -> Instant {
        let offset_ms = (f64::from(x) / f64::from(self.width) * self.window_ms).round();
        let offset = TimeDelta::try_milliseconds(offset_ms as i64);
        offset
            .and_then(|offset| self.window.start().checked_add_signed(offset))
            .unwrap_or(if offset_ms < 0.0 {
                NaiveDateTime::MIN
            } else {
                NaiveDateTime::MAX
            })
    }
}
