//! Resolution of the visible time window.

use chrono::TimeDelta;
use log::debug;
use thiserror::Error;

use chronoline_core::document::{Instant, ViewWindow};

/// Span used when a view has a start but no end.
pub const DEFAULT_VIEW_SPAN: TimeDelta = TimeDelta::days(365);

/// A window that cannot be laid out.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WindowError {
    #[error("view window must end after it starts (start {start}, end {end})")]
    NonPositive { start: Instant, end: Instant },

    #[error("view window starting at {0} cannot be extended by the default span")]
    Overflow(Instant),
}

/// A resolved, non-empty `[start, end]` window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    start: Instant,
    end: Instant,
}

impl TimeWindow {
    /// Creates a window from explicit bounds.
    ///
    /// # Errors
    ///
    /// Returns [`WindowError::NonPositive`] unless `end` is after `start`.
    pub fn new(start: Instant, end: Instant) -> Result<Self, WindowError> {
        if end <= start {
            return Err(WindowError::NonPositive { start, end });
        }
        Ok(Self { start, end })
    }

    /// Fills in the missing bounds of a requested view.
    ///
    /// An absent start defaults to `now`; an absent end defaults to
    /// [`DEFAULT_VIEW_SPAN`] after the start. `now` is a parameter so that
    /// the result is reproducible.
    ///
    /// ```
    /// # use chrono::NaiveDate;
    /// # use chronoline::window::TimeWindow;
    /// # use chronoline_core::document::ViewWindow;
    /// let now = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
    /// let window = TimeWindow::resolve(ViewWindow::default(), now).unwrap();
    /// assert_eq!(window.start(), now);
    /// assert_eq!((window.end() - window.start()).num_days(), 365);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns a [`WindowError`] when the resolved window is empty or
    /// inverted.
    pub fn resolve(view: ViewWindow, now: Instant) -> Result<Self, WindowError> {
        let start = view.start().unwrap_or(now);
        let end = match view.end() {
            Some(end) => end,
            None => start
                .checked_add_signed(DEFAULT_VIEW_SPAN)
                .ok_or(WindowError::Overflow(start))?,
        };

        let window = Self::new(start, end)?;
        debug!(start:% = window.start, end:% = window.end; "View window resolved");
        Ok(window)
    }

    pub fn start(&self) -> Instant {
        self.start
    }

    pub fn end(&self) -> Instant {
        self.end
    }

    /// Length of the window, always positive.
    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }
}
