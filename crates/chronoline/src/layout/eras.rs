//! Background bands for eras.

use log::debug;

use chronoline_core::{
    color::Color,
    document::{Era, Instant},
};

use crate::scale::TimeScale;

/// Narrowest band an era can get.
pub const MIN_ERA_WIDTH: f32 = 1.0;

/// Horizontal extent of one era, with missing bounds clamped to the window.
#[derive(Debug, Clone, PartialEq)]
pub struct EraBand<'a> {
    era: &'a Era,
    start: Instant,
    end: Instant,
    x: f32,
    width: f32,
}

impl<'a> EraBand<'a> {
    pub fn era(&self) -> &'a Era {
        self.era
    }

    pub fn name(&self) -> Option<&'a str> {
        self.era.name()
    }

    pub fn color(&self) -> Option<Color> {
        self.era.color()
    }

    /// Resolved start, the window start when the era has none.
    pub fn start(&self) -> Instant {
        self.start
    }

    /// Resolved end, the window end when the era has none.
    pub fn end(&self) -> Instant {
        self.end
    }

    /// Left edge of the band.
    pub fn x(&self) -> f32 {
        self.x
    }

    /// Width of the band, at least [`MIN_ERA_WIDTH`].
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Right edge of the band.
    pub fn end_x(&self) -> f32 {
        self.x + self.width
    }
}

/// Projects eras onto a scale.
#[derive(Debug, Clone, Copy)]
pub struct EraRenderer<'s> {
    scale: &'s TimeScale,
}

impl<'s> EraRenderer<'s> {
    pub fn new(scale: &'s TimeScale) -> Self {
        Self { scale }
    }

    /// Returns one band per era, in input order.
    pub fn render<'a>(&self, eras: &'a [Era]) -> Vec<EraBand<'a>> {
        let window = self.scale.window();
        let bands: Vec<EraBand<'a>> = eras
            .iter()
            .map(|era| {
                let start = era.start().unwrap_or(window.start());
                let end = era.end().unwrap_or(window.end());
                let x = self.scale.to_x(start);
                let width = (self.scale.to_x(end) - x).max(MIN_ERA_WIDTH);
                EraBand {
                    era,
                    start,
                    end,
                    x,
                    width,
                }
            })
            .collect();

        debug!(eras = bands.len(); "Era bands computed");
        bands
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use float_cmp::assert_approx_eq;

    use super::*;
    use crate::window::TimeWindow;

    fn day(d: u32) -> Instant {
        NaiveDate::from_ymd_opt(2025, 4, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn scale() -> TimeScale {
        TimeScale::new(TimeWindow::new(day(1), day(11)).unwrap(), 1000.0)
    }

    #[test]
    fn test_explicit_bounds() {
        let scale = scale();
        let eras = vec![Era::new(Some(day(2)), Some(day(4))).with_name("Spring")];
        let bands = EraRenderer::new(&scale).render(&eras);

        assert_eq!(bands.len(), 1);
        assert_eq!(bands[0].name(), Some("Spring"));
        assert_approx_eq!(f32, bands[0].x(), 100.0);
        assert_approx_eq!(f32, bands[0].width(), 200.0);
        assert_approx_eq!(f32, bands[0].end_x(), 300.0);
    }

    #[test]
    fn test_missing_bounds_clamp_to_window() {
        let scale = scale();
        let eras = vec![
            Era::new(None, Some(day(6))),
            Era::new(Some(day(6)), None),
            Era::new(None, None),
        ];
        let bands = EraRenderer::new(&scale).render(&eras);

        assert_eq!(bands[0].start(), day(1));
        assert_approx_eq!(f32, bands[0].x(), 0.0);
        assert_eq!(bands[1].end(), day(11));
        assert_approx_eq!(f32, bands[1].end_x(), 1000.0);
        assert_approx_eq!(f32, bands[2].width(), 1000.0);
    }

    #[test]
    fn test_width_floor() {
        let scale = scale();
        let eras = vec![
            Era::new(Some(day(3)), Some(day(3))),
            Era::new(Some(day(5)), Some(day(2))),
        ];
        let bands = EraRenderer::new(&scale).render(&eras);

        assert_approx_eq!(f32, bands[0].width(), MIN_ERA_WIDTH);
        assert_approx_eq!(f32, bands[1].width(), MIN_ERA_WIDTH);
        assert_approx_eq!(f32, bands[1].x(), 400.0);
    }

    #[test]
    fn test_overlapping_eras_are_kept() {
        let scale = scale();
        let eras = vec![
            Era::new(Some(day(1)), Some(day(6))).with_name("A"),
            Era::new(Some(day(4)), Some(day(9))).with_name("B"),
        ];
        let bands = EraRenderer::new(&scale).render(&eras);
        assert_eq!(bands.len(), 2);
        assert!(bands[0].end_x() > bands[1].x());
    }
}
