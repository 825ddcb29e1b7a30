//! Locale-aware axis labels.
//!
//! The label format depends on the axis step, so that a one-minute window
//! shows seconds while a decade shows years:
//!
//! | Step | Format | Example (`en-US`) |
//! |------|--------|-------------------|
//! | 1 second | `HH:MM:SS` | `09:30:15` |
//! | 1 minute | `HH:MM` | `09:30` |
//! | 1 hour | `HH:MM  D Mon` | `09:00  14 Mar` |
//! | 1 day, 7 days | `Dow D` | `Fri 14` |
//! | 30 days | `D Mon` | `14 Mar` |
//! | 365 days | `YYYY` | `2025` |

use chrono::{Datelike, Timelike, Weekday};
use serde::Deserialize;

use chronoline_core::document::Instant;

use crate::step::Step;

/// Language of month names, weekday names and week labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "en-US")]
    EnUs,
    #[serde(rename = "pt-BR")]
    PtBr,
}

impl Locale {
    fn month_abbr(self, month0: u32) -> &'static str {
        const EN: [&str; 12] = [
            "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
        ];
        const PT: [&str; 12] = [
            "jan", "fev", "mar", "abr", "mai", "jun", "jul", "ago", "set", "out", "nov", "dez",
        ];
        let table = match self {
            Locale::EnUs => &EN,
            Locale::PtBr => &PT,
        };
        table[month0 as usize % 12]
    }

    fn weekday_abbr(self, weekday: Weekday) -> &'static str {
        const EN: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
        const PT: [&str; 7] = ["dom", "seg", "ter", "qua", "qui", "sex", "sáb"];
        let table = match self {
            Locale::EnUs => &EN,
            Locale::PtBr => &PT,
        };
        table[weekday.num_days_from_sunday() as usize]
    }

    fn week_word(self) -> &'static str {
        match self {
            Locale::EnUs => "Week",
            Locale::PtBr => "Semana",
        }
    }
}

/// Formats axis labels for one locale.
#[derive(Debug, Clone, Copy, Default)]
pub struct LabelFormatter {
    locale: Locale,
}

impl LabelFormatter {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Formats a fine-axis tick label.
    ///
    /// ```
    /// # use chrono::NaiveDate;
    /// # use chronoline::{label::{LabelFormatter, Locale}, step::Step};
    /// let instant = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap().and_hms_opt(9, 5, 0).unwrap();
    /// let formatter = LabelFormatter::new(Locale::EnUs);
    ///
    /// assert_eq!(formatter.format(instant, Step::Hour), "09:05  14 Mar");
    /// assert_eq!(formatter.format(instant, Step::Day), "Fri 14");
    /// assert_eq!(LabelFormatter::new(Locale::PtBr).format(instant, Step::Day), "sex 14");
    /// ```
    pub fn format(&self, instant: Instant, step: Step) -> String {
        let (hour, minute) = (instant.hour(), instant.minute());
        match step {
            Step::Second => format!("{hour:02}:{minute:02}:{:02}", instant.second()),
            Step::Minute => format!("{hour:02}:{minute:02}"),
            Step::Hour => format!("{hour:02}:{minute:02}  {}", self.day_month(instant)),
            Step::Day | Step::Week => format!(
                "{} {}",
                self.locale.weekday_abbr(instant.weekday()),
                instant.day()
            ),
            Step::Month => self.day_month(instant),
            Step::Year => instant.year().to_string(),
        }
    }

    /// Saturdays and Sundays are emphasized on day and week axes.
    pub fn is_emphasized(&self, instant: Instant, step: Step) -> bool {
        matches!(step, Step::Day | Step::Week)
            && matches!(instant.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// `D Mon YYYY`, the date form used in week labels.
    pub fn format_date(&self, instant: Instant) -> String {
        format!("{} {}", self.day_month(instant), instant.year())
    }

    /// `Week n (D Mon YYYY - D Mon YYYY)`.
    pub fn week_label(&self, index: usize, start: Instant, end: Instant) -> String {
        format!(
            "{} {} ({} - {})",
            self.locale.week_word(),
            index,
            self.format_date(start),
            self.format_date(end)
        )
    }

    fn day_month(&self, instant: Instant) -> String {
        format!("{} {}", instant.day(), self.locale.month_abbr(instant.month0()))
    }
}
