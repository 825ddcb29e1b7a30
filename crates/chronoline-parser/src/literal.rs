//! Parsers for the scalar literals of a timeline document.
//!
//! Instants accept these forms:
//!
//! | Form | Example |
//! |------|---------|
//! | date and time | `2025-03-14 09:30:00` |
//! | ISO 8601 | `2025-03-14T09:30:00.250Z` |
//! | date, hours and minutes | `2025-03-14 09:30` |
//! | date only | `2025-03-14` (midnight) |
//!
//! A trailing `Z` is accepted and ignored; instants are wall-clock times.
//!
//! Colors are either `r,g,b` triples of 8-bit channels, the convention of
//! timeline files, or any CSS color string.

use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;
use winnow::{
    ModalResult, Parser,
    ascii::{digit1, space0},
    combinator::{delimited, eof, opt, preceded, terminated},
    error::{ContextError, ErrMode},
    stream::AsChar,
    token::{one_of, take_while},
};

use chronoline_core::{color::Color, document::Instant};

/// A literal that could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LiteralError {
    #[error("invalid instant `{0}`")]
    Instant(String),

    #[error("{0}")]
    Color(String),
}

/// Parses an instant literal.
///
/// # Examples
///
/// ```
/// # use chronoline_parser::parse_instant;
/// let instant = parse_instant("2025-03-14 09:30").unwrap();
/// assert_eq!(instant.to_string(), "2025-03-14 09:30:00");
///
/// assert!(parse_instant("2025-02-30").is_err());
/// ```
pub fn parse_instant(text: &str) -> Result<Instant, LiteralError> {
    instant
        .parse(text.trim())
        .map_err(|_| LiteralError::Instant(text.to_string()))
}

/// Parses a color literal, either `r,g,b` or CSS.
///
/// ```
/// # use chronoline_parser::parse_color;
/// # use chronoline_core::color::Color;
/// assert_eq!(parse_color("255, 0, 0").unwrap(), Color::from_rgb8(255, 0, 0));
/// assert!(parse_color("#00ff00").is_ok());
/// assert!(parse_color("300,0,0").is_err());
/// ```
pub fn parse_color(text: &str) -> Result<Color, LiteralError> {
    let text = text.trim();
    if let Ok((r, g, b)) = rgb_triple.parse(text) {
        return Ok(Color::from_rgb8(r, g, b));
    }
    Color::new(text).map_err(LiteralError::Color)
}

fn fixed_digits<'i>(count: usize) -> impl Parser<&'i str, u32, ErrMode<ContextError>> {
    take_while(count, AsChar::is_dec_digit).try_map(str::parse::<u32>)
}

fn date(input: &mut &str) -> ModalResult<NaiveDate> {
    (fixed_digits(4), '-', fixed_digits(2), '-', fixed_digits(2))
        .verify_map(|(year, _, month, _, day)| {
            i32::try_from(year)
                .ok()
                .and_then(|year| NaiveDate::from_ymd_opt(year, month, day))
        })
        .parse_next(input)
}

fn time(input: &mut &str) -> ModalResult<NaiveTime> {
    (
        fixed_digits(2),
        preceded(':', fixed_digits(2)),
        opt(preceded(
            ':',
            (
                fixed_digits(2),
                opt(preceded('.', take_while(1..=9, AsChar::is_dec_digit))),
            ),
        )),
    )
        .verify_map(|(hour, minute, seconds)| {
            let (second, fraction) = seconds.unwrap_or((0, None));
            let nanos = fraction.map_or(Some(0), fraction_to_nanos)?;
            NaiveTime::from_hms_nano_opt(hour, minute, second, nanos)
        })
        .parse_next(input)
}

fn instant(input: &mut &str) -> ModalResult<Instant> {
    terminated(
        (date, opt(preceded(one_of([' ', 'T']), time))),
        (opt('Z'), eof),
    )
    .map(|(date, time)| date.and_time(time.unwrap_or(NaiveTime::MIN)))
    .parse_next(input)
}

/// `"25"` is 250 ms, `"123456789"` is 123456789 ns.
fn fraction_to_nanos(digits: &str) -> Option<u32> {
    let value: u32 = digits.parse().ok()?;
    let scale = 10u32.checked_pow(9u32.checked_sub(digits.len() as u32)?)?;
    value.checked_mul(scale)
}

fn channel(input: &mut &str) -> ModalResult<u8> {
    delimited(space0, digit1.try_map(str::parse::<u8>), space0).parse_next(input)
}

fn rgb_triple(input: &mut &str) -> ModalResult<(u8, u8, u8)> {
    terminated((channel, ',', channel, ',', channel), eof)
        .map(|(r, _, g, _, b)| (r, g, b))
        .parse_next(input)
}
