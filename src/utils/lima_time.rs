/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 13/10/25
******************************************************************************/

//! Lima (UTC-5) timestamp handling
//!
//! The backend stores naive `YYYY-MM-DD HH:MM[:SS]` strings that always mean
//! America/Lima civil time. Lima has not observed daylight saving since 1994, so
//! a fixed `-300` minute offset is enough and no timezone database is needed.
//!
//! Two representations are offered:
//!
//! - [`LimaInstant`]: the real instant a Lima wall-clock reading denotes. Use it
//!   for comparisons.
//! - "device points" (`DateTime<Tz>` for the host timezone): instants shifted so
//!   that their wall clock *in the host timezone* reads like Lima's. These are
//!   what date pickers and display code work with, and what
//!   [`format_for_storage`] writes back.

use crate::constants::{LIMA_OFFSET_MINUTES, STORAGE_DATETIME_FORMAT};
use crate::error::AppError;
use chrono::{
    DateTime, Datelike, Duration, FixedOffset, Local, LocalResult, NaiveDate, NaiveDateTime,
    Offset, TimeZone, Timelike, Utc, Weekday,
};
use std::fmt;
use tracing::warn;

const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%d %H:%M"];

/// Fixed UTC-5 offset used for every backend timestamp
#[must_use]
pub fn lima_offset() -> FixedOffset {
    FixedOffset::east_opt(LIMA_OFFSET_MINUTES * 60).expect("Lima offset is within bounds")
}

/// Parses a backend timestamp into its naive wall-clock fields
///
/// Accepts a space or `T` between date and time, optional seconds (with an
/// optional fraction) and a bare date, which means midnight.
///
/// # Returns
/// * `Ok(None)` - for blank input
/// * `Ok(Some(naive))` - for a well-formed timestamp
/// * `Err(AppError::InvalidInput)` - otherwise
pub fn parse_naive(text: &str) -> Result<Option<NaiveDateTime>, AppError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let normalized = trimmed.replacen('T', " ", 1);

    for format in DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(&normalized, format) {
            return Ok(Some(naive));
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(&normalized, "%Y-%m-%d") {
        return Ok(date.and_hms_opt(0, 0, 0));
    }

    Err(AppError::InvalidInput(format!(
        "invalid timestamp '{trimmed}', expected YYYY-MM-DD HH:MM[:SS]"
    )))
}

/// An instant expressed in Lima civil time
///
/// Ordering and equality follow the underlying instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LimaInstant(DateTime<FixedOffset>);

impl LimaInstant {
    /// The instant a Lima wall-clock reading denotes
    #[must_use]
    pub fn from_naive(naive: NaiveDateTime) -> Self {
        let utc = naive - Duration::minutes(i64::from(LIMA_OFFSET_MINUTES));
        Self(lima_offset().from_utc_datetime(&utc))
    }

    /// Converts any instant into Lima time
    #[must_use]
    pub fn from_instant<Tz: TimeZone>(instant: &DateTime<Tz>) -> Self {
        Self(instant.with_timezone(&lima_offset()))
    }

    /// Parses a backend timestamp, `Ok(None)` for blank input
    pub fn parse(text: &str) -> Result<Option<Self>, AppError> {
        Ok(parse_naive(text)?.map(Self::from_naive))
    }

    /// The current instant
    #[must_use]
    pub fn now() -> Self {
        Self::from_instant(&Utc::now())
    }

    /// Wall-clock fields as read in Lima
    #[must_use]
    pub fn naive_lima(&self) -> NaiveDateTime {
        self.0.naive_local()
    }

    /// The instant in UTC
    #[must_use]
    pub fn to_utc(&self) -> DateTime<Utc> {
        self.0.with_timezone(&Utc)
    }

    /// The instant with the fixed Lima offset attached
    #[must_use]
    pub fn as_datetime(&self) -> DateTime<FixedOffset> {
        self.0
    }

    /// A point in `tz` whose wall clock reads like this instant does in Lima
    ///
    /// This is the device-local representation used by pickers and displays.
    /// The result is a different instant whenever `tz` is not UTC-5.
    #[must_use]
    pub fn to_device_local<Tz: TimeZone>(&self, tz: &Tz) -> DateTime<Tz> {
        wall_clock_in(&self.naive_lima(), tz)
    }

    /// Inverse of [`LimaInstant::to_device_local`]
    #[must_use]
    pub fn from_device_local<Tz: TimeZone>(point: &DateTime<Tz>) -> Self {
        Self::from_naive(point.naive_local())
    }
}

impl fmt::Display for LimaInstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.naive_lima().format(STORAGE_DATETIME_FORMAT))
    }
}

/// Resolves wall-clock fields in `tz`
///
/// Ambiguous readings (clocks set back) take the earlier instant. Readings that
/// fall in a forward gap use the offset in force just before the gap.
fn wall_clock_in<Tz: TimeZone>(naive: &NaiveDateTime, tz: &Tz) -> DateTime<Tz> {
    match tz.from_local_datetime(naive) {
        LocalResult::Single(point) => point,
        LocalResult::Ambiguous(earliest, _) => earliest,
        LocalResult::None => {
            let offset = tz.offset_from_utc_datetime(naive).fix();
            let utc = *naive - Duration::seconds(i64::from(offset.local_minus_utc()));
            tz.from_utc_datetime(&utc)
        }
    }
}

/// Parses a backend timestamp as a device point in `tz`
///
/// The returned point's wall clock in `tz` equals the literal fields of `text`.
/// Blank or absent input yields `Ok(None)`.
pub fn parse_as_lima_in<Tz: TimeZone>(
    text: Option<&str>,
    tz: &Tz,
) -> Result<Option<DateTime<Tz>>, AppError> {
    let Some(text) = text else {
        return Ok(None);
    };
    Ok(parse_naive(text)?.map(|naive| wall_clock_in(&naive, tz)))
}

/// Parses a backend timestamp as a point in the host timezone
///
/// The result depends on the host offset; compare deadlines with `is_open` instead.
pub fn parse_as_lima(text: Option<&str>) -> Result<Option<DateTime<Local>>, AppError> {
    parse_as_lima_in(text, &Local)
}

/// The current Lima wall clock as a device point in `tz`
#[must_use]
pub fn now_as_lima_in<Tz: TimeZone>(tz: &Tz) -> DateTime<Tz> {
    LimaInstant::now().to_device_local(tz)
}

/// The current Lima wall clock as a point in the host timezone
#[must_use]
pub fn now_as_lima() -> DateTime<Local> {
    now_as_lima_in(&Local)
}

/// Whether a deadline is still open at `now`
///
/// Absent or blank deadlines are always open. Malformed deadlines are treated as
/// closed.
#[must_use]
pub fn is_open_at(deadline: Option<&str>, now: LimaInstant) -> bool {
    let Some(text) = deadline else {
        return true;
    };
    match LimaInstant::parse(text) {
        Ok(None) => true,
        Ok(Some(limit)) => limit >= now,
        Err(e) => {
            warn!("Treating unreadable deadline as closed: {}", e);
            false
        }
    }
}

/// Whether a deadline is still open now
#[must_use]
pub fn is_open(deadline: Option<&str>) -> bool {
    is_open_at(deadline, LimaInstant::now())
}

/// Whether a deadline has passed at `now`; absent deadlines never expire
#[must_use]
pub fn has_expired_at(deadline: Option<&str>, now: LimaInstant) -> bool {
    match deadline {
        None => false,
        Some(text) if text.trim().is_empty() => false,
        Some(_) => !is_open_at(deadline, now),
    }
}

/// Whether a deadline has passed now
#[must_use]
pub fn has_expired(deadline: Option<&str>) -> bool {
    has_expired_at(deadline, LimaInstant::now())
}

/// Renders a point as `YYYY-MM-DD HH:MM:SS` from its own wall clock
///
/// No offset is applied: the point is assumed to already carry the intended
/// Lima wall-clock fields, as produced by [`parse_as_lima_in`] or a date picker.
#[must_use]
pub fn format_for_storage<Tz: TimeZone>(point: &DateTime<Tz>) -> String {
    point
        .naive_local()
        .format(STORAGE_DATETIME_FORMAT)
        .to_string()
}

/// Rendering of a numeric date or time field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericStyle {
    /// As few digits as needed
    Numeric,
    /// Zero-padded to two digits
    TwoDigit,
}

/// Rendering of the month field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthStyle {
    /// `6`
    Numeric,
    /// `06`
    TwoDigit,
    /// `junio`
    Long,
    /// `jun`
    Short,
}

/// Rendering of the weekday
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeekdayStyle {
    /// `sábado`
    Long,
    /// `sáb`
    Short,
}

/// Field selection for [`format_for_display`], following the `es-PE` conventions
///
/// `None` omits the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayOptions {
    /// Weekday name
    pub weekday: Option<WeekdayStyle>,
    /// Year
    pub year: Option<NumericStyle>,
    /// Month
    pub month: Option<MonthStyle>,
    /// Day of month
    pub day: Option<NumericStyle>,
    /// Hour
    pub hour: Option<NumericStyle>,
    /// Minute
    pub minute: Option<NumericStyle>,
    /// Second
    pub second: Option<NumericStyle>,
    /// Use a 12-hour clock with `a. m.` / `p. m.`
    pub hour12: bool,
}

impl Default for DisplayOptions {
    /// `dd/mm/yyyy, HH:MM` on a 24-hour clock
    fn default() -> Self {
        Self {
            weekday: None,
            year: Some(NumericStyle::Numeric),
            month: Some(MonthStyle::TwoDigit),
            day: Some(NumericStyle::TwoDigit),
            hour: Some(NumericStyle::TwoDigit),
            minute: Some(NumericStyle::TwoDigit),
            second: None,
            hour12: false,
        }
    }
}

impl DisplayOptions {
    /// Long readable form, e.g. `sábado, 1 de junio de 2024, 10:00`
    #[must_use]
    pub fn legible() -> Self {
        Self {
            weekday: Some(WeekdayStyle::Long),
            year: Some(NumericStyle::Numeric),
            month: Some(MonthStyle::Long),
            day: Some(NumericStyle::Numeric),
            ..Self::default()
        }
    }

    /// Date fields only
    #[must_use]
    pub fn date_only(mut self) -> Self {
        self.hour = None;
        self.minute = None;
        self.second = None;
        self
    }

    /// Time fields only
    #[must_use]
    pub fn time_only(mut self) -> Self {
        self.weekday = None;
        self.year = None;
        self.month = None;
        self.day = None;
        self
    }

    /// Set the weekday style
    #[must_use]
    pub fn with_weekday(mut self, weekday: Option<WeekdayStyle>) -> Self {
        self.weekday = weekday;
        self
    }

    /// Set the month style
    #[must_use]
    pub fn with_month(mut self, month: Option<MonthStyle>) -> Self {
        self.month = month;
        self
    }

    /// Set the seconds style
    #[must_use]
    pub fn with_seconds(mut self, second: Option<NumericStyle>) -> Self {
        self.second = second;
        self
    }

    /// Switch between 12 and 24-hour clocks
    #[must_use]
    pub fn with_hour12(mut self, hour12: bool) -> Self {
        self.hour12 = hour12;
        self
    }
}

fn numeric(value: u32, style: NumericStyle) -> String {
    match style {
        NumericStyle::Numeric => value.to_string(),
        NumericStyle::TwoDigit => format!("{value:02}"),
    }
}

fn month_name(month: u32, style: MonthStyle) -> String {
    const LONG: [&str; 12] = [
        "enero", "febrero", "marzo", "abril", "mayo", "junio", "julio", "agosto", "setiembre",
        "octubre", "noviembre", "diciembre",
    ];
    const SHORT: [&str; 12] = [
        "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "set", "oct", "nov", "dic",
    ];
    let index = month.saturating_sub(1) as usize % 12;
    match style {
        MonthStyle::Numeric => month.to_string(),
        MonthStyle::TwoDigit => format!("{month:02}"),
        MonthStyle::Long => LONG[index].to_string(),
        MonthStyle::Short => SHORT[index].to_string(),
    }
}

fn weekday_name(weekday: Weekday, style: WeekdayStyle) -> &'static str {
    match (weekday, style) {
        (Weekday::Mon, WeekdayStyle::Long) => "lunes",
        (Weekday::Tue, WeekdayStyle::Long) => "martes",
        (Weekday::Wed, WeekdayStyle::Long) => "miércoles",
        (Weekday::Thu, WeekdayStyle::Long) => "jueves",
        (Weekday::Fri, WeekdayStyle::Long) => "viernes",
        (Weekday::Sat, WeekdayStyle::Long) => "sábado",
        (Weekday::Sun, WeekdayStyle::Long) => "domingo",
        (Weekday::Mon, WeekdayStyle::Short) => "lun",
        (Weekday::Tue, WeekdayStyle::Short) => "mar",
        (Weekday::Wed, WeekdayStyle::Short) => "mié",
        (Weekday::Thu, WeekdayStyle::Short) => "jue",
        (Weekday::Fri, WeekdayStyle::Short) => "vie",
        (Weekday::Sat, WeekdayStyle::Short) => "sáb",
        (Weekday::Sun, WeekdayStyle::Short) => "dom",
    }
}

fn render_date(naive: &NaiveDateTime, options: &DisplayOptions) -> String {
    let year = options.year.map(|style| match style {
        NumericStyle::Numeric => naive.year().to_string(),
        NumericStyle::TwoDigit => format!("{:02}", naive.year().rem_euclid(100)),
    });
    let day = options.day.map(|style| numeric(naive.day(), style));

    let date = match options.month {
        Some(style @ (MonthStyle::Long | MonthStyle::Short)) => {
            let mut parts = Vec::new();
            parts.extend(day);
            parts.push(month_name(naive.month(), style));
            parts.extend(year);
            parts.join(" de ")
        }
        month => {
            let mut parts = Vec::new();
            parts.extend(day);
            parts.extend(month.map(|style| month_name(naive.month(), style)));
            parts.extend(year);
            parts.join("/")
        }
    };

    match options.weekday {
        Some(style) if date.is_empty() => weekday_name(naive.weekday(), style).to_string(),
        Some(style) => format!("{}, {}", weekday_name(naive.weekday(), style), date),
        None => date,
    }
}

fn render_time(naive: &NaiveDateTime, options: &DisplayOptions) -> String {
    let mut parts = Vec::new();
    if let Some(style) = options.hour {
        let hour = if options.hour12 {
            match naive.hour() % 12 {
                0 => 12,
                h => h,
            }
        } else {
            naive.hour()
        };
        parts.push(numeric(hour, style));
    }
    // Minutes and seconds are padded whenever they follow another field.
    if let Some(style) = options.minute {
        let style = if parts.is_empty() { style } else { NumericStyle::TwoDigit };
        parts.push(numeric(naive.minute(), style));
    }
    if let Some(style) = options.second {
        let style = if parts.is_empty() { style } else { NumericStyle::TwoDigit };
        parts.push(numeric(naive.second(), style));
    }

    let time = parts.join(":");
    if options.hour12 && options.hour.is_some() {
        let suffix = if naive.hour() < 12 { "a. m." } else { "p. m." };
        format!("{time} {suffix}")
    } else {
        time
    }
}

/// Human-readable `es-PE` rendering of a point's own wall clock
#[must_use]
pub fn format_for_display<Tz: TimeZone>(point: &DateTime<Tz>, options: &DisplayOptions) -> String {
    format_naive_for_display(&point.naive_local(), options)
}

/// Human-readable `es-PE` rendering of wall-clock fields
#[must_use]
pub fn format_naive_for_display(naive: &NaiveDateTime, options: &DisplayOptions) -> String {
    let date = render_date(naive, options);
    let time = render_time(naive, options);
    match (date.is_empty(), time.is_empty()) {
        (false, false) => format!("{date}, {time}"),
        (false, true) => date,
        (true, _) => time,
    }
}

/// Parses a backend timestamp and renders its Lima wall clock
///
/// Blank or absent input renders as an empty string.
pub fn format_text_for_display(
    text: Option<&str>,
    options: &DisplayOptions,
) -> Result<String, AppError> {
    match text.map(parse_naive).transpose()?.flatten() {
        Some(naive) => Ok(format_naive_for_display(&naive, options)),
        None => Ok(String::new()),
    }
}
