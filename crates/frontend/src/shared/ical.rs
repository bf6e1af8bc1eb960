//! Описание события календаря и его кодирование в `.ics` через `icalendar`

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use icalendar::{
    Calendar, CalendarDateTime, Component, DatePerhapsTime, Event, EventLike, Property,
};
use thiserror::Error;

pub use icalendar::EventStatus;

/// Ошибки проверки события перед кодированием
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalendarError {
    #[error("Event title is empty")]
    EmptyTitle,

    #[error("Invalid start {year:04}-{month:02}-{day:02} {hour:02}:{minute:02}")]
    InvalidStart {
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
    },

    #[error("Event duration must be positive")]
    ZeroDuration,

    #[error("Geo position out of range: {lat};{lon}")]
    InvalidGeo { lat: f64, lon: f64 },

    #[error("Invalid organizer email: {0}")]
    InvalidOrganizerEmail(String),
}

/// Локальное (floating) время начала события
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventStart {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
}

impl EventStart {
    fn to_naive(self) -> Result<NaiveDateTime, CalendarError> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
            .and_then(|date| date.and_hms_opt(self.hour, self.minute, 0))
            .ok_or(CalendarError::InvalidStart {
                year: self.year,
                month: self.month,
                day: self.day,
                hour: self.hour,
                minute: self.minute,
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventDuration {
    pub hours: u32,
    pub minutes: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geo {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Organizer {
    pub name: String,
    pub email: String,
}

/// Описание одного события календаря
#[derive(Debug, Clone)]
pub struct CalendarEvent {
    pub uid: String,
    pub stamp: DateTime<Utc>,
    pub start: EventStart,
    pub duration: EventDuration,
    pub title: String,
    pub description: String,
    pub location: String,
    pub url: String,
    pub geo: Option<Geo>,
    pub categories: Vec<String>,
    pub status: EventStatus,
    /// Значение `X-MICROSOFT-CDO-BUSYSTATUS`
    pub busy_status: String,
    pub organizer: Option<Organizer>,
}

/// Сериализатор события в байты календарного файла
pub trait CalendarEncoder {
    fn encode(&self, event: &CalendarEvent) -> Result<String, CalendarError>;
}

/// Кодировщик в формат `.ics`
#[derive(Debug, Clone, Copy, Default)]
pub struct IcsEncoder;

impl CalendarEncoder for IcsEncoder {
    fn encode(&self, event: &CalendarEvent) -> Result<String, CalendarError> {
        validate(event)?;
        let start = event.start.to_naive()?;

        let mut vevent = Event::new();
        vevent
            .uid(&event.uid)
            .timestamp(event.stamp)
            .summary(&event.title)
            .starts(DatePerhapsTime::DateTime(CalendarDateTime::Floating(start)))
            .add_property("DURATION", format_duration(event.duration))
            .status(event.status);

        if !event.description.is_empty() {
            vevent.description(&event.description);
        }
        if !event.url.is_empty() {
            vevent.add_property("URL", &event.url);
        }
        if let Some(geo) = event.geo {
            vevent.add_property("GEO", format!("{};{}", geo.lat, geo.lon));
        }
        if !event.location.is_empty() {
            vevent.add_property("LOCATION", &event.location);
        }
        if !event.categories.is_empty() {
            vevent.add_property("CATEGORIES", event.categories.join(","));
        }
        if let Some(organizer) = &event.organizer {
            vevent.append_property(
                Property::new("ORGANIZER", format!("mailto:{}", organizer.email))
                    .add_parameter("CN", &organizer_name_param(&organizer.name))
                    .done(),
            );
        }
        vevent.add_property("X-MICROSOFT-CDO-BUSYSTATUS", &event.busy_status);

        let mut calendar = Calendar::new();
        calendar
            .append_property(Property::new("METHOD", "PUBLISH"))
            .append_property(Property::new("X-PUBLISHED-TTL", "PT1H"))
            .push(vevent.done());

        Ok(calendar.done().to_string())
    }
}

fn validate(event: &CalendarEvent) -> Result<(), CalendarError> {
    if event.title.trim().is_empty() {
        return Err(CalendarError::EmptyTitle);
    }
    if event.duration.hours == 0 && event.duration.minutes == 0 {
        return Err(CalendarError::ZeroDuration);
    }
    if let Some(geo) = event.geo {
        if !(-90.0..=90.0).contains(&geo.lat) || !(-180.0..=180.0).contains(&geo.lon) {
            return Err(CalendarError::InvalidGeo {
                lat: geo.lat,
                lon: geo.lon,
            });
        }
    }
    if let Some(organizer) = &event.organizer {
        if !organizer.email.contains('@') {
            return Err(CalendarError::InvalidOrganizerEmail(organizer.email.clone()));
        }
    }
    Ok(())
}

fn format_duration(duration: EventDuration) -> String {
    let total = duration.hours * 60 + duration.minutes;
    let (hours, minutes) = (total / 60, total % 60);
    match (hours, minutes) {
        (0, m) => format!("PT{}M", m),
        (h, 0) => format!("PT{}H", h),
        (h, m) => format!("PT{}H{}M", h, m),
    }
}

/// Значение параметра CN: DQUOTE внутри запрещён, кавычки только снаружи
fn organizer_name_param(name: &str) -> String {
    let cleaned = name.replace('"', "'");
    if cleaned.contains([';', ':', ',']) {
        format!("\"{}\"", cleaned)
    } else {
        cleaned
    }
}
