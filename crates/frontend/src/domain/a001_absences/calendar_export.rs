//! Выгрузка одного отсутствия в `.ics` файл

use super::projection::AbsenceRow;
use crate::shared::config::ExportConfig;
use crate::shared::export::{save_as, DownloadFile, ExportError};
use crate::shared::ical::{
    CalendarEncoder, CalendarEvent, EventDuration, EventStart, EventStatus, Geo, Organizer,
};
use chrono::Utc;
use uuid::Uuid;

/// Хвост, который оставляет склейка имени из массива в старых выгрузках
pub const NAME_MARKER: &str = " ,,,,,";

// Расписание события не зависит от периода отсутствия
const EVENT_START: EventStart = EventStart {
    year: 2018,
    month: 5,
    day: 30,
    hour: 6,
    minute: 30,
};
const EVENT_DURATION: EventDuration = EventDuration {
    hours: 6,
    minutes: 30,
};
const EVENT_LOCATION: &str = "Folsom Field, University of Colorado (finish line)";
const EVENT_URL: &str = "http://www.bolderboulder.com/";
const EVENT_GEO: Geo = Geo {
    lat: 40.0095,
    lon: 105.2669,
};
const EVENT_CATEGORIES: [&str; 3] = ["10k races", "Memorial Day Weekend", "Boulder CO"];
const EVENT_BUSY_STATUS: &str = "BUSY";
const ORGANIZER_NAME: &str = "Admin";
const ORGANIZER_EMAIL: &str = "Race@BolderBOULDER.com";

pub fn clean_name(name: &str) -> String {
    name.replace(NAME_MARKER, "")
}

pub fn build_description(row: &AbsenceRow) -> String {
    [
        format!("Member Name : {}", clean_name(&row.name)),
        format!("Type of absence : {}", row.absence_type),
        format!("Period : {}", row.period),
        format!("MemberNote : {}", row.member_note),
        format!("Status : {}", row.status),
        format!("Admitter note : {}", row.admitter_note),
    ]
    .join("\n")
}

/// Собирает событие календаря для строки таблицы
pub fn build_event(row: &AbsenceRow, total_rows: usize) -> CalendarEvent {
    CalendarEvent {
        uid: Uuid::new_v4().to_string(),
        stamp: Utc::now(),
        start: EVENT_START,
        duration: EVENT_DURATION,
        title: format!("Absences ({})", total_rows),
        description: build_description(row),
        location: EVENT_LOCATION.to_string(),
        url: EVENT_URL.to_string(),
        geo: Some(EVENT_GEO),
        categories: EVENT_CATEGORIES.iter().map(|c| c.to_string()).collect(),
        status: EventStatus::Confirmed,
        busy_status: EVENT_BUSY_STATUS.to_string(),
        organizer: Some(Organizer {
            name: ORGANIZER_NAME.to_string(),
            email: ORGANIZER_EMAIL.to_string(),
        }),
    }
}

/// Кодирует строку в файл для скачивания
pub fn encode_row(
    row: &AbsenceRow,
    total_rows: usize,
    encoder: &impl CalendarEncoder,
    config: &ExportConfig,
) -> Result<DownloadFile, ExportError> {
    let event = build_event(row, total_rows);
    let content = encoder.encode(&event)?;
    Ok(DownloadFile {
        filename: config.filename.clone(),
        mime_type: config.mime_type.clone(),
        content,
    })
}

/// Кодирует строку и отдаёт файл браузеру
pub fn export_row(
    row: &AbsenceRow,
    total_rows: usize,
    encoder: &impl CalendarEncoder,
    config: &ExportConfig,
) -> Result<(), ExportError> {
    let file = encode_row(row, total_rows, encoder, config)?;
    save_as(&file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_absences::projection::AbsenceStatus;
    use crate::shared::config::load_config;
    use crate::shared::ical::{CalendarError, IcsEncoder};

    fn row() -> AbsenceRow {
        AbsenceRow {
            key: 3,
            image: String::new(),
            name: "Max ,,,,,".to_string(),
            absence_type: "vacation".to_string(),
            period: "from 2021-01-13 to 2021-01-15".to_string(),
            member_note: "Pfadfinder Sommerlager".to_string(),
            status: AbsenceStatus::Confirmed,
            admitter_note: "-".to_string(),
        }
    }

    struct FailingEncoder;

    impl CalendarEncoder for FailingEncoder {
        fn encode(&self, _event: &CalendarEvent) -> Result<String, CalendarError> {
            Err(CalendarError::EmptyTitle)
        }
    }

    #[test]
    fn test_description_strips_marker() {
        let description = build_description(&row());
        assert!(description.contains("Member Name : Max\n"));
        assert!(!description.contains(",,,,,"));
        assert!(description.contains("Type of absence : vacation"));
        assert!(description.contains("Period : from 2021-01-13 to 2021-01-15"));
        assert!(description.contains("MemberNote : Pfadfinder Sommerlager"));
        assert!(description.contains("Status : Confirmed"));
        assert!(description.contains("Admitter note : -"));
    }

    #[test]
    fn test_event_placeholders() {
        let event = build_event(&row(), 42);
        assert_eq!(event.title, "Absences (42)");
        assert_eq!(event.start, EVENT_START);
        assert_eq!(event.duration, EVENT_DURATION);
        assert_eq!(event.categories.len(), 3);
        assert!(matches!(event.status, EventStatus::Confirmed));
        assert_eq!(event.busy_status, "BUSY");
        assert!(!event.uid.is_empty());
    }

    #[test]
    fn test_encode_row_uses_export_config() {
        let config = load_config().unwrap();
        let file = encode_row(&row(), 42, &IcsEncoder, &config.export).unwrap();
        assert_eq!(file.filename, "event-schedule.ics");
        assert_eq!(file.mime_type, "text/plain;charset=utf-8");
        let unfolded = file.content.replace("\r\n ", "").replace("\r\n\t", "");
        assert!(unfolded.contains("SUMMARY:Absences (42)\r\n"));
        assert!(unfolded.contains("Member Name : Max"));
        assert!(unfolded.contains("Type of absence : vacation"));
        assert!(!unfolded.contains(",,,,,"));
    }

    #[test]
    fn test_encoder_failure_is_reported() {
        let config = load_config().unwrap();
        let err = encode_row(&row(), 42, &FailingEncoder, &config.export).unwrap_err();
        assert_eq!(err, ExportError::Encode(CalendarError::EmptyTitle));
    }
}
