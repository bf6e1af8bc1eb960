use serde::{Deserialize, Serialize};

/// Запись об отсутствии сотрудника (read-only, из статической выгрузки)
///
/// Даты хранятся строками в исходном виде (`YYYY-MM-DD`), метки времени
/// подтверждения/отклонения — ISO 8601 либо `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AbsenceRecord {
    #[serde(default)]
    pub id: Option<i64>,

    #[serde(rename = "crewId", default)]
    pub crew_id: Option<i64>,

    /// Ссылка на участника (a001_member.user_id)
    #[serde(rename = "userId", default)]
    pub user_id: Option<i64>,

    /// Тип отсутствия (vacation, sickness, ...)
    #[serde(rename = "type", default)]
    pub absence_type: String,

    #[serde(rename = "startDate", default)]
    pub start_date: String,

    #[serde(rename = "endDate", default)]
    pub end_date: String,

    #[serde(rename = "memberNote", default)]
    pub member_note: Option<String>,

    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,

    #[serde(rename = "rejectedAt", default)]
    pub rejected_at: Option<String>,

    #[serde(rename = "confirmedAt", default)]
    pub confirmed_at: Option<String>,

    #[serde(rename = "admitterId", default)]
    pub admitter_id: Option<i64>,

    #[serde(rename = "admitterNote", default)]
    pub admitter_note: Option<String>,
}

impl AbsenceRecord {
    pub fn is_rejected(&self) -> bool {
        self.rejected_at.is_some()
    }

    pub fn is_confirmed(&self) -> bool {
        self.confirmed_at.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_record() {
        let json = r#"{
            "admitterId": null,
            "admitterNote": "",
            "confirmedAt": "2020-12-12T18:03:55.000+01:00",
            "createdAt": "2020-12-12T14:17:01.000+01:00",
            "crewId": 352,
            "endDate": "2021-01-13",
            "id": 2351,
            "memberNote": "",
            "rejectedAt": null,
            "startDate": "2021-01-13",
            "type": "sickness",
            "userId": 2664
        }"#;
        let record: AbsenceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.user_id, Some(2664));
        assert_eq!(record.absence_type, "sickness");
        assert_eq!(record.start_date, "2021-01-13");
        assert!(record.is_confirmed());
        assert!(!record.is_rejected());
        assert_eq!(record.member_note.as_deref(), Some(""));
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let record: AbsenceRecord = serde_json::from_str(r#"{ "type": "vacation" }"#).unwrap();
        assert_eq!(record.user_id, None);
        assert_eq!(record.start_date, "");
        assert_eq!(record.member_note, None);
        assert!(!record.is_confirmed());
    }
}
