use crate::domain::a001_member::Member;
use crate::domain::a002_absence::AbsenceRecord;
use crate::domain::common::Payload;
use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Пара статических выгрузок, из которых строится таблица отсутствий
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub members: Vec<Member>,
    pub absences: Vec<AbsenceRecord>,
}

impl Dataset {
    /// Разбирает обе выгрузки из JSON в формате `{ message, payload }`
    pub fn from_json(members_json: &str, absences_json: &str) -> anyhow::Result<Self> {
        let members: Payload<Member> =
            serde_json::from_str(members_json).context("Failed to parse members payload")?;
        let absences: Payload<AbsenceRecord> =
            serde_json::from_str(absences_json).context("Failed to parse absences payload")?;

        Ok(Self {
            members: members.payload,
            absences: absences.payload,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json() {
        let members = r#"{"message":"Success","payload":[
            {"crewId":352,"id":709,"image":"https://loremflickr.com/300/400","name":"Max","userId":644}
        ]}"#;
        let absences = r#"{"message":"Success","payload":[
            {"type":"vacation","userId":644,"startDate":"2021-01-01","endDate":"2021-01-02"},
            {"type":"sickness","userId":1}
        ]}"#;

        let dataset = Dataset::from_json(members, absences).unwrap();
        assert_eq!(dataset.members.len(), 1);
        assert_eq!(dataset.members[0].name, "Max");
        assert_eq!(dataset.absences.len(), 2);
        assert_eq!(dataset.absences[1].user_id, Some(1));
    }

    #[test]
    fn test_missing_payload_is_empty() {
        let dataset = Dataset::from_json(r#"{"message":"Success"}"#, r#"{}"#).unwrap();
        assert!(dataset.members.is_empty());
        assert!(dataset.absences.is_empty());
    }

    #[test]
    fn test_invalid_json_reports_context() {
        let err = Dataset::from_json("not json", "{}").unwrap_err();
        assert!(err.to_string().contains("members"));
    }
}
