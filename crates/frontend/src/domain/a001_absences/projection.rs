//! Проекция выгрузок (участники + отсутствия) в строки таблицы

use crate::shared::list_utils::Sortable;
use contracts::domain::a001_member::Member;
use contracts::domain::a002_absence::AbsenceRecord;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;

/// Заглушка для пустых заметок
const EMPTY_NOTE: &str = "-";

/// Статус заявки. Отклонение важнее подтверждения, подтверждение важнее запроса.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AbsenceStatus {
    Requested,
    Confirmed,
    Rejected,
}

impl AbsenceStatus {
    pub fn from_record(record: &AbsenceRecord) -> Self {
        if record.is_rejected() {
            AbsenceStatus::Rejected
        } else if record.is_confirmed() {
            AbsenceStatus::Confirmed
        } else {
            AbsenceStatus::Requested
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AbsenceStatus::Requested => "Requested",
            AbsenceStatus::Confirmed => "Confirmed",
            AbsenceStatus::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for AbsenceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Строка таблицы: одно отсутствие, соединённое с участником
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbsenceRow {
    /// Позиция в исходной выгрузке отсутствий
    pub key: usize,
    pub image: String,
    pub name: String,
    pub absence_type: String,
    pub period: String,
    pub member_note: String,
    pub status: AbsenceStatus,
    pub admitter_note: String,
}

/// Сортируемые колонки таблицы
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AbsenceColumn {
    Name,
    Type,
    Period,
    MemberNote,
    Status,
    AdmitterNote,
}

impl AbsenceColumn {
    pub const ALL: [AbsenceColumn; 6] = [
        AbsenceColumn::Name,
        AbsenceColumn::Type,
        AbsenceColumn::Period,
        AbsenceColumn::MemberNote,
        AbsenceColumn::Status,
        AbsenceColumn::AdmitterNote,
    ];

    pub fn id(self) -> &'static str {
        match self {
            AbsenceColumn::Name => "name",
            AbsenceColumn::Type => "type",
            AbsenceColumn::Period => "period",
            AbsenceColumn::MemberNote => "memNote",
            AbsenceColumn::Status => "status",
            AbsenceColumn::AdmitterNote => "admitNote",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|column| column.id() == id)
    }

    pub fn label(self) -> &'static str {
        match self {
            AbsenceColumn::Name => "Member name",
            AbsenceColumn::Type => "Type of absence",
            AbsenceColumn::Period => "Period",
            AbsenceColumn::MemberNote => "Member note",
            AbsenceColumn::Status => "Status",
            AbsenceColumn::AdmitterNote => "Admitter note",
        }
    }

    pub fn align(self) -> &'static str {
        match self {
            AbsenceColumn::Name => "left",
            _ => "right",
        }
    }
}

impl AbsenceRow {
    pub fn field_value(&self, column: AbsenceColumn) -> &str {
        match column {
            AbsenceColumn::Name => &self.name,
            AbsenceColumn::Type => &self.absence_type,
            AbsenceColumn::Period => &self.period,
            AbsenceColumn::MemberNote => &self.member_note,
            AbsenceColumn::Status => self.status.as_str(),
            AbsenceColumn::AdmitterNote => &self.admitter_note,
        }
    }
}

impl Sortable for AbsenceRow {
    type Field = AbsenceColumn;

    fn compare_by_field(&self, other: &Self, field: AbsenceColumn) -> Ordering {
        self.field_value(field).cmp(other.field_value(field))
    }
}

fn note_or_placeholder(note: Option<&str>) -> String {
    match note {
        Some(note) if !note.is_empty() => note.to_string(),
        _ => EMPTY_NOTE.to_string(),
    }
}

/// Строит строки таблицы: по одной на каждое отсутствие, в исходном порядке.
///
/// Участник ищется по `userId`; при дублях побеждает первый. Если участник
/// не найден, имя и аватар остаются пустыми.
pub fn project_rows(members: &[Member], absences: &[AbsenceRecord]) -> Vec<AbsenceRow> {
    let mut by_user: HashMap<i64, &Member> = HashMap::with_capacity(members.len());
    for member in members {
        if let Some(user_id) = member.user_id {
            by_user.entry(user_id).or_insert(member);
        }
    }

    let mut misses = 0usize;
    let rows: Vec<AbsenceRow> = absences
        .iter()
        .enumerate()
        .map(|(key, absence)| {
            let member = absence.user_id.and_then(|id| by_user.get(&id).copied());
            if member.is_none() {
                misses += 1;
            }

            AbsenceRow {
                key,
                image: member.map(|m| m.image.clone()).unwrap_or_default(),
                name: member.map(|m| m.name.clone()).unwrap_or_default(),
                absence_type: absence.absence_type.clone(),
                period: format!("from {} to {}", absence.start_date, absence.end_date),
                member_note: note_or_placeholder(absence.member_note.as_deref()),
                status: AbsenceStatus::from_record(absence),
                admitter_note: note_or_placeholder(absence.admitter_note.as_deref()),
            }
        })
        .collect();

    log::debug!("Projected {} absence rows ({} without member)", rows.len(), misses);
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_utils::{sort_list, SortDirection, SortState};

    fn absence(user_id: i64, absence_type: &str) -> AbsenceRecord {
        AbsenceRecord {
            user_id: Some(user_id),
            absence_type: absence_type.to_string(),
            start_date: "2021-01-13".to_string(),
            end_date: "2021-01-15".to_string(),
            ..Default::default()
        }
    }

    fn members() -> Vec<Member> {
        vec![
            Member::new(1, "Max", "https://img/max.png"),
            Member::new(2, "Ines", ""),
        ]
    }

    #[test]
    fn test_join_by_user_id() {
        let rows = project_rows(&members(), &[absence(2, "vacation"), absence(1, "sickness")]);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].key, 0);
        assert_eq!(rows[0].name, "Ines");
        assert_eq!(rows[0].image, "");
        assert_eq!(rows[1].name, "Max");
        assert_eq!(rows[1].image, "https://img/max.png");
    }

    #[test]
    fn test_join_miss_is_blank() {
        let mut orphan = absence(99, "vacation");
        let rows = project_rows(&members(), &[orphan.clone()]);
        assert_eq!(rows[0].name, "");
        assert_eq!(rows[0].image, "");

        orphan.user_id = None;
        let rows = project_rows(&members(), &[orphan]);
        assert_eq!(rows[0].name, "");
    }

    #[test]
    fn test_first_member_wins_on_duplicate_ids() {
        let mut list = members();
        list.push(Member::new(1, "Other Max", ""));
        let rows = project_rows(&list, &[absence(1, "vacation")]);
        assert_eq!(rows[0].name, "Max");
    }

    #[test]
    fn test_period_and_notes() {
        let mut record = absence(1, "vacation");
        record.member_note = Some("Kind krank".to_string());
        record.admitter_note = Some(String::new());
        let rows = project_rows(&members(), &[record, absence(1, "vacation")]);
        assert_eq!(rows[0].period, "from 2021-01-13 to 2021-01-15");
        assert_eq!(rows[0].member_note, "Kind krank");
        assert_eq!(rows[0].admitter_note, "-");
        assert_eq!(rows[1].member_note, "-");
    }

    #[test]
    fn test_status_priority() {
        let mut both = absence(1, "vacation");
        both.rejected_at = Some("2020-12-12T18:03:55.000+01:00".to_string());
        both.confirmed_at = Some("2020-12-12T18:03:55.000+01:00".to_string());

        let mut confirmed = absence(1, "vacation");
        confirmed.confirmed_at = Some("2020-12-12T18:03:55.000+01:00".to_string());

        let requested = absence(1, "vacation");

        let rows = project_rows(&members(), &[both, confirmed, requested]);
        assert_eq!(rows[0].status, AbsenceStatus::Rejected);
        assert_eq!(rows[1].status, AbsenceStatus::Confirmed);
        assert_eq!(rows[2].status, AbsenceStatus::Requested);
        assert_eq!(rows[0].status.to_string(), "Rejected");
    }

    #[test]
    fn test_identical_absences_stay_distinct() {
        let rows = project_rows(&members(), &[absence(1, "vacation"), absence(1, "vacation")]);
        assert_eq!(rows[0].key, 0);
        assert_eq!(rows[1].key, 1);
        assert_ne!(rows[0], rows[1]);
    }

    #[test]
    fn test_projection_is_deterministic() {
        let absences = vec![absence(1, "vacation"), absence(3, "sickness")];
        assert_eq!(
            project_rows(&members(), &absences),
            project_rows(&members(), &absences)
        );
    }

    #[test]
    fn test_sort_by_type_is_stable_in_both_directions() {
        let absences = vec![
            absence(1, "vacation"),
            absence(2, "sickness"),
            absence(1, "sickness"),
            absence(2, "vacation"),
        ];
        let rows = project_rows(&members(), &absences);

        let asc = sort_list(&rows, &SortState::new(AbsenceColumn::Type, SortDirection::Ascending));
        let keys: Vec<usize> = asc.iter().map(|r| r.key).collect();
        assert_eq!(keys, vec![1, 2, 0, 3]);

        let desc = sort_list(&rows, &SortState::new(AbsenceColumn::Type, SortDirection::Descending));
        let keys: Vec<usize> = desc.iter().map(|r| r.key).collect();
        assert_eq!(keys, vec![0, 3, 1, 2]);
    }

    #[test]
    fn test_sort_by_status_uses_label() {
        let mut rejected = absence(1, "vacation");
        rejected.rejected_at = Some("x".to_string());
        let mut confirmed = absence(1, "vacation");
        confirmed.confirmed_at = Some("x".to_string());
        let rows = project_rows(&members(), &[rejected, absence(1, "vacation"), confirmed]);

        let sorted = sort_list(&rows, &SortState::new(AbsenceColumn::Status, SortDirection::Ascending));
        let statuses: Vec<&str> = sorted.iter().map(|r| r.status.as_str()).collect();
        assert_eq!(statuses, vec!["Confirmed", "Rejected", "Requested"]);
    }

    #[test]
    fn test_column_lookup_by_id() {
        for column in AbsenceColumn::ALL {
            assert_eq!(AbsenceColumn::from_id(column.id()), Some(column));
        }
        assert_eq!(AbsenceColumn::from_id("download"), None);
    }
}
