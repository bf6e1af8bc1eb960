use serde::{Deserialize, Serialize};

/// Участник команды (read-only, из статической выгрузки)
///
/// Все поля необязательные: повреждённая запись не ломает загрузку,
/// а превращается в пустые значения при отображении.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Member {
    #[serde(default)]
    pub id: Option<i64>,

    #[serde(rename = "crewId", default)]
    pub crew_id: Option<i64>,

    /// Ключ связи с отсутствиями
    #[serde(rename = "userId", default)]
    pub user_id: Option<i64>,

    #[serde(default)]
    pub name: String,

    /// URL аватара, может быть пустым
    #[serde(default)]
    pub image: String,
}

impl Member {
    pub fn new(user_id: i64, name: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            id: None,
            crew_id: None,
            user_id: Some(user_id),
            name: name.into(),
            image: image.into(),
        }
    }
}
