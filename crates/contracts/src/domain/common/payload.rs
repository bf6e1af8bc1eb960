use serde::{Deserialize, Serialize};

/// Конверт, в котором лежит каждый выгруженный датасет
///
/// ```json
/// { "message": "Success", "payload": [ ... ] }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Payload<T> {
    #[serde(default)]
    pub message: String,

    #[serde(default = "Vec::new")]
    pub payload: Vec<T>,
}
