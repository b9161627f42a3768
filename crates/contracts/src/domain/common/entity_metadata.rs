use serde::{Deserialize, Serialize};

/// Метки времени записи, только для чтения
///
/// Сервер отдаёт их строками ISO 8601; для отображения см. `shared::format`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityMetadata {
    /// Дата создания записи
    #[serde(default, skip_serializing)]
    pub created_at: Option<String>,
    /// Дата последнего обновления
    #[serde(default, skip_serializing)]
    pub updated_at: Option<String>,
}
