use super::EntityId;

/// Трейт для ресурса REST API
///
/// Статические метаданные задают путь коллекции и подписи для UI,
/// метод экземпляра возвращает идентификатор записи.
pub trait Resource {
    /// Тип идентификатора ресурса
    type Id: EntityId;

    /// Получить ID записи
    fn id(&self) -> Self::Id;

    /// Индекс ресурса в системе (например, "a002")
    fn aggregate_index() -> &'static str;

    /// Сегмент пути коллекции в API (например, "pecas")
    fn collection_name() -> &'static str;

    /// Имя элемента для UI (единственное число)
    fn element_name() -> &'static str;

    /// Имя списка для UI (множественное число)
    fn list_name() -> &'static str;

    /// Полное имя ресурса (например, "a002_pecas")
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::collection_name())
    }

    /// `/pecas/`
    fn collection_path() -> String {
        format!("/{}/", Self::collection_name())
    }

    /// `/pecas/7/`
    fn item_path(id: Self::Id) -> String {
        format!("/{}/{}/", Self::collection_name(), id.as_string())
    }

    /// Действие над коллекцией: `/pecas/estoque_baixo/`
    fn collection_action_path(action: &str) -> String {
        format!("/{}/{}/", Self::collection_name(), action)
    }

    /// Действие над записью: `/pecas/7/ajustar_estoque/`
    fn item_action_path(id: Self::Id, action: &str) -> String {
        format!("/{}/{}/{}/", Self::collection_name(), id.as_string(), action)
    }
}
