/// Трейт для типов идентификаторов ресурсов
///
/// Сервер выдаёт целочисленные первичные ключи; у каждого ресурса свой
/// newtype, чтобы id клиента нельзя было передать вместо id детали.
pub trait EntityId:
    Clone + Copy + PartialEq + Eq + std::hash::Hash + std::fmt::Debug + std::fmt::Display
{
    fn value(&self) -> i64;

    /// Преобразовать ID в строку (сегмент URL)
    fn as_string(&self) -> String {
        self.value().to_string()
    }

    /// Создать ID из строки (параметр маршрута, значение select)
    fn from_string(s: &str) -> Result<Self, String>;
}

/// Объявить newtype идентификатора ресурса
#[macro_export]
macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
            serde::Serialize, serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $crate::domain::common::EntityId for $name {
            fn value(&self) -> i64 {
                self.0
            }

            fn from_string(s: &str) -> Result<Self, String> {
                s.trim()
                    .parse::<i64>()
                    .map($name)
                    .map_err(|e| format!("Invalid {}: {}", stringify!($name), e))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}
