use serde::{Deserialize, Serialize};

/// Цвет бейджа статуса в списках и карточках
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeColor {
    #[default]
    Default,
    Success,
    Warning,
    Info,
    Error,
}

impl BadgeColor {
    /// Имя цвета в палитре темы
    pub fn as_str(&self) -> &'static str {
        match self {
            BadgeColor::Default => "default",
            BadgeColor::Success => "success",
            BadgeColor::Warning => "warning",
            BadgeColor::Info => "info",
            BadgeColor::Error => "error",
        }
    }
}
