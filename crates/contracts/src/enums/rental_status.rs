use super::BadgeColor;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Статус локации
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RentalStatus {
    #[default]
    #[serde(rename = "P")]
    Pending,
    #[serde(rename = "A")]
    Active,
    #[serde(rename = "F")]
    Finished,
    #[serde(rename = "C")]
    Cancelled,
}

impl RentalStatus {
    /// Код статуса на сервере
    pub fn code(&self) -> &'static str {
        match self {
            RentalStatus::Pending => "P",
            RentalStatus::Active => "A",
            RentalStatus::Finished => "F",
            RentalStatus::Cancelled => "C",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RentalStatus::Pending => "Pendente",
            RentalStatus::Active => "Ativa",
            RentalStatus::Finished => "Finalizada",
            RentalStatus::Cancelled => "Cancelada",
        }
    }

    pub fn color(&self) -> BadgeColor {
        match self {
            RentalStatus::Pending => BadgeColor::Warning,
            RentalStatus::Active => BadgeColor::Success,
            RentalStatus::Finished => BadgeColor::Info,
            RentalStatus::Cancelled => BadgeColor::Error,
        }
    }

    /// Только активную локацию можно финализировать
    pub fn can_finalize(&self) -> bool {
        matches!(self, RentalStatus::Active)
    }

    pub fn all() -> [RentalStatus; 4] {
        [
            RentalStatus::Pending,
            RentalStatus::Active,
            RentalStatus::Finished,
            RentalStatus::Cancelled,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|s| s.code() == code)
    }
}

impl fmt::Display for RentalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
