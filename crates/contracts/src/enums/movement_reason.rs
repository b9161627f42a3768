use serde::{Deserialize, Serialize};
use std::fmt;

/// Категория причины движения
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MovementReason {
    #[serde(rename = "LO")]
    Rental,
    #[serde(rename = "AJ")]
    Adjustment,
    /// Порча или утрата
    #[serde(rename = "SI")]
    Loss,
    #[serde(rename = "MA")]
    Maintenance,
}

impl MovementReason {
    pub fn code(&self) -> &'static str {
        match self {
            MovementReason::Rental => "LO",
            MovementReason::Adjustment => "AJ",
            MovementReason::Loss => "SI",
            MovementReason::Maintenance => "MA",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MovementReason::Rental => "Locação",
            MovementReason::Adjustment => "Ajuste",
            MovementReason::Loss => "Sinistro",
            MovementReason::Maintenance => "Manutenção",
        }
    }

    pub fn all() -> [MovementReason; 4] {
        [
            MovementReason::Rental,
            MovementReason::Adjustment,
            MovementReason::Loss,
            MovementReason::Maintenance,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|r| r.code() == code)
    }
}

impl fmt::Display for MovementReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
