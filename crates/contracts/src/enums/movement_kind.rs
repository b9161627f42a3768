use super::BadgeColor;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Направление движения по складу
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MovementKind {
    #[serde(rename = "E")]
    Inbound,
    #[serde(rename = "S")]
    Outbound,
}

impl MovementKind {
    pub fn code(&self) -> &'static str {
        match self {
            MovementKind::Inbound => "E",
            MovementKind::Outbound => "S",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MovementKind::Inbound => "Entrada",
            MovementKind::Outbound => "Saída",
        }
    }

    pub fn color(&self) -> BadgeColor {
        match self {
            MovementKind::Inbound => BadgeColor::Success,
            MovementKind::Outbound => BadgeColor::Error,
        }
    }

    /// Направление корректировки, `None` если количество не меняется
    pub fn for_delta(delta: i64) -> Option<Self> {
        match delta {
            0 => None,
            d if d > 0 => Some(MovementKind::Inbound),
            _ => Some(MovementKind::Outbound),
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        [MovementKind::Inbound, MovementKind::Outbound]
            .into_iter()
            .find(|k| k.code() == code)
    }
}

impl fmt::Display for MovementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
