use super::BadgeColor;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Статус клиента
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ClientStatus {
    #[default]
    #[serde(rename = "A")]
    Active,
    /// Неплательщик
    #[serde(rename = "I")]
    Defaulter,
}

impl ClientStatus {
    pub fn code(&self) -> &'static str {
        match self {
            ClientStatus::Active => "A",
            ClientStatus::Defaulter => "I",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ClientStatus::Active => "Ativo",
            ClientStatus::Defaulter => "Inadimplente",
        }
    }

    pub fn color(&self) -> BadgeColor {
        match self {
            ClientStatus::Active => BadgeColor::Success,
            ClientStatus::Defaulter => BadgeColor::Error,
        }
    }

    pub fn all() -> [ClientStatus; 2] {
        [ClientStatus::Active, ClientStatus::Defaulter]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|s| s.code() == code)
    }
}

impl fmt::Display for ClientStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
