use crate::shared::tax_id::TaxIdKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Тип лица клиента: физическое или юридическое
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PersonKind {
    #[default]
    #[serde(rename = "F")]
    Individual,
    #[serde(rename = "J")]
    Company,
}

impl PersonKind {
    pub fn code(&self) -> &'static str {
        match self {
            PersonKind::Individual => "F",
            PersonKind::Company => "J",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PersonKind::Individual => "Pessoa Física",
            PersonKind::Company => "Pessoa Jurídica",
        }
    }

    /// Какой налоговый номер ожидается: CPF для физлица, CNPJ для юрлица
    pub fn tax_id_kind(&self) -> TaxIdKind {
        match self {
            PersonKind::Individual => TaxIdKind::Personal,
            PersonKind::Company => TaxIdKind::Organization,
        }
    }

    pub fn all() -> [PersonKind; 2] {
        [PersonKind::Individual, PersonKind::Company]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|k| k.code() == code)
    }
}

impl fmt::Display for PersonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
