use crate::domain::a002_part::aggregate::PartId;
use crate::domain::a004_rental::aggregate::RentalId;
use crate::domain::common::list::deserialize_period;
use crate::domain::common::Resource;
use crate::enums::{MovementKind, MovementReason};
use crate::shared::validation::FieldErrors;
use serde::{Deserialize, Serialize};

crate::entity_id!(
    /// Уникальный идентификатор движения по складу
    StockMovementId
);

/// Максимальная длина текста причины на сервере
pub const REASON_MAX_LEN: usize = 200;

/// Движение по складу (журнал аудита остатков)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockMovement {
    pub id: StockMovementId,

    #[serde(rename = "peca")]
    pub part: PartId,

    #[serde(rename = "peca_codigo", default)]
    pub part_code: Option<String>,

    #[serde(rename = "peca_nome", default)]
    pub part_name: Option<String>,

    #[serde(rename = "tipo_movimentacao")]
    pub kind: MovementKind,

    #[serde(rename = "quantidade")]
    pub quantity: i64,

    #[serde(rename = "data_movimentacao")]
    pub moved_at: String,

    #[serde(rename = "locacao", default)]
    pub rental: Option<RentalId>,

    #[serde(rename = "locacao_numero", default)]
    pub rental_number: Option<i64>,

    /// Свободный текст причины
    #[serde(rename = "motivo")]
    pub reason: String,

    #[serde(rename = "observacoes", default)]
    pub notes: Option<String>,

    #[serde(rename = "usuario", default)]
    pub user: Option<i64>,

    #[serde(rename = "usuario_nome", default)]
    pub user_name: Option<String>,
}

impl StockMovement {
    /// Количество со знаком: приход положительный, расход отрицательный
    pub fn signed_quantity(&self) -> i64 {
        match self.kind {
            MovementKind::Inbound => self.quantity.abs(),
            MovementKind::Outbound => -self.quantity.abs(),
        }
    }
}

impl Resource for StockMovement {
    type Id = StockMovementId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn aggregate_index() -> &'static str {
        "a006"
    }

    fn collection_name() -> &'static str {
        "movimentacoes"
    }

    fn element_name() -> &'static str {
        "Movimentação de Estoque"
    }

    fn list_name() -> &'static str {
        "Movimentações"
    }
}

/// Ручная запись движения
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockMovementDto {
    #[serde(rename = "peca")]
    pub part: PartId,

    #[serde(rename = "tipo_movimentacao")]
    pub kind: MovementKind,

    #[serde(rename = "quantidade")]
    pub quantity: i64,

    #[serde(rename = "motivo")]
    pub reason: String,

    #[serde(rename = "locacao", skip_serializing_if = "Option::is_none", default)]
    pub rental: Option<RentalId>,

    #[serde(rename = "observacoes", skip_serializing_if = "Option::is_none", default)]
    pub notes: Option<String>,
}

impl StockMovementDto {
    /// Движение с типовой причиной (подпись категории как текст)
    pub fn with_reason(part: PartId, kind: MovementKind, quantity: i64, reason: MovementReason) -> Self {
        Self {
            part,
            kind,
            quantity,
            reason: reason.label().to_string(),
            rental: None,
            notes: None,
        }
    }

    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        if self.quantity <= 0 {
            errors.add("quantidade", "Quantidade deve ser maior que zero");
        }
        let reason = self.reason.trim();
        if reason.is_empty() {
            errors.add("motivo", "Motivo é obrigatório");
        } else if reason.chars().count() > REASON_MAX_LEN {
            errors.add("motivo", format!("Motivo deve ter no máximo {} caracteres", REASON_MAX_LEN));
        }
        errors.into_result()
    }
}

/// Сводка движений за период (`relatorio_movimentacoes`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovementReport {
    #[serde(rename = "periodo_dias", deserialize_with = "deserialize_period")]
    pub period_days: u32,

    #[serde(rename = "total_entradas")]
    pub total_inbound: i64,

    #[serde(rename = "total_saidas")]
    pub total_outbound: i64,

    #[serde(rename = "saldo")]
    pub balance: i64,

    #[serde(rename = "total_movimentacoes")]
    pub movement_count: u64,
}

/// Параметры списка движений
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MovementQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(rename = "tipo_movimentacao", skip_serializing_if = "Option::is_none")]
    pub kind: Option<MovementKind>,
    #[serde(rename = "peca", skip_serializing_if = "Option::is_none")]
    pub part: Option<PartId>,
    #[serde(rename = "locacao", skip_serializing_if = "Option::is_none")]
    pub rental: Option<RentalId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ordering: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_quantity() {
        let movement: StockMovement = serde_json::from_str(
            r#"{"id": 1, "peca": 2, "tipo_movimentacao": "S", "quantidade": 4,
                "data_movimentacao": "2024-03-15T10:00:00-03:00", "locacao": null,
                "motivo": "Sinistro", "usuario": 1, "usuario_nome": "admin"}"#,
        )
        .unwrap();
        assert_eq!(movement.kind, MovementKind::Outbound);
        assert_eq!(movement.signed_quantity(), -4);
    }

    #[test]
    fn test_dto_validation() {
        let dto = StockMovementDto::with_reason(PartId(1), MovementKind::Inbound, 3, MovementReason::Maintenance);
        assert_eq!(dto.reason, "Manutenção");
        assert!(dto.validate().is_ok());

        let bad = StockMovementDto {
            quantity: 0,
            reason: "x".repeat(REASON_MAX_LEN + 1),
            ..dto
        };
        let errors = bad.validate().unwrap_err();
        assert!(errors.contains("quantidade"));
        assert!(errors.contains("motivo"));
    }

    #[test]
    fn test_report_period_as_string() {
        let report: MovementReport = serde_json::from_str(
            r#"{"periodo_dias": "30", "total_entradas": 40, "total_saidas": 15, "saldo": 25, "total_movimentacoes": 9}"#,
        )
        .unwrap();
        assert_eq!(report.period_days, 30);
        assert_eq!(report.balance, 25);
    }
}
