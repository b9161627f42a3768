use crate::domain::a001_part_type::aggregate::PartTypeId;
use crate::domain::common::{EntityMetadata, Resource};
use crate::enums::{MovementKind, StockLevel};
use crate::shared::money;
use crate::shared::validation::FieldErrors;
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

crate::entity_id!(
    /// Уникальный идентификатор детали
    PartId
);

// ============================================================================
// Aggregate Root
// ============================================================================

/// Деталь: складская единица учёта определённого типа
///
/// Инвариант сервера: `available = total - rented`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    pub id: PartId,

    #[serde(rename = "tipo_peca")]
    pub part_type: PartTypeId,

    #[serde(rename = "tipo_peca_nome", default, skip_serializing)]
    pub part_type_name: Option<String>,

    #[serde(rename = "tipo_peca_valor", with = "money::option", default, skip_serializing)]
    pub part_type_price: Option<f64>,

    #[serde(rename = "codigo")]
    pub code: String,

    #[serde(rename = "quantidade_total")]
    pub total_quantity: u32,

    #[serde(rename = "quantidade_disponivel")]
    pub available_quantity: u32,

    #[serde(rename = "quantidade_locada")]
    pub rented_quantity: u32,

    #[serde(rename = "observacoes", default)]
    pub notes: Option<String>,

    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl Part {
    pub fn stock_level(&self) -> StockLevel {
        StockLevel::from_available(self.available_quantity)
    }

    /// Деталь, часть которой в аренде, удалять нельзя
    pub fn ensure_deletable(&self) -> Result<(), String> {
        if self.rented_quantity > 0 {
            return Err("Não é possível excluir peça com quantidade locada".into());
        }
        Ok(())
    }

    /// Форма корректировки, предзаполненная текущим количеством
    pub fn adjustment_form(&self) -> StockAdjustment {
        StockAdjustment {
            new_total: self.total_quantity,
            reason: String::new(),
        }
    }
}

impl Resource for Part {
    type Id = PartId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "pecas"
    }

    fn element_name() -> &'static str {
        "Peça"
    }

    fn list_name() -> &'static str {
        "Peças"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO для создания/обновления детали
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PartDto {
    #[serde(skip)]
    pub id: Option<PartId>,

    #[serde(rename = "tipo_peca")]
    pub part_type: Option<PartTypeId>,

    #[serde(rename = "codigo")]
    pub code: String,

    #[serde(rename = "quantidade_total")]
    pub total_quantity: u32,

    #[serde(rename = "quantidade_disponivel")]
    pub available_quantity: u32,

    #[serde(rename = "quantidade_locada")]
    pub rented_quantity: u32,

    #[serde(rename = "observacoes")]
    pub notes: Option<String>,
}

impl PartDto {
    /// Новая деталь: всё количество доступно
    pub fn new_for_insert(part_type: PartTypeId, code: String, total_quantity: u32) -> Self {
        Self {
            id: None,
            part_type: Some(part_type),
            code,
            total_quantity,
            available_quantity: total_quantity,
            rented_quantity: 0,
            notes: None,
        }
    }

    /// Редактирование сохраняет арендованное количество
    pub fn from_part(part: &Part) -> Self {
        Self {
            id: Some(part.id),
            part_type: Some(part.part_type),
            code: part.code.clone(),
            total_quantity: part.total_quantity,
            available_quantity: part.available_quantity,
            rented_quantity: part.rented_quantity,
            notes: part.notes.clone(),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.is_some()
    }

    /// Изменить общее количество, доступное пересчитывается
    pub fn set_total(&mut self, total: u32) {
        self.total_quantity = total;
        self.available_quantity = total.saturating_sub(self.rented_quantity);
    }

    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        if self.part_type.is_none() {
            errors.add("tipo_peca", "Tipo de peça é obrigatório");
        }
        if self.code.trim().is_empty() {
            errors.add("codigo", "Código é obrigatório");
        }
        if self.total_quantity < self.rented_quantity {
            errors.add(
                "quantidade_total",
                format!(
                    "Quantidade total não pode ser menor que a quantidade locada ({})",
                    self.rented_quantity
                ),
            );
        }
        errors.into_result()
    }
}

/// Запрос ручной корректировки остатка (`ajustar_estoque`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockAdjustment {
    #[serde(rename = "quantidade_total")]
    pub new_total: u32,

    #[serde(rename = "motivo")]
    pub reason: String,
}

impl StockAdjustment {
    /// Новое общее количество не может быть меньше арендованного,
    /// причина обязательна. Сервер проверяет то же самое.
    pub fn validate(&self, part: &Part) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        if self.new_total < part.rented_quantity {
            errors.add(
                "quantidade_total",
                format!(
                    "A nova quantidade não pode ser menor que a quantidade locada ({})",
                    part.rented_quantity
                ),
            );
        }
        if self.reason.trim().is_empty() {
            errors.add("motivo", "Motivo é obrigatório");
        }
        errors.into_result()
    }

    /// Разница с текущим общим количеством
    pub fn delta(&self, part: &Part) -> i64 {
        i64::from(self.new_total) - i64::from(part.total_quantity)
    }

    /// Какое движение создаст сервер, `None` если количество не меняется
    pub fn movement_kind(&self, part: &Part) -> Option<MovementKind> {
        MovementKind::for_delta(self.delta(part))
    }

    /// Доступное количество после корректировки
    pub fn resulting_available(&self, part: &Part) -> u32 {
        self.new_total.saturating_sub(part.rented_quantity)
    }
}

/// Параметры списка деталей
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PartQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(rename = "tipo_peca", skip_serializing_if = "Option::is_none")]
    pub part_type: Option<PartTypeId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ordering: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_part(total: u32, rented: u32) -> Part {
        Part {
            id: PartId(7),
            part_type: PartTypeId(3),
            part_type_name: Some("Andaime".into()),
            part_type_price: Some(12.5),
            code: "AND-001".into(),
            total_quantity: total,
            available_quantity: total - rented,
            rented_quantity: rented,
            notes: None,
            metadata: EntityMetadata::default(),
        }
    }

    #[test]
    fn test_deserialize_server_payload() {
        let json = r#"{
            "id": 7, "tipo_peca": 3, "tipo_peca_nome": "Andaime", "tipo_peca_valor": "12.50",
            "codigo": "AND-001", "quantidade_total": 20, "quantidade_disponivel": 4,
            "quantidade_locada": 16, "observacoes": ""
        }"#;
        let part: Part = serde_json::from_str(json).unwrap();
        assert_eq!(part.part_type_price, Some(12.5));
        assert_eq!(part.stock_level(), StockLevel::Low);
        assert!(part.ensure_deletable().is_err());
    }

    #[test]
    fn test_adjustment_below_rented_rejected() {
        let part = sample_part(20, 16);
        let adjustment = StockAdjustment { new_total: 15, reason: "Sinistro".into() };
        let errors = adjustment.validate(&part).unwrap_err();
        assert!(errors.contains("quantidade_total"));
        assert!(!errors.contains("motivo"));

        let at_rented = StockAdjustment { new_total: 16, reason: "Sinistro".into() };
        assert!(at_rented.validate(&part).is_ok());
        assert_eq!(at_rented.resulting_available(&part), 0);
    }

    #[test]
    fn test_adjustment_requires_reason() {
        let part = sample_part(10, 0);
        let mut adjustment = part.adjustment_form();
        adjustment.new_total = 12;
        assert_eq!(adjustment.validate(&part).unwrap_err().first("motivo"), Some("Motivo é obrigatório"));
        assert_eq!(adjustment.delta(&part), 2);
        assert_eq!(adjustment.movement_kind(&part), Some(MovementKind::Inbound));

        adjustment.new_total = 10;
        assert_eq!(adjustment.movement_kind(&part), None);
        adjustment.new_total = 4;
        assert_eq!(adjustment.movement_kind(&part), Some(MovementKind::Outbound));
    }

    #[test]
    fn test_dto_keeps_rented_on_edit() {
        let part = sample_part(20, 16);
        let mut dto = PartDto::from_part(&part);
        dto.set_total(30);
        assert_eq!(dto.available_quantity, 14);
        assert!(dto.validate().is_ok());

        dto.set_total(10);
        assert_eq!(dto.available_quantity, 0);
        assert!(dto.validate().unwrap_err().contains("quantidade_total"));
    }

    #[test]
    fn test_new_dto_validation() {
        let dto = PartDto::default();
        let errors = dto.validate().unwrap_err();
        assert!(errors.contains("tipo_peca"));
        assert!(errors.contains("codigo"));

        let dto = PartDto::new_for_insert(PartTypeId(1), "ESC-10".into(), 50);
        assert_eq!(dto.available_quantity, 50);
        assert!(dto.validate().is_ok());
    }
}
