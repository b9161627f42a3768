use crate::domain::a002_part::aggregate::PartId;
use crate::domain::a004_rental::aggregate::RentalId;
use crate::domain::common::Resource;
use crate::shared::money;
use serde::{Deserialize, Serialize};

crate::entity_id!(
    /// Уникальный идентификатор позиции аренды
    RentalItemId
);

/// Позиция аренды: сколько единиц какой детали
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RentalItem {
    pub id: RentalItemId,

    #[serde(rename = "locacao")]
    pub rental: RentalId,

    #[serde(rename = "peca")]
    pub part: PartId,

    #[serde(rename = "peca_codigo", default, skip_serializing)]
    pub part_code: Option<String>,

    #[serde(rename = "peca_nome", default, skip_serializing)]
    pub part_name: Option<String>,

    /// Цена типа детали на момент запроса
    #[serde(rename = "valor_unitario", with = "money::option", default, skip_serializing)]
    pub unit_price: Option<f64>,

    #[serde(rename = "quantidade")]
    pub quantity: u32,

    #[serde(rename = "valor_total_item", with = "money")]
    pub line_total: f64,

    #[serde(rename = "observacoes", default)]
    pub notes: Option<String>,
}

impl Resource for RentalItem {
    type Id = RentalItemId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn aggregate_index() -> &'static str {
        "a005"
    }

    fn collection_name() -> &'static str {
        "itens-locacao"
    }

    fn element_name() -> &'static str {
        "Item de Locação"
    }

    fn list_name() -> &'static str {
        "Itens de Locação"
    }
}

/// Позиция в запросе создания аренды или отдельная позиция
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentalItemDto {
    /// Заполняется только при добавлении позиции к существующей аренде
    #[serde(rename = "locacao", skip_serializing_if = "Option::is_none", default)]
    pub rental: Option<RentalId>,

    #[serde(rename = "peca")]
    pub part: PartId,

    #[serde(rename = "quantidade")]
    pub quantity: u32,

    #[serde(rename = "observacoes", skip_serializing_if = "Option::is_none", default)]
    pub notes: Option<String>,
}

impl RentalItemDto {
    pub fn new(part: PartId, quantity: u32) -> Self {
        Self {
            rental: None,
            part,
            quantity,
            notes: None,
        }
    }

    pub fn for_rental(rental: RentalId, part: PartId, quantity: u32) -> Self {
        Self {
            rental: Some(rental),
            ..Self::new(part, quantity)
        }
    }
}

/// Параметры списка позиций
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RentalItemQuery {
    #[serde(rename = "locacao", skip_serializing_if = "Option::is_none")]
    pub rental: Option<RentalId>,
    #[serde(rename = "peca", skip_serializing_if = "Option::is_none")]
    pub part: Option<PartId>,
}
