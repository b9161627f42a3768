use crate::domain::a002_part::aggregate::{Part, PartId};
use crate::domain::a003_client::aggregate::ClientId;
use crate::domain::a005_rental_item::aggregate::{RentalItem, RentalItemDto};
use crate::domain::common::{EntityMetadata, Resource};
use crate::enums::RentalStatus;
use crate::shared::money;
use crate::shared::validation::FieldErrors;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

// ============================================================================
// ID Type
// ============================================================================

crate::entity_id!(
    /// Уникальный идентификатор аренды
    RentalId
);

// ============================================================================
// Aggregate Root
// ============================================================================

/// Аренда: клиент берёт детали на период
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rental {
    pub id: RentalId,

    #[serde(rename = "numero_locacao")]
    pub number: i64,

    #[serde(rename = "cliente")]
    pub client: ClientId,

    #[serde(rename = "cliente_nome", default, skip_serializing)]
    pub client_name: Option<String>,

    #[serde(rename = "cliente_cpf_cnpj", default, skip_serializing)]
    pub client_tax_id: Option<String>,

    #[serde(rename = "data_locacao")]
    pub rental_date: NaiveDate,

    #[serde(rename = "data_previsao_devolucao")]
    pub expected_return: NaiveDate,

    #[serde(rename = "data_devolucao", default)]
    pub returned_on: Option<NaiveDate>,

    pub status: RentalStatus,

    #[serde(rename = "valor_total", with = "money")]
    pub total: f64,

    #[serde(rename = "desconto", with = "money")]
    pub discount: f64,

    /// `total - discount`, считает сервер
    #[serde(rename = "valor_final", with = "money")]
    pub final_amount: f64,

    #[serde(rename = "observacoes", default)]
    pub notes: Option<String>,

    #[serde(rename = "itens", default, skip_serializing)]
    pub items: Vec<RentalItem>,

    #[serde(rename = "total_itens", default, skip_serializing)]
    pub item_count: Option<u32>,

    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl Rental {
    /// Просрочена: активна и плановая дата возврата уже прошла
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.status == RentalStatus::Active && self.expected_return < today
    }

    /// Дней просрочки, 0 если аренда не просрочена
    pub fn days_overdue(&self, today: NaiveDate) -> i64 {
        if self.is_overdue(today) {
            (today - self.expected_return).num_days()
        } else {
            0
        }
    }

    /// Число дней аренды (минимум один)
    pub fn period_days(&self) -> i64 {
        let end = self.returned_on.unwrap_or(self.expected_return);
        (end - self.rental_date).num_days().max(1)
    }

    pub fn ensure_can_finalize(&self) -> Result<(), String> {
        if self.status.can_finalize() {
            Ok(())
        } else {
            Err("Apenas locações ativas podem ser finalizadas".into())
        }
    }
}

impl Resource for Rental {
    type Id = RentalId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn aggregate_index() -> &'static str {
        "a004"
    }

    fn collection_name() -> &'static str {
        "locacoes"
    }

    fn element_name() -> &'static str {
        "Locação"
    }

    fn list_name() -> &'static str {
        "Locações"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO создания аренды вместе с позициями
///
/// Итоговые суммы и списание со склада делает сервер.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RentalCreateDto {
    #[serde(rename = "numero_locacao")]
    pub number: i64,

    #[serde(rename = "cliente")]
    pub client: Option<ClientId>,

    #[serde(rename = "data_locacao")]
    pub rental_date: NaiveDate,

    #[serde(rename = "data_previsao_devolucao")]
    pub expected_return: NaiveDate,

    pub status: RentalStatus,

    #[serde(rename = "desconto", with = "money")]
    pub discount: f64,

    #[serde(rename = "observacoes")]
    pub notes: Option<String>,

    #[serde(rename = "itens")]
    pub items: Vec<RentalItemDto>,
}

impl RentalCreateDto {
    pub fn new(number: i64, rental_date: NaiveDate, expected_return: NaiveDate) -> Self {
        Self {
            number,
            client: None,
            rental_date,
            expected_return,
            status: RentalStatus::Active,
            discount: 0.0,
            notes: None,
            items: Vec::new(),
        }
    }

    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();

        if self.client.is_none() {
            errors.add("cliente", "Cliente é obrigatório");
        }
        if self.expected_return < self.rental_date {
            errors.add(
                "data_previsao_devolucao",
                "Data de previsão de devolução não pode ser anterior à data de locação.",
            );
        }
        if !self.discount.is_finite() || self.discount < 0.0 {
            errors.add("desconto", "Desconto não pode ser negativo");
        }
        if self.items.is_empty() {
            errors.add("itens", "Adicione pelo menos uma peça");
        }

        let mut seen: HashSet<PartId> = HashSet::new();
        for (i, item) in self.items.iter().enumerate() {
            if item.quantity == 0 {
                errors.add(format!("itens.{}.quantidade", i), "Quantidade deve ser maior que zero");
            }
            if !seen.insert(item.part) {
                errors.add(format!("itens.{}.peca", i), "Peça já incluída nesta locação");
            }
        }

        errors.into_result()
    }

    /// Проверка остатков по загруженному списку деталей
    pub fn check_availability(&self, parts: &[Part]) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        for (i, item) in self.items.iter().enumerate() {
            let Some(part) = parts.iter().find(|p| p.id == item.part) else {
                errors.add(format!("itens.{}.peca", i), "Peça não encontrada");
                continue;
            };
            if item.quantity > part.available_quantity {
                errors.add(
                    format!("itens.{}.quantidade", i),
                    format!(
                        "Quantidade solicitada ({}) excede a disponível ({}) para a peça {}.",
                        item.quantity, part.available_quantity, part.code
                    ),
                );
            }
        }
        errors.into_result()
    }

    /// Предварительная сумма по ценам типов (без учёта скидки)
    pub fn estimated_total(&self, parts: &[Part]) -> f64 {
        self.items
            .iter()
            .filter_map(|item| {
                let part = parts.iter().find(|p| p.id == item.part)?;
                Some(f64::from(item.quantity) * part.part_type_price.unwrap_or(0.0))
            })
            .sum()
    }
}

/// Завершение аренды; без даты сервер берёт сегодняшнюю
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalizeRentalRequest {
    #[serde(rename = "data_devolucao", skip_serializing_if = "Option::is_none")]
    pub returned_on: Option<NaiveDate>,
}

/// Параметры списка аренд
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RentalQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<RentalStatus>,
    #[serde(rename = "cliente", skip_serializing_if = "Option::is_none")]
    pub client: Option<ClientId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ordering: Option<String>,
}
