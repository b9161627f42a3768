use crate::domain::common::{EntityMetadata, Resource};
use crate::shared::money;
use crate::shared::validation::FieldErrors;
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

crate::entity_id!(
    /// Уникальный идентификатор типа детали
    PartTypeId
);

// ============================================================================
// Aggregate Root
// ============================================================================

/// Тип детали (позиция каталога) с ценой аренды за период
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartType {
    pub id: PartTypeId,

    #[serde(rename = "nome")]
    pub name: String,

    #[serde(rename = "descricao", default)]
    pub description: Option<String>,

    #[serde(rename = "valor_locacao", with = "money")]
    pub rental_price: f64,

    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl Resource for PartType {
    type Id = PartTypeId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "tipos-peca"
    }

    fn element_name() -> &'static str {
        "Tipo de Peça"
    }

    fn list_name() -> &'static str {
        "Tipos de Peças"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO для создания/обновления типа детали
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PartTypeDto {
    #[serde(skip)]
    pub id: Option<PartTypeId>,

    #[serde(rename = "nome")]
    pub name: String,

    #[serde(rename = "descricao")]
    pub description: Option<String>,

    #[serde(rename = "valor_locacao", with = "money")]
    pub rental_price: f64,
}

impl PartTypeDto {
    pub fn from_part_type(part_type: &PartType) -> Self {
        Self {
            id: Some(part_type.id),
            name: part_type.name.clone(),
            description: part_type.description.clone(),
            rental_price: part_type.rental_price,
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.is_some()
    }

    /// Валидация формы; ключи ошибок совпадают с именами полей API
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        if self.name.trim().is_empty() {
            errors.add("nome", "Nome é obrigatório");
        }
        if !self.rental_price.is_finite() || self.rental_price <= 0.0 {
            errors.add("valor_locacao", "Valor de locação deve ser maior que zero");
        }
        errors.into_result()
    }
}

/// Параметры списка типов деталей
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PartTypeQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ordering: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_server_payload() {
        let json = r#"{
            "id": 3,
            "nome": "Andaime tubular 1,5m",
            "descricao": null,
            "valor_locacao": "12.50",
            "created_at": "2024-03-15T14:02:26.123456-03:00",
            "updated_at": "2024-03-15T14:02:26.123456-03:00"
        }"#;
        let part_type: PartType = serde_json::from_str(json).unwrap();
        assert_eq!(part_type.id, PartTypeId(3));
        assert_eq!(part_type.rental_price, 12.5);
        assert!(part_type.metadata.created_at.is_some());
        assert_eq!(PartType::item_path(part_type.id), "/tipos-peca/3/");
    }

    #[test]
    fn test_validate() {
        let empty = PartTypeDto::default();
        let errors = empty.validate().unwrap_err();
        assert_eq!(errors.first("nome"), Some("Nome é obrigatório"));
        assert!(errors.contains("valor_locacao"));

        let ok = PartTypeDto {
            name: "Escora metálica".into(),
            rental_price: 4.0,
            ..Default::default()
        };
        assert!(ok.validate().is_ok());
        assert_eq!(
            serde_json::to_value(&ok).unwrap(),
            serde_json::json!({"nome": "Escora metálica", "descricao": null, "valor_locacao": "4.00"})
        );
    }
}
