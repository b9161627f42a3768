use crate::domain::a004_rental::aggregate::Rental;
use crate::domain::common::{EntityMetadata, Resource};
use crate::enums::{ClientStatus, PersonKind};
use crate::shared::money;
use crate::shared::tax_id::{self, TaxId};
use crate::shared::validation::FieldErrors;
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

crate::entity_id!(
    /// Уникальный идентификатор клиента
    ClientId
);

// ============================================================================
// Aggregate Root
// ============================================================================

/// Клиент (физическое или юридическое лицо)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: ClientId,

    /// Имя или наименование организации
    #[serde(rename = "nome")]
    pub name: String,

    #[serde(rename = "tipo_pessoa")]
    pub person_kind: PersonKind,

    #[serde(rename = "cpf_cnpj")]
    pub tax_id: String,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(rename = "telefone")]
    pub phone: String,

    #[serde(rename = "endereco")]
    pub address: String,

    #[serde(rename = "cidade")]
    pub city: String,

    /// UF, две буквы
    #[serde(rename = "estado")]
    pub state: String,

    #[serde(rename = "cep")]
    pub postal_code: String,

    pub status: ClientStatus,

    #[serde(rename = "observacoes", default)]
    pub notes: Option<String>,

    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl Client {
    /// Номер CPF/CNPJ с маской для отображения
    pub fn tax_id_display(&self) -> String {
        tax_id::format(&self.tax_id)
    }

    pub fn is_defaulter(&self) -> bool {
        self.status == ClientStatus::Defaulter
    }
}

impl Resource for Client {
    type Id = ClientId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn aggregate_index() -> &'static str {
        "a003"
    }

    fn collection_name() -> &'static str {
        "clientes"
    }

    fn element_name() -> &'static str {
        "Cliente"
    }

    fn list_name() -> &'static str {
        "Clientes"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO для создания/обновления клиента
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ClientDto {
    #[serde(skip)]
    pub id: Option<ClientId>,

    #[serde(rename = "nome")]
    pub name: String,

    #[serde(rename = "tipo_pessoa")]
    pub person_kind: PersonKind,

    #[serde(rename = "cpf_cnpj")]
    pub tax_id: String,

    pub email: Option<String>,

    #[serde(rename = "telefone")]
    pub phone: String,

    #[serde(rename = "endereco")]
    pub address: String,

    #[serde(rename = "cidade")]
    pub city: String,

    #[serde(rename = "estado")]
    pub state: String,

    #[serde(rename = "cep")]
    pub postal_code: String,

    pub status: ClientStatus,

    #[serde(rename = "observacoes")]
    pub notes: Option<String>,
}

impl ClientDto {
    pub fn from_client(client: &Client) -> Self {
        Self {
            id: Some(client.id),
            name: client.name.clone(),
            person_kind: client.person_kind,
            tax_id: client.tax_id.clone(),
            email: client.email.clone(),
            phone: client.phone.clone(),
            address: client.address.clone(),
            city: client.city.clone(),
            state: client.state.clone(),
            postal_code: client.postal_code.clone(),
            status: client.status,
            notes: client.notes.clone(),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.is_some()
    }

    /// Валидация формы
    ///
    /// CPF/CNPJ проверяется по контрольным цифрам и должен соответствовать
    /// типу лица: CPF для физлица, CNPJ для юрлица.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();

        if self.name.trim().is_empty() {
            errors.add("nome", "Nome é obrigatório");
        }

        let expected = self.person_kind.tax_id_kind();
        match TaxId::parse(&self.tax_id) {
            Some(id) if id.kind() == expected => {}
            Some(_) => errors.add(
                "cpf_cnpj",
                format!("{} esperado para {}", expected.display_name(), self.person_kind.label()),
            ),
            None => errors.add("cpf_cnpj", format!("{} inválido", expected.display_name())),
        }

        if let Some(email) = self.email.as_deref().map(str::trim).filter(|e| !e.is_empty()) {
            if !looks_like_email(email) {
                errors.add("email", "E-mail inválido");
            }
        }
        if self.phone.chars().filter(|c| c.is_ascii_digit()).count() < 10 {
            errors.add("telefone", "Telefone inválido");
        }
        if self.address.trim().is_empty() {
            errors.add("endereco", "Endereço é obrigatório");
        }
        if self.city.trim().is_empty() {
            errors.add("cidade", "Cidade é obrigatória");
        }
        let state = self.state.trim();
        if state.len() != 2 || !state.chars().all(|c| c.is_ascii_alphabetic()) {
            errors.add("estado", "Estado deve ter 2 letras (UF)");
        }
        if self.postal_code.chars().filter(|c| c.is_ascii_digit()).count() != 8 {
            errors.add("cep", "CEP deve ter 8 dígitos");
        }

        errors.into_result()
    }

    /// Привести к виду, в котором сервер хранит значения (маски, UF заглавными)
    pub fn normalized(mut self) -> Self {
        self.tax_id = tax_id::format(&self.tax_id);
        self.state = self.state.trim().to_ascii_uppercase();
        self.postal_code = crate::shared::format::format_cep(&self.postal_code);
        self.email = self
            .email
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty());
        self
    }
}

fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.starts_with('.'),
        None => false,
    }
}

/// История аренд клиента (`historico_locacoes`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientHistory {
    #[serde(rename = "total_locacoes")]
    pub total_rentals: u64,

    #[serde(rename = "valor_total_gasto", with = "money")]
    pub total_spent: f64,

    #[serde(rename = "locacoes_ativas")]
    pub active_rentals: u64,

    /// Последние 10 аренд
    #[serde(rename = "locacoes", default)]
    pub recent: Vec<Rental>,
}

/// Параметры списка клиентов
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ClientQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(rename = "tipo_pessoa", skip_serializing_if = "Option::is_none")]
    pub person_kind: Option<PersonKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ClientStatus>,
    #[serde(rename = "cidade", skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(rename = "estado", skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ordering: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_individual() -> ClientDto {
        ClientDto {
            name: "Maria da Silva".into(),
            person_kind: PersonKind::Individual,
            tax_id: "529.982.247-25".into(),
            email: Some("maria@example.com".into()),
            phone: "(11) 98765-4321".into(),
            address: "Rua das Flores, 100".into(),
            city: "São Paulo".into(),
            state: "sp".into(),
            postal_code: "01310100".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_individual() {
        assert!(valid_individual().validate().is_ok());
    }

    #[test]
    fn test_tax_id_must_match_person_kind() {
        let mut dto = valid_individual();
        dto.person_kind = PersonKind::Company;
        let errors = dto.validate().unwrap_err();
        assert_eq!(errors.first("cpf_cnpj"), Some("CNPJ esperado para Pessoa Jurídica"));

        dto.tax_id = "11.222.333/0001-81".into();
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_invalid_check_digit() {
        let mut dto = valid_individual();
        dto.tax_id = "529.982.247-24".into();
        assert_eq!(dto.validate().unwrap_err().first("cpf_cnpj"), Some("CPF inválido"));
    }

    #[test]
    fn test_other_fields() {
        let mut dto = valid_individual();
        dto.email = Some("not-an-email".into());
        dto.state = "SPX".into();
        dto.postal_code = "0131".into();
        let errors = dto.validate().unwrap_err();
        assert!(errors.contains("email"));
        assert!(errors.contains("estado"));
        assert!(errors.contains("cep"));
        assert!(!errors.contains("cpf_cnpj"));
    }

    #[test]
    fn test_normalized() {
        let dto = ClientDto {
            tax_id: "52998224725".into(),
            email: Some("  ".into()),
            ..valid_individual()
        }
        .normalized();
        assert_eq!(dto.tax_id, "529.982.247-25");
        assert_eq!(dto.state, "SP");
        assert_eq!(dto.postal_code, "01310-100");
        assert_eq!(dto.email, None);
    }

    #[test]
    fn test_query_serializes_codes() {
        let query = ClientQuery {
            status: Some(ClientStatus::Defaulter),
            person_kind: Some(PersonKind::Company),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&query).unwrap(),
            serde_json::json!({"tipo_pessoa": "J", "status": "I"})
        );
    }
}
