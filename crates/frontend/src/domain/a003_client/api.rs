use crate::shared::crud;
use crate::shared::http::{ApiClient, ApiError};
use contracts::domain::a003_client::aggregate::{Client, ClientDto, ClientHistory, ClientId, ClientQuery};
use contracts::domain::common::{ListResponse, Resource};

pub async fn list(client: &ApiClient, query: &ClientQuery) -> Result<ListResponse<Client>, ApiError> {
    crud::list::<Client, _>(client, query).await
}

pub async fn fetch_by_id(client: &ApiClient, id: ClientId) -> Result<Client, ApiError> {
    crud::fetch_by_id::<Client>(client, id).await
}

pub async fn fetch_by_ids(client: &ApiClient, ids: &[ClientId]) -> Result<Vec<Client>, ApiError> {
    crud::fetch_by_ids::<Client>(client, ids).await
}

/// Validated, then sent with masked CPF/CNPJ and CEP
pub async fn save_form(client: &ApiClient, dto: &ClientDto) -> Result<Client, ApiError> {
    dto.validate()?;
    let payload = dto.clone().normalized();
    match payload.id {
        Some(id) => update(client, id, &payload).await,
        None => create(client, &payload).await,
    }
}

pub async fn create(client: &ApiClient, dto: &ClientDto) -> Result<Client, ApiError> {
    crud::create::<Client, _>(client, dto).await
}

pub async fn update(client: &ApiClient, id: ClientId, dto: &ClientDto) -> Result<Client, ApiError> {
    crud::update::<Client, _>(client, id, dto).await
}

pub async fn delete(client: &ApiClient, id: ClientId) -> Result<(), ApiError> {
    crud::delete::<Client>(client, id).await
}

pub async fn defaulters(client: &ApiClient) -> Result<Vec<Client>, ApiError> {
    client.get(&Client::collection_action_path("inadimplentes")).await
}

/// Totals and the last ten rentals of a client
pub async fn history(client: &ApiClient, id: ClientId) -> Result<ClientHistory, ApiError> {
    client
        .get(&Client::item_action_path(id, "historico_locacoes"))
        .await
}
