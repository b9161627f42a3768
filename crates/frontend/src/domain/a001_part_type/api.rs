use crate::shared::crud;
use crate::shared::http::{ApiClient, ApiError};
use contracts::dashboards::d100_overview::TypeStatistics;
use contracts::domain::a001_part_type::aggregate::{PartType, PartTypeDto, PartTypeId, PartTypeQuery};
use contracts::domain::common::{ListResponse, Resource};

pub async fn list(client: &ApiClient, query: &PartTypeQuery) -> Result<ListResponse<PartType>, ApiError> {
    crud::list::<PartType, _>(client, query).await
}

pub async fn fetch_by_id(client: &ApiClient, id: PartTypeId) -> Result<PartType, ApiError> {
    crud::fetch_by_id::<PartType>(client, id).await
}

pub async fn fetch_by_ids(client: &ApiClient, ids: &[PartTypeId]) -> Result<Vec<PartType>, ApiError> {
    crud::fetch_by_ids::<PartType>(client, ids).await
}

/// Create or update depending on the form mode
pub async fn save_form(client: &ApiClient, dto: &PartTypeDto) -> Result<PartType, ApiError> {
    dto.validate()?;
    match dto.id {
        Some(id) => update(client, id, dto).await,
        None => create(client, dto).await,
    }
}

pub async fn create(client: &ApiClient, dto: &PartTypeDto) -> Result<PartType, ApiError> {
    crud::create::<PartType, _>(client, dto).await
}

pub async fn update(client: &ApiClient, id: PartTypeId, dto: &PartTypeDto) -> Result<PartType, ApiError> {
    crud::update::<PartType, _>(client, id, dto).await
}

pub async fn delete(client: &ApiClient, id: PartTypeId) -> Result<(), ApiError> {
    crud::delete::<PartType>(client, id).await
}

/// Type count, average price and the most rented types
pub async fn type_statistics(client: &ApiClient) -> Result<TypeStatistics, ApiError> {
    client.get(&PartType::collection_action_path("estatisticas")).await
}
