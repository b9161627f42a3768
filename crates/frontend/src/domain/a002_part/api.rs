use crate::shared::crud;
use crate::shared::http::{ApiClient, ApiError};
use contracts::dashboards::d100_overview::StockReport;
use contracts::domain::a002_part::aggregate::{Part, PartDto, PartId, PartQuery, StockAdjustment};
use contracts::domain::common::{ListResponse, Resource};
use contracts::shared::validation::FieldErrors;

pub async fn list(client: &ApiClient, query: &PartQuery) -> Result<ListResponse<Part>, ApiError> {
    crud::list::<Part, _>(client, query).await
}

pub async fn fetch_by_id(client: &ApiClient, id: PartId) -> Result<Part, ApiError> {
    crud::fetch_by_id::<Part>(client, id).await
}

/// Parts referenced by a rental form, loaded together
pub async fn fetch_by_ids(client: &ApiClient, ids: &[PartId]) -> Result<Vec<Part>, ApiError> {
    crud::fetch_by_ids::<Part>(client, ids).await
}

pub async fn save_form(client: &ApiClient, dto: &PartDto) -> Result<Part, ApiError> {
    dto.validate()?;
    match dto.id {
        Some(id) => update(client, id, dto).await,
        None => create(client, dto).await,
    }
}

pub async fn create(client: &ApiClient, dto: &PartDto) -> Result<Part, ApiError> {
    crud::create::<Part, _>(client, dto).await
}

pub async fn update(client: &ApiClient, id: PartId, dto: &PartDto) -> Result<Part, ApiError> {
    crud::update::<Part, _>(client, id, dto).await
}

/// Refused locally while part of the stock is out on rental
pub async fn delete(client: &ApiClient, part: &Part) -> Result<(), ApiError> {
    part.ensure_deletable().map_err(FieldErrors::general)?;
    crud::delete::<Part>(client, part.id).await
}

/// Parts with fewer than five units available
pub async fn low_stock(client: &ApiClient) -> Result<Vec<Part>, ApiError> {
    client.get(&Part::collection_action_path("estoque_baixo")).await
}

pub async fn stock_report(client: &ApiClient) -> Result<StockReport, ApiError> {
    client.get(&Part::collection_action_path("relatorio_estoque")).await
}

/// Set a new total; the server records the matching stock movement
pub async fn adjust_stock(client: &ApiClient, part: &Part, adjustment: &StockAdjustment) -> Result<Part, ApiError> {
    adjustment.validate(part)?;
    let updated: Part = client
        .post(&Part::item_action_path(part.id, "ajustar_estoque"), adjustment)
        .await?;
    log::info!(
        "Stock of {} adjusted: {} -> {}",
        part.code,
        part.total_quantity,
        updated.total_quantity
    );
    Ok(updated)
}
