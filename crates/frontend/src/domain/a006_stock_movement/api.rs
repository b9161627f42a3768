use crate::shared::crud;
use crate::shared::http::{ApiClient, ApiError};
use contracts::domain::a006_stock_movement::aggregate::{
    MovementQuery, MovementReport, StockMovement, StockMovementDto, StockMovementId,
};
use contracts::domain::common::{ListResponse, PeriodQuery, Resource};

pub async fn list(client: &ApiClient, query: &MovementQuery) -> Result<ListResponse<StockMovement>, ApiError> {
    crud::list::<StockMovement, _>(client, query).await
}

pub async fn fetch_by_id(client: &ApiClient, id: StockMovementId) -> Result<StockMovement, ApiError> {
    crud::fetch_by_id::<StockMovement>(client, id).await
}

pub async fn create(client: &ApiClient, dto: &StockMovementDto) -> Result<StockMovement, ApiError> {
    dto.validate()?;
    crud::create::<StockMovement, _>(client, dto).await
}

pub async fn update(client: &ApiClient, id: StockMovementId, dto: &StockMovementDto) -> Result<StockMovement, ApiError> {
    dto.validate()?;
    crud::update::<StockMovement, _>(client, id, dto).await
}

pub async fn delete(client: &ApiClient, id: StockMovementId) -> Result<(), ApiError> {
    crud::delete::<StockMovement>(client, id).await
}

/// Inbound/outbound totals for the last `period.days` days
pub async fn movement_report(client: &ApiClient, period: PeriodQuery) -> Result<MovementReport, ApiError> {
    client
        .get_with(
            &StockMovement::collection_action_path("relatorio_movimentacoes"),
            &period,
        )
        .await
}
