use crate::shared::crud;
use crate::shared::http::{ApiClient, ApiError};
use contracts::dashboards::d100_overview::FinancialReport;
use contracts::domain::a002_part::aggregate::Part;
use contracts::domain::a004_rental::aggregate::{
    FinalizeRentalRequest, Rental, RentalCreateDto, RentalId, RentalQuery,
};
use contracts::domain::common::{ListResponse, PeriodQuery, Resource};
use contracts::shared::validation::FieldErrors;

pub async fn list(client: &ApiClient, query: &RentalQuery) -> Result<ListResponse<Rental>, ApiError> {
    crud::list::<Rental, _>(client, query).await
}

pub async fn fetch_by_id(client: &ApiClient, id: RentalId) -> Result<Rental, ApiError> {
    crud::fetch_by_id::<Rental>(client, id).await
}

pub async fn fetch_by_ids(client: &ApiClient, ids: &[RentalId]) -> Result<Vec<Rental>, ApiError> {
    crud::fetch_by_ids::<Rental>(client, ids).await
}

/// Create a rental with its items
///
/// `parts` is the stock the form was filled from; quantities above what is
/// available are rejected before the request. The server checks again.
pub async fn create(client: &ApiClient, dto: &RentalCreateDto, parts: &[Part]) -> Result<Rental, ApiError> {
    let mut errors = FieldErrors::new();
    if let Err(e) = dto.validate() {
        errors.merge(e);
    }
    if let Err(e) = dto.check_availability(parts) {
        errors.merge(e);
    }
    errors.into_result()?;
    crud::create::<Rental, _>(client, dto).await
}

pub async fn update(client: &ApiClient, id: RentalId, dto: &RentalCreateDto) -> Result<Rental, ApiError> {
    dto.validate()?;
    crud::update::<Rental, _>(client, id, dto).await
}

pub async fn delete(client: &ApiClient, id: RentalId) -> Result<(), ApiError> {
    crud::delete::<Rental>(client, id).await
}

pub async fn active(client: &ApiClient) -> Result<Vec<Rental>, ApiError> {
    client.get(&Rental::collection_action_path("ativas")).await
}

/// Active rentals past their expected return date
pub async fn overdue(client: &ApiClient) -> Result<Vec<Rental>, ApiError> {
    client.get(&Rental::collection_action_path("vencidas")).await
}

/// Return the parts to stock and close the rental
pub async fn finalize(client: &ApiClient, rental: &Rental, request: &FinalizeRentalRequest) -> Result<Rental, ApiError> {
    rental.ensure_can_finalize().map_err(FieldErrors::general)?;
    let finished: Rental = client
        .post(&Rental::item_action_path(rental.id, "finalizar"), request)
        .await?;
    log::info!("Rental {} finalized", finished.number);
    Ok(finished)
}

pub async fn financial_report(client: &ApiClient, period: PeriodQuery) -> Result<FinancialReport, ApiError> {
    client
        .get_with(&Rental::collection_action_path("relatorio_financeiro"), &period)
        .await
}
