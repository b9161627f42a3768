use super::loader::OverviewSource;
use crate::domain::{a001_part_type, a002_part, a003_client, a004_rental};
use crate::shared::http::{ApiClient, ApiError};
use async_trait::async_trait;
use contracts::dashboards::d100_overview::{FinancialReport, StockReport, TypeStatistics};
use contracts::domain::a002_part::aggregate::Part;
use contracts::domain::a003_client::aggregate::{Client, ClientQuery};
use contracts::domain::a004_rental::aggregate::Rental;
use contracts::domain::common::{ListResponse, PeriodQuery};

#[async_trait(?Send)]
impl OverviewSource for ApiClient {
    async fn stock_report(&self) -> Result<StockReport, ApiError> {
        a002_part::api::stock_report(self).await
    }

    async fn active_rentals(&self) -> Result<Vec<Rental>, ApiError> {
        a004_rental::api::active(self).await
    }

    async fn clients(&self) -> Result<ListResponse<Client>, ApiError> {
        a003_client::api::list(self, &ClientQuery::default()).await
    }

    async fn type_statistics(&self) -> Result<TypeStatistics, ApiError> {
        a001_part_type::api::type_statistics(self).await
    }

    async fn low_stock(&self) -> Result<Vec<Part>, ApiError> {
        a002_part::api::low_stock(self).await
    }

    async fn overdue_rentals(&self) -> Result<Vec<Rental>, ApiError> {
        a004_rental::api::overdue(self).await
    }

    async fn financial_report(&self, period: PeriodQuery) -> Result<FinancialReport, ApiError> {
        a004_rental::api::financial_report(self, period).await
    }
}
