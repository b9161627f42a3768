//! Загрузка данных главной панели
//!
//! Семь независимых запросов выполняются одновременно; первая ошибка
//! прерывает загрузку, частичные данные не показываются.

use crate::shared::http::ApiError;
use async_trait::async_trait;
use contracts::dashboards::d100_overview::{
    FinancialReport, OverviewData, StockReport, TypeStatistics, FINANCIAL_PERIOD_DAYS,
};
use contracts::domain::a002_part::aggregate::Part;
use contracts::domain::a003_client::aggregate::Client;
use contracts::domain::a004_rental::aggregate::Rental;
use contracts::domain::common::{ListResponse, PeriodQuery};

/// Источник данных панели (API или подставной в тестах)
#[async_trait(?Send)]
pub trait OverviewSource {
    async fn stock_report(&self) -> Result<StockReport, ApiError>;

    async fn active_rentals(&self) -> Result<Vec<Rental>, ApiError>;

    async fn clients(&self) -> Result<ListResponse<Client>, ApiError>;

    async fn type_statistics(&self) -> Result<TypeStatistics, ApiError>;

    async fn low_stock(&self) -> Result<Vec<Part>, ApiError>;

    async fn overdue_rentals(&self) -> Result<Vec<Rental>, ApiError>;

    async fn financial_report(&self, period: PeriodQuery) -> Result<FinancialReport, ApiError>;
}

/// Загрузить все данные панели одним набором запросов
pub async fn load_overview<S: OverviewSource + ?Sized>(source: &S) -> Result<OverviewData, ApiError> {
    log::debug!("d100: loading overview");

    let (stock, active_rentals, clients, type_stats, low_stock, overdue, financial) = futures::try_join!(
        source.stock_report(),
        source.active_rentals(),
        source.clients(),
        source.type_statistics(),
        source.low_stock(),
        source.overdue_rentals(),
        source.financial_report(PeriodQuery::days(FINANCIAL_PERIOD_DAYS)),
    )
    .map_err(|e| {
        log::error!("d100: overview load failed: {}", e);
        e
    })?;

    Ok(OverviewData {
        stock,
        active_rentals,
        clients,
        type_stats,
        low_stock,
        overdue,
        financial,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::debounce::testing::ms;
    use std::cell::Cell;
    use tokio::time::{sleep, Instant};

    #[derive(Default)]
    struct FakeSource {
        delay_ms: u64,
        /// (запрос, через сколько мс, ошибка)
        failing: Option<(&'static str, u64, ApiError)>,
        requested_period: Cell<Option<u32>>,
    }

    impl FakeSource {
        async fn respond<T>(&self, name: &'static str, value: T) -> Result<T, ApiError> {
            if let Some((failing, after_ms, error)) = &self.failing {
                if *failing == name {
                    sleep(ms(*after_ms)).await;
                    return Err(error.clone());
                }
            }
            sleep(ms(self.delay_ms)).await;
            Ok(value)
        }
    }

    #[async_trait(?Send)]
    impl OverviewSource for FakeSource {
        async fn stock_report(&self) -> Result<StockReport, ApiError> {
            let report = StockReport {
                part_count: 12,
                total_quantity: 400,
                available_quantity: 300,
                rented_quantity: 100,
                out_of_stock: 1,
            };
            self.respond("stock", report).await
        }

        async fn active_rentals(&self) -> Result<Vec<Rental>, ApiError> {
            self.respond("active", Vec::new()).await
        }

        async fn clients(&self) -> Result<ListResponse<Client>, ApiError> {
            let page = ListResponse::Paginated {
                count: 37,
                next: Some("/clientes/?page=2".into()),
                previous: None,
                results: Vec::new(),
            };
            self.respond("clients", page).await
        }

        async fn type_statistics(&self) -> Result<TypeStatistics, ApiError> {
            self.respond("types", TypeStatistics::default()).await
        }

        async fn low_stock(&self) -> Result<Vec<Part>, ApiError> {
            self.respond("low_stock", Vec::new()).await
        }

        async fn overdue_rentals(&self) -> Result<Vec<Rental>, ApiError> {
            self.respond("overdue", Vec::new()).await
        }

        async fn financial_report(&self, period: PeriodQuery) -> Result<FinancialReport, ApiError> {
            self.requested_period.set(Some(period.days));
            let report = FinancialReport {
                period_days: period.days,
                total_revenue: 1234.56,
                rental_count: 4,
                by_status: Vec::new(),
            };
            self.respond("financial", report).await
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_loads_all_sections_concurrently() {
        let source = FakeSource { delay_ms: 200, ..Default::default() };
        let start = Instant::now();

        let data = load_overview(&source).await.unwrap();

        assert_eq!(start.elapsed().as_millis(), 200);
        assert_eq!(data.stock.part_count, 12);
        assert_eq!(data.client_count(), 37);
        assert_eq!(data.financial.total_revenue, 1234.56);
        assert_eq!(source.requested_period.get(), Some(30));
        assert!(!data.has_alerts());
    }

    #[tokio::test(start_paused = true)]
    async fn test_first_error_aborts_load() {
        let failure = ApiError::Http { status: 500, message: "Erro interno do servidor".into() };
        let source = FakeSource {
            delay_ms: 200,
            failing: Some(("clients", 50, failure.clone())),
            ..Default::default()
        };
        let start = Instant::now();

        let result = load_overview(&source).await;

        assert_eq!(result, Err(failure));
        assert_eq!(start.elapsed().as_millis(), 50);
    }

    #[tokio::test(start_paused = true)]
    async fn test_session_expiry_surfaces() {
        let source = FakeSource {
            delay_ms: 10,
            failing: Some(("financial", 5, ApiError::SessionExpired)),
            ..Default::default()
        };
        let err = load_overview(&source).await.unwrap_err();
        assert!(err.is_session_expired());
    }
}
