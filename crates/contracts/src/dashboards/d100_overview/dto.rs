use crate::domain::a001_part_type::aggregate::PartType;
use crate::domain::a002_part::aggregate::Part;
use crate::domain::a003_client::aggregate::Client;
use crate::domain::a004_rental::aggregate::Rental;
use crate::domain::common::list::deserialize_period;
use crate::domain::common::ListResponse;
use crate::enums::RentalStatus;
use crate::shared::money;
use serde::{Deserialize, Serialize};

/// How many rows each alert card lists before "and N more"
pub const PREVIEW_LIMIT: usize = 5;

/// Period of the financial card, in days
pub const FINANCIAL_PERIOD_DAYS: u32 = 30;

/// Stock totals (`pecas/relatorio_estoque`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockReport {
    #[serde(rename = "total_pecas")]
    pub part_count: u64,
    #[serde(rename = "quantidade_total")]
    pub total_quantity: u64,
    #[serde(rename = "quantidade_disponivel")]
    pub available_quantity: u64,
    #[serde(rename = "quantidade_locada")]
    pub rented_quantity: u64,
    /// Parts with nothing available
    #[serde(rename = "pecas_sem_estoque")]
    pub out_of_stock: u64,
}

impl StockReport {
    /// Share of the stock currently rented, 0..=100
    pub fn utilization_percent(&self) -> f64 {
        if self.total_quantity == 0 {
            return 0.0;
        }
        self.rented_quantity as f64 * 100.0 / self.total_quantity as f64
    }
}

/// Catalog statistics (`tipos-peca/estatisticas`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TypeStatistics {
    #[serde(rename = "total_tipos")]
    pub type_count: u64,
    #[serde(rename = "valor_medio", with = "money")]
    pub average_price: f64,
    /// Most rented types, at most five
    #[serde(rename = "tipos_populares", default)]
    pub popular: Vec<PartType>,
}

/// Revenue for the period grouped by rental status
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusBreakdown {
    pub status: RentalStatus,
    pub count: u64,
    /// Sum is null when every rental in the group has no value
    #[serde(rename = "valor", with = "money::option", default)]
    pub amount: Option<f64>,
}

/// Financial report (`locacoes/relatorio_financeiro?periodo=N`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FinancialReport {
    #[serde(rename = "periodo_dias", deserialize_with = "deserialize_period")]
    pub period_days: u32,
    #[serde(rename = "receita_total", with = "money")]
    pub total_revenue: f64,
    #[serde(rename = "total_locacoes")]
    pub rental_count: u64,
    #[serde(rename = "por_status", default)]
    pub by_status: Vec<StatusBreakdown>,
}

/// First rows of a list plus how many were left out
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preview<'a, T> {
    pub shown: &'a [T],
    pub remaining: usize,
}

pub fn preview<T>(items: &[T], limit: usize) -> Preview<'_, T> {
    let shown = &items[..items.len().min(limit)];
    Preview {
        shown,
        remaining: items.len() - shown.len(),
    }
}

/// Everything the overview page shows, loaded in one go
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OverviewData {
    pub stock: StockReport,
    pub active_rentals: Vec<Rental>,
    pub clients: ListResponse<Client>,
    pub type_stats: TypeStatistics,
    pub low_stock: Vec<Part>,
    pub overdue: Vec<Rental>,
    pub financial: FinancialReport,
}

impl OverviewData {
    pub fn client_count(&self) -> u64 {
        self.clients.total()
    }

    pub fn low_stock_preview(&self) -> Preview<'_, Part> {
        preview(&self.low_stock, PREVIEW_LIMIT)
    }

    pub fn overdue_preview(&self) -> Preview<'_, Rental> {
        preview(&self.overdue, PREVIEW_LIMIT)
    }

    pub fn popular_types_preview(&self) -> Preview<'_, PartType> {
        preview(&self.type_stats.popular, PREVIEW_LIMIT)
    }

    /// Low stock or overdue rentals need attention
    pub fn has_alerts(&self) -> bool {
        !self.low_stock.is_empty() || !self.overdue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview() {
        let items: Vec<u32> = (1..=8).collect();
        let p = preview(&items, PREVIEW_LIMIT);
        assert_eq!(p.shown, &[1, 2, 3, 4, 5]);
        assert_eq!(p.remaining, 3);

        let few = [1, 2];
        let p = preview(&few, PREVIEW_LIMIT);
        assert_eq!(p.shown.len(), 2);
        assert_eq!(p.remaining, 0);
    }

    #[test]
    fn test_financial_report_payload() {
        let report: FinancialReport = serde_json::from_str(
            r#"{
                "periodo_dias": "30",
                "receita_total": "1250.50",
                "total_locacoes": 4,
                "por_status": [
                    {"status": "A", "count": 3, "valor": "1000.00"},
                    {"status": "C", "count": 1, "valor": null}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(report.period_days, FINANCIAL_PERIOD_DAYS);
        assert_eq!(report.total_revenue, 1250.5);
        assert_eq!(report.by_status[0].status, RentalStatus::Active);
        assert_eq!(report.by_status[1].amount, None);
    }

    #[test]
    fn test_type_statistics_with_numeric_average() {
        let stats: TypeStatistics =
            serde_json::from_str(r#"{"total_tipos": 0, "valor_medio": 0, "tipos_populares": []}"#).unwrap();
        assert_eq!(stats.average_price, 0.0);
    }

    #[test]
    fn test_overview_helpers() {
        let data = OverviewData {
            stock: StockReport {
                total_quantity: 200,
                rented_quantity: 50,
                ..Default::default()
            },
            clients: ListResponse::Paginated {
                count: 31,
                next: None,
                previous: None,
                results: Vec::new(),
            },
            ..Default::default()
        };
        assert_eq!(data.client_count(), 31);
        assert_eq!(data.stock.utilization_percent(), 25.0);
        assert!(!data.has_alerts());
        assert_eq!(data.overdue_preview().remaining, 0);
    }
}
