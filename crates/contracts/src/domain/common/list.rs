use serde::{de, Deserialize, Deserializer, Serialize};

/// Ответ списочного запроса: постраничный конверт или просто массив
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ListResponse<T> {
    Paginated {
        count: u64,
        #[serde(default)]
        next: Option<String>,
        #[serde(default)]
        previous: Option<String>,
        results: Vec<T>,
    },
    Plain(Vec<T>),
}

impl<T> ListResponse<T> {
    pub fn items(&self) -> &[T] {
        match self {
            ListResponse::Paginated { results, .. } => results,
            ListResponse::Plain(items) => items,
        }
    }

    pub fn into_items(self) -> Vec<T> {
        match self {
            ListResponse::Paginated { results, .. } => results,
            ListResponse::Plain(items) => items,
        }
    }

    /// Общее число записей на сервере (для массива: его длина)
    pub fn total(&self) -> u64 {
        match self {
            ListResponse::Paginated { count, .. } => *count,
            ListResponse::Plain(items) => items.len() as u64,
        }
    }

    pub fn has_more(&self) -> bool {
        matches!(self, ListResponse::Paginated { next: Some(_), .. })
    }
}

impl<T> Default for ListResponse<T> {
    fn default() -> Self {
        ListResponse::Plain(Vec::new())
    }
}

/// Поисковая строка для параметра `search`: пустая после trim не отправляется
pub fn normalize_search(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Период отчёта в днях (`?periodo=30`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PeriodQuery {
    #[serde(rename = "periodo")]
    pub days: u32,
}

impl PeriodQuery {
    pub const DEFAULT_DAYS: u32 = 30;

    pub fn days(days: u32) -> Self {
        Self { days }
    }
}

impl Default for PeriodQuery {
    fn default() -> Self {
        Self::days(Self::DEFAULT_DAYS)
    }
}

/// Сервер возвращает период отчёта так, как получил его в query: строкой
pub fn deserialize_period<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u32),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(n),
        Raw::Text(s) => s.trim().parse().map_err(de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paginated_and_plain() {
        let paged: ListResponse<u32> =
            serde_json::from_str(r#"{"count": 42, "next": "http://x/?page=2", "previous": null, "results": [1, 2]}"#)
                .unwrap();
        assert_eq!(paged.total(), 42);
        assert_eq!(paged.items(), &[1, 2]);
        assert!(paged.has_more());

        let plain: ListResponse<u32> = serde_json::from_str("[3, 4, 5]").unwrap();
        assert_eq!(plain.total(), 3);
        assert!(!plain.has_more());
        assert_eq!(plain.into_items(), vec![3, 4, 5]);
    }

    #[test]
    fn test_normalize_search() {
        assert_eq!(normalize_search("  andaime "), Some("andaime".to_string()));
        assert_eq!(normalize_search("   "), None);
        assert_eq!(normalize_search(""), None);
    }

    #[test]
    fn test_period_from_string_or_number() {
        #[derive(Deserialize)]
        struct Report {
            #[serde(deserialize_with = "deserialize_period")]
            periodo_dias: u32,
        }
        let a: Report = serde_json::from_str(r#"{"periodo_dias": "30"}"#).unwrap();
        let b: Report = serde_json::from_str(r#"{"periodo_dias": 7}"#).unwrap();
        assert_eq!((a.periodo_dias, b.periodo_dias), (30, 7));
    }
}
