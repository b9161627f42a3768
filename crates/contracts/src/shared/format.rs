//! Форматирование значений для отображения (pt-BR)

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};

/// Форматирует число с разделителями тысяч (точками)
///
/// # Примеры
/// ```
/// use contracts::shared::format::format_number;
/// assert_eq!(format_number(1234567), "1.234.567");
/// assert_eq!(format_number(42), "42");
/// ```
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('.');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// Денежная сумма в реалах: `R$ 1.234,56`
pub fn format_currency(value: f64) -> String {
    let cents = (value * 100.0).round();
    let sign = if cents < 0.0 { "-" } else { "" };
    let cents = cents.abs() as u64;
    format!("{}R$ {},{:02}", sign, format_number(cents / 100), cents % 100)
}

/// Отсутствующее значение показывается как ноль
pub fn format_currency_opt(value: Option<f64>) -> String {
    format_currency(value.unwrap_or(0.0))
}

/// Телефон: 10 цифр `(dd) dddd-dddd`, 11 цифр `(dd) d dddd-dddd`, иначе без изменений
pub fn format_phone(value: &str) -> String {
    let d: String = value.chars().filter(|c| c.is_ascii_digit()).collect();
    match d.len() {
        10 => format!("({}) {}-{}", &d[..2], &d[2..6], &d[6..]),
        11 => format!("({}) {} {}-{}", &d[..2], &d[2..3], &d[3..7], &d[7..]),
        _ => value.to_string(),
    }
}

/// CEP: `ddddd-ddd` для восьми цифр, иначе только цифры
pub fn format_cep(value: &str) -> String {
    let d: String = value.chars().filter(|c| c.is_ascii_digit()).collect();
    if d.len() >= 8 {
        format!("{}-{}{}", &d[..5], &d[5..8], &d[8..])
    } else {
        d
    }
}

/// ISO дата или дата-время -> `DD/MM/YYYY`
/// Пустая строка остаётся пустой, нераспознанная возвращается как есть
pub fn format_date(value: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        return String::new();
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return format_naive_date(date);
    }
    match parse_datetime(value) {
        Some(dt) => dt.format("%d/%m/%Y").to_string(),
        None => value.to_string(),
    }
}

/// ISO дата-время -> `DD/MM/YYYY HH:mm`
pub fn format_datetime(value: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        return String::new();
    }
    match parse_datetime(value) {
        Some(dt) => dt.format("%d/%m/%Y %H:%M").to_string(),
        None => value.to_string(),
    }
}

pub fn format_naive_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::<FixedOffset>::parse_from_rfc3339(value) {
        return Some(dt.naive_local());
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1.000");
        assert_eq!(format_number(1234567890), "1.234.567.890");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "R$ 0,00");
        assert_eq!(format_currency(150.0), "R$ 150,00");
        assert_eq!(format_currency(1234.5), "R$ 1.234,50");
        assert_eq!(format_currency(0.1 + 0.2), "R$ 0,30");
        assert_eq!(format_currency(-10.0), "-R$ 10,00");
        assert_eq!(format_currency_opt(None), "R$ 0,00");
    }

    #[test]
    fn test_format_phone() {
        assert_eq!(format_phone("1133334444"), "(11) 3333-4444");
        assert_eq!(format_phone("11987654321"), "(11) 9 8765-4321");
        assert_eq!(format_phone("12345"), "12345");
    }

    #[test]
    fn test_format_cep() {
        assert_eq!(format_cep("01310100"), "01310-100");
        assert_eq!(format_cep("01310-100"), "01310-100");
        assert_eq!(format_cep("0131"), "0131");
    }

    #[test]
    fn test_format_dates() {
        assert_eq!(format_date("2024-03-15"), "15/03/2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15/03/2024");
        assert_eq!(format_datetime("2024-03-15T14:02:26-03:00"), "15/03/2024 14:02");
        assert_eq!(format_datetime("2024-03-15T14:02:26.5"), "15/03/2024 14:02");
        assert_eq!(format_date(""), "");
        assert_eq!(format_date("invalid"), "invalid");
    }
}
