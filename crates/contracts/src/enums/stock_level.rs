use super::BadgeColor;

/// Порог "мало на складе", совпадает с фильтром сервера для estoque_baixo
pub const LOW_STOCK_THRESHOLD: u32 = 5;

/// Уровень остатка по доступному количеству
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StockLevel {
    Out,
    Low,
    Normal,
}

impl StockLevel {
    pub fn from_available(available: u32) -> Self {
        match available {
            0 => StockLevel::Out,
            n if n <= LOW_STOCK_THRESHOLD => StockLevel::Low,
            _ => StockLevel::Normal,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StockLevel::Out => "Sem estoque",
            StockLevel::Low => "Estoque baixo",
            StockLevel::Normal => "Disponível",
        }
    }

    pub fn color(&self) -> BadgeColor {
        match self {
            StockLevel::Out => BadgeColor::Error,
            StockLevel::Low => BadgeColor::Warning,
            StockLevel::Normal => BadgeColor::Success,
        }
    }
}
