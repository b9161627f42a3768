//! Общие типы фронтенда и API сервера локации:
//! валидация CPF/CNPJ, форматирование, статусы, DTO ресурсов и дашборды.

pub mod dashboards;
pub mod domain;
pub mod enums;
pub mod shared;
