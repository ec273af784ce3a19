pub mod api;
pub mod categories;
pub mod date_utils;
pub mod i18n;
pub mod session;
pub mod transactions;
