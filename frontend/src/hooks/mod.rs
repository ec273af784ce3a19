pub mod use_categories;
pub mod use_locale;
pub mod use_pagination;
pub mod use_toast;
pub mod use_transactions;
