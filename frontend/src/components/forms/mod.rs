pub mod category_form;
pub mod transaction_form;

pub use category_form::CategoryForm;
pub use transaction_form::TransactionForm;
