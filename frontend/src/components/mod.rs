pub mod alert;
pub mod amount_input;
pub mod category_badge;
pub mod forms;
pub mod header;
pub mod modal;
pub mod pagination_nav;
pub mod toast;
pub mod transactions;
