pub mod transaction_table;

pub use transaction_table::TransactionTable;
