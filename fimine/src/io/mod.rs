pub mod loader;
pub mod report;

pub use loader::{load_transactions, parse_transactions, transactions_from_matrix};
pub use report::{format_itemset, Report};
