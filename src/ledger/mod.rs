//! Wallet ledger model: categories, transactions, wallets, users, and the store.

pub mod category;
pub mod report;
pub mod store;
pub mod transaction;
pub mod user;
pub mod wallet;

pub use category::{Category, CategoryKind, CategoryVariant};
pub use report::{
    BudgetPosition, ExpenseBreakdown, ExpenseLine, IncomeBreakdown, IncomeLine, TotalKind,
    TotalReport,
};
pub use store::UserStore;
pub use transaction::Transaction;
pub use user::User;
pub use wallet::Wallet;
