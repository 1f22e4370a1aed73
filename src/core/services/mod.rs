pub mod budget_service;
pub mod notification_service;
pub mod transaction_service;

pub use budget_service::{BudgetOutcome, BudgetService};
pub use notification_service::{NotificationService, BUDGET_EXCEEDED_PREFIX, NEGATIVE_BALANCE};
pub use transaction_service::{PostOutcome, TransactionService};

use crate::errors::WalletError;
use crate::ledger::CategoryKind;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Wallet(#[from] WalletError),
    #[error("Transaction type ({transaction}) does not match category type ({category}).")]
    KindMismatch {
        transaction: CategoryKind,
        category: CategoryKind,
    },
}
