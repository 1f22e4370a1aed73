//! Posting policy applied before a transaction reaches the wallet.

use crate::core::services::{ServiceError, ServiceResult};
use crate::ledger::{Category, Transaction, Wallet};

/// What happened to the target category while posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostOutcome {
    /// The category did not exist and was created to match the transaction.
    pub created: bool,
}

/// Resolves the target category and posts transactions to a wallet.
pub struct TransactionService;

impl TransactionService {
    /// Posts `transaction`, creating a category of the matching kind when the
    /// name is unknown. A category of the other kind rejects the transaction
    /// without touching the wallet.
    pub fn post(wallet: &mut Wallet, transaction: Transaction) -> ServiceResult<PostOutcome> {
        let created = match wallet.category(transaction.category_name()) {
            Ok(category) if category.kind() != transaction.kind() => {
                return Err(ServiceError::KindMismatch {
                    transaction: transaction.kind(),
                    category: category.kind(),
                });
            }
            Ok(_) => false,
            Err(_) => {
                wallet.add_category(Category::of_kind(
                    transaction.category_name(),
                    transaction.kind(),
                ));
                true
            }
        };

        wallet.add_transaction(transaction)?;
        Ok(PostOutcome { created })
    }
}
