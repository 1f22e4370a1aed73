use serde::{Deserialize, Serialize};

use super::category::CategoryKind;

/// An immutable posting request bound to its category by name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    category_name: String,
    amount: f64,
    is_expense: bool,
}

impl Transaction {
    /// Builds a transaction. `amount` must already be validated as non-negative.
    pub fn new(category_name: impl Into<String>, amount: f64, is_expense: bool) -> Self {
        Self {
            category_name: category_name.into(),
            amount,
            is_expense,
        }
    }

    pub fn expense(category_name: impl Into<String>, amount: f64) -> Self {
        Self::new(category_name, amount, true)
    }

    pub fn income(category_name: impl Into<String>, amount: f64) -> Self {
        Self::new(category_name, amount, false)
    }

    pub fn category_name(&self) -> &str {
        &self.category_name
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn is_expense(&self) -> bool {
        self.is_expense
    }

    /// Kind of category this transaction is meant for.
    pub fn kind(&self) -> CategoryKind {
        if self.is_expense {
            CategoryKind::Expense
        } else {
            CategoryKind::Income
        }
    }

    /// Effect on the wallet balance: negative for expenses.
    pub fn signed_amount(&self) -> f64 {
        if self.is_expense {
            -self.amount
        } else {
            self.amount
        }
    }
}
