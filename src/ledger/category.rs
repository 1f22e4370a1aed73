use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::WalletError;

/// A named bucket accumulating the amounts posted against it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    name: String,
    current_amount: f64,
    variant: CategoryVariant,
}

/// Closed set of category shapes. Only expense categories carry a budget.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum CategoryVariant {
    Income,
    Expense { budget: f64 },
}

/// Supported category types.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKind {
    Income,
    Expense,
}

impl CategoryKind {
    pub fn label(self) -> &'static str {
        match self {
            CategoryKind::Income => "income",
            CategoryKind::Expense => "expense",
        }
    }
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Category {
    pub fn income(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            current_amount: 0.0,
            variant: CategoryVariant::Income,
        }
    }

    /// Creates an expense category. A budget of `0` means no budget is set.
    pub fn expense(name: impl Into<String>, budget: f64) -> Self {
        Self {
            name: name.into(),
            current_amount: 0.0,
            variant: CategoryVariant::Expense { budget },
        }
    }

    /// Creates an empty category of the given kind, with no budget for expenses.
    pub fn of_kind(name: impl Into<String>, kind: CategoryKind) -> Self {
        match kind {
            CategoryKind::Income => Self::income(name),
            CategoryKind::Expense => Self::expense(name, 0.0),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn current_amount(&self) -> f64 {
        self.current_amount
    }

    pub fn variant(&self) -> CategoryVariant {
        self.variant
    }

    pub fn kind(&self) -> CategoryKind {
        match self.variant {
            CategoryVariant::Income => CategoryKind::Income,
            CategoryVariant::Expense { .. } => CategoryKind::Expense,
        }
    }

    pub fn is_income(&self) -> bool {
        self.kind() == CategoryKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind() == CategoryKind::Expense
    }

    /// Adds a posted amount. Sign is validated by whoever built the transaction.
    pub fn add_amount(&mut self, delta: f64) {
        self.current_amount += delta;
    }

    /// Returns the budget ceiling for expense categories, `None` for income.
    pub fn budget(&self) -> Option<f64> {
        match self.variant {
            CategoryVariant::Expense { budget } => Some(budget),
            CategoryVariant::Income => None,
        }
    }

    /// Budget ceiling when one is set (strictly positive).
    pub fn active_budget(&self) -> Option<f64> {
        self.budget().filter(|budget| *budget > 0.0)
    }

    /// Replaces the budget of an expense category without checking current spend.
    pub fn set_budget(&mut self, value: f64) -> Result<(), WalletError> {
        match &mut self.variant {
            CategoryVariant::Expense { budget } => {
                *budget = value;
                Ok(())
            }
            CategoryVariant::Income => Err(WalletError::InvalidCategoryType {
                name: self.name.clone(),
                expected: CategoryKind::Expense,
            }),
        }
    }

    /// `budget - current_amount` for expense categories; may be negative.
    pub fn remaining_budget(&self) -> Option<f64> {
        self.budget().map(|budget| budget - self.current_amount)
    }
}
