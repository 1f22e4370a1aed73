use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{
    category::{Category, CategoryKind},
    report::{
        BudgetPosition, ExpenseBreakdown, ExpenseLine, IncomeBreakdown, IncomeLine, TotalKind,
        TotalReport,
    },
    transaction::Transaction,
};
use crate::errors::WalletError;

/// Categories, posted transactions, and the running balance of one user.
///
/// Categories share a single namespace across both kinds and are iterated in
/// name order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Wallet {
    #[serde(default)]
    transactions: Vec<Transaction>,
    #[serde(default)]
    categories: BTreeMap<String, Category>,
    #[serde(default)]
    total_balance: f64,
}

impl Wallet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a category, replacing any existing one with the same name.
    pub fn add_category(&mut self, category: Category) {
        self.categories
            .insert(category.name().to_string(), category);
    }

    pub fn contains_category(&self, name: &str) -> bool {
        self.categories.contains_key(name)
    }

    pub fn category(&self, name: &str) -> Result<&Category, WalletError> {
        self.categories
            .get(name)
            .ok_or_else(|| WalletError::CategoryNotFound(name.to_string()))
    }

    pub fn category_mut(&mut self, name: &str) -> Result<&mut Category, WalletError> {
        self.categories
            .get_mut(name)
            .ok_or_else(|| WalletError::CategoryNotFound(name.to_string()))
    }

    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.categories.values()
    }

    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    /// Posts a transaction against the category carrying its name.
    ///
    /// The category's kind is not compared with the transaction's kind; the
    /// amount lands on whichever category is found. Fails before any mutation
    /// when the category is missing.
    pub fn add_transaction(&mut self, transaction: Transaction) -> Result<(), WalletError> {
        let category = self
            .categories
            .get_mut(transaction.category_name())
            .ok_or_else(|| WalletError::CategoryNotFound(transaction.category_name().to_string()))?;

        category.add_amount(transaction.amount());
        self.total_balance += transaction.signed_amount();
        tracing::debug!(
            category = transaction.category_name(),
            amount = transaction.amount(),
            expense = transaction.is_expense(),
            "posted transaction"
        );
        self.transactions.push(transaction);
        Ok(())
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    pub fn balance(&self) -> f64 {
        self.total_balance
    }

    pub fn total_balance(&self) -> TotalReport {
        TotalReport {
            kind: TotalKind::Balance,
            amount: self.total_balance,
        }
    }

    pub fn total_income(&self) -> TotalReport {
        TotalReport {
            kind: TotalKind::Income,
            amount: self.sum_of_kind(CategoryKind::Income),
        }
    }

    pub fn total_expenses(&self) -> TotalReport {
        TotalReport {
            kind: TotalKind::Expenses,
            amount: self.sum_of_kind(CategoryKind::Expense),
        }
    }

    pub fn income_by_category(&self, name: &str) -> Result<IncomeLine, WalletError> {
        let category = self.category_of_kind(name, CategoryKind::Income)?;
        Ok(income_line(category))
    }

    pub fn expense_by_category(&self, name: &str) -> Result<ExpenseLine, WalletError> {
        let category = self.category_of_kind(name, CategoryKind::Expense)?;
        Ok(expense_line(category))
    }

    pub fn income_by_categories(&self) -> IncomeBreakdown {
        IncomeBreakdown {
            lines: self
                .of_kind(CategoryKind::Income)
                .map(income_line)
                .collect(),
        }
    }

    pub fn expenses_by_categories(&self) -> ExpenseBreakdown {
        ExpenseBreakdown {
            lines: self
                .of_kind(CategoryKind::Expense)
                .map(expense_line)
                .collect(),
        }
    }

    fn category_of_kind(&self, name: &str, kind: CategoryKind) -> Result<&Category, WalletError> {
        let category = self.category(name)?;
        if category.kind() != kind {
            return Err(WalletError::InvalidCategoryType {
                name: name.to_string(),
                expected: kind,
            });
        }
        Ok(category)
    }

    fn of_kind(&self, kind: CategoryKind) -> impl Iterator<Item = &Category> {
        self.categories
            .values()
            .filter(move |category| category.kind() == kind)
    }

    fn sum_of_kind(&self, kind: CategoryKind) -> f64 {
        self.of_kind(kind).map(Category::current_amount).sum()
    }
}

fn income_line(category: &Category) -> IncomeLine {
    IncomeLine {
        name: category.name().to_string(),
        amount: category.current_amount(),
    }
}

fn expense_line(category: &Category) -> ExpenseLine {
    let budget = category.active_budget().map(|budget| BudgetPosition {
        budget,
        remaining: budget - category.current_amount(),
    });
    ExpenseLine {
        name: category.name().to_string(),
        spent: category.current_amount(),
        budget,
    }
}
