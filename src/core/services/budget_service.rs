//! Budget assignment policy for expense categories.

use crate::core::services::ServiceResult;
use crate::ledger::{Category, Wallet};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetOutcome {
    /// No category had that name; a new expense category now carries the budget.
    Created,
    Updated,
}

pub struct BudgetService;

impl BudgetService {
    /// Sets the budget of the named expense category, creating it when absent.
    /// Income categories cannot carry a budget.
    pub fn set_budget(wallet: &mut Wallet, name: &str, budget: f64) -> ServiceResult<BudgetOutcome> {
        if !wallet.contains_category(name) {
            wallet.add_category(Category::expense(name, budget));
            tracing::debug!(category = name, budget, "created expense category with budget");
            return Ok(BudgetOutcome::Created);
        }
        wallet.category_mut(name)?.set_budget(budget)?;
        tracing::debug!(category = name, budget, "updated budget");
        Ok(BudgetOutcome::Updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::services::ServiceError;
    use crate::errors::WalletError;
    use crate::ledger::{CategoryKind, Transaction};

    #[test]
    fn absent_name_creates_expense_category() {
        let mut wallet = Wallet::new();
        let outcome = BudgetService::set_budget(&mut wallet, "food", 40.0).unwrap();

        assert_eq!(outcome, BudgetOutcome::Created);
        let food = wallet.category("food").unwrap();
        assert!(food.is_expense());
        assert_eq!(food.budget(), Some(40.0));
        assert_eq!(food.current_amount(), 0.0);
    }

    #[test]
    fn existing_expense_budget_is_replaced() {
        let mut wallet = Wallet::new();
        wallet.add_category(Category::expense("food", 40.0));
        wallet
            .add_transaction(Transaction::expense("food", 60.0))
            .unwrap();

        let outcome = BudgetService::set_budget(&mut wallet, "food", 10.0).unwrap();
        assert_eq!(outcome, BudgetOutcome::Updated);
        assert_eq!(wallet.category("food").unwrap().remaining_budget(), Some(-50.0));
    }

    #[test]
    fn income_category_is_rejected() {
        let mut wallet = Wallet::new();
        wallet.add_category(Category::income("salary"));

        let err = BudgetService::set_budget(&mut wallet, "salary", 10.0).unwrap_err();
        assert_eq!(
            err,
            ServiceError::Wallet(WalletError::InvalidCategoryType {
                name: "salary".into(),
                expected: CategoryKind::Expense,
            })
        );
        assert_eq!(wallet.category("salary").unwrap().budget(), None);
    }
}
