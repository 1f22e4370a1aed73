//! Threshold checks that feed a user's pending notification slot.

use crate::ledger::User;

pub const BUDGET_EXCEEDED_PREFIX: &str = "Expense exceeds budget for category: ";
pub const NEGATIVE_BALANCE: &str = "Warning: Your total balance is negative.";

pub struct NotificationService;

impl NotificationService {
    /// Flags an expense category whose spend has passed its budget.
    ///
    /// Returns `true` when a notification was set. Unknown and income
    /// categories never notify.
    pub fn check_budget(user: &mut User, category_name: &str) -> bool {
        let exceeded = user
            .wallet()
            .category(category_name)
            .ok()
            .and_then(|category| category.remaining_budget())
            .map(|remaining| remaining < 0.0)
            .unwrap_or(false);
        if exceeded {
            user.add_notification(format!("{BUDGET_EXCEEDED_PREFIX}{category_name}"));
        }
        exceeded
    }

    /// Flags a wallet whose total balance dropped below zero.
    pub fn check_balance(user: &mut User) -> bool {
        let negative = user.wallet().balance() < 0.0;
        if negative {
            user.add_notification(NEGATIVE_BALANCE);
        }
        negative
    }

    /// Runs one notification cycle: drain, check the balance, drain again.
    /// Returns the drained notifications in order.
    pub fn cycle(user: &mut User) -> Vec<String> {
        let mut drained = Vec::with_capacity(2);
        drained.extend(user.take_notification());
        Self::check_balance(user);
        drained.extend(user.take_notification());
        drained
    }
}
