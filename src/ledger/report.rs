//! Structured wallet reports. Values are computed by [`super::Wallet`] and
//! rendered to text only through their `Display` implementations.

use std::fmt;

/// Formats a ledger amount the way every report prints it.
pub fn format_amount(amount: f64) -> String {
    format!("{amount:.2}")
}

/// Which aggregate a [`TotalReport`] describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TotalKind {
    Balance,
    Income,
    Expenses,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TotalReport {
    pub kind: TotalKind,
    pub amount: f64,
}

impl fmt::Display for TotalReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self.kind {
            TotalKind::Balance => "Total Balance",
            TotalKind::Income => "Total Income",
            TotalKind::Expenses => "Total Expenses",
        };
        write!(f, "{label}: {}", format_amount(self.amount))
    }
}

/// Amount collected by a single income category.
#[derive(Debug, Clone, PartialEq)]
pub struct IncomeLine {
    pub name: String,
    pub amount: f64,
}

impl fmt::Display for IncomeLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Income in category {}: {}",
            self.name,
            format_amount(self.amount)
        )
    }
}

/// Spend and budget position of a single expense category.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseLine {
    pub name: String,
    pub spent: f64,
    /// Present only when a budget greater than zero is set.
    pub budget: Option<BudgetPosition>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetPosition {
    pub budget: f64,
    pub remaining: f64,
}

impl ExpenseLine {
    pub fn is_over_budget(&self) -> bool {
        self.budget
            .map(|position| position.remaining < 0.0)
            .unwrap_or(false)
    }

    fn write_budget(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(position) = self.budget {
            write!(
                f,
                ", Budget: {}, Remaining: {}",
                format_amount(position.budget),
                format_amount(position.remaining)
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for ExpenseLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Category: {}, Spent: {}",
            self.name,
            format_amount(self.spent)
        )?;
        self.write_budget(f)
    }
}

/// Every income category of a wallet, one line each.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IncomeBreakdown {
    pub lines: Vec<IncomeLine>,
}

impl fmt::Display for IncomeBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Income by categories:")?;
        for line in &self.lines {
            writeln!(f, "{}: {}", line.name, format_amount(line.amount))?;
        }
        Ok(())
    }
}

/// Every expense category of a wallet, one line each.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExpenseBreakdown {
    pub lines: Vec<ExpenseLine>,
}

impl fmt::Display for ExpenseBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Expenses by categories:")?;
        for line in &self.lines {
            write!(f, "{}: Spent {}", line.name, format_amount(line.spent))?;
            line.write_budget(f)?;
            writeln!(f)?;
        }
        Ok(())
    }
}
