use std::fmt::Write as _;

/// Numbered commands offered at the main prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    Register,
    LogIn,
    AddExpense,
    AddIncome,
    SetBudget,
    TotalIncome,
    TotalExpenses,
    IncomeByCategory,
    ExpenseByCategory,
    FullExpenseInfo,
    FullIncomeInfo,
    IncomesForCategories,
    ExpensesForCategories,
    RedirectToFile,
    RedirectToConsole,
    Exit,
}

impl MenuCommand {
    pub const ALL: [MenuCommand; 16] = [
        MenuCommand::Register,
        MenuCommand::LogIn,
        MenuCommand::AddExpense,
        MenuCommand::AddIncome,
        MenuCommand::SetBudget,
        MenuCommand::TotalIncome,
        MenuCommand::TotalExpenses,
        MenuCommand::IncomeByCategory,
        MenuCommand::ExpenseByCategory,
        MenuCommand::FullExpenseInfo,
        MenuCommand::FullIncomeInfo,
        MenuCommand::IncomesForCategories,
        MenuCommand::ExpensesForCategories,
        MenuCommand::RedirectToFile,
        MenuCommand::RedirectToConsole,
        MenuCommand::Exit,
    ];

    /// Resolves a typed menu choice. Only the exact number is accepted,
    /// surrounding whitespace aside.
    pub fn parse(input: &str) -> Option<Self> {
        let choice = input.trim();
        Self::ALL
            .into_iter()
            .find(|command| command.number().to_string() == choice)
    }

    pub fn number(self) -> usize {
        Self::ALL
            .iter()
            .position(|command| *command == self)
            .map(|index| index + 1)
            .unwrap_or_default()
    }

    pub fn description(self) -> &'static str {
        match self {
            MenuCommand::Register => "Register a new user",
            MenuCommand::LogIn => "Log in",
            MenuCommand::AddExpense => "Add a new expense",
            MenuCommand::AddIncome => "Add a new income",
            MenuCommand::SetBudget => "Set budget for a category",
            MenuCommand::TotalIncome => "Get total income",
            MenuCommand::TotalExpenses => "Get total expenses",
            MenuCommand::IncomeByCategory => "Get income by category",
            MenuCommand::ExpenseByCategory => "Get expense by category",
            MenuCommand::FullExpenseInfo => "Get full expense info",
            MenuCommand::FullIncomeInfo => "Get full income info",
            MenuCommand::IncomesForCategories => "Get incomes by categories",
            MenuCommand::ExpensesForCategories => "Get expenses by categories",
            MenuCommand::RedirectToFile => "Redirect wallet info output to a file",
            MenuCommand::RedirectToConsole => "Redirect wallet info output back to console",
            MenuCommand::Exit => "Exit",
        }
    }

    /// Commands that only make sense with a logged-in user.
    pub fn requires_login(self) -> bool {
        !matches!(
            self,
            MenuCommand::Register
                | MenuCommand::LogIn
                | MenuCommand::RedirectToFile
                | MenuCommand::RedirectToConsole
                | MenuCommand::Exit
        )
    }
}

/// Renders the full numbered menu.
pub fn render() -> String {
    let mut menu = String::from("\nPlease choose a command:\n");
    for command in MenuCommand::ALL {
        let _ = writeln!(menu, "{}. {}", command.number(), command.description());
    }
    menu
}
