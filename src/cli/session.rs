//! Command handlers behind the numbered menu.
//!
//! The session owns the loaded [`UserStore`], the logged-in username, and the
//! active [`ReportSink`]. Reports and notifications go through the sink;
//! prompts and status messages always go to the console.

use std::{fmt, io::Write};

use strsim::levenshtein;

use crate::{
    cli::{
        io::{parse_amount, LineSource},
        menu::{self, MenuCommand},
        output::{style, MessageKind, ReportSink},
    },
    core::services::{
        BudgetOutcome, BudgetService, NotificationService, ServiceError, TransactionService,
    },
    errors::{CliError, WalletError},
    ledger::{CategoryKind, Transaction, User, UserStore, Wallet},
    storage::StorageBackend,
    utils::build_info,
};

const LOGIN_REQUIRED: &str = "You need to log in first.";
const INCOME_BUDGET_REJECTED: &str = "Error: You can't set budget with income category";
const COMMAND_PROMPT: &str = "> ";
const MAX_SUGGESTION_DISTANCE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoopControl {
    Continue,
    Exit,
}

#[derive(Debug, thiserror::Error)]
enum CommandError {
    #[error("input closed")]
    EndOfInput,
    #[error(transparent)]
    Cli(#[from] CliError),
}

impl From<std::io::Error> for CommandError {
    fn from(err: std::io::Error) -> Self {
        CommandError::Cli(err.into())
    }
}

type CommandResult<T = ()> = Result<T, CommandError>;

pub struct Session<W: Write> {
    store: UserStore,
    current_user: Option<String>,
    storage: Box<dyn StorageBackend>,
    input: Box<dyn LineSource>,
    console: W,
    sink: ReportSink,
}

impl<W: Write> Session<W> {
    /// Builds a session and loads the store. A failed load is reported and
    /// the session starts empty.
    pub fn new(
        storage: Box<dyn StorageBackend>,
        input: Box<dyn LineSource>,
        console: W,
    ) -> Result<Self, CliError> {
        let mut session = Self {
            store: UserStore::new(),
            current_user: None,
            storage,
            input,
            console,
            sink: ReportSink::Console,
        };
        session.load_store()?;
        Ok(session)
    }

    pub fn store(&self) -> &UserStore {
        &self.store
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current_user
            .as_deref()
            .and_then(|name| self.store.user(name))
    }

    pub fn console(&self) -> &W {
        &self.console
    }

    pub fn sink(&self) -> &ReportSink {
        &self.sink
    }

    pub fn print_banner(&mut self) -> Result<(), CliError> {
        let build = build_info::current();
        let title = format!("Wallet Ledger {}", build.summary());
        writeln!(self.console, "{}", style(MessageKind::Section, title))?;
        Ok(())
    }

    /// Runs the menu loop until the exit command or the end of input. The
    /// store is saved in both cases.
    pub fn run(&mut self) -> Result<(), CliError> {
        loop {
            match self.tick() {
                Ok(LoopControl::Continue) => {}
                Ok(LoopControl::Exit) => return Ok(()),
                Err(CommandError::EndOfInput) => {
                    self.say(MessageKind::Info, "Input closed. Exiting...")?;
                    self.save_store()?;
                    return Ok(());
                }
                Err(CommandError::Cli(err)) => return Err(err),
            }
        }
    }

    fn tick(&mut self) -> CommandResult<LoopControl> {
        self.print_notifications()?;
        write!(self.console, "{}", menu::render())?;
        let line = self.prompt(COMMAND_PROMPT)?;
        match MenuCommand::parse(&line) {
            Some(command) => self.execute(command),
            None => {
                self.say(MessageKind::Warning, "Invalid command. Try again.")?;
                Ok(LoopControl::Continue)
            }
        }
    }

    fn execute(&mut self, command: MenuCommand) -> CommandResult<LoopControl> {
        if command.requires_login() && self.current_user.is_none() {
            self.say(MessageKind::Error, LOGIN_REQUIRED)?;
            return Ok(LoopControl::Continue);
        }

        match command {
            MenuCommand::Register => self.register()?,
            MenuCommand::LogIn => self.log_in()?,
            MenuCommand::AddExpense => self.add_transaction(true)?,
            MenuCommand::AddIncome => self.add_transaction(false)?,
            MenuCommand::SetBudget => self.set_budget()?,
            MenuCommand::TotalIncome => {
                if let Some(report) = self.with_wallet(Wallet::total_income) {
                    self.report(report)?;
                }
            }
            MenuCommand::TotalExpenses => {
                if let Some(report) = self.with_wallet(Wallet::total_expenses) {
                    self.report(report)?;
                }
            }
            MenuCommand::IncomeByCategory => self.single_category(CategoryKind::Income)?,
            MenuCommand::ExpenseByCategory => self.single_category(CategoryKind::Expense)?,
            MenuCommand::FullExpenseInfo => {
                if let Some(report) = self.with_wallet(Wallet::expenses_by_categories) {
                    self.report(report)?;
                }
            }
            MenuCommand::FullIncomeInfo => {
                if let Some(report) = self.with_wallet(Wallet::income_by_categories) {
                    self.report(report)?;
                }
            }
            MenuCommand::IncomesForCategories => self.category_list(CategoryKind::Income)?,
            MenuCommand::ExpensesForCategories => self.category_list(CategoryKind::Expense)?,
            MenuCommand::RedirectToFile => self.redirect_to_file()?,
            MenuCommand::RedirectToConsole => {
                self.sink = ReportSink::Console;
                self.report("Output redirected back to console.")?;
            }
            MenuCommand::Exit => {
                self.say(MessageKind::Info, "Exiting...")?;
                self.save_store()?;
                return Ok(LoopControl::Exit);
            }
        }
        Ok(LoopControl::Continue)
    }

    fn register(&mut self) -> CommandResult {
        let username = self.prompt_trimmed("Enter username: ")?;
        let password = self.prompt_trimmed("Enter password: ")?;

        match self.store.register(&username, &password).map(|_| ()) {
            Ok(()) => {
                self.current_user = Some(username);
                self.say(
                    MessageKind::Success,
                    "User registered and logged in successfully!",
                )?;
            }
            Err(err) => self.say(MessageKind::Error, err)?,
        }
        Ok(())
    }

    fn log_in(&mut self) -> CommandResult {
        let username = self.prompt_trimmed("Enter username: ")?;
        let password = self.prompt_trimmed("Enter password: ")?;

        match self.store.authenticate(&username, &password).map(|_| ()) {
            Ok(()) => {
                tracing::info!(username = %username, "user logged in");
                self.say(MessageKind::Success, format!("Logged in as {username}"))?;
                self.current_user = Some(username);
            }
            Err(err) => self.say(MessageKind::Error, err)?,
        }
        Ok(())
    }

    fn add_transaction(&mut self, is_expense: bool) -> CommandResult {
        let name = self.prompt_trimmed("Enter category name: ")?;
        let amount = self.read_amount("Enter amount: ")?;
        if name.is_empty() {
            self.say(MessageKind::Error, "Category name cannot be empty.")?;
            return Ok(());
        }

        let transaction = Transaction::new(name.clone(), amount, is_expense);
        let kind = transaction.kind();
        let Some(user) = self.active_user_mut() else {
            return Ok(());
        };
        let result = TransactionService::post(user.wallet_mut(), transaction);
        if result.is_ok() && is_expense {
            NotificationService::check_budget(user, &name);
        }

        match result {
            Ok(outcome) => {
                if outcome.created {
                    self.say(
                        MessageKind::Info,
                        format!("Created new {kind} category `{name}`."),
                    )?;
                }
                self.say(MessageKind::Success, "Transaction added successfully!")?;
            }
            Err(err) => self.say(MessageKind::Error, err)?,
        }
        Ok(())
    }

    fn set_budget(&mut self) -> CommandResult {
        let name = self.prompt_trimmed("Enter category name: ")?;
        let budget = self.read_amount("Enter budget amount: ")?;
        if name.is_empty() {
            self.say(MessageKind::Error, "Category name cannot be empty.")?;
            return Ok(());
        }

        let Some(user) = self.active_user_mut() else {
            return Ok(());
        };
        let result = BudgetService::set_budget(user.wallet_mut(), &name, budget);
        match result {
            Ok(BudgetOutcome::Created) => self.say(
                MessageKind::Success,
                "Category not found. New expense category created and budget set successfully!",
            )?,
            Ok(BudgetOutcome::Updated) => {
                self.say(MessageKind::Success, "Budget set successfully!")?
            }
            Err(ServiceError::Wallet(WalletError::InvalidCategoryType { .. })) => {
                self.say(MessageKind::Error, INCOME_BUDGET_REJECTED)?
            }
            Err(err) => self.say(MessageKind::Error, err)?,
        }
        Ok(())
    }

    fn single_category(&mut self, kind: CategoryKind) -> CommandResult {
        let name = self.prompt_trimmed("Enter category name: ")?;
        let Some(result) = self.with_wallet(|wallet| category_report(wallet, &name, kind)) else {
            return Ok(());
        };
        match result {
            Ok(text) => self.report(text)?,
            Err(err) => {
                self.say(MessageKind::Error, &err)?;
                if let WalletError::CategoryNotFound(_) = err {
                    if let Some(suggestion) = self.suggest_category(&name) {
                        self.say(MessageKind::Info, format!("Did you mean `{suggestion}`?"))?;
                    }
                }
            }
        }
        Ok(())
    }

    fn category_list(&mut self, kind: CategoryKind) -> CommandResult {
        let input = self.prompt_trimmed("Enter category names (semicolon-separated): ")?;
        if input.is_empty() {
            self.say(MessageKind::Error, "Category names cannot be empty.")?;
            return Ok(());
        }

        let label = match kind {
            CategoryKind::Income => "Income",
            CategoryKind::Expense => "Expenses",
        };
        let names = input
            .split(';')
            .map(str::trim)
            .filter(|name| !name.is_empty());
        for name in names {
            let Some(result) = self.with_wallet(|wallet| category_report(wallet, name, kind)) else {
                return Ok(());
            };
            let line = match result {
                Ok(text) => format!("{label} for category '{name}': {text}"),
                Err(err) => format!("Error for category '{name}': {err}"),
            };
            self.report(line)?;
        }
        Ok(())
    }

    fn redirect_to_file(&mut self) -> CommandResult {
        let file_name = self.prompt_trimmed("Enter file name to redirect output: ")?;
        if file_name.is_empty() {
            self.say(MessageKind::Error, "File name cannot be empty.")?;
            return Ok(());
        }

        match ReportSink::append_to(&file_name) {
            Ok(sink) => {
                self.sink = sink;
                self.say(
                    MessageKind::Success,
                    format!("Output redirected to file: {file_name}"),
                )?;
            }
            Err(err) => {
                self.sink = ReportSink::Console;
                self.say(
                    MessageKind::Error,
                    format!("Error redirecting output: {err}"),
                )?;
            }
        }
        Ok(())
    }

    /// Drains the pending notification, checks the balance, and drains again.
    fn print_notifications(&mut self) -> CommandResult {
        let Some(user) = self.active_user_mut() else {
            return Ok(());
        };
        let drained = NotificationService::cycle(user);
        for notification in drained {
            if self.sink.is_console() {
                writeln!(
                    self.console,
                    "{}",
                    style(MessageKind::Warning, &notification)
                )?;
            } else {
                self.report(notification)?;
            }
        }
        Ok(())
    }

    fn load_store(&mut self) -> Result<(), CliError> {
        match self.storage.load() {
            Ok(Some(store)) => {
                self.store = store;
                self.say(MessageKind::Success, "Data loaded successfully.")?;
            }
            Ok(None) => self.say(
                MessageKind::Info,
                "No data file found, starting with an empty system.",
            )?,
            Err(err) => {
                tracing::warn!(%err, path = %self.storage.location().display(), "failed to load user store");
                self.say(MessageKind::Error, format!("Error loading data: {err}"))?;
            }
        }
        Ok(())
    }

    /// Persists the store; a failure is reported but never aborts the session.
    fn save_store(&mut self) -> Result<(), CliError> {
        match self.storage.save(&self.store) {
            Ok(()) => self.say(MessageKind::Success, "Data saved successfully.")?,
            Err(err) => {
                tracing::warn!(%err, path = %self.storage.location().display(), "failed to save user store");
                self.say(MessageKind::Error, format!("Error saving data: {err}"))?;
            }
        }
        Ok(())
    }

    fn active_user_mut(&mut self) -> Option<&mut User> {
        let name = self.current_user.as_deref()?;
        self.store.user_mut(name)
    }

    fn with_wallet<T>(&self, f: impl FnOnce(&Wallet) -> T) -> Option<T> {
        self.current_user().map(|user| f(user.wallet()))
    }

    fn suggest_category(&self, name: &str) -> Option<String> {
        self.with_wallet(|wallet| closest_name(wallet.category_names(), name).map(str::to_string))
            .flatten()
    }

    fn prompt(&mut self, text: &str) -> CommandResult<String> {
        self.console.flush()?;
        self.input.read_line(text)?.ok_or(CommandError::EndOfInput)
    }

    fn prompt_trimmed(&mut self, text: &str) -> CommandResult<String> {
        Ok(self.prompt(text)?.trim().to_string())
    }

    /// Re-prompts until a non-negative number is entered.
    fn read_amount(&mut self, text: &str) -> CommandResult<f64> {
        loop {
            let line = self.prompt(text)?;
            match parse_amount(&line) {
                Ok(amount) => return Ok(amount),
                Err(err) => self.say(MessageKind::Warning, err.message())?,
            }
        }
    }

    fn say(&mut self, kind: MessageKind, message: impl fmt::Display) -> std::io::Result<()> {
        writeln!(self.console, "{}", style(kind, message))
    }

    /// Writes to the active sink. A failing report file is dropped in favour
    /// of the console and the session carries on.
    fn report(&mut self, text: impl fmt::Display) -> std::io::Result<()> {
        let to_file = !self.sink.is_console();
        match self.sink.emit(&mut self.console, &text) {
            Ok(()) => Ok(()),
            Err(err) if to_file => {
                tracing::warn!(%err, path = ?self.sink.path(), "failed to write report");
                self.sink = ReportSink::Console;
                self.say(MessageKind::Error, format!("Error writing report: {err}"))
            }
            Err(err) => Err(err),
        }
    }
}

fn category_report(wallet: &Wallet, name: &str, kind: CategoryKind) -> Result<String, WalletError> {
    match kind {
        CategoryKind::Income => wallet.income_by_category(name).map(|line| line.to_string()),
        CategoryKind::Expense => wallet.expense_by_category(name).map(|line| line.to_string()),
    }
}

/// Closest existing name within a small edit distance, excluding exact matches.
fn closest_name<'a>(names: impl Iterator<Item = &'a str>, input: &str) -> Option<&'a str> {
    names
        .map(|name| (levenshtein(name, input), name))
        .filter(|(distance, _)| *distance > 0 && *distance <= MAX_SUGGESTION_DISTANCE)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, name)| name)
}
