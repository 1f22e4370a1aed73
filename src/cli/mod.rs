pub mod io;
pub mod menu;
pub mod output;
pub mod session;
mod shell;

pub use session::Session;
pub use shell::{run_cli, CliMode};
