use std::io::{self, Write};

use crate::{
    cli::{
        io::{EditorSource, LineSource, ScriptSource},
        output::{self, MessageKind},
        session::Session,
    },
    config::{Config, ConfigManager},
    core::utils::PathResolver,
    errors::CliError,
    storage::JsonStorage,
};

const SCRIPT_ENV: &str = "WALLET_CLI_SCRIPT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

impl CliMode {
    pub fn from_env() -> Self {
        if std::env::var_os(SCRIPT_ENV).is_some() {
            CliMode::Script
        } else {
            CliMode::Interactive
        }
    }
}

pub fn run_cli() -> Result<(), CliError> {
    let mode = CliMode::from_env();
    let (config, storage, setup_error) = match ConfigManager::new() {
        Ok(manager) => {
            let config = load_config(&manager);
            let storage = JsonStorage::from_config(&manager, &config);
            (config, storage, None)
        }
        Err(err) => {
            let base = PathResolver::resolve_base(None);
            tracing::warn!(%err, path = %base.display(), "app directory unavailable, using defaults");
            let config = Config::default();
            let storage = JsonStorage::new(
                PathResolver::data_file_in(&base, &config.data_file),
                PathResolver::backup_dir_in(&base),
                config.backup_retention,
            );
            (config, storage, Some(err))
        }
    };
    output::set_color_enabled(config.color_enabled && mode == CliMode::Interactive);

    let input: Box<dyn LineSource> = match mode {
        CliMode::Interactive => Box::new(EditorSource::new()?),
        CliMode::Script => Box::new(ScriptSource::new(io::stdin().lock())),
    };

    let mut stdout = io::stdout();
    if let Some(err) = setup_error {
        writeln!(
            stdout,
            "{}",
            output::style(
                MessageKind::Error,
                format!("Error preparing data directory: {err}")
            )
        )?;
    }

    let mut session = Session::new(Box::new(storage), input, stdout)?;
    session.print_banner()?;
    session.run()
}

/// Reads the config file, writing defaults on first run. Unreadable files
/// fall back to defaults.
fn load_config(manager: &ConfigManager) -> Config {
    if !manager.path().exists() {
        let config = Config::default();
        if let Err(err) = manager.save(&config) {
            tracing::warn!(%err, path = %manager.path().display(), "failed to write default config");
        }
        return config;
    }
    manager.load().unwrap_or_else(|err| {
        tracing::warn!(%err, path = %manager.path().display(), "using default config");
        Config::default()
    })
}
