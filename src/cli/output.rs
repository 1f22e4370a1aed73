use colored::Colorize;
use std::{
    fmt,
    fs::{File, OpenOptions},
    io::{self, Write},
    path::{Path, PathBuf},
};

/// Message categories used by the CLI output helpers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Error,
    Section,
}

fn icon(kind: MessageKind) -> &'static str {
    match kind {
        MessageKind::Info => "[i]",
        MessageKind::Success => "[✓]",
        MessageKind::Warning => "[!]",
        MessageKind::Error => "[x]",
        MessageKind::Section => "",
    }
}

/// Formats a status message. Colour follows `colored`'s global override,
/// which the shell sets from the config and run mode.
pub fn style(kind: MessageKind, message: impl fmt::Display) -> String {
    let text = message.to_string();
    let base = match kind {
        MessageKind::Section => format!("=== {} ===", text.trim()),
        _ => format!("{} {}", icon(kind), text),
    };

    match kind {
        MessageKind::Success => base.bright_green().to_string(),
        MessageKind::Warning => base.bright_yellow().to_string(),
        MessageKind::Error => base.bright_red().to_string(),
        MessageKind::Section => base.bold().to_string(),
        MessageKind::Info => base,
    }
}

pub fn set_color_enabled(enabled: bool) {
    colored::control::set_override(enabled);
}

/// Destination for report output. Only one sink is active at a time.
#[derive(Debug)]
pub enum ReportSink {
    Console,
    File { path: PathBuf, file: File },
}

impl ReportSink {
    /// Opens `path` for appending, creating it when missing.
    pub fn append_to(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok(ReportSink::File { path, file })
    }

    pub fn is_console(&self) -> bool {
        matches!(self, ReportSink::Console)
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            ReportSink::Console => None,
            ReportSink::File { path, .. } => Some(path),
        }
    }

    /// Writes one report block, using `console` while no file is active.
    pub fn emit(&mut self, console: &mut dyn Write, text: impl fmt::Display) -> io::Result<()> {
        match self {
            ReportSink::Console => writeln!(console, "{text}"),
            ReportSink::File { file, .. } => {
                writeln!(file, "{text}")?;
                file.flush()
            }
        }
    }
}
