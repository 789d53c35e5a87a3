use crate::paths;
use colored::*;
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::collections::HashMap;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

pub struct AlerterLogger {
    quiet: AtomicBool,
    verbose: AtomicBool,
    log_file: Mutex<Option<File>>,
    target_colors: Mutex<HashMap<String, usize>>,
    next_color_index: AtomicUsize,
}

impl AlerterLogger {
    pub fn new(quiet: bool, verbose: bool, log_path: Option<&Path>) -> Self {
        let log_file = log_path.and_then(|path| {
            match OpenOptions::new()
                .create(true)
                .write(true)
                .truncate(true)
                .open(path)
            {
                Ok(file) => Some(file),
                Err(e) => {
                    eprintln!("Warning: Failed to open log file at {:?}: {}", path, e);
                    None
                }
            }
        });

        Self {
            quiet: AtomicBool::new(quiet),
            verbose: AtomicBool::new(verbose),
            log_file: Mutex::new(log_file),
            target_colors: Mutex::new(HashMap::new()),
            next_color_index: AtomicUsize::new(0),
        }
    }

    fn color_for_target(&self, target: &str) -> ColoredString {
        let colors: &[fn(&str) -> ColoredString] = &[
            |s| s.green(),
            |s| s.yellow(),
            |s| s.blue(),
            |s| s.magenta(),
            |s| s.cyan(),
        ];

        let color_index = match self.target_colors.lock() {
            Ok(mut target_colors) => *target_colors.entry(target.to_string()).or_insert_with(|| {
                self.next_color_index.fetch_add(1, Ordering::SeqCst) % colors.len()
            }),
            Err(_) => 0,
        };

        colors[color_index](target)
    }

    fn level_str(level: Level) -> &'static str {
        match level {
            Level::Error => "[E]",
            Level::Warn => "[W]",
            Level::Info => "[I]",
            Level::Debug => "[D]",
            Level::Trace => "[T]",
        }
    }

    fn short_target(target: &str) -> &str {
        target.rsplit("::").next().unwrap_or(target)
    }

    fn format_log(&self, record: &Record) -> String {
        let level_str = Self::level_str(record.level());

        let target = if !record.target().is_empty() {
            let colored_target = self
                .color_for_target(Self::short_target(record.target()))
                .dimmed();
            format!("[{}] ", colored_target)
        } else {
            String::new()
        };

        match record.level() {
            Level::Error => format!("{} {}{}", level_str, target, record.args())
                .red()
                .bold()
                .to_string(),
            Level::Warn => format!("{} {}{}", level_str, target, record.args())
                .yellow()
                .bold()
                .to_string(),
            level => {
                let colored_level = match level {
                    Level::Info => level_str.green().bold(),
                    Level::Debug => level_str.blue().bold(),
                    _ => level_str.white().bold(),
                };
                format!("{} {}{}", colored_level, target, record.args())
            }
        }
    }

    fn format_log_plain(&self, record: &Record) -> String {
        let target = if !record.target().is_empty() {
            format!("[{}] ", Self::short_target(record.target()))
        } else {
            String::new()
        };

        format!(
            "{} {}{}",
            Self::level_str(record.level()),
            target,
            record.args()
        )
    }
}

impl Log for AlerterLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        if self.quiet.load(Ordering::SeqCst) {
            metadata.level() <= Level::Info
        } else if self.verbose.load(Ordering::SeqCst) {
            metadata.level() <= Level::Trace
        } else {
            metadata.level() <= Level::Debug
        }
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        eprintln!("{}", self.format_log(record));

        if let Ok(mut file_opt) = self.log_file.lock() {
            if let Some(file) = file_opt.as_mut() {
                let _ = writeln!(file, "{}", self.format_log_plain(record));
                let _ = file.flush();
            }
        }
    }

    fn flush(&self) {}
}

/// Installs the global logger, mirroring plain lines into the default log file.
pub fn init_logger(quiet: bool, verbose: bool) -> Result<(), log::SetLoggerError> {
    let log_path = paths::ensure_data_dir().and(paths::log_file_path());
    let logger = AlerterLogger::new(quiet, verbose, log_path.as_deref());
    log::set_boxed_logger(Box::new(logger))?;
    log::set_max_level(LevelFilter::Trace);
    Ok(())
}
