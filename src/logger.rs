// Process-wide logger: formats records with a timestamp, optionally mirrors them
// to stderr, and persists warn+ lines to log.txt. Also installs a panic hook.

use lazy_static::lazy_static;
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::backtrace::Backtrace;
use std::any::Any;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

const LOG_FILE_NAME: &str = "log.txt";

lazy_static! {
    static ref MIRROR_STDERR: bool = std::env::var("GUI_LOG_STDERR")
        .map(|v| is_truthy(&v))
        .unwrap_or(false);
    // None until init() opens log.txt, or if it could not be opened.
    static ref LOG_FILE: Mutex<Option<File>> = Mutex::new(None);
}

struct AppLogger;

impl Log for AppLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        if let Some(max) = log::max_level().to_level() {
            metadata.level() <= max
        } else {
            false
        }
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = format_record(
            &timestamp_millis(),
            record.level(),
            record.target(),
            &record.args().to_string(),
        );

        if *MIRROR_STDERR {
            eprintln!("{}", line);
        }

        if matches!(record.level(), Level::Warn | Level::Error) {
            write_file_line(&line);
        }
    }

    fn flush(&self) {
        flush_file();
    }
}

fn is_truthy(v: &str) -> bool {
    matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

fn format_record(ts: &str, level: Level, target: &str, msg: &str) -> String {
    format!("[{}] [{:>5}] {}: {}", ts, level, target, msg)
}

fn parse_level(val: &str) -> Option<LevelFilter> {
    let v = val.to_lowercase();
    if v.contains("trace") {
        Some(LevelFilter::Trace)
    } else if v.contains("debug") {
        Some(LevelFilter::Debug)
    } else if v.contains("info") {
        Some(LevelFilter::Info)
    } else if v.contains("warn") {
        Some(LevelFilter::Warn)
    } else if v.contains("error") {
        Some(LevelFilter::Error)
    } else if v.contains("off") {
        Some(LevelFilter::Off)
    } else {
        None
    }
}

fn level_from_env() -> Option<LevelFilter> {
    let val = std::env::var("RUST_LOG").ok()?;
    parse_level(&val)
}

/// Install the logger, open log.txt and hook panics. Call once, first thing in main.
pub fn init() {
    let _ = log::set_boxed_logger(Box::new(AppLogger));

    let level = level_from_env().unwrap_or(LevelFilter::Info);
    log::set_max_level(level);

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(LOG_FILE_NAME)
        .ok();
    with_log_file(|slot| *slot = file);

    install_panic_hook();

    log::info!("logger up at {level}, warn+ also goes to {LOG_FILE_NAME}");
}

fn timestamp_millis() -> String {
    let now = SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default();
    format!("{}.{:03}", now.as_secs(), now.subsec_millis())
}

// A poisoned lock only means another thread panicked mid-write; keep logging.
fn with_log_file<R>(f: impl FnOnce(&mut Option<File>) -> R) -> R {
    let mut slot = LOG_FILE.lock().unwrap_or_else(|e| e.into_inner());
    f(&mut *slot)
}

fn append_line(out: &mut impl Write, line: &str) -> io::Result<()> {
    writeln!(out, "{line}")?;
    out.flush()
}

fn write_file_line(line: &str) {
    with_log_file(|slot| {
        if let Some(file) = slot.as_mut() {
            let _ = append_line(file, line);
        }
    });
}

fn flush_file() {
    with_log_file(|slot| {
        if let Some(file) = slot.as_mut() {
            let _ = file.flush();
        }
    });
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("non-string panic payload")
}

fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        let msg = panic_message(info.payload());
        let loc = info
            .location()
            .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
            .unwrap_or_else(|| "unknown".to_string());

        // Straight to the file: the logger may be the thing that panicked.
        write_file_line(&format_record(
            &timestamp_millis(),
            Level::Error,
            "panic",
            &format!("at {loc}: {msg}"),
        ));
        let backtrace = Backtrace::force_capture().to_string();
        for line in backtrace.lines() {
            write_file_line(line);
        }

        log::error!("panic at {loc}: {msg}");
    }));
}
