// In-app logger behind the `log` facade. Keeps a bounded buffer for the logs window,
// optionally mirrors to stderr, appends warn+ lines to valentine.log and records panics.

use lazy_static::lazy_static;
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::backtrace::Backtrace;
use std::collections::VecDeque;
use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

const MAX_LOG_LINES: usize = 5000;
const LOG_FILE_NAME: &str = "valentine.log";

#[derive(Clone, Debug)]
pub struct LogEntry {
    pub level: Level,
    pub target: String,
    pub msg: String,
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:>5}] {}: {}", self.level, self.target, self.msg)
    }
}

/// Ring of the most recent entries.
pub struct LogBuffer {
    entries: VecDeque<LogEntry>,
    capacity: usize,
}

impl LogBuffer {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity,
        }
    }

    pub fn push(&mut self, entry: LogEntry) {
        self.entries.push_back(entry);
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries at `max` or more severe, oldest first.
    pub fn at_most(&self, max: LevelFilter) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter().filter(move |e| e.level <= max)
    }

    /// Rows `start..end` of [`LogBuffer::at_most`].
    pub fn page(
        &self,
        max: LevelFilter,
        start: usize,
        end: usize,
    ) -> impl Iterator<Item = &LogEntry> {
        self.at_most(max).skip(start).take(end.saturating_sub(start))
    }
}

lazy_static! {
    static ref LOGS: Mutex<LogBuffer> = Mutex::new(LogBuffer::with_capacity(MAX_LOG_LINES));
    static ref MIRROR_STDERR: bool = {
        let v = std::env::var("VALENTINE_LOG_STDERR").unwrap_or_default();
        matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
    };
    static ref LOG_FILE: Mutex<Option<std::fs::File>> = Mutex::new(None);
}

static NEW_LOGS: AtomicBool = AtomicBool::new(false);

struct GuiLogger;

impl Log for GuiLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let entry = LogEntry {
            level: record.level(),
            target: record.target().to_string(),
            msg: record.args().to_string(),
        };
        let line = format!("[{}] {}", timestamp_millis(), entry);

        if *MIRROR_STDERR {
            eprintln!("{line}");
        }
        if matches!(entry.level, Level::Warn | Level::Error) {
            write_file_line(&line);
        }

        if let Ok(mut buf) = LOGS.lock() {
            buf.push(entry);
        }
        NEW_LOGS.store(true, Ordering::Relaxed);
    }

    fn flush(&self) {
        if let Ok(mut lf) = LOG_FILE.lock() {
            if let Some(f) = lf.as_mut() {
                let _ = f.flush();
            }
        }
    }
}

/// Level named in a `RUST_LOG`-style string, e.g. `debug` or `valentine=trace`.
pub fn parse_level(spec: &str) -> Option<LevelFilter> {
    let v = spec.to_ascii_lowercase();
    [
        ("trace", LevelFilter::Trace),
        ("debug", LevelFilter::Debug),
        ("info", LevelFilter::Info),
        ("warn", LevelFilter::Warn),
        ("error", LevelFilter::Error),
        ("off", LevelFilter::Off),
    ]
    .into_iter()
    .find(|(name, _)| v.contains(name))
    .map(|(_, level)| level)
}

pub fn init() {
    let _ = log::set_boxed_logger(Box::new(GuiLogger));

    let level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|v| parse_level(&v))
        .unwrap_or(LevelFilter::Info);
    log::set_max_level(level);

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(LOG_FILE_NAME)
        .ok();
    if let Ok(mut lf) = LOG_FILE.lock() {
        *lf = file;
    }

    install_panic_hook();

    log::info!("Logger initialized at level {level} (warnings go to {LOG_FILE_NAME})");
}

/// Runs `f` against the shared buffer. `None` if the lock is poisoned.
pub fn with_buffer<T>(f: impl FnOnce(&LogBuffer) -> T) -> Option<T> {
    LOGS.lock().ok().map(|buf| f(&buf))
}

pub fn clear() {
    if let Ok(mut buf) = LOGS.lock() {
        buf.clear();
    }
    NEW_LOGS.store(true, Ordering::Relaxed);
}

/// Returns true if new logs arrived since the last call.
pub fn take_new_flag() -> bool {
    NEW_LOGS.swap(false, Ordering::Relaxed)
}

fn timestamp_millis() -> String {
    let now = SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default();
    format!("{}.{:03}", now.as_secs(), now.subsec_millis())
}

fn write_file_line(line: &str) {
    if let Ok(mut lf) = LOG_FILE.lock() {
        if let Some(f) = lf.as_mut() {
            let _ = writeln!(f, "{line}");
            let _ = f.flush();
        }
    }
}

fn install_panic_hook() {
    std::panic::set_hook(Box::new(|panic_info| {
        let msg = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            *s
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.as_str()
        } else {
            "Box<Any>"
        };
        let loc = panic_info
            .location()
            .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
            .unwrap_or_else(|| "unknown".to_string());

        let bt = Backtrace::force_capture();
        write_file_line(&format!("[{}] [ERROR] panic at {loc}: {msg}", timestamp_millis()));
        for line in format!("{bt:?}").lines() {
            write_file_line(line);
        }

        log::error!("panic at {loc}: {msg}\n{bt:?}");
    }));
}
