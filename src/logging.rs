use std::{
    fs::OpenOptions,
    io::Write,
    path::PathBuf,
    sync::{
        atomic::{AtomicBool, AtomicU8, Ordering},
        mpsc::{self, Sender},
        OnceLock,
    },
    thread,
};

use crate::paths::bridge_data_dir;

/* =========================
   GLOBAL STATE
   ========================= */

static ENABLED: AtomicBool = AtomicBool::new(false);
static MIN_LEVEL: AtomicU8 = AtomicU8::new(1);
static LOG_PATH: OnceLock<PathBuf> = OnceLock::new();
static LOG_TX: OnceLock<Sender<String>> = OnceLock::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Info = 0,
    Warn = 1,
    Error = 2,
}

impl LogLevel {
    fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "info" | "debug" | "trace" => Self::Info,
            "error" => Self::Error,
            _ => Self::Warn,
        }
    }

    fn tag(self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        }
    }
}

/* =========================
   PUBLIC API
   ========================= */

pub fn init(debug: bool, level: &str) {
    if LOG_TX.get().is_some() {
        panic!("logging::init() called more than once");
    }

    ENABLED.store(debug, Ordering::Relaxed);
    MIN_LEVEL.store(LogLevel::parse(level) as u8, Ordering::Relaxed);

    let path = log_path().clone();
    let (tx, rx) = mpsc::channel::<String>();
    LOG_TX.set(tx).expect("LOG_TX already set");

    thread::spawn(move || {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .expect("Failed to open log file");

        while let Ok(line) = rx.recv() {
            let _ = writeln!(file, "{line}");
            let _ = file.flush();
        }
    });
}

#[inline]
pub fn should_log(level: LogLevel) -> bool {
    if !ENABLED.load(Ordering::Relaxed) {
        return level >= LogLevel::Warn;
    }
    level as u8 >= MIN_LEVEL.load(Ordering::Relaxed)
}

/* =========================
   INTERNAL
   ========================= */

#[inline]
pub fn enqueue(level: LogLevel, msg: String) {
    if let Some(tx) = LOG_TX.get() {
        let ts = timestamp();
        let _ = tx.send(format!("{ts} [{}] {msg}", level.tag()));
    }
}

fn timestamp() -> String {
    let now = chrono::Local::now();
    now.format("%Y-%m-%d %H:%M:%S%.3f").to_string()
}

/* =========================
   MACROS
   ========================= */

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {{
        if $crate::logging::should_log($crate::logging::LogLevel::Info) {
            $crate::logging::enqueue(
                $crate::logging::LogLevel::Info,
                format!($($arg)*)
            );
        }
    }};
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {{
        $crate::logging::enqueue(
            $crate::logging::LogLevel::Warn,
            format!($($arg)*)
        );
    }};
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {{
        $crate::logging::enqueue(
            $crate::logging::LogLevel::Error,
            format!($($arg)*)
        );
    }};
}

/* =========================
   PATH
   ========================= */

fn log_path() -> &'static PathBuf {
    LOG_PATH.get_or_init(|| bridge_data_dir().join("settings-bridge.log"))
}
