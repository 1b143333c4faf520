// src/common/log.rs

use crate::common::env;
use chrono::Local;
use lazy_static::lazy_static;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::mpsc;
use std::sync::Mutex;
use std::thread;
use std::time::{Duration, Instant};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

lazy_static! {
    static ref LAST_LOG_TIME: Mutex<Option<Instant>> = Mutex::new(None);
    static ref LOG_SENDER: Mutex<Option<mpsc::Sender<String>>> = Mutex::new(None);
    static ref CONFIGURED_LOG_LEVEL: LogLevel = LogLevel::from_str(&env::CONFIG.log_level);
}

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub enum LogLevel {
    Error = 3,
    Warn = 2,
    Info = 1,
    Debug = 0,
}

impl LogLevel {
    fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => LogLevel::Error,
            "warn" => LogLevel::Warn,
            "info" => LogLevel::Info,
            "debug" => LogLevel::Debug,
            _ => LogLevel::Info,
        }
    }
}

// Initializes console timing state and the background file writer.
pub fn init() {
    *LAST_LOG_TIME.lock().unwrap() = Some(Instant::now());
    start_file_logger();
}

// Logs a formatted message to the console and a clean version to the file.
pub fn log(level: LogLevel, content: &str) {
    if (level as u8) < (*CONFIGURED_LOG_LEVEL as u8) {
        return;
    }

    let now = Instant::now();
    let time_diff_str = {
        let mut last_time = LAST_LOG_TIME.lock().unwrap();
        let diff = match *last_time {
            Some(prev) => format_duration(now.duration_since(prev)),
            None => "0us".to_string(),
        };
        *last_time = Some(now);
        diff
    };

    let mut stdout = StandardStream::stdout(ColorChoice::Always);
    let time_str = Local::now().format("%H:%M:%S");

    let timestamp_color = match level {
        LogLevel::Info => Color::White,
        LogLevel::Debug => Color::Magenta,
        LogLevel::Warn => Color::Yellow,
        LogLevel::Error => Color::Red,
    };
    let diff_color = match level {
        LogLevel::Debug => Color::Blue,
        _ => Color::Yellow,
    };

    let _ = stdout.set_color(ColorSpec::new().set_fg(Some(timestamp_color)));
    let _ = write!(&mut stdout, "{} ", time_str);
    let _ = stdout.reset();
    let _ = write!(&mut stdout, "{} ", content);
    let _ = stdout.set_color(ColorSpec::new().set_fg(Some(diff_color)));
    let _ = writeln!(&mut stdout, "+{}\x1b[0m", time_diff_str);
    let _ = stdout.reset();

    if let Some(sender) = &*LOG_SENDER.lock().unwrap() {
        let _ = sender.send(format!("{} {} +{}", time_str, content, time_diff_str));
    }
}

// Spawns the thread that appends log lines to the day's file.
fn start_file_logger() {
    let (tx, rx) = mpsc::channel::<String>();
    *LOG_SENDER.lock().unwrap() = Some(tx);

    thread::spawn(move || {
        let log_path = match create_log_path() {
            Ok(path) => path,
            Err(_) => return,
        };

        while let Ok(line) = rx.recv() {
            if let Ok(mut file) = fs::OpenOptions::new().create(true).append(true).open(&log_path) {
                let _ = file.write_all(line.as_bytes());
                let _ = file.write_all(b"\n");
            }
        }
    });
}

// Creates the log directory and returns the full path for the new log file.
fn create_log_path() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or(io::Error::new(
        io::ErrorKind::NotFound,
        "Home directory not found",
    ))?;
    let now = Local::now();
    let dir = home_dir
        .join(".loupe/logs")
        .join(now.format("%Y-%m-%d").to_string());

    fs::create_dir_all(&dir)?;

    Ok(dir.join(now.format("%H-%M-%S.log").to_string()))
}

fn format_duration(duration: Duration) -> String {
    let micros = duration.as_micros();
    if micros < 1_000 {
        format!("{}us", micros)
    } else if micros < 1_000_000 {
        format!("{}ms", micros / 1_000)
    } else if micros < 60_000_000 {
        format!("{}s", micros / 1_000_000)
    } else if micros < 3_600_000_000 {
        format!("{:.2}m", micros as f64 / 60_000_000.0)
    } else {
        format!("{:.2}h", micros as f64 / 3_600_000_000.0)
    }
}
