// src/logging.rs

use color_eyre::eyre::Result;
use directories::ProjectDirs;
use lazy_static::lazy_static;
use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};
use std::path::PathBuf;
use time::macros::format_description;
use tracing_error::ErrorLayer;
use tracing_subscriber::fmt::time::LocalTime;
use tracing_subscriber::{self, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

lazy_static! {
    pub static ref PROJECT_NAME: String = env!("CARGO_CRATE_NAME").to_uppercase().to_string();
    pub static ref LOG_ENV: String = format!("{}_LOGLEVEL", PROJECT_NAME.clone());
    pub static ref LOG_FILE: String = format!("{}.log", env!("CARGO_PKG_NAME"));
}

/// How far back from the end of the log file the tail reader looks.
const LOG_TAIL_BYTES: u64 = 64 * 1024;

fn project_directory() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "securecheck", env!("CARGO_PKG_NAME"))
}

pub fn get_data_dir() -> PathBuf {
    if let Some(proj_dirs) = project_directory() {
        proj_dirs.data_local_dir().to_path_buf()
    } else {
        PathBuf::from(".").join(".data")
    }
}

pub fn log_file_path() -> PathBuf {
    get_data_dir().join(LOG_FILE.as_str())
}

/// Initializes file-based logging using the tracing subscriber.
///
/// The terminal belongs to the TUI, so nothing is ever logged to stdout or
/// stderr. The level comes from `RUST_LOG`, then `SECURECHECK_LOGLEVEL`,
/// then defaults to `securecheck=info`.
pub fn initialize_logging() -> Result<()> {
    let directory = get_data_dir();
    std::fs::create_dir_all(&directory)?;
    let log_file = std::fs::File::create(log_file_path())?;

    let file_log_level = std::env::var("RUST_LOG")
        .or_else(|_| std::env::var(LOG_ENV.as_str()))
        .unwrap_or_else(|_| format!("{}=info", env!("CARGO_CRATE_NAME")));

    let timer = LocalTime::new(format_description!(
        "[year]-[month]-[day] [hour]:[minute]:[second]"
    ));

    let file_subscriber = tracing_subscriber::fmt::layer()
        .with_writer(log_file)
        .with_timer(timer)
        .with_target(false)
        .with_ansi(false)
        .with_filter(EnvFilter::new(file_log_level));

    tracing_subscriber::registry()
        .with(file_subscriber)
        .with(ErrorLayer::default())
        .init();

    Ok(())
}

/// Current size of the log file, or `None` when it does not exist yet.
pub fn log_file_len() -> Option<u64> {
    std::fs::metadata(log_file_path()).ok().map(|meta| meta.len())
}

/// Returns up to `max_lines` of the most recent log lines, oldest first.
/// Only the last `LOG_TAIL_BYTES` of the file are read. A missing or
/// unreadable log file yields an empty list.
pub fn read_log_tail(max_lines: usize) -> Vec<String> {
    let Ok(mut file) = File::open(log_file_path()) else {
        return Vec::new();
    };
    tail_from(&mut file, max_lines, LOG_TAIL_BYTES).unwrap_or_default()
}

fn tail_from<R: Read + Seek>(reader: &mut R, max_lines: usize, max_bytes: u64) -> io::Result<Vec<String>> {
    let len = reader.seek(SeekFrom::End(0))?;
    let start = len.saturating_sub(max_bytes);
    reader.seek(SeekFrom::Start(start))?;

    let mut buf = Vec::new();
    reader.by_ref().take(max_bytes).read_to_end(&mut buf)?;
    let content = String::from_utf8_lossy(&buf);

    // Reading from the middle of the file usually lands inside a line.
    let text = if start > 0 {
        content.split_once('\n').map_or("", |(_, rest)| rest)
    } else {
        content.as_ref()
    };
    Ok(tail_lines(text, max_lines))
}

fn tail_lines(content: &str, max_lines: usize) -> Vec<String> {
    let lines: Vec<&str> = content.lines().collect();
    let start = lines.len().saturating_sub(max_lines);
    lines[start..].iter().map(|line| line.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_names_derive_from_the_crate() {
        assert_eq!(LOG_ENV.as_str(), "SECURECHECK_LOGLEVEL");
        assert_eq!(LOG_FILE.as_str(), "securecheck.log");
        assert!(log_file_path().ends_with("securecheck.log"));
    }

    #[test]
    fn tail_keeps_the_most_recent_lines() {
        let content = "one\ntwo\nthree\nfour\n";
        assert_eq!(tail_lines(content, 2), vec!["three", "four"]);
        assert_eq!(tail_lines(content, 10).len(), 4);
        assert!(tail_lines("", 5).is_empty());
    }

    #[test]
    fn tail_reads_only_the_end_of_a_large_log() {
        let content: String = (0..10_000).map(|i| format!("line {i}\n")).collect();
        let mut reader = io::Cursor::new(content.into_bytes());
        let tail = tail_from(&mut reader, 3, 64).unwrap();
        assert_eq!(tail, vec!["line 9997", "line 9998", "line 9999"]);
    }

    #[test]
    fn tail_drops_the_partial_first_line() {
        let mut reader = io::Cursor::new(b"first line\nsecond\nthird\n".to_vec());
        // Twelve bytes from the end starts inside "second".
        let tail = tail_from(&mut reader, 10, 12).unwrap();
        assert_eq!(tail, vec!["third"]);

        let mut whole = io::Cursor::new(b"first line\nsecond\n".to_vec());
        assert_eq!(tail_from(&mut whole, 10, 1024).unwrap(), vec!["first line", "second"]);
    }
}
