//! Stress tests for shared loggers
//!
//! These tests verify:
//! - Lines stay intact when many threads log through one logger
//! - No lines are lost under concurrent load
//! - File sinks behave the same as in-memory sinks

use rust_leveled_logger::prelude::*;
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;
use tempfile::TempDir;

const THREADS: usize = 8;
const PER_THREAD: usize = 500;

fn spawn_writers(logger: Arc<Logger>) {
    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for i in 0..PER_THREAD {
                    match i % 3 {
                        0 => logger.info("Worker", format_args!("thread {} message {}", t, i)),
                        1 => logger.warning("Worker", format_args!("thread {} message {}", t, i)),
                        _ => logger.debug("Worker", format_args!("thread {} message {}", t, i)),
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("writer thread panicked");
    }
}

fn assert_all_lines_intact(content: &str, expect_debug: bool) {
    let mut seen = HashSet::new();
    for line in content.lines() {
        let message = line
            .split_once("[Worker] ")
            .map(|(_, m)| m)
            .unwrap_or_else(|| panic!("corrupted line: {:?}", line));
        assert!(seen.insert(message.to_string()), "duplicate line: {:?}", line);
    }

    let per_thread = if expect_debug {
        PER_THREAD
    } else {
        (0..PER_THREAD).filter(|i| i % 3 != 2).count()
    };
    assert_eq!(seen.len(), THREADS * per_thread);
}

#[test]
fn test_concurrent_standard_logging() {
    let buffer = SharedBuffer::new();
    let logger = Arc::new(Logger::new(true, buffer.clone()));

    spawn_writers(Arc::clone(&logger));
    assert_all_lines_intact(&buffer.contents(), true);
}

#[test]
fn test_concurrent_datadog_logging_without_debug() {
    let buffer = SharedBuffer::new();
    let logger = Arc::new(Logger::new_datadog(false, buffer.clone()));

    spawn_writers(Arc::clone(&logger));

    let content = buffer.contents();
    assert!(content.lines().all(|line| line.split('\t').count() == 3));
    assert!(!content.contains("[DEBUG]"));
    assert_all_lines_intact(&content, false);
}

#[test]
fn test_concurrent_file_logging() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("stress.log");

    {
        let file = open_log_file(&log_file).expect("Failed to open log file");
        let logger = Arc::new(Logger::new(true, file));
        spawn_writers(Arc::clone(&logger));
        logger.flush().expect("Failed to flush");
    }

    let content = std::fs::read_to_string(&log_file).expect("Failed to read log file");
    assert_all_lines_intact(&content, true);
}

#[test]
fn test_concurrent_http_traffic() {
    let buffer = SharedBuffer::new();
    let mut logger = Logger::new(false, buffer.clone());
    logger.set_flags(SinkFlags::NONE);
    let logger = Arc::new(logger);

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                let traffic = HttpTrafficLogger::new();
                for i in 0..50 {
                    let request = http::Request::get(format!("http://example.com/{}/{}", t, i))
                        .body(Vec::<u8>::new())
                        .expect("valid request");
                    traffic.log_request(&logger, &request);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("writer thread panicked");
    }

    let content = buffer.contents();
    let requests = content
        .lines()
        .filter(|line| line.starts_with("[INFO][http::Request] Request GET http://example.com/"))
        .count();
    assert_eq!(requests, THREADS * 50);
}
