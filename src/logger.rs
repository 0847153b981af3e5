//! Console output for the converter.
//!
//! Everything the tool prints goes through the macros below. While a progress
//! bar is attached, lines are written inside [`ProgressBar::suspend`] so the bar
//! is redrawn underneath them instead of being torn apart.
//!
//! Worker threads can [`capture`] their stdout lines instead, so the caller
//! prints them next to the result they belong to.

use indicatif::ProgressBar;
use std::cell::RefCell;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

static QUIET_MODE: AtomicBool = AtomicBool::new(false);
static VERBOSE_MODE: AtomicBool = AtomicBool::new(false);
static ACTIVE_BAR: Mutex<Option<ProgressBar>> = Mutex::new(None);

thread_local! {
    static CAPTURED: RefCell<Option<Vec<String>>> = const { RefCell::new(None) };
}

pub fn configure(quiet: bool, verbose: bool) {
    QUIET_MODE.store(quiet, Ordering::Relaxed);
    VERBOSE_MODE.store(verbose, Ordering::Relaxed);
}

pub fn is_quiet() -> bool {
    QUIET_MODE.load(Ordering::Relaxed)
}

pub fn is_verbose() -> bool {
    VERBOSE_MODE.load(Ordering::Relaxed)
}

pub fn attach_progress(bar: &ProgressBar) {
    *ACTIVE_BAR.lock().unwrap_or_else(|e| e.into_inner()) = Some(bar.clone());
}

pub fn detach_progress() {
    ACTIVE_BAR.lock().unwrap_or_else(|e| e.into_inner()).take();
}

fn active_bar() -> Option<ProgressBar> {
    ACTIVE_BAR.lock().unwrap_or_else(|e| e.into_inner()).clone()
}

/// Runs `f`, collecting the stdout lines it emits on this thread instead of
/// printing them. Stderr is never captured.
pub fn capture<T>(f: impl FnOnce() -> T) -> (T, Vec<String>) {
    let previous = CAPTURED.with(|c| c.replace(Some(Vec::new())));
    let value = f();
    let lines = CAPTURED.with(|c| c.replace(previous)).unwrap_or_default();
    (value, lines)
}

fn try_capture(line: &str) -> bool {
    CAPTURED.with(|c| match c.borrow_mut().as_mut() {
        Some(lines) => {
            lines.push(line.to_string());
            true
        }
        None => false,
    })
}

/// Write one line to stdout, around the progress bar if one is attached.
pub fn emit(line: &str) {
    if try_capture(line) {
        return;
    }
    match active_bar() {
        Some(bar) => bar.suspend(|| println!("{}", line)),
        None => println!("{}", line),
    }
}

/// Write one line to stderr, around the progress bar if one is attached.
pub fn emit_err(line: &str) {
    match active_bar() {
        Some(bar) => bar.suspend(|| eprintln!("{}", line)),
        None => eprintln!("{}", line),
    }
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        if !$crate::logger::is_quiet() {
            $crate::logger::emit(&format!($($arg)*));
        }
    };
}

#[macro_export]
macro_rules! verbose {
    ($($arg:tt)*) => {
        if $crate::logger::is_verbose() && !$crate::logger::is_quiet() {
            $crate::logger::emit(&format!("      · {}", format!($($arg)*)));
        }
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::logger::emit_err(&format!("✗ {}", format!($($arg)*)));
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        if !$crate::logger::is_quiet() {
            $crate::logger::emit_err(&format!("⚠️  {}", format!($($arg)*)));
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_collects_lines_in_order() {
        let (value, lines) = capture(|| {
            emit("decoded 8x8");
            emit("wrote a.webp");
            7
        });
        assert_eq!(value, 7);
        assert_eq!(lines, vec!["decoded 8x8", "wrote a.webp"]);
    }

    #[test]
    fn test_capture_is_per_thread() {
        let (_, lines) = capture(|| {
            std::thread::spawn(|| emit("from another thread")).join().unwrap();
            emit("from this thread");
        });
        assert_eq!(lines, vec!["from this thread"]);
    }

    #[test]
    fn test_capture_nests() {
        let (inner, outer) = capture(|| {
            emit("outer");
            let (_, inner) = capture(|| emit("inner"));
            inner
        });
        assert_eq!(inner, vec!["inner"]);
        assert_eq!(outer, vec!["outer"]);
    }
}
