//! Shared fixtures for the helper-library tests.

use core_types::{NodeId, ReadyState};
use dom::Document;
use platform::{Host, HostConfig, ManualClock};
use std::cell::RefCell;
use std::fmt::Write;
use std::rc::Rc;
use std::time::Duration;

pub fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

/// A host on a manual clock, still `Loading`. Keep the clock to move time.
pub fn test_host() -> (Host, ManualClock) {
    let clock = ManualClock::default();
    (Host::with_clock(clock.clone()), clock)
}

/// Like `test_host`, with the document already past `DOMContentLoaded`.
pub fn loaded_test_host() -> (Host, ManualClock) {
    let clock = ManualClock::default();
    let config = HostConfig {
        ready_state: ReadyState::Interactive,
        ..HostConfig::default()
    };
    (Host::with_config(config, clock.clone()), clock)
}

/// The body element of a host built by the fixtures above.
pub fn body(host: &Host) -> NodeId {
    host.document()
        .body()
        .unwrap_or_else(|| panic!("test host document has no <body>"))
}

/// Shared, cloneable recorder for values seen by callbacks.
#[derive(Debug)]
pub struct CallLog<T> {
    calls: Rc<RefCell<Vec<T>>>,
}

impl<T> Clone for CallLog<T> {
    fn clone(&self) -> Self {
        Self {
            calls: Rc::clone(&self.calls),
        }
    }
}

impl<T> Default for CallLog<T> {
    fn default() -> Self {
        Self {
            calls: Rc::new(RefCell::new(Vec::new())),
        }
    }
}

impl<T: Clone> CallLog<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, value: T) {
        self.calls.borrow_mut().push(value);
    }

    pub fn len(&self) -> usize {
        self.calls.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.borrow().is_empty()
    }

    pub fn calls(&self) -> Vec<T> {
        self.calls.borrow().clone()
    }

    /// Return what was recorded so far and start over.
    pub fn take(&self) -> Vec<T> {
        std::mem::take(&mut *self.calls.borrow_mut())
    }
}

pub fn diff_lines(expected: &[String], actual: &[String]) -> String {
    let max = expected.len().max(actual.len());
    let missing = "<missing>";
    let line = |lines: &[String], i: usize| -> String {
        lines.get(i).map(String::as_str).unwrap_or(missing).to_string()
    };
    let mismatch = (0..max).find(|&i| line(expected, i) != line(actual, i));

    let mut out = String::new();
    if let Some(i) = mismatch {
        let start = i.saturating_sub(2);
        let end = (i + 3).min(max);
        let _ = writeln!(
            &mut out,
            "first mismatch at line {} (showing {}..={}):",
            i + 1,
            start + 1,
            end
        );
        for idx in start..end {
            let marker = if idx == i { ">" } else { " " };
            let _ = writeln!(&mut out, "{marker} {:>4}  expected: {}", idx + 1, line(expected, idx));
            let _ = writeln!(&mut out, "{marker} {:>4}    actual: {}", idx + 1, line(actual, idx));
        }
    }
    let _ = writeln!(
        &mut out,
        "expected {} lines, actual {} lines",
        expected.len(),
        actual.len()
    );
    out
}

/// Compare `dom::debug::outline` of `root` against `expected`, panicking
/// with a first-mismatch report.
pub fn assert_outline(doc: &Document, root: NodeId, expected: &[&str]) {
    let actual = dom::debug::outline(doc, root, 10_000);
    let expected: Vec<String> = expected.iter().map(|s| s.to_string()).collect();
    if actual != expected {
        panic!("outline mismatch\n{}", diff_lines(&expected, &actual));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn diff_points_at_first_mismatch() {
        let report = diff_lines(&lines(&["a", "b", "c"]), &lines(&["a", "x", "c"]));
        assert!(report.contains("first mismatch at line 2"));
        assert!(report.contains(">    2  expected: b"));
        assert!(report.contains(">    2    actual: x"));
    }

    #[test]
    fn diff_reports_missing_lines() {
        let report = diff_lines(&lines(&["a"]), &lines(&["a", "b"]));
        assert!(report.contains("expected: <missing>"));
        assert!(report.contains("expected 1 lines, actual 2 lines"));
    }

    #[test]
    fn call_log_clones_share_calls() {
        let log = CallLog::new();
        let other = log.clone();
        other.push(1);
        log.push(2);
        assert_eq!(log.calls(), vec![1, 2]);
        assert_eq!(other.take(), vec![1, 2]);
        assert!(log.is_empty());
    }

    #[test]
    fn fixtures_pick_ready_state() {
        let (host, _) = test_host();
        assert_eq!(host.ready_state(), ReadyState::Loading);
        let (host, _) = loaded_test_host();
        assert_eq!(host.ready_state(), ReadyState::Interactive);
        assert_eq!(host.document().tag_name(body(&host)), Some("body"));
    }
}
