//! Reporter sinks that receive diagnostics from producers.
//!
//! A producer holds a `&dyn Reporter` and hands it freshly built catalog
//! values; the installed implementation decides the consequence (collect,
//! forward, discard). Reporting is accumulative and always succeeds from the
//! producer's point of view: analysis continues after every report, and a
//! sink that can itself fail (e.g., a full output buffer) keeps that failure
//! to itself.

use crate::catalog::Diag;
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// The sink abstraction diagnostics are delivered through.
///
/// Dispatch is a single operation over the closed [`Diag`] sum type;
/// implementations that act on specific conditions match on the cases they
/// care about and ignore the rest, so adding a catalog entry never breaks an
/// existing reporter.
pub trait Reporter {
    /// Delivers one freshly built diagnostic to this sink.
    fn report(&self, diag: Diag);
}

/// A reporter that discards every diagnostic.
///
/// Stateless and immutable, so the shared [`NULL_REPORTER`] instance can be
/// handed out freely without synchronization or teardown.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn report(&self, _diag: Diag) {}
}

/// The process-wide shared [`NullReporter`] instance.
pub static NULL_REPORTER: NullReporter = NullReporter;

/// An accumulating sink that stores every reported diagnostic.
///
/// The error count is tracked atomically for fast `has_errors` checks
/// without locking the diagnostic vector.
pub struct CollectingReporter {
    diagnostics: Mutex<Vec<Diag>>,
    error_count: AtomicUsize,
}

impl CollectingReporter {
    /// Creates a new empty collecting reporter.
    pub fn new() -> Self {
        Self {
            diagnostics: Mutex::new(Vec::new()),
            error_count: AtomicUsize::new(0),
        }
    }

    /// Returns `true` if any error-severity diagnostics have been reported.
    pub fn has_errors(&self) -> bool {
        self.error_count.load(Ordering::Relaxed) > 0
    }

    /// Returns the number of error-severity diagnostics reported so far.
    pub fn error_count(&self) -> usize {
        self.error_count.load(Ordering::Relaxed)
    }

    /// Takes all accumulated diagnostics, leaving the reporter empty.
    pub fn take_all(&self) -> Vec<Diag> {
        let mut diagnostics = self.diagnostics.lock().unwrap();
        std::mem::take(&mut *diagnostics)
    }

    /// Returns a snapshot of all accumulated diagnostics without draining.
    pub fn diagnostics(&self) -> Vec<Diag> {
        let diagnostics = self.diagnostics.lock().unwrap();
        diagnostics.clone()
    }
}

impl Default for CollectingReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for CollectingReporter {
    fn report(&self, diag: Diag) {
        if diag.severity().is_error() {
            self.error_count.fetch_add(1, Ordering::Relaxed);
        }
        let mut diagnostics = self.diagnostics.lock().unwrap();
        diagnostics.push(diag);
    }
}

/// A reporter that fans every diagnostic out to several targets, in order.
///
/// Composition happens entirely at this layer; neither the catalog nor the
/// [`Reporter`] contract knows about it.
pub struct MultiReporter<'a> {
    targets: Vec<&'a dyn Reporter>,
}

impl<'a> MultiReporter<'a> {
    /// Creates a fan-out reporter over the given targets.
    pub fn new(targets: Vec<&'a dyn Reporter>) -> Self {
        Self { targets }
    }
}

impl Reporter for MultiReporter<'_> {
    fn report(&self, diag: Diag) {
        for target in &self.targets {
            target.report(diag);
        }
    }
}

/// A reporter that suppresses diagnostics by short code before forwarding
/// the rest to an inner sink.
///
/// The suppression set typically comes from the `allow` list in the project
/// configuration.
pub struct FilterReporter<R> {
    suppressed: HashSet<String>,
    inner: R,
}

impl<R: Reporter> FilterReporter<R> {
    /// Creates a filter suppressing the given short codes.
    pub fn new(suppressed: HashSet<String>, inner: R) -> Self {
        Self { suppressed, inner }
    }

    /// Returns the wrapped sink.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Reporter> Reporter for FilterReporter<R> {
    fn report(&self, diag: Diag) {
        if !self.suppressed.contains(diag.code()) {
            self.inner.report(diag);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{
        AssignmentToUndeclaredVariable, MissingSemicolonAfterStatement, UnclosedBlockComment,
        UnmatchedParenthesis,
    };
    use sift_source::{FileId, Identifier, Span};

    fn sample_error() -> Diag {
        MissingSemicolonAfterStatement {
            site: Span::new(FileId::from_raw(0), 3, 4),
        }
        .into()
    }

    fn sample_warning() -> Diag {
        AssignmentToUndeclaredVariable {
            assignment: Identifier::new(Span::new(FileId::from_raw(0), 0, 3)),
        }
        .into()
    }

    #[test]
    fn null_reporter_is_inert() {
        NULL_REPORTER.report(sample_error());
        NULL_REPORTER.report(sample_warning());
        NULL_REPORTER.report(
            UnclosedBlockComment {
                comment_open: Span::new(FileId::from_raw(0), 0, 2),
            }
            .into(),
        );
        // Stateless: nothing to observe, nothing to assert beyond "no panic".
    }

    #[test]
    fn collecting_reporter_accumulates() {
        let reporter = CollectingReporter::new();
        assert!(!reporter.has_errors());
        reporter.report(sample_error());
        reporter.report(sample_warning());
        assert!(reporter.has_errors());
        assert_eq!(reporter.error_count(), 1);
        assert_eq!(reporter.diagnostics().len(), 2);
    }

    #[test]
    fn take_all_drains() {
        let reporter = CollectingReporter::new();
        reporter.report(sample_error());
        let all = reporter.take_all();
        assert_eq!(all.len(), 1);
        assert!(reporter.take_all().is_empty());
        // Error count is not reset by take_all.
        assert_eq!(reporter.error_count(), 1);
    }

    #[test]
    fn reporting_preserves_order() {
        let reporter = CollectingReporter::new();
        reporter.report(sample_warning());
        reporter.report(sample_error());
        let all = reporter.take_all();
        assert_eq!(all[0].code(), "E059");
        assert_eq!(all[1].code(), "E027");
    }

    #[test]
    fn multi_reporter_fans_out() {
        let first = CollectingReporter::new();
        let second = CollectingReporter::new();
        let fan_out = MultiReporter::new(vec![&first, &second]);
        fan_out.report(sample_error());
        assert_eq!(first.diagnostics().len(), 1);
        assert_eq!(second.diagnostics().len(), 1);
    }

    #[test]
    fn filter_reporter_suppresses_by_code() {
        let suppressed: HashSet<String> = ["E027".to_string()].into();
        let filter = FilterReporter::new(suppressed, CollectingReporter::new());
        filter.report(sample_error()); // E027: suppressed
        filter.report(sample_warning()); // E059: forwarded
        filter.report(
            UnmatchedParenthesis {
                site: Span::new(FileId::from_raw(0), 9, 10),
            }
            .into(),
        );
        let inner = filter.into_inner();
        let codes: Vec<&str> = inner.diagnostics().iter().map(Diag::code).collect();
        assert_eq!(codes, ["E059", "E056"]);
    }

    #[test]
    fn thread_safety() {
        use std::sync::Arc;
        use std::thread;

        let reporter = Arc::new(CollectingReporter::new());
        let mut handles = Vec::new();

        for _ in 0..10 {
            let reporter = Arc::clone(&reporter);
            handles.push(thread::spawn(move || {
                for _ in 0..100 {
                    reporter.report(sample_error());
                }
            }));
        }

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(reporter.error_count(), 1000);
        assert_eq!(reporter.diagnostics().len(), 1000);
    }
}
