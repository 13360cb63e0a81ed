//! The logging collaborator every wrapper reports through.

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

/// One reportable occurrence around an invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// About to call `operation`.
    Entering { operation: String },
    /// `operation` returned after `elapsed` wall-clock time.
    Timed {
        operation: String,
        elapsed: Duration,
    },
    /// `operation` returned.
    Exiting { operation: String },
    /// The pipeline finished with `count` primes.
    Finished { count: u64 },
}

impl Event {
    /// Name of the operation the event refers to, if any.
    #[must_use]
    pub fn operation(&self) -> Option<&str> {
        match self {
            Self::Entering { operation }
            | Self::Timed { operation, .. }
            | Self::Exiting { operation } => Some(operation),
            Self::Finished { .. } => None,
        }
    }

    /// Short tag for the event kind, used in structured log fields.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Entering { .. } => "entering",
            Self::Timed { .. } => "timed",
            Self::Exiting { .. } => "exiting",
            Self::Finished { .. } => "finished",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Entering { operation } => write!(f, "Calling {operation}"),
            Self::Timed { operation, elapsed } => write!(
                f,
                "Execution of {operation} took {:.2} seconds.",
                elapsed.as_secs_f64()
            ),
            Self::Exiting { operation } => write!(f, "Finished calling {operation}"),
            Self::Finished { count } => write!(f, "Found {count} prime numbers."),
        }
    }
}

/// Sink for [`Event`]s.
pub trait Reporter: Send + Sync {
    fn report(&self, event: Event);
}

impl<R: Reporter + ?Sized> Reporter for &R {
    fn report(&self, event: Event) {
        (**self).report(event);
    }
}

impl<R: Reporter + ?Sized> Reporter for Arc<R> {
    fn report(&self, event: Event) {
        (**self).report(event);
    }
}

/// Emits every event at INFO through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn report(&self, event: Event) {
        match &event {
            Event::Timed { operation, elapsed } => tracing::info!(
                kind = event.kind(),
                operation = %operation,
                elapsed_ms = elapsed.as_secs_f64() * 1000.0,
                "{event}"
            ),
            Event::Entering { operation } | Event::Exiting { operation } => {
                tracing::info!(kind = event.kind(), operation = %operation, "{event}");
            }
            Event::Finished { count } => {
                tracing::info!(kind = event.kind(), count, "{event}");
            }
        }
    }
}

/// Keeps events in memory in the order they were reported.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    events: Mutex<Vec<Event>>,
}

impl RecordingReporter {
    #[must_use]
    pub fn events(&self) -> Vec<Event> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Rendered message text of every recorded event.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.events().iter().map(ToString::to_string).collect()
    }
}

impl Reporter for RecordingReporter {
    fn report(&self, event: Event) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event);
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use pretty_assertions::assert_eq;

    use super::*;

    fn entering(name: &str) -> Event {
        Event::Entering {
            operation: name.to_string(),
        }
    }

    #[test]
    fn renders_messages() {
        assert_eq!(entering("count_primes").to_string(), "Calling count_primes");
        assert_eq!(
            Event::Timed {
                operation: "count_primes".to_string(),
                elapsed: Duration::from_millis(1_234),
            }
            .to_string(),
            "Execution of count_primes took 1.23 seconds."
        );
        assert_eq!(
            Event::Exiting {
                operation: "count_primes".to_string()
            }
            .to_string(),
            "Finished calling count_primes"
        );
        assert_eq!(
            Event::Finished { count: 9592 }.to_string(),
            "Found 9592 prime numbers."
        );
    }

    #[test]
    fn operation_name_is_exposed() {
        assert_eq!(entering("x").operation(), Some("x"));
        assert_eq!(Event::Finished { count: 1 }.operation(), None);
    }

    #[test]
    fn recording_reporter_keeps_order() {
        let reporter = RecordingReporter::default();
        reporter.report(entering("a"));
        reporter.report(Event::Finished { count: 3 });

        assert_eq!(
            reporter.messages(),
            vec!["Calling a".to_string(), "Found 3 prime numbers.".to_string()]
        );
    }

    #[test]
    fn shared_reporter_forwards() {
        let reporter = Arc::new(RecordingReporter::default());
        let handle = Arc::clone(&reporter);
        handle.report(entering("shared"));
        assert_eq!(reporter.events(), vec![entering("shared")]);
    }

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl io::Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn tracing_reporter_logs_at_info() {
        let buf = SharedBuf::default();
        let writer = buf.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::INFO)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            TracingReporter.report(entering("count_primes"));
            TracingReporter.report(Event::Finished { count: 25 });
        });

        let output = String::from_utf8(buf.0.lock().unwrap().clone()).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2, "{output}");
        assert!(lines[0].contains("INFO"), "{output}");
        assert!(lines[0].contains("Calling count_primes"), "{output}");
        assert!(lines[0].contains("operation=count_primes"), "{output}");
        assert!(lines[1].contains("Found 25 prime numbers."), "{output}");
        assert!(lines[1].contains("count=25"), "{output}");
    }
}
