//! Human-readable progress lines.

use std::io::{self, Write};

use pendulum_core::{Reporter, Summary, WindowReport};

/// Writes the run report line by line as the engine progresses.
///
/// ```text
/// STARTING SAMPLE 1
///   Pendulum pass count: 60
///   Pendulum timing: 2.000s
/// ...
///
/// Average over 5 samples: 2.000s
/// ```
///
/// The first write error is kept and returned by [`ConsoleReporter::finish`];
/// later lines are skipped.
#[derive(Debug)]
pub struct ConsoleReporter<W> {
    out: W,
    error: Option<io::Error>,
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out, error: None }
    }

    /// Write a free-form line, for messages outside the engine's run.
    pub fn line(&mut self, text: impl std::fmt::Display) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = writeln!(self.out, "{}", text) {
            self.error = Some(e);
        }
    }

    /// Flush and hand back the writer, or the first write error.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(e) = self.error.take() {
            return Err(e);
        }
        self.out.flush()?;
        Ok(self.out)
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn window_started(&mut self, index: u32) {
        self.line(format_args!("STARTING SAMPLE {}", index));
    }

    fn window_closed(&mut self, report: &WindowReport) {
        self.line(format_args!("  Pendulum pass count: {}", report.pass_count));
        match report.period_estimate() {
            Some(period) => self.line(format_args!("  Pendulum timing: {}", period)),
            None => self.line("  Pendulum swing not detected!"),
        }
    }

    fn finished(&mut self, summary: &Summary) {
        self.line("");
        match summary {
            Summary::Average {
                windows,
                mean_period,
            } => self.line(format_args!("Average over {} samples: {}", windows, mean_period)),
            Summary::Incomplete { .. } => {
                self.line("Some samples did not have swings detected, no summary available.")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pendulum_core::Seconds;

    fn output(reporter: ConsoleReporter<Vec<u8>>) -> String {
        String::from_utf8(reporter.finish().unwrap()).unwrap()
    }

    #[test]
    fn successful_window_lines() {
        let mut reporter = ConsoleReporter::new(Vec::new());
        reporter.window_started(1);
        reporter.window_closed(&WindowReport::new(1, 4));
        assert_eq!(
            output(reporter),
            "STARTING SAMPLE 1\n  Pendulum pass count: 4\n  Pendulum timing: 30.000s\n"
        );
    }

    #[test]
    fn failed_window_lines() {
        let mut reporter = ConsoleReporter::new(Vec::new());
        reporter.window_closed(&WindowReport::new(2, 0));
        assert_eq!(
            output(reporter),
            "  Pendulum pass count: 0\n  Pendulum swing not detected!\n"
        );
    }

    #[test]
    fn average_summary() {
        let mut reporter = ConsoleReporter::new(Vec::new());
        reporter.finished(&Summary::Average {
            windows: 5,
            mean_period: Seconds::new(2.0),
        });
        assert_eq!(output(reporter), "\nAverage over 5 samples: 2.000s\n");
    }

    #[test]
    fn incomplete_summary() {
        let mut reporter = ConsoleReporter::new(Vec::new());
        reporter.finished(&Summary::Incomplete {
            windows: 5,
            failed_windows: 1,
        });
        let text = output(reporter);
        assert!(text.contains("no summary available"));
        assert!(!text.contains("Average"));
    }

    #[derive(Debug)]
    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn first_write_error_is_returned() {
        let mut reporter = ConsoleReporter::new(Broken);
        reporter.window_started(1);
        reporter.window_started(2);
        let err = reporter.finish().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
