use crate::ports::outbound::DiagnosticReporter;
use owo_colors::OwoColorize;

/// StderrDiagnosticReporter adapter writing diagnostics to stderr
///
/// Keeps stdout free for the rendered dashboard. Warnings are yellow,
/// notices cyan, completions green; colors are dropped when `NO_COLOR` is set.
#[derive(Debug, Clone, Copy)]
pub struct StderrDiagnosticReporter {
    quiet: bool,
    color: bool,
}

impl StderrDiagnosticReporter {
    pub fn new() -> Self {
        Self {
            quiet: false,
            color: std::env::var_os("NO_COLOR").is_none(),
        }
    }

    /// Suppresses informational lines; warnings and notices still print
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    fn warning_line(&self, message: &str) -> String {
        if self.color {
            format!("{} {}", "⚠️  Warning:".yellow().bold(), message)
        } else {
            format!("⚠️  Warning: {}", message)
        }
    }

    fn notice_line(&self, message: &str) -> String {
        if self.color {
            format!("{} {}", "ℹ️  Notice:".cyan().bold(), message)
        } else {
            format!("ℹ️  Notice: {}", message)
        }
    }

    fn completion_line(&self, message: &str) -> String {
        if self.color {
            format!("✅ {}", message.green())
        } else {
            format!("✅ {}", message)
        }
    }
}

impl Default for StderrDiagnosticReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagnosticReporter for StderrDiagnosticReporter {
    fn report(&self, message: &str) {
        if !self.quiet {
            eprintln!("{}", message);
        }
    }

    fn report_warning(&self, message: &str) {
        eprintln!("{}", self.warning_line(message));
    }

    fn report_notice(&self, message: &str) {
        eprintln!("{}", self.notice_line(message));
    }

    fn report_completion(&self, message: &str) {
        if !self.quiet {
            eprintln!("{}", self.completion_line(message));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> StderrDiagnosticReporter {
        StderrDiagnosticReporter {
            quiet: false,
            color: false,
        }
    }

    #[test]
    fn test_plain_lines() {
        let reporter = plain();
        assert_eq!(
            reporter.warning_line("region skipped"),
            "⚠️  Warning: region skipped"
        );
        assert_eq!(reporter.notice_line("clamped"), "ℹ️  Notice: clamped");
        assert_eq!(reporter.completion_line("done"), "✅ done");
    }

    #[test]
    fn test_colored_lines_keep_message() {
        let reporter = StderrDiagnosticReporter {
            quiet: false,
            color: true,
        };
        let line = reporter.warning_line("region skipped");
        assert!(line.contains("region skipped"));
        assert!(line.contains("\u{1b}["));
    }

    #[test]
    fn test_reporter_does_not_panic() {
        let reporter = StderrDiagnosticReporter::default().quiet(true);
        reporter.report("info");
        reporter.report_warning("warning");
        reporter.report_notice("notice");
        reporter.report_completion("done");
    }
}
