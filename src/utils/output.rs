use crate::domain::ports::Reporter;

/// Writes every report line straight to stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleReporter;

impl ConsoleReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Reporter for ConsoleReporter {
    fn line(&mut self, text: &str) {
        println!("{}", text);
    }
}

/// Keeps report lines in memory so callers can inspect them afterwards.
#[derive(Debug, Clone, Default)]
pub struct MemoryReporter {
    lines: Vec<String>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.contains(needle))
    }

    pub fn take(&mut self) -> Vec<String> {
        std::mem::take(&mut self.lines)
    }
}

impl Reporter for MemoryReporter {
    fn line(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_reporter_collects_lines() {
        let mut reporter = MemoryReporter::new();
        reporter.line("Itinerary for Travel Package 1:");
        reporter.line("- Destination 1:");

        assert_eq!(reporter.lines().len(), 2);
        assert!(reporter.contains("Destination 1"));

        let taken = reporter.take();
        assert_eq!(taken.len(), 2);
        assert!(reporter.lines().is_empty());
    }

    #[test]
    fn test_reporter_through_mutable_reference() {
        fn emit<R: Reporter>(mut reporter: R) {
            reporter.line("Passenger 1 added to Travel Package 1");
        }

        let mut reporter = MemoryReporter::new();
        emit(&mut reporter);
        assert!(reporter.contains("added to"));
    }
}
