use nac_dashboard::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock DiagnosticReporter for testing that captures messages by severity
#[derive(Default, Clone)]
pub struct MockDiagnosticReporter {
    pub messages: Arc<Mutex<Vec<String>>>,
}

impl MockDiagnosticReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.with_prefix("Warning: ")
    }

    pub fn notices(&self) -> Vec<String> {
        self.with_prefix("Notice: ")
    }

    fn with_prefix(&self, prefix: &str) -> Vec<String> {
        self.get_messages()
            .into_iter()
            .filter_map(|m| m.strip_prefix(prefix).map(str::to_string))
            .collect()
    }

    fn push(&self, message: String) {
        self.messages.lock().unwrap().push(message);
    }
}

impl DiagnosticReporter for MockDiagnosticReporter {
    fn report(&self, message: &str) {
        self.push(message.to_string());
    }

    fn report_warning(&self, message: &str) {
        self.push(format!("Warning: {}", message));
    }

    fn report_notice(&self, message: &str) {
        self.push(format!("Notice: {}", message));
    }

    fn report_completion(&self, message: &str) {
        self.push(format!("Completed: {}", message));
    }
}
