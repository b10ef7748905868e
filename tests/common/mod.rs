//! Shared helpers for the integration tests.

use lopdf::Document;
use std::cell::RefCell;
use std::rc::Rc;
use vitae::{CvSnapshot, Notifier};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Number of pages in a finished PDF, parsed back with lopdf.
#[allow(dead_code)]
pub fn pdf_page_count(bytes: &[u8]) -> Result<usize, Box<dyn std::error::Error>> {
    Ok(Document::load_mem(bytes)?.get_pages().len())
}

/// The seeded document, as a detached snapshot.
#[allow(dead_code)]
pub fn sample_snapshot() -> CvSnapshot {
    vitae::document::defaults::snapshot()
}

/// A notifier that records every message for later assertions.
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    messages: Rc<RefCell<Vec<String>>>,
}

#[allow(dead_code)]
impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}
