//! Progress events reported to the caller after each network operation.

use std::fmt;

/// Which network operation a [`ProgressEvent`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// The single HTML page fetch at the start of a run.
    Page,
    /// One image resource fetch.
    Image,
}

impl Operation {
    /// Human-readable operation label.
    pub fn label(&self) -> &'static str {
        match self {
            Operation::Page => "GET page",
            Operation::Image => "GET jpg",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One unit of status, emitted synchronously after every network
/// operation a run performs: one for the page, one per resource attempt,
/// in strict fetch order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressEvent {
    /// The operation that completed.
    pub operation: Operation,
    /// Status code obtained from the server, or `None` if the connection
    /// never completed.
    pub status: Option<u16>,
    /// Value of the `Connection` response header, when one was received.
    pub connection: Option<String>,
}

impl ProgressEvent {
    /// Create an event for a completed or failed network operation.
    pub fn new(operation: Operation, status: Option<u16>, connection: Option<String>) -> Self {
        Self {
            operation,
            status,
            connection,
        }
    }
}

impl fmt::Display for ProgressEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Some(code) => write!(f, "{} -> {}", self.operation, code),
            None => write!(f, "{} -> no response", self.operation),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_labels() {
        assert_eq!(Operation::Page.label(), "GET page");
        assert_eq!(Operation::Image.label(), "GET jpg");
    }

    #[test]
    fn test_event_display() {
        let ok = ProgressEvent::new(Operation::Image, Some(200), Some("close".into()));
        assert_eq!(ok.to_string(), "GET jpg -> 200");
        let dead = ProgressEvent::new(Operation::Page, None, None);
        assert_eq!(dead.to_string(), "GET page -> no response");
    }
}
