use super::SearchMonitor;

/// A monitor that ignores every event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NoOpMonitor;

impl NoOpMonitor {
    pub fn new() -> Self {
        Self
    }
}

impl SearchMonitor for NoOpMonitor {
    fn name(&self) -> &str {
        "NoOpMonitor"
    }
}
