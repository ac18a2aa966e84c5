/// One repair the parser performed, for callers that want to know what was
/// changed. `position` is the byte offset in the *input* at which the repair
/// was triggered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepairLogEntry {
    pub position: usize,
    pub message: &'static str,
}
