use super::SequenceId;

/// A row of a pasted maintenance-task table, viewed through a detected
/// layout. `cells` keeps every raw column for passthrough.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaintenanceTaskRow {
    /// 1-based position of the row in the pasted text.
    pub index: SequenceId,
    pub status: String,
    pub description: String,
    pub component: String,
    pub cells: Vec<String>,
}

