//! Pasted maintenance-task tables.
//!
//! Rows arrive tab-separated with no header, copied straight out of the
//! maintenance system. Two column layouts exist; which one applies is decided
//! once per table by `TableLayout::detect`.

use crate::models::{MaintenanceTaskRow, SequenceId};
use tracing::debug;

/// Column that is blank on every row in the sparse layout.
pub const PROBE_COLUMN: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableLayout {
    /// status=0, description=6, component=10
    Standard,
    /// An extra blank column shifts the text: status=0, description=8, component=12
    Sparse,
}

impl TableLayout {
    pub fn status_column(&self) -> usize {
        0
    }

    pub fn description_column(&self) -> usize {
        match self {
            TableLayout::Standard => 6,
            TableLayout::Sparse => 8,
        }
    }

    pub fn component_column(&self) -> usize {
        match self {
            TableLayout::Standard => 10,
            TableLayout::Sparse => 12,
        }
    }

    /// Sparse when the probe column exists and is blank on every row.
    pub fn detect(rows: &[Vec<String>]) -> Self {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        if width <= PROBE_COLUMN {
            return TableLayout::Standard;
        }

        let probe_blank = rows.iter().all(|row| {
            row.get(PROBE_COLUMN)
                .map(|cell| cell.trim().is_empty())
                .unwrap_or(true)
        });

        if probe_blank {
            TableLayout::Sparse
        } else {
            TableLayout::Standard
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TableLayout::Standard => "standard",
            TableLayout::Sparse => "sparse",
        }
    }
}

/// Raw cells of a pasted table. Read-only once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskTable {
    rows: Vec<Vec<String>>,
}

impl TaskTable {
    /// Split text into tab-separated rows. Blank lines are skipped and do not
    /// consume a row number.
    pub fn parse(text: &str) -> Self {
        let rows = text
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| line.split('\t').map(str::to_string).collect())
            .collect();

        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Widest row, in columns.
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn layout(&self) -> TableLayout {
        TableLayout::detect(&self.rows)
    }

    /// Typed view of the rows under the detected layout.
    ///
    /// A table too narrow to hold the layout's text columns yields no rows.
    /// Short rows inside a wide enough table get empty cells.
    pub fn task_rows(&self) -> Vec<MaintenanceTaskRow> {
        let layout = self.layout();
        let width = self.width();

        debug!(layout = layout.as_str(), rows = self.len(), width, "task table layout");

        if width <= layout.component_column() {
            debug!("table too narrow for the {} layout", layout.as_str());
            return Vec::new();
        }

        self.rows
            .iter()
            .enumerate()
            .map(|(i, cells)| MaintenanceTaskRow {
                index: (i + 1) as SequenceId,
                status: cell(cells, layout.status_column()),
                description: cell(cells, layout.description_column()),
                component: cell(cells, layout.component_column()),
                cells: cells.clone(),
            })
            .collect()
    }
}

fn cell(cells: &[String], col: usize) -> String {
    cells.get(col).cloned().unwrap_or_default()
}
