use super::SequenceId;
use serde::Serialize;

/// Literal tab run between the service order and the sequence id.
const ORDER_GAP: &str = "\t\t\t";
/// Literal tab run between the sequence id and the start date.
const SEQUENCE_GAP: &str = "\t\t\t\t\t\t\t\t\t\t";

/// One time-sliced work-log entry, ready to be pasted into the downstream
/// spreadsheet.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct WorkLogRow {
    pub service_order: String,
    pub sequence_id: SequenceId,
    pub start_date: String,
    pub start_time: String,
    pub end_date: String,
    pub end_time: String,
    pub duration_hours: String,
}

impl WorkLogRow {
    /// Tab-structured line, newline terminated. The spacing is fixed by the
    /// paste target and must not change.
    pub fn to_line(&self) -> String {
        format!(
            "{}{ORDER_GAP}{}{SEQUENCE_GAP}{}\t{}\t{}\t{}\t{}\n",
            self.service_order,
            self.sequence_id,
            self.start_date,
            self.start_time,
            self.end_date,
            self.end_time,
            self.duration_hours,
        )
    }

    /// Field values in header order (xlsx / table output).
    pub(crate) fn to_cells(&self) -> Vec<String> {
        vec![
            self.service_order.clone(),
            self.sequence_id.to_string(),
            self.start_date.clone(),
            self.start_time.clone(),
            self.end_date.clone(),
            self.end_time.clone(),
            self.duration_hours.clone(),
        ]
    }
}

pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "service_order",
        "sequence_id",
        "start_date",
        "start_time",
        "end_date",
        "end_time",
        "duration_hours",
    ]
}

/// Concatenate rendered rows.
pub fn render_rows(rows: &[WorkLogRow]) -> String {
    rows.iter().map(WorkLogRow::to_line).collect()
}
