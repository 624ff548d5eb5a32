//! Tire-service vs general-service split.
//!
//! Both entry points walk an ordered rule list from `RuleSet` for each record
//! and never touch their input.

use crate::core::rules::{RuleSet, TaskRecord, Verdict, evaluate};
use crate::core::table::TaskTable;
use crate::models::{MaintenanceTaskRow, PlanTask, SequenceId, ServiceMode};
use serde::Serialize;
use tracing::debug;

/// The two ordered partitions of a classified table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub tire_service: Vec<SequenceId>,
    pub general: Vec<SequenceId>,
}

impl Classification {
    pub fn select(&self, mode: ServiceMode) -> &[SequenceId] {
        match mode {
            ServiceMode::TireService => &self.tire_service,
            ServiceMode::General => &self.general,
        }
    }
}

/// Per-record outcome, kept for reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifiedTask {
    pub id: SequenceId,
    pub tire_service: bool,
    pub rule: String,
    pub description: String,
    pub component: String,
}

/// Classify a pasted task table. Rows that are not pending are dropped.
pub fn classify(table: &TaskTable, rules: &RuleSet, pending_marker: &str) -> Classification {
    classify_rows(&table.task_rows(), rules, pending_marker)
}

pub fn classify_rows(
    rows: &[MaintenanceTaskRow],
    rules: &RuleSet,
    pending_marker: &str,
) -> Classification {
    let ordered = rules.standard_rules(pending_marker);
    partition(rows.iter().map(|row| {
        let (verdict, rule) = evaluate(&ordered, row);
        (row.index, verdict, rule)
    }))
}

/// Classify maintenance-plan tasks. Every task is pending by construction.
pub fn classify_plan(tasks: &[PlanTask], rules: &RuleSet) -> Classification {
    let ordered = rules.auto_rules();
    partition(tasks.iter().map(|task| {
        let (verdict, rule) = evaluate(&ordered, task);
        (task.no_seq, verdict, rule)
    }))
}

/// Detailed outcome of `classify`, skipping rows that are not pending.
pub fn explain_table(
    table: &TaskTable,
    rules: &RuleSet,
    pending_marker: &str,
) -> Vec<ClassifiedTask> {
    let ordered = rules.standard_rules(pending_marker);
    table
        .task_rows()
        .iter()
        .filter_map(|row| {
            let (verdict, rule) = evaluate(&ordered, row);
            describe(row.index, row, verdict, rule)
        })
        .collect()
}

/// Detailed outcome of `classify_plan`.
pub fn explain_plan(tasks: &[PlanTask], rules: &RuleSet) -> Vec<ClassifiedTask> {
    let ordered = rules.auto_rules();
    tasks
        .iter()
        .filter_map(|task| {
            let (verdict, rule) = evaluate(&ordered, task);
            describe(task.no_seq, task, verdict, rule)
        })
        .collect()
}

fn partition<I>(outcomes: I) -> Classification
where
    I: IntoIterator<Item = (SequenceId, Verdict, &'static str)>,
{
    let mut out = Classification::default();

    for (id, verdict, rule) in outcomes {
        debug!(id, rule, ?verdict, "task classified");

        match verdict {
            Verdict::Tire => out.tire_service.push(id),
            Verdict::General => out.general.push(id),
            Verdict::Skip => {}
        }
    }

    out
}

fn describe<R: TaskRecord>(
    id: SequenceId,
    record: &R,
    verdict: Verdict,
    rule: &str,
) -> Option<ClassifiedTask> {
    use crate::core::rules::Field;

    let tire_service = match verdict {
        Verdict::Skip => return None,
        Verdict::Tire => true,
        Verdict::General => false,
    };

    Some(ClassifiedTask {
        id,
        tire_service,
        rule: rule.to_string(),
        description: record.field(Field::Description).trim().to_string(),
        component: record.field(Field::Component).trim().to_string(),
    })
}
