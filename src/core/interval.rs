//! Interval expressions: the several ways planners write "which sequences".
//!
//! - `1-5`                       → range
//! - `1 2 3`, `1\n4-6\n9`        → list of numbers and sub-ranges
//! - tab-separated pasted rows   → task table, split by the classifier
//!
//! Recognizers run in that order and the first structural match wins.

use crate::core::classifier::classify;
use crate::core::rules::RuleSet;
use crate::core::table::TaskTable;
use crate::errors::{AppError, AppResult};
use crate::models::{SequenceId, ServiceMode};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// More sequences than minutes in a day can never get a one-minute slot.
/// Bounds standalone expansion; work-log generation checks the real window first.
pub const MAX_SEQUENCES: usize = 24 * 60;

static RANGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\s*-\s*(\d+)$").expect("valid range pattern"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListToken {
    Single(SequenceId),
    Range(SequenceId, SequenceId),
}

impl ListToken {
    fn parse(token: &str) -> Option<Self> {
        match token.split_once('-') {
            Some((a, b)) => Some(ListToken::Range(a.parse().ok()?, b.parse().ok()?)),
            None => token.parse().ok().map(ListToken::Single),
        }
    }

    fn count(&self) -> usize {
        match *self {
            ListToken::Single(_) => 1,
            ListToken::Range(a, b) => range_len(a, b),
        }
    }

    fn expand_into(&self, out: &mut Vec<SequenceId>) {
        match *self {
            ListToken::Single(id) => out.push(id),
            ListToken::Range(a, b) => out.extend(a..=b),
        }
    }
}

/// A recognized interval expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntervalExpr {
    Range { start: SequenceId, end: SequenceId },
    List(Vec<ListToken>),
    Table(TaskTable),
}

impl IntervalExpr {
    /// Pick the variant for `raw`. Double quotes are dropped first.
    pub fn recognize(raw: &str) -> AppResult<Self> {
        let text = raw.replace('"', "");
        let trimmed = text.trim();

        if trimmed.is_empty() {
            return Err(AppError::MissingField("sequence interval"));
        }

        if let Some(expr) = recognize_range(trimmed) {
            return Ok(expr);
        }
        if let Some(expr) = recognize_list(trimmed) {
            return Ok(expr);
        }
        if let Some(expr) = recognize_table(&text) {
            return Ok(expr);
        }

        Err(AppError::ParseFailure(format!(
            "'{}' is not a range (1-5), a list (1 2 4-6) or a pasted task table",
            trimmed
        )))
    }

    /// How many ids a range or list expands to, computed without expanding.
    /// Tables only know their size after classification: `None`.
    pub fn planned_len(&self) -> Option<usize> {
        match self {
            IntervalExpr::Range { start, end } => Some(range_len(*start, *end)),
            IntervalExpr::List(tokens) => Some(tokens.iter().map(ListToken::count).sum()),
            IntervalExpr::Table(_) => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            IntervalExpr::Range { .. } => "range",
            IntervalExpr::List(_) => "list",
            IntervalExpr::Table(_) => "table",
        }
    }

    /// Expand into ordered sequence identifiers. `mode` picks the partition
    /// when the expression is a task table.
    pub fn sequences(
        &self,
        mode: ServiceMode,
        rules: &RuleSet,
        pending_marker: &str,
    ) -> AppResult<Vec<SequenceId>> {
        match self {
            IntervalExpr::Range { start, end } => {
                guard_size(range_len(*start, *end))?;
                Ok((*start..=*end).collect())
            }
            IntervalExpr::List(tokens) => {
                let count: usize = tokens.iter().map(ListToken::count).sum();
                guard_size(count)?;

                let mut out = Vec::with_capacity(count);
                for token in tokens {
                    token.expand_into(&mut out);
                }
                Ok(out)
            }
            IntervalExpr::Table(table) => {
                let split = classify(table, rules, pending_marker);
                debug!(
                    tire = split.tire_service.len(),
                    general = split.general.len(),
                    "pasted table classified"
                );

                if mode.is_tire_service() && split.tire_service.is_empty() {
                    return Err(AppError::EmptyResult(
                        "this service order has no tire-service sequences".into(),
                    ));
                }

                Ok(split.select(mode).to_vec())
            }
        }
    }
}

/// Parse `raw` into sequence identifiers.
///
/// Fails with `MissingField` on blank input, `ParseFailure` when no variant
/// matches and `EmptyResult` when the expression expands to nothing.
pub fn parse_interval(
    raw: &str,
    mode: ServiceMode,
    rules: &RuleSet,
    pending_marker: &str,
) -> AppResult<Vec<SequenceId>> {
    let expr = IntervalExpr::recognize(raw)?;
    debug!(kind = expr.kind(), "interval recognized");

    expr.expand(mode, rules, pending_marker)
}

impl IntervalExpr {
    /// `sequences`, rejecting an empty result.
    pub fn expand(
        &self,
        mode: ServiceMode,
        rules: &RuleSet,
        pending_marker: &str,
    ) -> AppResult<Vec<SequenceId>> {
        let ids = self.sequences(mode, rules, pending_marker)?;
        if ids.is_empty() {
            return Err(AppError::EmptyResult(
                "no valid sequence found in the interval".into(),
            ));
        }
        Ok(ids)
    }
}

fn recognize_range(text: &str) -> Option<IntervalExpr> {
    let caps = RANGE_RE.captures(text)?;
    let start = caps.get(1)?.as_str().parse().ok()?;
    let end = caps.get(2)?.as_str().parse().ok()?;
    Some(IntervalExpr::Range { start, end })
}

/// A list needs an actual separator: one bare token is not a list.
fn recognize_list(text: &str) -> Option<IntervalExpr> {
    if !text.contains(' ') && !text.contains('\n') {
        return None;
    }

    let tokens = text
        .split_whitespace()
        .map(ListToken::parse)
        .collect::<Option<Vec<_>>>()?;

    Some(IntervalExpr::List(tokens))
}

fn recognize_table(text: &str) -> Option<IntervalExpr> {
    if !text.contains('\t') {
        return None;
    }
    Some(IntervalExpr::Table(TaskTable::parse(text)))
}

fn range_len(start: SequenceId, end: SequenceId) -> usize {
    if end < start {
        0
    } else {
        (end - start) as usize + 1
    }
}

fn guard_size(count: usize) -> AppResult<()> {
    if count > MAX_SEQUENCES {
        return Err(AppError::TooShort {
            minutes: MAX_SEQUENCES as i64,
            sequences: count,
        });
    }
    Ok(())
}
