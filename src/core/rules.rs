//! Tire-service rule table.
//!
//! Keyword lists are data (`RuleSet`, loaded from the configuration file);
//! precedence is code: `standard_rules` and `auto_rules` build the ordered
//! rule lists that the classifier walks with first-match-wins semantics.

use crate::models::{MaintenanceTaskRow, PlanTask};
use serde::{Deserialize, Serialize};

/// Current shape of the rule table. Bump when a key is added.
pub const RULES_VERSION: u32 = 3;

/// Keys of the `rules` mapping, in file order.
pub const RULE_KEYS: &[&str] = &[
    "version",
    "borracharia",
    "tire_components",
    "specific_integrity",
    "tire_keywords",
    "exclusions",
    "generic_integrity",
    "pneumatic",
    "auto_specific_integrity",
    "auto_tire_keywords",
    "auto_generic_integrity",
    "auto_spacer",
];

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn default_version() -> u32 {
    RULES_VERSION
}
fn default_borracharia() -> Vec<String> {
    strings(&["borracharia"])
}
fn default_tire_components() -> Vec<String> {
    strings(&["Roda", "Pneu"])
}
fn default_specific_integrity() -> Vec<String> {
    strings(&["verificar a integridade (trincas"])
}
fn default_tire_keywords() -> Vec<String> {
    strings(&["pneus", "pneu", "verificar torque das porcas das rodas"])
}
fn default_exclusions() -> Vec<String> {
    strings(&[
        "suspensões",
        "sistema de freio",
        "verificar guias",
        "verificar porca e parafuso das rodas",
        "quando houver espaçador, retirar rodas",
    ])
}
fn default_generic_integrity() -> Vec<String> {
    strings(&["verificar a integridade"])
}
fn default_pneumatic() -> Vec<String> {
    strings(&["pneum"])
}
fn default_auto_specific_integrity() -> Vec<String> {
    strings(&[
        "verificar a integridade (trincas, desgastes acentuados, danos críticos) dos espelhos da roda",
        "verificar integridade (trincas, desgastes acentuados, danos críticos) dos espelhos da roda",
    ])
}
fn default_auto_tire_keywords() -> Vec<String> {
    strings(&["pneus", "pneu"])
}
fn default_auto_generic_integrity() -> Vec<String> {
    strings(&["verificar integridade", "verificar a integridade"])
}
fn default_auto_spacer() -> Vec<String> {
    strings(&["quando houver espaçador, retirar rodas"])
}

/// Versioned keyword table for the tire-service classifier.
///
/// Text matches are case-insensitive substrings, except `tire_components`
/// which is an exact match on the trimmed component name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default = "default_borracharia")]
    pub borracharia: Vec<String>,
    #[serde(default = "default_tire_components")]
    pub tire_components: Vec<String>,
    #[serde(default = "default_specific_integrity")]
    pub specific_integrity: Vec<String>,
    #[serde(default = "default_tire_keywords")]
    pub tire_keywords: Vec<String>,
    #[serde(default = "default_exclusions")]
    pub exclusions: Vec<String>,
    #[serde(default = "default_generic_integrity")]
    pub generic_integrity: Vec<String>,
    #[serde(default = "default_pneumatic")]
    pub pneumatic: Vec<String>,
    #[serde(default = "default_auto_specific_integrity")]
    pub auto_specific_integrity: Vec<String>,
    #[serde(default = "default_auto_tire_keywords")]
    pub auto_tire_keywords: Vec<String>,
    #[serde(default = "default_auto_generic_integrity")]
    pub auto_generic_integrity: Vec<String>,
    #[serde(default = "default_auto_spacer")]
    pub auto_spacer: Vec<String>,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            version: default_version(),
            borracharia: default_borracharia(),
            tire_components: default_tire_components(),
            specific_integrity: default_specific_integrity(),
            tire_keywords: default_tire_keywords(),
            exclusions: default_exclusions(),
            generic_integrity: default_generic_integrity(),
            pneumatic: default_pneumatic(),
            auto_specific_integrity: default_auto_specific_integrity(),
            auto_tire_keywords: default_auto_tire_keywords(),
            auto_generic_integrity: default_auto_generic_integrity(),
            auto_spacer: default_auto_spacer(),
        }
    }
}

/// Outcome of a rule hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Row is not pending: dropped from both partitions.
    Skip,
    Tire,
    General,
}

/// Logical column a condition reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Status,
    Description,
    Component,
}

/// Anything the rule engine can classify.
pub trait TaskRecord {
    fn field(&self, field: Field) -> &str;
}

impl TaskRecord for MaintenanceTaskRow {
    fn field(&self, field: Field) -> &str {
        match field {
            Field::Status => &self.status,
            Field::Description => &self.description,
            Field::Component => &self.component,
        }
    }
}

/// Plan tasks carry no status column: every task is pending.
impl TaskRecord for PlanTask {
    fn field(&self, field: Field) -> &str {
        match field {
            Field::Status => "",
            Field::Description => &self.de_tarefa,
            Field::Component => &self.de_sub_sist,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    Always,
    /// Case-insensitive substring match against any needle (stored lowercase).
    Contains(Field, Vec<String>),
    /// Exact match of the trimmed value against any candidate.
    OneOf(Field, Vec<String>),
    Not(Box<Condition>),
    All(Vec<Condition>),
}

impl Condition {
    pub fn contains(field: Field, needles: &[String]) -> Self {
        Condition::Contains(field, needles.iter().map(|n| n.to_lowercase()).collect())
    }

    pub fn one_of(field: Field, values: &[String]) -> Self {
        Condition::OneOf(field, values.iter().map(|v| v.trim().to_string()).collect())
    }

    pub fn not(inner: Condition) -> Self {
        Condition::Not(Box::new(inner))
    }

    pub fn matches<R: TaskRecord>(&self, record: &R) -> bool {
        match self {
            Condition::Always => true,
            Condition::Contains(field, needles) => {
                let haystack = record.field(*field).to_lowercase();
                needles
                    .iter()
                    .any(|n| !n.is_empty() && haystack.contains(n.as_str()))
            }
            Condition::OneOf(field, values) => {
                let value = record.field(*field).trim();
                values.iter().any(|v| v == value)
            }
            Condition::Not(inner) => !inner.matches(record),
            Condition::All(all) => all.iter().all(|c| c.matches(record)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub name: &'static str,
    pub condition: Condition,
    pub verdict: Verdict,
}

impl Rule {
    fn new(name: &'static str, condition: Condition, verdict: Verdict) -> Self {
        Self {
            name,
            condition,
            verdict,
        }
    }
}

/// Walk `rules` in order and return the first hit.
/// Lists built by `RuleSet` always end with an `Always` rule; an exhausted
/// list falls back to `General`.
pub fn evaluate<R: TaskRecord>(rules: &[Rule], record: &R) -> (Verdict, &'static str) {
    rules
        .iter()
        .find(|rule| rule.condition.matches(record))
        .map(|rule| (rule.verdict, rule.name))
        .unwrap_or((Verdict::General, "fallthrough"))
}

impl RuleSet {
    /// Ordered rules for pasted task tables.
    pub fn standard_rules(&self, pending_marker: &str) -> Vec<Rule> {
        use Field::*;

        vec![
            Rule::new(
                "not-pending",
                Condition::not(Condition::OneOf(Status, vec![pending_marker.trim().to_string()])),
                Verdict::Skip,
            ),
            Rule::new(
                "pneumatic",
                Condition::contains(Description, &self.pneumatic),
                Verdict::General,
            ),
            Rule::new(
                "borracharia",
                Condition::contains(Description, &self.borracharia),
                Verdict::Tire,
            ),
            Rule::new(
                "not-tire-component",
                Condition::not(Condition::one_of(Component, &self.tire_components)),
                Verdict::General,
            ),
            Rule::new(
                "specific-integrity",
                Condition::contains(Description, &self.specific_integrity),
                Verdict::Tire,
            ),
            Rule::new(
                "tire-keyword",
                Condition::contains(Description, &self.tire_keywords),
                Verdict::Tire,
            ),
            Rule::new(
                "exclusion",
                Condition::contains(Description, &self.exclusions),
                Verdict::General,
            ),
            Rule::new(
                "generic-integrity",
                Condition::contains(Description, &self.generic_integrity),
                Verdict::General,
            ),
            Rule::new("tire-component-default", Condition::Always, Verdict::Tire),
        ]
    }

    /// Ordered rules for maintenance-plan tasks (`de_tarefa` is the
    /// description, `de_sub_sist` the component).
    pub fn auto_rules(&self) -> Vec<Rule> {
        use Field::*;

        let generic = Condition::contains(Description, &self.auto_generic_integrity);

        vec![
            Rule::new(
                "subsystem-specific-integrity",
                Condition::contains(Component, &self.auto_specific_integrity),
                Verdict::Tire,
            ),
            Rule::new(
                "task-specific-integrity",
                Condition::contains(Description, &self.auto_specific_integrity),
                Verdict::Tire,
            ),
            Rule::new(
                "tire-keyword",
                Condition::All(vec![
                    Condition::contains(Description, &self.auto_tire_keywords),
                    Condition::not(Condition::contains(Description, &self.pneumatic)),
                ]),
                Verdict::Tire,
            ),
            Rule::new(
                "tire-subsystem",
                Condition::All(vec![
                    Condition::one_of(Component, &self.tire_components),
                    Condition::not(generic.clone()),
                    Condition::not(Condition::contains(Description, &self.auto_spacer)),
                ]),
                Verdict::Tire,
            ),
            Rule::new(
                "borracharia",
                Condition::All(vec![
                    Condition::contains(Description, &self.borracharia),
                    Condition::not(generic),
                ]),
                Verdict::Tire,
            ),
            Rule::new("general", Condition::Always, Verdict::General),
        ]
    }
}
