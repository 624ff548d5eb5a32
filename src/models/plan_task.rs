use super::SequenceId;
use serde::{Deserialize, Serialize};

/// One task of a maintenance plan, as produced by the plan lookup
/// (`no_seq`, `de_tarefa`, `de_sub_sist`). Extra CSV columns are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanTask {
    pub no_seq: SequenceId,
    #[serde(default)]
    pub de_tarefa: String,
    #[serde(default)]
    pub de_sub_sist: String,
    #[serde(default)]
    pub de_operacao: Option<String>,
    #[serde(default)]
    pub de_compo: Option<String>,
}

impl PlanTask {
    pub fn new(no_seq: SequenceId, de_tarefa: &str, de_sub_sist: &str) -> Self {
        Self {
            no_seq,
            de_tarefa: de_tarefa.to_string(),
            de_sub_sist: de_sub_sist.to_string(),
            de_operacao: None,
            de_compo: None,
        }
    }
}
