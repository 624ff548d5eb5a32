use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Which partition of a classified task table feeds the work log.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ServiceMode {
    #[default]
    General,
    #[value(alias = "tire_service")]
    TireService,
}

impl ServiceMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceMode::General => "general",
            ServiceMode::TireService => "tire_service",
        }
    }

    /// Mode flag as passed by library callers: "tire_service" selects the
    /// tire rows, anything else falls back to the general mode.
    pub fn from_flag(flag: &str) -> Self {
        match flag.trim().to_lowercase().as_str() {
            "tire_service" | "tire-service" => ServiceMode::TireService,
            _ => ServiceMode::General,
        }
    }

    pub fn is_tire_service(&self) -> bool {
        matches!(self, ServiceMode::TireService)
    }
}
