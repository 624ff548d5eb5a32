pub mod classifier;
pub mod config;
pub mod interval;
pub mod plan;
pub mod rules;
pub mod slicer;
pub mod table;
pub mod worklog;
