pub mod plan_task;
pub mod service_mode;
pub mod task_row;
pub mod work_log_row;

pub use plan_task::PlanTask;
pub use service_mode::ServiceMode;
pub use task_row::MaintenanceTaskRow;
pub use work_log_row::WorkLogRow;

/// One maintenance step within a service order.
pub type SequenceId = u32;
