//! CLI command implementations.
//!
//! Lifecycle commands (`create`, `cancel`, `confirm`, `finalize`) accept
//! `--dry-run`. Report commands (`pending`, `in-use`, `availability`,
//! `report`) accept `--format`.

pub mod availability;
pub mod cancel;
pub mod completions;
pub mod confirm;
pub mod create;
pub mod finalize;
pub mod in_use;
pub mod init;
pub mod pending;
pub mod report;
pub mod serve;
pub mod show_data_dir;
pub mod validate_config;

pub use availability::AvailabilityCommand;
pub use cancel::CancelCommand;
pub use completions::CompletionsCommand;
pub use confirm::ConfirmCommand;
pub use create::CreateCommand;
pub use finalize::FinalizeCommand;
pub use in_use::InUseCommand;
pub use init::InitCommand;
pub use pending::PendingCommand;
pub use report::{ReportCommand, ReportKind};
pub use serve::ServeCommand;
pub use show_data_dir::ShowDataDirCommand;
pub use validate_config::ValidateConfigCommand;
