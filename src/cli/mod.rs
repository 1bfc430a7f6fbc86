//! Command-line interface layer.

pub mod args;
pub mod exit_status;
pub mod run;

pub use args::Arguments;
pub use exit_status::ExitStatus;
pub use run::run;
