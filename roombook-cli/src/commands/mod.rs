//! CLI command implementations.
//!
//! - `shell`: Interactive menu (the default)
//! - `reserve`: Reserve a room for a day
//! - `list`: List reservations
//! - `cancel`: Cancel a reservation
//! - `rooms`: List the bookable rooms
//! - `init`: Initialize the data directory
//! - `show_data_dir`: Show resolved data directory path
//! - `validate`: Validate a configuration file
//! - `completions`: Generate shell completion scripts

pub mod cancel;
pub mod completions;
pub mod init;
pub mod list;
pub mod reserve;
pub mod rooms;
pub mod shell;
pub mod show_data_dir;
pub mod validate;

pub use cancel::CancelCommand;
pub use completions::CompletionsCommand;
pub use init::InitCommand;
pub use list::ListCommand;
pub use reserve::ReserveCommand;
pub use rooms::RoomsCommand;
pub use shell::ShellCommand;
pub use show_data_dir::ShowDataDirCommand;
pub use validate::ValidateCommand;
