//! Core logic – building shell command strings and capturing their output.
//!
//! Nothing in this module depends on the CLI surface.  The one type here,
//! [`executor::CommandExecutor`], owns its root path exclusively and needs
//! no synchronisation.

pub mod executor;
