//! OS integration helpers.
//!
//! The binary talks to the rest of the desktop through detached child
//! processes — opening a folder hands the path to the platform's file
//! manager and returns immediately, never waiting on the spawned process.

pub mod explorer;
