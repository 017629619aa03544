//! Shared data contracts for `catisland`.
//!
//! * [`endpoint`]: manager endpoint descriptors and the config-file format.
//! * [`application`]: application records reported by a manager.
//! * [`config`]: run-wide settings collected from the command line.
//! * [`error`]: configuration-stage errors.

pub mod application;
pub mod config;
pub mod endpoint;
pub mod error;

#[doc(hidden)]
pub use tracing;

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::tracing::info!(target: "catisland::status", $($arg)*)
    };
}

/// Same level as [`info!`], rendered with the success glyph.
#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::tracing::info!(target: "catisland::success", $($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::tracing::warn!(target: "catisland::status", $($arg)*)
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::tracing::error!(target: "catisland::status", $($arg)*)
    };
}
