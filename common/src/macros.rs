//! Logging shorthands shared by every crate in the workspace.
//!
//! All output flows through `tracing`; the CLI installs a formatter that
//! maps targets and levels to the colored `[+]`/`[✓]`/`[*]`/`[-]` glyphs.

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        tracing::info!($($arg)*)
    };
}

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        tracing::info!(target: "cdnmap::success", $($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        tracing::warn!($($arg)*)
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        tracing::error!($($arg)*)
    };
}
