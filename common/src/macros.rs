//! Log macros shared across the workspace.
//!
//! Thin wrappers over [`tracing`] so call sites read the same in every
//! crate; the CLI formatter turns the levels into its `[+]`/`[*]`/`[-]`
//! symbols. `success!` and `info!` both land on the `[+]` line.

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        ::tracing::info!($($arg)*)
    };
}

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        ::tracing::info!($($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        ::tracing::warn!($($arg)*)
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        ::tracing::error!($($arg)*)
    };
}
