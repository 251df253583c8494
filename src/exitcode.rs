//! Process exit codes

/// Successful termination (also used for help output)
pub const OK: i32 = 0;

/// Validation or scaffolding failure
pub const FAILURE: i32 = 1;
