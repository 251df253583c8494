//! moltron: scaffold Next.js + shadcn/ui projects with aesthetic theme presets
//!
//! Layers, innermost first:
//! - [`domain`]: presets, SEO metadata, runtime version rules, the step plan
//! - [`application`]: services driving external tools through I/O traits
//! - [`infrastructure`]: real I/O implementations and the service container
//! - [`cli`]: argument parsing and dispatch

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
