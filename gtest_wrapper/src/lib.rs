pub mod args;
pub mod config;
pub mod diagnostics_trace;
pub mod error;
pub mod help;
pub mod render;

#[cfg(test)]
mod args_config_test;
