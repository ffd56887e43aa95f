pub mod check;
pub mod dump;
pub mod exec;
pub mod expr_loader;
pub mod graph;
pub mod run_common;
pub mod trace;
