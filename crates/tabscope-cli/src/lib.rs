//! Library side of the tabscope CLI: the inspection run, terminal
//! rendering and logging setup.

pub mod commands;
pub mod logging;
pub mod report;
