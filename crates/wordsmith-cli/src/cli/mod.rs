mod args;
mod color;
mod commands;
mod dispatch;


pub use color::{ColorChoice, Palette, Role};
pub use commands::build_cli;
pub use dispatch::{BranchParams, CasesParams, ConvertParams, StatsParams};
