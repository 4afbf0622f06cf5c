//! CLI domain: parse, route and output only.
//! Loading and merging live in the library; the route table only dispatches.

mod output;
mod parse;
mod route;

pub use output::map_error;
pub use parse::{Cli, Commands};
pub use route::RunContext;
