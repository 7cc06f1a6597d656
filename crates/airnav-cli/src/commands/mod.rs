// Module exports for CLI subcommands
//
// Each module handles one subcommand. main.rs parses arguments and dispatches
// to these handlers; shared graph loading lives in `network`.

pub mod graph;
pub mod network;
pub mod route;
