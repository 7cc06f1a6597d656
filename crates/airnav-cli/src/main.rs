use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use airnav_cli::commands::graph::handle_graph_command;
use airnav_cli::commands::network::NetworkOptions;
use airnav_cli::commands::route::{handle_route_command, RouteCommandArgs};
use airnav_cli::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(author, version, about = "Airport location graph utilities")]
struct Cli {
    /// Directory containing airports.txt and routes.txt.
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Coordinates table (`latitude, longitude, Name` per line) used instead
    /// of the remote geocoder.
    #[arg(long, global = true)]
    coordinates: Option<PathBuf>,

    /// Discard the sign of longitudes when deriving route distances.
    #[arg(long, global = true)]
    absolute_longitude: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every airport with its direct routes and distances.
    Graph,
    /// Compute the shortest route between two airport codes.
    Route {
        /// Starting airport code.
        #[arg(long = "from")]
        from: String,
        /// Destination airport code.
        #[arg(long = "to")]
        to: String,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let options = NetworkOptions {
        data_dir: cli.data_dir,
        coordinates: cli.coordinates,
        absolute_longitude: cli.absolute_longitude,
    };

    match cli.command {
        Command::Graph => handle_graph_command(&options, cli.format),
        Command::Route { from, to } => {
            handle_route_command(&options, &RouteCommandArgs { from, to }, cli.format)
        }
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
