use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use mg_app::{AppResult, line_service, path_service, station_service};
use mg_core::{LineId, StationId};
use mg_network::{InMemoryNetwork, NetworkResult};

#[derive(Parser)]
#[command(name = "mg-cli")]
#[command(about = "Metrograph CLI - Subway network and route query tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate network file syntax and structure
    Validate {
        /// Path to the network YAML/JSON file
        network_path: PathBuf,
    },
    /// List lines in the network
    Lines {
        /// Path to the network YAML/JSON file
        network_path: PathBuf,
    },
    /// List registered stations
    Stations {
        /// Path to the network YAML/JSON file
        network_path: PathBuf,
    },
    /// Show a line's stations in chain order
    LineStations {
        /// Path to the network YAML/JSON file
        network_path: PathBuf,
        /// Line id
        line: u64,
    },
    /// Find the shortest path between two stations
    Path {
        /// Path to the network YAML/JSON file
        network_path: PathBuf,
        /// Source station id
        source: u64,
        /// Target station id
        target: u64,
    },
    /// Register a new station
    AddStation {
        /// Path to the network YAML/JSON file
        network_path: PathBuf,
        /// Station name
        name: String,
    },
    /// Create a line with its first section
    AddLine {
        /// Path to the network YAML/JSON file
        network_path: PathBuf,
        /// Line name
        name: String,
        /// Line color
        color: String,
        /// Up station id
        up: u64,
        /// Down station id
        down: u64,
        /// First section distance
        distance: u64,
    },
    /// Add a section to a line
    AddSection {
        /// Path to the network YAML/JSON file
        network_path: PathBuf,
        /// Line id
        line: u64,
        /// Up station id
        up: u64,
        /// Down station id
        down: u64,
        /// Section distance
        distance: u64,
    },
    /// Remove a station from a line
    RemoveStation {
        /// Path to the network YAML/JSON file
        network_path: PathBuf,
        /// Line id
        line: u64,
        /// Station id
        station: u64,
    },
    /// Delete a line and its segments
    RemoveLine {
        /// Path to the network YAML/JSON file
        network_path: PathBuf,
        /// Line id
        line: u64,
    },
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { network_path } => cmd_validate(&network_path),
        Commands::Lines { network_path } => cmd_lines(&network_path),
        Commands::Stations { network_path } => cmd_stations(&network_path),
        Commands::LineStations { network_path, line } => {
            cmd_line_stations(&network_path, LineId::new(line))
        }
        Commands::Path {
            network_path,
            source,
            target,
        } => cmd_path(
            &network_path,
            StationId::new(source),
            StationId::new(target),
        ),
        Commands::AddStation { network_path, name } => cmd_add_station(&network_path, &name),
        Commands::AddLine {
            network_path,
            name,
            color,
            up,
            down,
            distance,
        } => cmd_add_line(
            &network_path,
            &name,
            &color,
            StationId::new(up),
            StationId::new(down),
            distance,
        ),
        Commands::AddSection {
            network_path,
            line,
            up,
            down,
            distance,
        } => cmd_add_section(
            &network_path,
            LineId::new(line),
            StationId::new(up),
            StationId::new(down),
            distance,
        ),
        Commands::RemoveStation {
            network_path,
            line,
            station,
        } => cmd_remove_station(&network_path, LineId::new(line), StationId::new(station)),
        Commands::RemoveLine { network_path, line } => {
            cmd_remove_line(&network_path, LineId::new(line))
        }
    }
}

fn load_network(path: &Path) -> NetworkResult<InMemoryNetwork> {
    if path.extension().is_some_and(|ext| ext == "json") {
        mg_network::load_json(path)
    } else {
        mg_network::load_yaml(path)
    }
}

fn save_network(path: &Path, network: &InMemoryNetwork) -> NetworkResult<()> {
    if path.extension().is_some_and(|ext| ext == "json") {
        mg_network::save_json(path, network)
    } else {
        mg_network::save_yaml(path, network)
    }
}

fn cmd_validate(network_path: &Path) -> AppResult<()> {
    println!("Validating network: {}", network_path.display());
    load_network(network_path)?;
    println!("✓ Network is valid");
    Ok(())
}

fn cmd_lines(network_path: &Path) -> AppResult<()> {
    let network = load_network(network_path)?;
    let lines = line_service::list_lines(&network)?;

    if lines.is_empty() {
        println!("No lines found in network");
    } else {
        println!("Lines in network:");
        for line in lines {
            println!(
                "  {} - {} [{}] ({} stations, total distance {})",
                line.id, line.name, line.color, line.station_count, line.total_distance
            );
        }
    }
    Ok(())
}

fn cmd_stations(network_path: &Path) -> AppResult<()> {
    let network = load_network(network_path)?;
    let stations = station_service::list_stations(&network);

    if stations.is_empty() {
        println!("No stations registered");
    } else {
        println!("Stations:");
        for station in stations {
            println!("  {} - {}", station.id, station.name);
        }
    }
    Ok(())
}

fn cmd_line_stations(network_path: &Path, line: LineId) -> AppResult<()> {
    let network = load_network(network_path)?;
    let stations = line_service::ordered_stations(&network, line)?;

    let names: Vec<&str> = stations.iter().map(|s| s.name.as_str()).collect();
    println!("Line {}: {}", line, names.join(" - "));
    Ok(())
}

fn cmd_path(network_path: &Path, source: StationId, target: StationId) -> AppResult<()> {
    let network = load_network(network_path)?;
    let result = path_service::find_path(&network, source, target)?;

    let names: Vec<&str> = result.stations.iter().map(|s| s.name.as_str()).collect();
    println!("Shortest path: {}", names.join(" - "));
    println!("Total distance: {}", result.distance);
    Ok(())
}

fn cmd_add_station(network_path: &Path, name: &str) -> AppResult<()> {
    let mut network = load_network(network_path)?;
    let station = station_service::create_station(&mut network, name);
    save_network(network_path, &network)?;
    println!("✓ Station created: {} ({})", station.name, station.id);
    Ok(())
}

fn cmd_add_line(
    network_path: &Path,
    name: &str,
    color: &str,
    up: StationId,
    down: StationId,
    distance: u64,
) -> AppResult<()> {
    let mut network = load_network(network_path)?;
    let line = line_service::create_line(&mut network, name, color, up, down, distance)?;
    save_network(network_path, &network)?;
    println!("✓ Line created: {} ({})", line.name, line.id);
    Ok(())
}

fn cmd_add_section(
    network_path: &Path,
    line: LineId,
    up: StationId,
    down: StationId,
    distance: u64,
) -> AppResult<()> {
    let mut network = load_network(network_path)?;
    line_service::add_section(&mut network, line, up, down, distance)?;
    save_network(network_path, &network)?;
    println!("✓ Section added to line {}", line);
    Ok(())
}

fn cmd_remove_station(network_path: &Path, line: LineId, station: StationId) -> AppResult<()> {
    let mut network = load_network(network_path)?;
    line_service::remove_station(&mut network, line, station)?;
    save_network(network_path, &network)?;
    println!("✓ Station {} removed from line {}", station, line);
    Ok(())
}

fn cmd_remove_line(network_path: &Path, line: LineId) -> AppResult<()> {
    let mut network = load_network(network_path)?;
    line_service::delete_line(&mut network, line)?;
    save_network(network_path, &network)?;
    println!("✓ Line {} deleted", line);
    Ok(())
}
