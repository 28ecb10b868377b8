use anyhow::Result;
use campusnav::io::read_scene;
use campusnav::{NavConfig, NavigationService, Scene, Tour, TourState, build_graph};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Shortest-path navigation between points of a campus scene
#[derive(Parser)]
#[command(name = "campusnav", version, about)]
struct Cli {
    /// JSON config file (defaults are used if omitted)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the path between two ground-plane points
    Path {
        scene: PathBuf,
        #[arg(allow_hyphen_values = true)]
        x1: String,
        #[arg(allow_hyphen_values = true)]
        y1: String,
        #[arg(allow_hyphen_values = true)]
        x2: String,
        #[arg(allow_hyphen_values = true)]
        y2: String,
        /// Candidate object id prefix (overrides the config)
        #[arg(long)]
        prefix: Option<String>,
        /// Print the result as JSON (`"distance": null` means no path)
        #[arg(long)]
        json: bool,
    },
    /// Visit all waypoints in name order
    Tour {
        scene: PathBuf,
        /// Pause between steps in milliseconds (overrides the config)
        #[arg(long)]
        delay_ms: Option<u64>,
    },
    /// List the proximity graph edges of the candidate objects
    Graph {
        scene: PathBuf,
        #[arg(long)]
        prefix: Option<String>,
    },
}

fn load_config(path: Option<&Path>) -> Result<NavConfig> {
    match path {
        Some(path) => NavConfig::from_json_file(path),
        None => Ok(NavConfig::new()),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Path {
            scene,
            x1,
            y1,
            x2,
            y2,
            prefix,
            json,
        } => {
            if let Some(prefix) = prefix {
                config.candidate_prefix = prefix;
            }
            let scene = read_scene(&scene)?;
            let service = NavigationService::with_config(scene, config);
            let result = service.find_path_xy(&x1, &y1, &x2, &y2)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else if result.is_reachable() {
                println!("{}", result.path.join(" -> "));
                println!("distance: {:.3}", result.distance);
            } else {
                println!("no path");
            }
        }
        Commands::Tour { scene, delay_ms } => {
            if let Some(delay_ms) = delay_ms {
                config.tour_step_delay_ms = delay_ms;
            }
            let scene = read_scene(&scene)?;
            let mut tour = Tour::from_scene(&scene, &config);
            let delay = tour.step_delay();

            // Pressing Enter stops the tour after the current pause
            let token = tour.cancel_token();
            std::thread::spawn(move || {
                let mut line = String::new();
                if std::io::stdin().read_line(&mut line).is_ok_and(|n| n > 0) {
                    token.cancel();
                }
            });

            let mut step = 0;
            while let Some(waypoint) = tour.advance() {
                step += 1;
                println!("{step}: {} at {:.2}", waypoint.id, waypoint.position);
                if matches!(tour.state(), TourState::Touring { remaining, .. } if remaining > 0) {
                    std::thread::sleep(delay);
                }
            }
            if tour.state() == TourState::Cancelled {
                println!("tour cancelled");
            }
        }
        Commands::Graph { scene, prefix } => {
            let prefix = prefix.unwrap_or(config.candidate_prefix);
            let scene: Scene = read_scene(&scene)?;
            let graph = build_graph(&scene.with_prefix(&prefix));
            for edge in graph.edges() {
                println!("{} -- {} ({:.3})", edge.id1, edge.id2, edge.weight);
            }
            println!(
                "{} vertices, {} edges",
                graph.num_vertices(),
                graph.num_edges()
            );
        }
    }

    Ok(())
}
