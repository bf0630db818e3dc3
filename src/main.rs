use std::path::PathBuf;
use std::thread;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use seektool::config::SimulationConfig;
use seektool::display::{self, HeadTrack};
use seektool::{
    aggregate, formats, replay, Algorithm, EngineError, RequestGenerator, RequestSet, Replay, SeekPlan,
};

#[derive(Parser)]
#[command(name = "seektool", about = "Disk Scheduling Simulator (SSTF & C-SCAN)")]
struct Cli {
    /// JSON file overriding the built-in defaults
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a random request set
    Generate {
        #[arg(long)]
        count: Option<usize>,
        #[arg(long)]
        disk_size: Option<u32>,
        #[arg(long)]
        seed: Option<u64>,
        /// Save to a .txt or .bin request file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Schedule requests, print every move and optionally animate the head
    Simulate {
        #[command(flatten)]
        input: InputArgs,
        #[arg(short, long)]
        algorithm: Option<Algorithm>,
        #[arg(long)]
        ms_per_cylinder: Option<f64>,
        /// Do not charge the C-SCAN return to cylinder 0
        #[arg(long)]
        no_jump_cost: bool,
        #[arg(long)]
        animate: bool,
        /// Stop the animation after this many moves
        #[arg(long, requires = "animate")]
        max_steps: Option<usize>,
    },
    /// Run every algorithm on the same requests
    Compare {
        #[command(flatten)]
        input: InputArgs,
        #[arg(long)]
        no_jump_cost: bool,
    },
}

#[derive(Args)]
struct InputArgs {
    #[arg(long)]
    disk_size: Option<u32>,
    #[arg(long)]
    head: Option<u32>,
    /// Comma-separated cylinders, e.g. '98,183,37,122'
    #[arg(long, value_parser = parse_requests, conflicts_with_all = ["input", "count", "seed"])]
    requests: Option<RequestList>,
    /// Read requests from a .txt or .bin file
    #[arg(short, long, conflicts_with_all = ["count", "seed"])]
    input: Option<PathBuf>,
    /// Number of requests to generate
    #[arg(long)]
    count: Option<usize>,
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Debug, Clone)]
struct RequestList(Vec<u32>);

fn parse_requests(s: &str) -> Result<RequestList, String> {
    s.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| part.parse().map_err(|e| format!("Invalid cylinder '{}': {}", part, e)))
        .collect::<Result<Vec<u32>, String>>()
        .map(RequestList)
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "seektool=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&PathBuf>) -> Result<SimulationConfig> {
    match path {
        Some(path) => SimulationConfig::load(path),
        None => Ok(SimulationConfig::default()),
    }
}

impl InputArgs {
    fn apply(&self, config: &mut SimulationConfig) {
        if let Some(disk_size) = self.disk_size {
            config.disk_size = disk_size;
        }
        if let Some(head) = self.head {
            config.initial_head = head;
        }
        if let Some(count) = self.count {
            config.request_count = count;
        }
    }

    /// True when no explicit list is given and requests will be drawn.
    fn generates(&self) -> bool {
        self.requests.is_none() && self.input.is_none()
    }

    fn validate(&self, config: &SimulationConfig) -> Result<()> {
        with_hint(config.validate_schedule())?;
        if self.generates() {
            with_hint(config.validate_generation())?;
        }
        Ok(())
    }

    fn requests(&self, config: &SimulationConfig) -> Result<Vec<u32>> {
        if let Some(RequestList(cylinders)) = &self.requests {
            return Ok(cylinders.clone());
        }
        if let Some(path) = &self.input {
            return formats::load_requests(path);
        }
        generate(config, self.seed)
    }
}

/// Attaches the input hint matching what was wrong.
fn with_hint(result: Result<(), EngineError>) -> Result<()> {
    result.map_err(|err| {
        let hint = if err.is_geometry_error() {
            "Enter a valid disk size and initial head position"
        } else {
            "Enter a valid number of requests and ms/cylinder"
        };
        anyhow::Error::new(err).context(hint)
    })
}

fn generate(config: &SimulationConfig, seed: Option<u64>) -> Result<Vec<u32>> {
    let mut generator = match seed {
        Some(seed) => RequestGenerator::from_seed(seed),
        None => RequestGenerator::from_entropy(),
    };
    info!(seed = generator.seed(), "generating requests");
    Ok(generator.generate(config.request_count, config.disk_size)?)
}

fn animate(plan: &SeekPlan, track: HeadTrack, config: &SimulationConfig, max_steps: Option<usize>) -> Result<()> {
    let events = Replay::checked(plan, config.ms_per_cylinder)?;
    let total = events.len();
    let limit = max_steps.unwrap_or(total);

    println!("{}", track.head_marker(plan.head()));
    thread::sleep(config.animation.start_delay());

    let mut position = plan.head();
    for (i, event) in events.take(limit).enumerate() {
        if i > 0 {
            thread::sleep(config.animation.step_delay());
        }
        println!("{}", track.step_line(&event));
        position = event.target;
    }

    println!("{}", track.head_marker(position));
    if limit < total {
        println!("Stopped after {} of {} moves", limit, total);
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let mut config = load_config(cli.config.as_ref())?;

    match cli.command {
        Commands::Generate { count, disk_size, seed, output } => {
            if let Some(count) = count {
                config.request_count = count;
            }
            if let Some(disk_size) = disk_size {
                config.disk_size = disk_size;
            }
            with_hint(config.validate_generation())?;

            let requests = generate(&config, seed)?;
            println!("{}", display::request_line(&requests));
            if let Some(output) = output {
                formats::save_requests(&output, &requests)?;
                println!("Saved to {}", output.display());
            }
        }
        Commands::Simulate { input, algorithm, ms_per_cylinder, no_jump_cost, animate: run_animation, max_steps } => {
            input.apply(&mut config);
            if let Some(algorithm) = algorithm {
                config.algorithm = algorithm;
            }
            if let Some(ms) = ms_per_cylinder {
                config.ms_per_cylinder = ms;
            }
            if no_jump_cost {
                config.count_jump_cost = false;
            }
            input.validate(&config)?;

            let geometry = config.geometry()?;
            let requests = RequestSet::new(geometry, input.requests(&config)?)?;
            let plan = config.algorithm.scheduler(config.count_jump_cost).schedule(&requests);
            let stats = aggregate(&plan, requests.len());
            info!(algorithm = %plan.algorithm(), total_seek = plan.total_seek(), "scheduled");

            println!("{}", display::request_line(requests.cylinders()));
            println!("{}", display::move_table(replay(&plan, geometry.initial_head(), config.ms_per_cylinder)));
            println!("{}", display::stats_block(&stats));
            println!("{}", display::seek_sequence(&plan));

            if run_animation {
                let track = HeadTrack::new(geometry, config.animation.track_width);
                animate(&plan, track, &config, max_steps)?;
            }
        }
        Commands::Compare { input, no_jump_cost } => {
            input.apply(&mut config);
            if no_jump_cost {
                config.count_jump_cost = false;
            }
            input.validate(&config)?;

            let geometry = config.geometry()?;
            let requests = RequestSet::new(geometry, input.requests(&config)?)?;
            println!("{}", display::request_line(requests.cylinders()));
            for algorithm in Algorithm::ALL {
                let plan = algorithm.scheduler(config.count_jump_cost).schedule(&requests);
                println!("{}", display::summary_line(&plan, &aggregate(&plan, requests.len())));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_requests_accepts_spaces_and_trailing_comma() {
        let RequestList(cylinders) = parse_requests("98, 183,37 ,").unwrap();
        assert_eq!(cylinders, vec![98, 183, 37]);
    }

    #[test]
    fn test_parse_requests_rejects_non_numbers() {
        let err = parse_requests("98,abc").unwrap_err();
        assert!(err.starts_with("Invalid cylinder 'abc'"));
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_requests_conflict_with_generation_flags() {
        let result = Cli::try_parse_from(["seektool", "simulate", "--requests", "1,2", "--seed", "3"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_generate_on_small_disk_is_valid() {
        let cli = Cli::try_parse_from(["seektool", "generate", "--disk-size", "10", "--count", "16", "--seed", "1"])
            .unwrap();
        let Commands::Generate { count, disk_size, seed, .. } = cli.command else {
            panic!("expected generate");
        };
        let config = SimulationConfig {
            disk_size: disk_size.unwrap(),
            request_count: count.unwrap(),
            ..Default::default()
        };
        with_hint(config.validate_generation()).unwrap();

        // More requests than cylinders: drawn with replacement.
        let requests = generate(&config, seed).unwrap();
        assert_eq!(requests.len(), 16);
        assert!(requests.iter().all(|&c| c < 10));
    }

    #[test]
    fn test_explicit_list_skips_request_count_range() {
        let cli = Cli::try_parse_from([
            "seektool", "compare", "--requests", "1,2,3,4,5,6,7,8,9,10,11,12,13,14,15,16,17,18",
        ])
        .unwrap();
        let Commands::Compare { input, .. } = cli.command else {
            panic!("expected compare");
        };
        let mut config = SimulationConfig::default();
        input.apply(&mut config);
        input.validate(&config).unwrap();
        assert_eq!(input.requests(&config).unwrap().len(), 18);
    }

    #[test]
    fn test_generated_input_checks_request_count() {
        let cli = Cli::try_parse_from(["seektool", "simulate", "--count", "40"]).unwrap();
        let Commands::Simulate { input, .. } = cli.command else {
            panic!("expected simulate");
        };
        let mut config = SimulationConfig::default();
        input.apply(&mut config);
        let err = input.validate(&config).unwrap_err();
        assert_eq!(err.to_string(), "Enter a valid number of requests and ms/cylinder");
        assert_eq!(
            err.downcast_ref::<EngineError>(),
            Some(&EngineError::InvalidRequestCount { count: 40 })
        );
    }

    #[test]
    fn test_head_error_gets_geometry_hint() {
        let config = SimulationConfig { initial_head: 500, ..Default::default() };
        let err = with_hint(config.validate_schedule()).unwrap_err();
        assert_eq!(err.to_string(), "Enter a valid disk size and initial head position");
    }

    #[test]
    fn test_overrides_apply_to_config() {
        let cli = Cli::try_parse_from([
            "seektool", "simulate", "--disk-size", "500", "--head", "499", "-a", "c-scan", "--requests", "1,2",
        ])
        .unwrap();
        let Commands::Simulate { input, algorithm, .. } = cli.command else {
            panic!("expected simulate");
        };
        let mut config = SimulationConfig::default();
        input.apply(&mut config);
        assert_eq!((config.disk_size, config.initial_head), (500, 499));
        assert_eq!(algorithm, Some(Algorithm::CScan));
        assert_eq!(input.requests(&config).unwrap(), vec![1, 2]);
    }
}
