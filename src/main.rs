use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};

use trisearch::config::Config;
use trisearch::core::{SearchProblem, StrategyKind};
use trisearch::utils::logging;
use trisearch::TriTraversal;

#[derive(Parser)]
#[clap(version = "0.1.0", author = "TriSearch Contributors")]
enum Cli {
    /// Run DFS, UCS and A* on a problem file and print the paths as JSON
    Run {
        #[clap(short, long)]
        problem: PathBuf,
        #[clap(short, long)]
        config: Option<PathBuf>,
        /// Restrict to the given strategies (dfs, ucs, astar); repeatable
        #[clap(short, long = "strategy")]
        strategies: Vec<StrategyKind>,
    },
    /// Validate a problem file and print a summary
    Check {
        #[clap(short, long)]
        problem: PathBuf,
        #[clap(short, long)]
        config: Option<PathBuf>,
    },
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => Ok(Config::default()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let result = match cli {
        Cli::Run {
            problem,
            config,
            strategies,
        } => {
            let config = load_config(config.as_deref())?;
            logging::init(&config.log).context("Failed to initialize logging")?;
            run(&problem, &config, strategies)
        }
        Cli::Check { problem, config } => {
            let config = load_config(config.as_deref())?;
            check(&problem, &config)
        }
    };

    logging::shutdown();
    result
}

fn run(problem_path: &Path, config: &Config, strategies: Vec<StrategyKind>) -> Result<()> {
    let problem = SearchProblem::load(problem_path)
        .with_context(|| format!("Failed to load problem {}", problem_path.display()))?;
    let graph = problem.build_graph(config.search.no_edge_sentinel)?;
    log::info!(
        "Loaded problem {}: {} nodes, {} edges",
        problem_path.display(),
        graph.node_count(),
        graph.edge_count()
    );

    let enabled = if strategies.is_empty() {
        config.search.strategies.clone()
    } else {
        strategies
    };
    let result =
        TriTraversal::with_strategies(enabled).run(&graph, problem.start, &problem.goal_set())?;

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

fn check(problem_path: &Path, config: &Config) -> Result<()> {
    let problem = SearchProblem::load(problem_path)
        .with_context(|| format!("Failed to load problem {}", problem_path.display()))?;
    let graph = problem.build_graph(config.search.no_edge_sentinel)?;
    graph.validate_request(problem.start, &problem.goal_set())?;

    println!(
        "ok: {} nodes, {} edges, start {}, {} goal(s), heuristic {}",
        graph.node_count(),
        graph.edge_count(),
        problem.start,
        problem.goal_set().len(),
        if problem.heuristic.is_some() { "given" } else { "zero" }
    );
    Ok(())
}
