//! Step-by-step A* search over a grid graph, in the terminal.
//!
//! Run: cargo run --bin gridstar -- --start 0,0 --goal 7,7 --delay-ms 300 -v

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::Context as _;
use clap::{ArgAction, Parser};
use gridstar_core::Point;
use gridstar_demos::{Animation, DEFAULT_ANIMATION_DELAY, Finish, render_text, status_line};
use gridstar_paths::{Graph, Step, Stepper, builtin_maze};

#[derive(Parser, Debug)]
#[command(version)]
#[command(about = "Animate an A* search over an undirected grid graph", long_about = None)]
struct Args {
    /// JSON edge list: an array of {"x1","y1","x2","y2"} objects.
    /// Defaults to a built-in maze.
    #[arg(short, long)]
    edges: Option<PathBuf>,

    /// Start position as X,Y.
    #[arg(short, long, default_value = "0,0")]
    start: Point,

    /// Goal position as X,Y.
    #[arg(short, long, default_value = "7,7")]
    goal: Point,

    /// Pause between steps in milliseconds.
    #[arg(long, default_value_t = 0)]
    delay_ms: u64,

    /// Pause between steps at the interactive viewer's pace.
    #[arg(long, conflicts_with = "delay_ms")]
    animate: bool,

    /// Stop after this many steps.
    #[arg(long)]
    max_steps: Option<usize>,

    /// Print the grid after every step, not just at the end.
    #[arg(long)]
    show_steps: bool,

    /// Print the final search state as JSON instead of a picture.
    #[arg(long)]
    json: bool,

    /// More logging (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn setup_logging(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn load_graph(args: &Args) -> anyhow::Result<Graph> {
    match &args.edges {
        Some(path) => Graph::from_path(path)
            .with_context(|| format!("failed to load edge list {}", path.display())),
        None => Ok(builtin_maze().into_iter().collect()),
    }
}

fn run(args: &Args) -> anyhow::Result<Finish> {
    let graph = load_graph(args)?;
    log::info!(
        "graph: {} vertices, {} edges, bounds {}",
        graph.vertex_count(),
        graph.edge_count(),
        graph.bounds()
    );

    let mut stepper = Stepper::new(&graph);
    stepper
        .start(args.start, args.goal)
        .context("cannot start search")?;

    let delay = if args.animate {
        DEFAULT_ANIMATION_DELAY
    } else {
        Duration::from_millis(args.delay_ms)
    };
    let animation = Animation {
        delay,
        max_steps: args.max_steps,
    };

    let finish = animation.run(&mut stepper, |step, s| {
        if let Step::Expanded(p) = step {
            log::debug!("step {}: expanded {p}", s.expansions());
        }
        if args.show_steps && !args.json {
            let snap = s.snapshot();
            println!("{}", render_text(&graph, &snap));
            println!("{}\n", status_line(&snap));
        }
    })?;

    let snap = stepper.snapshot();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&snap)?);
    } else {
        if !args.show_steps {
            println!("{}", render_text(&graph, &snap));
        }
        println!("{}", status_line(&snap));
        if let Some(path) = &snap.path {
            let hops: Vec<String> = path.iter().map(Point::to_string).collect();
            println!("path: {}", hops.join(" -> "));
        }
    }
    Ok(finish)
}

fn main() -> ExitCode {
    let args = Args::parse();
    setup_logging(args.verbose);

    match run(&args) {
        Ok(Finish::Found | Finish::Paused) => ExitCode::SUCCESS,
        Ok(Finish::Exhausted) => ExitCode::from(2),
        Err(e) => {
            log::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
