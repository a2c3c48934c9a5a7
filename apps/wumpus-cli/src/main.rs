use std::io::{self, BufRead, Write};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing_subscriber::EnvFilter;
use wumpus_input::{ParseError, parse_script};
use wumpus_kernel::World;
use wumpus_kernel::rules::DEFAULT_GRID_SIZE;
use wumpus_render::{RenderView, Renderer, TextRenderer, signal_message};
use wumpus_tools::WorldInspector;

mod script;
mod session;

use session::{Input, Session, parse_line};

const HELP: &str = "\
Commands:
  up | down | left | right    move one room (u/d/l/r also work)
  shoot <row> <col>           loose your arrow at a room
  look                        show the board again
  help                        show this help
  quit                        leave the game";

#[derive(Parser)]
#[command(name = "wumpus-cli", about = "Hunt the wumpus, grab the gold, get out alive")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and crate info
    Info,
    /// Play interactively on stdin
    Play {
        #[command(flatten)]
        game: GameArgs,
        /// Show the wumpus, pits, and gold on the board
        #[arg(long)]
        reveal: bool,
    },
    /// Run a fixed list of commands and report what happened
    Script {
        #[command(flatten)]
        game: GameArgs,
        /// Commands separated by commas, e.g. "right, down, shoot 1 2"
        #[arg(short, long)]
        actions: String,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
struct GameArgs {
    /// Grid dimension (at least 2)
    #[arg(short = 'n', long, default_value_t = DEFAULT_GRID_SIZE)]
    size: usize,
    /// RNG seed for hazard placement; random when omitted
    #[arg(short, long)]
    seed: Option<u64>,
    /// Allow shooting at any room, not just adjacent ones
    #[arg(long)]
    free_aim: bool,
}

impl GameArgs {
    fn build_world(&self) -> anyhow::Result<(World, u64)> {
        let seed = self.seed.unwrap_or_else(|| rand::rng().random());
        let mut rng = StdRng::seed_from_u64(seed);
        let world = World::new(self.size, &mut rng)
            .with_context(|| format!("cannot build a {0}x{0} world", self.size))?;
        tracing::info!(seed, size = self.size, "world ready");
        Ok((world, seed))
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Commands::Info => {
            println!("wumpus-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("tools: {}", wumpus_tools::crate_info());
            println!("default grid: {DEFAULT_GRID_SIZE}x{DEFAULT_GRID_SIZE}");
        }
        Commands::Play { game, reveal } => {
            let (world, seed) = game.build_world()?;
            println!("Seed {seed}. Type 'help' for commands.");
            let view = if reveal {
                RenderView::revealed()
            } else {
                RenderView::player()
            };
            play(Session::new(world, game.free_aim), view)?;
        }
        Commands::Script {
            game,
            actions,
            json,
        } => {
            let actions = parse_script(&actions)?;
            let (world, seed) = game.build_world()?;
            let report = script::run(world, seed, &actions, game.free_aim);

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                for step in &report.steps {
                    match &step.refused {
                        Some(reason) => println!("{:<12} refused: {reason}", step.action),
                        None => {
                            let messages: Vec<&str> =
                                step.signals.iter().map(|&s| signal_message(s)).collect();
                            println!(
                                "{:<12} at {} score {} {}",
                                step.action,
                                step.location,
                                step.score,
                                messages.join(" ")
                            );
                        }
                    }
                }
                println!("{}", report.summary);
                println!("{}", report.hazards);
            }
        }
    }

    Ok(())
}

fn play(mut session: Session, view: RenderView) -> anyhow::Result<()> {
    let renderer = TextRenderer::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    print!("{}", renderer.render(session.world(), &view));
    print!("> ");
    stdout.flush()?;
    for line in stdin.lock().lines() {
        let line = line?;
        match parse_line(&line) {
            Ok(Input::Quit) => break,
            Ok(Input::Help) => println!("{HELP}"),
            Ok(Input::Look) => print!("{}", renderer.render(session.world(), &view)),
            Ok(Input::Act(action)) => match session.act(action) {
                Ok(outcome) => {
                    for signal in &outcome.signals {
                        println!("{}", signal_message(*signal));
                    }
                    print!("{}", renderer.render(session.world(), &view));
                    if !session.world().is_alive() {
                        println!("{}", WorldInspector::hazards(session.world()));
                        println!("Final score: {}", session.world().score());
                        break;
                    }
                }
                Err(refusal) => println!("{refusal}"),
            },
            Err(ParseError::Empty) => {}
            Err(e) => println!("{e}. Type 'help' for commands."),
        }
        print!("> ");
        stdout.flush()?;
    }
    Ok(())
}
