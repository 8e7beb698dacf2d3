#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use uttt::{
    init_logging, ui, Agent, CliAgent, GameEngine, Outcome, RandomAgent, SearchAgent,
    DEFAULT_SEARCH_DEPTH,
};

#[cfg(feature = "std")]
use clap::{Parser, ValueEnum};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Debug)]
#[cfg(feature = "std")]
enum AgentKind {
    Human,
    Search,
    Random,
}

#[derive(Parser)]
#[cfg(feature = "std")]
enum Commands {
    /// Play a game in the terminal.
    Play {
        #[arg(long, value_enum, default_value = "human", help = "Who plays X")]
        x: AgentKind,
        #[arg(long, value_enum, default_value = "search", help = "Who plays O")]
        o: AgentKind,
        #[arg(long, default_value_t = DEFAULT_SEARCH_DEPTH, help = "Minimax search depth")]
        depth: u32,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
fn build_agent(kind: &AgentKind, depth: u32) -> Box<dyn Agent> {
    match kind {
        AgentKind::Human => Box::new(CliAgent::new()),
        AgentKind::Search => Box::new(SearchAgent::new(depth)),
        AgentKind::Random => Box::new(RandomAgent::new()),
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { x, o, depth, seed } => {
            let mut rng = if let Some(s) = seed {
                SmallRng::seed_from_u64(s)
            } else {
                let mut seed_rng = rand::rng();
                SmallRng::from_rng(&mut seed_rng)
            };

            let mut agent_x = build_agent(&x, depth);
            let mut agent_o = build_agent(&o, depth);
            let mut engine = GameEngine::new();

            loop {
                ui::print_global_board(&engine);
                ui::print_meta_board(&engine);

                match engine.outcome() {
                    Outcome::Win(p) => {
                        println!("Player {} wins!", p);
                        break;
                    }
                    Outcome::Draw => {
                        println!("Draw!");
                        break;
                    }
                    Outcome::InProgress => {}
                }

                let player = engine.current_player();
                let agent = match player {
                    uttt::Player::One => &mut agent_x,
                    uttt::Player::Two => &mut agent_o,
                };
                let mov = agent
                    .choose_move(&mut rng, &mut engine)
                    .map_err(|e| anyhow::anyhow!(e))?
                    .ok_or_else(|| anyhow::anyhow!("no move available in an unfinished game"))?;

                engine.make_move(mov).map_err(|e| anyhow::anyhow!(e))?;
                println!("Player {} plays {}", player, mov);
                if engine.history().last().map(|r| r.won_board).unwrap_or(false) {
                    println!("Player {} has won board {}!", player, mov.board);
                }
            }
        }
    }

    Ok(())
}
