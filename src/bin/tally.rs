use std::error::Error;
use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use tabletally::games::quacks::BookSelection;
use tabletally::games::seven_wonders::{self, SidePolicy};
use tabletally::games::wyrmspan::{self, GUILDS};
use tabletally::{
    BreakdownRow, Category, GameKind, HeatSetup, PlayerSetup, QuacksSetup, ScoreResult, ScoreSession,
    ScoreSheetFile, ScoredGame, SevenWonders, SevenWondersCategory, Wyrmspan, WyrmspanCategory,
    render_breakdown, render_leaderboard,
};

/// Environment variable holding the log filter (e.g. `debug`).
const LOG_ENV: &str = "TALLY_LOG";

#[derive(Parser, Debug)]
#[command(
    name = "tally",
    about = "Randomized setups and score sheets for tabletop games."
)]
struct Args {
    /// Increase log verbosity (-v debug, -vv trace); overrides TALLY_LOG
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List supported games
    Games,
    /// Compute the leaderboard for a JSON score sheet
    Score {
        /// Score sheet file
        sheet: PathBuf,
        /// Game to score (defaults to the sheet's `game` field)
        #[arg(short = 'g', long = "game")]
        game: Option<String>,
        /// Print results as JSON
        #[arg(long = "json", action = ArgAction::SetTrue)]
        json: bool,
    },
    /// Run a randomized setup
    Setup(SetupArgs),
}

#[derive(clap::Args, Debug)]
struct SetupArgs {
    /// Game to set up
    game: String,

    /// RNG seed for a reproducible setup
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// Number of players (ignored when --names is given)
    #[arg(short = 'p', long = "players")]
    players: Option<usize>,

    /// Comma separated player names
    #[arg(long = "names", value_delimiter = ',')]
    names: Vec<String>,

    /// Shuffle seating before anything else
    #[arg(long = "shuffle-seats", action = ArgAction::SetTrue)]
    shuffle_seats: bool,

    /// 7 Wonders: which wonder sides to use
    #[arg(long = "sides", value_enum, default_value_t = SideArg::A)]
    sides: SideArg,

    /// Quacks: play with The Herb Witches
    #[arg(long = "herb-witches", action = ArgAction::SetTrue)]
    herb_witches: bool,

    /// Quacks: play with The Alchemists
    #[arg(long = "alchemists", action = ArgAction::SetTrue)]
    alchemists: bool,

    /// Quacks: pick a separate book per ingredient
    #[arg(long = "mix-and-match", action = ArgAction::SetTrue)]
    mix_and_match: bool,

    /// Heat: track to race on (random when omitted)
    #[arg(long = "track")]
    track: Option<String>,

    /// Heat: use the weather module
    #[arg(long = "weather", action = ArgAction::SetTrue)]
    weather: bool,

    /// Heat: car colors in the race (all when omitted)
    #[arg(long = "colors", value_delimiter = ',')]
    colors: Vec<String>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SideArg {
    A,
    B,
    Both,
}

impl From<SideArg> for SidePolicy {
    fn from(value: SideArg) -> Self {
        match value {
            SideArg::A => SidePolicy::AllA,
            SideArg::B => SidePolicy::AllB,
            SideArg::Both => SidePolicy::Mixed,
        }
    }
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);
    if let Err(err) = run(args) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    match args.command {
        Command::Games => {
            for kind in GameKind::ALL {
                let note = if kind.is_scored() { "setup + scoring" } else { "setup" };
                println!("{:<10} {} ({note})", kind.key(), kind.title());
                match kind {
                    GameKind::SevenWonders => print_categories(&SevenWondersCategory::ALL),
                    GameKind::Wyrmspan => print_categories(&WyrmspanCategory::ALL),
                    GameKind::Quacks | GameKind::Heat => {}
                }
            }
            Ok(())
        }
        Command::Score { sheet, game, json } => score(sheet, game, json),
        Command::Setup(setup_args) => setup(setup_args),
    }
}

/// Score sheet keys accepted for a game.
fn print_categories<C: Category>(categories: &[C]) {
    for category in categories {
        println!("    {:<20} {}", category.key(), category.label());
    }
}

#[derive(Serialize)]
struct ScoreReport<'a> {
    game: &'static str,
    results: &'a [ScoreResult],
    breakdown: Vec<BreakdownRow>,
    totals: Vec<i64>,
}

fn score(path: PathBuf, game: Option<String>, json: bool) -> Result<(), Box<dyn Error>> {
    let sheet = ScoreSheetFile::load(&path)?;
    let name = game
        .or_else(|| sheet.game.clone())
        .ok_or("no game given; pass --game or set `game` in the sheet")?;
    let kind: GameKind = name.parse()?;
    info!(game = kind.key(), path = %path.display(), "scoring sheet");
    match kind {
        GameKind::SevenWonders => {
            let mut session = sheet.into_session(SevenWonders::new())?;
            sheet.apply_wonders(&mut session)?;
            report(&mut session, json)
        }
        GameKind::Wyrmspan => {
            let mut session = sheet.into_session(Wyrmspan::new())?;
            report(&mut session, json)
        }
        GameKind::Quacks | GameKind::Heat => {
            Err(format!("{} has no score sheet, only a setup", kind.title()).into())
        }
    }
}

fn report<G: ScoredGame>(session: &mut ScoreSession<G>, json: bool) -> Result<(), Box<dyn Error>> {
    session.calculate();
    if json {
        let payload = ScoreReport {
            game: session.game().name(),
            results: session.results(),
            breakdown: session.breakdown(),
            totals: session.totals(),
        };
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }
    println!("{}\n", session.game().name());
    println!(
        "{}",
        render_breakdown(session.players(), &session.breakdown(), &session.totals())
    );
    print!("{}", render_leaderboard(session.results()));
    Ok(())
}

fn setup(args: SetupArgs) -> Result<(), Box<dyn Error>> {
    let kind: GameKind = args.game.parse()?;
    let seed = args.seed.unwrap_or_else(rand::random);
    debug!(game = kind.key(), seed, "running setup");
    let mut rng = StdRng::seed_from_u64(seed);
    println!("{} setup (seed {seed})", kind.title());

    match kind {
        GameKind::SevenWonders => {
            let mut players = roster(
                &args,
                seven_wonders::MIN_PLAYERS,
                seven_wonders::MAX_PLAYERS,
                None,
            )?;
            if args.shuffle_seats {
                players.randomize_order(&mut rng);
            }
            let players = players.finish();
            let mut game = SevenWonders::new();
            game.assign_defaults(players.len());
            game.randomize(args.sides.into(), &mut rng);
            for (player, assignment) in players.iter().zip(game.assignments()) {
                println!("  {:<12} {} ({:?})", player.name, assignment.wonder, assignment.side);
            }
        }
        GameKind::Wyrmspan => {
            let mut players = roster(
                &args,
                wyrmspan::MIN_PLAYERS,
                wyrmspan::MAX_PLAYERS,
                Some(&wyrmspan::PLAYER_COLORS[..]),
            )?;
            if args.shuffle_seats {
                players.randomize_order(&mut rng);
            }
            let first = players.pick_first_player(&mut rng).map(str::to_string);
            for player in players.finish() {
                let color = player.color.as_deref().unwrap_or("-");
                let marker = if first.as_deref() == Some(player.name.as_str()) {
                    "  <- starts"
                } else {
                    ""
                };
                println!("  {:<12} {color}{marker}", player.name);
            }
            let mut game = Wyrmspan::new();
            if let Some(guild) = game.pick_guild(&mut rng) {
                let color = GUILDS
                    .iter()
                    .find(|(name, _)| *name == guild)
                    .map_or("", |(_, color)| *color);
                println!("Guild: {guild} {color}");
            }
            println!("Objectives:");
            for (idx, objective) in game.pick_objectives(&mut rng).iter().enumerate() {
                println!("  {}. {objective}", idx + 1);
            }
        }
        GameKind::Quacks => {
            let quacks = QuacksSetup {
                herb_witches: args.herb_witches,
                alchemists: args.alchemists,
                mix_and_match: args.mix_and_match,
            };
            match quacks.randomize_books(&mut rng) {
                BookSelection::Set(set) => println!("Books: Set {set}"),
                BookSelection::Mixed(books) => {
                    println!("Books:");
                    for (color, set) in books {
                        println!("  {color:<9} {set}");
                    }
                }
            }
            let expansions = quacks.randomize_expansions(&mut rng);
            if let Some(witches) = expansions.herb_witches {
                println!("Herb witches:");
                println!("  Silver: {}", witches.silver);
                println!("  Bronze: {}", witches.bronze);
                println!("  Gold:   {}", witches.gold);
            }
            if let Some(essences) = expansions.essences {
                println!("Essences: {}", essences.join(", "));
            }
        }
        GameKind::Heat => {
            let mut heat = HeatSetup::new();
            match &args.track {
                Some(track) => heat.select_track(track)?,
                None => {
                    heat.pick_random_track(&mut rng);
                }
            }
            println!("Track: {}", heat.track().unwrap_or("-"));
            heat.choose_weather(args.weather, &mut rng);
            if let Some(weather) = heat.weather() {
                println!("Weather: {}", weather.weather);
                println!("Road conditions: {}", weather.road_conditions.join(", "));
            }
            if args.colors.is_empty() {
                heat.select_all_colors(true);
            } else {
                for color in &args.colors {
                    heat.select_color(color)?;
                }
            }
            println!("Grid order:");
            for (idx, color) in heat.randomize_order(&mut rng)?.iter().enumerate() {
                println!("  {}. {color}", idx + 1);
            }
        }
    }
    Ok(())
}

fn roster(
    args: &SetupArgs,
    min: usize,
    max: usize,
    palette: Option<&[&str]>,
) -> Result<PlayerSetup, Box<dyn Error>> {
    let mut players = PlayerSetup::new(min, max)?;
    if let Some(palette) = palette {
        players = players.with_palette(palette.iter().copied());
    }
    let count = if args.names.is_empty() {
        args.players.unwrap_or(min)
    } else {
        args.names.len()
    };
    players.set_count(count)?;
    for (idx, name) in args.names.iter().enumerate() {
        players.set_name(idx, name.as_str())?;
    }
    Ok(players)
}
