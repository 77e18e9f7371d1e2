use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use seating_planner::app::session;
use seating_planner::utils::logger;
use seating_planner::{
    CliConfig, LocalRosterStore, SeatingEngine, SeatingError, Settings, StdTerminal, SystemClock,
};

fn main() {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);
    tracing::debug!("CLI config: {:?}", cli);

    match run(&cli) {
        Ok(cycles) => {
            tracing::info!("✅ Showed {} seating plans", cycles);
        }
        Err(e) => {
            tracing::error!(
                "❌ Seating planner failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: &CliConfig) -> Result<usize, SeatingError> {
    let settings = Settings::resolve(cli)?;
    tracing::debug!("Resolved settings: {:?}", settings);

    let store = LocalRosterStore::new(settings.names_dir.clone());
    let mut terminal = StdTerminal;

    let path = match &settings.file {
        Some(path) => path.clone(),
        None => session::choose_file(&store, &mut terminal)?,
    };
    let roster = session::load_roster(&store, &path)?;

    let engine = SeatingEngine::new(
        roster,
        settings.layout,
        settings.orientation,
        settings.format.clone(),
        SystemClock,
    )?;

    let mut rng = match settings.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_rng(&mut rand::rng()),
    };

    session::run(&engine, &mut terminal, &mut rng)
}
