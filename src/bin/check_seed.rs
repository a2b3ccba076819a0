use std::path::PathBuf;

use dotenvy::dotenv;

use mergington::database::seed;
use mergington::AppConfig;

// Validates the configured seed (first argument, else SEED_FILE, else the
// built-in one) and prints a short report.
fn main() {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| AppConfig::from_env().seed_file);

    match seed::load_seed(path.as_deref()) {
        Ok(activities) => {
            let report = seed::summarize(&activities);
            println!(
                "seed ok: activities={}, participants={}, open_spots={}, full={}",
                report.activities, report.participants, report.open_spots, report.full_activities
            );
        }
        Err(e) => {
            eprintln!("seed invalid: {}", e);
            std::process::exit(1);
        }
    }
}
