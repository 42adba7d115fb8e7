use mei_rapidix::{init, report, App, AppError, Config, ConfigManager};

const USAGE: &str = "Usage: mei_summary [--plain]\n\nPrints the current month's income, expenses, DAS paid and profit.";

fn main() {
    init();

    let mut plain = false;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--plain" => plain = true,
            "-h" | "--help" => {
                println!("{USAGE}");
                return;
            }
            other => {
                eprintln!("Error: unknown argument `{other}`\n{USAGE}");
                std::process::exit(2);
            }
        }
    }

    if let Err(err) = run(plain) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run(plain: bool) -> Result<(), AppError> {
    let manager = ConfigManager::with_base_dir(Config::default().resolve_data_dir())?;
    let config = manager.load()?;
    let app = App::open(config)?;
    for warning in &app.load_report().warnings {
        eprintln!("Warning: {warning}");
    }
    let style = report::ReportStyle::for_config(app.config(), !plain);
    print!("{}", report::render(&app.dashboard(), &style));
    Ok(())
}
