mod format;
mod menu;

use anyhow::Result;
use clap::Parser;

use calculator::CalculatorModule;
use calculator_bootstrap::LoggingConfig;

/// Interactive calculator with a numbered text menu
#[derive(Parser)]
#[command(name = "calculator-cli")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Log verbosity level (-v info, -vv debug, -vvv trace); logs go to stderr
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    calculator_bootstrap::init_logging(&LoggingConfig::with_level("warn"), cli.verbose);

    let module = CalculatorModule::default();
    let client = module.client();

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    menu::run(&mut stdin.lock(), &mut stdout.lock(), client.as_ref())?;

    tracing::debug!("calculator session finished");
    Ok(())
}
