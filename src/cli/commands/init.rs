use crate::config::Config;
use crate::errors::AppResult;

use crate::cli::parser::Cli;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - the preferences file (theme state)
///  - a starter roster CSV with just the header row
pub fn handle(cli: &Cli) -> AppResult<()> {
    println!("⚙️  Initializing shiftroster…");

    if let Some(custom) = &cli.roster {
        Config::init_all(Some(custom.clone()), cli.test)?;
    } else {
        Config::init_all(None, cli.test)?;
    }

    let cfg = Config::load();

    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗓️  Roster     : {}", &cfg.roster);
    println!("🎉 shiftroster initialization completed!");

    Ok(())
}
