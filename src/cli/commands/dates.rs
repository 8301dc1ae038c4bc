use crate::config::Config;
use crate::core::Roster;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::path;

/// Handle the `dates` command: print the distinct sorted date keys, one
/// per line. This is the CLI's date selector.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let roster = Roster::load(&path::roster_path(&cfg.roster));
    let dates = roster.distinct_dates();

    if dates.is_empty() {
        info("No dates in roster.");
        return Ok(());
    }

    for d in dates {
        println!("{}", d);
    }

    Ok(())
}
