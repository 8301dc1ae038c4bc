use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Roster;
use crate::errors::AppResult;
use crate::render::ExportLogic;
use crate::theme;
use crate::utils::path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        date,
        force,
    } = cmd
    {
        let roster = Roster::load(&path::roster_path(&cfg.roster));
        let dark = theme::controller_from_config()?.is_dark();
        let generated = chrono::Local::now().format("%Y-%m-%d %H:%M").to_string();

        ExportLogic::export(&roster, format.clone(), file, date, *force, dark, &generated)?;
    }
    Ok(())
}
