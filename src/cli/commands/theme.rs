use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::theme;
use crate::ui::messages::{info, success};

/// Handle the `theme` subcommand
pub fn handle(cmd: &Commands, _cfg: &Config) -> AppResult<()> {
    if let Commands::Theme { toggle, status } = cmd {
        let mut controller = theme::controller_from_config()?;

        if *toggle {
            // persisted before it is reported, per the controller contract
            let now_dark = controller.toggle()?;
            success(format!(
                "Dark mode {}",
                if now_dark { "enabled" } else { "disabled" }
            ));
            return Ok(());
        }

        if *status && !controller.has_stored_preference() {
            info("No stored preference; using the ambient terminal scheme.");
        }

        println!(
            "Theme: {}",
            if controller.is_dark() { "dark" } else { "light" }
        );
    }
    Ok(())
}
