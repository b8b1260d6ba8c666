//! Maven site publishing

use super::{CommandOutcome, NO_POM_MESSAGE};
use crate::config::Settings;
use crate::error::Result;
use crate::pom::{site::setup_site, PomModel};

pub fn site_setup(model: Option<&mut PomModel>, settings: &Settings) -> Result<CommandOutcome> {
    let Some(model) = model else {
        return Ok(CommandOutcome::failure(NO_POM_MESSAGE));
    };
    let changed = setup_site(model, settings);
    let message = if changed {
        "Added Maven site support"
    } else {
        "Maven site support already configured"
    };
    Ok(CommandOutcome::success(message, changed))
}
