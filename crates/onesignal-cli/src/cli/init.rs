/*
[INPUT]:  Interactive user input via CLI
[OUTPUT]: Generated YAML configuration file
[POS]:    CLI initialization layer
[UPDATE]: When CliConfig schema changes
*/

use anyhow::{Context, Result};
use console::style;
use dialoguer::{Confirm, Input, Password, theme::ColorfulTheme};
use std::path::PathBuf;

use onesignal_cli::CliConfig;

pub fn run_init(output: Option<PathBuf>) -> Result<()> {
    let output = match output {
        Some(path) => path,
        None => CliConfig::default_path()
            .context("no config directory on this platform, pass --output")?,
    };

    println!("{}", style("OneSignal CLI setup").bold().cyan());
    println!(
        "{}",
        style("Keys are under Dashboard > App Settings > Keys & IDs.").dim()
    );

    let theme = ColorfulTheme::default();

    let app_id: String = Input::with_theme(&theme)
        .with_prompt("App ID")
        .interact_text()?;

    let app_api_key = Password::with_theme(&theme)
        .with_prompt("REST API Key")
        .interact()?;

    println!("\n{}", style("--- Account (optional, for `apps` commands) ---").bold());
    let user_auth_key = if Confirm::with_theme(&theme)
        .with_prompt("Configure a user auth key?")
        .default(false)
        .interact()?
    {
        Some(
            Password::with_theme(&theme)
                .with_prompt("User Auth Key")
                .interact()?,
        )
    } else {
        None
    };

    let config = CliConfig {
        app_id: Some(app_id),
        app_api_key: Some(app_api_key),
        user_auth_key,
        ..CliConfig::default()
    };
    config.write_to(&output)?;

    println!("\n{}", style("SUCCESS!").bold().green());
    println!(
        "Configuration written to: {}",
        style(output.display()).cyan()
    );

    Ok(())
}
