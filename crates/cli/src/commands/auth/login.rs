use anyhow::Result;
use colored::Colorize;
use userdir_api_client::auth::{Config, Credentials};

use crate::commands::ApiOptions;

setup_command! {
    /// Token to store, prompted for when omitted
    #[arg(long)]
    token: Option<String>,
}

pub async fn run(opts: Options, api: &ApiOptions) -> Result<()> {
    let mut config = Config::load_stored()?;

    match opts.token {
        Some(token) => store_token(&mut config, api, token)?,
        None => {
            if !prompt_token(&mut config, api)? {
                return Ok(());
            }
        }
    }

    println!("Token stored for {}", api.baseurl(&config).green());
    Ok(())
}

/// Ask for a token interactively and save it
///
/// Returns `false` when the user declined to overwrite an existing token.
pub fn prompt_token(config: &mut Config, api: &ApiOptions) -> Result<bool> {
    use inquire::{Confirm, Password, PasswordDisplayMode};

    if config.has_token(api.profile()) {
        let overwrite = Confirm::new("A token is already present, do you want to overwrite it?")
            .with_default(false)
            .prompt()?;
        if !overwrite {
            return Ok(false);
        }
    }

    let token = Password::new("Enter your user-directory token:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()?;

    store_token(config, api, token)?;
    Ok(true)
}

fn store_token(config: &mut Config, api: &ApiOptions, token: String) -> Result<()> {
    let url = api
        .api_url
        .clone()
        .or_else(|| config.get(api.profile()).and_then(|creds| creds.url));

    config.set(api.profile.clone(), Credentials { token, url });
    config.save()?;

    tracing::debug!(profile = ?api.profile, "Token stored");
    Ok(())
}
