use anyhow::Result;
use colored::Colorize;
use inquire::Confirm;
use userdir_api_client::auth::Config;

use crate::commands::ApiOptions;

setup_command! {
    /// Id of the user to delete
    id: u64,

    /// Run this command in non-interactive mode (with no confirmation prompts)
    #[arg(long = "yes")]
    noconfirm: bool,
}

pub async fn run(opts: Options, api: &ApiOptions) -> Result<()> {
    let confirm = opts.noconfirm
        || Confirm::new(&format!("Delete user {}?", opts.id))
            .with_default(false)
            .prompt()?;
    if !confirm {
        return Ok(());
    }

    let config = Config::load()?;
    let client = api.connect(&config)?;

    client.delete_user(opts.id).await?;

    println!("Deleted user {}", opts.id.to_string().red());
    Ok(())
}
