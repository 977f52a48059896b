use anyhow::Result;
use colored::Colorize;
use userdir_api_client::{auth::Config, types::UserUpdate};

use crate::commands::ApiOptions;

setup_command! {
    /// Id of the user to update
    id: u64,

    /// New first name, kept from the current record when omitted
    #[arg(long)]
    first_name: Option<String>,

    /// New last name, kept from the current record when omitted
    #[arg(long)]
    last_name: Option<String>,

    /// New email, kept from the current record when omitted
    #[arg(long)]
    email: Option<String>,
}

pub async fn run(opts: Options, api: &ApiOptions) -> Result<()> {
    let config = Config::load()?;
    let client = api.connect(&config)?;

    let update = match (opts.first_name, opts.last_name, opts.email) {
        (Some(first_name), Some(last_name), Some(email)) => UserUpdate {
            first_name,
            last_name,
            email,
        },
        (first_name, last_name, email) => {
            let Some(current) = client.find_user(opts.id).await? else {
                anyhow::bail!(
                    "User {} not found, pass all of --first-name, --last-name and --email",
                    opts.id
                );
            };
            UserUpdate {
                first_name: first_name.unwrap_or(current.first_name),
                last_name: last_name.unwrap_or(current.last_name),
                email: email.unwrap_or(current.email),
            }
        }
    };

    client.update_user(opts.id, &update).await?;

    println!(
        "Updated user {}: {} {} <{}>",
        opts.id.to_string().green(),
        update.first_name,
        update.last_name,
        update.email
    );
    Ok(())
}
