use anyhow::Result;
use colored::Colorize;
use userdir_api_client::{auth::Config, types::User};

use crate::commands::ApiOptions;

setup_command! {
    /// Page to fetch
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    page: u32,

    /// Print the raw page as JSON
    #[arg(long)]
    json: bool,
}

pub async fn run(opts: Options, api: &ApiOptions) -> Result<()> {
    let config = Config::load()?;
    let client = api.connect(&config)?;

    let listing = client.list_users(opts.page).await?;

    if opts.json {
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(());
    }

    for user in &listing.data {
        println!("{}", user_line(user));
    }
    println!("Page {} of {}", opts.page, listing.total_pages.max(1));

    Ok(())
}

fn user_line(user: &User) -> String {
    format!(
        "{:>4}  {}  {}",
        user.id,
        user.full_name().bold(),
        user.email.dimmed()
    )
}
