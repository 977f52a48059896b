use anyhow::Result;
use userdir_api_client::auth::Config;

use crate::commands::ApiOptions;

setup_command! {}

pub async fn run(_opts: Options, api: &ApiOptions) -> Result<()> {
    let mut config = Config::load_stored()?;

    if !config.remove(api.profile()) {
        match api.profile() {
            Some(profile) => println!("No token stored for profile '{profile}'"),
            None => println!("No token stored"),
        }
        return Ok(());
    }

    config.save()?;
    println!("Token removed");
    Ok(())
}
