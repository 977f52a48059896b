use anyhow::{Context, Result};
use userdir_api_client::{auth::Config, Client, PROD_BASEURL};

#[macro_use]
mod macros;

setup_commands! {
    #![run(api: &ApiOptions)]

    #[command(flatten)]
    Auth(auth, api),
    /// Browse users page by page, edit and delete them
    Browse(browse, api),
    /// One-shot user operations
    #[command(subcommand, visible_alias = "user")]
    Users(users, api),
    /// Print auto-completion script for your shell init file
    GenerateShellCompletion(completion),
}

/// Connection settings shared by every command
#[derive(Debug, Clone, clap::Args)]
pub struct ApiOptions {
    /// Base URL of the user-directory API [default: https://reqres.in]
    #[arg(long, env = "USERDIR_API_URL", global = true)]
    pub api_url: Option<String>,

    /// API key sent in the `x-api-key` header
    #[arg(long, env = "USERDIR_API_KEY", global = true, hide_env_values = true)]
    pub api_key: Option<String>,

    /// Will use the given login profile
    #[arg(short, long, id = "PROFILE", env = "USERDIR_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Send the stored token as `Authorization: Bearer <token>`
    #[arg(long, global = true)]
    pub send_token: bool,
}

impl ApiOptions {
    pub fn profile(&self) -> Option<&str> {
        self.profile.as_deref()
    }

    /// Base URL from the command line, else the profile, else production
    pub fn baseurl(&self, config: &Config) -> String {
        self.api_url
            .clone()
            .or_else(|| config.get(self.profile()).and_then(|creds| creds.url))
            .unwrap_or_else(|| PROD_BASEURL.to_string())
    }

    pub fn connect(&self, config: &Config) -> Result<Client> {
        let bearer_token = if self.send_token {
            let token = config.get(self.profile()).map(|creds| creds.token);
            if token.is_none() {
                tracing::warn!("--send-token given but no token is stored");
            }
            token
        } else {
            None
        };

        userdir_api_client::new()
            .baseurl(self.baseurl(config))
            .maybe_api_key(self.api_key.clone())
            .maybe_bearer_token(bearer_token)
            .connect()
            .context("Could not create API client")
    }
}
