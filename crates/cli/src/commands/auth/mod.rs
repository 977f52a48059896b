use super::ApiOptions;

setup_commands! {
    #![run(api: &ApiOptions)]

    /// Store a token for the user directory
    Login(login, api),
    /// Forget the stored token
    Logout(logout, api),
}

pub type Options = Command;

pub async fn run(command: Command, api: &ApiOptions) -> anyhow::Result<()> {
    command.run(api).await
}
