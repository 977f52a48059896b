use super::ApiOptions;

setup_commands! {
    #![run(api: &ApiOptions)]

    /// Print one page of users
    List(list, api),
    /// Replace a user's names and email
    Update(update, api),
    /// Delete a user
    Delete(delete, api),
}

pub type Options = Command;

pub async fn run(command: Command, api: &ApiOptions) -> anyhow::Result<()> {
    command.run(api).await
}
