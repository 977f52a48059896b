//! Remote operations the view depends on

use async_trait::async_trait;
use userdir_api_client::{
    types::{UserPage, UserUpdate},
    Client, Result,
};

/// The three user-directory calls backing the view
#[async_trait]
pub trait UsersApi: Send + Sync {
    /// Fetch one page of users
    async fn list_users(&self, page: u32) -> Result<UserPage>;

    /// Replace the editable fields of user `id`
    async fn update_user(&self, id: u64, update: &UserUpdate) -> Result<()>;

    /// Delete user `id`
    async fn delete_user(&self, id: u64) -> Result<()>;
}

#[async_trait]
impl UsersApi for Client {
    async fn list_users(&self, page: u32) -> Result<UserPage> {
        Client::list_users(self, page).await
    }

    async fn update_user(&self, id: u64, update: &UserUpdate) -> Result<()> {
        Client::update_user(self, id, update).await
    }

    async fn delete_user(&self, id: u64) -> Result<()> {
        Client::delete_user(self, id).await
    }
}
