use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use userdir_api_client::{
    types::{User, UserPage, UserUpdate},
    Error, Result,
};

use crate::api::UsersApi;

pub fn user(id: u64, first_name: &str, last_name: &str, email: &str, avatar: &str) -> User {
    User {
        id,
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email: email.to_string(),
        avatar: avatar.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List(u32),
    Update(u64, UserUpdate),
    Delete(u64),
}

/// In-memory API serving fixed pages and recording every call
#[derive(Debug, Clone, Default)]
pub struct StubApi {
    inner: Arc<Mutex<StubState>>,
}

#[derive(Debug, Default)]
struct StubState {
    pages: HashMap<u32, UserPage>,
    calls: Vec<Call>,
    fail_next: bool,
}

impl StubApi {
    pub fn with_page(self, page: u32, total_pages: u32, data: Vec<User>) -> Self {
        self.inner.lock().unwrap().pages.insert(
            page,
            UserPage {
                page,
                per_page: 6,
                total: 0,
                total_pages,
                data,
            },
        );
        self
    }

    /// Make the next call fail with a server error
    pub fn fail_next(&self) {
        self.inner.lock().unwrap().fail_next = true;
    }

    pub fn calls(&self) -> Vec<Call> {
        self.inner.lock().unwrap().calls.clone()
    }

    fn record(&self, call: Call) -> Result<()> {
        let mut state = self.inner.lock().unwrap();
        state.calls.push(call);
        if std::mem::take(&mut state.fail_next) {
            return Err(Error::Api {
                status: 500,
                message: "stub failure".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl UsersApi for StubApi {
    async fn list_users(&self, page: u32) -> Result<UserPage> {
        self.record(Call::List(page))?;
        let state = self.inner.lock().unwrap();
        state.pages.get(&page).cloned().ok_or_else(|| Error::Api {
            status: 404,
            message: format!("no page {page}"),
        })
    }

    async fn update_user(&self, id: u64, update: &UserUpdate) -> Result<()> {
        self.record(Call::Update(id, update.clone()))
    }

    async fn delete_user(&self, id: u64) -> Result<()> {
        self.record(Call::Delete(id))
    }
}
