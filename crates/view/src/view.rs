use userdir_api_client::types::User;

use crate::{
    api::UsersApi,
    state::{DraftField, EditState, Pagination},
};

/// Outcome of [`UsersView::mount`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mount {
    /// The requested page was loaded (or its load failed and was logged)
    Ready,
    /// No stored token, the caller should send the user to login first
    LoginRequired,
}

/// Owner of one page of users and of the edit modal
///
/// Every remote failure is logged and swallowed: the view simply keeps its
/// previous state.
#[derive(Debug)]
pub struct UsersView<A> {
    api: A,
    users: Vec<User>,
    page: u32,
    total_pages: u32,
    edit: EditState,
}

impl<A: UsersApi> UsersView<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            users: Vec::new(),
            page: 1,
            total_pages: 1,
            edit: EditState::NotEditing,
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn edit_state(&self) -> &EditState {
        &self.edit
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.edit, EditState::Editing { .. })
    }

    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.page, self.total_pages)
    }

    /// Check for a stored token, then load `page`
    pub async fn mount(&mut self, has_token: bool, page: u32) -> Mount {
        if !has_token {
            tracing::debug!("No stored token, login required");
            return Mount::LoginRequired;
        }

        self.load_page(page).await;
        Mount::Ready
    }

    /// Replace the displayed users with server page `page`
    ///
    /// A page past the reported last one is replaced by the last page.
    pub async fn load_page(&mut self, page: u32) {
        let mut page = page.max(1);

        loop {
            let listing = match self.api.list_users(page).await {
                Ok(listing) => listing,
                Err(err) => {
                    tracing::error!(page, "Error fetching users: {err}");
                    return;
                }
            };

            let total_pages = listing.total_pages.max(1);
            if page > total_pages {
                tracing::debug!(page, total_pages, "Page out of range, loading last page");
                page = total_pages;
                continue;
            }

            tracing::debug!(page, total_pages, count = listing.data.len(), "Loaded users");
            self.users = listing.data;
            self.page = page;
            self.total_pages = total_pages;
            return;
        }
    }

    /// Move `delta` pages, staying within `1..=total_pages`
    pub async fn change_page(&mut self, delta: i32) {
        let next = if delta < 0 {
            self.page.saturating_sub(delta.unsigned_abs())
        } else {
            self.page.saturating_add(delta.unsigned_abs())
        }
        .clamp(1, self.total_pages);

        if next != self.page {
            self.load_page(next).await;
        }
    }

    pub async fn previous_page(&mut self) {
        self.change_page(-1).await;
    }

    pub async fn next_page(&mut self) {
        self.change_page(1).await;
    }

    /// Open the edit modal for `user`, seeding the draft from its current values
    pub fn begin_edit(&mut self, user: &User) {
        tracing::debug!(id = user.id, "Editing user");
        self.edit = EditState::begin(user);
    }

    /// Open the edit modal for the displayed user `id`, if present
    pub fn begin_edit_by_id(&mut self, id: u64) -> bool {
        let Some(user) = self.users.iter().find(|user| user.id == id) else {
            return false;
        };
        self.edit = EditState::begin(user);
        tracing::debug!(id, "Editing user");
        true
    }

    pub fn update_draft(&mut self, field: DraftField, value: impl Into<String>) {
        match &mut self.edit {
            EditState::Editing { draft, .. } => field.set(draft, value.into()),
            EditState::NotEditing => tracing::debug!(?field, "Draft update ignored, not editing"),
        }
    }

    /// Send the draft, then merge it into the displayed user and close the modal
    pub async fn submit_update(&mut self) {
        let EditState::Editing { id, draft } = &self.edit else {
            tracing::debug!("Submit ignored, not editing");
            return;
        };
        let id = *id;

        match self.api.update_user(id, draft).await {
            Ok(()) => {
                let draft = draft.clone();
                if let Some(user) = self.users.iter_mut().find(|user| user.id == id) {
                    user.apply(&draft);
                }
                self.edit = EditState::NotEditing;
            }
            Err(err) => tracing::error!(id, "Error updating user: {err}"),
        }
    }

    pub fn cancel_edit(&mut self) {
        self.edit = EditState::NotEditing;
    }

    /// Delete user `id` remotely, then drop it from the displayed page
    pub async fn delete(&mut self, id: u64) {
        match self.api.delete_user(id).await {
            Ok(()) => self.users.retain(|user| user.id != id),
            Err(err) => tracing::error!(id, "Error deleting user: {err}"),
        }
    }
}
