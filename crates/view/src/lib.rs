//! One page of the user directory, with an edit modal and pagination
//!
//! [`UsersView`] owns the displayed users, the page position and the edit
//! state. Remote calls go through [`UsersApi`]; their failures are logged
//! and leave the view as it was.

mod api;
mod render;
mod state;
#[cfg(test)]
mod testing;
mod view;

pub use api::UsersApi;
pub use render::{render, MODAL_TITLE, TITLE};
pub use state::{DraftField, EditDraft, EditState, Pagination};
pub use view::{Mount, UsersView};
