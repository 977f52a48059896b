use userdir_api_client::types::{User, UserUpdate};

/// Unsaved values of the edit form
pub type EditDraft = UserUpdate;

/// Edit form field, as targeted by [`crate::UsersView::update_draft`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    FirstName,
    LastName,
    Email,
}

impl DraftField {
    pub const ALL: [Self; 3] = [Self::FirstName, Self::LastName, Self::Email];

    pub fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First name",
            Self::LastName => "Last name",
            Self::Email => "Email",
        }
    }

    pub fn get(self, draft: &EditDraft) -> &str {
        match self {
            Self::FirstName => &draft.first_name,
            Self::LastName => &draft.last_name,
            Self::Email => &draft.email,
        }
    }

    pub(crate) fn set(self, draft: &mut EditDraft, value: String) {
        match self {
            Self::FirstName => draft.first_name = value,
            Self::LastName => draft.last_name = value,
            Self::Email => draft.email = value,
        }
    }
}

/// Whether the edit modal is open, and for whom
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditState {
    #[default]
    NotEditing,
    Editing { id: u64, draft: EditDraft },
}

impl EditState {
    pub(crate) fn begin(user: &User) -> Self {
        Self::Editing {
            id: user.id,
            draft: EditDraft::from(user),
        }
    }

    pub fn editing_id(&self) -> Option<u64> {
        match self {
            Self::NotEditing => None,
            Self::Editing { id, .. } => Some(*id),
        }
    }

    pub fn draft(&self) -> Option<&EditDraft> {
        match self {
            Self::NotEditing => None,
            Self::Editing { draft, .. } => Some(draft),
        }
    }
}

/// Pagination controls as they should be displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub total_pages: u32,
    pub previous_enabled: bool,
    pub next_enabled: bool,
}

impl Pagination {
    pub(crate) fn new(page: u32, total_pages: u32) -> Self {
        Self {
            page,
            total_pages,
            previous_enabled: page > 1,
            next_enabled: page < total_pages,
        }
    }

    pub fn label(&self) -> String {
        format!("Page {} of {}", self.page, self.total_pages)
    }
}
