use std::fmt;

use anyhow::Result;
use inquire::{InquireError, Select, Text};
use userdir_api_client::{auth::Config, types::User};
use userdir_view::{render, DraftField, EditState, Mount, Pagination, UsersView};

use crate::commands::ApiOptions;

setup_command! {
    /// Page to open first
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    page: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Action {
    Edit { id: u64, name: String },
    Delete { id: u64, name: String },
    Previous,
    Next,
    EditField { field: DraftField, current: String },
    Update,
    Cancel,
    Quit,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Edit { id, name } => write!(f, "Edit #{id} {name}"),
            Self::Delete { id, name } => write!(f, "Delete #{id} {name}"),
            Self::Previous => f.write_str("Previous page"),
            Self::Next => f.write_str("Next page"),
            Self::EditField { field, current } => write!(f, "{}: {current}", field.label()),
            Self::Update => f.write_str("Update"),
            Self::Cancel => f.write_str("Cancel"),
            Self::Quit => f.write_str("Quit"),
        }
    }
}

/// Actions offered for the current state of the view
fn menu(users: &[User], edit: &EditState, pagination: Pagination) -> Vec<Action> {
    if let Some(draft) = edit.draft() {
        let mut actions: Vec<_> = DraftField::ALL
            .into_iter()
            .map(|field| Action::EditField {
                field,
                current: field.get(draft).to_string(),
            })
            .collect();
        actions.extend([Action::Update, Action::Cancel]);
        return actions;
    }

    let mut actions = Vec::with_capacity(users.len() * 2 + 3);
    for user in users {
        actions.push(Action::Edit {
            id: user.id,
            name: user.full_name(),
        });
        actions.push(Action::Delete {
            id: user.id,
            name: user.full_name(),
        });
    }
    if pagination.previous_enabled {
        actions.push(Action::Previous);
    }
    if pagination.next_enabled {
        actions.push(Action::Next);
    }
    actions.push(Action::Quit);
    actions
}

pub async fn run(opts: Options, api: &ApiOptions) -> Result<()> {
    let mut config = Config::load()?;
    let mut view = UsersView::new(api.connect(&config)?);

    if view.mount(config.has_token(api.profile()), opts.page).await == Mount::LoginRequired {
        println!("You need to log in first.");
        let mut stored = Config::load_stored()?;
        if !super::auth::login::prompt_token(&mut stored, api)? {
            return Ok(());
        }
        config = stored;
        view = UsersView::new(api.connect(&config)?);
        let mount = view.mount(config.has_token(api.profile()), opts.page).await;
        if mount == Mount::LoginRequired {
            anyhow::bail!("No token stored after login");
        }
    }

    loop {
        println!("{}", render(&view));

        let actions = menu(view.users(), view.edit_state(), view.pagination());
        let action = match Select::new("What next?", actions).prompt() {
            Ok(action) => action,
            Err(InquireError::OperationCanceled) if view.is_editing() => Action::Cancel,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(err) => return Err(err.into()),
        };

        match action {
            Action::Edit { id, .. } => {
                view.begin_edit_by_id(id);
            }
            Action::Delete { id, .. } => view.delete(id).await,
            Action::Previous => view.previous_page().await,
            Action::Next => view.next_page().await,
            Action::EditField { field, current } => {
                if let Some(value) = Text::new(field.label())
                    .with_initial_value(&current)
                    .prompt_skippable()?
                {
                    view.update_draft(field, value);
                }
            }
            Action::Update => view.submit_update().await,
            Action::Cancel => view.cancel_edit(),
            Action::Quit => break,
        }
    }

    Ok(())
}
