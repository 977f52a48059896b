use crate::{api::UsersApi, state::DraftField, UsersView};

pub const TITLE: &str = "User List";
pub const MODAL_TITLE: &str = "Edit User";

/// Plain-text rendering of the whole view: card list, edit modal, pagination
pub fn render<A: UsersApi>(view: &UsersView<A>) -> String {
    let mut lines = vec![TITLE.to_string(), String::new()];

    for user in view.users() {
        lines.extend([
            format!("#{:<4} {}", user.id, user.full_name()),
            format!("      {}", user.email),
            format!("      {}", user.avatar),
            String::new(),
        ]);
    }

    if let (Some(id), Some(draft)) = (view.edit_state().editing_id(), view.edit_state().draft()) {
        lines.push(format!("{MODAL_TITLE} #{id}"));
        lines.extend(DraftField::ALL.into_iter().map(|field| {
            format!("  {:<10} {}", format!("{}:", field.label()), field.get(draft))
        }));
        lines.push(String::new());
    }

    lines.push(pagination_line(view));
    lines.push(String::new());
    lines.join("\n")
}

fn pagination_line<A: UsersApi>(view: &UsersView<A>) -> String {
    let pagination = view.pagination();
    let previous = if pagination.previous_enabled {
        "[Previous]"
    } else {
        "(Previous)"
    };
    let next = if pagination.next_enabled {
        "[Next]"
    } else {
        "(Next)"
    };
    format!("{previous} {} {next}", pagination.label())
}
