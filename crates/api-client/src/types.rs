use serde::{Deserialize, Serialize};

/// A user record as served by the directory API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub avatar: String,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Overwrite the editable fields with the values of `update`
    pub fn apply(&mut self, update: &UserUpdate) {
        self.first_name.clone_from(&update.first_name);
        self.last_name.clone_from(&update.last_name);
        self.email.clone_from(&update.email);
    }
}

/// One page of the `GET /api/users` listing
///
/// Only `data` and `total_pages` are relied upon, the remaining pagination
/// metadata defaults to zero when the server omits it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPage {
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub per_page: u32,
    #[serde(default)]
    pub total: u32,
    pub total_pages: u32,
    pub data: Vec<User>,
}

/// Body of `PUT /api/users/{id}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserUpdate {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl From<&User> for UserUpdate {
    fn from(user: &User) -> Self {
        Self {
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_user_page_from_reqres_payload() {
        let payload = r#"{
            "page": 2,
            "per_page": 6,
            "total": 12,
            "total_pages": 2,
            "data": [
                {"id": 7, "email": "michael.lawson@reqres.in", "first_name": "Michael", "last_name": "Lawson", "avatar": "https://reqres.in/img/faces/7-image.jpg"}
            ],
            "support": {"url": "https://reqres.in/#support-heading", "text": "ignored"}
        }"#;

        let page: UserPage = serde_json::from_str(payload).unwrap();
        assert_eq!(page.page, 2);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.data[0].full_name(), "Michael Lawson");
    }

    #[test]
    fn test_user_page_minimal_payload() {
        let payload = r#"{"data": [], "total_pages": 3}"#;

        let page: UserPage = serde_json::from_str(payload).unwrap();
        assert_eq!(page.page, 0);
        assert_eq!(page.total_pages, 3);
        assert!(page.data.is_empty());
    }

    #[test]
    fn test_update_body_has_only_editable_fields() {
        let update = UserUpdate {
            first_name: "Ann".to_string(),
            last_name: "Lee".to_string(),
            email: "a@x.com".to_string(),
        };

        let body = serde_json::to_value(&update).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"first_name": "Ann", "last_name": "Lee", "email": "a@x.com"})
        );
    }

    #[test]
    fn test_apply_keeps_id_and_avatar() {
        let mut user = User {
            id: 7,
            first_name: "Ann".to_string(),
            last_name: "Lee".to_string(),
            email: "a@x.com".to_string(),
            avatar: "u1.png".to_string(),
        };
        let update = UserUpdate {
            first_name: "Anna".to_string(),
            last_name: "Leigh".to_string(),
            email: "anna@x.com".to_string(),
        };

        user.apply(&update);
        assert_eq!(user.id, 7);
        assert_eq!(user.avatar, "u1.png");
        assert_eq!(UserUpdate::from(&user), update);
    }
}
