use crate::{
    error::{Error, Result},
    types::{User, UserPage, UserUpdate},
};

/// Client for the user-directory endpoints under `{baseurl}/api/users`
#[derive(Debug, Clone)]
pub struct Client {
    baseurl: String,
    client: reqwest::Client,
}

impl Client {
    /// Create a client with a default reqwest client and no extra headers
    pub fn new(baseurl: &str) -> Result<Self> {
        Self::new_with_client(baseurl, reqwest::Client::new())
    }

    /// Create a client reusing a preconfigured reqwest client
    pub fn new_with_client(baseurl: &str, client: reqwest::Client) -> Result<Self> {
        let parsed = url::Url::parse(baseurl)
            .map_err(|err| Error::InvalidConfig(format!("invalid base URL {baseurl}: {err}")))?;
        if parsed.cannot_be_a_base() {
            return Err(Error::InvalidConfig(format!(
                "base URL {baseurl} cannot be used as a base"
            )));
        }

        Ok(Self {
            baseurl: baseurl.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn baseurl(&self) -> &str {
        &self.baseurl
    }

    fn users_url(&self) -> String {
        format!("{}/api/users", self.baseurl)
    }

    fn user_url(&self, id: u64) -> String {
        format!("{}/api/users/{id}", self.baseurl)
    }

    /// `GET /api/users?page={page}`
    pub async fn list_users(&self, page: u32) -> Result<UserPage> {
        tracing::debug!(page, "Listing users");

        let response = self
            .client
            .get(self.users_url())
            .query(&[("page", page)])
            .send()
            .await?;
        let response = check_status(response).await?;

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// `PUT /api/users/{id}` with the editable fields as body
    ///
    /// The response body is ignored, any 2xx status counts as success.
    pub async fn update_user(&self, id: u64, update: &UserUpdate) -> Result<()> {
        tracing::debug!(id, "Updating user");

        let response = self.client.put(self.user_url(id)).json(update).send().await?;
        check_status(response).await?;

        Ok(())
    }

    /// `DELETE /api/users/{id}`
    pub async fn delete_user(&self, id: u64) -> Result<()> {
        tracing::debug!(id, "Deleting user");

        let response = self.client.delete(self.user_url(id)).send().await?;
        check_status(response).await?;

        Ok(())
    }

    /// Walk the listing page by page until a user with `id` shows up
    pub async fn find_user(&self, id: u64) -> Result<Option<User>> {
        let mut page = 1;
        loop {
            let listing = self.list_users(page).await?;
            if let Some(user) = listing.data.into_iter().find(|user| user.id == id) {
                return Ok(Some(user));
            }
            if page >= listing.total_pages {
                return Ok(None);
            }
            page += 1;
        }
    }
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status().as_u16();
    let message = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    Err(Error::Api { status, message })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_server::{request_body, request_line, serve};
    use pretty_assertions::assert_eq;

    const PAGE_2: &str = r#"{"page":2,"per_page":6,"total":13,"total_pages":3,"data":[{"id":7,"first_name":"Ann","last_name":"Lee","email":"a@x.com","avatar":"u1.png"}]}"#;

    #[tokio::test]
    async fn test_list_users_sends_page_query() {
        let (baseurl, server) = serve(vec![("200 OK", PAGE_2)]).await;
        let client = Client::new(&baseurl).unwrap();

        let page = client.list_users(2).await.unwrap();

        assert_eq!(page.total_pages, 3);
        assert_eq!(
            page.data,
            vec![User {
                id: 7,
                first_name: "Ann".to_string(),
                last_name: "Lee".to_string(),
                email: "a@x.com".to_string(),
                avatar: "u1.png".to_string(),
            }]
        );

        let requests = server.await.unwrap();
        assert_eq!(request_line(&requests[0]), "GET /api/users?page=2 HTTP/1.1");
    }

    #[tokio::test]
    async fn test_update_user_puts_draft_body() {
        let (baseurl, server) = serve(vec![("200 OK", r#"{"updatedAt":"2024-01-01"}"#)]).await;
        let client = Client::new(&format!("{baseurl}/")).unwrap();

        let update = UserUpdate {
            first_name: "Anna".to_string(),
            last_name: "Leigh".to_string(),
            email: "anna@x.com".to_string(),
        };
        client.update_user(7, &update).await.unwrap();

        let requests = server.await.unwrap();
        assert_eq!(request_line(&requests[0]), "PUT /api/users/7 HTTP/1.1");
        let body: UserUpdate = serde_json::from_str(request_body(&requests[0])).unwrap();
        assert_eq!(body, update);
    }

    #[tokio::test]
    async fn test_delete_user_accepts_no_content() {
        let (baseurl, server) = serve(vec![("204 No Content", "")]).await;
        let client = Client::new(&baseurl).unwrap();

        client.delete_user(3).await.unwrap();

        let requests = server.await.unwrap();
        assert_eq!(request_line(&requests[0]), "DELETE /api/users/3 HTTP/1.1");
    }

    #[tokio::test]
    async fn test_error_status_is_reported() {
        let (baseurl, server) =
            serve(vec![("401 Unauthorized", r#"{"error":"Missing API key"}"#)]).await;
        let client = Client::new(&baseurl).unwrap();

        let err = client.delete_user(3).await.unwrap_err();

        assert_eq!(err.status(), Some(401));
        match err {
            Error::Api { message, .. } => assert!(message.contains("Missing API key")),
            other => panic!("unexpected error: {other:?}"),
        }
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_malformed_listing_is_a_json_error() {
        let (baseurl, server) = serve(vec![("200 OK", r#"{"data":"nope"}"#)]).await;
        let client = Client::new(&baseurl).unwrap();

        let err = client.list_users(1).await.unwrap_err();

        assert!(matches!(err, Error::Json(_)));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_find_user_walks_pages() {
        let (baseurl, server) = serve(vec![
            (
                "200 OK",
                r#"{"total_pages":2,"data":[{"id":1,"first_name":"A","last_name":"B","email":"a@b.c","avatar":"1.png"}]}"#,
            ),
            ("200 OK", PAGE_2),
        ])
        .await;
        let client = Client::new(&baseurl).unwrap();

        let user = client.find_user(7).await.unwrap().unwrap();
        assert_eq!(user.email, "a@x.com");

        let requests = server.await.unwrap();
        assert_eq!(request_line(&requests[1]), "GET /api/users?page=2 HTTP/1.1");
    }

    #[tokio::test]
    async fn test_find_user_stops_at_last_page() {
        let (baseurl, server) = serve(vec![("200 OK", r#"{"total_pages":1,"data":[]}"#)]).await;
        let client = Client::new(&baseurl).unwrap();

        assert_eq!(client.find_user(42).await.unwrap(), None);
        assert_eq!(server.await.unwrap().len(), 1);
    }

    #[test]
    fn test_invalid_baseurl_is_rejected() {
        let err = Client::new("not a url").unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }
}
