use reqwest::{
    header::{ACCEPT, CONTENT_TYPE, USER_AGENT},
    RequestBuilder,
};

pub trait Headers {
    fn default_headers(self, token: &str) -> RequestBuilder;
}

impl Headers for RequestBuilder {
    fn default_headers(self, token: &str) -> RequestBuilder {
        self.bearer_auth(token)
            .header(ACCEPT, "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28")
            .header(USER_AGENT, "pr-checker")
    }
}

pub fn json_content_type(builder: RequestBuilder) -> RequestBuilder {
    builder.header(CONTENT_TYPE, "application/json")
}

#[macro_export]
macro_rules! get {
    ($client:expr, $url:expr) => {{
        use $crate::{github::macros::Headers, http::ResponseHandler};

        $client
            .http()
            .get($url)
            .default_headers($client.token())
            .send()
            .await
            .handle()
            .await
    }};
}

#[macro_export]
macro_rules! post {
    ($client:expr, $url:expr, $body:expr) => {{
        use $crate::{github::macros::Headers, http::ResponseHandler};

        $crate::github::macros::json_content_type(
            $client
                .http()
                .post($url)
                .default_headers($client.token()),
        )
        .body($body)
        .send()
        .await
        .handle()
        .await
    }};
}

#[cfg(test)]
mod tests {
    use crate::github::github_client::GithubClient;
    use anyhow::Result;
    use mockito::Server;

    #[tokio::test]
    async fn get_macro() -> Result<()> {
        let mut server = Server::new_async().await;
        let client = GithubClient::new("test_token", server.url());

        let expected_body = "test_body";
        let mock = server
            .mock("GET", "/")
            .match_header("authorization", "Bearer test_token")
            .match_header("accept", "application/vnd.github+json")
            .match_header("x-github-api-version", "2022-11-28")
            .match_header("user-agent", "pr-checker")
            .with_body(expected_body)
            .create_async()
            .await;

        let response = get!(client, format!("{}/", server.url()))?;

        mock.assert_async().await;
        assert_eq!(response, expected_body);

        Ok(())
    }

    #[tokio::test]
    async fn post_macro() -> Result<()> {
        let mut server = Server::new_async().await;
        let client = GithubClient::new("test_token", server.url());

        let expected_body = "test_body";
        let mock = server
            .mock("POST", "/")
            .match_header("authorization", "Bearer test_token")
            .match_header("content-type", "application/json")
            .match_header("user-agent", "pr-checker")
            .match_body(r#"{"body":"hello"}"#)
            .with_status(201)
            .with_body(expected_body)
            .create_async()
            .await;

        let response = post!(
            client,
            format!("{}/", server.url()),
            r#"{"body":"hello"}"#.to_owned()
        )?;

        mock.assert_async().await;
        assert_eq!(response, expected_body);

        Ok(())
    }
}
