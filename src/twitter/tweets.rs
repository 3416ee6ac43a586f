use chrono::Utc;
use reqwest::{Client, header::AUTHORIZATION};

use crate::{
    Error, Res,
    config::TwitterConfig,
    twitter::oauth::{self, Credentials},
    types::{CreateTweetRequest, CreateTweetResponse, CreatedTweet},
};

/// Creates a post containing `text` on behalf of the configured account.
///
/// Errors are returned as the client produced them; nothing is retried.
pub async fn publish(client: &Client, config: &TwitterConfig, text: &str) -> Res<CreatedTweet> {
    let url = config.tweets_url();
    let header = oauth::authorization_header(
        "POST",
        &url,
        &[],
        &Credentials::from(config),
        &oauth::generate_nonce(),
        Utc::now().timestamp(),
    );

    let res = client
        .post(&url)
        .header(AUTHORIZATION, header)
        .json(&CreateTweetRequest {
            text: text.to_string(),
        })
        .send()
        .await?;

    let status = res.status();
    if !status.is_success() {
        return Err(Error::status("X create post", status));
    }

    let body = res.text().await?;
    let created: CreateTweetResponse = serde_json::from_str(&body)?;
    Ok(created.data)
}
