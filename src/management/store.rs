use reqwest::Client;

use crate::{
    Error, Res,
    config::AirtableConfig,
    types::{RecordFields, StoredRecord, TokenRecord},
};

/// Reads and overwrites the single Airtable record holding the access token.
pub struct TokenStore {
    client: Client,
    config: AirtableConfig,
}

impl TokenStore {
    /// The record addressed by `config` is the only one ever touched.
    pub fn new(client: Client, config: AirtableConfig) -> Self {
        TokenStore { client, config }
    }

    /// Fetches the stored record.
    ///
    /// # Errors
    ///
    /// - [`Error::Request`] when the store cannot be reached
    /// - [`Error::Status`] for any non-success status
    /// - [`Error::Decode`] when the body is not a record
    pub async fn get_token(&self) -> Res<TokenRecord> {
        let res = self
            .client
            .get(self.config.record_url())
            .bearer_auth(&self.config.api_key)
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            return Err(Error::status("token store", status));
        }

        let body = res.text().await?;
        let record: StoredRecord = serde_json::from_str(&body)?;
        Ok(record.into_token())
    }

    /// Overwrites the stored record with a partial update of its fields.
    ///
    /// There is no concurrency check; the last writer wins.
    ///
    /// # Errors
    ///
    /// - [`Error::Request`] when the store cannot be reached
    /// - [`Error::Status`] for any non-success status
    pub async fn put_token(&self, token: &TokenRecord) -> Res<()> {
        let payload = RecordFields {
            fields: token.clone(),
        };

        let res = self
            .client
            .patch(self.config.record_url())
            .bearer_auth(&self.config.api_key)
            .json(&payload)
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            return Err(Error::status("token store", status));
        }

        Ok(())
    }
}
