use anyhow::{bail, Context, Result};
use http::{header, Request, Uri};
use isahc::{AsyncReadResponseExt, HttpClient};

use crate::model::{SendRequest, TemplateParams};

#[derive(Debug)]
pub struct Client {
    client: HttpClient,
    base: String,
}

impl Client {
    pub fn new() -> Self {
        Client::default()
    }

    fn send_url(&self) -> Result<Uri> {
        let uri = format!("{}/api/v1.0/email/send", self.base);

        Ok(uri.parse::<Uri>()?)
    }

    /// Delivers one email through the provider. A single attempt: any
    /// transport error or non-success status is returned to the caller,
    /// which decides whether the user retries.
    pub async fn send_email(
        &self,
        service_id: &str,
        template_id: &str,
        params: &TemplateParams,
        public_key: &str,
    ) -> Result<()> {
        let request = SendRequest {
            service_id,
            template_id,
            user_id: public_key,
            template_params: params,
        };

        let body = serde_json::to_vec(&request)?;

        let req = Request::builder()
            .method(http::Method::POST)
            .uri(self.send_url()?)
            .header(header::CONTENT_TYPE, "application/json")
            .body(body)?;

        let mut res = self
            .client
            .send_async(req)
            .await
            .context("Failed to send request")?;

        let status = res.status();

        if !status.is_success() {
            let reason = res.text().await.unwrap_or_default();

            bail!("Email provider rejected the request ({}): {}", status, reason);
        }

        Ok(())
    }
}

impl Default for Client {
    fn default() -> Client {
        let client = HttpClient::builder().build().unwrap();

        let base = String::from("https://api.emailjs.com");

        Client { client, base }
    }
}
