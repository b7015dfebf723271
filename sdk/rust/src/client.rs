use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Success envelope returned by every tracker endpoint.
#[derive(Debug, Deserialize)]
pub struct Envelope {
    pub success: bool,
    pub data: Value,
    pub count: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct NewProject {
    pub name: String,
    pub chain: String,
    pub status: Option<String>,
}

/// Error from a tracker API call: either transport-level or a non-2xx
/// response with its body preserved for inspection.
#[derive(Debug)]
pub enum TrackerError {
    Http(reqwest::Error),
    Api { status: u16, body: Value },
}

impl std::fmt::Display for TrackerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrackerError::Http(e) => write!(f, "HTTP error: {}", e),
            TrackerError::Api { status, body } => {
                write!(f, "API error status {}: {}", status, body)
            }
        }
    }
}

impl std::error::Error for TrackerError {}

impl From<reqwest::Error> for TrackerError {
    fn from(e: reqwest::Error) -> Self {
        TrackerError::Http(e)
    }
}

pub struct TrackerClient {
    client: Client,
    base_url: String,
}

impl TrackerClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.to_string(),
        }
    }

    /// List projects, optionally filtered by status label.
    pub async fn list_projects(&self, status: Option<&str>) -> Result<Envelope, TrackerError> {
        let mut req = self.client.get(format!("{}/api/projects", self.base_url));
        if let Some(status) = status {
            req = req.query(&[("status", status)]);
        }
        Self::read(req.send().await?).await
    }

    /// Fetch a single project by id.
    pub async fn get_project(&self, id: &str) -> Result<Envelope, TrackerError> {
        let res = self
            .client
            .get(format!("{}/api/projects/{}", self.base_url, id))
            .send()
            .await?;
        Self::read(res).await
    }

    /// Create a project; the server assigns id and defaults the status.
    pub async fn create_project(&self, project: &NewProject) -> Result<Envelope, TrackerError> {
        let res = self
            .client
            .post(format!("{}/api/projects", self.base_url))
            .json(project)
            .send()
            .await?;
        Self::read(res).await
    }

    /// List wallets, optionally filtered by address and chain id.
    pub async fn list_wallets(
        &self,
        address: Option<&str>,
        chain_id: Option<&str>,
    ) -> Result<Envelope, TrackerError> {
        let mut req = self.client.get(format!("{}/api/wallets", self.base_url));
        if let Some(address) = address {
            req = req.query(&[("address", address)]);
        }
        if let Some(chain_id) = chain_id {
            req = req.query(&[("chainId", chain_id)]);
        }
        Self::read(req.send().await?).await
    }

    /// List transactions where the address is sender or receiver.
    pub async fn wallet_transactions(&self, address: &str) -> Result<Envelope, TrackerError> {
        let res = self
            .client
            .get(format!(
                "{}/api/wallets/{}/transactions",
                self.base_url, address
            ))
            .send()
            .await?;
        Self::read(res).await
    }

    async fn read(res: reqwest::Response) -> Result<Envelope, TrackerError> {
        let status = res.status();
        if !status.is_success() {
            let body = res.json::<Value>().await.unwrap_or(Value::Null);
            return Err(TrackerError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(res.json::<Envelope>().await?)
    }
}
