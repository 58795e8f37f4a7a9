use crate::domain::models::{Bill, Household, HouseholdDetail, Share, Summary};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const REQUEST_TIMEOUT_MS: u64 = 10_000;

#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("network error calling {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("unauthorized by {url} (HTTP {status})")]
    Unauthorized { url: String, status: u16 },
    #[error("unexpected HTTP {status} from {url}")]
    Status { url: String, status: u16 },
    #[error("malformed response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinRequest<'a> {
    pub user_id: &'a str,
    pub email: &'a str,
    pub name: &'a str,
}

#[derive(Serialize)]
struct GroupName<'a> {
    name: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBill<'a> {
    pub description: &'a str,
    pub amount: f64,
    pub due_date: &'a str,
    pub shares: &'a [Share],
}

#[derive(Serialize)]
struct ShareUpdate<'a> {
    status: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedGroup {
    pub group_id: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedBill {
    pub bill_id: String,
    pub description: String,
    pub amount: f64,
}

/// Blocking client for the bill service. One bounded-timeout request per
/// call, no retries; a failed mutation needs a new user action. The bearer
/// token is attached when configured and the request goes out
/// unauthenticated otherwise.
pub struct ApiClient {
    base: String,
    token: Option<String>,
    http: reqwest::blocking::Client,
}

impl ApiClient {
    pub fn new(base: &str, token: Option<String>) -> anyhow::Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_millis(REQUEST_TIMEOUT_MS))
            .build()?;
        Ok(Self {
            base: base.trim_end_matches('/').to_string(),
            token,
            http,
        })
    }

    pub fn list_households(&self) -> Result<Vec<Household>, ApiError> {
        self.get_json("/groups")
    }

    pub fn household_detail(&self, group_id: &str) -> Result<HouseholdDetail, ApiError> {
        self.get_json(&format!("/groups/{group_id}"))
    }

    pub fn create_household(&self, name: &str) -> Result<CreatedGroup, ApiError> {
        self.send_json(reqwest::Method::POST, "/groups", &GroupName { name })
    }

    pub fn join_household(&self, group_id: &str, join: &JoinRequest) -> Result<(), ApiError> {
        self.send_discard(
            reqwest::Method::POST,
            &format!("/groups/{group_id}/join"),
            join,
        )
    }

    pub fn list_bills(&self, group_id: &str) -> Result<Vec<Bill>, ApiError> {
        self.get_json(&format!("/groups/{group_id}/bills"))
    }

    pub fn create_bill(&self, group_id: &str, bill: &NewBill) -> Result<CreatedBill, ApiError> {
        self.send_json(
            reqwest::Method::POST,
            &format!("/groups/{group_id}/bills"),
            bill,
        )
    }

    pub fn mark_share_paid(
        &self,
        group_id: &str,
        bill_id: &str,
        user_id: &str,
    ) -> Result<(), ApiError> {
        self.send_discard(
            reqwest::Method::PATCH,
            &format!("/groups/{group_id}/bills/{bill_id}/shares/{user_id}"),
            &ShareUpdate { status: "paid" },
        )
    }

    pub fn my_summary(&self) -> Result<Summary, ApiError> {
        self.get_json("/me/summary")
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base, path);
        let resp = self.dispatch(self.http.get(&url), &url)?;
        resp.json()
            .map_err(|source| ApiError::Decode { url, source })
    }

    fn send_json<B: Serialize, T: DeserializeOwned>(
        &self,
        method: reqwest::Method,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base, path);
        let resp = self.dispatch(self.http.request(method, &url).json(body), &url)?;
        resp.json()
            .map_err(|source| ApiError::Decode { url, source })
    }

    fn send_discard<B: Serialize>(
        &self,
        method: reqwest::Method,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        let url = format!("{}{}", self.base, path);
        self.dispatch(self.http.request(method, &url).json(body), &url)?;
        Ok(())
    }

    fn dispatch(
        &self,
        mut request: reqwest::blocking::RequestBuilder,
        url: &str,
    ) -> Result<reqwest::blocking::Response, ApiError> {
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        let resp = request.send().map_err(|source| ApiError::Network {
            url: url.to_string(),
            source,
        })?;
        let status = resp.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(ApiError::Unauthorized {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        if !status.is_success() {
            return Err(ApiError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(resp)
    }
}
