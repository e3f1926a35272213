//! HTTP client for the dashboard server

use crate::error::{ClientError, Result};
use dashboard_types::{CreateDashboard, Dashboard, DashboardList, UpdateDashboard};
use reqwest::{Client as ReqwestClient, Response, StatusCode};
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct Client {
    http: ReqwestClient,
    base_url: String,
}

impl Client {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = ReqwestClient::builder().timeout(REQUEST_TIMEOUT).build()?;
        let base_url: String = base_url.into();
        let base_url = base_url.trim_end_matches('/').to_string();
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn create_dashboard(&self, dashboard: &CreateDashboard) -> Result<Dashboard> {
        let response = self
            .http
            .post(self.url("/dashboard/create"))
            .json(dashboard)
            .send()
            .await?;

        let response = expect_status(response, StatusCode::CREATED, "create", None)?;
        let created: Dashboard = response.json().await?;
        debug!("Created dashboard {}", created.id);
        Ok(created)
    }

    pub async fn get_dashboard(&self, id: &str) -> Result<Dashboard> {
        let response = self
            .http
            .get(self.url("/dashboard/get"))
            .query(&[("id", id)])
            .send()
            .await?;

        let response = expect_status(response, StatusCode::OK, "get", Some(id))?;
        Ok(response.json().await?)
    }

    pub async fn update_dashboard(&self, id: &str, update: &UpdateDashboard) -> Result<Dashboard> {
        let response = self
            .http
            .put(self.url("/dashboard/update"))
            .query(&[("id", id)])
            .json(update)
            .send()
            .await?;

        let response = expect_status(response, StatusCode::OK, "update", Some(id))?;
        Ok(response.json().await?)
    }

    pub async fn delete_dashboard(&self, id: &str) -> Result<()> {
        let response = self
            .http
            .delete(self.url("/dashboard/delete"))
            .query(&[("id", id)])
            .send()
            .await?;

        expect_status(response, StatusCode::NO_CONTENT, "delete", Some(id))?;
        debug!("Deleted dashboard {}", id);
        Ok(())
    }

    /// Fetch one page. `next` is the cursor returned by the previous page.
    pub async fn list_dashboards(&self, next: Option<&str>) -> Result<DashboardList> {
        let mut request = self.http.get(self.url("/dashboard/list"));
        if let Some(next) = next {
            request = request.query(&[("next", next)]);
        }

        let response = expect_status(request.send().await?, StatusCode::OK, "list", None)?;
        Ok(response.json().await?)
    }

    /// Walk every page starting from the first
    pub async fn list_all_dashboards(&self) -> Result<Vec<Dashboard>> {
        let mut dashboards = Vec::new();
        let mut next: Option<String> = None;

        loop {
            let page = self.list_dashboards(next.as_deref()).await?;
            let cursor = page.next_cursor();
            dashboards.extend(page.dashboards);
            match cursor {
                Some(cursor) => next = Some(cursor.to_string()),
                None => break,
            }
        }

        Ok(dashboards)
    }

    pub async fn healthz(&self) -> Result<()> {
        let response = self.http.get(self.url("/healthz")).send().await?;
        expect_status(response, StatusCode::OK, "health check", None)?;
        Ok(())
    }
}

fn expect_status(
    response: Response,
    expected: StatusCode,
    operation: &'static str,
    id: Option<&str>,
) -> Result<Response> {
    let status = response.status();
    if status == expected {
        return Ok(response);
    }

    match id {
        Some(id) if status == StatusCode::NOT_FOUND => Err(ClientError::NotFound(id.to_string())),
        _ => Err(ClientError::UnexpectedStatus { operation, status }),
    }
}
