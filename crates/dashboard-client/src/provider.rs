//! Resource provider over the dashboard client
//!
//! Maps platform-style create/read/update/delete/list/health operations onto
//! dashboard server calls. Operation inputs arrive as loosely typed JSON
//! objects; results are returned as [`Resource`]s keyed by the dashboard id.

use crate::client::Client;
use crate::error::{ClientError, Result};
use dashboard_types::{CreateDashboard, Dashboard, UpdateDashboard};
use serde::Serialize;
use serde_json::{Map, Value};

/// Input payload of a provider operation
pub type Input = Map<String, Value>;

/// Provider-side view of a dashboard
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resource {
    pub external_id: String,
    pub display_name: String,
    pub properties: Map<String, Value>,
}

impl From<Dashboard> for Resource {
    fn from(d: Dashboard) -> Self {
        let mut properties = Map::new();
        properties.insert("id".to_string(), Value::String(d.id.clone()));
        properties.insert("name".to_string(), Value::String(d.name.clone()));
        properties.insert("description".to_string(), Value::String(d.description));
        properties.insert("project_id".to_string(), Value::String(d.project));

        Self {
            external_id: d.id,
            display_name: d.name,
            properties,
        }
    }
}

/// One page of listed resources with an opaque string cursor
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResourcePage {
    pub resources: Vec<Resource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthCheck {
    pub status: HealthStatus,
    pub message: String,
}

pub struct DashboardProvider {
    client: Client,
}

impl DashboardProvider {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Create a dashboard. `name` is required, `description` optional, and
    /// the project comes from the caller's request metadata.
    pub async fn create(&self, input: &Input, project_id: &str) -> Result<Resource> {
        let name = required_str(input, "name")?;
        let mut body = CreateDashboard::new(name, project_id);
        body.description = optional_str(input, "description")?;

        let created = self.client.create_dashboard(&body).await?;
        Ok(created.into())
    }

    pub async fn read(&self, external_id: &str) -> Result<Resource> {
        Ok(self.client.get_dashboard(external_id).await?.into())
    }

    /// Update name and/or description; absent fields are left as they are
    pub async fn update(&self, external_id: &str, input: &Input) -> Result<Resource> {
        let update = UpdateDashboard {
            name: optional_str(input, "name")?,
            description: optional_str(input, "description")?,
        };

        let updated = self.client.update_dashboard(external_id, &update).await?;
        Ok(updated.into())
    }

    /// Delete the dashboard behind `resource` and echo the resource back
    pub async fn delete(&self, resource: Resource) -> Result<Resource> {
        self.client.delete_dashboard(&resource.external_id).await?;
        Ok(resource)
    }

    pub async fn list(&self, next: Option<&str>) -> Result<ResourcePage> {
        let next = next.filter(|n| !n.is_empty());
        let page = self.client.list_dashboards(next).await?;

        let next = page.next_cursor().map(|n| n.to_string());
        let resources = page.dashboards.into_iter().map(Resource::from).collect();

        Ok(ResourcePage { resources, next })
    }

    /// Report the server as healthy, or return the error from `/healthz`
    pub async fn health_check(&self) -> Result<HealthCheck> {
        self.client.healthz().await?;
        Ok(HealthCheck {
            status: HealthStatus::Healthy,
            message: "The dashboard server is healthy.".to_string(),
        })
    }
}

fn required_str(input: &Input, key: &str) -> Result<String> {
    optional_str(input, key)?
        .ok_or_else(|| ClientError::InvalidInput(format!("{} is required", key)))
}

fn optional_str(input: &Input, key: &str) -> Result<Option<String>> {
    match input.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(ClientError::InvalidInput(format!("{} must be a string", key))),
    }
}
