// Copyright 2025 JiangLong.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Resource endpoints. Mutating calls return the queued task, list calls
//! return the full collection across all pages.

use super::client::PhotonClient;
use super::transport::ApiRequest;
use crate::domain::resources::{
    AvailabilityZone, AvailabilityZoneCreateSpec, Deployment, DeploymentCreateSpec, Host,
    ImageDatastores, MigrationSpec, Network, NetworkCreateSpec, Vm,
};
use crate::domain::task::{Task, TaskFilter};
use crate::infrastructure::constants::{
    AVAILABILITY_ZONES_PATH, DEPLOYMENTS_PATH, NETWORKS_PATH, TASKS_PATH,
};
use crate::shared::error::Result;

impl PhotonClient {
    // ------------------------------------------------------------------
    // Tasks
    // ------------------------------------------------------------------

    pub async fn list_tasks(&self, filter: &TaskFilter) -> Result<Vec<Task>> {
        self.list_all(ApiRequest::get(TASKS_PATH).with_query(filter.query_pairs()))
            .await
    }

    // ------------------------------------------------------------------
    // Availability zones
    // ------------------------------------------------------------------

    pub async fn create_availability_zone(&self, spec: &AvailabilityZoneCreateSpec) -> Result<Task> {
        self.submit(ApiRequest::post(AVAILABILITY_ZONES_PATH, Self::body(spec)?))
            .await
    }

    pub async fn get_availability_zone(&self, id: &str) -> Result<AvailabilityZone> {
        self.get(&format!("{}/{}", AVAILABILITY_ZONES_PATH, id)).await
    }

    pub async fn list_availability_zones(&self) -> Result<Vec<AvailabilityZone>> {
        self.list_all(ApiRequest::get(AVAILABILITY_ZONES_PATH)).await
    }

    pub async fn delete_availability_zone(&self, id: &str) -> Result<Task> {
        self.submit(ApiRequest::delete(format!("{}/{}", AVAILABILITY_ZONES_PATH, id)))
            .await
    }

    pub async fn availability_zone_tasks(&self, id: &str, filter: &TaskFilter) -> Result<Vec<Task>> {
        self.list_all(
            ApiRequest::get(format!("{}/{}/tasks", AVAILABILITY_ZONES_PATH, id))
                .with_query(filter.query_pairs()),
        )
        .await
    }

    // ------------------------------------------------------------------
    // Networks
    // ------------------------------------------------------------------

    pub async fn create_network(&self, spec: &NetworkCreateSpec) -> Result<Task> {
        self.submit(ApiRequest::post(NETWORKS_PATH, Self::body(spec)?))
            .await
    }

    pub async fn get_network(&self, id: &str) -> Result<Network> {
        self.get(&format!("{}/{}", NETWORKS_PATH, id)).await
    }

    pub async fn list_networks(&self, name: Option<&str>) -> Result<Vec<Network>> {
        let query = name
            .filter(|n| !n.is_empty())
            .map(|n| vec![("name".to_string(), n.to_string())])
            .unwrap_or_default();
        self.list_all(ApiRequest::get(NETWORKS_PATH).with_query(query))
            .await
    }

    pub async fn delete_network(&self, id: &str) -> Result<Task> {
        self.submit(ApiRequest::delete(format!("{}/{}", NETWORKS_PATH, id)))
            .await
    }

    pub async fn network_tasks(&self, id: &str, filter: &TaskFilter) -> Result<Vec<Task>> {
        self.list_all(
            ApiRequest::get(format!("{}/{}/tasks", NETWORKS_PATH, id))
                .with_query(filter.query_pairs()),
        )
        .await
    }

    // ------------------------------------------------------------------
    // Deployments
    // ------------------------------------------------------------------

    pub async fn create_deployment(&self, spec: &DeploymentCreateSpec) -> Result<Task> {
        self.submit(ApiRequest::post(DEPLOYMENTS_PATH, Self::body(spec)?))
            .await
    }

    pub async fn get_deployment(&self, id: &str) -> Result<Deployment> {
        self.get(&format!("{}/{}", DEPLOYMENTS_PATH, id)).await
    }

    pub async fn list_deployments(&self) -> Result<Vec<Deployment>> {
        self.list_all(ApiRequest::get(DEPLOYMENTS_PATH)).await
    }

    pub async fn delete_deployment(&self, id: &str) -> Result<Task> {
        self.submit(ApiRequest::delete(format!("{}/{}", DEPLOYMENTS_PATH, id)))
            .await
    }

    pub async fn deployment_hosts(&self, id: &str) -> Result<Vec<Host>> {
        self.list_all(ApiRequest::get(format!("{}/{}/hosts", DEPLOYMENTS_PATH, id)))
            .await
    }

    pub async fn deployment_vms(&self, id: &str) -> Result<Vec<Vm>> {
        self.list_all(ApiRequest::get(format!("{}/{}/vms", DEPLOYMENTS_PATH, id)))
            .await
    }

    pub async fn initialize_migration(&self, id: &str, spec: &MigrationSpec) -> Result<Task> {
        self.submit(ApiRequest::post(
            format!("{}/{}/initialize_migration", DEPLOYMENTS_PATH, id),
            Self::body(spec)?,
        ))
        .await
    }

    pub async fn finalize_migration(&self, id: &str, spec: &MigrationSpec) -> Result<Task> {
        self.submit(ApiRequest::post(
            format!("{}/{}/finalize_migration", DEPLOYMENTS_PATH, id),
            Self::body(spec)?,
        ))
        .await
    }

    pub async fn set_image_datastores(&self, id: &str, datastores: &ImageDatastores) -> Result<Task> {
        self.submit(ApiRequest::post(
            format!("{}/{}/set_image_datastores", DEPLOYMENTS_PATH, id),
            Self::body(datastores)?,
        ))
        .await
    }
}
