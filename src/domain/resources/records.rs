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

//! Resource records and create specs exchanged with the control plane

use crate::shared::serde_ext::null_as_default;
use serde::{Deserialize, Serialize};

// ============================================================================
// Availability zones
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AvailabilityZone {
    pub id: String,
    pub name: String,
    pub kind: String,
    pub state: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AvailabilityZoneCreateSpec {
    pub name: String,
}

// ============================================================================
// Networks
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Network {
    pub id: String,
    pub name: String,
    pub state: String,
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub port_groups: Vec<String>,
    pub is_default: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkCreateSpec {
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    pub port_groups: Vec<String>,
}

// ============================================================================
// Deployments
// ============================================================================

/// Authentication settings of a deployment
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AuthInfo {
    pub enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub security_groups: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MigrationStatus {
    pub completed_data_migration_cycles: i64,
    pub data_migration_cycle_progress: i64,
    pub data_migration_cycle_size: i64,
    pub vibs_uploaded: i64,
    pub vibs_uploading: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Deployment {
    pub id: String,
    pub state: String,
    #[serde(deserialize_with = "null_as_default")]
    pub image_datastores: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub syslog_endpoint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ntp_endpoint: Option<String>,
    pub use_image_datastore_for_vms: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub auth: AuthInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub migration: Option<MigrationStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentCreateSpec {
    pub image_datastores: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub syslog_endpoint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ntp_endpoint: Option<String>,
    pub use_image_datastore_for_vms: bool,
    pub auth: AuthInfo,
}

/// Body of the initialize/finalize migration calls
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MigrationSpec {
    pub source_load_balancer_address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageDatastores {
    pub items: Vec<String>,
}

// ============================================================================
// Hosts and VMs
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Host {
    pub id: String,
    pub address: String,
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub state: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_zone: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AttachedDisk {
    pub id: String,
    pub name: String,
    pub kind: String,
    pub flavor: String,
    #[serde(rename = "capacityGb")]
    pub capacity_gb: i64,
    pub boot_disk: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Vm {
    pub id: String,
    pub name: String,
    pub flavor: String,
    pub state: String,
    pub source_image_id: String,
    pub host: String,
    pub datastore: String,
    #[serde(deserialize_with = "null_as_default")]
    pub attached_disks: Vec<AttachedDisk>,
}
