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

mod common;

use common::{client, links, page, run, task, Reply, ScriptedTransport};
use photon_cli::PhotonError;
use reqwest::Method;
use serde_json::json;

fn completed(id: &str, operation: &str, entity_id: &str, kind: &str) -> Reply {
    Reply::Json(task(id, operation, "COMPLETED", entity_id, kind))
}

fn queued(id: &str, operation: &str, entity_id: &str, kind: &str) -> Reply {
    Reply::Json(task(id, operation, "QUEUED", entity_id, kind))
}

#[tokio::test(start_paused = true)]
async fn test_create_delete_network() {
    let transport = ScriptedTransport::new()
        .on(
            Method::POST,
            "/networks",
            vec![queued("fake-id", "CREATE_NETWORK", "network-ID", "network")],
        )
        .on(
            Method::GET,
            "/tasks/fake-id",
            vec![completed("fake-id", "CREATE_NETWORK", "network-ID", "network")],
        )
        .on(
            Method::DELETE,
            "/networks/network-ID",
            vec![queued("del-id", "DELETE_NETWORK", "network-ID", "network")],
        )
        .on(
            Method::GET,
            "/tasks/del-id",
            vec![completed("del-id", "DELETE_NETWORK", "network-ID", "network")],
        );
    let (client, log) = client(transport);

    let out = run(
        &client,
        &[
            "--non-interactive",
            "network",
            "create",
            "--name",
            "network_name",
            "--portgroups",
            "portgroup, portgroup2",
        ],
    )
    .await
    .unwrap();
    assert_eq!(out, "network_name\tnetwork-ID\n");

    let body = log.lock().unwrap()[0].body.clone().unwrap();
    assert_eq!(body["name"], "network_name");
    assert_eq!(body["portGroups"], json!(["portgroup", "portgroup2"]));
    assert!(body.get("description").is_none());

    let out = run(&client, &["--non-interactive", "network", "delete", "network-ID"])
        .await
        .unwrap();
    assert_eq!(out, "network-ID\n");
}

#[tokio::test]
async fn test_list_networks_across_pages() {
    let transport = ScriptedTransport::new()
        .on(
            Method::GET,
            "/networks",
            vec![Reply::Json(page(
                json!([{ "id": "network_id", "name": "network_name", "state": "READY",
                         "portGroups": ["port", "group"], "description": "desc" }]),
                Some("/fake-next-page-link"),
            ))],
        )
        .on(
            Method::GET,
            "/fake-next-page-link",
            vec![Reply::Json(page(
                json!([{ "id": "network_id2", "name": "other", "state": "CREATING" }]),
                None,
            ))],
        );
    let (client, _) = client(transport);

    let out = run(&client, &["--non-interactive", "network", "list"]).await.unwrap();
    assert_eq!(
        out,
        "2\nnetwork_id\tnetwork_name\tREADY\tport,group\tdesc\nnetwork_id2\tother\tCREATING\t\t\n"
    );

    let out = run(&client, &["network", "list"]).await.unwrap();
    assert!(out.contains("network_name"));
    assert!(out.ends_with("Total: 2\n"));
}

#[tokio::test]
async fn test_show_network() {
    let transport = ScriptedTransport::new().on(
        Method::GET,
        "/networks/network_id",
        vec![Reply::Json(json!({
            "id": "network_id", "name": "network_name", "state": "READY",
            "description": "desc", "portGroups": ["port", "group"], "isDefault": true
        }))],
    );
    let (client, _) = client(transport);

    let out = run(&client, &["--non-interactive", "network", "show", "network_id"])
        .await
        .unwrap();
    assert_eq!(out, "network_id\tnetwork_name\tREADY\tdesc\tport,group\ttrue\n");
}

#[tokio::test(start_paused = true)]
async fn test_create_deployment_non_interactive() {
    let transport = ScriptedTransport::new()
        .on(
            Method::POST,
            "/deployments",
            vec![queued("create-id", "CREATE_DEPLOYMENT", "deployment-ID", "deployment")],
        )
        .on(
            Method::GET,
            "/tasks/create-id",
            vec![completed("create-id", "CREATE_DEPLOYMENT", "deployment-ID", "deployment")],
        );
    let (client, log) = client(transport);

    let out = run(
        &client,
        &[
            "--non-interactive",
            "deployment",
            "create",
            "--image-datastores",
            "testname",
            "--ntp-endpoint",
            "1.2.3.4",
        ],
    )
    .await
    .unwrap();
    assert_eq!(out, "deployment-ID\n");

    let body = log.lock().unwrap()[0].body.clone().unwrap();
    assert_eq!(body["imageDatastores"], json!(["testname"]));
    assert_eq!(body["ntpEndpoint"], "1.2.3.4");
    assert_eq!(body["auth"]["enabled"], false);
}

#[tokio::test]
async fn test_create_deployment_requires_datastores() {
    let (client, log) = client(ScriptedTransport::new());

    let err = run(&client, &["--non-interactive", "deployment", "create"])
        .await
        .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<PhotonError>(),
        Some(PhotonError::Usage(_))
    ));
    assert!(links(&log).is_empty());
}

#[tokio::test]
async fn test_enable_auth_requires_oauth_settings() {
    let (client, log) = client(ScriptedTransport::new());

    let err = run(
        &client,
        &[
            "--non-interactive",
            "deployment",
            "create",
            "--image-datastores",
            "ds1",
            "--enable-auth",
            "--oauth-endpoint",
            "10.0.0.1",
        ],
    )
    .await
    .unwrap_err();
    assert!(err.to_string().contains("--oauth-tenant"));
    assert!(links(&log).is_empty());
}

#[tokio::test]
async fn test_list_deployment_hosts_and_vms() {
    let transport = ScriptedTransport::new()
        .on(
            Method::GET,
            "/deployments/1/hosts",
            vec![Reply::Json(page(
                json!([{ "id": "host-1", "address": "10.0.0.1", "username": "u",
                         "password": "p", "state": "READY", "tags": ["CLOUD", "MGMT"] }]),
                None,
            ))],
        )
        .on(
            Method::GET,
            "/deployments/1/vms",
            vec![Reply::Json(page(
                json!([{ "id": "vm-1", "name": "fake-vm", "flavor": "small", "state": "STARTED",
                         "attachedDisks": [{ "name": "d1", "kind": "ephemeral-disk",
                                             "flavor": "f", "capacityGb": 2, "bootDisk": true }] }]),
                None,
            ))],
        );
    let (client, _) = client(transport);

    let out = run(&client, &["--non-interactive", "deployment", "list-hosts", "1"])
        .await
        .unwrap();
    assert_eq!(out, "1\nhost-1\tREADY\t10.0.0.1\tCLOUD,MGMT\n");

    let out = run(&client, &["--non-interactive", "deployment", "list-vms", "1"])
        .await
        .unwrap();
    assert_eq!(out, "1\nvm-1\tfake-vm\tSTARTED\n");
}

#[tokio::test(start_paused = true)]
async fn test_prepare_and_finalize_migration() {
    let transport = ScriptedTransport::new()
        .on(
            Method::POST,
            "/deployments/1/initialize_migration",
            vec![queued("init-id", "INITIALIZE_MIGRATE_DEPLOYMENT", "1", "deployment")],
        )
        .on(
            Method::GET,
            "/tasks/init-id",
            vec![completed("init-id", "INITIALIZE_MIGRATE_DEPLOYMENT", "1", "deployment")],
        )
        .on(
            Method::POST,
            "/deployments/1/finalize_migration",
            vec![queued("fin-id", "FINALIZE_MIGRATE_DEPLOYMENT", "1", "deployment")],
        )
        .on(
            Method::GET,
            "/tasks/fin-id",
            vec![completed("fin-id", "FINALIZE_MIGRATE_DEPLOYMENT", "1", "deployment")],
        );
    let (client, log) = client(transport);

    run(&client, &["--non-interactive", "deployment", "prepare-migration", "0.0.0.0:9000", "1"])
        .await
        .unwrap();
    run(&client, &["--non-interactive", "deployment", "finalize-migration", "0.0.0.0:9000", "1"])
        .await
        .unwrap();

    let requests = log.lock().unwrap();
    assert_eq!(
        requests[0].body.as_ref().unwrap()["sourceLoadBalancerAddress"],
        "0.0.0.0:9000"
    );
    assert!(requests
        .iter()
        .any(|r| r.link == "/deployments/1/finalize_migration"));
}

#[tokio::test(start_paused = true)]
async fn test_set_image_datastores() {
    let transport = ScriptedTransport::new()
        .on(
            Method::POST,
            "/deployments/1/set_image_datastores",
            vec![queued("set-id", "UPDATE_IMAGE_DATASTORES", "1", "deployment")],
        )
        .on(
            Method::GET,
            "/tasks/set-id",
            vec![completed("set-id", "UPDATE_IMAGE_DATASTORES", "1", "deployment")],
        );
    let (client, log) = client(transport);

    let out = run(
        &client,
        &["--non-interactive", "deployment", "set-image-datastores", "1", "ds1,ds2"],
    )
    .await
    .unwrap();
    assert_eq!(out, "1\n");
    assert_eq!(
        log.lock().unwrap()[0].body.as_ref().unwrap()["items"],
        json!(["ds1", "ds2"])
    );
}

#[tokio::test(start_paused = true)]
async fn test_non_interactive_create_propagates_task_failure() {
    let transport = ScriptedTransport::new()
        .on(
            Method::POST,
            "/availabilityzones",
            vec![queued("az-task", "CREATE_AVAILABILITYZONE", "az-1", "availability-zone")],
        )
        .on(
            Method::GET,
            "/tasks/az-task",
            vec![Reply::Json(json!({
                "id": "az-task", "operation": "CREATE_AVAILABILITYZONE", "state": "ERROR",
                "entity": { "id": "az-1", "kind": "availability-zone" },
                "error": "name already taken"
            }))],
        );
    let (client, _) = client(transport);

    let err = run(&client, &["--non-interactive", "availability-zone", "create", "zone-a"])
        .await
        .unwrap_err();
    match err.downcast_ref::<PhotonError>() {
        Some(PhotonError::TaskFailed { detail, .. }) => assert_eq!(detail, "name already taken"),
        other => panic!("expected TaskFailed, got {:?}", other),
    }
}

#[tokio::test]
async fn test_invalid_name_is_rejected_before_any_call() {
    let (client, log) = client(ScriptedTransport::new());

    let err = run(&client, &["--non-interactive", "availability-zone", "create", "1zone"])
        .await
        .unwrap_err();
    assert!(err.to_string().contains("Invalid availability zone name"));

    let err = run(&client, &["--non-interactive", "availability-zone", "create"])
        .await
        .unwrap_err();
    assert!(err.to_string().contains("Please provide availability zone name"));
    assert!(links(&log).is_empty());
}

#[tokio::test]
async fn test_availability_zone_show_and_tasks() {
    let transport = ScriptedTransport::new()
        .on(
            Method::GET,
            "/availabilityzones/az-1",
            vec![Reply::Json(json!({ "id": "az-1", "name": "zone-a", "state": "READY" }))],
        )
        .on(
            Method::GET,
            "/availabilityzones/az-1/tasks",
            vec![Reply::Json(page(
                json!([{
                    "id": "t1", "operation": "CREATE_AVAILABILITYZONE", "state": "COMPLETED",
                    "entity": { "id": "az-1", "kind": "availability-zone" },
                    "startedTime": 1000, "endTime": 4000
                }]),
                None,
            ))],
        );
    let (client, log) = client(transport);

    let out = run(&client, &["--non-interactive", "availability-zone", "show", "az-1"])
        .await
        .unwrap();
    assert_eq!(out, "az-1\tzone-a\tREADY\n");

    let out = run(&client, &["availability-zone", "show", "az-1"]).await.unwrap();
    assert!(out.starts_with("AvailabilityZone ID: az-1\n"));

    let out = run(
        &client,
        &["--non-interactive", "availability-zone", "tasks", "az-1", "--state", "completed"],
    )
    .await
    .unwrap();
    assert_eq!(
        out,
        "1\nt1\tCOMPLETED\taz-1\tavailability-zone\tCREATE_AVAILABILITYZONE\t1000\t3\n"
    );
    let last = log.lock().unwrap().last().cloned().unwrap();
    assert_eq!(last.query, vec![("state".to_string(), "COMPLETED".to_string())]);
}

#[tokio::test(start_paused = true)]
async fn test_task_monitor_and_show() {
    let transport = ScriptedTransport::new().on(
        Method::GET,
        "/tasks/t9",
        vec![
            Reply::Json(task("t9", "DELETE_VM", "STARTED", "vm-3", "vm")),
            completed("t9", "DELETE_VM", "vm-3", "vm"),
        ],
    );
    let (client, _) = client(transport);

    let out = run(&client, &["--non-interactive", "task", "monitor", "t9"])
        .await
        .unwrap();
    assert_eq!(out, "vm-3\n");

    let out = run(&client, &["--non-interactive", "task", "show", "t9"])
        .await
        .unwrap();
    assert!(out.starts_with("t9\tCOMPLETED\tvm-3\tvm\tDELETE_VM\t"));
}
