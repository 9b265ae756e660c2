// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! In-process stub of the remote services
//!
//! One axum server answers the management, access-control, and directory
//! routes the CLI uses, with fixed data. Every request path is recorded so
//! tests can assert which remote calls were (or were not) made.
//!
//! The role assignment listing filters by role only and ignores
//! `principalId`, so principal filtering must happen in the CLI. It is
//! served in two pages chained by `x-ms-continuation`.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, Query, Request, State};
use axum::http::{HeaderValue, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};

pub const READER_ROLE_ID: &str = "6f4b7e1a-0c2d-4e5f-8a9b-1c2d3e4f5a6b";
pub const ADMIN_ROLE_ID: &str = "2a3b4c5d-6e7f-4a8b-9c0d-1e2f3a4b5c6d";

pub const APP_OBJECT_ID: &str = "sp-object-1";
pub const USER_OBJECT_ID: &str = "user-object-1";
pub const KNOWN_USER: &str = "someone@contoso.com";

/// Region of every stored workspace
pub const WORKSPACE_LOCATION: &str = "westus2";

/// Token linking the first page of role assignments to the second
pub const CONTINUATION_TOKEN: &str = "page-2";

/// Workspace name that check-name reports as taken
pub const TAKEN_WORKSPACE: &str = "taken";

const WORKSPACE_PATH: &str = "/subscriptions/{subscription}/resourceGroups/{resource_group}/providers/Microsoft.Synapse/workspaces/{workspace}";

fn workspace_child(kind: &str) -> String {
    format!("{}/{}/{{name}}", WORKSPACE_PATH, kind)
}

#[derive(Clone)]
struct StubState {
    requests: Arc<Mutex<Vec<String>>>,
    queries: Arc<Mutex<Vec<String>>>,
    filters: Arc<Mutex<Vec<String>>>,
    bodies: Arc<Mutex<Vec<Value>>>,
    sql_pool_status: Arc<Mutex<String>>,
}

impl Default for StubState {
    fn default() -> Self {
        Self {
            requests: Arc::default(),
            queries: Arc::default(),
            filters: Arc::default(),
            bodies: Arc::default(),
            sql_pool_status: Arc::new(Mutex::new("Online".to_string())),
        }
    }
}

impl StubState {
    fn keep_body(&self, body: &Value) {
        self.bodies.lock().expect("poisoned").push(body.clone());
    }
}

/// A running stub server
pub struct StubServer {
    pub base_url: String,
    state: StubState,
}

impl StubServer {
    /// Start the server on an ephemeral port in a background thread
    pub fn start() -> Self {
        let state = StubState::default();
        let app = router(state.clone());

        let (tx, rx) = std::sync::mpsc::channel();
        std::thread::spawn(move || {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("Failed to build stub runtime");
            runtime.block_on(async move {
                let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                    .await
                    .expect("Failed to bind stub server");
                tx.send(listener.local_addr().expect("Failed to read stub address"))
                    .expect("Failed to report stub address");
                axum::serve(listener, app).await.expect("Stub server failed");
            });
        });

        let addr = rx.recv().expect("Stub server did not start");
        Self {
            base_url: format!("http://{}", addr),
            state,
        }
    }

    /// "METHOD /path" for every request received so far
    pub fn requests(&self) -> Vec<String> {
        self.state.requests.lock().expect("poisoned").clone()
    }

    /// Raw query string of every request, in the order of [`Self::requests`]
    pub fn queries(&self) -> Vec<String> {
        self.state.queries.lock().expect("poisoned").clone()
    }

    /// `$filter` values sent to the service principal search
    pub fn filters(&self) -> Vec<String> {
        self.state.filters.lock().expect("poisoned").clone()
    }

    /// JSON bodies of POST and PUT requests
    pub fn bodies(&self) -> Vec<Value> {
        self.state.bodies.lock().expect("poisoned").clone()
    }

    pub fn received(&self, request: &str) -> bool {
        self.requests().iter().any(|r| r == request)
    }

    /// Query string of the first request matching "METHOD /path"
    pub fn query_of(&self, request: &str) -> Option<String> {
        let requests = self.requests();
        let index = requests.iter().position(|r| r == request)?;
        self.queries().get(index).cloned()
    }
}

fn router(state: StubState) -> Router {
    Router::new()
        .route("/rbac/roles", get(list_roles))
        .route("/rbac/roles/{id}", get(get_role))
        .route(
            "/rbac/roleAssignments",
            get(list_assignments).post(create_assignment),
        )
        .route(
            "/rbac/roleAssignments/{id}",
            get(get_assignment).delete(delete_assignment),
        )
        .route("/{tenant}/servicePrincipals", get(list_service_principals))
        .route("/{tenant}/users/{user}", get(get_user))
        .route(
            "/subscriptions/{subscription}/providers/Microsoft.Synapse/checkNameAvailability",
            post(check_name),
        )
        .route(WORKSPACE_PATH, get(get_workspace).put(put_workspace))
        .route(
            &workspace_child("bigDataPools"),
            get(get_spark_pool).put(put_spark_pool),
        )
        .route(
            &workspace_child("sqlPools"),
            get(get_sql_pool).put(put_sql_pool),
        )
        .route(
            &format!("{}/pause", workspace_child("sqlPools")),
            post(pause_sql_pool),
        )
        .route(
            &format!("{}/resume", workspace_child("sqlPools")),
            post(resume_sql_pool),
        )
        .route(
            &workspace_child("firewallRules"),
            get(get_firewall_rule).put(put_firewall_rule),
        )
        .layer(middleware::from_fn_with_state(state.clone(), record))
        .with_state(state)
}

async fn record(State(state): State<StubState>, request: Request, next: Next) -> Response {
    state
        .requests
        .lock()
        .expect("poisoned")
        .push(format!("{} {}", request.method(), request.uri().path()));
    state
        .queries
        .lock()
        .expect("poisoned")
        .push(request.uri().query().unwrap_or_default().to_string());
    next.run(request).await
}

fn not_found(message: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({"error": {"code": "NotFound", "message": message}})),
    )
        .into_response()
}

// ============================================================================
// Access control
// ============================================================================

fn role_definitions() -> Vec<Value> {
    vec![
        json!({"id": READER_ROLE_ID, "name": "Workspace Reader", "isBuiltIn": true}),
        json!({"id": ADMIN_ROLE_ID, "name": "Workspace Admin", "isBuiltIn": true}),
    ]
}

fn role_assignments() -> Vec<Value> {
    vec![
        json!({"id": "ra-1", "roleId": READER_ROLE_ID, "principalId": "abc123"}),
        json!({"id": "ra-2", "roleId": READER_ROLE_ID, "principalId": "def456"}),
        json!({"id": "ra-3", "roleId": ADMIN_ROLE_ID, "principalId": "abc123"}),
    ]
}

fn find_by_id(items: Vec<Value>, id: &str) -> Option<Value> {
    items.into_iter().find(|item| item["id"] == id)
}

async fn list_roles() -> Json<Value> {
    Json(json!({ "value": role_definitions() }))
}

async fn get_role(Path(id): Path<String>) -> Response {
    match find_by_id(role_definitions(), &id) {
        Some(role) => Json(role).into_response(),
        None => not_found("Role definition not found"),
    }
}

async fn list_assignments(Query(query): Query<HashMap<String, String>>) -> Response {
    let mut assignments = role_assignments();
    let (page, next) = match query.get("continuationToken") {
        None => (assignments.drain(..2).collect::<Vec<_>>(), Some(CONTINUATION_TOKEN)),
        Some(_) => (assignments.split_off(2), None),
    };

    let page: Vec<Value> = page
        .into_iter()
        .filter(|a| match query.get("roleId") {
            Some(role) => a["roleId"] == role.as_str(),
            None => true,
        })
        .collect();

    let mut response = Json(page).into_response();
    if let Some(token) = next {
        response
            .headers_mut()
            .insert("x-ms-continuation", HeaderValue::from_static(token));
    }
    response
}

async fn get_assignment(Path(id): Path<String>) -> Response {
    match find_by_id(role_assignments(), &id) {
        Some(assignment) => Json(assignment).into_response(),
        None => not_found("Role assignment not found"),
    }
}

async fn delete_assignment(Path(id): Path<String>) -> Response {
    match find_by_id(role_assignments(), &id) {
        Some(_) => StatusCode::NO_CONTENT.into_response(),
        None => not_found("Role assignment not found"),
    }
}

async fn create_assignment(
    State(state): State<StubState>,
    Json(body): Json<Value>,
) -> Json<Value> {
    state.keep_body(&body);
    Json(json!({
        "id": "ra-new",
        "roleId": body["roleId"],
        "principalId": body["principalId"],
    }))
}

// ============================================================================
// Directory
// ============================================================================

async fn list_service_principals(
    State(state): State<StubState>,
    Query(query): Query<HashMap<String, String>>,
) -> Json<Value> {
    let filter = query.get("$filter").cloned().unwrap_or_default();
    state.filters.lock().expect("poisoned").push(filter.clone());

    let value = if filter.contains("'http://my-app'") {
        vec![json!({
            "objectId": APP_OBJECT_ID,
            "displayName": "my-app",
            "servicePrincipalNames": ["http://my-app"],
        })]
    } else {
        Vec::new()
    };
    Json(json!({ "value": value }))
}

async fn get_user(Path((_tenant, user)): Path<(String, String)>) -> Response {
    if user == KNOWN_USER {
        Json(json!({
            "objectId": USER_OBJECT_ID,
            "userPrincipalName": KNOWN_USER,
        }))
        .into_response()
    } else {
        (
            StatusCode::NOT_FOUND,
            Json(json!({
                "odata.error": {
                    "code": "Request_ResourceNotFound",
                    "message": {"lang": "en", "value": "User not found"}
                }
            })),
        )
            .into_response()
    }
}

// ============================================================================
// Management
// ============================================================================

type WorkspacePath = Path<(String, String, String)>;
type ChildPath = Path<(String, String, String, String)>;

/// Echo a PUT body back as the provisioned resource
fn provisioned(mut body: Value, name: &str) -> Value {
    body["name"] = json!(name);
    body["properties"]["provisioningState"] = json!("Succeeded");
    body
}

async fn check_name(Json(body): Json<Value>) -> Json<Value> {
    if body["name"] == TAKEN_WORKSPACE {
        Json(json!({
            "available": false,
            "reason": "AlreadyExists",
            "message": "Workspace name is already in use",
        }))
    } else {
        Json(json!({ "available": true }))
    }
}

async fn get_workspace(Path((_, _, workspace)): WorkspacePath) -> Json<Value> {
    Json(json!({
        "name": workspace,
        "location": WORKSPACE_LOCATION,
        "properties": {"provisioningState": "Succeeded"}
    }))
}

async fn put_workspace(
    State(state): State<StubState>,
    Path((_, _, workspace)): WorkspacePath,
    Json(body): Json<Value>,
) -> Json<Value> {
    state.keep_body(&body);
    Json(provisioned(body, &workspace))
}

async fn get_spark_pool(Path((_, _, _, pool)): ChildPath) -> Json<Value> {
    Json(json!({
        "name": pool,
        "location": WORKSPACE_LOCATION,
        "properties": {
            "sparkVersion": "2.4",
            "nodeSize": "Small",
            "nodeSizeFamily": "MemoryOptimized",
            "nodeCount": 3,
            "autoPause": {"enabled": true, "delayInMinutes": 15},
            "provisioningState": "Succeeded",
        }
    }))
}

async fn put_spark_pool(
    State(state): State<StubState>,
    Path((_, _, _, pool)): ChildPath,
    Json(body): Json<Value>,
) -> Json<Value> {
    state.keep_body(&body);
    Json(provisioned(body, &pool))
}

async fn get_sql_pool(
    State(state): State<StubState>,
    Path((_, _, _, pool)): ChildPath,
) -> Json<Value> {
    let status = state.sql_pool_status.lock().expect("poisoned").clone();
    Json(json!({
        "name": pool,
        "location": WORKSPACE_LOCATION,
        "sku": {"name": "DW100c"},
        "properties": {"status": status, "provisioningState": "Succeeded"}
    }))
}

async fn put_sql_pool(
    State(state): State<StubState>,
    Path((_, _, _, pool)): ChildPath,
    Json(body): Json<Value>,
) -> Json<Value> {
    state.keep_body(&body);
    Json(provisioned(body, &pool))
}

async fn pause_sql_pool(State(state): State<StubState>) -> StatusCode {
    *state.sql_pool_status.lock().expect("poisoned") = "Paused".to_string();
    StatusCode::ACCEPTED
}

async fn resume_sql_pool(State(state): State<StubState>) -> StatusCode {
    *state.sql_pool_status.lock().expect("poisoned") = "Online".to_string();
    StatusCode::ACCEPTED
}

async fn get_firewall_rule(Path((_, _, _, rule)): ChildPath) -> Json<Value> {
    Json(json!({
        "name": rule,
        "properties": {
            "startIpAddress": "10.0.0.1",
            "endIpAddress": "10.0.0.255",
            "provisioningState": "Succeeded",
        }
    }))
}

async fn put_firewall_rule(
    State(state): State<StubState>,
    Path((_, _, _, rule)): ChildPath,
    Json(body): Json<Value>,
) -> Json<Value> {
    state.keep_body(&body);
    Json(provisioned(body, &rule))
}
