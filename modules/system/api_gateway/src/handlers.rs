//! Endpoints served by the gateway itself.
#![allow(clippy::unused_async)]

use std::collections::BTreeMap;
use std::sync::Arc;

use access_control::{OperationRegistry, Role};
use axum::Json;
use axum::extract::{Extension, State};
use serde::Serialize;
use things_security::CallerContext;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Summary of the current caller.
#[derive(Debug, Serialize)]
pub struct CallerView {
    pub authenticated: bool,
    pub privileged: bool,
    pub subject_id: Option<String>,
    pub email: Option<String>,
}

impl From<&CallerContext> for CallerView {
    fn from(ctx: &CallerContext) -> Self {
        Self {
            authenticated: ctx.is_authenticated(),
            privileged: ctx.is_privileged(),
            subject_id: ctx.subject_id().map(str::to_owned),
            email: ctx.email().map(str::to_owned),
        }
    }
}

/// Operation name to whether the current caller may invoke it.
///
/// The reader and admin UIs use this to decide which actions to render.
#[derive(Debug, Serialize)]
pub struct PrivilegesResponse {
    pub caller: CallerView,
    pub operations: BTreeMap<String, bool>,
}

#[derive(Debug, Serialize)]
pub struct OperationView {
    pub name: String,
    pub roles: Vec<Role>,
}

#[derive(Debug, Serialize)]
pub struct OperationsResponse {
    pub operations: Vec<OperationView>,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

pub async fn me(Extension(caller): Extension<CallerContext>) -> Json<CallerView> {
    Json(CallerView::from(&caller))
}

pub async fn privileges(
    State(registry): State<Arc<OperationRegistry>>,
    Extension(caller): Extension<CallerContext>,
) -> Json<PrivilegesResponse> {
    Json(PrivilegesResponse {
        operations: registry.privileges(&caller),
        caller: CallerView::from(&caller),
    })
}

pub async fn operations(
    State(registry): State<Arc<OperationRegistry>>,
) -> Json<OperationsResponse> {
    let operations = registry
        .iter()
        .map(|(name, roles)| OperationView {
            name: name.to_owned(),
            roles: roles.iter().collect(),
        })
        .collect();

    Json(OperationsResponse { operations })
}
