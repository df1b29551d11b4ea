//! Moderation REST routes.
//!
//! Thin handlers over the domain actions: parse, delegate, map errors to
//! the JSON error envelope. Reviewer identity arrives in the request body;
//! authentication is out of scope for this core.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::{Actor, ItemId, PageArgs, RequesterId, ReviewerId};
use crate::domains::accounts::actions::ProvisionError;
use crate::domains::moderation::actions::{
    approve_item, list_items, reject_item, submit_item, ItemFilter, ProvisioningOutcome,
    SubmitItemInput, WorkflowError,
};
use crate::domains::moderation::models::{
    ApprovableItem, ItemKind, ItemPayload, ItemStatus, RequesterType,
};
use crate::kernel::ServerDeps;

// ============================================================================
// Error envelope
// ============================================================================

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    code: &'static str,
    message: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    error: ErrorBody,
}

pub struct ApiError {
    status: StatusCode,
    code: &'static str,
    message: String,
}

impl ApiError {
    fn new(status: StatusCode, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            code,
            message: message.into(),
        }
    }

    fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "BAD_REQUEST", message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorEnvelope {
            error: ErrorBody {
                code: self.code,
                message: self.message,
            },
        });
        (self.status, body).into_response()
    }
}

impl From<WorkflowError> for ApiError {
    fn from(e: WorkflowError) -> Self {
        match &e {
            WorkflowError::NotFound(_) => {
                ApiError::new(StatusCode::NOT_FOUND, "NOT_FOUND", e.to_string())
            }
            WorkflowError::InvalidState { .. } => {
                ApiError::new(StatusCode::CONFLICT, "INVALID_STATE", e.to_string())
            }
            WorkflowError::InvalidReason(_) => ApiError::new(
                StatusCode::UNPROCESSABLE_ENTITY,
                "REASON_TOO_SHORT",
                e.to_string(),
            ),
            WorkflowError::Store(_) => ApiError::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL",
                e.to_string(),
            ),
        }
    }
}

// ============================================================================
// Submission (consumed from collaborators)
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct SubmitRequest {
    pub requester_id: Uuid,
    pub requester_name: String,
    pub requester_type: RequesterType,
    #[serde(default)]
    pub as_draft: bool,
    pub payload: ItemPayload,
}

/// POST /api/moderation/items
pub async fn submit_handler(
    State(deps): State<ServerDeps>,
    Json(request): Json<SubmitRequest>,
) -> Result<(StatusCode, Json<ApprovableItem>), ApiError> {
    let item = submit_item(
        SubmitItemInput {
            requester_id: RequesterId::from_uuid(request.requester_id),
            requester_name: request.requester_name,
            requester_type: request.requester_type,
            payload: request.payload,
            as_draft: request.as_draft,
        },
        &deps,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(item)))
}

// ============================================================================
// Approve / reject
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ApproveRequest {
    pub reviewer_id: Uuid,
    pub reviewer_name: String,
}

#[derive(Debug, Serialize)]
pub struct AccountView {
    pub email: String,
    pub company_name: String,
    pub role: String,
    pub dashboard_url: String,
    /// Single display; this response is the only place the password exists.
    pub temp_password: String,
}

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ProvisioningView {
    NotRequired,
    Provisioned { account: AccountView },
    /// The approval is recorded; onboarding needs a retry or follow-up.
    Failed { code: &'static str, message: String },
}

#[derive(Debug, Serialize)]
pub struct ApproveResponse {
    pub item: ApprovableItem,
    pub provisioning: ProvisioningView,
}

/// POST /api/moderation/items/{id}/approve
pub async fn approve_handler(
    State(deps): State<ServerDeps>,
    Path(item_id): Path<Uuid>,
    Json(request): Json<ApproveRequest>,
) -> Result<Json<ApproveResponse>, ApiError> {
    let actor = Actor::new(
        ReviewerId::from_uuid(request.reviewer_id),
        request.reviewer_name,
    );

    let outcome = approve_item(ItemId::from_uuid(item_id), actor, &deps).await?;

    let provisioning = match outcome.provisioning {
        ProvisioningOutcome::NotRequired => ProvisioningView::NotRequired,
        ProvisioningOutcome::Provisioned(provisioned) => ProvisioningView::Provisioned {
            account: AccountView {
                email: provisioned.account.email,
                company_name: provisioned.account.company_name,
                role: provisioned.account.role.to_string(),
                dashboard_url: provisioned.account.dashboard_url,
                temp_password: provisioned.temp_password,
            },
        },
        ProvisioningOutcome::Failed(e) => ProvisioningView::Failed {
            code: match e {
                ProvisionError::DuplicateAccount { .. } => "DUPLICATE_ACCOUNT",
                _ => "PROVISIONING_FAILED",
            },
            message: e.to_string(),
        },
    };

    Ok(Json(ApproveResponse {
        item: outcome.item,
        provisioning,
    }))
}

#[derive(Debug, Deserialize)]
pub struct RejectRequest {
    pub reviewer_id: Uuid,
    pub reviewer_name: String,
    pub rejection_reason: String,
}

/// POST /api/moderation/items/{id}/reject
pub async fn reject_handler(
    State(deps): State<ServerDeps>,
    Path(item_id): Path<Uuid>,
    Json(request): Json<RejectRequest>,
) -> Result<Json<ApprovableItem>, ApiError> {
    let actor = Actor::new(
        ReviewerId::from_uuid(request.reviewer_id),
        request.reviewer_name,
    );

    let item = reject_item(
        ItemId::from_uuid(item_id),
        &request.rejection_reason,
        actor,
        &deps,
    )
    .await?;

    Ok(Json(item))
}

// ============================================================================
// Review queue
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub kind: Option<String>,
    pub status: Option<String>,
    pub requester_id: Option<Uuid>,
    pub q: Option<String>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub items: Vec<ApprovableItem>,
    pub total: usize,
    pub page: u32,
    pub page_size: u32,
}

/// GET /api/moderation/items
pub async fn list_handler(
    State(deps): State<ServerDeps>,
    Query(query): Query<ListQuery>,
) -> Result<Json<ListResponse>, ApiError> {
    let kind = query
        .kind
        .as_deref()
        .map(str::parse::<ItemKind>)
        .transpose()
        .map_err(|e| ApiError::bad_request(e.to_string()))?;
    let status = query
        .status
        .as_deref()
        .map(str::parse::<ItemStatus>)
        .transpose()
        .map_err(|e| ApiError::bad_request(e.to_string()))?;

    let filter = ItemFilter {
        kind,
        status,
        requester_id: query.requester_id.map(RequesterId::from_uuid),
        q: query.q,
    };
    let page_args = PageArgs {
        page: query.page,
        page_size: query.page_size,
    }
    .validate();

    let page = list_items(&filter, page_args, &deps)
        .await
        .map_err(WorkflowError::Store)?;

    Ok(Json(ListResponse {
        items: page.items,
        total: page.total,
        page: page.page,
        page_size: page.page_size,
    }))
}
