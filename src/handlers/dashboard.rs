// src/handlers/dashboard.rs

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use axum_extra::extract::WithRejection;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    common::error::AppError,
    config::AppState,
    dashboard::{reduce, DashboardAction, DashboardState, SortOrder, StatusFilter},
    models::claim::Claim,
};

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DashboardQuery {
    /// "All" (padrão) ou um dos quatro status
    pub status: Option<String>,
    /// "asc" ou "desc" (padrão)
    pub sort: Option<String>,
}

impl DashboardQuery {
    pub fn actions(&self) -> Result<Vec<DashboardAction>, AppError> {
        let filter = match &self.status {
            Some(raw) => raw
                .parse::<StatusFilter>()
                .map_err(|_| AppError::InvalidStatusFilter(raw.clone()))?,
            None => StatusFilter::All,
        };
        let sort = match &self.sort {
            Some(raw) => raw.parse::<SortOrder>().map_err(AppError::InvalidSortOrder)?,
            None => SortOrder::default(),
        };

        Ok(vec![
            DashboardAction::FilterChanged(filter),
            DashboardAction::SortSet(sort),
        ])
    }
}

// GET /api/admin/claims?status=&sort=
#[utoipa::path(
    get,
    path = "/api/admin/claims",
    tag = "Dashboard",
    params(DashboardQuery),
    responses(
        (status = 200, description = "Reclamações filtradas e ordenadas pela data de envio", body = Vec<Claim>),
        (status = 400, description = "Status ou ordenação inválidos")
    )
)]
pub async fn list_dashboard_claims(
    State(app_state): State<AppState>,
    WithRejection(Query(query), _): WithRejection<Query<DashboardQuery>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    // Valida antes de ir ao banco
    let actions = query.actions()?;

    let claims = app_state.claim_service.list_all().await?;

    let state = actions.into_iter().fold(
        reduce(DashboardState::default(), DashboardAction::Loaded(claims)),
        reduce,
    );
    let rows: Vec<Claim> = state.visible().into_iter().cloned().collect();

    Ok((StatusCode::OK, Json(rows)))
}
