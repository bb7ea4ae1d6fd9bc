//! Estado da lista do painel administrativo.
//!
//! Cada transição (carregar, filtrar, ordenar, aplicar novo status) é uma
//! função pura de `(estado, ação)` para o novo estado, e a lista exibida é
//! derivada com [`DashboardState::visible`].

use std::str::FromStr;

use uuid::Uuid;

use crate::models::claim::{Claim, ClaimStatus, UnknownStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(ClaimStatus),
}

impl StatusFilter {
    pub fn matches(self, status: ClaimStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => wanted == status,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "All" {
            return Ok(StatusFilter::All);
        }
        s.parse().map(StatusFilter::Only)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardState {
    pub claims: Vec<Claim>,
    pub filter: StatusFilter,
    pub sort: SortOrder,
}

#[derive(Debug, Clone)]
pub enum DashboardAction {
    Loaded(Vec<Claim>),
    FilterChanged(StatusFilter),
    SortToggled,
    SortSet(SortOrder),
    /// Resposta bem-sucedida do PATCH: troca só o status daquela linha.
    StatusPatched { id: Uuid, status: ClaimStatus },
}

pub fn reduce(mut state: DashboardState, action: DashboardAction) -> DashboardState {
    match action {
        DashboardAction::Loaded(claims) => state.claims = claims,
        DashboardAction::FilterChanged(filter) => state.filter = filter,
        DashboardAction::SortToggled => state.sort = state.sort.toggled(),
        DashboardAction::SortSet(sort) => state.sort = sort,
        DashboardAction::StatusPatched { id, status } => {
            if let Some(claim) = state.claims.iter_mut().find(|c| c.id == id) {
                claim.status = status;
            }
        }
    }
    state
}

impl DashboardState {
    /// Linhas filtradas pelo status exato e ordenadas pela data de envio.
    /// A ordenação é estável: empates mantêm a ordem carregada.
    pub fn visible(&self) -> Vec<&Claim> {
        let mut rows: Vec<&Claim> = self
            .claims
            .iter()
            .filter(|claim| self.filter.matches(claim.status))
            .collect();

        rows.sort_by(|a, b| {
            let (ta, tb) = (a.submission_date.timestamp_millis(), b.submission_date.timestamp_millis());
            match self.sort {
                SortOrder::Asc => ta.cmp(&tb),
                SortOrder::Desc => tb.cmp(&ta),
            }
        });

        rows
    }
}
