// src/docs.rs

use utoipa::OpenApi;

use crate::{handlers, models};

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Brands ---
        handlers::brands::list_brands,

        // --- Claims ---
        handlers::claims::submit_claim,
        handlers::claims::get_claim,
        handlers::claims::search_claims,
        handlers::claims::update_claim_status,

        // --- Dashboard ---
        handlers::dashboard::list_dashboard_claims,

        // --- Auth ---
        handlers::auth::check_users,
        handlers::auth::create_admin,
        handlers::auth::login,
    ),
    components(
        schemas(
            // --- Brands ---
            models::brand::Brand,

            // --- Claims ---
            models::claim::ClaimStatus,
            models::claim::Claim,
            handlers::claims::SubmitClaimPayload,
            handlers::claims::UpdateStatusPayload,

            // --- Auth ---
            models::auth::CreateAdminPayload,
            models::auth::LoginUserPayload,
            models::auth::UserInfo,
            models::auth::UserExistsResponse,
        )
    ),
    tags(
        (name = "Brands", description = "Marcas atendidas"),
        (name = "Claims", description = "Envio e acompanhamento de reclamações de garantia"),
        (name = "Dashboard", description = "Lista do painel administrativo"),
        (name = "Auth", description = "Bootstrap do administrador e login")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_route_is_documented() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/brands",
            "/api/claims",
            "/api/claims/{id}",
            "/api/admin/claims",
            "/api/users/check",
            "/api/admin/create",
            "/api/login",
        ] {
            assert!(doc.paths.paths.contains_key(path), "rota sem documentação: {path}");
        }
    }
}
