//! Dashboard handlers

use super::page;
use crate::extractors::ValidatedQuery;
use crate::pages::{CatalogPanel, render_dashboard, render_random_employee};
use crate::state::AppState;
use crate::store::Session;
use axum::{
    Extension, Form,
    extract::State,
    http::Uri,
    response::{Html, Redirect},
};
use directory_query::random_employee_id;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{error, info, warn};
use validator::Validate;

/// Dashboard query parameters
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct DashboardQuery {
    /// Department list page (1-based)
    #[validate(range(max = 10_000))]
    pub cat_page: Option<usize>,
}

/// Department chosen on the dashboard
#[derive(Debug, Clone, Deserialize)]
pub struct DepartmentChoice {
    /// Catalog slug
    pub slug: String,
}

/// Dashboard page
///
/// The count and the catalog are fetched concurrently and degrade
/// independently: a failed count shows 0, a failed catalog an empty list.
pub async fn dashboard(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<Arc<Session>>,
    ValidatedQuery(query): ValidatedQuery<DashboardQuery>,
    uri: Uri,
) -> Html<String> {
    let (employees, departments) = tokio::join!(
        state.api_client.get_employees(),
        state.api_client.get_departments()
    );

    let total = match employees {
        Ok(page) => page.total,
        Err(e) => {
            error!("Failed to fetch employee count: {}", e);
            0
        }
    };

    let departments = match departments {
        Ok(departments) => {
            session.replace_catalog(departments.clone());
            departments
        }
        Err(e) => {
            error!("Failed to fetch departments: {}", e);
            Vec::new()
        }
    };

    let selected = session.store().snapshot().selected_department;
    let panel = match &state.catalog_pages {
        Some(paginator) => {
            let (slice, window) = paginator.page(&departments, query.cat_page.unwrap_or(1));
            CatalogPanel {
                departments: slice,
                window: Some(window),
                selected: &selected,
            }
        }
        None => CatalogPanel {
            departments: &departments,
            window: None,
            selected: &selected,
        },
    };

    page(&session, "Dashboard", &uri, &render_dashboard(total, &panel))
}

/// Random employee panel fragment
///
/// Draws a fresh identifier on every call.
pub async fn random_employee(State(state): State<Arc<AppState>>) -> Html<String> {
    let id = random_employee_id(&mut rand::thread_rng(), state.config.dashboard.random_employee_max_id);

    let employee = match state.api_client.get_employee(id).await {
        Ok(Some(employee)) => Some(employee),
        Ok(None) => {
            warn!("Random employee {} does not exist", id);
            None
        }
        Err(e) => {
            error!("Failed to fetch random employee {}: {}", id, e);
            None
        }
    };

    Html(render_random_employee(employee.as_ref()))
}

/// Select a department from the dashboard and open the listing
pub async fn select_department(
    Extension(session): Extension<Arc<Session>>,
    Form(choice): Form<DepartmentChoice>,
) -> Redirect {
    if session.knows_department(&choice.slug) {
        info!("Session {} selected department {}", session.id(), choice.slug);
        session.store().set_selected_department(choice.slug);
    } else {
        warn!("Ignoring unknown department '{}'", choice.slug);
    }

    Redirect::to("/employees")
}
