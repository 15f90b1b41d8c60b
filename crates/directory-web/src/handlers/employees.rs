//! Employee listing and record handlers

use super::page;
use crate::extractors::ValidatedQuery;
use crate::pages::{
    ListingBody, ListingPage, listing_href, render_detail, render_edit_form,
    render_employee_not_found, render_listing,
};
use crate::state::AppState;
use crate::store::Session;
use axum::{
    Extension, Form,
    extract::{Path, State},
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Redirect, Response},
};
use directory_core::{Employee, EmployeeId};
use directory_query::{
    Directory, IncrementalCursor, PresentationCursor, PresentationMode, ViewQuery,
    assign_departments,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, error, info, warn};
use validator::Validate;

/// Listing query parameters
///
/// A request without any parameter is a fresh mount and refetches the
/// directory; anything else works on the session's resident snapshot.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ListingQuery {
    /// Search text
    #[validate(length(max = 200))]
    pub q: Option<String>,
    /// Presentation mode
    pub mode: Option<PresentationMode>,
    /// Page (paged mode)
    #[validate(range(max = 100_000))]
    pub page: Option<usize>,
    /// Visible count (incremental mode)
    #[validate(range(max = 1_000_000))]
    pub visible: Option<usize>,
}

impl ListingQuery {
    /// Whether this request mounts the listing afresh
    #[must_use]
    pub const fn is_mount(&self) -> bool {
        self.q.is_none() && self.mode.is_none() && self.page.is_none() && self.visible.is_none()
    }

    /// Search text (empty when absent)
    #[must_use]
    pub fn search(&self) -> &str {
        self.q.as_deref().unwrap_or_default()
    }

    /// Presentation position requested, starting from `initial`
    #[must_use]
    pub fn cursor(&self, initial: IncrementalCursor) -> PresentationCursor {
        match PresentationCursor::start(self.mode.unwrap_or_default(), initial) {
            PresentationCursor::Paged { .. } => PresentationCursor::Paged {
                page: self.page.unwrap_or(1),
            },
            PresentationCursor::Incremental(start) => PresentationCursor::Incremental(
                self.visible
                    .and_then(|visible| IncrementalCursor::resume(start.batch(), visible).ok())
                    .unwrap_or(start),
            ),
        }
    }
}

/// Department chosen in the listing's selector
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ListingDepartmentChoice {
    /// Catalog slug, empty for all departments
    pub department: String,
    /// Search text to keep
    pub q: String,
    /// Mode to keep
    pub mode: Option<PresentationMode>,
    /// Visible count to keep (incremental mode)
    pub visible: Option<usize>,
}

impl ListingDepartmentChoice {
    /// Listing location that keeps search, mode and the revealed count
    #[must_use]
    pub fn return_href(&self) -> String {
        let mode = self.mode.unwrap_or_default();
        let visible = match mode {
            PresentationMode::Incremental => self.visible.map(|visible| ("visible", visible)),
            PresentationMode::Paged => None,
        };
        listing_href(&self.q, mode, visible)
    }
}

/// Submitted edit form; values are logged and discarded
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EmployeeEdit {
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
    /// Email
    pub email: String,
    /// Age as typed
    pub age: String,
    /// Street address
    pub address: String,
    /// Company name
    pub company: String,
    /// Company department
    pub department: String,
    /// Phone
    pub phone: String,
}

/// Employee listing
pub async fn list_employees(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<Arc<Session>>,
    ValidatedQuery(query): ValidatedQuery<ListingQuery>,
    uri: Uri,
) -> Html<String> {
    let directory = match session.directory() {
        Some(directory) if !query.is_mount() => directory,
        _ => {
            let directory = fetch_directory(&state, &session).await;
            session.replace_directory(directory.clone());
            directory
        }
    };

    let selected = session.store().snapshot().selected_department;
    let view = session.view(&directory, &ViewQuery::new(query.search(), selected.as_str()));

    let body = match query.cursor(state.listing_batch) {
        PresentationCursor::Paged { page } => {
            let window = state.listing_pages.window(view.len(), page);
            ListingBody::Paged {
                rows: view.slice(window.range()),
                window,
            }
        }
        PresentationCursor::Incremental(cursor) => ListingBody::Incremental {
            items: view.slice(0..cursor.rendered_len(view.len())),
            cursor,
            total: view.len(),
        },
    };

    let listing = ListingPage {
        search: query.search(),
        selected: &selected,
        departments: directory.departments(),
        body,
    };
    page(&session, "Employees", &uri, &render_listing(&listing))
}

/// Fetch employees and catalog, then tag every employee with a department
async fn fetch_directory(state: &AppState, session: &Session) -> Directory {
    let (employees, departments) = tokio::join!(
        state.api_client.get_employees(),
        state.api_client.get_departments()
    );

    let mut employees = match employees {
        Ok(page) => page.users,
        Err(e) => {
            error!("Failed to fetch employees: {}", e);
            Vec::new()
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

    assign_departments(&mut employees, &departments, &mut rand::thread_rng());
    debug!(
        "Loaded {} employees across {} departments",
        employees.len(),
        departments.len()
    );
    Directory::new(employees, departments)
}

/// Write the listing's department choice through to the UI state
pub async fn select_department(
    Extension(session): Extension<Arc<Session>>,
    Form(choice): Form<ListingDepartmentChoice>,
) -> Redirect {
    if choice.department.is_empty() || session.knows_department(&choice.department) {
        session.store().set_selected_department(choice.department.clone());
    } else {
        warn!("Ignoring unknown department '{}'", choice.department);
    }

    Redirect::to(&choice.return_href())
}

/// Employee detail page
pub async fn employee_detail(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<Arc<Session>>,
    Path(id): Path<String>,
    uri: Uri,
) -> Response {
    match load_employee(&state, &id).await {
        Some(employee) => {
            page(&session, &employee.full_name(), &uri, &render_detail(&employee)).into_response()
        }
        None => employee_not_found(&session, &uri),
    }
}

/// Edit form for one employee
pub async fn edit_employee_form(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<Arc<Session>>,
    Path(id): Path<String>,
    uri: Uri,
) -> Response {
    match load_employee(&state, &id).await {
        Some(employee) => page(&session, "Edit Employee", &uri, &render_edit_form(&employee)).into_response(),
        None => employee_not_found(&session, &uri),
    }
}

/// Accept an edit without persisting it
pub async fn submit_employee_edit(
    Extension(session): Extension<Arc<Session>>,
    Path(id): Path<String>,
    uri: Uri,
    Form(edit): Form<EmployeeEdit>,
) -> Response {
    let Some(id) = parse_id(&id) else {
        return employee_not_found(&session, &uri);
    };

    info!(
        employee_id = id,
        first_name = %edit.first_name,
        last_name = %edit.last_name,
        email = %edit.email,
        age = %edit.age,
        address = %edit.address,
        company = %edit.company,
        department = %edit.department,
        phone = %edit.phone,
        "Employee edit submitted"
    );
    session.set_flash("Employee updated");

    Redirect::to(&format!("/employees/{id}")).into_response()
}

/// Acknowledge a delete and return to the listing
pub async fn delete_employee(
    Extension(session): Extension<Arc<Session>>,
    Path(id): Path<String>,
    uri: Uri,
) -> Response {
    let Some(id) = parse_id(&id) else {
        return employee_not_found(&session, &uri);
    };

    info!(employee_id = id, "Employee delete requested");
    session.set_flash("Employee deleted");

    Redirect::to("/employees").into_response()
}

fn parse_id(raw: &str) -> Option<EmployeeId> {
    raw.parse().ok()
}

/// Fetch the employee for a path segment; `None` covers every failure
async fn load_employee(state: &AppState, raw_id: &str) -> Option<Employee> {
    let Some(id) = parse_id(raw_id) else {
        debug!("Employee id '{}' is not numeric", raw_id);
        return None;
    };

    match state.api_client.get_employee(id).await {
        Ok(Some(employee)) => Some(employee),
        Ok(None) => {
            warn!("Employee {} not found", id);
            None
        }
        Err(e) => {
            error!("Failed to fetch employee {}: {}", id, e);
            None
        }
    }
}

fn employee_not_found(session: &Session, uri: &Uri) -> Response {
    (
        StatusCode::NOT_FOUND,
        page(session, "Employee not found", uri, render_employee_not_found()),
    )
        .into_response()
}
