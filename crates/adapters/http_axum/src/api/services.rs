//! JSON REST handlers for services.

use axum::Json;
use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use catalog_app::ports::ServiceRepository;
use catalog_domain::id::ServiceId;
use catalog_domain::page::ServicePage;
use catalog_domain::search::SearchParams;
use catalog_domain::service::Service;

use crate::error::ApiError;
use crate::state::AppState;

/// Raw query parameters for the list endpoint.
///
/// Kept as strings so that [`SearchParams::parse`] owns every validation
/// rule and reports failures uniformly.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub page: Option<String>,
    pub page_size: Option<String>,
    pub search: Option<String>,
    pub sort_by: Option<String>,
}

impl ListQuery {
    fn parse(&self) -> Result<SearchParams, ApiError> {
        Ok(SearchParams::parse(
            self.page.as_deref(),
            self.page_size.as_deref(),
            self.search.as_deref(),
            self.sort_by.as_deref(),
        )?)
    }
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<ServicePage>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<Service>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /services?page=&page_size=&search=&sort_by=`
pub async fn list<R>(
    State(state): State<AppState<R>>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<ListResponse, ApiError>
where
    R: ServiceRepository + Send + Sync + 'static,
{
    let Query(query) = query?;
    let params = query.parse()?;
    let page = state.catalog_service.list_services(params).await?;
    Ok(ListResponse::Ok(Json(page)))
}

/// `GET /services/{id}`
pub async fn get<R>(
    State(state): State<AppState<R>>,
    id: Result<Path<String>, PathRejection>,
) -> Result<GetResponse, ApiError>
where
    R: ServiceRepository + Send + Sync + 'static,
{
    let Path(id) = id?;
    let service_id: ServiceId = id.parse()?;
    let service = state.catalog_service.get_service(service_id).await?;
    Ok(GetResponse::Ok(Json(service)))
}
