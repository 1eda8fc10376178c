// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! HTTP surface of the store.
//!
//! Every entity gets the same six routes under its base path; views are
//! answered as JSON and redirects as `303 See Other`.
//!
//! | Method | Path | Action |
//! |--------|------|--------|
//! | `GET` | `{base}?page=N` | index |
//! | `GET` | `{base}/{id}` | details |
//! | `GET`, `POST` | `{base}/{id}/edit` | edit form, save |
//! | `GET`, `POST` | `{base}/new` | create form, insert |
//! | `GET`, `POST` | `{base}/{id}/delete` | confirmation, delete |
//!
//! # Temp Data
//!
//! The index page stashed by a canonical-page redirect lives in a
//! per-client slot. Clients are told apart by the `store_client` cookie,
//! issued on the first index request that lacks a valid one. Slots are
//! dropped once their stash has been consumed.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex}
};

use axum::{
    Form, Json, Router,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::get
};
use crud_scaffold::{
    ActionResult, ControllerConfig, CrudController, Describe, DescriptorCache, EntityDescriptor,
    FormValues, IndexSnapshot, InstanceSnapshot, MemoryRepository, ModelEntity, ModelState,
    Redirect, ScaffoldError, TempData, Validate, ViewModel, ViewName
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::{
    config::AppConfig,
    domain::{Catalog, Category, Product}
};

// ============================================================================
// Resources
// ============================================================================

/// Entity that can be served under a base path.
pub trait StoreEntity: ModelEntity + Validate + Clone + Send + Sync + 'static {}

impl<T> StoreEntity for T where T: ModelEntity + Validate + Clone + Send + Sync + 'static {}

/// Shared state of one entity's routes.
struct Resource<E> {
    base:       &'static str,
    repository: MemoryRepository<E, u32>,
    descriptor: Arc<EntityDescriptor<E>>,
    config:     ControllerConfig,
    temp:       Mutex<HashMap<Uuid, TempData>>
}

impl<E: StoreEntity> Resource<E> {
    fn new(
        base: &'static str,
        repository: MemoryRepository<E, u32>,
        descriptor: Arc<EntityDescriptor<E>>,
        config: ControllerConfig
    ) -> Self {
        Self {
            base,
            repository,
            descriptor,
            config,
            temp: Mutex::new(HashMap::new())
        }
    }

    /// Controller for one request, with its own unit of work.
    fn controller(&self) -> CrudController<E, MemoryRepository<E, u32>> {
        CrudController::new(self.repository.clone(), Arc::clone(&self.descriptor))
            .with_config(self.config)
    }

    /// Run the index action against the client's temp data slot.
    fn index(&self, client: Uuid, page: Option<i64>) -> Result<ActionResult<E>, ScaffoldError> {
        let mut slots = self.temp.lock().unwrap_or_else(|e| e.into_inner());
        let temp = slots.entry(client).or_default();
        let result = self.controller().index(page, temp);
        if temp.is_empty() {
            slots.remove(&client);
        }
        result
    }

    fn render(&self, result: ActionResult<E>) -> Response {
        match result {
            ActionResult::Redirect(Redirect::Index {
                page
            }) => axum::response::Redirect::to(&format!("{}?page={page}", self.base)).into_response(),
            ActionResult::Redirect(Redirect::Details {
                key
            }) => axum::response::Redirect::to(&format!("{}/{key}", self.base)).into_response(),
            ActionResult::View(view) => {
                let status = match view.view {
                    ViewName::EntityNotFound => StatusCode::NOT_FOUND,
                    _ if !view.model_state.is_valid() => StatusCode::UNPROCESSABLE_ENTITY,
                    _ => StatusCode::OK
                };
                let model = match view.model {
                    ViewModel::Index(index) => ModelBody::Index(index.snapshot()),
                    ViewModel::Instance(instance) => ModelBody::Instance(instance.snapshot()),
                    ViewModel::NotFound(key) => ModelBody::Missing {
                        key
                    }
                };
                let body = ViewBody {
                    view: view.view,
                    model,
                    errors: view.model_state
                };
                (status, Json(body)).into_response()
            }
        }
    }
}

// ============================================================================
// Response Bodies
// ============================================================================

/// JSON rendering of a view.
#[derive(Debug, Serialize)]
pub struct ViewBody {
    /// View name.
    pub view:   ViewName,
    /// Projected model.
    pub model:  ModelBody,
    /// Errors attached by the controller.
    pub errors: ModelState
}

/// Model part of a [`ViewBody`].
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ModelBody {
    /// One index page.
    Index(IndexSnapshot),
    /// One entity.
    Instance(InstanceSnapshot),
    /// Key that matched nothing.
    Missing {
        /// Requested key.
        key: String
    }
}

// ============================================================================
// Error Handling
// ============================================================================

/// Request failure not expressible as a view.
#[derive(Debug, Error)]
pub enum AppError {
    /// Repository or descriptor failure.
    #[error(transparent)]
    Scaffold(#[from] ScaffoldError)
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "request failed");
        let body = serde_json::json!({ "error": "internal error" });
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

// ============================================================================
// Client Identity
// ============================================================================

/// Cookie naming the client's temp data slot.
pub const CLIENT_COOKIE: &str = "store_client";

fn client_id(headers: &HeaderMap) -> Option<Uuid> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == CLIENT_COOKIE)
        .and_then(|(_, value)| Uuid::parse_str(value).ok())
}

// ============================================================================
// HTTP Handlers
// ============================================================================

#[derive(Debug, Deserialize)]
struct PageParams {
    page: Option<i64>
}

type Shared<E> = State<Arc<Resource<E>>>;

async fn index<E: StoreEntity>(
    State(resource): Shared<E>,
    Query(params): Query<PageParams>,
    headers: HeaderMap
) -> Result<Response, AppError> {
    let known = client_id(&headers);
    let client = known.unwrap_or_else(Uuid::new_v4);
    let response = resource.render(resource.index(client, params.page)?);
    if known.is_some() {
        return Ok(response);
    }
    let cookie = format!("{CLIENT_COOKIE}={client}; Path=/; HttpOnly; SameSite=Lax");
    Ok(([(header::SET_COOKIE, cookie)], response).into_response())
}

async fn details<E: StoreEntity>(
    State(resource): Shared<E>,
    Path(id): Path<u32>
) -> Result<Response, AppError> {
    let result = resource.controller().details(&id)?;
    Ok(resource.render(result))
}

async fn edit<E: StoreEntity>(
    State(resource): Shared<E>,
    Path(id): Path<u32>
) -> Result<Response, AppError> {
    let result = resource.controller().edit(&id)?;
    Ok(resource.render(result))
}

async fn edit_post<E: StoreEntity>(
    State(resource): Shared<E>,
    Path(id): Path<u32>,
    Form(pairs): Form<Vec<(String, String)>>
) -> Result<Response, AppError> {
    let form: FormValues = pairs.into_iter().collect();
    let result = resource.controller().edit_post(&id, &form)?;
    Ok(resource.render(result))
}

async fn create<E: StoreEntity>(State(resource): Shared<E>) -> Response {
    let result = resource.controller().create();
    resource.render(result)
}

async fn create_post<E: StoreEntity>(
    State(resource): Shared<E>,
    Form(pairs): Form<Vec<(String, String)>>
) -> Result<Response, AppError> {
    let form: FormValues = pairs.into_iter().collect();
    let result = resource.controller().create_post(&form)?;
    Ok(resource.render(result))
}

async fn delete<E: StoreEntity>(
    State(resource): Shared<E>,
    Path(id): Path<u32>
) -> Result<Response, AppError> {
    let result = resource.controller().delete(&id)?;
    Ok(resource.render(result))
}

async fn delete_post<E: StoreEntity>(
    State(resource): Shared<E>,
    Path(id): Path<u32>
) -> Result<Response, AppError> {
    let result = resource.controller().delete_post(&id)?;
    Ok(resource.render(result))
}

// ============================================================================
// Router
// ============================================================================

fn routes<E: StoreEntity>(resource: Resource<E>) -> Router {
    let base = resource.base;
    Router::new()
        .route(base, get(index::<E>))
        .route(&format!("{base}/new"), get(create::<E>).post(create_post::<E>))
        .route(&format!("{base}/{{id}}"), get(details::<E>))
        .route(&format!("{base}/{{id}}/edit"), get(edit::<E>).post(edit_post::<E>))
        .route(&format!("{base}/{{id}}/delete"), get(delete::<E>).post(delete_post::<E>))
        .with_state(Arc::new(resource))
}

/// Build the store router over a catalogue.
///
/// # Errors
///
/// [`ScaffoldError::Descriptor`] if an entity cannot be described.
pub fn router(catalog: &Catalog, config: &AppConfig) -> Result<Router, ScaffoldError> {
    let categories = Resource::new(
        "/categories",
        catalog.categories.clone(),
        DescriptorCache::global().get_or_describe::<Category>(&())?,
        config.categories
    );
    let products = Resource::new(
        "/products",
        catalog.products.clone(),
        Arc::new(Product::describe(&catalog.categories)?),
        config.products
    );

    Ok(Router::new()
        .route("/", get(|| async { axum::response::Redirect::to("/products") }))
        .merge(routes(categories))
        .merge(routes(products)))
}
