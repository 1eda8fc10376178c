// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Generic CRUD controller.
//!
//! [`CrudController`] turns a repository and an entity descriptor into the
//! eight scaffolded actions. Every action returns an [`ActionResult`]: a
//! view to render or a redirect. Validation, hook and persistence failures
//! never escape an action; they become a re-rendered form carrying the
//! errors in its [`ModelState`].
//!
//! # Actions
//!
//! | Action | Success | Failure |
//! |--------|---------|---------|
//! | [`index`](CrudController::index) | `Index`, or redirect to the canonical page | - |
//! | [`details`](CrudController::details) | `Details` | `EntityNotFound` |
//! | [`edit`](CrudController::edit) | `Edit` | `EntityNotFound` |
//! | [`edit_post`](CrudController::edit_post) | redirect to details | `Edit` with errors |
//! | [`create`](CrudController::create) | `Create` | - |
//! | [`create_post`](CrudController::create_post) | redirect to details | `Create` with errors |
//! | [`delete`](CrudController::delete) | `Delete` | `EntityNotFound` |
//! | [`delete_post`](CrudController::delete_post) | `Deleted` | `NotDeleted` with errors |
//!
//! # Mutation Pipeline
//!
//! ```text
//! bind (editable members only)
//!   └─► rule violations
//!         └─► before_* hook
//!               └─► repository add / update / delete
//!                     └─► repository save
//! ```
//!
//! The first failing step stops the pipeline.

mod action;
mod config;
mod form;
mod hooks;
mod state;

use std::{error::Error as StdError, sync::Arc};

pub use action::{ActionResult, Redirect, ViewModel, ViewName, ViewResult};
pub use config::{ConfigError, ControllerConfig, PAGE_SIZE_VAR, VERBOSE_ERRORS_VAR};
pub use form::{FormValues, bind};
pub use hooks::{CrudHooks, HookError, NoHooks};
pub use state::{ModelError, ModelState, TempData};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::{
    access::BindError,
    descriptor::{DescriptorCache, Describe, EntityDescriptor},
    entity::ModelEntity,
    error::ScaffoldError,
    paging::{PagedList, Pagination, clamp_page_index},
    projection::{IndexModel, ModelInstance, ViewMode},
    repository::Repository,
    rules::{RuleViolations, Validate}
};

/// Why a mutation did not complete.
#[derive(Debug, Error)]
enum Failure {
    #[error("{}", join_messages(.0))]
    Bind(Vec<BindError>),

    #[error(transparent)]
    Violations(#[from] RuleViolations),

    #[error(transparent)]
    Hook(#[from] HookError),

    #[error(transparent)]
    Repository(Box<dyn StdError + Send + Sync>),

    #[error(transparent)]
    Misconfigured(BindError)
}

impl Failure {
    fn repository<X: StdError + Send + Sync + 'static>(error: X) -> Self {
        Self::Repository(Box::new(error))
    }

    fn from_bind(mut errors: Vec<BindError>) -> Self {
        match errors.iter().position(BindError::is_programming_error) {
            Some(index) => Self::Misconfigured(errors.swap_remove(index)),
            None => Self::Bind(errors)
        }
    }
}

fn join_messages(errors: &[BindError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

fn same_index(index: usize, requested: i64) -> bool {
    i64::try_from(index).is_ok_and(|index| index == requested)
}

/// Scaffolded CRUD actions over one entity type.
///
/// # Example
///
/// ```rust,ignore
/// let controller = CrudController::new(products, descriptor)
///     .with_config(ControllerConfig::default().with_page_size(4));
///
/// match controller.edit_post(&1, &form)? {
///     ActionResult::Redirect(to) => respond_redirect(to),
///     ActionResult::View(view) => render(view)
/// }
/// ```
pub struct CrudController<E, R, H = NoHooks> {
    repository: R,
    descriptor: Arc<EntityDescriptor<E>>,
    hooks:      H,
    config:     ControllerConfig
}

impl<E, R> CrudController<E, R, NoHooks> {
    /// Create a controller with default configuration and no hooks.
    pub fn new(repository: R, descriptor: Arc<EntityDescriptor<E>>) -> Self {
        Self {
            repository,
            descriptor,
            hooks: NoHooks,
            config: ControllerConfig::default()
        }
    }

    /// Create a controller whose descriptor comes from the process-wide
    /// cache, describing `E` on first use.
    ///
    /// # Errors
    ///
    /// [`ScaffoldError::Descriptor`] if `E` cannot be described.
    pub fn described(repository: R, lookups: &E::Lookups) -> Result<Self, ScaffoldError>
    where
        E: Describe + 'static
    {
        let descriptor = DescriptorCache::global().get_or_describe::<E>(lookups)?;
        Ok(Self::new(repository, descriptor))
    }
}

impl<E, R, H> CrudController<E, R, H> {
    /// Replace the hooks.
    pub fn with_hooks<H2>(self, hooks: H2) -> CrudController<E, R, H2> {
        CrudController {
            repository: self.repository,
            descriptor: self.descriptor,
            hooks,
            config: self.config
        }
    }

    /// Replace the configuration.
    #[must_use]
    pub fn with_config(mut self, config: ControllerConfig) -> Self {
        self.config = config;
        self
    }

    /// Underlying repository.
    #[must_use]
    pub const fn repository(&self) -> &R {
        &self.repository
    }

    /// Shared entity descriptor.
    #[must_use]
    pub fn descriptor(&self) -> &Arc<EntityDescriptor<E>> {
        &self.descriptor
    }

    /// Installed hooks.
    #[must_use]
    pub const fn hooks(&self) -> &H {
        &self.hooks
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &ControllerConfig {
        &self.config
    }

    fn entity_name(&self) -> &str {
        self.descriptor.entity_name()
    }

    fn stash_key(&self) -> String {
        format!("{}.index_model", self.entity_name())
    }
}

impl<E, R, H> CrudController<E, R, H>
where
    E: ModelEntity + Validate + Send + 'static,
    R: Repository<E>,
    H: CrudHooks<E>
{
    /// Project an entity through the descriptor.
    pub fn project(&self, entity: E, mode: ViewMode) -> ModelInstance<E> {
        ModelInstance::new(Arc::clone(&self.descriptor), entity, mode)
    }

    /// Build the index model for a zero-based page, clamped onto an
    /// existing page.
    ///
    /// # Errors
    ///
    /// [`ScaffoldError::Repository`] if counting or listing fails.
    pub fn index_model(&self, page_index: i64) -> Result<IndexModel<E>, ScaffoldError> {
        let page_size = self.config.page_size;
        let total = self
            .repository
            .count()
            .map_err(ScaffoldError::repository)?;
        let index = clamp_page_index(page_index, total, page_size);
        let rows = self
            .repository
            .list(Pagination::page(index, page_size))
            .map_err(ScaffoldError::repository)?;

        let instances = PagedList::from_window(rows, total, index, page_size)
            .map(|entity| self.project(entity, ViewMode::Index));
        Ok(IndexModel::new(Arc::clone(&self.descriptor), instances))
    }

    /// List one page.
    ///
    /// `page` is 1-based and defaults to the first page. A page that does
    /// not exist redirects to the nearest existing one; the computed model
    /// is stashed in `temp` so the follow-up request renders it without
    /// another repository round trip.
    ///
    /// # Errors
    ///
    /// [`ScaffoldError::Repository`] if counting or listing fails.
    pub fn index(
        &self,
        page: Option<i64>,
        temp: &mut TempData
    ) -> Result<ActionResult<E>, ScaffoldError> {
        let requested = page.map_or(0, |p| p.saturating_sub(1));
        debug!(entity = %self.entity_name(), requested, "index");

        let stash_key = self.stash_key();
        let model = match temp.take::<IndexModel<E>>(&stash_key) {
            Some(model) if same_index(model.page_index(), requested) => {
                debug!(entity = %self.entity_name(), "reusing stashed index page");
                model
            }
            _ => self.index_model(requested)?
        };

        if page.is_some() && !same_index(model.page_index(), requested) {
            let canonical = model.page_index().saturating_add(1);
            info!(
                entity = %self.entity_name(),
                requested = requested.saturating_add(1),
                canonical,
                "redirecting to canonical page"
            );
            temp.put(stash_key, model);
            return Ok(ActionResult::Redirect(Redirect::Index {
                page: canonical
            }));
        }

        Ok(ActionResult::view(ViewName::Index, ViewModel::Index(model)))
    }

    /// Show one entity.
    ///
    /// # Errors
    ///
    /// [`ScaffoldError::Repository`] if the lookup fails.
    pub fn details(&self, key: &R::Key) -> Result<ActionResult<E>, ScaffoldError> {
        debug!(entity = %self.entity_name(), key = %key, "details");
        self.show(key, ViewMode::Details, ViewName::Details)
    }

    /// Show the edit form.
    ///
    /// # Errors
    ///
    /// [`ScaffoldError::Repository`] if the lookup fails.
    pub fn edit(&self, key: &R::Key) -> Result<ActionResult<E>, ScaffoldError> {
        debug!(entity = %self.entity_name(), key = %key, "edit");
        self.show(key, ViewMode::Edit, ViewName::Edit)
    }

    /// Apply a submitted edit form.
    ///
    /// # Errors
    ///
    /// [`ScaffoldError::Repository`] if the lookup fails,
    /// [`ScaffoldError::Bind`] if the descriptor names a member the entity
    /// has no field for.
    pub fn edit_post(
        &self,
        key: &R::Key,
        form: &FormValues
    ) -> Result<ActionResult<E>, ScaffoldError> {
        debug!(entity = %self.entity_name(), key = %key, "edit submitted");
        let Some(mut entity) = self.find(key)? else {
            return Ok(self.not_found(key));
        };

        let outcome = self.try_edit(&mut entity, form);
        self.conclude(entity, outcome, ViewMode::Edit, ViewName::Edit, "editing")
    }

    /// Show the create form for a fresh entity.
    pub fn create(&self) -> ActionResult<E> {
        debug!(entity = %self.entity_name(), "create");
        ActionResult::view(
            ViewName::Create,
            ViewModel::Instance(self.project(E::default(), ViewMode::Create))
        )
    }

    /// Apply a submitted create form.
    ///
    /// # Errors
    ///
    /// [`ScaffoldError::Bind`] if the descriptor names a member the entity
    /// has no field for.
    pub fn create_post(&self, form: &FormValues) -> Result<ActionResult<E>, ScaffoldError> {
        debug!(entity = %self.entity_name(), "create submitted");
        let mut entity = E::default();

        let outcome = self.try_create(&mut entity, form);
        self.conclude(entity, outcome, ViewMode::Create, ViewName::Create, "creating")
    }

    /// Show the delete confirmation.
    ///
    /// # Errors
    ///
    /// [`ScaffoldError::Repository`] if the lookup fails.
    pub fn delete(&self, key: &R::Key) -> Result<ActionResult<E>, ScaffoldError> {
        debug!(entity = %self.entity_name(), key = %key, "delete");
        self.show(key, ViewMode::Delete, ViewName::Delete)
    }

    /// Delete a confirmed entity.
    ///
    /// # Errors
    ///
    /// [`ScaffoldError::Repository`] if the lookup fails.
    pub fn delete_post(&self, key: &R::Key) -> Result<ActionResult<E>, ScaffoldError> {
        debug!(entity = %self.entity_name(), key = %key, "delete confirmed");
        let Some(entity) = self.find(key)? else {
            return Ok(self.not_found(key));
        };

        match self.try_delete(&entity) {
            Ok(()) => {
                info!(entity = %self.entity_name(), key = %key, "deleted");
                Ok(ActionResult::view(
                    ViewName::Deleted,
                    ViewModel::Instance(self.project(entity, ViewMode::Delete))
                ))
            }
            Err(failure) => {
                warn!(entity = %self.entity_name(), key = %key, error = %failure, "delete failed");
                Ok(self.rerender(entity, &failure, ViewMode::Delete, ViewName::NotDeleted, "deleting"))
            }
        }
    }

    fn find(&self, key: &R::Key) -> Result<Option<E>, ScaffoldError> {
        self.repository.get(key).map_err(ScaffoldError::repository)
    }

    fn not_found(&self, key: &R::Key) -> ActionResult<E> {
        debug!(entity = %self.entity_name(), key = %key, "entity not found");
        ActionResult::view(ViewName::EntityNotFound, ViewModel::NotFound(key.to_string()))
    }

    fn show(
        &self,
        key: &R::Key,
        mode: ViewMode,
        view: ViewName
    ) -> Result<ActionResult<E>, ScaffoldError> {
        Ok(match self.find(key)? {
            Some(entity) => ActionResult::view(view, ViewModel::Instance(self.project(entity, mode))),
            None => self.not_found(key)
        })
    }

    fn bind(&self, entity: &mut E, mode: ViewMode, form: &FormValues) -> Result<(), Failure> {
        bind(entity, &self.descriptor, mode, form).map_err(Failure::from_bind)
    }

    fn try_edit(&self, entity: &mut E, form: &FormValues) -> Result<(), Failure> {
        self.bind(entity, ViewMode::Edit, form)?;
        entity.check_rule_violations()?;
        self.hooks.before_edit(entity)?;
        self.repository.update(entity).map_err(Failure::repository)?;
        self.repository.save().map_err(Failure::repository)
    }

    fn try_create(&self, entity: &mut E, form: &FormValues) -> Result<(), Failure> {
        self.bind(entity, ViewMode::Create, form)?;
        entity.check_rule_violations()?;
        self.hooks.before_create(entity)?;
        self.repository.add(entity).map_err(Failure::repository)?;
        self.repository.save().map_err(Failure::repository)
    }

    fn try_delete(&self, entity: &E) -> Result<(), Failure> {
        self.hooks.before_delete(entity)?;
        self.repository.delete(entity).map_err(Failure::repository)?;
        self.repository.save().map_err(Failure::repository)
    }

    fn conclude(
        &self,
        entity: E,
        outcome: Result<(), Failure>,
        mode: ViewMode,
        view: ViewName,
        verb: &str
    ) -> Result<ActionResult<E>, ScaffoldError> {
        match outcome {
            Ok(()) => {
                let key = entity.key().trim().to_owned();
                info!(entity = %self.entity_name(), key = %key, "{verb} succeeded");
                Ok(ActionResult::Redirect(Redirect::Details {
                    key
                }))
            }
            Err(Failure::Misconfigured(error)) => Err(error.into()),
            Err(failure) => {
                warn!(entity = %self.entity_name(), error = %failure, "{verb} failed");
                Ok(self.rerender(entity, &failure, mode, view, verb))
            }
        }
    }

    fn rerender(
        &self,
        entity: E,
        failure: &Failure,
        mode: ViewMode,
        view: ViewName,
        verb: &str
    ) -> ActionResult<E> {
        let mut state = ModelState::new();

        if let Failure::Bind(errors) = failure {
            for error in errors {
                state.add_error(error.field(), error.to_string());
            }
        }
        state.add_rule_violations(entity.rule_violations());
        if let Failure::Hook(hook) = failure {
            state.add_rule_violations(hook.violations().iter().cloned());
        }

        let mut summary = format!("Error {verb} {}.", self.entity_name());
        if self.config.verbose_errors {
            summary.push(' ');
            summary.push_str(&failure.to_string());
        }
        state.add_error("", summary);

        ActionResult::View(
            ViewResult::new(view, ViewModel::Instance(self.project(entity, mode)))
                .with_model_state(state)
        )
    }
}
