//! Main warden state container
//!
//! Holds the hook catalog source, registered apps, their cached group
//! indexes, and the toggle coordinator. Group indexes are rebuilt on every
//! hook reload; aggregated group state is always computed from the live
//! assignment set.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

use icu_locid::Locale;
use tokio::task::JoinHandle;

use warden_assign::{AssignmentService, Notifier, ToggleCoordinator};
use warden_groups::{exception_report, ExceptionEntry, GroupIndex, GroupState};
use warden_hooks::{App, CatalogProvider};

use crate::config::Config;
use crate::error::CoreError;
use crate::Result;

pub struct Warden {
    config: Config,
    /// Parsed collation locale
    locale: Locale,
    /// Hook catalog source
    catalog: Arc<dyn CatalogProvider>,
    coordinator: ToggleCoordinator,
    /// Registered apps by package name
    apps: Arc<RwLock<HashMap<String, App>>>,
    /// Group index per package, rebuilt on reload
    indexes: Arc<RwLock<HashMap<String, GroupIndex>>>,
}

impl Warden {
    pub fn new(
        config: Config,
        catalog: Arc<dyn CatalogProvider>,
        service: Arc<dyn AssignmentService>,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Self> {
        let locale: Locale = config
            .locale
            .parse()
            .map_err(|_| CoreError::Config(format!("Invalid locale tag: {}", config.locale)))?;

        tracing::info!(locale = %config.locale, "Initialized warden");

        Ok(Self {
            config,
            locale,
            catalog,
            coordinator: ToggleCoordinator::new(service, notifier),
            apps: Arc::new(RwLock::new(HashMap::new())),
            indexes: Arc::new(RwLock::new(HashMap::new())),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn register_app(&self, app: App) {
        self.apps.write().insert(app.package_name.clone(), app);
    }

    /// Get a registered app; the returned handle shares the live state
    pub fn app(&self, package_name: &str) -> Result<App> {
        self.apps
            .read()
            .get(package_name)
            .cloned()
            .ok_or_else(|| CoreError::AppNotFound(package_name.to_string()))
    }

    /// Fetch the app's hook catalog and rebuild its group index.
    pub fn reload_hooks(&self, package_name: &str) -> Result<GroupIndex> {
        let hooks = self.catalog.hooks_for(package_name)?;
        let index = GroupIndex::build(&hooks, &self.locale)?;
        self.indexes
            .write()
            .insert(package_name.to_string(), index.clone());
        Ok(index)
    }

    /// Cached group index for the app, loading it on first use
    pub fn group_index(&self, package_name: &str) -> Result<GroupIndex> {
        if let Some(index) = self.indexes.read().get(package_name) {
            return Ok(index.clone());
        }
        self.reload_hooks(package_name)
    }

    /// Aggregated state of one group, computed fresh
    pub fn group_state(&self, package_name: &str, group: &str) -> Result<GroupState> {
        let app = self.app(package_name)?;
        let index = self.group_index(package_name)?;
        if !index.contains(group) {
            return Err(CoreError::GroupNotFound(group.to_string()));
        }
        Ok(GroupState::compute(&app, index.members(group)))
    }

    /// Exceptions of a group's members, for the detail view
    pub fn exceptions(&self, package_name: &str, group: &str) -> Result<Vec<ExceptionEntry>> {
        let app = self.app(package_name)?;
        let index = self.group_index(package_name)?;
        if !index.contains(group) {
            return Err(CoreError::GroupNotFound(group.to_string()));
        }
        Ok(exception_report(&app, index.members(group)))
    }

    /// Toggle a whole group for the app.
    ///
    /// Applies locally and kicks off propagation; see
    /// [`ToggleCoordinator::set_group_enabled`] for the contract.
    pub fn set_group_enabled(
        &self,
        package_name: &str,
        group: &str,
        enable: bool,
    ) -> Result<JoinHandle<()>> {
        let app = self.app(package_name)?;
        let index = self.group_index(package_name)?;
        if !index.contains(group) {
            return Err(CoreError::GroupNotFound(group.to_string()));
        }
        Ok(self
            .coordinator
            .set_group_enabled(&app, index.members(group), enable))
    }
}
