//! Metric registry — the shared catalog of metric name → factory.
//!
//! The registry maps each metric name to a [`MetricFactory`] that builds a
//! fresh instance on request. Names are unique: registering a name that is
//! already present fails with [`MuninnError::DuplicateMetric`] and leaves
//! the existing entry in place, so two plugins picking the same name can
//! never silently shadow each other.
//!
//! # Sharing
//!
//! All operations take `&self`; entries live behind a read-mostly
//! [`RwLock`]. Build one registry at startup, populate it (see
//! [`register_builtins`](crate::plugins::register_builtins)), then share it
//! as `Arc<MetricRegistry>` with whatever constructs aggregators. Each entry
//! is inserted under a single write lock, so readers never observe a
//! partially registered metric.
//!
//! # Lookup Flow
//!
//! ```text
//! MetricAggregator::new(&registry, ["cost", "latency"])
//!                     │
//!                     ▼
//!         ┌─────────────────────┐
//!         │   MetricRegistry    │ ──► "cost" registered? ──► factory()
//!         │   (name → factory)  │ ──► "latency" missing? ──► MetricNotFound
//!         └─────────────────────┘       (lists available names)
//! ```

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, instrument, warn};

use crate::telemetry;
use crate::traits::Metric;
use crate::{MuninnError, Result};

/// Builds a fresh metric instance.
pub type MetricFactory = Arc<dyn Fn() -> Box<dyn Metric> + Send + Sync>;

#[derive(Default)]
struct Entries {
    factories: HashMap<String, MetricFactory>,
    /// Names in registration order.
    order: Vec<String>,
}

/// Shared catalog mapping metric names to factories.
#[derive(Default)]
pub struct MetricRegistry {
    entries: RwLock<Entries>,
}

impl std::fmt::Debug for MetricRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MetricRegistry")
            .field("metrics", &self.get_all_names())
            .finish()
    }
}

impl MetricRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry pre-populated with the built-in metrics
    /// (`cost`, `latency`, `tokens`).
    pub fn with_builtins() -> Result<Self> {
        let registry = Self::new();
        crate::plugins::register_builtins(&registry)?;
        Ok(registry)
    }

    // ========================================================================
    // Registration
    // ========================================================================

    /// Register a metric type.
    ///
    /// Instantiates `M` once to read its name, then registers
    /// `M::default` as the factory under that name. Returns the name.
    pub fn register<M>(&self) -> Result<String>
    where
        M: Metric + Default + 'static,
    {
        self.register_factory(|| Box::new(M::default()) as Box<dyn Metric>)
    }

    /// Register an arbitrary factory, for metrics built with arguments.
    ///
    /// The factory is invoked once to read the metric name. Returns the name.
    pub fn register_factory<F>(&self, factory: F) -> Result<String>
    where
        F: Fn() -> Box<dyn Metric> + Send + Sync + 'static,
    {
        let name = factory().name().to_string();
        if name.trim().is_empty() {
            return Err(MuninnError::InvalidInput(
                "metric name must not be empty".to_string(),
            ));
        }

        let mut entries = self.write();
        if entries.factories.contains_key(&name) {
            Self::record_registration(false);
            warn!(metric = %name, "rejected duplicate metric registration");
            return Err(MuninnError::DuplicateMetric { name });
        }
        entries.factories.insert(name.clone(), Arc::new(factory));
        entries.order.push(name.clone());
        drop(entries);

        Self::record_registration(true);
        debug!(metric = %name, "registered metric");
        Ok(name)
    }

    /// Remove a metric. Absent names are a no-op.
    ///
    /// Returns whether an entry was removed.
    pub fn unregister(&self, name: &str) -> bool {
        let mut entries = self.write();
        if entries.factories.remove(name).is_none() {
            return false;
        }
        entries.order.retain(|n| n != name);
        debug!(metric = %name, "unregistered metric");
        true
    }

    /// Remove every metric.
    ///
    /// Meant for test isolation; production code should build a fresh
    /// registry instead.
    pub fn clear(&self) {
        let mut entries = self.write();
        entries.factories.clear();
        entries.order.clear();
    }

    // ========================================================================
    // Lookup
    // ========================================================================

    /// Get the factory registered under `name`.
    ///
    /// Fails with `MetricNotFound`, listing the available names, if absent.
    #[instrument(skip(self))]
    pub fn get(&self, name: &str) -> Result<MetricFactory> {
        let entries = self.read();
        match entries.factories.get(name) {
            Some(factory) => {
                Self::record_lookup(true);
                Ok(Arc::clone(factory))
            }
            None => {
                Self::record_lookup(false);
                Err(MuninnError::MetricNotFound {
                    name: name.to_string(),
                    available: entries.order.clone(),
                })
            }
        }
    }

    /// Snapshot of every registered factory, in registration order.
    ///
    /// Callers must not rely on the order.
    pub fn get_all(&self) -> Vec<MetricFactory> {
        let entries = self.read();
        entries
            .order
            .iter()
            .filter_map(|name| entries.factories.get(name).cloned())
            .collect()
    }

    /// Names matching [`get_all`](Self::get_all).
    pub fn get_all_names(&self) -> Vec<String> {
        self.read().order.clone()
    }

    /// Check if a metric is registered.
    pub fn is_registered(&self, name: &str) -> bool {
        self.read().factories.contains_key(name)
    }

    /// Number of registered metrics.
    pub fn len(&self) -> usize {
        self.read().order.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.read().order.is_empty()
    }

    // ========================================================================
    // Instantiation
    // ========================================================================

    /// Create a fresh instance of the metric registered under `name`.
    ///
    /// Fails with `InvalidInput` if the instance reports a name other than
    /// its registry key.
    pub fn create_instance(&self, name: &str) -> Result<Box<dyn Metric>> {
        // Release the lock before running user code in the factory.
        let factory = self.get(name)?;
        let metric = factory();
        if metric.name() != name {
            warn!(metric = %name, reported = %metric.name(), "factory built a metric under another name");
            return Err(MuninnError::InvalidInput(format!(
                "metric registered as '{name}' reports name '{}'",
                metric.name()
            )));
        }
        Ok(metric)
    }

    /// Create instances for `names`, in the given order.
    ///
    /// With `None`, creates one instance of every registered metric.
    /// Fails on the first name that is not registered.
    pub fn create_instances(&self, names: Option<&[&str]>) -> Result<Vec<Box<dyn Metric>>> {
        match names {
            Some(names) => names.iter().map(|name| self.create_instance(name)).collect(),
            None => self
                .get_all_names()
                .iter()
                .map(|name| self.create_instance(name))
                .collect(),
        }
    }

    // ========================================================================
    // Internals
    // ========================================================================

    // A panic while holding the lock cannot leave a half-inserted entry
    // (insertions are single map/vec pushes), so poisoning is recovered.
    fn read(&self) -> RwLockReadGuard<'_, Entries> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Entries> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn record_lookup(found: bool) {
        let status = if found { "ok" } else { "missing" };
        metrics::counter!(telemetry::REGISTRY_LOOKUPS_TOTAL, "status" => status).increment(1);
    }

    fn record_registration(ok: bool) {
        let status = if ok { "ok" } else { "duplicate" };
        metrics::counter!(telemetry::REGISTRATIONS_TOTAL, "status" => status).increment(1);
    }
}
