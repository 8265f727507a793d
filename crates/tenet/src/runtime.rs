//! TenetRuntime: owns every engine under one configuration.

use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tenet_classification::{ClassificationGateway, KeywordClassifier};
use tenet_convergence::{AxiomPromoter, ConvergenceEngine, ConvergenceOutcome, SweepReport};
use tenet_core::config::TenetConfig;
use tenet_core::errors::{TenetError, TenetResult};
use tenet_core::models::{GreenfieldState, PrincipleStore, Signal, SignalCandidate};
use tenet_core::traits::{ICategoryClassifier, IEmbeddingProvider, ISnapshotStore};
use tenet_greenfield::RejectionLedger;
use tenet_intake::{IntakePipeline, IntakeReport};
use tenet_merge::{MergeOutcome, StoreMerger};
use tenet_observability::tracing_setup;
use tenet_observability::ObservabilityEngine;
use tenet_storage::SnapshotStorage;
use tracing::info;

/// Where snapshots go.
#[derive(Debug, Clone, Default)]
pub enum StorageMode {
    /// No snapshot storage; `snapshot` and `restore_latest` fail.
    #[default]
    Disabled,
    InMemory,
    /// SQLite file. `None` uses `storage.db_path` from the configuration.
    File(Option<PathBuf>),
}

/// Options for building a runtime.
#[derive(Default)]
pub struct RuntimeOptions {
    /// TOML configuration. If None, uses defaults.
    pub config_toml: Option<String>,
    /// Classification capability. If None, the offline keyword classifier.
    pub classifier: Option<Arc<dyn ICategoryClassifier>>,
    /// Embedding producer. Required for `ingest`.
    pub embedder: Option<Arc<dyn IEmbeddingProvider>>,
    pub storage: StorageMode,
    /// Install the JSON tracing subscriber from the observability config.
    pub init_tracing: bool,
}

pub struct TenetRuntime {
    pub config: TenetConfig,
    policy: GreenfieldState,
    gateway: Arc<ClassificationGateway>,
    intake: Option<IntakePipeline>,
    engine: ConvergenceEngine,
    merger: StoreMerger,
    storage: Option<SnapshotStorage>,
    observability: Mutex<ObservabilityEngine>,
    ledger: Mutex<RejectionLedger>,
    next_order: AtomicU64,
}

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

impl TenetRuntime {
    pub fn new(opts: RuntimeOptions) -> TenetResult<Self> {
        let config = match &opts.config_toml {
            Some(toml_str) => TenetConfig::from_toml(toml_str)?,
            None => TenetConfig::default(),
        };
        config.validate()?;
        if opts.init_tracing {
            tracing_setup::init_from_config(&config.observability);
        }

        let classifier = opts
            .classifier
            .unwrap_or_else(|| Arc::new(KeywordClassifier) as Arc<dyn ICategoryClassifier>);
        let gateway = Arc::new(ClassificationGateway::new(classifier, &config.classification)?);

        let intake = opts
            .embedder
            .map(|embedder| IntakePipeline::new(gateway.clone(), embedder, config.intake.clone()));

        let promoter = AxiomPromoter::new(gateway.clone(), config.promotion.clone());
        let engine = ConvergenceEngine::new(config.convergence.clone(), promoter);
        let merger = StoreMerger::new(config.merge.clone());

        let storage = match &opts.storage {
            StorageMode::Disabled => None,
            StorageMode::InMemory => Some(SnapshotStorage::open_in_memory()?),
            StorageMode::File(path) => {
                let path = path
                    .clone()
                    .unwrap_or_else(|| PathBuf::from(&config.storage.db_path));
                Some(SnapshotStorage::open_with_config(&path, &config.storage)?)
            }
        };

        let policy = config.greenfield.resolve_policy();
        info!(
            policy = %policy,
            classifier = gateway.classifier_name(),
            storage = storage.is_some(),
            "tenet runtime ready"
        );

        Ok(Self {
            config,
            policy,
            gateway,
            intake,
            engine,
            merger,
            storage,
            observability: Mutex::new(ObservabilityEngine::new()),
            ledger: Mutex::new(RejectionLedger::new()),
            next_order: AtomicU64::new(0),
        })
    }

    /// Greenfield policy in effect, resolved once at construction.
    pub fn policy(&self) -> GreenfieldState {
        self.policy
    }

    /// Filter, classify and embed raw candidates into signals. Creation
    /// order continues from the previous call.
    pub fn ingest(&self, candidates: &[SignalCandidate]) -> TenetResult<IntakeReport> {
        let intake = self.intake.as_ref().ok_or_else(|| TenetError::EmbeddingError {
            reason: "no embedding provider configured".to_string(),
        })?;
        let report = intake.ingest_reserving(candidates, &self.next_order)?;
        self.refresh_classification_metrics();
        Ok(report)
    }

    /// Converge under the runtime's policy and record metrics and ledger
    /// entries.
    pub fn converge(&self, signals: &[Signal], store: &PrincipleStore) -> TenetResult<ConvergenceOutcome> {
        self.converge_with_policy(signals, store, self.policy)
    }

    pub fn converge_with_policy(
        &self,
        signals: &[Signal],
        store: &PrincipleStore,
        policy: GreenfieldState,
    ) -> TenetResult<ConvergenceOutcome> {
        let result = self.engine.converge(signals, store, policy);
        // Keep later ingests ahead of everything already converged.
        if let Some(max) = signals.iter().map(|s| s.creation_order).max() {
            self.next_order.fetch_max(max.saturating_add(1), Ordering::SeqCst);
        }

        match &result {
            Ok(outcome) => {
                {
                    let mut obs = lock(&self.observability);
                    obs.metrics.convergence.record(outcome.report.to_sample());
                    obs.metrics.gate.record(
                        policy,
                        outcome.validation.valid,
                        outcome.validation.would_reject.is_some(),
                    );
                }
                lock(&self.ledger).record(&outcome.validation);
            }
            Err(TenetError::PreconditionViolation { .. }) => {
                lock(&self.observability)
                    .metrics
                    .convergence
                    .record_precondition_failure();
            }
            Err(_) => {}
        }
        self.refresh_classification_metrics();
        result
    }

    pub fn merge(&self, baseline: &PrincipleStore, incoming: &PrincipleStore) -> TenetResult<MergeOutcome> {
        let outcome = self.merger.merge(baseline, incoming)?;
        let mut obs = lock(&self.observability);
        obs.metrics
            .merge
            .record_run(outcome.stats.matched + outcome.stats.folded, outcome.stats.inserted);
        for conflict in &outcome.conflicts {
            obs.metrics.merge.record_conflict(conflict.kind());
        }
        Ok(outcome)
    }

    /// Retry promotion for every eligible principle whose promotion was
    /// deferred.
    pub fn promote_pending(&self, store: &mut PrincipleStore) -> SweepReport {
        let report = match self.engine.promoter() {
            Some(promoter) => promoter.sweep(store),
            None => SweepReport::default(),
        };
        self.refresh_classification_metrics();
        report
    }

    /// Persist `store` under `label`, then prune to the configured retention.
    pub fn snapshot(&self, label: &str, store: &PrincipleStore) -> TenetResult<i64> {
        let storage = self.storage()?;
        let id = storage.save(label, store)?;
        storage.prune(label, self.config.storage.snapshot_retention)?;
        Ok(id)
    }

    pub fn restore_latest(&self, label: &str) -> TenetResult<Option<PrincipleStore>> {
        self.storage()?.load_latest(label)
    }

    pub fn snapshot_store(&self) -> Option<&SnapshotStorage> {
        self.storage.as_ref()
    }

    /// Serializable view of all collected metrics.
    pub fn metrics_snapshot(&self) -> TenetResult<serde_json::Value> {
        lock(&self.observability).metrics_snapshot()
    }

    /// Would-reject counts by reason code.
    pub fn rejection_counts(&self) -> Vec<(String, u64)> {
        lock(&self.ledger)
            .counts()
            .iter()
            .map(|(k, v)| (k.clone(), *v))
            .collect()
    }

    fn storage(&self) -> TenetResult<&SnapshotStorage> {
        self.storage
            .as_ref()
            .ok_or_else(|| TenetError::ConfigError("snapshot storage is disabled".to_string()))
    }

    fn refresh_classification_metrics(&self) {
        let stats = self.gateway.stats();
        lock(&self.observability)
            .metrics
            .classification
            .update(stats.attempts, stats.failures, stats.cache_hits);
    }
}
