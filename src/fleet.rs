//! Simulated server fleet.
//!
//! Stands in for a real provisioning backend: every action sleeps for the
//! configured latency, then mutates the in-memory records. Actions listed in
//! `failing_actions` always fail after the same delay.

use crate::config::FleetConfig;
use crate::logger::Logger;
use crate::model::{ActionKind, ServerId, ServerRecord, ServerStatus};
use crate::ui::components::action_dispatcher::ServerActions;
use async_trait::async_trait;
use chrono::{Duration as ChronoDuration, Local};
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Errors raised while loading or operating on the fleet
#[derive(Debug, thiserror::Error)]
pub enum FleetError {
    #[error("Failed to read fleet file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse fleet file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Server not found: {0}")]
    NotFound(ServerId),

    #[error("{action} failed for {server}")]
    Simulated { action: ActionKind, server: String },
}

/// Load server records from a JSON array
pub fn load_fleet<P: AsRef<Path>>(path: P) -> Result<Vec<ServerRecord>, FleetError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| FleetError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| FleetError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Built-in fleet used when no fleet file is configured
pub fn demo_fleet() -> Vec<ServerRecord> {
    let today = Local::now().date_naive();
    let created = |days_ago: i64| (today - ChronoDuration::days(days_ago)).format("%b %d, %Y").to_string();
    let server = |name: &str, ip: &str, status: ServerStatus, cpu: f64, ram: f64, plan: &str, days_ago: i64| {
        ServerRecord {
            id: ServerId::generate(),
            name: name.to_string(),
            ip: ip.to_string(),
            status,
            cpu,
            ram,
            plan: plan.to_string(),
            created_at: created(days_ago),
        }
    };

    vec![
        server("web-01", "10.0.1.11", ServerStatus::Online, 23.0, 41.0, "Standard 2GB", 120),
        server("web-02", "10.0.1.12", ServerStatus::Online, 55.0, 62.0, "Standard 2GB", 118),
        server("db-primary", "10.0.2.10", ServerStatus::Active, 81.0, 88.0, "Memory 16GB", 300),
        server("worker-eu", "10.0.3.21", ServerStatus::Pending, 4.0, 12.0, "Compute 4GB", 2),
        server("staging", "10.0.9.5", ServerStatus::Offline, 0.0, 0.0, "Basic 1GB", 45),
        server("batch-nightly", "10.0.4.2", ServerStatus::Completed, 12.0, 150.0, "Compute 8GB", 9),
    ]
}

pub struct SimulatedFleet {
    servers: RefCell<Vec<ServerRecord>>,
    /// Load remembered across a stop so start can restore it
    parked_load: RefCell<HashMap<ServerId, (f64, f64)>>,
    latency: Duration,
    failing: HashSet<ActionKind>,
    logger: Logger,
}

impl SimulatedFleet {
    pub fn new(
        servers: Vec<ServerRecord>,
        latency: Duration,
        failing: impl IntoIterator<Item = ActionKind>,
        logger: Logger,
    ) -> Self {
        Self {
            servers: RefCell::new(servers),
            parked_load: RefCell::new(HashMap::new()),
            latency,
            failing: failing.into_iter().collect(),
            logger,
        }
    }

    /// Build a fleet from configuration, loading the fleet file when set
    pub fn from_config(config: &FleetConfig, logger: Logger) -> Result<Self, FleetError> {
        let servers = match &config.path {
            Some(path) => load_fleet(path)?,
            None => demo_fleet(),
        };
        log::info!("Fleet: loaded {} servers", servers.len());
        Ok(Self::new(
            servers,
            Duration::from_millis(config.action_latency_ms),
            config.failing_kinds(),
            logger,
        ))
    }

    /// Current records, in fleet order
    pub fn snapshot(&self) -> Vec<ServerRecord> {
        self.servers.borrow().clone()
    }

    pub fn get(&self, id: &ServerId) -> Option<ServerRecord> {
        self.servers.borrow().iter().find(|server| &server.id == id).cloned()
    }

    fn name_of(&self, id: &ServerId) -> String {
        self.get(id).map_or_else(|| id.to_string(), |server| server.name)
    }

    fn update<F>(&self, id: &ServerId, apply: F) -> Result<(), FleetError>
    where
        F: FnOnce(&mut ServerRecord),
    {
        let mut servers = self.servers.borrow_mut();
        let server = servers
            .iter_mut()
            .find(|server| &server.id == id)
            .ok_or_else(|| FleetError::NotFound(id.clone()))?;
        apply(server);
        Ok(())
    }

    /// Wait out the latency, then fail if this action is configured to
    async fn settle(&self, kind: ActionKind, id: &ServerId) -> Result<(), FleetError> {
        if self.get(id).is_none() {
            return Err(FleetError::NotFound(id.clone()));
        }
        tokio::time::sleep(self.latency).await;
        if self.failing.contains(&kind) {
            return Err(FleetError::Simulated {
                action: kind,
                server: self.name_of(id),
            });
        }
        Ok(())
    }
}

#[async_trait(?Send)]
impl ServerActions for SimulatedFleet {
    async fn start(&self, id: &ServerId) -> anyhow::Result<()> {
        self.settle(ActionKind::Start, id).await?;
        let (cpu, ram) = self.parked_load.borrow_mut().remove(id).unwrap_or((5.0, 20.0));
        self.update(id, |server| {
            server.status = ServerStatus::Online;
            server.cpu = cpu;
            server.ram = ram;
        })?;
        Ok(())
    }

    async fn stop(&self, id: &ServerId) -> anyhow::Result<()> {
        self.settle(ActionKind::Stop, id).await?;
        let mut parked = None;
        self.update(id, |server| {
            parked = Some((server.cpu, server.ram));
            server.status = ServerStatus::Offline;
            server.cpu = 0.0;
            server.ram = 0.0;
        })?;
        if let Some(load) = parked {
            self.parked_load.borrow_mut().insert(id.clone(), load);
        }
        Ok(())
    }

    async fn restart(&self, id: &ServerId) -> anyhow::Result<()> {
        let previous = self.get(id).map(|server| server.status);
        self.update(id, |server| server.status = ServerStatus::Pending)?;

        if let Err(e) = self.settle(ActionKind::Restart, id).await {
            if let Some(status) = previous {
                // Record may have been deleted meanwhile
                let _ = self.update(id, |server| server.status = status);
            }
            return Err(e.into());
        }

        self.update(id, |server| server.status = ServerStatus::Online)?;
        Ok(())
    }

    async fn delete(&self, id: &ServerId) -> anyhow::Result<()> {
        self.settle(ActionKind::Delete, id).await?;
        self.servers.borrow_mut().retain(|server| &server.id != id);
        self.parked_load.borrow_mut().remove(id);
        Ok(())
    }

    async fn console(&self, id: &ServerId) -> anyhow::Result<()> {
        self.settle(ActionKind::Console, id).await?;
        let server = self.get(id).ok_or_else(|| FleetError::NotFound(id.clone()))?;
        self.logger
            .log(format!("Console session opened on {} ({})", server.name, server.ip));
        Ok(())
    }
}
