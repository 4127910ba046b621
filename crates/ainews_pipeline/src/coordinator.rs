use std::fmt;
use std::sync::Mutex;

use ainews_core::{Digest, DistributionResult, Result};
use chrono::{DateTime, Local};

use crate::curator::Curator;
use crate::distributor::Distributor;
use crate::logging::Logger;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Gathering,
    Distributing,
    Done,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Gathering => "gathering",
            Stage::Distributing => "distributing",
            Stage::Done => "done",
        };
        f.write_str(name)
    }
}

/// What a completed run produced. `delivery` is `None` for dry runs.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub digest: Digest,
    pub delivery: Option<DistributionResult>,
}

/// Runs the curator, then hands its digest to the distributor. One pass,
/// no retries.
pub struct Coordinator {
    curator: Curator,
    distributor: Distributor,
    dry_run: bool,
    stage: Mutex<Stage>,
    logger: Logger,
}

impl Coordinator {
    pub fn new(curator: Curator, distributor: Distributor) -> Self {
        Self {
            curator,
            distributor,
            dry_run: false,
            stage: Mutex::new(Stage::Gathering),
            logger: Logger::new().with_prefix("[coordinator]"),
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn stage(&self) -> Stage {
        *self.stage.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn enter(&self, stage: Stage) {
        *self.stage.lock().unwrap_or_else(|e| e.into_inner()) = stage;
        self.logger.info(&format!("Stage: {}", stage));
    }

    pub async fn run(&self) -> Result<RunReport> {
        self.run_at(Local::now()).await
    }

    pub async fn run_at(&self, now: DateTime<Local>) -> Result<RunReport> {
        self.enter(Stage::Gathering);
        let digest = match self.curator.curate(now).await {
            Ok(digest) => digest,
            Err(e) => {
                self.logger.error(&format!("Gathering failed: {}", e));
                return Err(e);
            }
        };

        if self.dry_run {
            self.logger.info("Dry run, skipping distribution");
            self.enter(Stage::Done);
            return Ok(RunReport {
                digest,
                delivery: None,
            });
        }

        self.enter(Stage::Distributing);
        let delivery = self.distributor.distribute(&digest).await;
        self.enter(Stage::Done);

        match delivery {
            Ok(result) => Ok(RunReport {
                digest,
                delivery: Some(result),
            }),
            Err(e) => {
                self.logger.error(&format!("Distribution failed: {}", e));
                Err(e)
            }
        }
    }
}
