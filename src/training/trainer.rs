//! Trainers
//!
//! A trainer is the unit of work the job manager runs. It is stored type-erased so the
//! simulated trainer and test doubles can be swapped without touching the manager.

use super::types::{StrategyMetrics, TrainingData};

use anyhow::Result;
use rand::Rng;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

/// Thread-safe, asynchronous training function.
pub type TrainFn =
    Arc<dyn Fn() -> Pin<Box<dyn Future<Output = Result<TrainingData>> + Send>> + Send + Sync>;

/// Wraps an async closure into a `TrainFn`.
pub fn trainer_fn<F, Fut>(trainer: F) -> TrainFn
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<TrainingData>> + Send + 'static,
{
    Arc::new(move || {
        Box::pin(trainer()) as Pin<Box<dyn Future<Output = Result<TrainingData>> + Send>>
    })
}

/// Stand-in for real model training: waits `duration`, then reports random metrics.
pub fn simulated_trainer(duration: Duration, model_version: String) -> TrainFn {
    trainer_fn(move || {
        let model_version = model_version.clone();
        async move {
            tracing::info!("Training started...");
            tokio::time::sleep(duration).await;
            let data = random_training_data(&model_version);
            tracing::info!("Training completed.");
            Ok(data)
        }
    })
}

fn random_training_data(model_version: &str) -> TrainingData {
    let mut rng = rand::thread_rng();
    let win_rate: f64 = rng.gen();

    TrainingData {
        timestamp: chrono::Utc::now(),
        model_version: model_version.to_string(),
        strategy_metrics: StrategyMetrics {
            fold: rng.gen(),
            call: rng.gen(),
            raise: rng.gen(),
        },
        win_rate: format!("{:.2}", win_rate),
    }
}
