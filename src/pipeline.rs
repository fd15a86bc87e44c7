use crate::body_model::BodyModel;
use crate::error::{TransportError, TwinError};
use crate::ingest::{IngestStats, Ingestor, MessageSource};
use crate::render::{Display, RenderConfig, RenderLoop};
use crate::store::SampleStore;
use crate::types::SensorChannel;
use log::{debug, error, info};
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, ScopedJoinHandle};

/// A shared flag that asks every unit of the pipeline to wind down.
///
/// Once set, the flag stays set.
#[derive(Debug, Clone, Default)]
pub struct StopSignal(Arc<AtomicBool>);

impl StopSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests all holders of this signal to stop.
    pub fn stop(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Settings of a [`DigitalTwin`].
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct TwinConfig {
    pub render: RenderConfig,
}

/// Mirrors the orientation of a phone onto a [`Display`].
///
/// Two ingestors feed the accelerometer and magnetometer streams into a shared
/// [`SampleStore`] while the render loop periodically turns the latest vectors into
/// frames.
pub struct DigitalTwin {
    config: TwinConfig,
    store: Arc<SampleStore>,
    body: BodyModel<f64>,
    stop: StopSignal,
}

impl DigitalTwin {
    pub fn new(config: TwinConfig) -> Self {
        Self {
            config,
            store: Arc::new(SampleStore::new()),
            body: BodyModel::phone(),
            stop: StopSignal::new(),
        }
    }

    /// The signal that ends [`DigitalTwin::run`] when set.
    pub fn stop_signal(&self) -> StopSignal {
        self.stop.clone()
    }

    /// The store the ingestors publish to.
    pub fn store(&self) -> Arc<SampleStore> {
        Arc::clone(&self.store)
    }

    /// Runs the pipeline until the display closes, a source ends or the stop signal is set.
    ///
    /// Each source is drained on its own thread. The render loop runs on the calling
    /// thread, which lets window toolkits that insist on the main thread act as display.
    pub fn run<A, M, D>(
        &self,
        accelerometer: A,
        magnetometer: M,
        display: &mut D,
    ) -> Result<(), TwinError>
    where
        A: MessageSource + Send,
        M: MessageSource + Send,
        D: Display + ?Sized,
    {
        info!("starting digital twin");

        let results = thread::scope(|scope| -> Result<_, TwinError> {
            let accelerometer =
                self.spawn_ingestor(scope, SensorChannel::Accelerometer, accelerometer)?;
            let magnetometer =
                match self.spawn_ingestor(scope, SensorChannel::Magnetometer, magnetometer) {
                    Ok(handle) => handle,
                    Err(e) => {
                        self.stop.stop();
                        return Err(e);
                    }
                };

            let render = RenderLoop::new(
                Arc::clone(&self.store),
                self.body,
                self.stop.clone(),
                self.config.render,
            );
            let frames = render.run(display);
            debug!("render loop finished after {frames} frames");

            self.stop.stop();
            Ok([
                join_ingestor(SensorChannel::Accelerometer, accelerometer),
                join_ingestor(SensorChannel::Magnetometer, magnetometer),
            ])
        })?;

        info!("digital twin stopped");

        // Both ingestors are joined before the first failure is reported.
        for result in results {
            result?;
        }
        Ok(())
    }

    fn spawn_ingestor<'scope, S>(
        &self,
        scope: &'scope thread::Scope<'scope, '_>,
        channel: SensorChannel,
        mut source: S,
    ) -> Result<ScopedJoinHandle<'scope, Result<IngestStats, TransportError>>, TwinError>
    where
        S: MessageSource + Send + 'scope,
    {
        let ingestor = Ingestor::new(channel, Arc::clone(&self.store), self.stop.clone());
        let stop = self.stop.clone();
        thread::Builder::new()
            .name(format!("{}-ingestor", ingestor.channel()))
            .spawn_scoped(scope, move || {
                // A dead ingestor would leave its channel frozen, so wind everything down.
                panic::catch_unwind(AssertUnwindSafe(|| ingestor.run(&mut source)))
                    .unwrap_or_else(|payload| {
                        error!("{} ingestor panicked, stopping", ingestor.channel());
                        stop.stop();
                        panic::resume_unwind(payload)
                    })
            })
            .map_err(|e| TwinError::Transport(TransportError::Io(e)))
    }
}

impl Default for DigitalTwin {
    fn default() -> Self {
        Self::new(TwinConfig::default())
    }
}

fn join_ingestor(
    channel: SensorChannel,
    handle: ScopedJoinHandle<'_, Result<IngestStats, TransportError>>,
) -> Result<(), TwinError> {
    match handle.join() {
        Ok(Ok(stats)) => {
            debug!(
                "{channel}: {} messages accepted, {} rejected",
                stats.accepted, stats.rejected
            );
            Ok(())
        }
        Ok(Err(e)) => Err(TwinError::Transport(e)),
        Err(_) => Err(TwinError::IngestorPanicked(channel)),
    }
}
