//! Sensor stream ingestion.
//!
//! An [`Ingestor`] pulls raw messages of one channel from a [`MessageSource`], decodes
//! them and publishes the resulting vector into the [`SampleStore`]. Messages that fail to
//! decode are reported and dropped; the store keeps the last good value.

use crate::error::{DecodeError, TransportError};
use crate::pipeline::StopSignal;
use crate::store::SampleStore;
use crate::types::{SensorChannel, Vector3};
use log::{debug, error, info, warn};
use serde::Deserialize;
use std::sync::Arc;

/// A sensor message as sent by Android sensor streaming servers, e.g.
/// `{"values": [0.03, 0.12, 9.79], "accuracy": 3, "timestamp": 2381287512}`.
///
/// Only `values` is of interest; all other fields are ignored.
#[derive(Debug, Deserialize)]
struct SensorMessage {
    values: Vec<f64>,
}

/// Decodes a sensor message into a vector made of its first three values.
pub fn decode_message(payload: &str) -> Result<Vector3<f64>, DecodeError> {
    let message: SensorMessage = serde_json::from_str(payload)?;
    match message.values.as_slice() {
        [x, y, z, ..] => Ok(Vector3::new(*x, *y, *z)),
        values => Err(DecodeError::TooFewValues {
            count: values.len(),
        }),
    }
}

/// The outcome of waiting for the next message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Received {
    /// A raw message payload.
    Message(String),
    /// Nothing arrived within the poll interval of the source.
    Idle,
    /// The remote end closed the stream.
    Closed,
}

/// A blocking source of raw sensor messages, e.g. a network connection.
///
/// Implementations should return [`Received::Idle`] after a bounded wait so that the
/// ingestor gets to observe the stop signal.
pub trait MessageSource {
    /// Waits for the next message.
    fn receive(&mut self) -> Result<Received, TransportError>;

    /// Releases the underlying connection. Called once when ingestion ends.
    fn close(&mut self) {}
}

impl<S> MessageSource for Box<S>
where
    S: MessageSource + ?Sized,
{
    fn receive(&mut self) -> Result<Received, TransportError> {
        (**self).receive()
    }

    fn close(&mut self) {
        (**self).close()
    }
}

/// Message counters of a finished ingestion run.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct IngestStats {
    /// Messages that were decoded and published.
    pub accepted: u64,
    /// Messages that failed to decode.
    pub rejected: u64,
}

/// Feeds one sensor channel of a [`SampleStore`].
pub struct Ingestor {
    channel: SensorChannel,
    store: Arc<SampleStore>,
    stop: StopSignal,
}

impl Ingestor {
    pub fn new(channel: SensorChannel, store: Arc<SampleStore>, stop: StopSignal) -> Self {
        Self {
            channel,
            store,
            stop,
        }
    }

    /// The channel this ingestor publishes to.
    pub fn channel(&self) -> SensorChannel {
        self.channel
    }

    /// Decodes a single payload and publishes it.
    ///
    /// On error the store is left untouched.
    pub fn handle_message(&self, payload: &str) -> Result<Vector3<f64>, DecodeError> {
        let vector = decode_message(payload)?;
        self.store.update(self.channel, vector);
        Ok(vector)
    }

    /// Ingests messages until the stop signal is set or the source ends.
    ///
    /// A closed source or a transport error sets the stop signal so that the rest of the
    /// pipeline winds down as well. Transport errors are returned, never retried.
    pub fn run<S>(&self, source: &mut S) -> Result<IngestStats, TransportError>
    where
        S: MessageSource + ?Sized,
    {
        let channel = self.channel;
        let mut stats = IngestStats::default();

        let result = loop {
            if self.stop.is_stopped() {
                debug!("{channel} ingestor observed the stop signal");
                break Ok(());
            }

            match source.receive() {
                Ok(Received::Message(payload)) => match self.handle_message(&payload) {
                    Ok(_) => stats.accepted += 1,
                    Err(e) => {
                        stats.rejected += 1;
                        warn!("{channel} processing error: {e}");
                    }
                },
                Ok(Received::Idle) => {}
                Ok(Received::Closed) => {
                    info!("{channel} connection closed");
                    self.stop.stop();
                    break Ok(());
                }
                Err(e) => {
                    error!("{channel} transport error: {e}");
                    self.stop.stop();
                    break Err(e);
                }
            }
        };

        source.close();
        debug!(
            "{channel} ingestor finished: {} accepted, {} rejected",
            stats.accepted, stats.rejected
        );
        result.map(|()| stats)
    }
}
