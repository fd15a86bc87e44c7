//! Network sources of sensor messages.
//!
//! The ingest side only depends on the [`MessageSource`](crate::ingest::MessageSource)
//! trait; the transports in here are interchangeable implementations of it.

#[cfg(feature = "websocket")]
#[cfg_attr(docsrs, doc(cfg(feature = "websocket")))]
pub mod websocket;

#[cfg(feature = "websocket")]
pub use websocket::WebSocketSource;

use crate::types::SensorChannel;

/// The default host of an Android sensor streaming server.
pub const DEFAULT_HOST: &str = "localhost:8080";

/// The WebSocket endpoint of a sensor channel, e.g.
/// `ws://localhost:8080/sensor/connect?type=android.sensor.accelerometer`.
pub fn sensor_url(host: &str, channel: SensorChannel) -> String {
    format!(
        "ws://{host}/sensor/connect?type={}",
        channel.android_sensor_type()
    )
}
