use std::time::Duration;

use clap::Parser;
use phone_orientation::render::RenderConfig;
use phone_orientation::transport::{sensor_url, WebSocketSource, DEFAULT_HOST};
use phone_orientation::{SensorChannel, TransportError, TwinConfig};

#[derive(Parser, Debug)]
#[command(about = "Mirrors the orientation of an Android phone streaming its sensors", long_about = None)]
pub struct Args {
    /// Host and port of the sensor streaming server
    #[arg(long, default_value = DEFAULT_HOST)]
    pub host: String,

    /// Accelerometer endpoint (default: derived from --host)
    #[arg(long)]
    pub accelerometer_url: Option<String>,

    /// Magnetometer endpoint (default: derived from --host)
    #[arg(long)]
    pub magnetometer_url: Option<String>,

    /// Pause between two rendered frames, in milliseconds
    #[arg(long, default_value_t = 10)]
    pub tick_ms: u64,

    /// Longest wait for a sensor message before checking for shutdown, in milliseconds
    #[arg(long, default_value_t = 100)]
    pub poll_ms: u64,
}

impl Args {
    pub fn url(&self, channel: SensorChannel) -> String {
        let explicit = match channel {
            SensorChannel::Accelerometer => &self.accelerometer_url,
            SensorChannel::Magnetometer => &self.magnetometer_url,
        };
        explicit
            .clone()
            .unwrap_or_else(|| sensor_url(&self.host, channel))
    }

    pub fn twin_config(&self) -> TwinConfig {
        TwinConfig {
            render: RenderConfig {
                tick_interval: Duration::from_millis(self.tick_ms),
            },
        }
    }

    /// Connects to the accelerometer and magnetometer endpoints.
    pub fn connect(&self) -> Result<(WebSocketSource, WebSocketSource), TransportError> {
        let poll_interval = Duration::from_millis(self.poll_ms);
        let accelerometer =
            WebSocketSource::connect(&self.url(SensorChannel::Accelerometer), poll_interval)?;
        let magnetometer =
            WebSocketSource::connect(&self.url(SensorChannel::Magnetometer), poll_interval)?;
        Ok((accelerometer, magnetometer))
    }
}

/// Logs at `info` unless `RUST_LOG` says otherwise.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}
