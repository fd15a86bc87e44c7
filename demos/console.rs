//! Prints the phone orientation to the log instead of drawing it.
//!
//! ```text
//! cargo run --example console --features websocket -- --host 192.168.0.102:8080
//! ```

use std::error::Error;
use std::time::{Duration, Instant};

use clap::Parser;
use log::info;
use phone_orientation::render::{Display, Frame};
use phone_orientation::{DigitalTwin, DisplayError, Marker};

use crate::cli::Args;

mod cli;

/// Logs at most one frame per interval.
struct ConsoleDisplay {
    interval: Duration,
    last: Option<Instant>,
}

impl Display for ConsoleDisplay {
    fn show(&mut self, frame: &Frame) -> Result<(), DisplayError> {
        let now = Instant::now();
        if self.last.is_some_and(|last| now - last < self.interval) {
            return Ok(());
        }
        self.last = Some(now);

        let marker = Marker::Width;
        let top = frame.model.point(marker);
        info!(
            "{} | {} marker at ({:+.2}, {:+.2}, {:+.2})",
            frame.title().replace('\n', ": "),
            marker.name(),
            top.x,
            top.y,
            top.z
        );
        Ok(())
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    cli::init_logging();
    let args = Args::parse();

    let (accelerometer, magnetometer) = args.connect()?;
    let twin = DigitalTwin::new(args.twin_config());
    let mut display = ConsoleDisplay {
        interval: Duration::from_millis(500),
        last: None,
    };

    twin.run(accelerometer, magnetometer, &mut display)?;
    Ok(())
}
