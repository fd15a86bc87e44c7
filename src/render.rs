//! The periodic render loop.
//!
//! Every tick takes a [`SensorSnapshot`] from the store, derives the orientation, rotates
//! the body model and hands the resulting [`Frame`] to a [`Display`].

use crate::body_model::{BodyModel, RotatedModel};
use crate::error::DisplayError;
use crate::estimator::calculate_orientation;
use crate::pipeline::StopSignal;
use crate::store::{SampleStore, SensorSnapshot};
use crate::types::Orientation;
use log::{error, info, trace, warn};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Pitch angles within this many degrees of ±90° are reported as close to gimbal lock.
const GIMBAL_LOCK_TOLERANCE: f64 = 1.0;

/// Something that shows rendered frames, e.g. a window or a terminal.
pub trait Display {
    /// Shows a single frame.
    ///
    /// Returning [`DisplayError::Closed`] ends the render loop; any other error only drops
    /// the current frame.
    fn show(&mut self, frame: &Frame) -> Result<(), DisplayError>;
}

impl<D> Display for &mut D
where
    D: Display + ?Sized,
{
    fn show(&mut self, frame: &Frame) -> Result<(), DisplayError> {
        (**self).show(frame)
    }
}

impl<D> Display for Box<D>
where
    D: Display + ?Sized,
{
    fn show(&mut self, frame: &Frame) -> Result<(), DisplayError> {
        (**self).show(frame)
    }
}

/// The result of a single render tick.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Frame {
    /// The orientation derived from the snapshot, in degrees.
    pub orientation: Orientation<f64>,
    /// The body model rotated by [`Frame::orientation`].
    pub model: RotatedModel<f64>,
}

impl Frame {
    /// The window title, e.g. `Phone Orientation\nRoll: 1.00°, Pitch: 2.00°, Yaw: 3.00°`.
    pub fn title(&self) -> String {
        format!("Phone Orientation\n{:.2}", self.orientation)
    }
}

/// Derives the frame for a snapshot of sensor vectors.
pub fn compute_frame(snapshot: &SensorSnapshot, body: &BodyModel<f64>) -> Frame {
    let orientation = calculate_orientation(
        &snapshot.accelerometer_reading(),
        &snapshot.magnetometer_reading(),
    );
    Frame {
        orientation,
        model: body.rotate(&orientation),
    }
}

/// Render loop settings.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// The pause between two ticks.
    pub tick_interval: Duration,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(10),
        }
    }
}

/// Renders frames from the latest sensor vectors until stopped.
pub struct RenderLoop {
    store: Arc<SampleStore>,
    body: BodyModel<f64>,
    stop: StopSignal,
    config: RenderConfig,
}

impl RenderLoop {
    pub fn new(
        store: Arc<SampleStore>,
        body: BodyModel<f64>,
        stop: StopSignal,
        config: RenderConfig,
    ) -> Self {
        Self {
            store,
            body,
            stop,
            config,
        }
    }

    /// Computes the current frame and shows it.
    ///
    /// The store is only locked while the snapshot is taken.
    pub fn tick<D>(&self, display: &mut D) -> Result<Frame, DisplayError>
    where
        D: Display + ?Sized,
    {
        let snapshot = self.store.snapshot();
        let frame = compute_frame(&snapshot, &self.body);

        trace!("{:.2}", frame.orientation);
        if frame.orientation.is_gimbal_locked(GIMBAL_LOCK_TOLERANCE) {
            trace!(
                "pitch {:.2}° is close to gimbal lock, roll and yaw are unreliable",
                frame.orientation.pitch
            );
        }

        display.show(&frame)?;
        Ok(frame)
    }

    /// Ticks until the stop signal is set or the display is closed.
    ///
    /// Failed or panicking ticks are logged and skipped. A closed display sets the stop
    /// signal. Returns the number of frames that were shown.
    pub fn run<D>(&self, display: &mut D) -> u64
    where
        D: Display + ?Sized,
    {
        let mut shown = 0;

        while !self.stop.is_stopped() {
            match panic::catch_unwind(AssertUnwindSafe(|| self.tick(display))) {
                Ok(Ok(_)) => shown += 1,
                Ok(Err(DisplayError::Closed)) => {
                    info!("display closed, stopping");
                    self.stop.stop();
                    break;
                }
                Ok(Err(e)) => warn!("render error: {e}"),
                Err(payload) => error!("render tick panicked: {}", panic_message(&*payload)),
            }

            thread::sleep(self.config.tick_interval);
        }

        shown
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&'static str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.as_str()
    } else {
        "unknown panic"
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::body_model::Marker;
    use crate::types::{SensorChannel, Vector3};

    /// Records every frame and closes itself after a fixed number of frames.
    pub(crate) struct RecordingDisplay {
        pub frames: Vec<Frame>,
        pub close_after: usize,
    }

    impl RecordingDisplay {
        pub fn new(close_after: usize) -> Self {
            Self {
                frames: Vec::new(),
                close_after,
            }
        }
    }

    impl Display for RecordingDisplay {
        fn show(&mut self, frame: &Frame) -> Result<(), DisplayError> {
            if self.frames.len() >= self.close_after {
                return Err(DisplayError::Closed);
            }
            self.frames.push(*frame);
            Ok(())
        }
    }

    /// Fails or panics on selected calls, then closes.
    struct FlakyDisplay {
        calls: usize,
        shown: usize,
    }

    impl Display for FlakyDisplay {
        fn show(&mut self, _frame: &Frame) -> Result<(), DisplayError> {
            self.calls += 1;
            match self.calls {
                1 => Err(DisplayError::Failed("surface lost".into())),
                2 => panic!("renderer exploded"),
                3 | 4 => {
                    self.shown += 1;
                    Ok(())
                }
                _ => Err(DisplayError::Closed),
            }
        }
    }

    fn fast_config() -> RenderConfig {
        RenderConfig {
            tick_interval: Duration::from_millis(1),
        }
    }

    fn render_loop(store: &Arc<SampleStore>, stop: &StopSignal) -> RenderLoop {
        RenderLoop::new(
            Arc::clone(store),
            BodyModel::phone(),
            stop.clone(),
            fast_config(),
        )
    }

    #[test]
    fn test_default_tick_interval() {
        assert_eq!(
            RenderConfig::default().tick_interval,
            Duration::from_millis(10)
        );
    }

    #[test]
    fn test_title() {
        let frame = Frame {
            orientation: Orientation::new(1.0, -45.126, 179.999),
            model: BodyModel::phone().rotate(&Orientation::default()),
        };
        assert_eq!(
            frame.title(),
            "Phone Orientation\nRoll: 1.00°, Pitch: -45.13°, Yaw: 180.00°"
        );
    }

    #[test]
    fn test_compute_frame_level() {
        let snapshot = SensorSnapshot {
            accelerometer: Vector3::new(0.0, 0.0, 9.81),
            magnetometer: Vector3::new(30.0, 0.0, -20.0),
        };
        let body = BodyModel::phone();
        let frame = compute_frame(&snapshot, &body);

        assert!(frame.orientation.roll.abs() <= 1e-9);
        assert!(frame.orientation.pitch.abs() <= 1e-9);
        assert!(frame.orientation.yaw.abs() <= 1e-9);
        for (rotated, original) in frame.model.points().iter().zip(body.points()) {
            assert!((*rotated - *original).norm() <= 1e-9);
        }
    }

    #[test]
    fn test_compute_frame_rolled() {
        // Lying on its left edge: gravity along +y.
        let snapshot = SensorSnapshot {
            accelerometer: Vector3::new(0.0, 9.81, 0.0),
            magnetometer: Vector3::new(30.0, 0.0, 0.0),
        };
        let frame = compute_frame(&snapshot, &BodyModel::phone());

        assert!((frame.orientation.roll - 90.0).abs() <= 1e-9);
        let width = frame.model.point(Marker::Width);
        assert!((width - Vector3::new(0.0, 0.0, 2.0)).norm() <= 1e-9);
    }

    #[test]
    fn test_tick_uses_latest_vectors() {
        let store = Arc::new(SampleStore::new());
        let stop = StopSignal::new();
        let render = render_loop(&store, &stop);
        let mut display = RecordingDisplay::new(usize::MAX);

        store.update(SensorChannel::Accelerometer, Vector3::new(0.0, 0.0, 1.0));
        store.update(SensorChannel::Magnetometer, Vector3::new(0.0, -1.0, 0.0));
        let frame = render.tick(&mut display).expect("display accepts frames");

        assert!((frame.orientation.yaw - 90.0).abs() <= 1e-9);
        assert_eq!(display.frames, vec![frame]);
    }

    #[test]
    fn test_zero_store_renders_finite_frame() {
        let store = Arc::new(SampleStore::new());
        let stop = StopSignal::new();
        let render = render_loop(&store, &stop);
        let mut display = RecordingDisplay::new(usize::MAX);

        let frame = render.tick(&mut display).expect("display accepts frames");
        let (roll, pitch, yaw) = frame.orientation.into();
        assert!(roll.is_finite() && pitch.is_finite() && yaw.is_finite());
    }

    #[test]
    fn test_closed_display_stops_loop() {
        let store = Arc::new(SampleStore::new());
        let stop = StopSignal::new();
        let render = render_loop(&store, &stop);
        let mut display = RecordingDisplay::new(3);

        let shown = render.run(&mut display);
        assert_eq!(shown, 3);
        assert_eq!(display.frames.len(), 3);
        assert!(stop.is_stopped());
    }

    #[test]
    fn test_failing_display_does_not_stop_loop() {
        let store = Arc::new(SampleStore::new());
        let stop = StopSignal::new();
        let render = render_loop(&store, &stop);
        let mut display = FlakyDisplay { calls: 0, shown: 0 };

        let shown = render.run(&mut display);
        assert_eq!(shown, 2);
        assert_eq!(display.shown, 2);
        assert_eq!(display.calls, 5);
        assert!(stop.is_stopped());
    }

    #[test]
    fn test_stopped_loop_shows_nothing() {
        let store = Arc::new(SampleStore::new());
        let stop = StopSignal::new();
        let render = render_loop(&store, &stop);
        let mut display = RecordingDisplay::new(usize::MAX);

        stop.stop();
        assert_eq!(render.run(&mut display), 0);
        assert!(display.frames.is_empty());
    }
}
