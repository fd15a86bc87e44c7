//! Draws the phone orientation in a kiss3d window.
//!
//! ```text
//! cargo run --example digital_twin --features websocket -- --host 192.168.0.102:8080
//! ```

use std::error::Error;
use std::rc::Rc;

use clap::Parser;
use coordinate_frame::WestUpNorth;
use kiss3d::light::Light;
use kiss3d::nalgebra::{Point2, Point3};
use kiss3d::text::Font;
use kiss3d::window::Window;
use phone_orientation::render::{Display, Frame};
use phone_orientation::{DeviceFrame, DigitalTwin, DisplayError, Marker, Vector3, BODY_EDGES};

use crate::cli::Args;

mod cli;

/// kiss3d uses a right-handed, y-up frame: x west, y up, z north.
type Kiss3DCoordinates<T> = WestUpNorth<T>;

/// Scales model units to scene units.
const SCALE: f64 = 0.25;

struct WindowDisplay {
    window: Window,
    font: Rc<Font>,
}

impl WindowDisplay {
    fn new() -> Self {
        let mut window = Window::new("Phone Orientation");
        window.set_framerate_limit(Some(60));
        window.set_light(Light::StickToCamera);
        window.set_background_color(0.118, 0.122, 0.149);
        window.set_point_size(8.0);

        Self {
            window,
            font: Font::default(),
        }
    }

    fn draw_reference_axes(&mut self) {
        let dark_red = Point3::new(0.5, 0.0, 0.0);
        let dark_green = Point3::new(0.0, 0.5, 0.0);
        let dark_blue = Point3::new(0.0, 0.0, 0.5);

        let origin = Point3::default();
        let east = kiss3d_point(Vector3::new(1.0, 0.0, 0.0));
        let north = kiss3d_point(Vector3::new(0.0, 1.0, 0.0));
        let up = kiss3d_point(Vector3::new(0.0, 0.0, 1.0));

        self.window.draw_line(&origin, &east, &dark_red);
        self.window.draw_line(&origin, &north, &dark_green);
        self.window.draw_line(&origin, &up, &dark_blue);
    }

    fn draw_model(&mut self, frame: &Frame) {
        for &(start, end) in BODY_EDGES.iter() {
            let color = marker_color(end);
            let start = kiss3d_point(frame.model.point(start));
            let end = kiss3d_point(frame.model.point(end));
            self.window.draw_line(&start, &end, &color);
            self.window.draw_point(&end, &color);
        }
    }

    fn draw_title(&mut self, frame: &Frame) {
        let white = Point3::new(1.0, 1.0, 1.0);
        for (line, text) in frame.title().lines().enumerate() {
            self.window.draw_text(
                text,
                &Point2::new(0.0, 32.0 * line as f32),
                32.0,
                &self.font,
                &white,
            );
        }
    }
}

impl Display for WindowDisplay {
    fn show(&mut self, frame: &Frame) -> Result<(), DisplayError> {
        self.draw_reference_axes();
        self.draw_model(frame);
        self.draw_title(frame);

        if !self.window.render() {
            return Err(DisplayError::Closed);
        }
        Ok(())
    }
}

fn marker_color(marker: Marker) -> Point3<f32> {
    match marker {
        Marker::Center => Point3::new(1.0, 1.0, 1.0),
        Marker::Length => Point3::new(1.0, 0.0, 0.0),
        Marker::NegativeLength => Point3::new(0.5, 0.0, 0.0),
        Marker::Width => Point3::new(0.0, 1.0, 0.0),
        Marker::NegativeWidth => Point3::new(0.0, 0.5, 0.0),
        Marker::Height => Point3::new(0.0, 0.0, 1.0),
        Marker::NegativeHeight => Point3::new(0.0, 0.0, 0.5),
    }
}

fn kiss3d_point(vector: Vector3<f64>) -> Point3<f32> {
    let device: DeviceFrame<f64> = (vector * SCALE).into();
    let scene: Kiss3DCoordinates<f64> = device.into();
    Point3::new(scene.x() as f32, scene.y() as f32, scene.z() as f32)
}

fn main() -> Result<(), Box<dyn Error>> {
    cli::init_logging();
    let args = Args::parse();

    let (accelerometer, magnetometer) = args.connect()?;
    let twin = DigitalTwin::new(args.twin_config());

    // The window has to live on the main thread, which is where the render loop runs.
    let mut display = WindowDisplay::new();
    twin.run(accelerometer, magnetometer, &mut display)?;
    Ok(())
}
