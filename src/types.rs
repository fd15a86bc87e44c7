mod accelerometer_reading;
mod magnetometer_reading;
mod orientation;
mod sensor_channel;
mod vector3;

pub use crate::types::accelerometer_reading::AccelerometerReading;
pub use crate::types::magnetometer_reading::MagnetometerReading;
pub use crate::types::orientation::Orientation;
pub use crate::types::sensor_channel::SensorChannel;
pub use crate::types::vector3::Vector3;
