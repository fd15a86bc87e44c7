use core::fmt::{Display, Formatter};

/// One of the two sensor streams feeding the orientation estimate.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum SensorChannel {
    Accelerometer,
    Magnetometer,
}

impl SensorChannel {
    /// All channels, in a stable order.
    pub const ALL: [SensorChannel; 2] = [SensorChannel::Accelerometer, SensorChannel::Magnetometer];

    /// A short lowercase name, e.g. for thread names and log messages.
    pub const fn name(&self) -> &'static str {
        match self {
            SensorChannel::Accelerometer => "accelerometer",
            SensorChannel::Magnetometer => "magnetometer",
        }
    }

    /// The Android sensor type string of the channel, as used by sensor streaming servers.
    pub const fn android_sensor_type(&self) -> &'static str {
        match self {
            SensorChannel::Accelerometer => "android.sensor.accelerometer",
            SensorChannel::Magnetometer => "android.sensor.magnetic_field",
        }
    }
}

impl Display for SensorChannel {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
