// Enable no_std mode.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
// Only enables the `doc_cfg` feature when the `docsrs` configuration attribute is defined.
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("either the `std` or the `libm` feature must be enabled");

mod body_model;
mod estimator;
#[cfg(feature = "coordinate-frame")]
#[cfg_attr(docsrs, doc(cfg(feature = "coordinate-frame")))]
mod frames;
mod macros;
mod num_traits;
mod rotation;
pub mod types;

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
mod error;
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod ingest;
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
mod pipeline;
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod render;
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
mod store;
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod transport;

pub use crate::body_model::{BodyModel, Marker, RotatedModel, BODY_EDGES, BODY_POINTS};
pub use crate::estimator::calculate_orientation;
pub use crate::num_traits::*;
pub use crate::rotation::{rotate_points, RotationMatrix};
pub use crate::types::{
    AccelerometerReading, MagnetometerReading, Orientation, SensorChannel, Vector3,
};

#[cfg(feature = "coordinate-frame")]
pub use crate::frames::DeviceFrame;

#[cfg(feature = "std")]
pub use crate::error::{DecodeError, DisplayError, TransportError, TwinError};
#[cfg(feature = "std")]
pub use crate::pipeline::{DigitalTwin, StopSignal, TwinConfig};
#[cfg(feature = "std")]
pub use crate::render::RenderConfig;
#[cfg(feature = "std")]
pub use crate::store::{SampleStore, SensorSnapshot};
