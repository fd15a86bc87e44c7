use crate::types::{AccelerometerReading, MagnetometerReading, SensorChannel, Vector3};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// The latest vector of each channel, as seen by a single read.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct SensorSnapshot {
    pub accelerometer: Vector3<f64>,
    pub magnetometer: Vector3<f64>,
}

impl SensorSnapshot {
    /// The accelerometer vector as a typed reading.
    pub fn accelerometer_reading(&self) -> AccelerometerReading<f64> {
        self.accelerometer.into()
    }

    /// The magnetometer vector as a typed reading.
    pub fn magnetometer_reading(&self) -> MagnetometerReading<f64> {
        self.magnetometer.into()
    }
}

impl From<SensorSnapshot> for (Vector3<f64>, Vector3<f64>) {
    fn from(value: SensorSnapshot) -> Self {
        (value.accelerometer, value.magnetometer)
    }
}

/// Last-write-wins storage of the most recent vector per sensor channel.
///
/// Every channel sits behind its own lock, which is only held while a single vector is
/// copied in or out. A reader therefore never sees a half-written vector, but the two
/// channels of a [`SensorSnapshot`] are not guaranteed to stem from the same instant.
#[derive(Debug, Default)]
pub struct SampleStore {
    accelerometer: Mutex<Vector3<f64>>,
    magnetometer: Mutex<Vector3<f64>>,
}

impl SampleStore {
    /// Creates a store holding the zero vector for both channels.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrites the stored vector of a channel.
    pub fn update(&self, channel: SensorChannel, vector: Vector3<f64>) {
        *self.lock(channel) = vector;
    }

    /// Reads the stored vector of a single channel.
    pub fn get(&self, channel: SensorChannel) -> Vector3<f64> {
        *self.lock(channel)
    }

    /// Reads the stored vectors of both channels.
    pub fn snapshot(&self) -> SensorSnapshot {
        SensorSnapshot {
            accelerometer: self.get(SensorChannel::Accelerometer),
            magnetometer: self.get(SensorChannel::Magnetometer),
        }
    }

    fn lock(&self, channel: SensorChannel) -> MutexGuard<'_, Vector3<f64>> {
        let cell = match channel {
            SensorChannel::Accelerometer => &self.accelerometer,
            SensorChannel::Magnetometer => &self.magnetometer,
        };

        // A vector is copied as a whole, so a panicking writer cannot leave it torn.
        cell.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_starts_at_zero() {
        let store = SampleStore::new();
        assert_eq!(
            store.snapshot(),
            SensorSnapshot {
                accelerometer: Vector3::zero(),
                magnetometer: Vector3::zero(),
            }
        );
    }

    #[test]
    fn test_update_and_snapshot() {
        let store = SampleStore::new();
        let v1 = Vector3::new(0.1, 0.2, 9.7);
        let v2 = Vector3::new(22.0, -5.0, -40.0);
        let v3 = Vector3::new(-9.8, 0.0, 0.3);

        store.update(SensorChannel::Accelerometer, v1);
        store.update(SensorChannel::Magnetometer, v2);
        let pair: (Vector3<f64>, Vector3<f64>) = store.snapshot().into();
        assert_eq!(pair, (v1, v2));

        store.update(SensorChannel::Accelerometer, v3);
        let snapshot = store.snapshot();
        assert_eq!(snapshot.accelerometer, v3);
        assert_eq!(snapshot.magnetometer, v2);
    }

    #[test]
    fn test_last_write_wins() {
        let store = SampleStore::new();
        for i in 0..10 {
            store.update(SensorChannel::Magnetometer, Vector3::new(i as f64, 0.0, 0.0));
        }
        assert_eq!(
            store.get(SensorChannel::Magnetometer),
            Vector3::new(9.0, 0.0, 0.0)
        );
        assert_eq!(store.get(SensorChannel::Accelerometer), Vector3::zero());
    }

    #[test]
    fn test_typed_readings() {
        let store = SampleStore::new();
        store.update(SensorChannel::Accelerometer, Vector3::new(1.0, 2.0, 3.0));
        let snapshot = store.snapshot();
        assert_eq!(
            snapshot.accelerometer_reading(),
            AccelerometerReading::new(1.0, 2.0, 3.0)
        );
        assert_eq!(
            snapshot.magnetometer_reading(),
            MagnetometerReading::new(0.0, 0.0, 0.0)
        );
    }

    #[test]
    fn test_concurrent_writers_never_tear_vectors() {
        const WRITERS: usize = 8;
        const WRITES: usize = 2_000;

        let store = Arc::new(SampleStore::new());
        let done = AtomicBool::new(false);

        thread::scope(|scope| {
            let reader = scope.spawn(|| {
                while !done.load(Ordering::Acquire) {
                    let v = store.get(SensorChannel::Accelerometer);
                    assert!(v.x == v.y && v.y == v.z, "torn read: {v:?}");
                }
            });

            let writers: Vec<_> = (0..WRITERS)
                .map(|writer| {
                    let store = Arc::clone(&store);
                    scope.spawn(move || {
                        for i in 0..WRITES {
                            let value = (writer * WRITES + i) as f64;
                            let vector = Vector3::new(value, value, value);
                            store.update(SensorChannel::Accelerometer, vector);
                        }
                    })
                })
                .collect();

            for writer in writers {
                writer.join().expect("writer panicked");
            }
            done.store(true, Ordering::Release);
            reader.join().expect("reader panicked");
        });

        let v = store.get(SensorChannel::Accelerometer);
        assert!(v.x == v.y && v.y == v.z);
        assert_eq!(store.get(SensorChannel::Magnetometer), Vector3::zero());
    }

    #[test]
    fn test_recovers_from_poisoned_lock() {
        let store = Arc::new(SampleStore::new());
        store.update(SensorChannel::Magnetometer, Vector3::new(1.0, 1.0, 1.0));

        let poisoner = Arc::clone(&store);
        let result = thread::spawn(move || {
            let _guard = poisoner.lock(SensorChannel::Magnetometer);
            panic!("writer died while holding the lock");
        })
        .join();
        assert!(result.is_err());

        assert_eq!(
            store.get(SensorChannel::Magnetometer),
            Vector3::new(1.0, 1.0, 1.0)
        );
        store.update(SensorChannel::Magnetometer, Vector3::new(2.0, 2.0, 2.0));
        assert_eq!(
            store.get(SensorChannel::Magnetometer),
            Vector3::new(2.0, 2.0, 2.0)
        );
    }
}
