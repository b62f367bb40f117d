//! Raw sysfs attribute I/O — trait + filesystem backend.
//!
//! Failure to reach an attribute is treated as "hardware absent": logged at
//! warn level and reported through the return value, never as an error the
//! arbitration layer would surface.

use std::fmt;
use std::fs;

/// Byte-level access to sysfs LED attributes.
pub trait Sysfs {
    /// Read an attribute and parse it as a non-negative integer.
    /// `None` when the file cannot be opened or does not hold a number.
    fn read_int(&self, path: &str) -> Option<u32>;

    /// Write a value's display form to an attribute.
    /// `false` when the file cannot be written.
    fn write_value(&self, path: &str, value: impl fmt::Display) -> bool;
}

/// Real backend over the device filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct DeviceFs;

impl Sysfs for DeviceFs {
    fn read_int(&self, path: &str) -> Option<u32> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("failed to read from {path}: {e}");
                return None;
            }
        };
        match raw.trim().parse() {
            Ok(value) => Some(value),
            Err(_) => {
                log::warn!("non-numeric value in {path}: {raw:?}");
                None
            }
        }
    }

    fn write_value(&self, path: &str, value: impl fmt::Display) -> bool {
        let value = value.to_string();
        if let Err(e) = fs::write(path, &value) {
            log::warn!("failed to write {value} to {path}: {e}");
            return false;
        }
        true
    }
}

// ── Mock backend for testing ──

/// In-memory sysfs for unit and integration tests.
///
/// Always compiled (zero runtime cost), hidden from public docs.
#[doc(hidden)]
pub mod mock {
    use super::*;
    use std::collections::{HashMap, HashSet};
    use std::sync::Mutex;

    /// In-memory backend. Serves preset attribute values from `values` and
    /// records every write, in order, in `writes`.
    ///
    /// Interior state sits behind `Mutex` (not `RefCell`) so a mux built on
    /// this backend can be driven from multiple threads in tests.
    #[derive(Debug, Default)]
    pub struct MockSysfs {
        /// Readable attributes: path → value.
        pub values: Mutex<HashMap<String, u32>>,
        /// Recorded writes in call order: (path, written string).
        pub writes: Mutex<Vec<(String, String)>>,
        /// Paths whose writes are rejected.
        pub fail_paths: Mutex<HashSet<String>>,
    }

    impl MockSysfs {
        pub fn new() -> Self {
            Self::default()
        }

        /// Preset a readable attribute value.
        pub fn set_int(&self, path: impl Into<String>, value: u32) {
            self.values.lock().unwrap().insert(path.into(), value);
        }

        /// Reject subsequent writes to `path`.
        pub fn fail_writes_to(&self, path: impl Into<String>) {
            self.fail_paths.lock().unwrap().insert(path.into());
        }

        /// All recorded writes, in order.
        pub fn writes(&self) -> Vec<(String, String)> {
            self.writes.lock().unwrap().clone()
        }

        /// Recorded writes whose path ends with `suffix`, values only.
        pub fn writes_to(&self, suffix: &str) -> Vec<String> {
            self.writes
                .lock()
                .unwrap()
                .iter()
                .filter(|(path, _)| path.ends_with(suffix))
                .map(|(_, value)| value.clone())
                .collect()
        }

        /// Drop all recorded writes.
        pub fn clear_writes(&self) {
            self.writes.lock().unwrap().clear();
        }
    }

    impl Sysfs for MockSysfs {
        fn read_int(&self, path: &str) -> Option<u32> {
            self.values.lock().unwrap().get(path).copied()
        }

        fn write_value(&self, path: &str, value: impl fmt::Display) -> bool {
            if self.fail_paths.lock().unwrap().contains(path) {
                return false;
            }
            self.writes
                .lock()
                .unwrap()
                .push((path.to_string(), value.to_string()));
            true
        }
    }
}
