//! Physical LED drivers — brightness scaling and blink programming.

use crate::channel::{FlashMode, LightState};
use crate::color;
use crate::paths;
use crate::sysfs::Sysfs;

/// Physical device a channel maps onto. One driver per LED device family,
/// bound to registry entries at construction and never reassigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Driver {
    /// LCD backlight — plain brightness, no blink hardware.
    Backlight,
    /// Notification indicator LED — brightness plus breath/delay registers.
    Indicator,
}

impl Driver {
    /// LED class directory this driver writes into.
    fn led_dir(self) -> &'static str {
        match self {
            Driver::Backlight => paths::BACKLIGHT_LED,
            Driver::Indicator => paths::INDICATOR_LED,
        }
    }

    /// Full path of an attribute file under this driver's LED directory.
    fn attr(self, name: &str) -> String {
        format!("{}{}", self.led_dir(), name)
    }

    /// Program the device for `state`.
    ///
    /// If the device's maximum brightness cannot be read the whole mapping
    /// is skipped — the hardware is treated as absent, and the failure has
    /// already been logged by the backend. Individual write failures do not
    /// abort the remaining writes.
    pub fn apply(self, fs: &impl Sysfs, state: &LightState) {
        let Some(max_brightness) = fs.read_int(&self.attr(paths::MAX_BRIGHTNESS)) else {
            return;
        };
        log::debug!("{} max brightness is {max_brightness}", self.led_dir());
        let brightness = color::scaled_brightness(state, max_brightness);

        match self {
            Driver::Backlight => {
                fs.write_value(&self.attr(paths::BRIGHTNESS), brightness);
            }
            Driver::Indicator => {
                // Stop any running blink before touching the timing
                // registers, so the device never blinks on stale delays.
                fs.write_value(&self.attr(paths::BREATH), 0u32);

                if state.flash == FlashMode::Timed {
                    fs.write_value(&self.attr(paths::DELAY_OFF), state.flash_off_ms);
                    fs.write_value(&self.attr(paths::DELAY_ON), state.flash_on_ms);
                    fs.write_value(&self.attr(paths::BREATH), 1u32);
                } else {
                    fs.write_value(&self.attr(paths::BRIGHTNESS), brightness);
                }
            }
        }
    }
}
