//! Compiled-in sysfs locations for the physical LED devices.

/// LED class directory of the LCD backlight.
pub const BACKLIGHT_LED: &str = "/sys/class/leds/lcd-backlight/";

/// LED class directory of the shared notification indicator LED.
pub const INDICATOR_LED: &str = "/sys/class/leds/red/";

// Attribute file names within an LED class directory.
pub const BRIGHTNESS: &str = "brightness";
pub const MAX_BRIGHTNESS: &str = "max_brightness";
pub const BREATH: &str = "breath";
pub const DELAY_ON: &str = "delay_on";
pub const DELAY_OFF: &str = "delay_off";
