//! Logical light channels and their requested visual state.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Logical channel identifiers accepted by the interface.
///
/// This is the full identifier set; only a subset has a registry entry
/// (see [`crate::registry`]). Submitting an unregistered identifier fails
/// with [`crate::LedmuxError::ChannelNotSupported`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Attention,
    Notifications,
    Battery,
    Backlight,
    Keyboard,
    Buttons,
    Bluetooth,
    Wifi,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Channel::Attention => "attention",
            Channel::Notifications => "notifications",
            Channel::Battery => "battery",
            Channel::Backlight => "backlight",
            Channel::Keyboard => "keyboard",
            Channel::Buttons => "buttons",
            Channel::Bluetooth => "bluetooth",
            Channel::Wifi => "wifi",
        };
        f.write_str(name)
    }
}

impl FromStr for Channel {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "attention" => Ok(Channel::Attention),
            "notifications" => Ok(Channel::Notifications),
            "battery" => Ok(Channel::Battery),
            "backlight" => Ok(Channel::Backlight),
            "keyboard" => Ok(Channel::Keyboard),
            "buttons" => Ok(Channel::Buttons),
            "bluetooth" => Ok(Channel::Bluetooth),
            "wifi" => Ok(Channel::Wifi),
            other => Err(format!("unknown channel: {other}")),
        }
    }
}

/// Blink mode of a [`LightState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlashMode {
    /// Steady light at the state's brightness.
    #[default]
    None,
    /// Hardware blink using `flash_on_ms` / `flash_off_ms`.
    Timed,
}

/// Requested visual state for one channel.
///
/// `color` is 32-bit ARGB with alpha in the top byte. The flash durations
/// are meaningful only when `flash == FlashMode::Timed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LightState {
    pub color: u32,
    pub flash: FlashMode,
    pub flash_on_ms: u32,
    pub flash_off_ms: u32,
}

impl Default for LightState {
    /// Opaque black, no flash — the hardware-off state every channel
    /// starts in.
    fn default() -> Self {
        LightState::solid(0xFF00_0000)
    }
}

impl LightState {
    /// Steady color, no flash.
    pub fn solid(color: u32) -> Self {
        LightState {
            color,
            flash: FlashMode::None,
            flash_on_ms: 0,
            flash_off_ms: 0,
        }
    }

    /// Blinking color with the given on/off cadence in milliseconds.
    pub fn timed(color: u32, flash_on_ms: u32, flash_off_ms: u32) -> Self {
        LightState {
            color,
            flash: FlashMode::Timed,
            flash_on_ms,
            flash_off_ms,
        }
    }

    /// Opaque black — turns the channel off.
    pub fn off() -> Self {
        LightState::default()
    }

    /// Whether any RGB component is non-zero. Alpha is ignored: a fully
    /// transparent red still counts as lit for arbitration purposes.
    pub fn is_lit(&self) -> bool {
        self.color & 0x00FF_FFFF != 0
    }
}
