//! Channel arbitration — maps logical channel states onto physical LEDs.
//!
//! Channels sharing a physical LED cannot be displayed simultaneously, so
//! the registry's fixed order doubles as a static priority: the first lit
//! channel on a driver wins, without timestamps or scheduling.

use std::sync::{Mutex, PoisonError};

use crate::channel::{Channel, LightState};
use crate::error::{LedmuxError, Result};
use crate::registry::Registry;
use crate::sysfs::{DeviceFs, Sysfs};

/// The single-instance arbitration context: the channel registry behind one
/// lock, plus the sysfs backend the drivers write through.
///
/// The lock is held for the whole of each operation, hardware writes
/// included, so winner selection and the resulting physical write are atomic
/// with respect to other channel-state changes.
#[derive(Debug)]
pub struct LightMux<S = DeviceFs> {
    registry: Mutex<Registry>,
    fs: S,
}

impl LightMux<DeviceFs> {
    /// Mux over the real device filesystem.
    pub fn new() -> Self {
        Self::with_sysfs(DeviceFs)
    }
}

impl Default for LightMux<DeviceFs> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Sysfs> LightMux<S> {
    /// Mux over an explicit backend (tests use the mock here).
    pub fn with_sysfs(fs: S) -> Self {
        LightMux {
            registry: Mutex::new(Registry::new()),
            fs,
        }
    }

    /// Record `state` for `channel` and reprogram the channel's physical
    /// LED with whichever same-driver channel currently wins arbitration.
    ///
    /// The cache is updated even when another channel outranks this one, so
    /// later arbitration rounds see the most recent request per channel.
    /// Hardware write failures are absorbed (logged by the backend); the
    /// only caller-visible failure is an unregistered channel, which leaves
    /// every cached state and the hardware untouched.
    pub fn set_channel(&self, channel: Channel, state: LightState) -> Result<()> {
        let mut registry = self.lock_registry();

        let driver = match registry.lookup_mut(channel) {
            Some(entry) => {
                entry.state = state;
                entry.driver
            }
            None => {
                log::error!("failed to set light for channel {channel}");
                return Err(LedmuxError::ChannelNotSupported(channel));
            }
        };

        // First lit entry in registration order wins the shared driver.
        // With nothing lit, fall back to the just-submitted state: that
        // turns the hardware off, and trivially covers single-channel
        // drivers like the backlight.
        let winner = registry
            .entries()
            .iter()
            .find(|e| e.driver == driver && e.state.is_lit())
            .map(|e| e.state)
            .unwrap_or(state);

        driver.apply(&self.fs, &winner);
        Ok(())
    }

    /// Registered channels in priority order. No side effects, never fails.
    pub fn channels(&self) -> Vec<Channel> {
        self.lock_registry().channels()
    }

    /// The backend this mux writes through.
    pub fn sysfs(&self) -> &S {
        &self.fs
    }

    fn lock_registry(&self) -> std::sync::MutexGuard<'_, Registry> {
        // Cached states are plain values, valid wherever a panicking
        // thread stopped — recover the guard rather than refuse service.
        self.registry
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paths;
    use crate::sysfs::mock::MockSysfs;

    fn mux_with_leds() -> LightMux<MockSysfs> {
        let fs = MockSysfs::new();
        fs.set_int(
            format!("{}{}", paths::INDICATOR_LED, paths::MAX_BRIGHTNESS),
            255,
        );
        fs.set_int(
            format!("{}{}", paths::BACKLIGHT_LED, paths::MAX_BRIGHTNESS),
            255,
        );
        LightMux::with_sysfs(fs)
    }

    fn indicator_brightness_writes(mux: &LightMux<MockSysfs>) -> Vec<String> {
        mux.fs
            .writes()
            .iter()
            .filter(|(path, _)| {
                path.starts_with(paths::INDICATOR_LED) && path.ends_with(paths::BRIGHTNESS)
            })
            .map(|(_, value)| value.clone())
            .collect()
    }

    #[test]
    fn set_registered_channel_succeeds() {
        let mux = mux_with_leds();
        assert!(
            mux.set_channel(Channel::Battery, LightState::solid(0xFFFF_0000))
                .is_ok()
        );
    }

    #[test]
    fn set_unregistered_channel_fails_without_writes() {
        let mux = mux_with_leds();
        let err = mux
            .set_channel(Channel::Wifi, LightState::solid(0xFFFF_FFFF))
            .unwrap_err();
        assert!(matches!(err, LedmuxError::ChannelNotSupported(Channel::Wifi)));
        assert!(mux.fs.writes().is_empty());
    }

    #[test]
    fn higher_priority_channel_wins() {
        let mux = mux_with_leds();
        // Notifications lit first, then attention — attention outranks it
        mux.set_channel(Channel::Notifications, LightState::solid(0xFF00_00FF))
            .unwrap();
        mux.fs.clear_writes();
        mux.set_channel(Channel::Attention, LightState::solid(0xFFFF_FFFF))
            .unwrap();
        // White attention luma (255), not blue notification luma (28)
        assert_eq!(indicator_brightness_writes(&mux), vec!["255"]);
    }

    #[test]
    fn lower_priority_set_still_displays_winner() {
        let mux = mux_with_leds();
        mux.set_channel(Channel::Attention, LightState::solid(0xFFFF_FFFF))
            .unwrap();
        mux.fs.clear_writes();
        // Setting battery while attention is lit re-applies attention
        mux.set_channel(Channel::Battery, LightState::solid(0xFF00_00FF))
            .unwrap();
        assert_eq!(indicator_brightness_writes(&mux), vec!["255"]);
    }

    #[test]
    fn winner_release_falls_through_to_next_lit() {
        let mux = mux_with_leds();
        mux.set_channel(Channel::Attention, LightState::solid(0xFFFF_FFFF))
            .unwrap();
        mux.set_channel(Channel::Battery, LightState::solid(0xFF00_00FF))
            .unwrap();
        mux.fs.clear_writes();
        // Attention goes dark — battery's blue takes over
        mux.set_channel(Channel::Attention, LightState::off())
            .unwrap();
        assert_eq!(indicator_brightness_writes(&mux), vec!["28"]);
    }

    #[test]
    fn all_dark_turns_hardware_off() {
        let mux = mux_with_leds();
        mux.set_channel(Channel::Notifications, LightState::solid(0xFFFF_FFFF))
            .unwrap();
        mux.fs.clear_writes();
        mux.set_channel(Channel::Notifications, LightState::off())
            .unwrap();
        assert_eq!(indicator_brightness_writes(&mux), vec!["0"]);
    }

    #[test]
    fn backlight_independent_of_indicator_channels() {
        let mux = mux_with_leds();
        mux.set_channel(Channel::Attention, LightState::solid(0xFFFF_0000))
            .unwrap();
        mux.fs.clear_writes();
        mux.set_channel(Channel::Backlight, LightState::solid(0xFFFF_FFFF))
            .unwrap();
        // Only the backlight device is written
        let writes = mux.fs.writes();
        assert!(
            writes
                .iter()
                .all(|(path, _)| path.starts_with(paths::BACKLIGHT_LED))
        );
        assert_eq!(writes.len(), 1);
        assert_eq!(writes[0].1, "255");
    }

    #[test]
    fn channels_lists_in_priority_order() {
        let mux = mux_with_leds();
        assert_eq!(
            mux.channels(),
            vec![
                Channel::Attention,
                Channel::Notifications,
                Channel::Battery,
                Channel::Backlight,
            ]
        );
    }

    #[test]
    fn channels_has_no_side_effects() {
        let mux = mux_with_leds();
        let _ = mux.channels();
        assert!(mux.fs.writes().is_empty());
    }

    #[test]
    fn set_succeeds_with_hardware_absent() {
        // No max_brightness readable anywhere — logical layer still works
        let mux = LightMux::with_sysfs(MockSysfs::new());
        assert!(
            mux.set_channel(Channel::Attention, LightState::solid(0xFFFF_0000))
                .is_ok()
        );
        assert!(mux.fs.writes().is_empty());
    }
}
