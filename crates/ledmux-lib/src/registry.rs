//! Channel registry — fixed, priority-ordered channel table.
//!
//! Registration order encodes arbitration priority: earlier entries preempt
//! later ones whenever both are lit on the same driver. The table is built
//! once and never grows, shrinks, or reorders.

use crate::channel::{Channel, LightState};
use crate::driver::Driver;

/// One registered channel: identity, cached state, driver binding.
#[derive(Debug)]
pub struct ChannelEntry {
    pub channel: Channel,
    pub state: LightState,
    pub driver: Driver,
}

impl ChannelEntry {
    fn new(channel: Channel, driver: Driver) -> Self {
        ChannelEntry {
            channel,
            state: LightState::default(),
            driver,
        }
    }
}

/// The fixed channel table.
#[derive(Debug)]
pub struct Registry {
    entries: Vec<ChannelEntry>,
}

impl Registry {
    /// Build the table. Attention, Notifications and Battery share the
    /// indicator driver, in that priority order; Backlight drives its own
    /// device.
    pub fn new() -> Self {
        Registry {
            entries: vec![
                ChannelEntry::new(Channel::Attention, Driver::Indicator),
                ChannelEntry::new(Channel::Notifications, Driver::Indicator),
                ChannelEntry::new(Channel::Battery, Driver::Indicator),
                ChannelEntry::new(Channel::Backlight, Driver::Backlight),
            ],
        }
    }

    /// Find the entry for `channel`. Linear scan — the table is four
    /// entries long and static.
    pub fn lookup_mut(&mut self, channel: Channel) -> Option<&mut ChannelEntry> {
        self.entries.iter_mut().find(|e| e.channel == channel)
    }

    /// All entries, registration order.
    pub fn entries(&self) -> &[ChannelEntry] {
        &self.entries
    }

    /// Registered channel identifiers, registration order.
    pub fn channels(&self) -> Vec<Channel> {
        self.entries.iter().map(|e| e.channel).collect()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
