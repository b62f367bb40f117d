//! CLI subcommands — channel listing and state control.

use std::str::FromStr;

use clap::Subcommand;
use serde::Serialize;

mod channels;
mod set;

pub(super) use ledmux_lib::channel::{Channel, LightState};
pub(super) use ledmux_lib::error::Result;
pub(super) use ledmux_lib::mux::LightMux;

#[derive(Subcommand)]
pub enum Command {
    /// List supported channels in priority order
    Channels,

    /// Set a channel's color and optional blink cadence
    Set {
        /// Target channel (attention, notifications, battery, backlight, ...)
        #[arg(value_parser = Channel::from_str)]
        channel: Channel,
        /// Color: name ("red") or hex ("#RRGGBB" / "#AARRGGBB")
        color: String,
        /// Blink on-time in milliseconds
        #[arg(long, requires = "flash_off")]
        flash_on: Option<u32>,
        /// Blink off-time in milliseconds
        #[arg(long, requires = "flash_on")]
        flash_off: Option<u32>,
    },

    /// Turn a channel off
    Off {
        /// Target channel (attention, notifications, battery, backlight, ...)
        #[arg(value_parser = Channel::from_str)]
        channel: Channel,
    },
}

pub fn run(command: Command, json: bool) -> Result<()> {
    match command {
        Command::Channels => channels::cmd_channels(json),
        Command::Set {
            channel,
            color,
            flash_on,
            flash_off,
        } => set::cmd_set(channel, &color, flash_on, flash_off),
        Command::Off { channel } => set::cmd_off(channel),
    }
}

// ── JSON output structs ──

#[derive(Serialize)]
pub(super) struct ChannelsOutput {
    pub count: usize,
    pub channels: Vec<Channel>,
}
