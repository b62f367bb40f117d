//! `set` / `off` subcommands — submit a channel state.

use ledmux_lib::channel::FlashMode;
use ledmux_lib::color;

use super::{Channel, LightMux, LightState, Result};

pub(super) fn cmd_set(
    channel: Channel,
    color: &str,
    flash_on: Option<u32>,
    flash_off: Option<u32>,
) -> Result<()> {
    let argb = color::parse_color(color)?;
    let state = match (flash_on, flash_off) {
        (Some(on_ms), Some(off_ms)) => LightState::timed(argb, on_ms, off_ms),
        _ => LightState::solid(argb),
    };

    LightMux::new().set_channel(channel, state)?;

    match state.flash {
        FlashMode::None => println!("{channel} -> {}", color::format_color(argb)),
        FlashMode::Timed => println!(
            "{channel} -> {} (blink {}ms on / {}ms off)",
            color::format_color(argb),
            state.flash_on_ms,
            state.flash_off_ms
        ),
    }
    Ok(())
}

pub(super) fn cmd_off(channel: Channel) -> Result<()> {
    LightMux::new().set_channel(channel, LightState::off())?;
    println!("{channel} -> off");
    Ok(())
}
