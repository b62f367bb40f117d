//! `channels` subcommand — list supported channels in priority order.

use super::{ChannelsOutput, LightMux, Result};

pub(super) fn cmd_channels(json: bool) -> Result<()> {
    let mux = LightMux::new();
    let channels = mux.channels();

    if json {
        let output = ChannelsOutput {
            count: channels.len(),
            channels,
        };
        println!("{}", serde_json::to_string_pretty(&output).unwrap());
        return Ok(());
    }

    println!("Supported channels (highest priority first):");
    println!();
    for (i, channel) in channels.iter().enumerate() {
        println!("  [{}] {channel}", i + 1);
    }

    Ok(())
}
