//! Unified error type for the ledmux-lib crate.
//!
//! Hardware-layer failures are never surfaced here — unreachable sysfs
//! attributes degrade to a logged no-op inside the backend. The only
//! arbitration failure a caller can see is a channel with no registry entry.

use std::fmt;

use crate::channel::Channel;

/// Unified error type for ledmux-lib operations.
#[derive(Debug)]
pub enum LedmuxError {
    /// The requested channel has no registered entry.
    ChannelNotSupported(Channel),
    /// Color string parsing error.
    Color(String),
}

impl fmt::Display for LedmuxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LedmuxError::ChannelNotSupported(channel) => {
                write!(f, "Channel not supported: {channel}")
            }
            LedmuxError::Color(e) => write!(f, "Color error: {e}"),
        }
    }
}

impl std::error::Error for LedmuxError {}

/// Crate-level Result alias using [`LedmuxError`].
pub type Result<T> = std::result::Result<T, LedmuxError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_channel_not_supported() {
        let e = LedmuxError::ChannelNotSupported(Channel::Wifi);
        assert_eq!(e.to_string(), "Channel not supported: wifi");
    }

    #[test]
    fn display_color_error() {
        let e = LedmuxError::Color("bad hex".into());
        assert_eq!(e.to_string(), "Color error: bad hex");
    }

    #[test]
    fn source_is_none() {
        let e = LedmuxError::ChannelNotSupported(Channel::Keyboard);
        assert!(std::error::Error::source(&e).is_none());
    }

    #[test]
    fn question_mark_propagation() {
        fn inner() -> Result<()> {
            Err(LedmuxError::Color("nope".into()))
        }
        fn outer() -> Result<()> {
            inner()?;
            Ok(())
        }
        let err = outer().unwrap_err();
        assert!(matches!(err, LedmuxError::Color(_)));
    }
}
