//! Header flags for the sink primitive
//!
//! Flags control the text a [`LineWriter`](crate::LineWriter) prepends to every
//! line it writes. With `DATE | TIME` the header looks like:
//!
//! ```text
//! 2009/01/23 01:23:23 message
//! ```
//!
//! while `DATE | TIME | MICROSECONDS | SHORT_FILE` produces:
//!
//! ```text
//! 2009/01/23 01:23:23.123123 logger.rs:23: message
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SinkFlags(u32);

impl SinkFlags {
    /// No header at all
    pub const NONE: SinkFlags = SinkFlags(0);
    /// Local date: `2009/01/23`
    pub const DATE: SinkFlags = SinkFlags(1 << 0);
    /// Local time: `01:23:23`
    pub const TIME: SinkFlags = SinkFlags(1 << 1);
    /// Microsecond resolution: `01:23:23.123123`, implies `TIME`
    pub const MICROSECONDS: SinkFlags = SinkFlags(1 << 2);
    /// Full file path and line number of the call site
    pub const LONG_FILE: SinkFlags = SinkFlags(1 << 3);
    /// Final path component and line number, overrides `LONG_FILE`
    pub const SHORT_FILE: SinkFlags = SinkFlags(1 << 4);
    /// Use UTC rather than the local time zone
    pub const UTC: SinkFlags = SinkFlags(1 << 5);
    /// Move the prefix from the start of the line to just before the message
    pub const MSG_PREFIX: SinkFlags = SinkFlags(1 << 6);
    /// Conventional date + time header
    pub const STD: SinkFlags = SinkFlags(Self::DATE.0 | Self::TIME.0);
    /// Every defined flag
    pub const ALL: SinkFlags = SinkFlags((Self::MSG_PREFIX.0 << 1) - 1);

    #[must_use]
    pub const fn from_bits(bits: u32) -> Self {
        SinkFlags(bits)
    }

    #[must_use]
    pub const fn bits(&self) -> u32 {
        self.0
    }

    #[must_use]
    pub const fn contains(&self, other: SinkFlags) -> bool {
        self.0 & other.0 == other.0
    }

    #[must_use]
    pub const fn intersects(&self, other: SinkFlags) -> bool {
        self.0 & other.0 != 0
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Bits that do not name any flag
    #[must_use]
    pub const fn unknown_bits(&self) -> u32 {
        self.0 & !Self::ALL.0
    }
}

impl BitOr for SinkFlags {
    type Output = SinkFlags;

    fn bitor(self, rhs: SinkFlags) -> SinkFlags {
        SinkFlags(self.0 | rhs.0)
    }
}

impl BitOrAssign for SinkFlags {
    fn bitor_assign(&mut self, rhs: SinkFlags) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for SinkFlags {
    type Output = SinkFlags;

    fn bitand(self, rhs: SinkFlags) -> SinkFlags {
        SinkFlags(self.0 & rhs.0)
    }
}

impl fmt::Display for SinkFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMES: [(SinkFlags, &str); 7] = [
            (SinkFlags::DATE, "DATE"),
            (SinkFlags::TIME, "TIME"),
            (SinkFlags::MICROSECONDS, "MICROSECONDS"),
            (SinkFlags::LONG_FILE, "LONG_FILE"),
            (SinkFlags::SHORT_FILE, "SHORT_FILE"),
            (SinkFlags::UTC, "UTC"),
            (SinkFlags::MSG_PREFIX, "MSG_PREFIX"),
        ];

        if self.is_empty() {
            return f.write_str("NONE");
        }

        let mut first = true;
        for (flag, name) in NAMES {
            if self.contains(flag) {
                if !first {
                    f.write_str(" | ")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_std_is_date_and_time() {
        assert!(SinkFlags::STD.contains(SinkFlags::DATE));
        assert!(SinkFlags::STD.contains(SinkFlags::TIME));
        assert!(!SinkFlags::STD.intersects(SinkFlags::UTC));
        assert_eq!(SinkFlags::STD.bits(), 3);
    }

    #[test]
    fn test_bit_ops() {
        let mut flags = SinkFlags::NONE;
        assert!(flags.is_empty());
        flags |= SinkFlags::SHORT_FILE;
        let flags = flags | SinkFlags::UTC;
        assert!(flags.contains(SinkFlags::SHORT_FILE | SinkFlags::UTC));
        assert_eq!(flags & SinkFlags::UTC, SinkFlags::UTC);
    }

    #[test]
    fn test_unknown_bits() {
        assert_eq!(SinkFlags::ALL.bits(), 127);
        assert_eq!(SinkFlags::ALL.unknown_bits(), 0);
        assert_eq!(SinkFlags::from_bits(0x81).unknown_bits(), 0x80);
    }

    #[test]
    fn test_display() {
        assert_eq!(SinkFlags::NONE.to_string(), "NONE");
        assert_eq!(SinkFlags::STD.to_string(), "DATE | TIME");
    }

    #[test]
    fn test_serde_as_bits() {
        let json = serde_json::to_string(&SinkFlags::STD).expect("serialize");
        assert_eq!(json, "3");
        let flags: SinkFlags = serde_json::from_str("16").expect("deserialize");
        assert_eq!(flags, SinkFlags::SHORT_FILE);
    }
}
