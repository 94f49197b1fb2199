//! Handle type for drawing entities
//!
//! Handles are unique 64-bit identifiers for all entities in a drawing.
//! In DXF text they are written as upper case hexadecimal strings.

use crate::error::{DxfError, Result};
use nom::character::complete::hex_digit1;
use nom::combinator::{all_consuming, map_res};
use nom::IResult;
use std::fmt;

/// A unique identifier for drawing entities
///
/// Handle 0 is reserved and invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Handle(u64);

impl Handle {
    /// The null/invalid handle (0)
    pub const NULL: Handle = Handle(0);

    /// Create a new handle from a u64 value
    #[inline]
    pub const fn new(value: u64) -> Self {
        Handle(value)
    }

    /// Get the raw u64 value
    #[inline]
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// Check if this is a null/invalid handle
    #[inline]
    pub const fn is_null(&self) -> bool {
        self.0 == 0
    }

    /// Check if this is a valid handle
    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.0 != 0
    }

    /// Parse a hexadecimal handle string such as `"1F"`
    pub fn from_hex(s: &str) -> Result<Self> {
        match all_consuming(hex_value)(s.trim()) {
            Ok((_, value)) => Ok(Handle(value)),
            Err(_) => Err(DxfError::InvalidHandle(s.to_string())),
        }
    }

    /// Upper case hexadecimal representation without prefix
    pub fn to_hex(&self) -> String {
        format!("{:X}", self.0)
    }
}

fn hex_value(input: &str) -> IResult<&str, u64> {
    map_res(hex_digit1, |digits: &str| u64::from_str_radix(digits, 16))(input)
}

impl Default for Handle {
    fn default() -> Self {
        Handle::NULL
    }
}

impl From<u64> for Handle {
    fn from(value: u64) -> Self {
        Handle(value)
    }
}

impl From<Handle> for u64 {
    fn from(handle: Handle) -> Self {
        handle.0
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#X}", self.0)
    }
}

impl fmt::UpperHex for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0, f)
    }
}

/// Sequential handle source, the `$HANDSEED` of a drawing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandleGenerator {
    next: u64,
}

impl HandleGenerator {
    /// Start at handle 1
    pub fn new() -> Self {
        HandleGenerator { next: 1 }
    }

    /// Start at a given seed; a zero seed starts at 1
    pub fn with_seed(seed: u64) -> Self {
        HandleGenerator { next: seed.max(1) }
    }

    /// Start at a hexadecimal seed as stored in `$HANDSEED`
    pub fn from_hex_seed(seed: &str) -> Result<Self> {
        Ok(Self::with_seed(Handle::from_hex(seed)?.value()))
    }

    /// Return the current handle and advance
    pub fn next(&mut self) -> Handle {
        let handle = Handle(self.next);
        self.next += 1;
        handle
    }

    /// Peek at the handle the next call to [`HandleGenerator::next`] returns
    pub fn peek(&self) -> Handle {
        Handle(self.next)
    }

    /// Restart the sequence
    pub fn reset(&mut self, seed: u64) {
        self.next = seed.max(1);
    }
}

impl Default for HandleGenerator {
    fn default() -> Self {
        Self::new()
    }
}
