//! Centralized limits for enumeration domains and generated tables.
//!
//! Values are carried as `i128`, which holds every value of a signed or
//! unsigned domain up to 64 bits wide. Wider domains are rejected when the
//! domain is constructed.

/// Narrowest supported integer domain.
pub const MIN_BIT_WIDTH: u32 = 1;

/// Widest supported integer domain.
///
/// `u64::MAX` and `i64::MIN` both fit in the `i128` carrier, and the range
/// `max - min + 1` of a full 64-bit domain (2^64) still fits without overflow.
pub const MAX_BIT_WIDTH: u32 = 64;

/// Bit width assumed when a collector does not report one.
pub const DEFAULT_BIT_WIDTH: u32 = 64;

/// Offset widths a front end can choose for direct-index boundary arrays,
/// narrowest first.
pub const OFFSET_WIDTHS: [u32; 4] = [8, 16, 32, 64];
