// Consensus-critical. This encoding is carried in block headers; any change
// forks the network.
//! Compact difficulty target encoding.
//!
//! A 256-bit target is packed into 32 bits as `bits = (exponent << 24) | mantissa`:
//! the exponent is the number of significant bytes of the target, the
//! mantissa its top three. The target is interpreted as:
//!
//! - exponent = (bits >> 24) as u8
//! - mantissa = bits & 0x007fffff (magnitude; bit 0x0080_0000 is a sign flag)
//!
//! Then: target = mantissa * 2^(8*(exponent-3))
//!
//! The sign flag and silent overflow are wire-format legacy. [`decode_compact`]
//! surfaces both as explicit flags so callers are forced to handle them;
//! [`encode_compact`] never produces either.

use num_bigint::BigUint;
use num_traits::Zero;

/// Mask selecting the mantissa magnitude (sign bit excluded).
const MANTISSA_MASK: u32 = 0x007f_ffff;

/// Sign flag inside the 3-byte mantissa.
const SIGN_BIT: u32 = 0x0080_0000;

/// Result of decoding compact `bits`, with the wire format's out-of-band
/// conditions made explicit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedTarget {
    /// Raw target magnitude. Still populated when `negative` or `overflow`
    /// is set, for callers that predate the flags, but meaningless then.
    pub target: BigUint,
    /// The mantissa sign flag (bit 0x0080_0000) was set.
    pub negative: bool,
    /// Nonzero mantissa bits would shift past 256 bits.
    pub overflow: bool,
}

/// Decode compact `bits` into a target magnitude plus sign/overflow flags.
pub fn decode_compact(bits: u32) -> DecodedTarget {
    let exponent = bits >> 24;
    let mantissa = bits & MANTISSA_MASK;

    let target = if exponent <= 3 {
        // Small exponents discard low-order mantissa bytes.
        BigUint::from(mantissa >> (8 * (3 - exponent)))
    } else {
        BigUint::from(mantissa) << (8 * (exponent as usize - 3))
    };

    let negative = bits & SIGN_BIT != 0;
    let overflow = mantissa != 0
        && (exponent > 34
            || (mantissa > 0xff && exponent > 33)
            || (mantissa > 0xffff && exponent > 32));

    DecodedTarget {
        target,
        negative,
        overflow,
    }
}

/// Encode a target magnitude into its minimal compact form.
///
/// Zero encodes as `0`. The sign flag is never emitted: when the leading
/// mantissa byte would collide with it, the mantissa is shifted down one
/// byte and the exponent bumped instead.
pub fn encode_compact(target: &BigUint) -> u32 {
    if target.is_zero() {
        return 0;
    }

    // Big-endian bytes without leading zeros; exponent is the byte count.
    let bytes = target.to_bytes_be();
    let mut exponent = bytes.len() as u32;

    let mut mantissa: u32 = 0;
    for &b in bytes.iter().take(3) {
        mantissa = (mantissa << 8) | b as u32;
    }
    if bytes.len() < 3 {
        // Fewer than three significant bytes: left-align into the window.
        mantissa <<= 8 * (3 - bytes.len() as u32);
    }

    if mantissa & SIGN_BIT != 0 {
        mantissa >>= 8;
        exponent += 1;
    }

    (exponent << 24) | mantissa
}
