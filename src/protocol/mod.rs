//! The ArmLink wire format.
//!
//! A frame is 17 bytes: the [`HEADER`], six big endian joint targets, the delta, button and extended instruction bytes, and a [`checksum`].

mod packet;

pub use packet::Packet;

use crate::Error;
use num_derive::FromPrimitive;
use num_traits::FromPrimitive;

/// Every frame starts with this byte.
pub const HEADER: u8 = 0xFF;

/// Number of bytes in a serialized [`Packet`]: header, twelve joint bytes, delta, button, extended instruction and checksum.
pub const FRAME_LEN: usize = 17;

/// The checksummed bytes are reduced modulo 255, not 256.
/// Receiving firmware expects exactly this value, so it must stay as is.
pub const CHECKSUM_MODULUS: u8 = 0xFF;

/// Extended instruction code that stops the arm.
pub const EXTENDED_STOP: u8 = 17;
/// Extended instruction code that resets the arm.
pub const EXTENDED_RESET: u8 = 64;
/// Extended instruction code that puts the arm to sleep.
pub const EXTENDED_SLEEP: u8 = 96;

/// Reserved extended instruction codes.
///
/// The extended instruction byte of a [`Packet`] is a plain `u8`, any value is sent as is.
/// This enum only names the codes the arm firmware reserves for one-shot operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive)]
#[repr(u8)]
pub enum ExtendedInstruction {
    /// Stop all motion.
    Stop = EXTENDED_STOP,
    /// Reset the arm controller.
    Reset = EXTENDED_RESET,
    /// Put the arm to sleep.
    Sleep = EXTENDED_SLEEP,
}

impl From<ExtendedInstruction> for u8 {
    fn from(instruction: ExtendedInstruction) -> u8 {
        instruction as u8
    }
}

impl TryFrom<u8> for ExtendedInstruction {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        ExtendedInstruction::from_u8(code).ok_or(Error::UnknownInstruction(code))
    }
}

/// Computes the checksum of the bytes between the header and the checksum itself.
///
/// The bytes are summed with wraparound, reduced by [`CHECKSUM_MODULUS`] and inverted.
pub fn checksum(payload: &[u8]) -> u8 {
    let sum = payload.iter().fold(0u8, |acc, b| acc.wrapping_add(*b));
    !(sum % CHECKSUM_MODULUS)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn checksum_modulus_is_255() {
        // not a typo for 256, the firmware checks against mod 255
        assert_eq!(CHECKSUM_MODULUS, 255);
    }

    #[test]
    fn checksum_of_empty_payload() {
        assert_eq!(checksum(&[]), 0xFF);
    }

    #[test]
    fn checksum_known_values() {
        assert_eq!(checksum(&[0x01, 0x2C, 0x01, 0x00, 0x11]), !0x3Fu8);
        // a sum of exactly 255 reduces to zero
        assert_eq!(checksum(&[0xF0, 0x0F]), 0xFF);
        // the sum wraps in 8 bits before the reduction
        assert_eq!(checksum(&[0xFF, 0x02]), !1u8);
    }

    #[test]
    fn checksum_differs_from_mod_256() {
        let payload = [0x80, 0x7F];
        let sum = 0xFFu8;
        assert_eq!(checksum(&payload), !(sum % 255));
        assert_ne!(checksum(&payload), !sum);
    }

    #[test]
    fn extended_instruction_codes() {
        assert_eq!(u8::from(ExtendedInstruction::Stop), 17);
        assert_eq!(u8::from(ExtendedInstruction::Reset), 64);
        assert_eq!(u8::from(ExtendedInstruction::Sleep), 96);
    }

    #[test]
    fn extended_instruction_try_from() {
        assert_eq!(
            ExtendedInstruction::try_from(96).unwrap(),
            ExtendedInstruction::Sleep
        );
        assert!(matches!(
            ExtendedInstruction::try_from(0),
            Err(Error::UnknownInstruction(0))
        ));
    }
}
