use std::fmt;

use byteorder::{BigEndian, ByteOrder};
use num_traits::FromPrimitive;

use super::{checksum, ExtendedInstruction, FRAME_LEN, HEADER};
use crate::posture::Posture;

/// Offset of the first joint byte in a frame.
const JOINTS_OFFSET: usize = 1;
const DELTA_OFFSET: usize = 13;
const BUTTON_OFFSET: usize = 14;
const EXTENDED_OFFSET: usize = 15;
const CHECKSUM_OFFSET: usize = 16;

/// A single ArmLink command: six joint targets and three control bytes.
///
/// No validation is done on any field, the caller is responsible for sending values that make sense for the arm.
/// Once built, only the extended instruction can be changed, see [`Packet::with_extended`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Packet {
    base_rotation: u16,
    shoulder_rotation: u16,
    elbow_rotation: u16,
    wrist_angle: u16,
    wrist_rotation: u16,
    gripper: u16,
    delta: u8,
    button: u8,
    extended_instruction: u8,
}

impl Packet {
    /// Creates a new [`Packet`] from the joint targets and control bytes, in wire order.
    ///
    /// ```rust
    /// let packet = armlink::Packet::new(512, 512, 512, 512, 512, 256, 0, 0, 0);
    /// assert_eq!(packet.as_bytes()[1..3], [0x02, 0x00]);
    /// ```
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        base_rotation: u16,
        shoulder_rotation: u16,
        elbow_rotation: u16,
        wrist_angle: u16,
        wrist_rotation: u16,
        gripper: u16,
        delta: u8,
        button: u8,
        extended_instruction: u8,
    ) -> Self {
        Packet {
            base_rotation,
            shoulder_rotation,
            elbow_rotation,
            wrist_angle,
            wrist_rotation,
            gripper,
            delta,
            button,
            extended_instruction,
        }
    }

    /// Returns a copy of the packet with the extended instruction replaced. No other field is touched.
    ///
    /// Used to add a one-shot instruction (such as [`ExtendedInstruction::Stop`]) to a packet that already holds the current positions.
    pub fn with_extended(mut self, instruction: impl Into<u8>) -> Self {
        self.extended_instruction = instruction.into();
        self
    }

    /// Replaces the extended instruction in place.
    pub fn set_extended(&mut self, instruction: impl Into<u8>) {
        self.extended_instruction = instruction.into();
    }

    /// Target of the base rotation servo.
    pub fn base_rotation(&self) -> u16 {
        self.base_rotation
    }
    /// Target of the shoulder servo.
    pub fn shoulder_rotation(&self) -> u16 {
        self.shoulder_rotation
    }
    /// Target of the elbow servo.
    pub fn elbow_rotation(&self) -> u16 {
        self.elbow_rotation
    }
    /// Target of the wrist angle servo.
    pub fn wrist_angle(&self) -> u16 {
        self.wrist_angle
    }
    /// Target of the wrist rotation servo.
    pub fn wrist_rotation(&self) -> u16 {
        self.wrist_rotation
    }
    /// Target of the gripper servo.
    pub fn gripper(&self) -> u16 {
        self.gripper
    }
    /// The delta byte. Its meaning is defined by the arm firmware.
    pub fn delta(&self) -> u8 {
        self.delta
    }
    /// The button byte. Its meaning is defined by the arm firmware.
    pub fn button(&self) -> u8 {
        self.button
    }
    /// The raw extended instruction byte.
    pub fn extended(&self) -> u8 {
        self.extended_instruction
    }

    /// Returns the extended instruction if it is one of the reserved codes.
    pub fn instruction(&self) -> Option<ExtendedInstruction> {
        ExtendedInstruction::from_u8(self.extended_instruction)
    }

    /// The six joint targets of the packet.
    pub fn posture(&self) -> Posture {
        Posture {
            base: self.base_rotation,
            shoulder: self.shoulder_rotation,
            elbow: self.elbow_rotation,
            wrist_angle: self.wrist_angle,
            wrist_rotation: self.wrist_rotation,
            gripper: self.gripper,
        }
    }

    fn joints(&self) -> [u16; 6] {
        [
            self.base_rotation,
            self.shoulder_rotation,
            self.elbow_rotation,
            self.wrist_angle,
            self.wrist_rotation,
            self.gripper,
        ]
    }

    /// Serializes the packet into the frame sent to the arm.
    ///
    /// Layout: `0xFF`, each joint as a big endian `u16`, delta, button, extended instruction, then the checksum of everything after the header.
    pub fn as_bytes(&self) -> [u8; FRAME_LEN] {
        let mut buf = [0u8; FRAME_LEN];
        buf[0] = HEADER;
        for (i, joint) in self.joints().into_iter().enumerate() {
            let offset = JOINTS_OFFSET + i * 2;
            BigEndian::write_u16(&mut buf[offset..offset + 2], joint);
        }
        buf[DELTA_OFFSET] = self.delta;
        buf[BUTTON_OFFSET] = self.button;
        buf[EXTENDED_OFFSET] = self.extended_instruction;
        buf[CHECKSUM_OFFSET] = checksum(&buf[JOINTS_OFFSET..CHECKSUM_OFFSET]);
        buf
    }
}

impl From<Packet> for [u8; FRAME_LEN] {
    fn from(packet: Packet) -> Self {
        packet.as_bytes()
    }
}

impl fmt::Display for Packet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Base: {}, Shoulder: {}, Elbow: {}, WristAngle: {}, WristRotation: {}, Gripper: {}, Delta: {}, Button: {}, Extended: {}",
            self.base_rotation,
            self.shoulder_rotation,
            self.elbow_rotation,
            self.wrist_angle,
            self.wrist_rotation,
            self.gripper,
            self.delta,
            self.button,
            self.extended_instruction,
        )
    }
}
