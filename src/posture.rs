//! This module contains [`Posture`], the six joint targets of an arm taken together, and [`Joint`] to address them one at a time.
//! A [`Posture`] impls Into<[`Packet`]> and can be passed straight to [`crate::ArmLink::send`].

use std::fmt;

use itertools::Itertools;

use crate::protocol::Packet;

/// The joints of the arm, in the order they appear in a frame.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Joint {
    Base,
    Shoulder,
    Elbow,
    WristAngle,
    WristRotation,
    Gripper,
}

impl Joint {
    /// Every joint, in wire order.
    pub const ALL: [Joint; 6] = [
        Joint::Base,
        Joint::Shoulder,
        Joint::Elbow,
        Joint::WristAngle,
        Joint::WristRotation,
        Joint::Gripper,
    ];

    /// The name used when printing packets and postures.
    pub fn name(&self) -> &'static str {
        match self {
            Joint::Base => "Base",
            Joint::Shoulder => "Shoulder",
            Joint::Elbow => "Elbow",
            Joint::WristAngle => "WristAngle",
            Joint::WristRotation => "WristRotation",
            Joint::Gripper => "Gripper",
        }
    }
}

impl fmt::Display for Joint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Target positions for all six joints.
///
/// Converting a [`Posture`] into a [`Packet`] leaves delta, button and the extended instruction at zero.
/// Use [`Packet::new`] when those are needed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Posture {
    /// Target of the base rotation servo.
    pub base: u16,
    /// Target of the shoulder servo.
    pub shoulder: u16,
    /// Target of the elbow servo.
    pub elbow: u16,
    /// Target of the wrist angle servo.
    pub wrist_angle: u16,
    /// Target of the wrist rotation servo.
    pub wrist_rotation: u16,
    /// Target of the gripper servo.
    pub gripper: u16,
}

impl Posture {
    /// Returns the target of a single joint.
    pub fn get(&self, joint: Joint) -> u16 {
        match joint {
            Joint::Base => self.base,
            Joint::Shoulder => self.shoulder,
            Joint::Elbow => self.elbow,
            Joint::WristAngle => self.wrist_angle,
            Joint::WristRotation => self.wrist_rotation,
            Joint::Gripper => self.gripper,
        }
    }

    /// Sets the target of a single joint.
    pub fn set(&mut self, joint: Joint, value: u16) -> &mut Self {
        let slot = match joint {
            Joint::Base => &mut self.base,
            Joint::Shoulder => &mut self.shoulder,
            Joint::Elbow => &mut self.elbow,
            Joint::WristAngle => &mut self.wrist_angle,
            Joint::WristRotation => &mut self.wrist_rotation,
            Joint::Gripper => &mut self.gripper,
        };
        *slot = value;
        self
    }

    /// Use a closure to configure the posture.
    ///
    /// ```rust
    /// use armlink::{Joint, Posture};
    /// let posture = Posture::default().configure(|p| {
    ///     p.set(Joint::Base, 512).set(Joint::Gripper, 256);
    /// });
    /// assert_eq!(posture.get(Joint::Base), 512);
    /// ```
    pub fn configure<F>(mut self, f: F) -> Self
    where
        F: FnOnce(&mut Self),
    {
        f(&mut self);
        self
    }
}

impl From<Posture> for Packet {
    fn from(posture: Posture) -> Packet {
        Packet::new(
            posture.base,
            posture.shoulder,
            posture.elbow,
            posture.wrist_angle,
            posture.wrist_rotation,
            posture.gripper,
            0,
            0,
            0,
        )
    }
}

impl fmt::Display for Posture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joints = Joint::ALL
            .iter()
            .map(|joint| format!("{}: {}", joint, self.get(*joint)))
            .join(", ");
        f.write_str(&joints)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_get_each_joint() {
        let mut posture = Posture::default();
        for (i, joint) in Joint::ALL.into_iter().enumerate() {
            posture.set(joint, 100 + i as u16);
        }
        for (i, joint) in Joint::ALL.into_iter().enumerate() {
            assert_eq!(posture.get(joint), 100 + i as u16);
        }
    }

    #[test]
    fn into_packet_keeps_wire_order() {
        let posture = Posture {
            base: 0x0102,
            shoulder: 0x0304,
            elbow: 0x0506,
            wrist_angle: 0x0708,
            wrist_rotation: 0x090A,
            gripper: 0x0B0C,
        };
        let packet = Packet::from(posture);
        assert_eq!(packet.as_bytes()[1..13], [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12]);
        assert_eq!(packet.delta(), 0);
        assert_eq!(packet.button(), 0);
        assert_eq!(packet.extended(), 0);
        assert_eq!(packet.posture(), posture);
    }

    #[test]
    fn display_posture() {
        let posture = Posture::default().configure(|p| {
            p.set(Joint::Elbow, 300);
        });
        assert_eq!(
            posture.to_string(),
            "Base: 0, Shoulder: 0, Elbow: 300, WristAngle: 0, WristRotation: 0, Gripper: 0"
        );
    }
}
