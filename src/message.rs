//! Requests an arm server accepts and the responses it sends back.
//!
//! Each variant carries its own payload. Only the `Put*` requests produce motion, see [`Request::packet`].

use crate::posture::{Joint, Posture};
use crate::protocol::{ExtendedInstruction, Packet};

/// A user of the arm.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct User {
    /// Display name of the user.
    pub name: String,
    /// Contact address of the user.
    pub email: String,
}

/// A request sent to the arm server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// Register a new user.
    AddUser(User),
    /// Remove the user holding `token`.
    DeleteUser {
        /// Token handed out when the user was added.
        token: String,
    },
    /// Ask for the current user.
    GetUser,
    /// Ask for the target of one joint.
    GetJoint(Joint),
    /// Ask for the targets of all joints.
    GetPosture,
    /// Move one joint, keeping the others where they are.
    PutJoint(Joint, u16),
    /// Move every joint.
    PutPosture(Posture),
    /// Reset the arm controller.
    PutReset,
}

/// A response sent back by the arm server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// The user was added and can authenticate with `token`.
    UserAdded {
        /// Token to use in later requests.
        token: String,
    },
    /// A user is already registered.
    UserExisted,
    /// The user to be added was rejected.
    InvalidUserInfo,
    /// The user was removed.
    UserDeleted,
    /// No such user exists.
    UserNotFound,
    /// The current user.
    CurrentUser(User),
    /// The target of one joint.
    CurrentJoint(Joint, u16),
    /// The targets of all joints.
    CurrentPosture(Posture),
    /// The requested action was sent to the arm.
    ActionPerformed,
    /// The token was missing, unknown or expired.
    InvalidToken,
    /// The request is not supported.
    InvalidCommand,
    /// Something else failed.
    SomethingWentWrong(String),
}

impl Request {
    /// Returns the packet to send to the arm for this request, starting from the `current` posture.
    ///
    /// [`Request::PutReset`] keeps the arm where it is and overlays [`ExtendedInstruction::Reset`].
    /// Requests that do not move the arm return `None`.
    pub fn packet(&self, current: &Posture) -> Option<Packet> {
        match self {
            Request::PutJoint(joint, value) => {
                let mut posture = *current;
                posture.set(*joint, *value);
                Some(posture.into())
            }
            Request::PutPosture(posture) => Some((*posture).into()),
            Request::PutReset => {
                Some(Packet::from(*current).with_extended(ExtendedInstruction::Reset))
            }
            _ => None,
        }
    }

    /// Answers the read-only joint requests from the `current` posture.
    /// Any other request returns `None`.
    pub fn query(&self, current: &Posture) -> Option<Response> {
        match self {
            Request::GetJoint(joint) => {
                Some(Response::CurrentJoint(*joint, current.get(*joint)))
            }
            Request::GetPosture => Some(Response::CurrentPosture(*current)),
            _ => None,
        }
    }
}

impl Response {
    /// Returns `true` if the response reports a failure.
    pub fn is_error(&self) -> bool {
        matches!(
            self,
            Response::UserExisted
                | Response::InvalidUserInfo
                | Response::UserNotFound
                | Response::InvalidToken
                | Response::InvalidCommand
                | Response::SomethingWentWrong(_)
        )
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::protocol::EXTENDED_RESET;

    fn current() -> Posture {
        Posture {
            base: 512,
            shoulder: 400,
            elbow: 300,
            wrist_angle: 200,
            wrist_rotation: 100,
            gripper: 50,
        }
    }

    #[test]
    fn put_joint_moves_only_that_joint() {
        let packet = Request::PutJoint(Joint::Elbow, 700)
            .packet(&current())
            .unwrap();
        let mut expected = current();
        expected.elbow = 700;
        assert_eq!(packet.posture(), expected);
        assert_eq!(packet.extended(), 0);
    }

    #[test]
    fn put_posture_replaces_everything() {
        let target = Posture::default().configure(|p| {
            p.set(Joint::Gripper, 10);
        });
        let packet = Request::PutPosture(target).packet(&current()).unwrap();
        assert_eq!(packet, Packet::from(target));
    }

    #[test]
    fn put_reset_overlays_reset() {
        let packet = Request::PutReset.packet(&current()).unwrap();
        assert_eq!(packet.posture(), current());
        assert_eq!(packet.extended(), EXTENDED_RESET);
        assert_eq!(packet.instruction(), Some(ExtendedInstruction::Reset));
    }

    #[test]
    fn non_motion_requests_have_no_packet() {
        let requests = [
            Request::AddUser(User {
                name: "ada".into(),
                email: "ada@example.com".into(),
            }),
            Request::DeleteUser {
                token: "abc".into(),
            },
            Request::GetUser,
            Request::GetJoint(Joint::Base),
            Request::GetPosture,
        ];
        for request in requests {
            assert_eq!(request.packet(&current()), None, "{:?}", request);
        }
    }

    #[test]
    fn query_reads_current_posture() {
        assert_eq!(
            Request::GetJoint(Joint::Shoulder).query(&current()),
            Some(Response::CurrentJoint(Joint::Shoulder, 400))
        );
        assert_eq!(
            Request::GetPosture.query(&current()),
            Some(Response::CurrentPosture(current()))
        );
        assert_eq!(Request::PutReset.query(&current()), None);
    }

    #[test]
    fn error_responses() {
        assert!(Response::InvalidToken.is_error());
        assert!(Response::SomethingWentWrong("servo timeout".into()).is_error());
        assert!(!Response::ActionPerformed.is_error());
        assert!(!Response::UserAdded {
            token: "abc".into()
        }
        .is_error());
    }
}
