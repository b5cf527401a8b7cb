//! A rust implementation of the ArmLink protocol. Used to send joint targets and extended instructions to robotic arm controllers over a serial link.
//!
//! ```rust
//! use armlink::{ExtendedInstruction, Joint, Posture};
//!
//! let posture = Posture::default().configure(|p| {
//!     p.set(Joint::Base, 300);
//! });
//! let mut link = armlink::ArmLink::new(Vec::new());
//! link.send(posture)?;
//! link.send_extended(ExtendedInstruction::Stop)?;
//! assert_eq!(link.into_inner().len(), 2 * armlink::protocol::FRAME_LEN);
//! # Ok::<(), armlink::Error>(())
//! ```

#![deny(
    bad_style,
    dead_code,
    improper_ctypes,
    non_shorthand_field_patterns,
    no_mangle_generic_items,
    overflowing_literals,
    path_statements,
    patterns_in_fns_without_body,
    unconditional_recursion,
    unused,
    unused_allocation,
    unused_comparisons,
    unused_parens,
    while_true
)]
#![deny(
// missing_debug_implementations,
missing_docs,
trivial_casts,
trivial_numeric_casts,
unused_extern_crates,
unused_import_braces,
unused_qualifications,
// unused_results
)]
#![warn(clippy::unwrap_used)]

mod error;
mod link;
pub mod message;
pub mod posture;
pub mod protocol;

pub use error::*;
pub use link::{ArmLink, DEFAULT_BAUD_RATE};
pub use posture::{Joint, Posture};
pub use protocol::{ExtendedInstruction, Packet};
#[cfg(feature = "serial2")]
pub use serial2;
