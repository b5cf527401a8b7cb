use thiserror::Error;

/// Errors that can occur when encoding packets or writing them to an arm.
#[derive(Error, Debug)]
pub enum Error {
    /// IO errors occur when writing or flushing frames to the transport.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// Returned when a byte is converted into an [`crate::ExtendedInstruction`] but is not one of the reserved codes.
    /// Packets still carry such bytes unchanged, this only applies to the typed conversion.
    #[error("unknown extended instruction: {0}")]
    UnknownInstruction(u8),
}
