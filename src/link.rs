use std::io::Write;

use crate::protocol::Packet;
use crate::Error;

/// Baud rate used by ArmLink firmware out of the box.
pub const DEFAULT_BAUD_RATE: u32 = 38400;

/// The main struct for sending packets to an arm.
///
/// The link remembers the last motion packet it sent. Extended instructions are one-shot:
/// [`ArmLink::send_extended`] resends the current positions with the instruction overlaid, without changing what is remembered.
pub struct ArmLink<T>
where
    T: Write,
{
    transport: T,
    current: Packet,
}

#[cfg(feature = "serial2")]
impl ArmLink<serial2::SerialPort> {
    /// Opens a serial port and creates a new [`ArmLink`] over it.
    ///
    /// ```rust,no_run
    /// # fn main() -> std::io::Result<()> {
    /// let _link = armlink::ArmLink::serial2("/dev/ttyUSB0", armlink::DEFAULT_BAUD_RATE)?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn serial2(
        path: impl AsRef<std::path::Path>,
        serial_settings: impl serial2::IntoSettings,
    ) -> Result<Self, std::io::Error> {
        Ok(Self::new(serial2::SerialPort::open(path, serial_settings)?))
    }
}

impl<T> ArmLink<T>
where
    T: Write,
{
    /// Create a new [`ArmLink`] writing to `transport`.
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            current: Packet::default(),
        }
    }

    /// Send a packet to the arm and remember it as the current motion packet.
    pub fn send<P: Into<Packet>>(&mut self, packet: P) -> Result<(), Error> {
        let packet = packet.into();
        self.transfer(&packet)?;
        self.current = packet.with_extended(0u8);
        Ok(())
    }

    /// Send the current motion packet with `instruction` overlaid.
    pub fn send_extended(&mut self, instruction: impl Into<u8>) -> Result<(), Error> {
        let packet = self.current.with_extended(instruction);
        self.transfer(&packet)
    }

    /// The last motion packet sent, with its extended instruction cleared.
    pub fn current(&self) -> &Packet {
        &self.current
    }

    /// A reference to the underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Consumes the link, returning the underlying transport.
    pub fn into_inner(self) -> T {
        self.transport
    }

    fn transfer(&mut self, packet: &Packet) -> Result<(), Error> {
        if let Some(instruction) = packet.instruction() {
            log::debug!("sending {:?} instruction", instruction);
        }
        log::debug!("{}", packet);
        let bytes = packet.as_bytes();
        log::trace!("tx {}", hex::encode(bytes));
        self.transport.write_all(&bytes)?;
        self.transport.flush()?;
        Ok(())
    }
}
