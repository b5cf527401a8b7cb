//! Sweeps the base of an arm back and forth.
//!
//! This example opens the serial port given as the first argument (default `/dev/ttyUSB0`),
//! moves every joint to the centre of its range, then swings the base between two
//! positions, printing each packet as it is sent. After ten swings the arm is stopped
//! and put to sleep.
mod _logging;

use armlink::{ArmLink, ExtendedInstruction, Joint, Posture};

fn main() -> Result<(), armlink::Error> {
    _logging::init("sweep", 1);
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "/dev/ttyUSB0".to_string());
    let mut link = ArmLink::serial2(&path, armlink::DEFAULT_BAUD_RATE)?;

    let centre = Posture {
        base: 512,
        shoulder: 512,
        elbow: 512,
        wrist_angle: 512,
        wrist_rotation: 512,
        gripper: 256,
    };
    link.send(centre)?;

    for i in 0..10 {
        let base = if i % 2 == 0 { 300 } else { 724 };
        let posture = centre.configure(|p| {
            p.set(Joint::Base, base);
        });
        link.send(posture)?;
        log::info!("{}", link.current());

        // The firmware interpolates towards the target, give it time to get there.
        std::thread::sleep(std::time::Duration::from_millis(1500));
    }

    link.send_extended(ExtendedInstruction::Stop)?;
    link.send_extended(ExtendedInstruction::Sleep)?;
    Ok(())
}
