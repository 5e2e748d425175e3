//! Host line protocol.
//!
//! The host framework drives the plugin over a line-oriented channel
//! (stdin when run as a CLI). One command per line, whitespace-trimmed,
//! case-insensitive:
//!
//! ```text
//! sleep | wake | od-start | od-end | disconnect
//! start | stop
//! set-duty <percent>
//! status
//! ```
//!
//! Unknown input is reported to the caller and otherwise ignored — a
//! garbled line must never take the pump down.

use crate::app::commands::PumpCommand;
use crate::events::LifecycleEvent;

/// A parsed line of host input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostInput {
    /// A lifecycle event to enqueue for dispatch.
    Lifecycle(LifecycleEvent),
    /// A direct command for the controller.
    Command(PumpCommand),
    /// Request to print the published settings.
    Status,
}

/// Parse one line of host input. Returns `None` for blank lines and
/// `Err` with the offending token for anything unrecognized.
pub fn parse_line(line: &str) -> Option<Result<HostInput, &str>> {
    let mut parts = line.split_whitespace();
    let keyword = parts.next()?;

    let input = match keyword.to_ascii_lowercase().as_str() {
        "sleep" => HostInput::Lifecycle(LifecycleEvent::Sleep),
        "wake" => HostInput::Lifecycle(LifecycleEvent::Wake),
        "od-start" => HostInput::Lifecycle(LifecycleEvent::OdReadingStarting),
        "od-end" => HostInput::Lifecycle(LifecycleEvent::OdReadingFinished),
        "disconnect" => HostInput::Lifecycle(LifecycleEvent::Disconnect),
        "start" => HostInput::Command(PumpCommand::StartPumping),
        "stop" => HostInput::Command(PumpCommand::StopPumping),
        "set-duty" => match parts.next().and_then(|v| v.parse::<f64>().ok()) {
            Some(value) => HostInput::Command(PumpCommand::SetDutyCycle(value)),
            None => return Some(Err(keyword)),
        },
        "status" => HostInput::Status,
        _ => return Some(Err(keyword)),
    };

    // Trailing tokens are tolerated; the host appends sequence numbers.
    Some(Ok(input))
}
