//! `ping`: reachability probes through the host's network.

use std::future::Future;
use std::time::Duration;

use crate::config::ping::{COUNT, INTERVAL_MS};
use crate::console;
use crate::error::{ProbeError, ShellError};
use crate::output::Renderer;

use super::CommandResult;

/// Network access used by `ping`.
///
/// The browser implementation issues an ordinary web request, so an
/// unreachable host and a blocked request look the same.
pub trait Network {
    /// Send one probe to `address`, returning the round-trip time.
    fn probe(&self, address: &str) -> impl Future<Output = Result<Duration, ProbeError>>;

    /// Wait before the next probe.
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()>;
}

/// Probe `address` up to [`COUNT`] times, one at a time.
///
/// Stops at the first failed probe.
pub(super) async fn ping<R: Renderer, N: Network>(
    args: &[String],
    out: &mut R,
    net: &N,
) -> Result<CommandResult, ShellError> {
    let address = args.first().ok_or(ShellError::MissingDestination)?;
    out.append_line(&format!("PING {} 56 data bytes", address));

    for seq in 1..=COUNT {
        match net.probe(address).await {
            Ok(elapsed) => out.append_line(&format!(
                "64 bytes from {}: icmp_seq={} time={:.3} ms",
                address,
                seq,
                elapsed.as_secs_f64() * 1000.0
            )),
            Err(e) => {
                console::warn(&format!("ping {}: {}", address, e));
                return Err(ShellError::Unreachable(address.clone()));
            }
        }

        if seq < COUNT {
            net.sleep(Duration::from_millis(INTERVAL_MS.into())).await;
        }
    }

    Ok(CommandResult::success())
}
