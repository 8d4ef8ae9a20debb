//! Periodic refresh of the room list.

use futures::{Stream, StreamExt};
use tracing::debug;

use crate::lifecycle::Liveness;

/// Period between two automatic refreshes.
pub const REFRESH_INTERVAL_MS: u32 = 3 * 60 * 1000;

/// Fire `on_tick` once right away, then once per item of `ticks`, until the
/// stream ends or `liveness` goes dead.
///
/// `on_tick` only starts a fetch; it must not wait for it. A slow fetch
/// therefore never delays the next tick.
pub async fn run<S, F>(ticks: S, liveness: Liveness, mut on_tick: F)
where
    S: Stream<Item = ()>,
    F: FnMut(),
{
    let mut ticks = std::pin::pin!(ticks);
    if !liveness.is_alive() {
        return;
    }
    on_tick();
    while ticks.next().await.is_some() {
        if !liveness.is_alive() {
            debug!("room list poller stopped");
            return;
        }
        debug!("room list poller tick");
        on_tick();
    }
}
