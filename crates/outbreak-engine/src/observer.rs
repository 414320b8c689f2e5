//! Tick notification.
//!
//! Observers receive a payload-free signal once per completed tick, after
//! the snapshot for that tick has been published. They re-read state
//! through [`SnapshotCell`](crate::SnapshotCell) if they need it.

use crossbeam_channel::{Receiver, Sender};

/// Receives one call per completed tick, on the tick thread.
///
/// Calls are synchronous: a slow observer delays the next tick.
pub trait TickObserver: Send {
    /// Called after the tick's snapshot is published.
    fn on_tick(&mut self);
}

impl<F> TickObserver for F
where
    F: FnMut() + Send,
{
    fn on_tick(&mut self) {
        self()
    }
}

/// Forwards each tick as a `()` message on a crossbeam channel.
///
/// Sends never block: a full or disconnected receiver just drops the
/// signal for that tick.
#[derive(Clone, Debug)]
pub struct ChannelObserver {
    tx: Sender<()>,
}

impl ChannelObserver {
    /// An observer plus the receiving end of its unbounded channel.
    pub fn channel() -> (Self, Receiver<()>) {
        let (tx, rx) = crossbeam_channel::unbounded();
        (Self { tx }, rx)
    }

    /// An observer sending on an existing channel.
    pub fn with_sender(tx: Sender<()>) -> Self {
        Self { tx }
    }
}

impl TickObserver for ChannelObserver {
    fn on_tick(&mut self) {
        let _ = self.tx.try_send(());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_are_observers() {
        let mut calls = 0;
        {
            let mut obs = || calls += 1;
            obs.on_tick();
            obs.on_tick();
        }
        assert_eq!(calls, 2);
    }

    #[test]
    fn channel_observer_sends_one_message_per_tick() {
        let (mut obs, rx) = ChannelObserver::channel();
        obs.on_tick();
        obs.on_tick();
        obs.on_tick();
        assert_eq!(rx.try_iter().count(), 3);
    }

    #[test]
    fn full_channel_drops_signal() {
        let (tx, rx) = crossbeam_channel::bounded(1);
        let mut obs = ChannelObserver::with_sender(tx);
        obs.on_tick();
        obs.on_tick();
        assert_eq!(rx.try_iter().count(), 1);
    }
}
