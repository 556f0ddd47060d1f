//! Timer capability for the session actor.
//!
//! Delayed work is modelled as messages delivered back into an actor's
//! mailbox after a delay ([`send_after`]) or on a fixed period
//! ([`send_every`]). Each call returns a [`TimerHandle`]; cancelling the
//! handle (or dropping it) aborts the scheduled delivery, so a torn-down
//! session can never be mutated by a stale timer that slipped through.
//!
//! Tests drive these timers deterministically with tokio's paused clock
//! (`#[tokio::test(start_paused = true)]` + `time::advance`).

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, sleep_until, Instant};

/// Cancellable handle to a scheduled delivery.
///
/// Dropping the handle cancels the timer; a fired-and-delivered timer is a
/// no-op to cancel.
#[derive(Debug)]
pub struct TimerHandle {
    task: JoinHandle<()>,
}

impl TimerHandle {
    pub fn cancel(&self) {
        self.task.abort();
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Delivers `msg` once, `delay` from now.
///
/// Delivery is silently dropped if the receiving mailbox has closed by the
/// time the timer fires.
pub fn send_after<M: Send + 'static>(
    delay: Duration,
    tx: mpsc::Sender<M>,
    msg: M,
) -> TimerHandle {
    let deadline = Instant::now() + delay;
    let task = tokio::spawn(async move {
        sleep_until(deadline).await;
        let _ = tx.send(msg).await;
    });
    TimerHandle { task }
}

/// Delivers a clone of `msg` every `period`, starting one period from now,
/// until cancelled or the mailbox closes.
pub fn send_every<M: Clone + Send + 'static>(
    period: Duration,
    tx: mpsc::Sender<M>,
    msg: M,
) -> TimerHandle {
    let start = Instant::now() + period;
    let task = tokio::spawn(async move {
        let mut ticker = interval_at(start, period);
        loop {
            ticker.tick().await;
            if tx.send(msg.clone()).await.is_err() {
                break;
            }
        }
    });
    TimerHandle { task }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::advance;

    async fn settle() {
        for _ in 0..8 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn send_after_fires_once_after_the_delay() {
        let (tx, mut rx) = mpsc::channel(4);
        let _handle = send_after(Duration::from_secs(2), tx, "fire");

        advance(Duration::from_secs(1)).await;
        settle().await;
        assert!(rx.try_recv().is_err());

        advance(Duration::from_secs(1)).await;
        settle().await;
        assert_eq!(rx.try_recv(), Ok("fire"));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_prevents_delivery() {
        let (tx, mut rx) = mpsc::channel::<&str>(4);
        let handle = send_after(Duration::from_secs(2), tx, "fire");
        handle.cancel();

        advance(Duration::from_secs(5)).await;
        settle().await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_handle_cancels() {
        let (tx, mut rx) = mpsc::channel::<&str>(4);
        drop(send_after(Duration::from_secs(2), tx, "fire"));

        advance(Duration::from_secs(5)).await;
        settle().await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn send_every_repeats_until_cancelled() {
        let (tx, mut rx) = mpsc::channel(16);
        let handle = send_every(Duration::from_secs(3), tx, "tick");

        advance(Duration::from_secs(9)).await;
        settle().await;
        let mut received = 0;
        while rx.try_recv().is_ok() {
            received += 1;
        }
        assert_eq!(received, 3);

        handle.cancel();
        advance(Duration::from_secs(9)).await;
        settle().await;
        assert!(rx.try_recv().is_err());
    }
}
