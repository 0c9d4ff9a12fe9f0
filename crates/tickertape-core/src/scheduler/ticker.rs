use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, trace};

type TickCallback = Box<dyn FnMut() + Send + 'static>;

/// Repeating timer that drives the marquee
///
/// Invokes the most recently supplied callback every `delay`. A delay of
/// `None` disables ticking without tearing down the task; changing the delay
/// restarts the period from the moment of the change. Dropping the scheduler
/// cancels the task.
pub struct TickScheduler {
    delay_tx: watch::Sender<Option<Duration>>,
    callback: Arc<Mutex<TickCallback>>,
    task: JoinHandle<()>,
}

impl TickScheduler {
    /// Spawn the timer task on the current tokio runtime
    pub fn spawn<F>(callback: F, delay: Option<Duration>) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        let callback: Arc<Mutex<TickCallback>> = Arc::new(Mutex::new(Box::new(callback)));
        let (delay_tx, delay_rx) = watch::channel(delay.filter(|d| !d.is_zero()));
        let task = tokio::spawn(run(callback.clone(), delay_rx));

        Self {
            delay_tx,
            callback,
            task,
        }
    }

    /// Replace the callback; the next tick calls the new one
    pub fn set_callback<F>(&self, callback: F)
    where
        F: FnMut() + Send + 'static,
    {
        if let Ok(mut slot) = self.callback.lock() {
            *slot = Box::new(callback);
        }
    }

    /// Change the period; an unchanged value keeps the running phase
    pub fn set_delay(&self, delay: Option<Duration>) {
        let delay = delay.filter(|d| !d.is_zero());
        self.delay_tx.send_if_modified(|current| {
            if *current == delay {
                false
            } else {
                *current = delay;
                true
            }
        });
    }

    pub fn delay(&self) -> Option<Duration> {
        *self.delay_tx.borrow()
    }

    pub fn is_enabled(&self) -> bool {
        self.delay().is_some()
    }

    /// Cancel the timer task
    pub fn stop(self) {
        // Drop aborts the task
    }
}

impl Drop for TickScheduler {
    fn drop(&mut self) {
        self.task.abort();
    }
}

impl std::fmt::Debug for TickScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TickScheduler")
            .field("delay", &self.delay())
            .finish_non_exhaustive()
    }
}

async fn run(callback: Arc<Mutex<TickCallback>>, mut delay_rx: watch::Receiver<Option<Duration>>) {
    loop {
        let delay = *delay_rx.borrow_and_update();

        let Some(period) = delay else {
            debug!("Tick scheduler idle");
            if delay_rx.changed().await.is_err() {
                break;
            }
            continue;
        };

        debug!(period_ms = period.as_millis() as u64, "Tick scheduler armed");
        let mut interval = interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                changed = delay_rx.changed() => {
                    if changed.is_err() {
                        return;
                    }
                    break;
                }
                _ = interval.tick() => {
                    trace!("Tick");
                    if let Ok(mut cb) = callback.lock() {
                        (cb)();
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::time::sleep;

    fn counter() -> (Arc<AtomicUsize>, impl FnMut() + Send + 'static) {
        let count = Arc::new(AtomicUsize::new(0));
        let c = count.clone();
        (count, move || {
            c.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_at_fixed_period() {
        let (count, cb) = counter();
        let _scheduler = TickScheduler::spawn(cb, Some(Duration::from_millis(40)));

        sleep(Duration::from_millis(130)).await;
        assert_eq!(count.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_disabled_never_ticks() {
        let (count, cb) = counter();
        let scheduler = TickScheduler::spawn(cb, None);
        assert!(!scheduler.is_enabled());

        sleep(Duration::from_millis(500)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_delay_change_reschedules() {
        let (count, cb) = counter();
        let scheduler = TickScheduler::spawn(cb, Some(Duration::from_millis(40)));

        sleep(Duration::from_millis(90)).await;
        assert_eq!(count.load(Ordering::SeqCst), 2);

        scheduler.set_delay(Some(Duration::from_millis(100)));
        sleep(Duration::from_millis(150)).await;
        assert_eq!(count.load(Ordering::SeqCst), 3);

        scheduler.set_delay(None);
        sleep(Duration::from_millis(1000)).await;
        assert_eq!(count.load(Ordering::SeqCst), 3);

        scheduler.set_delay(Some(Duration::from_millis(10)));
        sleep(Duration::from_millis(25)).await;
        assert_eq!(count.load(Ordering::SeqCst), 5);
    }

    #[tokio::test(start_paused = true)]
    async fn test_unchanged_delay_keeps_phase() {
        let (count, cb) = counter();
        let scheduler = TickScheduler::spawn(cb, Some(Duration::from_millis(40)));

        for _ in 0..6 {
            sleep(Duration::from_millis(20)).await;
            scheduler.set_delay(Some(Duration::from_millis(40)));
        }
        // 120ms elapsed: ticks at 40, 80, 120
        sleep(Duration::from_millis(1)).await;
        assert_eq!(count.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_latest_callback_wins() {
        let (first, cb) = counter();
        let scheduler = TickScheduler::spawn(cb, Some(Duration::from_millis(40)));
        sleep(Duration::from_millis(50)).await;

        let (second, cb) = counter();
        scheduler.set_callback(cb);
        sleep(Duration::from_millis(80)).await;

        assert_eq!(first.load(Ordering::SeqCst), 1);
        assert_eq!(second.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_task() {
        let (count, cb) = counter();
        let scheduler = TickScheduler::spawn(cb, Some(Duration::from_millis(40)));
        sleep(Duration::from_millis(50)).await;
        scheduler.stop();

        sleep(Duration::from_millis(500)).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }
}
