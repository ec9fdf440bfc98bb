// ⏰ Background Scheduler
// One-shot delayed tasks on a single worker, with two-phase shutdown:
//
//   1. stop accepting work, wait (bounded) for scheduled tasks to finish
//   2. if the wait elapses, abort whatever is still pending
//
// Task bodies run on the blocking pool, never on the async workers, so the
// drain timer keeps ticking while a body executes. A body that has already
// started is not interrupted; it is reported as unfinished and left to end
// on its own.

use crate::error::{Result, ZooError};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::sync::Semaphore;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// How shutdown ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownOutcome {
    /// Every scheduled task finished inside the timeout
    Drained,

    /// Timeout elapsed with `unfinished` tasks outstanding. Pending ones were
    /// cancelled; a body already running keeps going until it returns.
    Forced { unfinished: usize },
}

struct SchedulerState {
    accepting: bool,
    handles: Vec<JoinHandle<()>>,
}

/// Single-worker scheduler for fire-once background tasks
///
/// Must be used from inside a tokio runtime.
pub struct BackgroundScheduler {
    /// One permit = one worker
    worker: Arc<Semaphore>,
    state: Mutex<SchedulerState>,
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

impl BackgroundScheduler {
    pub fn new() -> Self {
        BackgroundScheduler {
            worker: Arc::new(Semaphore::new(1)),
            state: Mutex::new(SchedulerState {
                accepting: true,
                handles: Vec::new(),
            }),
        }
    }

    /// Run `task` once, `delay` from now
    ///
    /// # Returns
    /// * `Ok(())` - task accepted
    /// * `Err(ZooError::SchedulerShutdown)` - shutdown already started
    pub fn schedule_once<F>(&self, delay: Duration, task: F) -> Result<()>
    where
        F: FnOnce() + Send + 'static,
    {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        if !state.accepting {
            return Err(ZooError::SchedulerShutdown);
        }

        let worker = Arc::clone(&self.worker);
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            // Closed semaphore means the scheduler was force-stopped
            let Ok(permit) = worker.acquire_owned().await else {
                return;
            };

            // The permit travels with the body, so the worker stays busy until
            // the body returns even if this wrapper task is aborted.
            let body = tokio::task::spawn_blocking(move || {
                let _permit = permit;
                task();
            });
            if let Err(e) = body.await {
                warn!(error = %e, "background task body failed");
            }
        });

        state.handles.push(handle);
        info!(delay_ms = millis(delay), "background task scheduled");
        Ok(())
    }

    /// Tasks scheduled and not yet finished
    pub fn pending(&self) -> usize {
        let state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        state.handles.iter().filter(|h| !h.is_finished()).count()
    }

    pub fn is_accepting(&self) -> bool {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .accepting
    }

    /// Graceful drain bounded by `timeout`, then forced stop
    pub async fn shutdown(&self, timeout: Duration) -> ShutdownOutcome {
        let handles = {
            let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
            state.accepting = false;
            std::mem::take(&mut state.handles)
        };

        debug!(tasks = handles.len(), "draining background scheduler");

        // Kept aside: dropping a JoinHandle detaches the task, it doesn't stop it
        let abort_handles: Vec<_> = handles.iter().map(|h| h.abort_handle()).collect();

        let drain = async move {
            for handle in handles {
                let _ = handle.await;
            }
        };

        match tokio::time::timeout(timeout, drain).await {
            Ok(()) => {
                info!("background scheduler drained");
                ShutdownOutcome::Drained
            }
            Err(_) => {
                let mut unfinished = 0;
                for handle in abort_handles.iter().filter(|h| !h.is_finished()) {
                    handle.abort();
                    unfinished += 1;
                }
                self.worker.close();

                warn!(
                    unfinished,
                    timeout_ms = millis(timeout),
                    "background scheduler did not drain in time, forced stop"
                );
                ShutdownOutcome::Forced { unfinished }
            }
        }
    }
}

impl Default for BackgroundScheduler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::time::Instant;

    #[test]
    fn test_millis_saturates() {
        assert_eq!(millis(Duration::from_millis(333)), 333);
        assert_eq!(millis(Duration::MAX), u64::MAX);
    }

    #[tokio::test]
    async fn test_task_runs_before_drain_returns() {
        let scheduler = BackgroundScheduler::new();
        let ran = Arc::new(AtomicBool::new(false));

        let flag = Arc::clone(&ran);
        scheduler
            .schedule_once(Duration::from_millis(20), move || {
                flag.store(true, Ordering::SeqCst);
            })
            .unwrap();

        assert!(!ran.load(Ordering::SeqCst));

        let outcome = scheduler.shutdown(Duration::from_secs(1)).await;

        assert_eq!(outcome, ShutdownOutcome::Drained);
        assert!(ran.load(Ordering::SeqCst));
        assert_eq!(scheduler.pending(), 0);
    }

    #[tokio::test]
    async fn test_rejects_after_shutdown() {
        let scheduler = BackgroundScheduler::new();
        assert!(scheduler.is_accepting());

        let outcome = scheduler.shutdown(Duration::from_millis(50)).await;
        assert_eq!(outcome, ShutdownOutcome::Drained);
        assert!(!scheduler.is_accepting());

        let result = scheduler.schedule_once(Duration::from_millis(1), || {});
        assert!(matches!(result, Err(ZooError::SchedulerShutdown)));
    }

    #[tokio::test]
    async fn test_forced_stop_aborts_pending_task() {
        let scheduler = BackgroundScheduler::new();
        let ran = Arc::new(AtomicBool::new(false));

        let flag = Arc::clone(&ran);
        scheduler
            .schedule_once(Duration::from_secs(10), move || {
                flag.store(true, Ordering::SeqCst);
            })
            .unwrap();
        assert_eq!(scheduler.pending(), 1);

        let outcome = scheduler.shutdown(Duration::from_millis(50)).await;
        assert_eq!(outcome, ShutdownOutcome::Forced { unfinished: 1 });

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(!ran.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_running_body_does_not_stall_drain_timeout() {
        let scheduler = BackgroundScheduler::new();
        let started = Arc::new(AtomicBool::new(false));

        let flag = Arc::clone(&started);
        scheduler
            .schedule_once(Duration::ZERO, move || {
                flag.store(true, Ordering::SeqCst);
                std::thread::sleep(Duration::from_millis(600));
            })
            .unwrap();

        // Let the body get going on the worker
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(started.load(Ordering::SeqCst));

        let begin = Instant::now();
        let outcome = scheduler.shutdown(Duration::from_millis(50)).await;
        let elapsed = begin.elapsed();

        assert_eq!(outcome, ShutdownOutcome::Forced { unfinished: 1 });
        assert!(elapsed < Duration::from_millis(400), "drain took {:?}", elapsed);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_single_worker_runs_one_task_at_a_time() {
        let scheduler = BackgroundScheduler::new();
        let running = Arc::new(AtomicUsize::new(0));
        let max_seen = Arc::new(AtomicUsize::new(0));

        for _ in 0..3 {
            let running = Arc::clone(&running);
            let max_seen = Arc::clone(&max_seen);
            scheduler
                .schedule_once(Duration::from_millis(10), move || {
                    let now = running.fetch_add(1, Ordering::SeqCst) + 1;
                    max_seen.fetch_max(now, Ordering::SeqCst);
                    std::thread::sleep(Duration::from_millis(20));
                    running.fetch_sub(1, Ordering::SeqCst);
                })
                .unwrap();
        }

        let outcome = scheduler.shutdown(Duration::from_secs(2)).await;

        assert_eq!(outcome, ShutdownOutcome::Drained);
        assert_eq!(max_seen.load(Ordering::SeqCst), 1);
    }
}
