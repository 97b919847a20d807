//! Task status polling
//!
//! Routes never poll on the caller's behalf; this helper is for library
//! users that want to wait for a job from Rust code. Dropping the future
//! returned by [`TaskPoller::wait`] cancels the wait.

use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

use crate::core::providers::runway::MediaTaskError;
use crate::core::traits::MediaTaskProvider;
use crate::core::types::TaskStatus;

#[derive(Error, Debug)]
pub enum PollError {
    /// The status read itself failed; not retried
    #[error(transparent)]
    Query(#[from] MediaTaskError),

    #[error("Task {task_id} still not terminal after {attempts} status reads")]
    Exhausted {
        task_id: String,
        attempts: u32,
        last: TaskStatus,
    },
}

/// Fixed-interval status poller
#[derive(Debug, Clone, Copy)]
pub struct TaskPoller {
    pub interval: Duration,
    pub max_attempts: u32,
}

impl Default for TaskPoller {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(5),
            max_attempts: 120,
        }
    }
}

impl TaskPoller {
    pub fn new(interval: Duration, max_attempts: u32) -> Self {
        Self {
            interval,
            max_attempts: max_attempts.max(1),
        }
    }

    /// Read the task status until it reaches a terminal state
    ///
    /// The terminal status is returned as-is, including failed tasks.
    /// Statuses with no recognisable state count as not terminal.
    pub async fn wait<P>(&self, provider: &P, task_id: &str) -> Result<TaskStatus, PollError>
    where
        P: MediaTaskProvider + ?Sized,
    {
        let max_attempts = self.max_attempts.max(1);
        let mut attempt = 0;

        loop {
            attempt += 1;
            let status = provider.get_task_status(task_id).await?;

            match status.state() {
                Some(state) if state.is_terminal() => {
                    debug!(task_id = %task_id, attempt, state = ?state, "Task reached terminal state");
                    return Ok(status);
                }
                state => debug!(task_id = %task_id, attempt, state = ?state, "Task not finished"),
            }

            if attempt >= max_attempts {
                warn!(task_id = %task_id, attempts = attempt, "Gave up waiting for task");
                return Err(PollError::Exhausted {
                    task_id: task_id.to_string(),
                    attempts: attempt,
                    last: status,
                });
            }

            tokio::time::sleep(self.interval).await;
        }
    }
}
