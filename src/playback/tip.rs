use std::time::Duration;

use tokio::task::JoinHandle;

use super::Display;

/// The single pending "hide the theme tip" timer.
#[derive(Debug, Default)]
pub struct TipTimer {
    pending: Option<JoinHandle<()>>,
}

impl TipTimer {
    /// Cancels any pending hide and schedules a new one for `generation`.
    /// Must be called from within a tokio runtime.
    pub fn restart(&mut self, display: &Display, generation: u64, after: Duration) {
        self.cancel();
        let display = display.clone();
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(after).await;
            display.hide_tip(generation);
        }));
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for TipTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
