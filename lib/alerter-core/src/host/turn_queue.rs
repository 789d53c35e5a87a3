use crate::host::UiTask;
use log::trace;
use std::cell::RefCell;
use tokio::sync::mpsc;

/// Cooperative task queue drained by the thread that owns the render tree.
pub struct TurnQueue {
    sender: mpsc::UnboundedSender<UiTask>,
    receiver: RefCell<mpsc::UnboundedReceiver<UiTask>>,
}

impl TurnQueue {
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        Self {
            sender,
            receiver: RefCell::new(receiver),
        }
    }

    pub fn post(&self, task: UiTask) {
        // The receiver lives as long as the queue, so sending cannot fail
        let _ = self.sender.send(task);
    }

    pub fn pending(&self) -> usize {
        self.receiver.borrow().len()
    }

    /// Runs the tasks queued before this call. Tasks they post wait for the next turn.
    pub fn run_pending(&self) -> usize {
        let queued = self.pending();
        let mut ran = 0;

        while ran < queued {
            // Released before running: tasks may post more work
            let task = match self.receiver.borrow_mut().try_recv() {
                Ok(task) => task,
                Err(_) => break,
            };
            task();
            ran += 1;
        }

        if ran > 0 {
            trace!("Ran {} UI task(s)", ran);
        }
        ran
    }
}

impl Default for TurnQueue {
    fn default() -> Self {
        Self::new()
    }
}
