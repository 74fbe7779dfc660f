use std::cell::Cell;
use std::rc::Rc;

/// What [`LoopState::stop`] found.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stop {
    AlreadyStopped,
    /// The loop was running; `cancel` is the frame request still pending, if any.
    Stopped { cancel: Option<i32> },
}

/// Running flag and pending frame request shared by a loop and its handle.
#[derive(Clone, Debug)]
pub struct LoopState {
    running: Rc<Cell<bool>>,
    pending: Rc<Cell<Option<i32>>>,
}

impl Default for LoopState {
    fn default() -> Self {
        Self::new()
    }
}

impl LoopState {
    pub fn new() -> Self {
        Self {
            running: Rc::new(Cell::new(true)),
            pending: Rc::new(Cell::new(None)),
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    /// Remember the id of the frame just requested.
    pub fn armed(&self, id: i32) {
        self.pending.set(Some(id));
    }

    /// Called when a frame fires: the request is consumed. Returns whether to run it.
    pub fn begin_frame(&self) -> bool {
        self.pending.set(None);
        self.running.get()
    }

    pub fn stop(&self) -> Stop {
        if !self.running.replace(false) {
            return Stop::AlreadyStopped;
        }
        Stop::Stopped {
            cancel: self.pending.take(),
        }
    }
}
