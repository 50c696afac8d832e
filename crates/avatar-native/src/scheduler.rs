use avatar_core::{FrameScheduler, LoopHandle};

/// Frame source for the desktop window. Requests are queued until the next
/// redraw, which drains them; `on_request` asks the window for that redraw.
pub struct RedrawScheduler<F: FnMut()> {
    next_token: u64,
    pending: Vec<(u64, LoopHandle)>,
    on_request: F,
}

impl<F: FnMut()> RedrawScheduler<F> {
    pub fn new(on_request: F) -> Self {
        Self {
            next_token: 0,
            pending: Vec::new(),
            on_request,
        }
    }

    /// Takes every frame requested so far. Frames scheduled while these are
    /// being delivered wait for the following redraw.
    pub fn take_due(&mut self) -> Vec<LoopHandle> {
        self.pending.drain(..).map(|(_, handle)| handle).collect()
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }
}

impl<F: FnMut()> FrameScheduler for RedrawScheduler<F> {
    type Token = u64;

    fn schedule(&mut self, handle: LoopHandle) -> u64 {
        self.next_token += 1;
        self.pending.push((self.next_token, handle));
        (self.on_request)();
        self.next_token
    }

    fn cancel(&mut self, token: u64) {
        self.pending.retain(|(t, _)| *t != token);
    }
}
