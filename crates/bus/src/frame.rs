/// Run-once-on-the-next-frame callback queue, the requestAnimationFrame
/// analogue.
///
/// Draining takes the queue as it stood when the frame began; callbacks
/// requested while a frame is running land in the following frame.
pub struct FrameScheduler<C> {
    callbacks: Vec<Box<dyn FnOnce(&mut C)>>,
}

impl<C> FrameScheduler<C> {
    pub fn new() -> Self {
        Self {
            callbacks: Vec::new(),
        }
    }

    pub fn schedule(&mut self, callback: impl FnOnce(&mut C) + 'static) {
        self.callbacks.push(Box::new(callback));
    }

    /// Take every callback queued for this frame, in scheduling order.
    pub fn drain(&mut self) -> Vec<Box<dyn FnOnce(&mut C)>> {
        std::mem::take(&mut self.callbacks)
    }

    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }
}

impl<C> Default for FrameScheduler<C> {
    fn default() -> Self {
        Self::new()
    }
}
