// One-shot callbacks scheduled relative to a screen's mount.
use gloo::timers::callback::Timeout;

/// Owns its timeouts; dropping the timeline cancels whatever has not fired.
#[derive(Default)]
pub struct Timeline {
    pending: Vec<Timeout>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at(&mut self, millis: u32, f: impl FnOnce() + 'static) -> &mut Self {
        self.pending.push(Timeout::new(millis, f));
        self
    }
}
