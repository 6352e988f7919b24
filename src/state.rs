use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct SenderState {
    pub complete: bool,
    pub start: Instant,
    pub finish: Option<Instant>,
    pub sent: u32,
}

impl Default for SenderState {
    fn default() -> Self {
        Self {
            complete: false,
            start: Instant::now(),
            finish: None,
            sent: 0,
        }
    }
}

impl SenderState {
    pub fn elapsed(&self) -> Duration {
        self.finish.unwrap_or_else(Instant::now) - self.start
    }
}
