pub const PROGRESS_STEP: u8 = 10;
pub const PROGRESS_MAX: u8 = 100;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProgressCounter(u8);

impl ProgressCounter {
    pub fn value(self) -> u8 {
        self.0
    }

    pub fn advance(&mut self) -> u8 {
        self.0 = self.0.saturating_add(PROGRESS_STEP).min(PROGRESS_MAX);
        self.0
    }
}
