/// Count of requests in flight across the dashboard.
///
/// The header spinner shows while `is_busy()`; it only clears once every
/// started request has finished, whatever order they finish in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BusyState {
    in_flight: u32,
}

impl BusyState {
    pub fn begin(&mut self) {
        self.in_flight += 1;
    }

    /// Unbalanced calls saturate at zero
    pub fn end(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight > 0
    }

    pub fn in_flight(&self) -> u32 {
        self.in_flight
    }

    pub fn reset(&mut self) {
        self.in_flight = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_busy_until_all_finish() {
        let mut busy = BusyState::default();
        assert!(!busy.is_busy());
        busy.begin();
        busy.begin();
        busy.end();
        assert!(busy.is_busy());
        busy.end();
        assert!(!busy.is_busy());
    }

    #[test]
    fn test_end_without_begin() {
        let mut busy = BusyState::default();
        busy.end();
        assert_eq!(busy.in_flight(), 0);
        busy.begin();
        assert!(busy.is_busy());
    }

    #[test]
    fn test_reset() {
        let mut busy = BusyState::default();
        busy.begin();
        busy.begin();
        busy.reset();
        assert!(!busy.is_busy());
    }
}
