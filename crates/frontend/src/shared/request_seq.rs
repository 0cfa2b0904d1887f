/// Sequence numbers for one stream of queries.
///
/// Each issued request takes the next number; a response is only applied
/// when its number is still the latest issued.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestSeq {
    latest: u64,
}

impl RequestSeq {
    pub fn issue(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_latest(&self, seq: u64) -> bool {
        seq == self.latest
    }

    pub fn latest(&self) -> u64 {
        self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_is_accepted() {
        let mut seq = RequestSeq::default();
        let first = seq.issue();
        let second = seq.issue();
        assert!(second > first);
        assert!(!seq.is_latest(first));
        assert!(seq.is_latest(second));
    }

    #[test]
    fn test_nothing_issued() {
        let seq = RequestSeq::default();
        assert!(!seq.is_latest(1));
    }
}
