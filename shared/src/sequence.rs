/// Orders overlapping catalog loads.
///
/// Each load takes a token before it starts. When its response arrives it is
/// applied only if no newer load has been issued since; the latest issued
/// load wins, not the latest resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadSequencer {
    latest: u64,
}

impl LoadSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_current(&self, token: u64) -> bool {
        let current = token == self.latest;
        if !current {
            tracing::debug!(token, latest = self.latest, "Discarding stale catalog load");
        }
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_load_is_current() {
        let mut seq = LoadSequencer::new();
        let token = seq.issue();
        assert!(seq.is_current(token));
    }

    #[test]
    fn test_older_load_is_discarded() {
        let mut seq = LoadSequencer::new();
        let first = seq.issue();
        let second = seq.issue();

        // Second resolves first, then the slow first response arrives.
        assert!(seq.is_current(second));
        assert!(!seq.is_current(first));
    }

    #[test]
    fn test_tokens_increase() {
        let mut seq = LoadSequencer::new();
        let a = seq.issue();
        let b = seq.issue();
        let c = seq.issue();
        assert!(a < b && b < c);
    }
}
