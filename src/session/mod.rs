use crate::chunk;
use crate::errors::Error;

/// Accumulates chunks into one growing list of primes. The list is only
/// ever mutated through `start` and `extend`, and `extend` refuses to run
/// while another extension is marked in flight, so a session never holds
/// duplicate or out-of-order primes.
#[derive(Debug)]
pub struct Session {
    primes: Vec<i64>,
    cursor: Option<i64>,
    count: usize,
    loading: bool,
}

impl Session {
    pub fn new(count: usize) -> Session {
        Session {
            primes: Vec::new(),
            cursor: None,
            count,
            loading: false,
        }
    }

    /// Discards any accumulated primes and seeds the session with the first
    /// chunk at or above `initial`. Unlike `chunk::next_chunk`, the scan is
    /// inclusive: if `initial` is itself prime it is the first prime
    /// returned.
    pub fn start(&mut self, initial: i64) -> Result<&[i64], Error> {
        if initial < 0 {
            return Err(Error::NegativeStart { start: initial });
        }
        self.loading = true;
        let result = chunk::next_chunk(initial.max(2) - 1, self.count);
        self.loading = false;

        let chunk = result?;
        self.primes.clear();
        self.primes.extend_from_slice(&chunk.primes);
        self.cursor = Some(chunk.cursor);
        Ok(&self.primes)
    }

    /// Appends the next chunk and returns the newly added primes. Returns
    /// `Ok(None)` without scanning if an extension is already in flight. A
    /// session that was never started behaves as if started from 2.
    pub fn extend(&mut self) -> Result<Option<&[i64]>, Error> {
        if self.loading {
            return Ok(None);
        }
        let cursor = match self.cursor {
            Some(cursor) => cursor,
            None => return self.start(2).map(Some),
        };

        self.loading = true;
        let result = chunk::next_chunk(cursor, self.count);
        self.loading = false;

        let chunk = result?;
        let appended_at = self.primes.len();
        self.primes.extend_from_slice(&chunk.primes);
        self.cursor = Some(chunk.cursor);
        Ok(Some(&self.primes[appended_at..]))
    }

    pub fn primes(&self) -> &[i64] {
        &self.primes
    }

    pub fn cursor(&self) -> Option<i64> {
        self.cursor
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }
}

#[cfg(test)]
mod tests {
    use super::Session;
    use crate::errors::Error;

    #[test]
    fn start_seeds_from_two_by_default() {
        let mut session = Session::new(10);
        let first = session.start(2).unwrap().to_vec();
        assert_eq!(first, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
        assert_eq!(session.cursor(), Some(29));
    }

    #[test]
    fn start_includes_a_prime_starting_value() {
        let mut session = Session::new(3);
        assert_eq!(session.start(29).unwrap(), &[29, 31, 37]);
    }

    #[test]
    fn start_below_two_clamps_to_two() {
        for initial in 0..2 {
            let mut session = Session::new(3);
            assert_eq!(session.start(initial).unwrap(), &[2, 3, 5]);
        }
    }

    #[test]
    fn extend_continues_without_gaps_or_repeats() {
        let mut session = Session::new(10);
        session.start(2).unwrap();
        let added = session.extend().unwrap().unwrap().to_vec();
        assert_eq!(added, vec![31, 37, 41, 43, 47, 53, 59, 61, 67, 71]);
        assert_eq!(session.primes().len(), 20);
    }

    #[test]
    fn extend_before_start_seeds_from_two() {
        let mut session = Session::new(5);
        let added = session.extend().unwrap().unwrap().to_vec();
        assert_eq!(added, vec![2, 3, 5, 7, 11]);
    }

    #[test]
    fn extend_is_skipped_while_one_is_in_flight() {
        let mut session = Session::new(5);
        session.start(2).unwrap();
        session.loading = true;
        assert_eq!(session.extend().unwrap(), None);
        assert_eq!(session.primes().len(), 5);
    }

    #[test]
    fn start_resets_accumulated_state() {
        let mut session = Session::new(5);
        session.start(2).unwrap();
        session.extend().unwrap();
        let restarted = session.start(100).unwrap().to_vec();
        assert_eq!(restarted, vec![101, 103, 107, 109, 113]);
        assert_eq!(session.primes(), &restarted[..]);
    }

    #[test]
    fn negative_start_is_rejected() {
        let mut session = Session::new(5);
        assert_eq!(
            session.start(-7).unwrap_err(),
            Error::NegativeStart { start: -7 }
        );
        assert!(session.primes().is_empty());
    }
}
