use crate::errors::Error;
use crate::oracle;

/// Number of primes per chunk unless the caller asks for something else.
pub const DEFAULT_COUNT: usize = 100;

/// One batch of primes plus the position the scan stopped at. Feeding
/// `cursor` back into `next_chunk` continues the scan with no gaps and no
/// repeats.
#[derive(Debug, Clone, PartialEq)]
pub struct Chunk {
    pub primes: Vec<i64>,
    pub cursor: i64,
}

/// Scans upward from `cursor` (exclusive) and returns exactly `count`
/// primes along with the last candidate examined.
///
/// The first candidate is `max(cursor + 1, 2)`, so passing 0 or 1 means
/// "start from the beginning" and every returned prime is strictly greater
/// than `cursor`. The scan advances by exactly 1 after every tested
/// candidate, prime or not, so successive calls with threaded cursors never
/// skip or re-emit a prime.
pub fn next_chunk(cursor: i64, count: usize) -> Result<Chunk, Error> {
    if cursor < 0 {
        return Err(Error::NegativeCursor { cursor });
    }
    if count == 0 {
        return Err(Error::EmptyChunk);
    }

    let mut primes = Vec::with_capacity(count);
    let mut candidate = match cursor.checked_add(1) {
        Some(c) => c.max(2),
        None => return Err(Error::CursorRange { cursor }),
    };
    loop {
        if oracle::is_prime(candidate) {
            primes.push(candidate);
            if primes.len() == count {
                // The last candidate examined is the prime that completed
                // the chunk, so it doubles as the resumption cursor.
                return Ok(Chunk {
                    primes,
                    cursor: candidate,
                });
            }
        }
        candidate = candidate
            .checked_add(1)
            .ok_or(Error::CursorRange { cursor })?;
    }
}
