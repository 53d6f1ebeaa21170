use failure::Fail;

#[derive(Debug, Fail, PartialEq)]
pub enum Error {
    #[fail(display = "cursor must be non-negative, got {}", cursor)]
    NegativeCursor { cursor: i64 },

    #[fail(display = "starting value must be non-negative, got {}", start)]
    NegativeStart { start: i64 },

    #[fail(display = "chunk size must be at least 1")]
    EmptyChunk,

    #[fail(display = "candidate range exhausted while scanning past {}", cursor)]
    CursorRange { cursor: i64 },
}
