//! Row-level operations on `search_history`.

mod read;
mod write;
