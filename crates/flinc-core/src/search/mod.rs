//! Search request model and the form validation layer.
//!
//! A `SearchRequest` is only ever produced by `validate` (or rehydrated from
//! history) and is not mutated afterwards. The site builders re-check it with
//! `SearchRequest::check` before emitting any URL.

mod types;
mod validate;

pub use types::*;
pub use validate::*;
