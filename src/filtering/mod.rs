/*! Filtering utilities

Filters operate on sentence level and implement [filter::Filter]: a pure
detection over a candidate, with no internal state. The length filter runs
before decoding, on raw token counts.
! */
mod filter;
mod sentence;

pub use filter::Filter;
pub use sentence::MinTokens;
