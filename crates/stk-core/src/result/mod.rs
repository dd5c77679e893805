//! Result taxonomy shared by every decoder.
//!
//! `ResultCode` is the closed ETSI TS 102.223 §8.12 general-result set and
//! `ResultException` is the only error type decoders return. Structural
//! failures carry `CMD_DATA_NOT_UNDERSTOOD` (bad encoding) or
//! `REQUIRED_VALUES_MISSING` (truncated header); callers turn them into a
//! TERMINAL RESPONSE instead of dropping the command.

pub mod code;
pub mod exception;

pub use code::ResultCode;
pub use exception::{InvalidResultException, ResultException};
