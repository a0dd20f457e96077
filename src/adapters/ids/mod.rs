//! Id adapters - Implementations of the IdGenerator port.
//!
//! - `UuidIdGenerator` - Random v4 UUIDs for production hosts
//! - `SequentialIdGenerator` - Deterministic ids for tests

mod sequential_generator;
mod uuid_generator;

pub use sequential_generator::SequentialIdGenerator;
pub use uuid_generator::UuidIdGenerator;
