//! Identifier generator adapters.

mod fixed;
mod sequence;
mod uuid_v4;

pub use fixed::FixedIdGenerator;
pub use sequence::SequenceIdGenerator;
pub use uuid_v4::UuidV4Generator;
