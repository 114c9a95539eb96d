//! Building blocks exercised by the demos.
//!
//! Nothing here touches stdout directly. Types that print take a writer, so
//! every behavior can be checked against an in-memory buffer.

pub mod calendar;
pub mod capability;
pub mod chainer;
pub mod functions;
pub mod presence;
pub mod sequence;
