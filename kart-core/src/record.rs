//! Types and traits for recording values of ticks and episodes.
//!
//! * [`Record`] - A container for storing key-value pairs of various data types
//! * [`RecordValue`] - An enum representing the types of values that can be stored
//! * [`Recorder`] - A trait for writing records to an output destination
//! * [`BufferedRecorder`] - A recorder that keeps records in memory
//! * [`NullRecorder`] - A recorder that discards all records
//!
//! ```rust
//! use kart_core::record::{Record, RecordValue};
//!
//! let mut record = Record::empty();
//! record.insert("Step", RecordValue::Scalar(1.0));
//! record.insert("Reward", RecordValue::Scalar(-0.001));
//! assert_eq!(record.len(), 2);
//! ```
mod base;
mod buffered_recorder;
mod null_recorder;
mod recorder;

pub use base::{Record, RecordValue};
pub use buffered_recorder::BufferedRecorder;
pub use null_recorder::NullRecorder;
pub use recorder::Recorder;
