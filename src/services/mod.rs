pub mod adjustment;
pub mod file_io;
pub mod inspect;
pub mod raw_stream;

pub use adjustment::{AdjustmentReport, AdjustmentRequest, AdjustmentRun};
pub use file_io::{ByteSink, ByteSource, FileSystem};
pub use inspect::{inspect, BitmapSummary};
pub use raw_stream::{decode_samples, encode_samples};
