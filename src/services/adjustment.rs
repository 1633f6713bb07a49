use crate::error::RunError;
use crate::services::file_io::{ByteSink, ByteSource};
use crate::services::raw_stream::{decode_samples, encode_samples};
use delite_core::preview::preview_side;
use delite_core::Adjuster;
use std::path::PathBuf;

/// Paths and parameters for one adjustment pass
#[derive(Debug, Clone)]
pub struct AdjustmentRequest {
    /// Raw 16-bit sample stream to read
    pub input: PathBuf,
    /// Destination of the attenuated sample stream
    pub altered: PathBuf,
    /// Destination of the preview bitmap
    pub preview: PathBuf,
    pub adjuster: Adjuster,
}

/// Outcome of a successful pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdjustmentReport {
    /// Samples read from the input
    pub samples: usize,
    /// Samples that were attenuated
    pub adjusted: usize,
    /// Width and height of the square preview
    pub preview_side: usize,
    /// Bytes written to the altered stream
    pub altered_bytes: usize,
    /// Bytes written to the preview bitmap
    pub preview_bytes: usize,
}

/// Runs the read -> attenuate -> preview -> write pipeline.
///
/// Both outputs are built in memory before either file is written, so a run
/// that fails while processing leaves no output behind. The first failure
/// aborts the remaining stages.
pub struct AdjustmentRun<S, K> {
    source: S,
    sink: K,
}

impl<S: ByteSource, K: ByteSink> AdjustmentRun<S, K> {
    pub fn new(source: S, sink: K) -> Self {
        Self { source, sink }
    }

    pub fn run(&self, request: &AdjustmentRequest) -> Result<AdjustmentReport, RunError> {
        let raw = self.source.read(&request.input)?;
        let mut samples = decode_samples(&raw)?;
        tracing::info!(
            input = %request.input.display(),
            samples = samples.len(),
            "Read raw stream"
        );

        let adjuster = &request.adjuster;
        let adjusted = adjuster.adjust(&mut samples)?;
        tracing::info!(
            adjusted,
            pixel_count = adjuster.pixel_count(),
            level = adjuster.level().percent(),
            "Attenuated brightest samples"
        );

        let preview = adjuster.preview(&samples)?;
        let side = preview_side(samples.len());
        if side * side < samples.len() {
            tracing::debug!(
                dropped = samples.len() - side * side,
                "Samples outside the preview square are not shown"
            );
        }

        let altered = encode_samples(&samples);
        self.sink.write(&request.altered, &altered)?;
        self.sink.write(&request.preview, &preview)?;
        tracing::info!(
            preview = %request.preview.display(),
            side,
            bytes = preview.len(),
            "Wrote preview"
        );

        Ok(AdjustmentReport {
            samples: samples.len(),
            adjusted,
            preview_side: side,
            altered_bytes: altered.len(),
            preview_bytes: preview.len(),
        })
    }
}
