//! Quantization metadata attached to a tensor descriptor

/// Per-tensor (or per-channel) quantization parameters.
///
/// Gather never interprets these values; it only requires the input and
/// output descriptors to carry identical metadata.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QuantizationInfo {
    scales: Vec<f32>,
    offsets: Vec<i32>,
}

impl QuantizationInfo {
    /// Create metadata with a single scale/offset pair
    pub fn uniform(scale: f32, offset: i32) -> Self {
        Self {
            scales: vec![scale],
            offsets: vec![offset],
        }
    }

    /// Create per-channel metadata
    pub fn per_channel(scales: Vec<f32>, offsets: Vec<i32>) -> Self {
        Self { scales, offsets }
    }

    /// Scale factors
    pub fn scales(&self) -> &[f32] {
        &self.scales
    }

    /// Zero-point offsets
    pub fn offsets(&self) -> &[i32] {
        &self.offsets
    }

    /// True when no quantization is attached
    pub fn is_empty(&self) -> bool {
        self.scales.is_empty() && self.offsets.is_empty()
    }
}
