//! Element trait for mapping Rust types to DType

use super::DType;
use bytemuck::{Pod, Zeroable};
use std::fmt::Debug;

/// Trait for types that can be elements of a tensor
///
/// This trait connects Rust's type system to the runtime dtype system.
///
/// # Bounds
/// - `Copy + Send + Sync + 'static` - Basic trait requirements
/// - `Pod + Zeroable` - Safe memory transmutation (bytemuck)
/// - `PartialEq + Debug` - Bit-exact comparison in tests and oracles
pub trait Element: Copy + Send + Sync + Pod + Zeroable + PartialEq + Debug + 'static {
    /// The corresponding DType for this Rust type
    const DTYPE: DType;

    /// Convert to f64 for generic numeric operations
    fn to_f64(self) -> f64;

    /// Convert from f64 to this type
    fn from_f64(v: f64) -> Self;

    /// Zero value
    #[inline]
    fn zero() -> Self {
        Self::zeroed()
    }
}

macro_rules! impl_element {
    ($($ty:ty => $dtype:ident),* $(,)?) => {
        $(
            impl Element for $ty {
                const DTYPE: DType = DType::$dtype;

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn from_f64(v: f64) -> Self {
                    v as $ty
                }
            }
        )*
    };
}

impl_element!(
    f64 => F64,
    f32 => F32,
    i64 => I64,
    i32 => I32,
    i16 => I16,
    i8 => I8,
    u64 => U64,
    u32 => U32,
    u16 => U16,
    u8 => U8,
);

// Note: bool doesn't implement Pod, so we can't implement Element for it directly.
// Boolean tensors use u8 internally.

// ============================================================================
// Half-precision floating point types (requires "f16" feature)
// ============================================================================

#[cfg(feature = "f16")]
impl Element for half::f16 {
    const DTYPE: DType = DType::F16;

    #[inline]
    fn to_f64(self) -> f64 {
        self.to_f64()
    }

    #[inline]
    fn from_f64(v: f64) -> Self {
        half::f16::from_f64(v)
    }
}

#[cfg(feature = "f16")]
impl Element for half::bf16 {
    const DTYPE: DType = DType::BF16;

    #[inline]
    fn to_f64(self) -> f64 {
        self.to_f64()
    }

    #[inline]
    fn from_f64(v: f64) -> Self {
        half::bf16::from_f64(v)
    }
}

// ============================================================================
// Index element types
// ============================================================================

/// Element types an index tensor may hold.
///
/// Both widths are 32 bits; they differ only in how the stored bits are
/// interpreted. Negative values never convert to a position.
pub trait IndexElement: Element {
    /// Interpret the value as a position, `None` when negative.
    fn to_position(self) -> Option<usize>;

    /// The raw value widened for diagnostics.
    fn to_i64(self) -> i64;
}

impl IndexElement for u32 {
    #[inline]
    fn to_position(self) -> Option<usize> {
        Some(self as usize)
    }

    #[inline]
    fn to_i64(self) -> i64 {
        self as i64
    }
}

impl IndexElement for i32 {
    #[inline]
    fn to_position(self) -> Option<usize> {
        usize::try_from(self).ok()
    }

    #[inline]
    fn to_i64(self) -> i64 {
        self as i64
    }
}
