use alloy_primitives::U256;
use thiserror::Error;

/// Represents all possible errors raised by the token identifier codec
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// A field handed to `pack` does not fit its allotted bit width
    #[error("{field} value {value} does not fit in {bits} bits")]
    OutOfRange {
        field: &'static str,
        value: u64,
        bits: usize,
    },

    /// A curve amount is not a whole multiple of the scale factor
    #[error("curve amount {0} is not a whole multiple of the scale factor")]
    UnalignedAmount(U256),

    /// A curve amount descales to a unit count larger than u64
    #[error("curve amount {0} exceeds the representable unit count")]
    AmountOverflow(U256),
}
