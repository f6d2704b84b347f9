pub mod error;
pub mod id;
pub mod origination;
pub mod scale;

// Re-export the main types for convenience
pub use error::CodecError;
pub use id::{TokenId, INDEX_BITS, INDEX_MAX, MAX_SUPPLY_BITS, MAX_SUPPLY_MAX, ORIGIN_SHIFT};
pub use origination::OriginationLedger;
pub use scale::{from_curve_amount, to_curve_amount, CURVE_DECIMALS, CURVE_SCALE};
