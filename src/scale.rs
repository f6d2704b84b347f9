use crate::error::CodecError;
use alloy_primitives::U256;

/// Decimal places carried by amounts on the bonding curve.
pub const CURVE_DECIMALS: u32 = 18;

/// Scale factor between whole units and curve amounts (10^18).
///
/// The curve math loses precision on small integers, so unit counts
/// travel as 18-decimal fixed-point values and are descaled on the way
/// back out.
pub const CURVE_SCALE: U256 = U256::from_limbs([1_000_000_000_000_000_000, 0, 0, 0]);

/// Widen a whole unit count into a curve amount. Cannot overflow: a
/// 64-bit count times a 60-bit scale stays well inside 256 bits.
pub fn to_curve_amount(units: u64) -> U256 {
    U256::from(units) * CURVE_SCALE
}

/// Recover a whole unit count from a curve amount.
///
/// Fails with [`CodecError::UnalignedAmount`] when the amount carries a
/// fractional remainder (truncating it silently would hide a pricing
/// bug) and with [`CodecError::AmountOverflow`] when the count does not
/// fit in a `u64`.
pub fn from_curve_amount(amount: U256) -> Result<u64, CodecError> {
    let (units, remainder) = amount.div_rem(CURVE_SCALE);
    if !remainder.is_zero() {
        return Err(CodecError::UnalignedAmount(amount));
    }
    if units > U256::from(u64::MAX) {
        return Err(CodecError::AmountOverflow(amount));
    }
    Ok(units.to::<u64>())
}
