use crate::error::CodecError;
use alloy_primitives::{Address, B256, U256};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;

/// Width of the max-supply field, in bits (bits [0, 40) of the word).
pub const MAX_SUPPLY_BITS: usize = 40;

/// Width of the family-index field, in bits (bits [40, 96) of the word).
pub const INDEX_BITS: usize = 56;

/// Bits the origin address is shifted past: the two lower fields.
pub const ORIGIN_SHIFT: usize = MAX_SUPPLY_BITS + INDEX_BITS;

/// Largest max supply that fits its field.
pub const MAX_SUPPLY_MAX: u64 = (1 << MAX_SUPPLY_BITS) - 1;

/// Largest family index that fits its field.
pub const INDEX_MAX: u64 = (1 << INDEX_BITS) - 1;

const MAX_SUPPLY_MASK: U256 = U256::from_limbs([MAX_SUPPLY_MAX, 0, 0, 0]);
const INDEX_MASK: U256 = U256::from_limbs([INDEX_MAX, 0, 0, 0]);

// TokenId identifies one token family minted by one origin account.
// It is a single 256-bit word: the origin's 160-bit address in the high
// bits, a 56-bit per-origin family index below it, and a 40-bit cap on
// mintable units in the low bits. The three fields tile the word exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenId(U256);

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0.to_be_bytes::<32>()))
    }
}

impl Ord for TokenId {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.cmp(&other.0)
    }
}

impl PartialOrd for TokenId {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Default for TokenId {
    fn default() -> Self {
        TokenId(U256::ZERO)
    }
}

impl Deref for TokenId {
    type Target = U256;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<U256> for TokenId {
    fn from(word: U256) -> Self {
        TokenId(word)
    }
}

impl From<TokenId> for U256 {
    fn from(id: TokenId) -> Self {
        id.0
    }
}

impl TokenId {
    /// Wrap a raw 256-bit word. Any word is syntactically a valid
    /// identifier; whether its origin names a real account is the
    /// consumer's concern.
    pub fn new(word: U256) -> Self {
        TokenId(word)
    }

    /// Encode an origin address, family index, and max supply into one
    /// identifier.
    ///
    /// Fails with [`CodecError::OutOfRange`] when `index` or `max_supply`
    /// exceed their field widths; the raw bitwise combination below would
    /// otherwise corrupt the adjacent field without any trace.
    pub fn pack(origin: Address, index: u64, max_supply: u64) -> Result<Self, CodecError> {
        if index > INDEX_MAX {
            return Err(CodecError::OutOfRange {
                field: "index",
                value: index,
                bits: INDEX_BITS,
            });
        }
        if max_supply > MAX_SUPPLY_MAX {
            return Err(CodecError::OutOfRange {
                field: "max supply",
                value: max_supply,
                bits: MAX_SUPPLY_BITS,
            });
        }

        let origin_word: U256 = origin.into_word().into();
        let word = (origin_word << ORIGIN_SHIFT)
            | (U256::from(index) << MAX_SUPPLY_BITS)
            | U256::from(max_supply);
        Ok(TokenId(word))
    }

    /// Decode the identifier back into its three fields. Exact inverse of
    /// [`TokenId::pack`]; never fails.
    pub fn unpack(&self) -> (Address, u64, u64) {
        (self.origin(), self.token_index(), self.max_supply())
    }

    /// The account that minted this token family (bits [96, 256)).
    pub fn origin(&self) -> Address {
        Address::from_word(B256::from(self.0 >> ORIGIN_SHIFT))
    }

    /// The per-origin family sequence number (bits [40, 96)).
    pub fn token_index(&self) -> u64 {
        ((self.0 >> MAX_SUPPLY_BITS) & INDEX_MASK).to::<u64>()
    }

    /// The cap on mintable units under this identifier (bits [0, 40)).
    pub fn max_supply(&self) -> u64 {
        (self.0 & MAX_SUPPLY_MASK).to::<u64>()
    }
}
