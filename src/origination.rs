use crate::error::CodecError;
use crate::id::TokenId;
use alloy_primitives::Address;
use log::debug;
use std::collections::HashMap;

/// Tracks the next unused family index for each origin account and
/// derives identifiers at mint time.
///
/// An origin's first family carries index 1; each successful origination
/// advances the sequence by one. The ledger holds no other state and
/// identifiers remain decodable without it.
#[derive(Debug, Default)]
pub struct OriginationLedger {
    next_index: HashMap<Address, u64>,
}

impl OriginationLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next family index for `origin` and pack the
    /// resulting identifier.
    ///
    /// The index is consumed only on success; a rejected `max_supply`
    /// leaves the sequence where it was.
    pub fn originate(&mut self, origin: Address, max_supply: u64) -> Result<TokenId, CodecError> {
        let slot = self.next_index.entry(origin).or_insert(1);
        let id = TokenId::pack(origin, *slot, max_supply)?;
        debug!("originated token family {} for origin {}", *slot, origin);
        *slot += 1;
        Ok(id)
    }

    /// How many families this origin has minted through the ledger.
    pub fn families_created(&self, origin: &Address) -> u64 {
        self.next_index.get(origin).map_or(0, |next| next - 1)
    }
}
