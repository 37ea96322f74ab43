use serde::{Deserialize, Serialize};

/// Repayment routing input, scalar-or-array.
///
/// `Broadcast` routes every deposit of a fill to the same target and is
/// carried on the wire as a single-element array. `PerDeposit` must supply
/// exactly one entry per deposit; partial arrays are rejected.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Repayment<T> {
    PerDeposit(Vec<T>),
    Broadcast(T),
}

#[cfg(test)]
mod test {
    use alloy_primitives::Address;

    use super::*;

    #[test]
    fn test_scalar_json_is_broadcast() {
        let repayment: Repayment<Address> =
            serde_json::from_str("\"0x7e287a503f0d19b7899c15e80eb18c0ee55ffd12\"").unwrap();
        assert!(matches!(repayment, Repayment::Broadcast(_)));
    }

    #[test]
    fn test_array_json_is_per_deposit() {
        let repayment: Repayment<u64> = serde_json::from_str("[1, 10, 8453]").unwrap();
        assert_eq!(repayment, Repayment::PerDeposit(vec![1, 10, 8453]));
    }
}
