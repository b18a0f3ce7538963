use num_bigint::BigUint;
use serde::Serialize;

/// A coerced positional parameter, ready for serialization.
///
/// The three cases cover everything a command line can throw at us:
/// the literals `true`/`false`, base-10 integers rewritten into the
/// `0x`-prefixed hex quantity encoding, and anything else passed
/// through untouched (pre-formatted addresses, hashes, enum literals
/// like "latest"). The remote endpoint stays the authority on whether
/// a value is acceptable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Param {
    Bool(bool),
    Quantity(String),
    Opaque(String),
}

/// Coerces a single raw token. Total: never fails, for any input.
///
/// Precedence, first match wins:
/// 1. exactly "true" / "false" (case-sensitive) -> Bool
/// 2. base-10 unsigned integer of any size -> Quantity ("0x" + lowercase hex)
/// 3. anything else -> Opaque, unchanged
///
/// Negative decimals deliberately fall through to Opaque: a `-0x...`
/// string is not a valid quantity, so we never synthesize one.
pub fn coerce(token: &str) -> Param {
    match token {
        "true" => Param::Bool(true),
        "false" => Param::Bool(false),
        _ => match token.parse::<BigUint>() {
            Ok(n) => Param::Quantity(format!("0x{:x}", n)),
            Err(_) => Param::Opaque(token.to_string()),
        },
    }
}

/// Coerces an ordered slice of tokens, preserving length and order.
pub fn coerce_all(tokens: &[String]) -> Vec<Param> {
    tokens.iter().map(|t| coerce(t)).collect()
}
