//! One distributable piece of a split secret.

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SharingError};

/// One evaluation point `(x, y)` of the sharing polynomial, together with
/// the field prime common to all shares of a sharing session.
///
/// `x = 0` is the secret's own evaluation point and must never be
/// distributed; construction rejects it outright instead of leaving the
/// rule as a convention.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Share {
    x: u32,
    y: BigUint,
    prime: BigUint,
    tag_fragment: Option<String>,
}

impl Share {
    pub fn new(x: u32, y: BigUint, prime: BigUint) -> Result<Self> {
        if x == 0 {
            return Err(SharingError::InvalidShareIndex(x));
        }

        Ok(Share {
            x,
            y,
            prime,
            tag_fragment: None,
        })
    }

    /// Attach integrity information that travels with this share.
    pub fn with_tag_fragment(mut self, fragment: String) -> Self {
        self.tag_fragment = Some(fragment);
        self
    }

    pub fn x(&self) -> u32 {
        self.x
    }

    pub fn y(&self) -> &BigUint {
        &self.y
    }

    pub fn prime(&self) -> &BigUint {
        &self.prime
    }

    pub fn tag_fragment(&self) -> Option<&str> {
        self.tag_fragment.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(n: u64) -> BigUint {
        BigUint::from(n)
    }

    #[test]
    fn test_share_creation() {
        let share = Share::new(1, big(42), big(65_537)).unwrap();
        assert_eq!(share.x(), 1);
        assert_eq!(*share.y(), big(42));
        assert_eq!(*share.prime(), big(65_537));
        assert!(share.tag_fragment().is_none());
    }

    #[test]
    fn test_zero_index_is_rejected() {
        assert!(matches!(
            Share::new(0, big(42), big(65_537)),
            Err(SharingError::InvalidShareIndex(0))
        ));
    }

    #[test]
    fn test_tag_fragment_attachment() {
        let share = Share::new(3, big(7), big(65_537))
            .unwrap()
            .with_tag_fragment("deadbeef".to_string());
        assert_eq!(share.tag_fragment(), Some("deadbeef"));
    }
}
