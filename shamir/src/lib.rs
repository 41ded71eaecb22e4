//! Shamir's Secret Sharing over generated big prime fields.
//!
//! A secret is encoded as the constant term of a random degree `k - 1`
//! polynomial over `Z_p` for a generated prime `p`; evaluating the
//! polynomial at `x = 1..=n` yields `n` shares of which any `k` reconstruct
//! the secret by Lagrange interpolation at zero. An HMAC-based integrity tag
//! lets the reconstruction prove it recovered the original secret rather
//! than an arbitrary field element.
//!
//! ```
//! use rand::rngs::OsRng;
//! use shamir::{SecretSharing, SharingConfig, Secret};
//!
//! # fn main() -> shamir::Result<()> {
//! let sharing = SecretSharing::new(SharingConfig::new(3, 5)?);
//! let secret = Secret::random(&mut OsRng)?;
//!
//! let split = sharing.split(&secret, &mut OsRng)?;
//! let recovered =
//!     sharing.reconstruct_verified(&split.shares[..3], &split.integrity_tag)?;
//! assert_eq!(recovered, secret);
//! # Ok(())
//! # }
//! ```

pub mod container;
pub mod encoding;
pub mod error;
pub mod params;
pub mod secret;
pub mod share;

pub use container::{SecretSharing, SplitSecret};
pub use error::{Result, SharingError};
pub use params::SharingConfig;
pub use secret::Secret;
pub use share::Share;
