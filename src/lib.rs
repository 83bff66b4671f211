//! Time-limited, human-displayable authentication tokens.
//!
//! A token is a random [`Nonce`] rendered into a tagged, wrapped, base64
//! text block for display or transport, and later parsed back into the
//! original bytes. A separate freshness check decides whether a recorded
//! issue timestamp is still inside a fixed expiration window.
//!
//! [`TokenFormat`] wires the primitives together:
//!
//! ```no_run
//! # async fn demo() -> Result<(), nonce_armor::Error> {
//! use nonce_armor::TokenFormat;
//!
//! let format = TokenFormat::new();
//! let nonce = format.generate_nonce().await?;
//!
//! let block = format.beautify(&nonce);
//! assert_eq!(format.uglify(&block)?, nonce);
//! # Ok(())
//! # }
//! ```
#![forbid(unsafe_code)]

pub mod armor;
pub mod clock;
pub mod codec;
pub mod error;
pub mod format;
pub mod nonce;

// Re-export commonly used types
pub use clock::ClockSource;
pub use error::Error;
pub use format::TokenFormat;
pub use nonce::Nonce;
