use std::fmt::{Debug, Formatter, Write as _};

use tracing::{debug, warn};

use crate::error::Error;

/// A random "number used once": the opaque payload of a displayable token.
///
/// The only valid equality check is byte-for-byte comparison; the value has
/// no internal structure.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Nonce(Vec<u8>);

impl Nonce {
    /// Request `size` cryptographically secure random bytes.
    ///
    /// Entropy is gathered on the blocking pool since the platform source
    /// may have variable latency. A source failure surfaces as
    /// [`Error::EntropySource`]; it is never papered over with a weaker
    /// generator. A zero `size` is a configuration bug, not a runtime
    /// condition.
    pub async fn generate(size: usize) -> Result<Nonce, Error> {
        assert!(size > 0, "nonce size must be non-zero");

        let result = tokio::task::spawn_blocking(move || {
            let mut bytes = vec![0u8; size];
            aws_lc_rs::rand::fill(&mut bytes).map(|_| bytes)
        })
        .await;

        match result {
            Ok(Ok(bytes)) => {
                debug!(size, "generated nonce");
                Ok(Nonce(bytes))
            }
            Ok(Err(_)) | Err(_) => {
                warn!(size, "secure random source failed");
                Err(Error::EntropySource)
            }
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Debug for Nonce {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // Length and a short prefix only; the full value stays out of logs.
        let mut prefix = String::with_capacity(16);
        for byte in self.0.iter().take(8) {
            write!(prefix, "{byte:02x}")?;
        }
        write!(f, "Nonce(len={}, {prefix}..)", self.len())
    }
}

impl AsRef<[u8]> for Nonce {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for Nonce {
    fn from(bytes: Vec<u8>) -> Self {
        Nonce(bytes)
    }
}

impl From<&[u8]> for Nonce {
    fn from(bytes: &[u8]) -> Self {
        Nonce(bytes.to_vec())
    }
}
