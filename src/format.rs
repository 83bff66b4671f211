//! Configured token pipelines: `beautify`, `uglify`, and the freshness
//! check, composed from the armor and codec primitives.

use std::time::Duration;

use data_encoding::{BASE64, Encoding};
use tracing::debug;

use crate::armor;
use crate::clock::ClockSource;
use crate::codec;
use crate::error::Error;
use crate::nonce::Nonce;

pub const DEFAULT_BEGIN_TAG: &str = "-----BEGIN AUTH-----";
pub const DEFAULT_END_TAG: &str = "-----END AUTH-----";
pub const DEFAULT_WRAP_WIDTH: usize = 32;
pub const DEFAULT_NONCE_SIZE: usize = 128;
pub const DEFAULT_EXPIRATION: Duration = Duration::from_secs(120);

/// Everything needed to render, parse, and age-check displayable tokens.
///
/// All configuration is injected up front; the pipelines share no mutable
/// state and are safe to call from any number of concurrent call sites.
/// The tag strings must not be producible by the configured encoding's
/// alphabet (true for the defaults: base64 never emits `-`), which is what
/// keeps the payload region unambiguous.
#[derive(Debug, Clone)]
pub struct TokenFormat {
    encoding: Encoding,
    wrap_width: usize,
    begin_tag: String,
    end_tag: String,
    nonce_size: usize,
    expiration: Duration,
    clock: ClockSource,
}

impl Default for TokenFormat {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenFormat {
    pub fn new() -> Self {
        TokenFormat {
            encoding: BASE64,
            wrap_width: DEFAULT_WRAP_WIDTH,
            begin_tag: DEFAULT_BEGIN_TAG.to_string(),
            end_tag: DEFAULT_END_TAG.to_string(),
            nonce_size: DEFAULT_NONCE_SIZE,
            expiration: DEFAULT_EXPIRATION,
            clock: ClockSource::System,
        }
    }

    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn with_wrap_width(mut self, width: usize) -> Self {
        assert!(width > 0, "wrap width must be non-zero");
        self.wrap_width = width;
        self
    }

    pub fn with_tags(mut self, begin_tag: impl Into<String>, end_tag: impl Into<String>) -> Self {
        self.begin_tag = begin_tag.into();
        self.end_tag = end_tag.into();
        self
    }

    pub fn with_nonce_size(mut self, size: usize) -> Self {
        assert!(size > 0, "nonce size must be non-zero");
        self.nonce_size = size;
        self
    }

    pub fn with_expiration(mut self, window: Duration) -> Self {
        self.expiration = window;
        self
    }

    pub fn with_clock(mut self, clock: ClockSource) -> Self {
        self.clock = clock;
        self
    }

    pub fn nonce_size(&self) -> usize {
        self.nonce_size
    }

    pub fn expiration(&self) -> Duration {
        self.expiration
    }

    /// Generate a fresh nonce of the configured size.
    ///
    /// The only asynchronous operation in the crate; everything else is
    /// synchronous and pure.
    pub async fn generate_nonce(&self) -> Result<Nonce, Error> {
        Nonce::generate(self.nonce_size).await
    }

    /// Render nonce bytes as a tagged, wrapped, encoded display block.
    ///
    /// Encoding happens before wrapping (the wrap operates on the encoded
    /// alphabet, not raw bytes) and wrapping before decoration (the tags
    /// bound the wrapped payload exactly).
    pub fn beautify(&self, nonce: &Nonce) -> String {
        let encoded = codec::encode(&self.encoding, nonce.as_ref());
        let wrapped = armor::wrap(&encoded, self.wrap_width);
        armor::decorate(&wrapped, &self.begin_tag, &self.end_tag)
    }

    /// Recover nonce bytes from a display block: the exact inverse of
    /// [`beautify`](Self::beautify).
    ///
    /// A missing tag or a malformed payload is an error; this never returns
    /// partial or garbage bytes.
    pub fn uglify(&self, text: &str) -> Result<Nonce, Error> {
        let inner = armor::find(text, &self.begin_tag, &self.end_tag)?;
        let stripped = armor::strip_whitespace(inner);
        let bytes = codec::decode(&self.encoding, &stripped)?;

        debug!(len = bytes.len(), "recovered nonce from display block");
        Ok(Nonce::from(bytes))
    }

    /// True while `issued_at_ms` (epoch milliseconds) is younger than the
    /// expiration window.
    ///
    /// Strict less-than: an age exactly equal to the window is already
    /// expired. A timestamp ahead of the clock reads as age zero.
    pub fn check_time(&self, issued_at_ms: u64) -> bool {
        let now = self.clock.epoch_millis();
        now.saturating_sub(issued_at_ms) < self.expiration.as_millis() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_block_layout() {
        let format = TokenFormat::new();
        let nonce = Nonce::from(vec![0u8; DEFAULT_NONCE_SIZE]);
        let block = format.beautify(&nonce);

        let lines: Vec<&str> = block.split_terminator('\n').collect();
        // begin tag + six payload lines (128 bytes -> 172 base64 chars) + end tag
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], DEFAULT_BEGIN_TAG);
        assert_eq!(lines[7], DEFAULT_END_TAG);
        assert!(lines[1..6].iter().all(|line| line.len() == 32));
        assert_eq!(lines[6].len(), 12);
        assert!(block.ends_with('\n'));
    }

    #[test]
    fn round_trip_fixed_nonce() {
        let format = TokenFormat::new();
        let nonce = Nonce::from((0u8..128).collect::<Vec<u8>>());

        let block = format.beautify(&nonce);
        assert_eq!(format.uglify(&block).unwrap(), nonce);
    }

    #[test]
    fn uglify_rejects_missing_end_tag() {
        let format = TokenFormat::new();
        let nonce = Nonce::from(vec![7u8; 128]);

        let block = format.beautify(&nonce);
        let truncated = &block[..block.len() - DEFAULT_END_TAG.len() - 1];

        let result = format.uglify(truncated);
        assert!(matches!(result, Err(Error::EndTagNotFound(_))));
    }

    #[test]
    fn uglify_rejects_corrupt_payload() {
        let format = TokenFormat::new();
        let nonce = Nonce::from(vec![7u8; 128]);

        // '!' is outside the base64 alphabet
        let mut block = format.beautify(&nonce);
        let payload_start = block.find('\n').unwrap() + 1;
        block.replace_range(payload_start..payload_start + 1, "!");

        let result = format.uglify(&block);
        assert!(matches!(result, Err(Error::Decode(_))));
    }

    #[test]
    fn freshness_window_is_strict() {
        let window = DEFAULT_EXPIRATION.as_millis() as u64;
        let now = 10 * window;
        let format = TokenFormat::new().with_clock(ClockSource::new_mock(now));

        assert!(format.check_time(now - window + 1));
        assert!(!format.check_time(now - window)); // boundary: expired
        assert!(!format.check_time(now - window - 1));
    }

    #[test]
    fn future_timestamp_is_fresh() {
        let format = TokenFormat::new().with_clock(ClockSource::new_mock(1_000));
        assert!(format.check_time(2_000));
    }

    #[test]
    #[should_panic(expected = "nonce size must be non-zero")]
    fn zero_nonce_size_panics() {
        TokenFormat::new().with_nonce_size(0);
    }

    #[test]
    #[should_panic(expected = "wrap width must be non-zero")]
    fn zero_wrap_width_panics() {
        TokenFormat::new().with_wrap_width(0);
    }
}
