//! Byte/text codec over a configurable encoding

use data_encoding::Encoding;

use crate::error::Error;

/// Encode bytes into their text representation. Total: never fails for
/// any byte input.
pub fn encode(encoding: &Encoding, bytes: &[u8]) -> String {
    encoding.encode(bytes)
}

/// Decode text back into bytes. Fails with [`Error::Decode`] when `text`
/// contains characters outside the encoding's alphabet or is incorrectly
/// padded.
pub fn decode(encoding: &Encoding, text: &str) -> Result<Vec<u8>, Error> {
    Ok(encoding.decode(text.as_bytes())?)
}

#[cfg(test)]
mod tests {
    use data_encoding::{BASE64, HEXLOWER};

    use super::*;
    use crate::error::Error;

    #[test]
    fn round_trip_base64() {
        let bytes: Vec<u8> = (0u8..=255).collect();
        let text = encode(&BASE64, &bytes);
        assert_eq!(decode(&BASE64, &text).unwrap(), bytes);
    }

    #[test]
    fn round_trip_empty() {
        assert_eq!(encode(&BASE64, &[]), "");
        assert_eq!(decode(&BASE64, "").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn out_of_alphabet_character_is_rejected() {
        // '!' is not in the base64 alphabet
        let result = decode(&BASE64, "QUJD!A==");
        assert!(matches!(result, Err(Error::Decode(_))));
    }

    #[test]
    fn bad_padding_is_rejected() {
        let result = decode(&BASE64, "QUJDRA");
        assert!(matches!(result, Err(Error::Decode(_))));
    }

    #[test]
    fn alternate_encoding() {
        let text = encode(&HEXLOWER, &[0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(text, "deadbeef");
        assert_eq!(
            decode(&HEXLOWER, &text).unwrap(),
            vec![0xde, 0xad, 0xbe, 0xef]
        );
    }
}
