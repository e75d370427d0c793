// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Blob framing: UTF-8 JSON payload followed by a single NUL terminator.
//!
//! ```text
//! blob = json_utf8 ++ [0x00]
//! ```
//!
//! The terminator is a sentinel, not part of the payload. JSON never contains
//! a raw NUL, so any `0x00` before the last byte is a framing violation.

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

use crate::error::SettingsError;

/// Sentinel byte closing every stored blob.
pub const TERMINATOR: u8 = 0x00;

/// Blob does not follow the `payload ++ 0x00` layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FramingViolation {
    /// Zero-length blob; not even the terminator is present.
    #[error("blob is empty")]
    Empty,
    /// Last byte is not the terminator.
    #[error("blob of {len} bytes does not end with a NUL terminator")]
    MissingTerminator {
        /// Blob length.
        len: usize,
    },
    /// A terminator appears inside the payload.
    #[error("unexpected NUL at offset {offset} inside payload")]
    InteriorTerminator {
        /// Offset of the first stray NUL.
        offset: usize,
    },
}

/// Split a stored blob into its payload, validating the terminator.
pub fn payload(blob: &[u8]) -> Result<&[u8], FramingViolation> {
    let Some((&last, body)) = blob.split_last() else {
        return Err(FramingViolation::Empty);
    };
    if last != TERMINATOR {
        return Err(FramingViolation::MissingTerminator { len: blob.len() });
    }
    if let Some(offset) = body.iter().position(|&b| b == TERMINATOR) {
        return Err(FramingViolation::InteriorTerminator { offset });
    }
    Ok(body)
}

/// Serialize `value` to a framed blob.
pub fn encode<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, SettingsError> {
    let mut blob = serde_json::to_vec(value).map_err(SettingsError::Encode)?;
    blob.push(TERMINATOR);
    Ok(blob)
}

/// Decode a framed blob. The whole value decodes or an error is returned.
pub fn decode<T: DeserializeOwned>(blob: &[u8]) -> Result<T, SettingsError> {
    decode_payload(payload(blob)?)
}

/// Decode an already unframed payload (see [`payload`]).
pub fn decode_payload<T: DeserializeOwned>(body: &[u8]) -> Result<T, SettingsError> {
    serde_json::from_slice(body).map_err(SettingsError::Decode)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::screen::{GraphicsApi, ScreenSettings};

    const DEFAULT_PAYLOAD: &[u8] = br#"{"UseCustomResolution":false,"UseExclusiveFullscreen":false,"UseBorderlessScreen":false,"GameGraphicsAPI":3}"#;

    #[test]
    fn default_record_encodes_exactly() {
        let blob = encode(&ScreenSettings::default()).unwrap();
        let mut expected = DEFAULT_PAYLOAD.to_vec();
        expected.push(0x00);
        assert_eq!(blob, expected);
    }

    #[test]
    fn terminator_is_last_and_only_nul() {
        let blob = encode(&ScreenSettings {
            use_custom_resolution: true,
            graphics_api: GraphicsApi::Dx11Level101,
            ..ScreenSettings::default()
        })
        .unwrap();
        assert_eq!(blob.last(), Some(&TERMINATOR));
        assert_eq!(blob.iter().filter(|&&b| b == TERMINATOR).count(), 1);
    }

    #[test]
    fn payload_strips_terminator() {
        assert_eq!(payload(b"{}\0"), Ok(&b"{}"[..]));
        assert_eq!(payload(b"\0"), Ok(&b""[..]));
    }

    #[test]
    fn payload_rejects_bad_frames() {
        assert_eq!(payload(b""), Err(FramingViolation::Empty));
        assert_eq!(
            payload(b"{}"),
            Err(FramingViolation::MissingTerminator { len: 2 })
        );
        assert_eq!(
            payload(b"{\0}\0"),
            Err(FramingViolation::InteriorTerminator { offset: 1 })
        );
    }

    #[test]
    fn decode_reports_framing_before_json() {
        let err = decode::<ScreenSettings>(DEFAULT_PAYLOAD).unwrap_err();
        assert!(matches!(
            err,
            SettingsError::Framing(FramingViolation::MissingTerminator { .. })
        ));
    }

    #[test]
    fn decode_reports_truncated_payload() {
        let mut blob = DEFAULT_PAYLOAD[..DEFAULT_PAYLOAD.len() / 2].to_vec();
        blob.push(TERMINATOR);
        let err = decode::<ScreenSettings>(&blob).unwrap_err();
        assert!(matches!(err, SettingsError::Decode(_)));
    }

    #[test]
    fn decode_ignores_field_order() {
        let blob = b"{\"GameGraphicsAPI\":4,\"UseBorderlessScreen\":true,\"UseExclusiveFullscreen\":true,\"UseCustomResolution\":false}\0";
        let s: ScreenSettings = decode(blob).unwrap();
        assert!(s.use_borderless_screen);
        assert!(s.use_exclusive_fullscreen);
        assert!(!s.use_custom_resolution);
        assert_eq!(s.graphics_api, GraphicsApi::Dx12Level120);
    }
}
