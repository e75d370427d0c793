// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Record and blob fixtures.

use collapse_settings::framing::TERMINATOR;
use collapse_settings::{GraphicsApi, ScreenSettings};

/// Wire payload of `ScreenSettings::default()`, without terminator.
pub const DEFAULT_SCREEN_PAYLOAD: &str = r#"{"UseCustomResolution":false,"UseExclusiveFullscreen":false,"UseBorderlessScreen":false,"GameGraphicsAPI":3}"#;

/// Representative non-default record: `{true, true, false, 0}`.
pub const NON_DEFAULT_SCREEN: ScreenSettings = ScreenSettings {
    use_custom_resolution: true,
    use_exclusive_fullscreen: true,
    use_borderless_screen: false,
    graphics_api: GraphicsApi::Dx11Level101,
};

/// Append the terminator to `payload`.
pub fn frame(payload: impl AsRef<[u8]>) -> Vec<u8> {
    let mut blob = payload.as_ref().to_vec();
    blob.push(TERMINATOR);
    blob
}

/// Every valid screen settings record (2 × 2 × 2 × 5 combinations).
pub fn all_screen_settings() -> Vec<ScreenSettings> {
    let flags = [false, true];
    let mut out = Vec::with_capacity(40);
    for use_custom_resolution in flags {
        for use_exclusive_fullscreen in flags {
            for use_borderless_screen in flags {
                for graphics_api in GraphicsApi::ALL {
                    out.push(ScreenSettings {
                        use_custom_resolution,
                        use_exclusive_fullscreen,
                        use_borderless_screen,
                        graphics_api,
                    });
                }
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_appends_single_terminator() {
        assert_eq!(frame("{}"), b"{}\0".to_vec());
    }

    #[test]
    fn combinations_are_exhaustive() {
        let all = all_screen_settings();
        assert_eq!(all.len(), 40);
        assert_eq!(all.iter().filter(|s| s.use_borderless_screen).count(), 20);
    }
}
