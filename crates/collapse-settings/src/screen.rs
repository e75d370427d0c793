// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Launcher screen settings (window mode + graphics API) for a game install.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::value::SettingsValue;

/// Graphics API the game is launched with.
///
/// Stored on the wire as its `u8` discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum GraphicsApi {
    /// DirectX 11 (feature level 10.1).
    Dx11Level101 = 0,
    /// DirectX 11 (feature level 11.0), no single-thread.
    Dx11Level110NoSingleThread = 1,
    /// DirectX 11 (feature level 11.1).
    Dx11Level111 = 2,
    /// DirectX 11 (feature level 11.1), no single-thread.
    #[default]
    Dx11Level111NoSingleThread = 3,
    /// DirectX 12 (feature level 12.0), experimental.
    Dx12Level120 = 4,
}

impl GraphicsApi {
    /// Every mode, ordered by wire value.
    pub const ALL: [Self; 5] = [
        Self::Dx11Level101,
        Self::Dx11Level110NoSingleThread,
        Self::Dx11Level111,
        Self::Dx11Level111NoSingleThread,
        Self::Dx12Level120,
    ];

    /// Wire value of this mode.
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Human-readable name.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Dx11Level101 => "DirectX 11 (Feature Level: 10.1)",
            Self::Dx11Level110NoSingleThread => "DirectX 11 (Feature Level: 11.0) No Single-thread",
            Self::Dx11Level111 => "DirectX 11 (Feature Level: 11.1)",
            Self::Dx11Level111NoSingleThread => "DirectX 11 (Feature Level: 11.1) No Single-thread",
            Self::Dx12Level120 => "DirectX 12 (Feature Level: 12.0) [Experimental]",
        }
    }
}

impl fmt::Display for GraphicsApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Wire value outside the known graphics API range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown graphics API value {0} (expected 0..=4)")]
pub struct UnknownGraphicsApi(pub u8);

impl TryFrom<u8> for GraphicsApi {
    type Error = UnknownGraphicsApi;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(usize::from(value))
            .copied()
            .ok_or(UnknownGraphicsApi(value))
    }
}

impl From<GraphicsApi> for u8 {
    fn from(api: GraphicsApi) -> Self {
        api.as_u8()
    }
}

/// Screen settings persisted under [`ScreenSettings::VALUE_NAME`].
///
/// Equality ignores [`use_borderless_screen`](Self::use_borderless_screen);
/// two records that differ only in that flag compare equal.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ScreenSettings {
    /// Run the game at a custom resolution.
    #[serde(rename = "UseCustomResolution")]
    pub use_custom_resolution: bool,
    /// Run the game in exclusive fullscreen.
    #[serde(rename = "UseExclusiveFullscreen")]
    pub use_exclusive_fullscreen: bool,
    /// Run the game in a borderless window.
    #[serde(rename = "UseBorderlessScreen")]
    pub use_borderless_screen: bool,
    /// Graphics API used to launch the game.
    #[serde(rename = "GameGraphicsAPI")]
    pub graphics_api: GraphicsApi,
}

impl PartialEq for ScreenSettings {
    fn eq(&self, other: &Self) -> bool {
        self.use_custom_resolution == other.use_custom_resolution
            && self.use_exclusive_fullscreen == other.use_exclusive_fullscreen
            && self.graphics_api == other.graphics_api
    }
}

impl Eq for ScreenSettings {}

impl SettingsValue for ScreenSettings {
    const VALUE_NAME: &'static str = "CollapseLauncher_ScreenSetting";
}
