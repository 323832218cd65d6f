//! Named discount presets.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use kitcalc_core::{DiscountRate, DomainError};

/// Discount shortcut shown next to the discount slider.
///
/// Picking a preset replaces the current rate wholesale. `Custom` keeps whatever
/// rate is already set; it is the state the dashboard lands in when the operator
/// drags the slider directly.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ScenarioPreset {
    #[serde(rename = "No Discount")]
    NoDiscount,
    #[serde(rename = "10% Off")]
    TenOff,
    #[default]
    #[serde(rename = "15% Off")]
    FifteenOff,
    #[serde(rename = "20% Off")]
    TwentyOff,
    Custom,
}

impl ScenarioPreset {
    /// All presets, in button order.
    pub const ALL: [ScenarioPreset; 5] = [
        ScenarioPreset::NoDiscount,
        ScenarioPreset::TenOff,
        ScenarioPreset::FifteenOff,
        ScenarioPreset::TwentyOff,
        ScenarioPreset::Custom,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ScenarioPreset::NoDiscount => "No Discount",
            ScenarioPreset::TenOff => "10% Off",
            ScenarioPreset::FifteenOff => "15% Off",
            ScenarioPreset::TwentyOff => "20% Off",
            ScenarioPreset::Custom => "Custom",
        }
    }

    /// Fixed whole-percent rate, or `None` for `Custom`.
    pub fn percent(&self) -> Option<u32> {
        match self {
            ScenarioPreset::NoDiscount => Some(0),
            ScenarioPreset::TenOff => Some(10),
            ScenarioPreset::FifteenOff => Some(15),
            ScenarioPreset::TwentyOff => Some(20),
            ScenarioPreset::Custom => None,
        }
    }

    /// Fixed rate of this preset, or `None` for `Custom`.
    pub fn rate(&self) -> Option<DiscountRate> {
        match self {
            ScenarioPreset::NoDiscount => Some(DiscountRate::ZERO),
            ScenarioPreset::TenOff => Some(DiscountRate::TEN_PERCENT),
            ScenarioPreset::FifteenOff => Some(DiscountRate::FIFTEEN_PERCENT),
            ScenarioPreset::TwentyOff => Some(DiscountRate::TWENTY_PERCENT),
            ScenarioPreset::Custom => None,
        }
    }

    /// Rate after selecting this preset while `current` is in effect.
    pub fn apply(&self, current: DiscountRate) -> DiscountRate {
        self.rate().unwrap_or(current)
    }
}

impl core::fmt::Display for ScenarioPreset {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ScenarioPreset {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScenarioPreset::ALL
            .into_iter()
            .find(|preset| preset.label() == s)
            .ok_or_else(|| DomainError::validation(format!("unknown scenario preset '{s}'")))
    }
}
