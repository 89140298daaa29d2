//! Picker items, spinner state, and raw track records.

use serde::{Deserialize, Serialize};

/// One slice of the spinner wheel.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PickerItem {
    pub id: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Relative selection weight; absent means 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

impl PickerItem {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            color: None,
            weight: None,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }

    /// Weight used for selection. Absent weights count as 1; negative, NaN, or infinite
    /// weights count as 0.
    pub fn effective_weight(&self) -> f64 {
        match self.weight {
            None => 1.0,
            Some(w) if !w.is_finite() || w < 0.0 => 0.0,
            Some(w) => w,
        }
    }
}

/// Wheel state handed to the animation layer.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SpinnerState {
    pub is_spinning: bool,
    pub selected_item: Option<PickerItem>,
    /// Final rotation in degrees.
    pub rotation: f64,
}

/// Animation parameters for the wheel (CSS transition values).
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct SpinAnimation {
    pub duration_ms: u32,
    pub easing: String,
}

/// Raw record from the track data resource.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TrackRecord {
    pub name: String,
    /// Bonus (DLC) content rather than base game.
    #[serde(default, alias = "isBonus", alias = "bonus")]
    pub is_bonus: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cup: Option<String>,
}

impl TrackRecord {
    pub fn base(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_bonus: false,
            cup: None,
        }
    }

    pub fn bonus(name: impl Into<String>) -> Self {
        Self {
            is_bonus: true,
            ..Self::base(name)
        }
    }
}
