//! Spinner wheel: random and weighted selection, and the rotation that lands the wheel
//! on the chosen slice.

use crate::models::{PickerItem, SpinAnimation, SpinnerState};
use rand::Rng;

/// Full revolutions before the wheel settles.
pub const DEFAULT_SPINS: u32 = 3;

/// Default spin duration.
pub const DEFAULT_SPIN_DURATION_MS: u32 = 3000;

/// Smooth deceleration curve.
pub const SPIN_EASING: &str = "cubic-bezier(0.23, 1, 0.32, 1)";

/// Pick one element uniformly: index `floor(draw * len)` for a draw in [0, 1).
pub fn select_random_item<'a, T, R: Rng + ?Sized>(items: &'a [T], rng: &mut R) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    let draw: f64 = rng.gen();
    let index = ((draw * items.len() as f64) as usize).min(items.len() - 1);
    items.get(index)
}

/// Pick one item with probability proportional to its weight (absent weight = 1).
///
/// Draws r in [0, total) and walks the list subtracting weights; the first item with a
/// positive weight that brings r to <= 0 wins. Weights whose sum overflows are scaled by
/// the largest weight first. Falls back to the last positive-weight item if rounding leaves
/// r above zero, and to the last item if every weight is zero.
pub fn select_weighted_random_item<'a, R: Rng + ?Sized>(
    items: &'a [PickerItem],
    rng: &mut R,
) -> Option<&'a PickerItem> {
    let last = items.last()?;
    let positive = items.iter().rev().find(|item| item.effective_weight() > 0.0);
    let Some(last_positive) = positive else {
        return Some(last);
    };

    let mut total: f64 = items.iter().map(PickerItem::effective_weight).sum();
    let mut scale = 1.0;
    if !total.is_finite() {
        scale = items
            .iter()
            .map(PickerItem::effective_weight)
            .fold(0.0, f64::max);
        total = items.iter().map(|item| item.effective_weight() / scale).sum();
    }

    let mut remaining = rng.gen::<f64>() * total;
    for item in items {
        let weight = item.effective_weight() / scale;
        if weight <= 0.0 {
            continue;
        }
        remaining -= weight;
        if remaining <= 0.0 {
            return Some(item);
        }
    }
    Some(last_positive)
}

/// Final wheel rotation in degrees that centers `selected_index` under a pointer fixed at
/// the top, after `spins` full revolutions.
pub fn calculate_spin_rotation(selected_index: usize, total_items: usize, spins: u32) -> f64 {
    let angle_per_item = 360.0 / total_items as f64;
    let target_angle = 360.0 - (selected_index as f64 * angle_per_item + angle_per_item / 2.0);
    spins as f64 * 360.0 + target_angle
}

/// Weighted pick plus the rotation to show it. Empty input yields no selection and no rotation.
pub fn spin<R: Rng + ?Sized>(
    items: &[PickerItem],
    spins: u32,
    rng: &mut R,
) -> (Option<usize>, SpinnerState) {
    let Some(selected) = select_weighted_random_item(items, rng) else {
        return (None, SpinnerState::default());
    };
    let index = items
        .iter()
        .position(|item| std::ptr::eq(item, selected))
        .unwrap_or(items.len() - 1);
    let rotation = calculate_spin_rotation(index, items.len(), spins);
    log::debug!("Spin landed on {} (index {}, rotation {})", selected.id, index, rotation);
    (
        Some(index),
        SpinnerState {
            is_spinning: false,
            selected_item: Some(selected.clone()),
            rotation,
        },
    )
}

/// Animation parameters for a spin of `duration_ms`.
pub fn create_spin_animation(duration_ms: u32) -> SpinAnimation {
    SpinAnimation {
        duration_ms,
        easing: SPIN_EASING.to_string(),
    }
}

impl Default for SpinAnimation {
    fn default() -> Self {
        create_spin_animation(DEFAULT_SPIN_DURATION_MS)
    }
}

/// Built-in character wheel.
pub fn default_picker_items() -> Vec<PickerItem> {
    [
        ("mario", "Mario", "#FF0000"),
        ("luigi", "Luigi", "#00FF00"),
        ("peach", "Princess Peach", "#FFB6C1"),
        ("bowser", "Bowser", "#8B4513"),
        ("yoshi", "Yoshi", "#32CD32"),
        ("toad", "Toad", "#FF69B4"),
        ("koopa", "Koopa Troopa", "#90EE90"),
        ("shy-guy", "Shy Guy", "#FF6347"),
    ]
    .into_iter()
    .map(|(id, label, color)| PickerItem::new(id, label).with_color(color))
    .collect()
}
