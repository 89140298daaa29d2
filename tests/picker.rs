//! Integration tests for the spinner: selection and rotation.

use party_picker::logic::SPIN_EASING;
use party_picker::{
    calculate_spin_rotation, create_spin_animation, default_picker_items, select_random_item,
    select_weighted_random_item, spin, PickerItem, SpinAnimation, SpinnerState, DEFAULT_SPINS,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;

fn weighted(weights: &[Option<f64>]) -> Vec<PickerItem> {
    weights
        .iter()
        .enumerate()
        .map(|(i, w)| {
            let item = PickerItem::new(format!("item-{i}"), format!("Item {i}"));
            match w {
                Some(w) => item.with_weight(*w),
                None => item,
            }
        })
        .collect()
}

fn tally(items: &[PickerItem], trials: usize, seed: u64) -> HashMap<String, usize> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut counts = HashMap::new();
    for _ in 0..trials {
        let picked = select_weighted_random_item(items, &mut rng).unwrap();
        *counts.entry(picked.id.clone()).or_insert(0) += 1;
    }
    counts
}

#[test]
fn rotation_centers_the_item_under_the_pointer() {
    assert_eq!(calculate_spin_rotation(0, 4, 3), 1395.0);
    assert_eq!(calculate_spin_rotation(1, 4, 3), 1305.0);
    assert_eq!(calculate_spin_rotation(3, 4, 0), 45.0);
    assert_eq!(calculate_spin_rotation(0, 1, 1), 540.0);
}

#[test]
fn rotation_is_deterministic_and_grows_by_a_full_turn_per_spin() {
    for total in [3usize, 7, 12] {
        for index in 0..total {
            let a = calculate_spin_rotation(index, total, DEFAULT_SPINS);
            let b = calculate_spin_rotation(index, total, DEFAULT_SPINS);
            assert_eq!(a.to_bits(), b.to_bits());
            for spins in 0..6 {
                let diff = calculate_spin_rotation(index, total, spins + 1)
                    - calculate_spin_rotation(index, total, spins);
                assert!((diff - 360.0).abs() < 1e-9, "diff {diff}");
            }
        }
    }
}

#[test]
fn random_pick_of_empty_list_is_none() {
    let mut rng = StdRng::seed_from_u64(1);
    let empty: Vec<u32> = Vec::new();
    assert_eq!(select_random_item(&empty, &mut rng), None);
    assert!(select_weighted_random_item(&[], &mut rng).is_none());
}

#[test]
fn random_pick_is_roughly_uniform() {
    let items = ["a", "b", "c", "d"];
    let mut rng = StdRng::seed_from_u64(99);
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for _ in 0..40_000 {
        let picked = select_random_item(&items, &mut rng).unwrap();
        *counts.entry(*picked).or_insert(0) += 1;
    }
    for item in items {
        let n = counts[item];
        assert!((9_400..10_600).contains(&n), "{item}: {n}");
    }
}

#[test]
fn same_seed_gives_same_pick() {
    let items = default_picker_items();
    let first = select_weighted_random_item(&items, &mut StdRng::seed_from_u64(5)).cloned();
    let second = select_weighted_random_item(&items, &mut StdRng::seed_from_u64(5)).cloned();
    assert_eq!(first, second);
}

#[test]
fn equal_weights_converge_to_uniform() {
    let items = weighted(&[Some(1.0), None, Some(1.0), None, Some(1.0)]);
    let counts = tally(&items, 50_000, 11);
    for item in &items {
        let n = counts.get(&item.id).copied().unwrap_or(0);
        assert!((9_300..10_700).contains(&n), "{}: {n}", item.id);
    }
}

#[test]
fn zero_weight_item_is_never_picked() {
    let items = weighted(&[Some(2.0), Some(0.0), Some(1.0)]);
    let counts = tally(&items, 20_000, 3);
    assert_eq!(counts.get("item-1"), None);

    let items = weighted(&[Some(0.0), Some(1.0), Some(0.0)]);
    let counts = tally(&items, 20_000, 4);
    assert_eq!(counts.get("item-1"), Some(&20_000));
}

#[test]
fn heavier_items_are_picked_proportionally() {
    let items = weighted(&[Some(3.0), Some(1.0)]);
    let counts = tally(&items, 40_000, 8);
    let heavy = counts["item-0"] as f64 / 40_000.0;
    assert!((0.73..0.77).contains(&heavy), "heavy share {heavy}");
}

#[test]
fn all_zero_weights_fall_back_to_last_item() {
    let items = weighted(&[Some(0.0), Some(0.0), Some(-2.0)]);
    let mut rng = StdRng::seed_from_u64(0);
    let picked = select_weighted_random_item(&items, &mut rng).unwrap();
    assert_eq!(picked.id, "item-2");
}

#[test]
fn overflowing_weights_still_skip_zero_weight_items() {
    let items = weighted(&[Some(1e308), Some(1e308), Some(0.0)]);
    let counts = tally(&items, 10_000, 17);
    assert_eq!(counts.get("item-2"), None);
    let first = counts.get("item-0").copied().unwrap_or(0);
    assert!((4_500..5_500).contains(&first), "item-0: {first}");
}

#[test]
fn effective_weight_defaults_to_one() {
    assert_eq!(PickerItem::new("a", "A").effective_weight(), 1.0);
    assert_eq!(PickerItem::new("a", "A").with_weight(2.5).effective_weight(), 2.5);
    assert_eq!(PickerItem::new("a", "A").with_weight(-1.0).effective_weight(), 0.0);
    assert_eq!(PickerItem::new("a", "A").with_weight(f64::NAN).effective_weight(), 0.0);
    let infinite = PickerItem::new("a", "A").with_weight(f64::INFINITY);
    assert_eq!(infinite.effective_weight(), 0.0);
}

#[test]
fn spin_returns_selection_with_matching_rotation() {
    let items = default_picker_items();
    let mut rng = StdRng::seed_from_u64(21);
    let (index, state) = spin(&items, 5, &mut rng);

    let index = index.unwrap();
    assert!(!state.is_spinning);
    assert_eq!(state.selected_item.as_ref(), Some(&items[index]));
    assert_eq!(state.rotation, calculate_spin_rotation(index, items.len(), 5));
}

#[test]
fn spin_of_empty_wheel_selects_nothing() {
    let mut rng = StdRng::seed_from_u64(21);
    let (index, state) = spin(&[], DEFAULT_SPINS, &mut rng);
    assert_eq!(index, None);
    assert_eq!(state, SpinnerState::default());
}

#[test]
fn spin_animation_uses_smooth_deceleration() {
    let animation = create_spin_animation(4500);
    assert_eq!(animation.duration_ms, 4500);
    assert_eq!(animation.easing, SPIN_EASING);
    assert_eq!(SpinAnimation::default().duration_ms, 3000);
}

#[test]
fn default_items_have_unique_ids_and_colors() {
    let items = default_picker_items();
    assert_eq!(items.len(), 8);
    let mut ids: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 8);
    assert!(items.iter().all(|i| i.color.is_some() && i.weight.is_none()));
}
