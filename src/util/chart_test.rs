use super::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

// =============================================================
// DoughnutChart data and arcs
// =============================================================

#[test]
fn chart_data_sums_to_one_hundred() {
    for score in [0_u8, 1, 39, 40, 65, 80, 99, 100] {
        let mut slot = ChartSlot::default();
        slot.replace(score);
        let data = slot.current().unwrap().data();
        assert_eq!(data, [score, 100 - score]);
        assert_eq!(u32::from(data[0]) + u32::from(data[1]), 100);
    }
}

#[test]
fn arcs_start_at_twelve_oclock_and_cover_full_circle() {
    let mut slot = ChartSlot::default();
    slot.replace(25);
    let [score_arc, rest_arc] = slot.current().unwrap().arcs();
    assert!(approx(score_arc.start, -FRAC_PI_2));
    assert!(approx(score_arc.sweep(), TAU * 0.25));
    assert!(approx(rest_arc.start, score_arc.end));
    assert!(approx(score_arc.sweep() + rest_arc.sweep(), TAU));
}

#[test]
fn zero_and_full_scores_produce_an_empty_segment() {
    let mut slot = ChartSlot::default();
    slot.replace(0);
    assert!(approx(slot.current().unwrap().arcs()[0].sweep(), 0.0));
    slot.replace(100);
    assert!(approx(slot.current().unwrap().arcs()[1].sweep(), 0.0));
}

// =============================================================
// ChartSlot lifecycle
// =============================================================

#[test]
fn empty_slot_has_no_live_instances() {
    let slot = ChartSlot::default();
    assert_eq!(slot.live_instances(), 0);
    assert!(slot.current().is_none());
}

#[test]
fn replace_releases_previous_instance() {
    let mut slot = ChartSlot::default();
    assert!(slot.replace(50).is_none());
    let first_id = slot.current().unwrap().id();

    let released = slot.replace(70).unwrap();
    assert_eq!(released.id(), first_id);
    assert_eq!(released.score(), 50);
    assert_eq!(slot.current().unwrap().score(), 70);
    assert_ne!(slot.current().unwrap().id(), first_id);
}

#[test]
fn repeated_replacements_keep_one_live_instance() {
    let mut slot = ChartSlot::default();
    for score in 0..=100 {
        slot.replace(score);
        assert_eq!(slot.live_instances(), 1);
    }
    assert_eq!(slot.current().unwrap().id(), 101);
}

#[test]
fn release_empties_slot() {
    let mut slot = ChartSlot::default();
    slot.replace(10);
    assert_eq!(slot.release().map(|chart| chart.score()), Some(10));
    assert_eq!(slot.live_instances(), 0);
}
