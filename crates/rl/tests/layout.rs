use physics::{DVec2, Rect};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rl::layout::{obstacles_for, pick_target_slot, slot_center};
use rl::{generate_layout, EnvConfig, Layout, Row, RowConfiguration, Slot, SLOTS_PER_ROW};

#[test]
fn target_row_always_has_an_empty_target_slot() {
    let config = EnvConfig::default();
    for seed in 0..2000 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let layout = generate_layout(&mut rng, &config);
        let slot = layout.target_slot.expect("generated layouts are slot based");

        assert!(!layout.rows.is_full(slot.row), "seed {seed}");
        assert!(!layout.rows.row(slot.row)[slot.index], "seed {seed}");
        assert!(slot.index < SLOTS_PER_ROW);
        assert!(layout.obstacles.len() <= 9, "seed {seed}");
        assert_eq!(layout.obstacles.len(), layout.rows.occupied_count());
        assert_eq!(layout.target, slot_center(slot, &config));
    }
}

#[test]
fn other_row_may_stay_full() {
    let config = EnvConfig::default();
    let mut saw_full_other_row = false;
    let mut saw_rows = [false; 2];
    for seed in 0..2000 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let layout = generate_layout(&mut rng, &config);
        let slot = layout.target_slot.unwrap();
        saw_rows[slot.row.index()] = true;
        let other = if slot.row == Row::Upper { Row::Lower } else { Row::Upper };
        saw_full_other_row |= layout.rows.is_full(other);
    }
    assert!(saw_full_other_row);
    assert_eq!(saw_rows, [true, true]);
}

#[test]
fn same_seed_gives_same_layout() {
    let config = EnvConfig::default();
    let a = generate_layout(&mut ChaCha8Rng::seed_from_u64(99), &config);
    let b = generate_layout(&mut ChaCha8Rng::seed_from_u64(99), &config);
    assert_eq!(a, b);
}

#[test]
fn slot_centres_follow_the_lane_pitch() {
    let config = EnvConfig::default();
    assert_eq!(slot_center(Slot { row: Row::Upper, index: 0 }, &config), DVec2::new(80.0, 80.0));
    assert_eq!(slot_center(Slot { row: Row::Upper, index: 1 }, &config), DVec2::new(240.0, 80.0));
    assert_eq!(slot_center(Slot { row: Row::Lower, index: 2 }, &config), DVec2::new(400.0, 520.0));
    assert_eq!(slot_center(Slot { row: Row::Lower, index: 4 }, &config), DVec2::new(720.0, 520.0));
}

#[test]
fn parked_cars_are_inset_within_their_slots() {
    let config = EnvConfig::default();
    let rows = RowConfiguration {
        upper: [true, false, false, false, false],
        lower: [false, false, false, false, true],
    };
    assert_eq!(
        obstacles_for(&rows, &config),
        vec![Rect::new(30.0, 5.0, 100.0, 170.0), Rect::new(670.0, 425.0, 100.0, 170.0)]
    );
}

#[test]
fn layout_from_rows_places_target_and_cars() {
    let config = EnvConfig::default();
    let rows = RowConfiguration {
        upper: [true, true, false, true, true],
        lower: [true; SLOTS_PER_ROW],
    };
    let layout = Layout::from_rows(rows, Slot { row: Row::Upper, index: 2 }, &config);
    assert_eq!(layout.target, DVec2::new(400.0, 80.0));
    assert_eq!(layout.obstacles.len(), 9);
    assert_eq!(layout.rows.empty_slots(Row::Upper), vec![2]);
    assert!(layout.rows.is_full(Row::Lower));
}

#[test]
fn row_configuration_renders_compactly() {
    let rows = RowConfiguration {
        upper: [true, false, true, false, false],
        lower: [false, false, false, true, true],
    };
    assert_eq!(rows.to_string(), "upper=[X.X..] lower=[...XX]");
}

#[test]
fn full_target_row_frees_the_chosen_slot() {
    for seed in 0..50 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut rows = RowConfiguration { upper: [true; SLOTS_PER_ROW], lower: [true; SLOTS_PER_ROW] };
        let index = pick_target_slot(&mut rows, Row::Lower, &mut rng);
        assert_eq!(rows.empty_slots(Row::Lower), vec![index]);
        assert!(rows.is_full(Row::Upper));
    }
}

#[test]
fn target_slot_is_one_of_the_free_ones() {
    let mut seen = [false; SLOTS_PER_ROW];
    for seed in 0..200 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut rows = RowConfiguration { upper: [false, true, false, true, true], lower: [true; SLOTS_PER_ROW] };
        let before = rows;
        let index = pick_target_slot(&mut rows, Row::Upper, &mut rng);
        assert_eq!(rows, before);
        assert!(index == 0 || index == 2, "slot {index}");
        seen[index] = true;
    }
    assert!(seen[0] && seen[2]);
}
