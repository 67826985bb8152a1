use std::f64::consts::PI;

use pulsewatch::core::{ManualClock, RhythmMode, ScriptedRandom, SeededRandom};
use pulsewatch::nodes::ReadingGenerator;

fn scripted(values: Vec<f64>) -> ReadingGenerator {
    ReadingGenerator::with_sources(ScriptedRandom::new(values), ManualClock::new(1_000, 100))
}

fn mean_heart_rate(generator: &mut ReadingGenerator, count: usize) -> f64 {
    (0..count).map(|_| generator.next_reading().heart_rate).sum::<f64>() / count as f64
}

#[test]
fn test_centered_draws_give_exact_reading() {
    let mut generator = scripted(vec![0.5]);

    let reading = generator.next_reading();
    assert_eq!(reading.timestamp, 1_000);
    assert_eq!(reading.heart_rate, 75.0);
    assert_eq!(reading.r_peak_interval, 800.0);
    assert_eq!(reading.oxygen_saturation, 98.0);
    assert_eq!(reading.motion_artifact, 0.0);
    let expected_ppg = (0.25 * PI).sin() * 1000.0 + 2000.0;
    assert!((reading.ppg_value - expected_ppg).abs() < 1e-9);

    assert_eq!(generator.next_reading().timestamp, 1_100);
}

#[test]
fn test_phase_tracks_instantaneous_rate() {
    let mut generator = scripted(vec![0.5]);

    for n in 1..=20 {
        generator.next_reading();
        let expected = n as f64 * 75.0 / 60.0 * 2.0 * PI * 0.1;
        assert!((generator.phase() - expected).abs() < 1e-9);
    }

    generator.set_mode(RhythmMode::Tachycardia);
    let before = generator.phase();
    generator.next_reading();
    let step = generator.phase() - before;
    assert!((step - 115.0 / 60.0 * 2.0 * PI * 0.1).abs() < 1e-9);
}

#[test]
fn test_premature_beat_shortens_rate_and_interval() {
    // hr noise, pvc roll, ppg noise, rr pvc roll, spo2, motion jitter
    let mut generator = scripted(vec![0.5, 0.05, 0.5, 0.05, 0.5, 0.5]);
    generator.set_mode(RhythmMode::Pvc);

    let reading = generator.next_reading();
    assert!((reading.heart_rate - 50.4).abs() < 1e-9);
    let expected_rr = 60_000.0 / 50.4 * 0.6;
    assert!((reading.r_peak_interval - expected_rr).abs() < 1e-9);
}

#[test]
fn test_pvc_without_roll_is_regular() {
    let mut generator = scripted(vec![0.5, 0.5]);
    generator.set_mode(RhythmMode::Pvc);

    let reading = generator.next_reading();
    assert_eq!(reading.heart_rate, 72.0);
    assert!((reading.r_peak_interval - 60_000.0 / 72.0).abs() < 1e-9);
}

#[test]
fn test_extreme_draws_are_clamped() {
    let mut generator = scripted(vec![0.0]);
    generator.set_mode(RhythmMode::Bradycardia);
    generator.set_motion_level(1.0);

    let reading = generator.next_reading();
    assert_eq!(reading.heart_rate, 30.0);
    assert_eq!(reading.r_peak_interval, 2000.0);
    assert_eq!(reading.oxygen_saturation, 93.0);
    assert!(reading.ppg_value >= 0.0);
}

#[test]
fn test_motion_jitter_is_not_clamped() {
    // hr noise, motion noise, ppg noise, spo2, motion jitter
    let mut generator = scripted(vec![0.5, 0.5, 0.5, 0.5, 0.99]);
    generator.set_motion_level(1.0);

    let reading = generator.next_reading();
    assert!(reading.motion_artifact > 1.0);
    assert_eq!(reading.oxygen_saturation, 95.0);
}

#[test]
fn test_output_bounds_hold_in_every_mode() {
    let mut generator =
        ReadingGenerator::with_sources(SeededRandom::seeded(3), ManualClock::new(0, 100));
    let mut last_timestamp = 0;

    for mode in RhythmMode::ALL {
        generator.set_mode(mode);
        for motion in [0.0, 0.5, 1.0] {
            generator.set_motion_level(motion);
            for _ in 0..500 {
                let r = generator.next_reading();
                assert!((30.0..=200.0).contains(&r.heart_rate), "{:?}", r);
                assert!((300.0..=2000.0).contains(&r.r_peak_interval), "{:?}", r);
                assert!((90.0..=100.0).contains(&r.oxygen_saturation), "{:?}", r);
                assert!(r.ppg_value >= 0.0);
                assert!(r.timestamp >= last_timestamp);
                last_timestamp = r.timestamp;
            }
        }
    }
}

#[test]
fn test_mode_shifts_rate_distribution() {
    let mut generator =
        ReadingGenerator::with_sources(SeededRandom::seeded(5), ManualClock::new(0, 100));

    generator.set_mode(RhythmMode::Bradycardia);
    let brady = mean_heart_rate(&mut generator, 500);
    assert!((brady - 45.0).abs() < 1.5, "bradycardia mean {}", brady);

    generator.set_mode(RhythmMode::Tachycardia);
    let tachy = mean_heart_rate(&mut generator, 500);
    assert!((tachy - 115.0).abs() < 1.5, "tachycardia mean {}", tachy);
}

#[test]
fn test_unknown_mode_name_selects_normal() {
    let mut generator = ReadingGenerator::new();
    generator.set_mode(RhythmMode::Afib);

    generator.set_mode_str("ventricular-flutter");
    assert_eq!(generator.mode(), RhythmMode::Normal);
    assert_eq!(generator.base_heart_rate(), 75.0);
    assert_eq!(generator.noise_level(), 0.1);

    generator.set_mode_str("tachycardia");
    assert_eq!(generator.mode(), RhythmMode::Tachycardia);
}

#[test]
fn test_motion_level_clamps_and_is_idempotent() {
    let mut generator = ReadingGenerator::new();

    generator.set_motion_level(1.7);
    assert_eq!(generator.motion_level(), 1.0);
    generator.set_motion_level(-0.2);
    assert_eq!(generator.motion_level(), 0.0);

    let mut a = scripted(vec![0.2, 0.8, 0.4, 0.6, 0.1]);
    let mut b = scripted(vec![0.2, 0.8, 0.4, 0.6, 0.1]);
    a.set_motion_level(0.6);
    b.set_motion_level(0.6);
    b.set_motion_level(0.6);
    for _ in 0..10 {
        assert_eq!(a.next_reading(), b.next_reading());
    }
}
