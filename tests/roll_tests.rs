// Host-side tests for the roll state machine, the spinner and the scoreboard.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod error {
    include!("../src/core/error.rs");
}
mod face {
    include!("../src/core/face.rs");
}
mod report {
    include!("../src/core/report.rs");
}
mod roll {
    include!("../src/core/roll.rs");
}
mod score {
    include!("../src/core/score.rs");
}
mod shake {
    include!("../src/core/shake.rs");
}
mod spin {
    include!("../src/core/spin.rs");
}

use constants::{ROLL_DURATION_MS, SPIN_RATE_PER_TICK};
use error::GameError;
use face::FaceValue;
use glam::Vec3;
use report::RollReply;
use roll::*;
use score::Scoreboard;
use shake::{AccelerationSample, ShakeDetector, ShakeEdge};
use spin::DieSpinner;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

#[derive(Clone, Default)]
struct RecordingReporter {
    faces: Rc<RefCell<Vec<FaceValue>>>,
}

impl RollReporter for RecordingReporter {
    fn report(&self, face: FaceValue) {
        self.faces.borrow_mut().push(face);
    }
}

fn make_machine(seed: u64) -> (RollMachine, Rc<RefCell<Vec<FaceValue>>>) {
    let reporter = RecordingReporter::default();
    let faces = reporter.faces.clone();
    (RollMachine::new(seed, Box::new(reporter)), faces)
}

/// Feeds one sample through detector and machine, like the motion callback does.
fn feed(machine: &mut RollMachine, sample: AccelerationSample) -> Option<RollTicket> {
    let edge = ShakeDetector::default().detect(sample, machine.is_rolling())?;
    machine.on_shake(edge)
}

const EDGE: ShakeEdge = ShakeEdge { magnitude: 30.0 };

#[test]
fn starts_idle_on_face_one() {
    let (m, faces) = make_machine(1);
    let s = m.session();
    assert!(!s.rolling);
    assert_eq!(s.face.get(), 1);
    assert_eq!(s.spin_rate, Vec3::ZERO);
    assert_eq!(s.target_orientation, FaceValue::default().orientation());
    assert!(m.pending().is_none());
    assert!(faces.borrow().is_empty());
}

#[test]
fn shake_edge_starts_rolling_synchronously() {
    let (mut m, _) = make_machine(1);
    let ticket = m.on_shake(EDGE).expect("idle machine accepts the edge");
    assert!(m.is_rolling());
    assert_eq!(m.session().spin_rate, Vec3::splat(SPIN_RATE_PER_TICK));
    assert_ne!(m.session().spin_rate, Vec3::ZERO);
    assert_eq!(ticket.delay, Duration::from_millis(1000));
    assert_eq!(ticket.delay.as_millis() as u32, ROLL_DURATION_MS);
    assert_eq!(m.pending(), Some(ticket.id));
}

#[test]
fn shake_scenario_resolves_to_face_and_reports_once() {
    let (mut m, faces) = make_machine(7);
    let ticket = feed(&mut m, AccelerationSample::new(30.0, 0.0, 0.0)).expect("edge");
    assert!(m.is_rolling());

    // the host fires the one-shot timer after `ticket.delay`
    let outcome = m.resolve(ticket.id).expect("pending roll resolves");
    let s = m.session();
    assert!(!s.rolling);
    assert_eq!(s.spin_rate, Vec3::ZERO);
    assert!((1..=6).contains(&outcome.face.get()));
    assert_eq!(s.face, outcome.face);
    assert_eq!(s.target_orientation, outcome.face.orientation());
    assert_eq!(outcome.orientation, outcome.face.orientation());
    assert_eq!(faces.borrow().as_slice(), &[outcome.face]);
}

#[test]
fn second_sample_five_ms_later_does_not_start_another_roll() {
    let (mut m, _) = make_machine(3);
    let first = feed(&mut m, AccelerationSample::new(30.0, 0.0, 0.0));
    let second = feed(&mut m, AccelerationSample::new(0.0, 31.0, 0.0));
    assert!(first.is_some());
    assert!(second.is_none());
    assert_eq!(m.pending(), first.map(|t| t.id));
}

#[test]
fn edge_while_rolling_is_dropped_without_extending_the_roll() {
    let (mut m, faces) = make_machine(3);
    let ticket = m.on_shake(EDGE).expect("edge");
    assert!(m.on_shake(EDGE).is_none());
    assert_eq!(m.pending(), Some(ticket.id));
    assert!(m.resolve(ticket.id).is_some());
    assert_eq!(faces.borrow().len(), 1);
}

#[test]
fn stale_or_repeated_resolution_is_ignored() {
    let (mut m, faces) = make_machine(11);
    let first = m.on_shake(EDGE).expect("edge");
    assert!(m.resolve(first.id).is_some());
    assert!(m.resolve(first.id).is_none());

    let second = m.on_shake(EDGE).expect("idle again");
    assert_ne!(first.id, second.id);
    assert!(m.resolve(first.id).is_none());
    assert!(m.is_rolling());
    assert!(m.resolve(second.id).is_some());
    assert_eq!(faces.borrow().len(), 2);
}

#[test]
fn faces_are_roughly_uniform() {
    let (mut m, faces) = make_machine(42);
    for _ in 0..6000 {
        let t = m.on_shake(EDGE).expect("idle");
        m.resolve(t.id).expect("pending");
    }
    let mut counts = [0usize; 6];
    for f in faces.borrow().iter() {
        counts[f.index()] += 1;
    }
    for (i, c) in counts.iter().enumerate() {
        assert!((700..=1300).contains(c), "face {} rolled {} times", i + 1, c);
    }
}

#[test]
fn same_seed_gives_same_sequence() {
    let roll_n = |seed| {
        let (mut m, faces) = make_machine(seed);
        for _ in 0..20 {
            let t = m.on_shake(EDGE).expect("idle");
            m.resolve(t.id);
        }
        let out = faces.borrow().clone();
        out
    };
    assert_eq!(roll_n(5), roll_n(5));
}

// ---------------- Spinner ----------------

#[test]
fn spinner_accumulates_without_wrapping_while_rolling() {
    let (mut m, _) = make_machine(1);
    m.on_shake(EDGE).expect("edge");
    let mut spinner = DieSpinner::default();
    for _ in 0..40 {
        spinner.apply(m.session());
    }
    let r = spinner.rotation();
    let expected = 40.0 * SPIN_RATE_PER_TICK;
    assert!(expected > std::f32::consts::TAU);
    assert!((r.x - expected).abs() < 1e-3);
    assert!((r.y - expected).abs() < 1e-3);
    assert!((r.z - expected).abs() < 1e-3);
}

#[test]
fn spinner_snaps_to_target_and_is_idempotent_when_idle() {
    let (mut m, _) = make_machine(9);
    let t = m.on_shake(EDGE).expect("edge");
    let mut spinner = DieSpinner::default();
    for _ in 0..7 {
        spinner.apply(m.session());
    }
    let outcome = m.resolve(t.id).expect("resolves");

    spinner.apply(m.session());
    let first = spinner;
    assert_eq!(first.rotation(), outcome.orientation);
    for _ in 0..10 {
        spinner.apply(m.session());
    }
    assert_eq!(spinner, first);
}

#[test]
fn settled_model_matrix_shows_the_rolled_face() {
    for face in FaceValue::ALL {
        let session = RollSession {
            rolling: false,
            spin_rate: Vec3::ZERO,
            face,
            target_orientation: face.orientation(),
        };
        let mut spinner = DieSpinner::default();
        spinner.apply(&session);
        let toward_camera = spinner.model_matrix().transform_vector3(face.normal());
        assert!(
            (toward_camera - Vec3::Z).length() < 1e-5,
            "face {face} points {toward_camera:?}"
        );
    }
}

// ---------------- Scoreboard ----------------

#[test]
fn scoreboard_records_result_and_successful_balance() {
    let mut score = Scoreboard::default();
    assert_eq!(score.balance(), 0.0);
    assert_eq!(score.result().get(), 1);

    let four = FaceValue::new(4).expect("valid face");
    score.record_roll(four);
    assert!(score.apply_reply(Ok(RollReply { balance: 12.5 })));
    assert_eq!(score.result(), four);
    assert_eq!(score.balance(), 12.5);
    assert_eq!(score.balance_label(), "Balance: 12.5");
    assert_eq!(score.result_label(), "Result: 4");
}

#[test]
fn failed_report_leaves_balance_unchanged() {
    let (mut m, _) = make_machine(21);
    let mut score = Scoreboard::default();
    score.apply_reply(Ok(RollReply { balance: 40.0 }));

    let t = m.on_shake(EDGE).expect("edge");
    let outcome = m.resolve(t.id).expect("resolves");
    score.record_roll(outcome.face);
    let changed = score.apply_reply(Err(GameError::ReportingUnavailable(
        "connection refused".to_string(),
    )));

    assert!(!changed);
    assert_eq!(score.balance(), 40.0);
    // the outcome is not rolled back by the failure
    assert_eq!(score.result(), outcome.face);
    assert!(!m.is_rolling());
}
