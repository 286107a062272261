use super::constants::{ROLL_DURATION_MS, SPIN_RATE_PER_TICK};
use super::face::{FaceValue, Orientation};
use super::shake::ShakeEdge;
use glam::Vec3;
use rand::prelude::*;
use std::time::Duration;

/// Identity of one rolling session; the resolution timer is keyed to it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RollId(u64);

/// Handed to the host on Idle -> Rolling. The host schedules a one-shot
/// real-time timer for `delay` and then calls [`RollMachine::resolve`] with `id`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RollTicket {
    pub id: RollId,
    pub delay: Duration,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RollOutcome {
    pub id: RollId,
    pub face: FaceValue,
    pub orientation: Orientation,
}

/// Mutable state of the current roll. Read by the renderer every tick.
#[derive(Clone, Debug, PartialEq)]
pub struct RollSession {
    pub rolling: bool,
    pub spin_rate: Vec3,
    pub face: FaceValue,
    pub target_orientation: Orientation,
}

impl Default for RollSession {
    fn default() -> Self {
        let face = FaceValue::default();
        Self {
            rolling: false,
            spin_rate: Vec3::ZERO,
            face,
            target_orientation: face.orientation(),
        }
    }
}

/// Receives each resolved face. Implementations must not block: the
/// outcome is already committed when this is called.
pub trait RollReporter {
    fn report(&self, face: FaceValue);
}

pub struct RollMachine {
    session: RollSession,
    pending: Option<RollId>,
    next_id: u64,
    rng: StdRng,
    reporter: Box<dyn RollReporter>,
}

impl RollMachine {
    pub fn new(seed: u64, reporter: Box<dyn RollReporter>) -> Self {
        Self {
            session: RollSession::default(),
            pending: None,
            next_id: 1,
            rng: StdRng::seed_from_u64(seed),
            reporter,
        }
    }

    #[inline]
    pub fn session(&self) -> &RollSession {
        &self.session
    }

    #[inline]
    pub fn is_rolling(&self) -> bool {
        self.session.rolling
    }

    /// Pending roll, if any.
    pub fn pending(&self) -> Option<RollId> {
        self.pending
    }

    /// Idle -> Rolling. Edges arriving while rolling are dropped and yield `None`.
    pub fn on_shake(&mut self, edge: ShakeEdge) -> Option<RollTicket> {
        if self.session.rolling {
            log::debug!("[roll] shake ({:.1}) ignored while rolling", edge.magnitude);
            return None;
        }
        let id = RollId(self.next_id);
        self.next_id += 1;
        self.session.rolling = true;
        self.session.spin_rate = Vec3::splat(SPIN_RATE_PER_TICK);
        self.pending = Some(id);
        log::info!("[roll] #{} started (shake {:.1})", id.0, edge.magnitude);
        Some(RollTicket {
            id,
            delay: Duration::from_millis(ROLL_DURATION_MS as u64),
        })
    }

    /// Rolling -> Idle for the session `id`. Stale or unknown ids are ignored.
    ///
    /// The reporter is invoked exactly once per resolved roll, after the
    /// session has already settled.
    pub fn resolve(&mut self, id: RollId) -> Option<RollOutcome> {
        if self.pending != Some(id) {
            log::debug!("[roll] stale resolution #{} ignored", id.0);
            return None;
        }
        self.pending = None;
        let face = FaceValue::ALL[self.rng.gen_range(0..FaceValue::ALL.len())];
        let orientation = face.orientation();
        self.session = RollSession {
            rolling: false,
            spin_rate: Vec3::ZERO,
            face,
            target_orientation: orientation,
        };
        log::info!("[roll] #{} settled on {}", id.0, face);
        self.reporter.report(face);
        Some(RollOutcome {
            id,
            face,
            orientation,
        })
    }
}
