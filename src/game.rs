use crate::core::{
    AccelerationSample, RollId, RollMachine, RollTicket, Scoreboard, ShakeDetector, StartGate,
};
use crate::dom;
use crate::motion::MotionSampler;
use crate::view;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Everything the event handlers and the frame loop share on the page's single thread.
pub struct Game {
    pub machine: RollMachine,
    pub detector: ShakeDetector,
    pub gate: StartGate,
    pub score: Rc<RefCell<Scoreboard>>,
    pub sampler: MotionSampler,
    pub document: web::Document,
}

impl Game {
    fn refresh_start_button(&self) {
        let visible = self.gate.button_visible(self.machine.is_rolling());
        view::set_start_button_visible(&self.document, visible);
    }
}

/// Motion callback: detector edge -> machine transition -> schedule resolution.
pub fn on_sample(game: &Rc<RefCell<Game>>, sample: AccelerationSample) {
    let ticket = {
        let mut g = game.borrow_mut();
        let rolling = g.machine.is_rolling();
        let Some(edge) = g.detector.detect(sample, rolling) else {
            return;
        };
        let ticket = g.machine.on_shake(edge);
        if ticket.is_some() {
            g.refresh_start_button();
        }
        ticket
    };
    if let Some(ticket) = ticket {
        schedule_resolution(game, ticket);
    }
}

fn schedule_resolution(game: &Rc<RefCell<Game>>, ticket: RollTicket) {
    let game_timer = game.clone();
    let delay_ms = ticket.delay.as_millis() as i32;
    if let Err(e) = dom::set_timeout_once(delay_ms, move || resolve(&game_timer, ticket.id)) {
        // a roll that can never settle would leave the die spinning forever
        log::error!("[roll] cannot schedule resolution: {:?}; settling now", e);
        resolve(game, ticket.id);
    }
}

/// Timer callback. Runs even if the motion subscription was torn down meanwhile.
pub fn resolve(game: &Rc<RefCell<Game>>, id: RollId) {
    let mut g = game.borrow_mut();
    let Some(outcome) = g.machine.resolve(id) else {
        return;
    };
    g.score.borrow_mut().record_roll(outcome.face);
    view::update_scoreboard(&g.document, &g.score.borrow());
    g.refresh_start_button();
}

/// Permission granted: open the gate and start sampling.
pub fn on_permission_granted(game: &Rc<RefCell<Game>>) {
    log::info!("[motion] DeviceMotionEvent permission granted");
    game.borrow_mut().gate.grant();
    attach_sampler(game);
}

/// Subscribes to motion if permission is held. Safe to call repeatedly.
pub fn attach_sampler(game: &Rc<RefCell<Game>>) {
    let mut g = game.borrow_mut();
    if !g.gate.permission_granted() || g.sampler.is_active() {
        return;
    }
    let weak = Rc::downgrade(game);
    let started = g.sampler.start(move |sample| {
        if let Some(game) = weak.upgrade() {
            on_sample(&game, sample);
        }
    });
    if let Err(e) = started {
        log::error!("[motion] {:?}", e);
    }
}

pub fn detach_sampler(game: &Rc<RefCell<Game>>) {
    game.borrow_mut().sampler.stop();
}
