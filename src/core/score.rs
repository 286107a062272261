use super::constants::INITIAL_BALANCE;
use super::error::GameError;
use super::face::FaceValue;
use super::report::RollReply;

/// Display-only copy of the last balance the service reported and the last face rolled.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scoreboard {
    balance: f64,
    result: FaceValue,
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self {
            balance: INITIAL_BALANCE,
            result: FaceValue::default(),
        }
    }
}

impl Scoreboard {
    #[inline]
    pub fn balance(&self) -> f64 {
        self.balance
    }

    #[inline]
    pub fn result(&self) -> FaceValue {
        self.result
    }

    pub fn record_roll(&mut self, face: FaceValue) {
        self.result = face;
    }

    /// Failed replies leave the balance untouched. Returns whether it changed.
    pub fn apply_reply(&mut self, reply: Result<RollReply, GameError>) -> bool {
        match reply {
            Ok(r) => {
                let changed = r.balance != self.balance;
                self.balance = r.balance;
                changed
            }
            Err(e) => {
                log::error!("[report] error updating balance: {e}");
                false
            }
        }
    }

    pub fn balance_label(&self) -> String {
        format!("Balance: {}", self.balance)
    }

    pub fn result_label(&self) -> String {
        format!("Result: {}", self.result)
    }
}
