/// What the host should do after the start button is pressed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StartAction {
    RequestPermission,
    EnterGame,
    Nothing,
}

/// Motion permission plus the "Start game" affordance.
///
/// Permission lives for the page session only and is never persisted.
#[derive(Clone, Copy, Debug, Default)]
pub struct StartGate {
    permission_granted: bool,
    started: bool,
}

impl StartGate {
    pub fn press(&mut self) -> StartAction {
        if !self.permission_granted {
            return StartAction::RequestPermission;
        }
        if self.started {
            return StartAction::Nothing;
        }
        self.started = true;
        StartAction::EnterGame
    }

    pub fn grant(&mut self) {
        self.permission_granted = true;
    }

    /// A denial leaves the gate closed; pressing again retries.
    pub fn deny(&mut self) {
        self.permission_granted = false;
    }

    #[inline]
    pub fn permission_granted(&self) -> bool {
        self.permission_granted
    }

    #[inline]
    pub fn started(&self) -> bool {
        self.started
    }

    pub fn button_visible(&self, rolling: bool) -> bool {
        !rolling && !self.started
    }
}
