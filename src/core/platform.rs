#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Platform {
    Android,
    Ios,
    Desktop,
}

impl Platform {
    /// Coarse user-agent match. Advisory only, never a security boundary.
    ///
    /// `has_ms_stream` reports the legacy IE/Edge `window.MSStream` global,
    /// which also advertises "iPhone" in its user agent.
    pub fn classify(user_agent: &str, has_ms_stream: bool) -> Self {
        if user_agent.to_ascii_lowercase().contains("android") {
            return Platform::Android;
        }
        let apple = ["iPad", "iPhone", "iPod"]
            .iter()
            .any(|needle| user_agent.contains(needle));
        if apple && !has_ms_stream {
            return Platform::Ios;
        }
        Platform::Desktop
    }

    #[inline]
    pub fn is_mobile(self) -> bool {
        !matches!(self, Platform::Desktop)
    }
}
