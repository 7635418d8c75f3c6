pub const LABEL_WHEN_LIT: &str = "Spotlight";
pub const LABEL_WHEN_DARK: &str = "Show all";

/// Whether the whole stage is lit or only the spotlight.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Lights {
    on: bool,
}

impl Lights {
    pub fn new(on: bool) -> Self {
        Self { on }
    }

    #[inline]
    pub fn is_on(&self) -> bool {
        self.on
    }

    pub fn toggle(&mut self) -> bool {
        self.on = !self.on;
        log::debug!("[lights] {}", if self.on { "on" } else { "off" });
        self.on
    }

    /// Text for the toggle control: names the mode a press switches to.
    pub fn label(&self) -> &'static str {
        if self.on {
            LABEL_WHEN_LIT
        } else {
            LABEL_WHEN_DARK
        }
    }

    pub fn aria_pressed(&self) -> &'static str {
        if self.on {
            "true"
        } else {
            "false"
        }
    }
}
