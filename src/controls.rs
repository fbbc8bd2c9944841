use crate::config::{MAX_PARAM2, MIN_PARAM2, PARAM2_STEP};

/// Which capture loop is reading the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Basic,
    People,
    Circle,
}

/// What a key press asks the loop to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Screenshot,
    ResetStats,
    Measure,
    IncreaseSensitivity,
    DecreaseSensitivity,
    ResetMeasurement,
}

impl Mode {
    /// Map a raw key code from the window to an action.
    ///
    /// Only the low byte is looked at; `-1` (no key) maps to nothing.
    pub fn action_for_key(self, key: i32) -> Option<Action> {
        if key < 0 {
            return None;
        }
        let key = (key & 0xFF) as u8 as char;
        match self {
            Mode::Basic => match key {
                'q' => Some(Action::Quit),
                _ => None,
            },
            Mode::People => match key {
                'q' => Some(Action::Quit),
                's' => Some(Action::Screenshot),
                'r' => Some(Action::ResetStats),
                _ => None,
            },
            Mode::Circle => match key {
                'q' | 'Q' => Some(Action::Quit),
                'm' | 'M' => Some(Action::Measure),
                '+' | '=' => Some(Action::IncreaseSensitivity),
                '-' | '_' => Some(Action::DecreaseSensitivity),
                'r' | 'R' => Some(Action::ResetMeasurement),
                _ => None,
            },
        }
    }

    /// Controls listed on the console at startup
    pub fn help_lines(self) -> &'static [&'static str] {
        match self {
            Mode::Basic => &["  'q' - Quit"],
            Mode::People => &[
                "  'q' - Quit",
                "  's' - Save screenshot",
                "  'r' - Reset statistics",
            ],
            Mode::Circle => &[
                "  1. Place the head in the center of the yellow area",
                "  2. The detectable size is 20% to 50% of the image",
                "  3. Press 'M' to measure the diameter",
                "  4. Press '+/-' to adjust sensitivity",
                "  5. Press 'Q' to quit",
            ],
        }
    }
}

/// Hough accumulator threshold, stepped from the keyboard within fixed bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sensitivity {
    param2: i32,
}

impl Sensitivity {
    pub fn new(param2: i32) -> Self {
        Self {
            param2: param2.clamp(MIN_PARAM2, MAX_PARAM2),
        }
    }

    pub fn param2(&self) -> i32 {
        self.param2
    }

    /// Lower the threshold so more circles pass
    pub fn increase(&mut self) -> i32 {
        self.param2 = (self.param2 - PARAM2_STEP).max(MIN_PARAM2);
        self.param2
    }

    pub fn decrease(&mut self) -> i32 {
        self.param2 = (self.param2 + PARAM2_STEP).min(MAX_PARAM2);
        self.param2
    }
}
