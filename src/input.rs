//! Input interpretation. Wheel, keyboard and touch all reduce to a one-page
//! step; everything the carousel reacts to arrives as a [`Command`].

use crate::config::CarouselConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavIntent {
    Advance,
    Retreat,
}

impl NavIntent {
    pub fn step(self) -> isize {
        match self {
            Self::Advance => 1,
            Self::Retreat => -1,
        }
    }

    /// Arrow keys: down/right advance, up/left retreat.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowDown" | "ArrowRight" => Some(Self::Advance),
            "ArrowUp" | "ArrowLeft" => Some(Self::Retreat),
            _ => None,
        }
    }
}

/// Raw events as the browser delivers them.
#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    /// `at_ms` is the event timestamp.
    Wheel { delta_y: f64, at_ms: f64 },
    /// The wheel debounce timer armed for `at_ms` fired.
    WheelSettled { at_ms: f64 },
    Key(String),
    TouchStart { y: f64 },
    TouchEnd { y: f64 },
    TransitionEnd,
    Resize { width: f64, height: f64 },
    Visibility { visible: bool },
}

/// What the carousel is asked to do.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    Navigate(NavIntent),
    TransitionEnd,
    Resize { width: f64, height: f64 },
    Visibility { visible: bool },
}

/// Coalesces a burst of wheel events into one intent. The intent is released
/// only once `delay_ms` has passed since the latest event, so a timer left
/// over from earlier in the burst yields nothing.
#[derive(Clone, Debug)]
pub struct WheelDebounce {
    delay_ms: u32,
    pending: Option<NavIntent>,
    last_ms: f64,
}

impl WheelDebounce {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            pending: None,
            last_ms: 0.0,
        }
    }

    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    /// The latest event's direction wins.
    pub fn push(&mut self, delta_y: f64, now_ms: f64) {
        self.pending = Some(if delta_y > 0.0 {
            NavIntent::Advance
        } else {
            NavIntent::Retreat
        });
        self.last_ms = now_ms;
    }

    /// When the pending intent becomes due, if there is one.
    pub fn deadline_ms(&self) -> Option<f64> {
        self.pending.map(|_| self.last_ms + f64::from(self.delay_ms))
    }

    pub fn poll(&mut self, now_ms: f64) -> Option<NavIntent> {
        if now_ms < self.deadline_ms()? {
            return None;
        }
        self.pending.take()
    }
}

/// Tracks one single-touch swipe.
#[derive(Clone, Debug)]
pub struct TouchSwipe {
    threshold_px: f64,
    start_y: Option<f64>,
}

impl TouchSwipe {
    pub fn new(threshold_px: f64) -> Self {
        Self {
            threshold_px,
            start_y: None,
        }
    }

    pub fn start(&mut self, y: f64) {
        self.start_y = Some(y);
    }

    /// Swiping up (finger moving towards the top) advances.
    pub fn end(&mut self, y: f64) -> Option<NavIntent> {
        let diff = self.start_y.take()? - y;
        if diff.abs() <= self.threshold_px {
            return None;
        }
        Some(if diff > 0.0 {
            NavIntent::Advance
        } else {
            NavIntent::Retreat
        })
    }
}

/// Turns raw input into carousel commands.
#[derive(Clone, Debug)]
pub struct InputInterpreter {
    wheel: WheelDebounce,
    touch: TouchSwipe,
}

impl InputInterpreter {
    pub fn new(config: &CarouselConfig) -> Self {
        Self {
            wheel: WheelDebounce::new(config.wheel_debounce_ms),
            touch: TouchSwipe::new(config.touch_threshold_px),
        }
    }

    pub fn wheel_delay_ms(&self) -> u32 {
        self.wheel.delay_ms()
    }

    /// Time the debounce timer should fire for the pending wheel intent.
    pub fn wheel_deadline_ms(&self) -> Option<f64> {
        self.wheel.deadline_ms()
    }

    pub fn interpret(&mut self, event: InputEvent) -> Option<Command> {
        match event {
            InputEvent::Wheel { delta_y, at_ms } => {
                self.wheel.push(delta_y, at_ms);
                None
            }
            InputEvent::WheelSettled { at_ms } => self.wheel.poll(at_ms).map(Command::Navigate),
            InputEvent::Key(key) => NavIntent::from_key(&key).map(Command::Navigate),
            InputEvent::TouchStart { y } => {
                self.touch.start(y);
                None
            }
            InputEvent::TouchEnd { y } => self.touch.end(y).map(Command::Navigate),
            InputEvent::TransitionEnd => Some(Command::TransitionEnd),
            InputEvent::Resize { width, height } => Some(Command::Resize { width, height }),
            InputEvent::Visibility { visible } => Some(Command::Visibility { visible }),
        }
    }
}
