//! Infinite-loop page carousel.
//!
//! The track holds `N + 2` slots: a clone of the last page at position 0, the
//! real pages at `1..=N`, and a clone of the first page at `N + 1`. Moving onto
//! a clone is animated normally; once the move settles the carousel jumps to
//! the matching real slot without animation, so scrolling never hits an end.

use log::{debug, warn};

use crate::error::{Result, ShowcaseError};
use crate::input::{Command, NavIntent};
use crate::motion::{Motion, Transition, Viewport};
use crate::page::{Mount, PageFactory};
use crate::slot::Slot;
use crate::window::ActiveWindow;

/// Identifies one animated move. Completion signals carry it back.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TransitionId(u64);

/// Outcome of a navigation request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Navigation {
    /// A move is already in flight; nothing happened.
    Dropped,
    /// Already at the target; the window was refreshed, no move started.
    Stayed,
    Started(TransitionId),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Transitioning(TransitionId),
}

/// Where the carousel is and whether it is moving.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselState {
    pub current_position: usize,
    pub phase: Phase,
}

impl CarouselState {
    pub fn is_transitioning(&self) -> bool {
        matches!(self.phase, Phase::Transitioning(_))
    }
}

pub struct Carousel<M: Mount, V: Viewport> {
    slots: Vec<Slot<M>>,
    factories: Vec<PageFactory<M::Surface>>,
    viewport: V,
    window: ActiveWindow,
    transition: Transition,
    state: CarouselState,
    next_id: u64,
}

impl<M: Mount, V: Viewport> Carousel<M, V> {
    /// Build the track. `mounts` must hold one container per slot, i.e.
    /// `factories.len() + 2`, in track order.
    pub fn new(
        factories: Vec<PageFactory<M::Surface>>,
        mounts: Vec<M>,
        viewport: V,
        window: ActiveWindow,
        transition: Transition,
    ) -> Result<Self> {
        let pages = factories.len();
        if pages == 0 {
            return Err(ShowcaseError::EmptySequence);
        }
        if mounts.len() != pages + 2 {
            return Err(ShowcaseError::MountCount {
                expected: pages + 2,
                actual: mounts.len(),
            });
        }

        let slots = (0..)
            .map_while(|position| {
                source_page(position, pages).map(|source| (position, source))
            })
            .zip(mounts)
            .map(|((position, source), mount)| Slot::new(position, source, mount))
            .collect();

        Ok(Self {
            slots,
            factories,
            viewport,
            window,
            transition,
            state: CarouselState {
                current_position: 1,
                phase: Phase::Idle,
            },
            next_id: 0,
        })
    }

    /// Place the track on the first real page and load its window.
    pub fn start(&mut self) {
        self.viewport.translate(self.state.current_position, Motion::Instant);
        self.update_window(self.state.current_position);
    }

    pub fn page_count(&self) -> usize {
        self.factories.len()
    }

    pub fn state(&self) -> CarouselState {
        self.state
    }

    pub fn current_position(&self) -> usize {
        self.state.current_position
    }

    /// Logical page under the viewport.
    pub fn current_page(&self) -> usize {
        self.slots[self.state.current_position].source()
    }

    pub fn is_transitioning(&self) -> bool {
        self.state.is_transitioning()
    }

    pub fn slots(&self) -> &[Slot<M>] {
        &self.slots
    }

    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    pub fn transition(&self) -> Transition {
        self.transition
    }

    pub fn loaded_positions(&self) -> Vec<usize> {
        self.slots
            .iter()
            .filter(|s| s.is_loaded())
            .map(Slot::position)
            .collect()
    }

    /// Move to `target`, clamped to the physical track.
    pub fn scroll_to_page(&mut self, target: isize) -> Navigation {
        if let Phase::Transitioning(id) = self.state.phase {
            debug!("navigation to {target} dropped, transition {id:?} in flight");
            return Navigation::Dropped;
        }

        let last = self.slots.len() - 1;
        let target = target.clamp(0, last as isize) as usize;

        self.update_window(target);
        if target == self.state.current_position {
            return Navigation::Stayed;
        }

        let id = TransitionId(self.next_id);
        self.next_id += 1;
        self.state = CarouselState {
            current_position: target,
            phase: Phase::Transitioning(id),
        };
        self.viewport
            .translate(target, Motion::Animated(self.transition));
        Navigation::Started(id)
    }

    pub fn navigate(&mut self, intent: NavIntent) -> Navigation {
        let current = self.state.current_position as isize;
        self.scroll_to_page(current + intent.step())
    }

    /// The move identified by `id` has settled. Re-anchors off a clone slot,
    /// refreshes the window and returns to idle. Stale ids are ignored.
    pub fn finish_transition(&mut self, id: TransitionId) -> bool {
        if self.state.phase != Phase::Transitioning(id) {
            return false;
        }

        let pages = self.page_count();
        let anchored = match self.state.current_position {
            0 => pages,
            p if p == pages + 1 => 1,
            p => p,
        };
        if anchored != self.state.current_position {
            debug!(
                "re-anchoring clone {} to real slot {anchored}",
                self.state.current_position
            );
            self.state.current_position = anchored;
            self.viewport.translate(anchored, Motion::Instant);
        }

        self.update_window(self.state.current_position);
        self.state.phase = Phase::Idle;
        true
    }

    /// Id of the move in flight, if any.
    pub fn in_flight(&self) -> Option<TransitionId> {
        match self.state.phase {
            Phase::Transitioning(id) => Some(id),
            Phase::Idle => None,
        }
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        for slot in &mut self.slots {
            slot.resize(width, height);
        }
    }

    /// Pause or resume every loaded page.
    pub fn set_visible(&mut self, visible: bool) {
        for slot in &mut self.slots {
            if visible {
                slot.play();
            } else {
                slot.pause();
            }
        }
    }

    /// Single entry point for the input queue.
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Navigate(intent) => {
                self.navigate(intent);
            }
            Command::TransitionEnd => {
                if let Some(id) = self.in_flight() {
                    self.finish_transition(id);
                }
            }
            Command::Resize { width, height } => self.resize(width, height),
            Command::Visibility { visible } => self.set_visible(visible),
        }
    }

    /// Unload everything outside the window around `center`, then load
    /// everything inside it.
    fn update_window(&mut self, center: usize) {
        let window = self.window;
        for slot in &mut self.slots {
            if !window.contains(center, slot.position()) {
                slot.unload();
            }
        }
        for position in window.range(center, self.slots.len()) {
            let slot = &mut self.slots[position];
            if let Err(e) = slot.load(&self.factories) {
                warn!("slot {position} left blank: {e}");
            }
        }
    }
}

/// Logical page rendered at `position` on a track of `pages + 2` slots
/// bookended by clones. `None` past the end of the track.
pub fn source_page(position: usize, pages: usize) -> Option<usize> {
    let last_page = pages.checked_sub(1)?;
    match position {
        0 => Some(last_page),
        p if p <= pages => Some(p - 1),
        p if p == pages + 1 => Some(0),
        _ => None,
    }
}
