#![cfg_attr(target_arch = "wasm32", allow(dead_code))]

//! Full-viewport shader showcase: an infinite-loop page carousel that keeps
//! only a few WebGL pages alive at once, plus a static registration footer.
//!
//! Everything outside the `wasm` module is platform independent and runs in host tests.

pub mod carousel;
pub mod config;
pub mod device;
pub mod error;
pub mod footer;
pub mod input;
pub mod motion;
pub mod page;
pub mod slot;
pub mod window;

pub use carousel::{source_page, Carousel, CarouselState, Navigation, Phase, TransitionId};
pub use config::{CarouselConfig, MobileConfig, ShowcaseConfig};
pub use error::{Result, ShowcaseError};
pub use input::{Command, InputEvent, InputInterpreter, NavIntent};
pub use motion::{Motion, Transition, Viewport};
pub use page::{BoxedPage, Mount, PageFactory, RenderablePage};
pub use window::ActiveWindow;

// Only compile browser bindings when targeting wasm32.
#[cfg(target_arch = "wasm32")]
pub mod wasm;
