//! The contract every renderable page satisfies.

use std::rc::Rc;

use crate::error::Result;

/// A live page instance. Hooks default to no-ops so static pages only
/// implement [`RenderablePage::surface`].
pub trait RenderablePage {
    /// Handle attached into a slot container (a DOM element in the browser).
    type Surface;

    fn surface(&self) -> &Self::Surface;

    /// Start or resume the animation timeline.
    fn play(&mut self) {}

    /// Halt the timeline, keeping resources alive.
    fn pause(&mut self) {}

    /// Re-derive resolution dependent state.
    fn resize(&mut self, _width: f64, _height: f64) {}

    /// Release every held resource. Called at most once per instance.
    fn cleanup(&mut self) {}
}

pub type BoxedPage<S> = Box<dyn RenderablePage<Surface = S>>;

/// Zero-argument constructor for one logical page.
pub type PageFactory<S> = Rc<dyn Fn() -> Result<BoxedPage<S>>>;

/// Container a page surface is attached into.
pub trait Mount {
    type Surface;

    fn attach(&mut self, surface: &Self::Surface) -> Result<()>;

    fn detach(&mut self, surface: &Self::Surface);
}
