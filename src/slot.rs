//! Slot manager: one physical track position and the page instance it may hold.

use log::debug;

use crate::error::{Result, ShowcaseError};
use crate::page::{BoxedPage, Mount, PageFactory};

pub struct Slot<M: Mount> {
    position: usize,
    source: usize,
    mount: M,
    instance: Option<BoxedPage<M::Surface>>,
}

impl<M: Mount> Slot<M> {
    pub fn new(position: usize, source: usize, mount: M) -> Self {
        Self {
            position,
            source,
            mount,
            instance: None,
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Logical page rendered by this slot.
    pub fn source(&self) -> usize {
        self.source
    }

    pub fn is_loaded(&self) -> bool {
        self.instance.is_some()
    }

    /// Instantiate and attach the page if needed, then play it.
    ///
    /// A slot whose source has no factory is left empty. A factory or attach
    /// failure leaves the slot empty and is returned to the caller.
    pub fn load(&mut self, factories: &[PageFactory<M::Surface>]) -> Result<()> {
        if let Some(page) = self.instance.as_mut() {
            page.play();
            return Ok(());
        }
        let Some(factory) = factories.get(self.source) else {
            return Ok(());
        };

        let mut page = factory().map_err(|e| match e {
            err @ ShowcaseError::PageLoad { .. } => err,
            other => ShowcaseError::page_load(self.source, other.to_string()),
        })?;
        if let Err(e) = self.mount.attach(page.surface()) {
            page.cleanup();
            return Err(ShowcaseError::page_load(self.source, e.to_string()));
        }
        debug!("slot {} loaded page {}", self.position, self.source);
        page.play();
        self.instance = Some(page);
        Ok(())
    }

    /// Clean up and detach the page, if any.
    pub fn unload(&mut self) {
        if let Some(mut page) = self.instance.take() {
            page.cleanup();
            self.mount.detach(page.surface());
            debug!("slot {} unloaded page {}", self.position, self.source);
        }
    }

    pub fn play(&mut self) {
        if let Some(page) = self.instance.as_mut() {
            page.play();
        }
    }

    pub fn pause(&mut self) {
        if let Some(page) = self.instance.as_mut() {
            page.pause();
        }
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        if let Some(page) = self.instance.as_mut() {
            page.resize(width, height);
        }
    }
}

impl<M: Mount> Drop for Slot<M> {
    fn drop(&mut self) {
        self.unload();
    }
}
