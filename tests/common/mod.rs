#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

use shader_showcase::{
    ActiveWindow, BoxedPage, Carousel, Motion, Mount, PageFactory, RenderablePage, Result,
    ShowcaseError, Transition, Viewport,
};

/// Shared record of everything the fake pages and mounts saw.
#[derive(Debug, Default)]
pub struct Probe {
    pub created: Vec<usize>,
    pub plays: usize,
    pub pauses: usize,
    pub cleanups: usize,
    pub resizes: Vec<(usize, f64, f64)>,
    /// Surfaces currently attached to some mount.
    pub attached: BTreeSet<String>,
}

pub type SharedProbe = Rc<RefCell<Probe>>;

pub struct FakePage {
    page: usize,
    surface: String,
    probe: SharedProbe,
    cleaned: bool,
}

impl RenderablePage for FakePage {
    type Surface = String;

    fn surface(&self) -> &String {
        &self.surface
    }

    fn play(&mut self) {
        self.probe.borrow_mut().plays += 1;
    }

    fn pause(&mut self) {
        self.probe.borrow_mut().pauses += 1;
    }

    fn resize(&mut self, width: f64, height: f64) {
        self.probe.borrow_mut().resizes.push((self.page, width, height));
    }

    fn cleanup(&mut self) {
        assert!(!self.cleaned, "cleanup called twice on page {}", self.page);
        self.cleaned = true;
        self.probe.borrow_mut().cleanups += 1;
    }
}

pub struct FakeMount {
    probe: SharedProbe,
}

impl Mount for FakeMount {
    type Surface = String;

    fn attach(&mut self, surface: &String) -> Result<()> {
        self.probe.borrow_mut().attached.insert(surface.clone());
        Ok(())
    }

    fn detach(&mut self, surface: &String) {
        self.probe.borrow_mut().attached.remove(surface);
    }
}

/// Records every track move.
#[derive(Clone, Default)]
pub struct FakeViewport {
    pub moves: Rc<RefCell<Vec<(usize, Motion)>>>,
}

impl FakeViewport {
    pub fn last(&self) -> Option<(usize, Motion)> {
        self.moves.borrow().last().copied()
    }
}

impl Viewport for FakeViewport {
    fn translate(&mut self, position: usize, motion: Motion) {
        self.moves.borrow_mut().push((position, motion));
    }
}

pub fn factory(page: usize, probe: &SharedProbe) -> PageFactory<String> {
    let probe = Rc::clone(probe);
    let serial = Rc::new(RefCell::new(0usize));
    Rc::new(move || -> Result<BoxedPage<String>> {
        let mut n = serial.borrow_mut();
        *n += 1;
        probe.borrow_mut().created.push(page);
        Ok(Box::new(FakePage {
            page,
            surface: format!("page{page}#{n}"),
            probe: Rc::clone(&probe),
            cleaned: false,
        }) as BoxedPage<String>)
    })
}

pub fn failing_factory(page: usize) -> PageFactory<String> {
    Rc::new(move || -> Result<BoxedPage<String>> {
        Err(ShowcaseError::context(format!("no context for page {page}")))
    })
}

pub fn mounts(count: usize, probe: &SharedProbe) -> Vec<FakeMount> {
    (0..count)
        .map(|_| FakeMount {
            probe: Rc::clone(probe),
        })
        .collect()
}

pub struct Harness {
    pub carousel: Carousel<FakeMount, FakeViewport>,
    pub probe: SharedProbe,
    pub viewport: FakeViewport,
}

impl Harness {
    pub fn new(pages: usize) -> Self {
        let probe = SharedProbe::default();
        let factories = (0..pages).map(|p| factory(p, &probe)).collect();
        Self::with_factories(factories, probe)
    }

    pub fn with_factories(factories: Vec<PageFactory<String>>, probe: SharedProbe) -> Self {
        let viewport = FakeViewport::default();
        let slots = factories.len() + 2;
        let mut carousel = Carousel::new(
            factories,
            mounts(slots, &probe),
            viewport.clone(),
            ActiveWindow::default(),
            Transition::default(),
        )
        .expect("carousel");
        carousel.start();
        Self {
            carousel,
            probe,
            viewport,
        }
    }

    /// Run the in-flight transition to completion.
    pub fn settle(&mut self) {
        let id = self.carousel.in_flight().expect("transition in flight");
        assert!(self.carousel.finish_transition(id));
    }

    pub fn live(&self) -> usize {
        self.probe.borrow().attached.len()
    }
}
