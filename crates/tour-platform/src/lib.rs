//! Headless platform runner.
//!
//! The host owns the scheduler, composes the root function after every input
//! event, and dispatches taps, text input and the back action into the
//! callbacks of the current frame. Rendering to pixels is not done here; the
//! console runner prints an outline of each frame instead.
//!
//! Back and navigation failures belong to the navigator attached with
//! [`Host::with_navigator`], so two hosts on one thread never see each
//! other's stacks.

pub mod assets;
mod common;
pub mod console;
pub mod inspector;

pub use assets::AssetStore;
pub use console::{Command, run_console_app};
pub use inspector::{Inspector, outline};

use thiserror::Error;
use tour_core::*;
use tour_navigation::{NavKey, Navigator};
use tour_ui::flatten;

use crate::common::{TapTarget, hit_index_by_id, tap_target, text_field_id};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HostError {
    #[error("nothing labelled '{0}' on screen")]
    NoSuchTarget(String),
    #[error("'{0}' does not react to taps")]
    NotClickable(String),
    #[error("no text field labelled '{0}' on screen")]
    NoTextField(String),
    /// A handler asked for a transition the navigator refused.
    #[error(transparent)]
    Navigation(#[from] UiError),
}

/// The host's view of an attached navigator.
struct NavHooks {
    back: Box<dyn Fn() -> bool>,
    take_errors: Box<dyn Fn() -> Vec<UiError>>,
}

pub struct Host {
    root: Box<dyn FnMut(&mut Scheduler) -> View>,
    sched: Scheduler,
    assets: AssetStore,
    inspector: Inspector,
    frame: Option<Frame>,
    nav: Option<NavHooks>,
}

impl Host {
    pub fn new(root: impl FnMut(&mut Scheduler) -> View + 'static, assets: AssetStore) -> Self {
        Self {
            root: Box::new(root),
            sched: Scheduler::new(),
            assets,
            inspector: Inspector::new(),
            frame: None,
            nav: None,
        }
    }

    /// Route back actions to `nav` and collect the navigation failures its
    /// event handlers queue.
    pub fn with_navigator<K: NavKey>(mut self, nav: &Navigator<K>) -> Self {
        let back_nav = nav.clone();
        let error_nav = nav.clone();
        self.nav = Some(NavHooks {
            back: Box::new(move || back_nav.pop()),
            take_errors: Box::new(move || error_nav.take_errors()),
        });
        self
    }

    /// Current frame, composing one if the last event invalidated it.
    pub fn frame(&mut self) -> &Frame {
        let frame = match self.frame.take() {
            Some(f) => f,
            None => self.compose(),
        };
        self.frame.insert(frame)
    }

    fn compose(&mut self) -> Frame {
        self.inspector.begin();
        let mut frame = self.sched.repose(&mut self.root, flatten);
        frame.errors = resolve_images(&frame.root, &self.assets);
        for e in &frame.errors {
            log::error!("{e}");
        }
        self.inspector.end(self.sched.frames(), &frame);
        frame
    }

    pub fn invalidate(&mut self) {
        self.frame = None;
    }

    /// Frames composed so far.
    pub fn frames(&self) -> u64 {
        self.sched.frames()
    }

    pub fn inspector(&self) -> &Inspector {
        &self.inspector
    }

    /// Tap the first view labelled `label`. A navigation the tap asked for
    /// and the navigator refused comes back as [`HostError::Navigation`].
    pub fn tap(&mut self, label: &str) -> Result<(), HostError> {
        let frame = self.frame();
        let id = match tap_target(&frame.root, label) {
            Some(TapTarget::Clickable(id)) => id,
            Some(TapTarget::Inert) => return Err(HostError::NotClickable(label.into())),
            None => return Err(HostError::NoSuchTarget(label.into())),
        };
        let cb = hit_index_by_id(frame, id).and_then(|i| frame.hit_regions[i].on_click.clone());
        log::debug!("tap '{label}' -> view {id}");
        if let Some(cb) = cb {
            cb();
        }
        self.invalidate();
        match self.take_nav_errors().into_iter().next() {
            Some(e) => Err(e.into()),
            None => Ok(()),
        }
    }

    fn take_nav_errors(&self) -> Vec<UiError> {
        self.nav
            .as_ref()
            .map(|n| (n.take_errors)())
            .unwrap_or_default()
    }

    /// Replace the content of a text field. `None` targets the first field
    /// on screen.
    pub fn input_text(&mut self, label: Option<&str>, text: &str) -> Result<(), HostError> {
        let frame = self.frame();
        let cb = text_field_id(frame, label)
            .and_then(|id| hit_index_by_id(frame, id))
            .and_then(|i| frame.hit_regions[i].on_text_change.clone())
            .ok_or_else(|| HostError::NoTextField(label.unwrap_or("").into()))?;
        cb(text.to_string());
        self.invalidate();
        Ok(())
    }

    /// Content of a text field in the current frame.
    pub fn text_of(&mut self, label: Option<&str>) -> Option<String> {
        let frame = self.frame();
        let id = text_field_id(frame, label)?;
        let i = hit_index_by_id(frame, id)?;
        frame.hit_regions[i].text.clone()
    }

    /// System back. Returns false when nothing handled it (no navigator, or
    /// already at the root), which means the host should close.
    pub fn back(&mut self) -> bool {
        let handled = self.nav.as_ref().is_some_and(|n| (n.back)());
        self.invalidate();
        handled
    }

    pub fn outline(&mut self) -> String {
        outline(self.frame())
    }
}

fn resolve_images(root: &View, assets: &AssetStore) -> Vec<UiError> {
    let mut errors = Vec::new();
    root.walk(&mut |v| {
        if let ViewKind::Image { asset, .. } = &v.kind
            && let Err(e) = assets.resolve(*asset)
            && !errors.contains(&e)
        {
            errors.push(e);
        }
    });
    errors
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::fmt;
    use std::rc::Rc;

    use tour_navigation::{NavDisplay, RouteTable};
    use tour_ui::*;

    use super::*;

    fn counter_app() -> impl FnMut(&mut Scheduler) -> View {
        let count = signal(0i32);
        let text = signal(String::new());
        move |_s: &mut Scheduler| {
            Column(Modifier::new()).child((
                Text(format!("Count: {}", count.get())),
                Button("Increment", {
                    let count = count.clone();
                    move || count.update(|c| *c += 1)
                }),
                Text("static"),
                OutlinedTextField(text.get(), "Name", text.get().is_empty(), Modifier::new(), {
                    let text = text.clone();
                    move |s| text.set(s)
                }),
            ))
        }
    }

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum Page {
        Home,
        Next,
        Nowhere,
    }

    impl fmt::Display for Page {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{self:?}")
        }
    }

    /// Home has buttons to a registered and an unregistered page.
    fn pages() -> Navigator<Page> {
        let table = RouteTable::new()
            .route(Page::Home, |entry| {
                let nav = entry.navigator();
                let lost = entry.navigator();
                Column(Modifier::new()).child((
                    Button("next", move || nav.go(Page::Next)),
                    Button("nowhere", move || lost.go(Page::Nowhere)),
                ))
            })
            .route(Page::Next, |_| Text("next page"));
        Navigator::new(Page::Home, table).unwrap()
    }

    fn host_for(nav: &Navigator<Page>) -> Host {
        let shown = nav.clone();
        Host::new(move |_s: &mut Scheduler| NavDisplay(&shown), AssetStore::empty())
            .with_navigator(nav)
    }

    #[test]
    fn tap_recomposes() {
        let mut host = Host::new(counter_app(), AssetStore::empty());
        assert!(host.frame().root.texts().contains(&"Count: 0".to_string()));
        host.tap("Increment").unwrap();
        host.tap("Increment").unwrap();
        assert!(host.frame().root.texts().contains(&"Count: 2".to_string()));
    }

    #[test]
    fn tap_errors() {
        let mut host = Host::new(counter_app(), AssetStore::empty());
        assert_eq!(
            host.tap("missing"),
            Err(HostError::NoSuchTarget("missing".into()))
        );
        assert_eq!(
            host.tap("static"),
            Err(HostError::NotClickable("static".into()))
        );
    }

    #[test]
    fn text_input_updates_field() {
        let mut host = Host::new(counter_app(), AssetStore::empty());
        assert_eq!(host.text_of(Some("Name")).as_deref(), Some(""));
        host.input_text(Some("Name"), "Ann").unwrap();
        assert_eq!(host.text_of(None).as_deref(), Some("Ann"));
        assert_eq!(
            host.input_text(Some("Other"), "x"),
            Err(HostError::NoTextField("Other".into()))
        );
    }

    #[test]
    fn taps_bubble_to_clickable_parent() {
        let hits = Rc::new(RefCell::new(0));
        let mut host = Host::new(
            {
                let hits = hits.clone();
                move |_s: &mut Scheduler| {
                    let hits = hits.clone();
                    Box(Modifier::new().clickable(move || *hits.borrow_mut() += 1))
                        .child(Text("inner"))
                }
            },
            AssetStore::empty(),
        );
        host.tap("inner").unwrap();
        assert_eq!(*hits.borrow(), 1);
    }

    #[test]
    fn missing_images_become_frame_errors() {
        let mut host = Host::new(
            |_s: &mut Scheduler| {
                Column(Modifier::new()).child((
                    Image(Modifier::new(), AssetId("a"), "A"),
                    Image(Modifier::new(), AssetId("a"), "A again"),
                ))
            },
            AssetStore::empty(),
        );
        assert_eq!(
            host.frame().errors,
            vec![UiError::MissingAsset("a".into())]
        );
        let o = host.outline();
        assert!(o.contains("Image \"A\" <failed to load a>"));
        assert!(o.ends_with("! missing asset 'a'\n"));
    }

    #[test]
    fn back_without_navigator_is_unhandled() {
        let mut host = Host::new(counter_app(), AssetStore::empty());
        assert!(!host.back());
        assert_eq!(host.frames(), 0);
        host.frame();
        assert_eq!(host.frames(), 1);
        assert_eq!(host.inspector().metrics.as_ref().map(|m| m.frame), Some(1));
    }

    #[test]
    fn back_goes_to_own_navigator() {
        let nav_a = pages();
        let nav_b = pages();
        let mut a = host_for(&nav_a);
        let mut b = host_for(&nav_b);
        a.tap("next").unwrap();
        assert_eq!(nav_a.depth(), 2);
        b.frame();

        assert!(a.back());
        assert_eq!(nav_a.current(), Some(Page::Home));
        assert!(!b.back());
        assert_eq!(nav_b.depth(), 1);
    }

    #[test]
    fn back_works_before_first_frame() {
        let nav = pages();
        let mut host = host_for(&nav);
        nav.navigate(Page::Next).unwrap();
        assert_eq!(host.frames(), 0);
        assert!(host.back());
        assert_eq!(nav.current(), Some(Page::Home));
        assert!(!host.back());
    }

    #[test]
    fn refused_navigation_is_returned_from_tap() {
        let nav = pages();
        let mut host = host_for(&nav);
        assert_eq!(
            host.tap("nowhere"),
            Err(HostError::Navigation(UiError::UnknownRoute("Nowhere".into())))
        );
        assert_eq!(nav.current(), Some(Page::Home));
        assert!(nav.take_errors().is_empty());
        assert_eq!(host.tap("next"), Ok(()));
    }
}
