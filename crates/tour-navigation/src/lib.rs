#![allow(non_snake_case)]
//! Typed navigation: a back stack of entries, a route table of renderers and
//! a [`Navigator`] handle that screens receive explicitly.
//!
//! App logic only navigates forward. Popping is reserved for the host's back
//! action; the host holds its own navigator handle for that.

use std::{any::Any, cell::RefCell, collections::HashMap, fmt, rc::Rc};

use tour_core::*;
use tour_ui::{Text, TextStyle};

pub trait NavKey: Clone + fmt::Debug + fmt::Display + PartialEq + 'static {}
impl<T> NavKey for T where T: Clone + fmt::Debug + fmt::Display + PartialEq + 'static {}

/// Per-entry state bag. Lives exactly as long as its back-stack entry.
#[derive(Default)]
pub struct SavedState {
    map: RefCell<HashMap<&'static str, Box<dyn Any>>>,
}

impl SavedState {
    pub fn remember<T: 'static + Clone>(&self, key: &'static str, init: impl FnOnce() -> T) -> T {
        if let Some(b) = self.map.borrow().get(key)
            && let Some(v) = b.downcast_ref::<T>()
        {
            return v.clone();
        }
        let v = init();
        self.map.borrow_mut().insert(key, Box::new(v.clone()));
        v
    }
}

struct Entry<K: NavKey> {
    key: K,
    saved: Rc<SavedState>,
    /// Disposed when the entry is popped, so cleanups run on unmount.
    scope: Scope,
}

struct BackState<K: NavKey> {
    entries: Vec<Entry<K>>,
}

#[derive(Clone)]
pub struct NavBackStack<K: NavKey> {
    inner: Rc<RefCell<BackState<K>>>,
}

impl<K: NavKey> NavBackStack<K> {
    fn new(start: K) -> Self {
        Self {
            inner: Rc::new(RefCell::new(BackState {
                entries: vec![Entry {
                    key: start,
                    saved: Rc::new(SavedState::default()),
                    scope: Scope::new(),
                }],
            })),
        }
    }

    pub fn top(&self) -> Option<(K, Rc<SavedState>, Scope)> {
        let s = self.inner.borrow();
        s.entries
            .last()
            .map(|e| (e.key.clone(), e.saved.clone(), e.scope.clone()))
    }

    pub fn size(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    pub fn keys(&self) -> Vec<K> {
        self.inner
            .borrow()
            .entries
            .iter()
            .map(|e| e.key.clone())
            .collect()
    }

    fn push_inner(&self, key: K) {
        self.inner.borrow_mut().entries.push(Entry {
            key,
            saved: Rc::new(SavedState::default()),
            scope: Scope::new(),
        });
    }

    /// Pop the top entry (if any) and dispose its scope.
    fn pop_inner(&self) -> bool {
        let entry = self.inner.borrow_mut().entries.pop();
        if let Some(e) = entry {
            e.scope.dispose();
            true
        } else {
            false
        }
    }
}

pub type EntryRenderer<K> = Rc<dyn Fn(&EntryScope<K>) -> View>;

pub fn renderer<K: NavKey>(f: impl Fn(&EntryScope<K>) -> View + 'static) -> EntryRenderer<K> {
    Rc::new(f)
}

/// Route key to renderer, in registration order.
pub struct RouteTable<K: NavKey> {
    routes: Vec<(K, EntryRenderer<K>)>,
}

impl<K: NavKey> Default for RouteTable<K> {
    fn default() -> Self {
        Self { routes: Vec::new() }
    }
}

impl<K: NavKey> RouteTable<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registering a key twice replaces the earlier renderer.
    pub fn route(mut self, key: K, f: impl Fn(&EntryScope<K>) -> View + 'static) -> Self {
        let r = renderer(f);
        if let Some(slot) = self.routes.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = r;
        } else {
            self.routes.push((key, r));
        }
        self
    }

    pub fn get(&self, key: &K) -> Option<EntryRenderer<K>> {
        self.routes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, r)| r.clone())
    }

    pub fn contains(&self, key: &K) -> bool {
        self.routes.iter().any(|(k, _)| k == key)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// Single active route on top of a back stack.
#[derive(Clone)]
pub struct Navigator<K: NavKey> {
    pub stack: NavBackStack<K>,
    routes: Rc<RouteTable<K>>,
    /// Failures from [`Navigator::go`], waiting for the host.
    failed: Rc<RefCell<Vec<UiError>>>,
}

impl<K: NavKey> Navigator<K> {
    pub fn new(start: K, routes: RouteTable<K>) -> Result<Self, UiError> {
        if !routes.contains(&start) {
            return Err(UiError::UnknownRoute(start.to_string()));
        }
        Ok(Self {
            stack: NavBackStack::new(start),
            routes: Rc::new(routes),
            failed: Rc::default(),
        })
    }

    /// Make `k` the active route. Navigating to the route that is already
    /// active does nothing, so repeated taps collapse into one transition.
    pub fn navigate(&self, k: K) -> Result<(), UiError> {
        if !self.routes.contains(&k) {
            log::error!("navigate: no renderer registered for '{k}'");
            return Err(UiError::UnknownRoute(k.to_string()));
        }
        if self.current().as_ref() == Some(&k) {
            log::debug!("navigate: '{k}' already active");
            return Ok(());
        }
        log::debug!("navigate: -> '{k}'");
        self.stack.push_inner(k);
        Ok(())
    }

    /// Navigate from an event handler, which has nobody to return an error
    /// to. A refused transition is queued for [`Navigator::take_errors`].
    pub fn go(&self, k: K) {
        if let Err(e) = self.navigate(k) {
            self.failed.borrow_mut().push(e);
        }
    }

    /// Drain the failures queued by [`Navigator::go`].
    pub fn take_errors(&self) -> Vec<UiError> {
        std::mem::take(&mut *self.failed.borrow_mut())
    }

    pub fn pop(&self) -> bool {
        // Don't pop if only one entry is present
        if self.stack.size() <= 1 {
            return false;
        }
        let ok = self.stack.pop_inner();
        if ok && let Some(k) = self.current() {
            log::debug!("pop: <- '{k}'");
        }
        ok
    }

    pub fn current(&self) -> Option<K> {
        self.stack.top().map(|(k, _, _)| k)
    }

    pub fn current_screen(&self) -> Result<EntryRenderer<K>, UiError> {
        let k = self
            .current()
            .ok_or_else(|| UiError::UnknownRoute("<empty back stack>".into()))?;
        self.routes
            .get(&k)
            .ok_or_else(|| UiError::UnknownRoute(k.to_string()))
    }

    pub fn depth(&self) -> usize {
        self.stack.size()
    }
}

pub struct EntryScope<K: NavKey> {
    key: K,
    saved: Rc<SavedState>,
    nav: Navigator<K>,
}

impl<K: NavKey> EntryScope<K> {
    pub fn key(&self) -> &K {
        &self.key
    }
    pub fn navigator(&self) -> Navigator<K> {
        self.nav.clone()
    }
    /// State that survives recomposition of this entry and is dropped when
    /// the entry is popped.
    pub fn remember_saveable<T: 'static + Clone>(
        &self,
        slot: &'static str,
        init: impl FnOnce() -> T,
    ) -> T {
        self.saved.remember(slot, init)
    }
}

/// Render the active entry inside its own scope.
pub fn NavDisplay<K: NavKey>(nav: &Navigator<K>) -> View {
    let Some((key, saved, entry_scope)) = nav.stack.top() else {
        return tour_ui::Box(Modifier::new());
    };
    let make_view = match nav.current_screen() {
        Ok(r) => r,
        Err(e) => {
            log::error!("NavDisplay: {e}");
            return Text(e.to_string()).color(theme().error);
        }
    };
    let scope = EntryScope {
        key,
        saved,
        nav: nav.clone(),
    };
    entry_scope.run(|| (make_view)(&scope))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum Key {
        Home,
        Detail,
        Orphan,
    }

    impl fmt::Display for Key {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{self:?}")
        }
    }

    fn table() -> RouteTable<Key> {
        RouteTable::new()
            .route(Key::Home, |_| Text("home"))
            .route(Key::Detail, |s| {
                let n = s.remember_saveable("n", || signal(0));
                n.update(|v| *v += 1);
                Text(format!("detail {}", n.get()))
            })
    }

    #[test]
    fn start_route_must_be_registered() {
        assert!(matches!(
            Navigator::new(Key::Orphan, table()),
            Err(UiError::UnknownRoute(ref r)) if r == "Orphan"
        ));
    }

    #[test]
    fn navigate_then_current_screen_matches_table() {
        let nav = Navigator::new(Key::Home, table()).unwrap();
        let t = table();
        for k in [Key::Detail, Key::Home] {
            nav.navigate(k).unwrap();
            assert_eq!(nav.current(), Some(k));
            let shown = NavDisplay(&nav).texts();
            let expected = (t.get(&k).unwrap())(&EntryScope {
                key: k,
                saved: Rc::new(SavedState::default()),
                nav: nav.clone(),
            })
            .texts();
            assert_eq!(shown, expected);
        }
    }

    #[test]
    fn unknown_route_is_rejected_and_state_kept() {
        let nav = Navigator::new(Key::Home, table()).unwrap();
        assert_eq!(
            nav.navigate(Key::Orphan),
            Err(UiError::UnknownRoute("Orphan".into()))
        );
        assert_eq!(nav.current(), Some(Key::Home));
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn navigate_is_single_top() {
        let nav = Navigator::new(Key::Home, table()).unwrap();
        nav.navigate(Key::Detail).unwrap();
        nav.navigate(Key::Detail).unwrap();
        assert_eq!(nav.depth(), 2);
        assert_eq!(nav.stack.keys(), vec![Key::Home, Key::Detail]);
    }

    #[test]
    fn entry_state_survives_recompose_and_dies_on_pop() {
        let nav = Navigator::new(Key::Home, table()).unwrap();
        nav.navigate(Key::Detail).unwrap();
        assert_eq!(NavDisplay(&nav).texts(), vec!["detail 1"]);
        assert_eq!(NavDisplay(&nav).texts(), vec!["detail 2"]);

        assert!(nav.pop());
        nav.navigate(Key::Detail).unwrap();
        assert_eq!(NavDisplay(&nav).texts(), vec!["detail 1"]);
    }

    #[test]
    fn pop_disposes_entry_scope() {
        let disposed = Rc::new(RefCell::new(false));
        let nav = Navigator::new(
            Key::Home,
            RouteTable::new().route(Key::Home, |_| Text("home")).route(
                Key::Detail,
                {
                    let disposed = disposed.clone();
                    move |s: &EntryScope<Key>| {
                        s.remember_saveable("hook", || {
                            if let Some(scope) = current_scope() {
                                let disposed = disposed.clone();
                                scope.add_disposer(move || *disposed.borrow_mut() = true);
                            }
                        });
                        Text("detail")
                    }
                },
            ),
        )
        .unwrap();
        nav.navigate(Key::Detail).unwrap();
        NavDisplay(&nav);
        assert!(!*disposed.borrow());
        assert!(nav.pop());
        assert!(*disposed.borrow());
    }

    #[test]
    fn pop_keeps_the_root() {
        let nav = Navigator::new(Key::Home, table()).unwrap();
        nav.navigate(Key::Detail).unwrap();
        assert!(nav.pop());
        assert_eq!(nav.current(), Some(Key::Home));
        assert!(!nav.pop());
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn go_queues_refused_transitions() {
        let nav = Navigator::new(Key::Home, table()).unwrap();
        nav.go(Key::Orphan);
        nav.go(Key::Detail);
        assert_eq!(nav.current(), Some(Key::Detail));
        assert_eq!(
            nav.take_errors(),
            vec![UiError::UnknownRoute("Orphan".into())]
        );
        assert!(nav.take_errors().is_empty());
    }
}
