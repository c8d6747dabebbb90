//! Single-selection document router.
//!
//! The router is handed its collaborators explicitly: a list of links and an
//! optional content area. Mounting either succeeds, registering an activation
//! handler on every link and selecting the first one, or leaves everything
//! untouched when a collaborator is missing.
//!
//! Selection runs synchronously on the UI thread. It clears every link, marks
//! the triggering link active and replaces the content area in one call, so
//! no reader can observe zero or two active links between events.

#[cfg(test)]
#[path = "router_test.rs"]
mod router_test;

use std::cell::Cell;
use std::rc::Rc;

use crate::registry::DocumentRegistry;

/// A selectable link naming one registry key.
pub trait LinkElement {
    /// The registry key carried by the link, or `None` when the attribute is absent.
    fn registry_key(&self) -> Option<String>;

    /// Set or clear the link's active visual state.
    fn set_active(&self, active: bool);

    /// Subscribe `handler` to the link's activation (click) event.
    ///
    /// The handler must be invoked synchronously for every activation.
    fn on_activate(&self, handler: Box<dyn Fn()>);
}

/// The region that displays the selected fragment.
pub trait ContentArea {
    /// Replace the area's markup with `fragment`, discarding what was there.
    fn replace_content(&self, fragment: &str);
}

struct Shared<L, C> {
    registry: DocumentRegistry,
    links: Vec<L>,
    content: C,
    active: Cell<Option<usize>>,
}

impl<L: LinkElement, C: ContentArea> Shared<L, C> {
    fn select(&self, index: usize) {
        let Some(selected) = self.links.get(index) else {
            return;
        };

        for link in &self.links {
            link.set_active(false);
        }
        selected.set_active(true);
        self.active.set(Some(index));

        let key = selected.registry_key();
        self.content.replace_content(self.registry.resolve(key.as_deref()));
    }
}

/// A mounted router in the ready state.
///
/// Activation handlers hold a strong reference to the router's state, so the
/// state lives as long as the links keep their handlers.
pub struct DocumentRouter<L, C> {
    shared: Rc<Shared<L, C>>,
}

impl<L, C> DocumentRouter<L, C>
where
    L: LinkElement + 'static,
    C: ContentArea + 'static,
{
    /// Mount the router over `links` and `content`.
    ///
    /// Returns `None`, without touching any collaborator, when `links` is
    /// empty or `content` is absent. Otherwise every link gets an activation
    /// handler and the first link is selected as if it had been clicked.
    #[must_use]
    pub fn mount(registry: DocumentRegistry, links: Vec<L>, content: Option<C>) -> Option<Self> {
        let content = content?;
        if links.is_empty() {
            return None;
        }

        let shared = Rc::new(Shared {
            registry,
            links,
            content,
            active: Cell::new(None),
        });

        for (index, link) in shared.links.iter().enumerate() {
            let state = Rc::clone(&shared);
            link.on_activate(Box::new(move || state.select(index)));
        }

        shared.select(0);
        log::debug!(
            "document router ready: links={} documents={}",
            shared.links.len(),
            shared.registry.len()
        );

        Some(Self { shared })
    }

    /// Select the link at `index`, exactly as if it had been activated.
    ///
    /// Out-of-range indices are ignored.
    pub fn select(&self, index: usize) {
        self.shared.select(index);
    }

    /// Index of the active link. Always `Some` once mounted.
    #[must_use]
    pub fn active_index(&self) -> Option<usize> {
        self.shared.active.get()
    }

    /// The active link's registry key.
    #[must_use]
    pub fn active_key(&self) -> Option<String> {
        let index = self.active_index()?;
        self.shared.links.get(index)?.registry_key()
    }
}
