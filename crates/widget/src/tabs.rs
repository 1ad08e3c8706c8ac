//! A container of tabs, each with its own inner scroll surface.
use crate::ScrollSurface;
use crate::core::{Point, Rectangle};
use crate::core::surface::Id;

use rustc_hash::FxHashMap;

/// A tab container.
///
/// Only the selected tab is visible, but the surfaces of the other tabs keep
/// existing and may still deliver late notifications.
#[derive(Debug, Clone, Default)]
pub struct Tabs {
    surfaces: FxHashMap<Id, ScrollSurface>,
    order: Vec<Id>,
    selected: Option<Id>,
}

impl Tabs {
    /// Creates an empty [`Tabs`] container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a new tab and returns the [`Id`] of its surface.
    ///
    /// The first tab added becomes the selected one.
    pub fn push(&mut self) -> Id {
        let surface = ScrollSurface::inner();
        let id = surface.id();

        let _ = self.surfaces.insert(id, surface);
        self.order.push(id);

        if self.selected.is_none() {
            self.selected = Some(id);
        }

        id
    }

    /// Selects the tab with the given [`Id`].
    ///
    /// Returns `false` if there is no such tab.
    pub fn select(&mut self, id: Id) -> bool {
        if !self.surfaces.contains_key(&id) {
            return false;
        }

        self.selected = Some(id);
        true
    }

    /// Returns the [`Id`] of the selected tab.
    pub fn selected(&self) -> Option<Id> {
        self.selected
    }

    /// Returns the surface of the tab with the given [`Id`].
    pub fn get(&self, id: Id) -> Option<&ScrollSurface> {
        self.surfaces.get(&id)
    }

    /// Returns the surface of the tab with the given [`Id`] mutably.
    pub fn get_mut(&mut self, id: Id) -> Option<&mut ScrollSurface> {
        self.surfaces.get_mut(&id)
    }

    /// Returns the [`Id`]s of all tabs, in insertion order.
    pub fn ids(&self) -> &[Id] {
        &self.order
    }

    /// Returns the number of tabs.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns whether the container has no tabs.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Lays out every tab page to fill the given bounds.
    pub(crate) fn layout(&mut self, bounds: Rectangle) {
        let page = Rectangle::new(Point::ORIGIN, bounds.size());

        for surface in self.surfaces.values_mut() {
            surface.set_bounds(page);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_tab_is_selected() {
        let mut tabs = Tabs::new();
        assert!(tabs.is_empty());

        let first = tabs.push();
        let second = tabs.push();

        assert_eq!(tabs.len(), 2);
        assert_eq!(tabs.selected(), Some(first));
        assert_eq!(tabs.ids(), &[first, second]);
    }

    #[test]
    fn test_select_unknown_tab() {
        let mut tabs = Tabs::new();
        let first = tabs.push();
        let stranger = ScrollSurface::inner().id();

        assert!(!tabs.select(stranger));
        assert_eq!(tabs.selected(), Some(first));
    }

    #[test]
    fn test_layout_fills_pages() {
        let mut tabs = Tabs::new();
        let id = tabs.push();

        tabs.layout(Rectangle {
            x: 0.0,
            y: 100.0,
            width: 320.0,
            height: 400.0,
        });

        let bounds = tabs.get(id).map(ScrollSurface::bounds);

        assert_eq!(
            bounds,
            Some(Rectangle {
                x: 0.0,
                y: 0.0,
                width: 320.0,
                height: 400.0,
            })
        );
    }
}
