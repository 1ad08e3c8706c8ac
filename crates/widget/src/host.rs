//! Lay out a collapsing header screen and relay its scroll notifications.
use crate::core::scrollable::{Scrollable, Surfaces};
use crate::core::surface::Id;
use crate::core::{AbsoluteOffset, Padding, Point, Rectangle, Settings, Shell, Size};
use crate::{Arbitrator, Listener, ScrollSurface, Tabs};

/// The host of a collapsing header screen.
///
/// It owns three regions:
///
/// - an outer scroll surface filling the safe area, whose only scrollable
///   range is its top inset;
/// - a header, as tall as the minimum header height plus the distance the
///   outer surface has been pulled down;
/// - a [`Tabs`] container filling the rest, whose selected tab holds the
///   inner scroll surface.
///
/// The host plays the part of the platform: it moves surfaces on behalf of the
/// user and reports every drag-begin and offset change to its [`Arbitrator`].
/// An offset correction made by the arbitrator is reported back to it as a new
/// scroll notification, as a platform scroll view would.
///
/// ```
/// use nested_scroll_widget::Host;
/// use nested_scroll_widget::core::{AbsoluteOffset, Padding, Settings, Size};
///
/// let mut host = Host::new(Settings::default());
/// let _tab = host.add_tab();
///
/// host.layout(Size::new(390.0, 844.0), Padding::ZERO);
/// host.on_appear();
/// assert_eq!(host.header_height(), 100.0);
///
/// host.drag_outer_begin();
/// host.scroll_outer_to(AbsoluteOffset::vertical(-60.0));
///
/// assert!(host.layout_if_needed());
/// assert_eq!(host.header_height(), 160.0);
/// ```
#[derive(Debug)]
pub struct Host {
    settings: Settings,
    arbitrator: Arbitrator,
    shell: Shell,
    surfaces: Tree,
    viewport: Size,
    safe_area: Padding,
    header: Rectangle,
    container: Rectangle,
}

impl Host {
    /// Creates a new [`Host`] with the given [`Settings`] and no tabs.
    pub fn new(settings: Settings) -> Self {
        let shell = Shell::new();

        let mut arbitrator = Arbitrator::new();
        arbitrator.set_layout_handle(shell.handle());

        Self {
            settings,
            arbitrator,
            shell,
            surfaces: Tree {
                outer: ScrollSurface::outer(settings.top_inset()),
                tabs: Tabs::new(),
            },
            viewport: Size::ZERO,
            safe_area: Padding::ZERO,
            header: Rectangle::ZERO,
            container: Rectangle::ZERO,
        }
    }

    /// Returns the [`Settings`] of the [`Host`].
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Returns the [`Arbitrator`] of the [`Host`].
    pub fn arbitrator(&self) -> &Arbitrator {
        &self.arbitrator
    }

    /// Returns the outer surface.
    pub fn outer(&self) -> &ScrollSurface {
        &self.surfaces.outer
    }

    /// Returns the [`Tabs`] container.
    pub fn tabs(&self) -> &Tabs {
        &self.surfaces.tabs
    }

    /// Adds a new tab and returns the [`Id`] of its inner surface.
    pub fn add_tab(&mut self) -> Id {
        let id = self.surfaces.tabs.push();
        self.shell.invalidate_layout();

        id
    }

    /// Selects the tab with the given [`Id`].
    ///
    /// Returns `false` if there is no such tab.
    pub fn select_tab(&mut self, id: Id) -> bool {
        self.surfaces.tabs.select(id)
    }

    /// Returns the [`Id`] of the selected tab.
    pub fn selected_tab(&self) -> Option<Id> {
        self.surfaces.tabs.selected()
    }

    /// The screen became visible.
    ///
    /// The header always starts collapsed.
    pub fn on_appear(&mut self) {
        if self.surfaces.outer.set_offset(AbsoluteOffset::ZERO) {
            log::trace!("screen appeared, collapsing header");
        }

        self.shell.invalidate_layout();
    }

    /// The user started dragging the outer surface.
    pub fn drag_outer_begin(&mut self) {
        let id = self.surfaces.outer.id();

        self.arbitrator.outer().on_drag_begin(id, &mut self.surfaces);
    }

    /// The user moved the outer surface to the given offset.
    ///
    /// The offset is clamped to the range of the outer surface.
    pub fn scroll_outer_to(&mut self, offset: AbsoluteOffset) {
        if self.surfaces.outer.set_offset(offset) {
            self.deliver_scroll(self.surfaces.outer.id());
        }
    }

    /// The user started dragging the inner surface of the given tab.
    pub fn drag_inner_begin(&mut self, id: Id) {
        if self.surfaces.tabs.get(id).is_none() {
            log::trace!("drag began on unknown {id}");
            return;
        }

        self.arbitrator.inner().on_drag_begin(id, &mut self.surfaces);
    }

    /// The inner surface of the given tab moved to the given offset.
    ///
    /// Any tab can report, including the ones that are no longer selected.
    pub fn scroll_inner_to(&mut self, id: Id, offset: AbsoluteOffset) {
        let Some(surface) = self.surfaces.tabs.get_mut(id) else {
            log::trace!("scroll reported by unknown {id}");
            return;
        };

        if surface.set_offset(offset) {
            self.deliver_scroll(id);
        }
    }

    /// Returns the current offset of the outer surface.
    pub fn outer_offset(&self) -> AbsoluteOffset {
        self.surfaces.outer.offset()
    }

    /// Returns the current offset of the inner surface of the given tab.
    pub fn inner_offset(&self, id: Id) -> Option<AbsoluteOffset> {
        self.surfaces.tabs.get(id).map(ScrollSurface::offset)
    }

    /// Returns whether a layout pass is pending.
    pub fn is_layout_invalid(&self) -> bool {
        self.shell.is_layout_invalid()
    }

    /// Lays out the screen for the given viewport and safe area.
    pub fn layout(&mut self, viewport: Size, safe_area: Padding) {
        self.viewport = viewport;
        self.safe_area = safe_area;

        let min = self.settings.min_header_height;
        let max = self.settings.max_header_height.max(min);

        let container = viewport.shrink(safe_area.horizontal(), safe_area.vertical());
        let origin = Point::new(safe_area.left, safe_area.top);

        let outer = &mut self.surfaces.outer;
        outer.set_bounds(Rectangle::new(origin, container));
        outer.set_content_size(container);
        outer.set_top_inset(self.settings.top_inset());

        let header_height = (min + outer.offset().y.abs()).min(max);

        self.header = Rectangle::new(origin, Size::new(container.width, header_height));
        self.container = Rectangle {
            x: 0.0,
            y: min,
            width: container.width,
            height: (container.height - header_height).max(0.0),
        };

        self.surfaces.tabs.layout(self.container);
    }

    /// Runs a layout pass with the last viewport and safe area if the layout
    /// was invalidated since the previous pass.
    ///
    /// Returns whether a pass ran.
    pub fn layout_if_needed(&mut self) -> bool {
        let mut is_needed = false;
        self.shell.revalidate_layout(|| is_needed = true);

        if is_needed {
            self.layout(self.viewport, self.safe_area);
        }

        is_needed
    }

    /// Returns the frame of the header.
    pub fn header_frame(&self) -> Rectangle {
        self.header
    }

    /// Returns the height of the header.
    pub fn header_height(&self) -> f32 {
        self.header.height
    }

    /// Returns the frame of the outer surface.
    pub fn outer_frame(&self) -> Rectangle {
        self.surfaces.outer.bounds()
    }

    /// Returns the frame of the tab container, relative to the outer surface.
    pub fn container_frame(&self) -> Rectangle {
        self.container
    }

    fn deliver_scroll(&mut self, id: Id) {
        let is_outer = id == self.surfaces.outer.id();
        let limit = self.settings.max_feedback_notifications.max(1);

        for _ in 0..limit {
            if is_outer {
                self.arbitrator
                    .outer()
                    .on_scroll_changed(id, &mut self.surfaces);
            } else {
                self.arbitrator
                    .inner()
                    .on_scroll_changed(id, &mut self.surfaces);
            }

            let is_pending = self
                .surfaces
                .get_mut(id)
                .is_some_and(ScrollSurface::take_notification);

            if !is_pending {
                return;
            }
        }

        log::warn!("{id} still moving after {limit} scroll notifications");
    }
}

impl Default for Host {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

#[derive(Debug)]
struct Tree {
    outer: ScrollSurface,
    tabs: Tabs,
}

impl Tree {
    fn get_mut(&mut self, id: Id) -> Option<&mut ScrollSurface> {
        if id == self.outer.id() {
            Some(&mut self.outer)
        } else {
            self.tabs.get_mut(id)
        }
    }
}

impl Surfaces for Tree {
    fn surface(&self, id: Id) -> Option<&dyn Scrollable> {
        if id == self.outer.id() {
            return Some(&self.outer);
        }

        self.tabs
            .get(id)
            .map(|surface| surface as &dyn Scrollable)
    }

    fn surface_mut(&mut self, id: Id) -> Option<&mut dyn Scrollable> {
        self.get_mut(id).map(|surface| surface as &mut dyn Scrollable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Owner;

    fn phone() -> (Size, Padding) {
        (
            Size::new(390.0, 844.0),
            Padding {
                top: 47.0,
                right: 0.0,
                bottom: 34.0,
                left: 0.0,
            },
        )
    }

    fn host_with_tabs(count: usize) -> (Host, Vec<Id>) {
        let mut host = Host::default();
        let tabs = (0..count).map(|_| host.add_tab()).collect();

        let (viewport, safe_area) = phone();
        host.layout(viewport, safe_area);
        host.on_appear();
        let _ = host.layout_if_needed();

        (host, tabs)
    }

    #[test]
    fn test_layout_frames() {
        let (host, _) = host_with_tabs(1);

        assert_eq!(
            host.outer_frame(),
            Rectangle {
                x: 0.0,
                y: 47.0,
                width: 390.0,
                height: 763.0,
            }
        );
        assert_eq!(host.outer().content_size(), Size::new(390.0, 763.0));
        assert_eq!(host.outer().top_inset(), 100.0);
        assert_eq!(
            host.header_frame(),
            Rectangle {
                x: 0.0,
                y: 47.0,
                width: 390.0,
                height: 100.0,
            }
        );
        assert_eq!(
            host.container_frame(),
            Rectangle {
                x: 0.0,
                y: 100.0,
                width: 390.0,
                height: 663.0,
            }
        );
    }

    #[test]
    fn test_header_follows_outer() {
        let (mut host, _) = host_with_tabs(1);

        host.drag_outer_begin();
        host.scroll_outer_to(AbsoluteOffset::vertical(-60.0));

        assert!(host.is_layout_invalid());
        assert!(host.layout_if_needed());
        assert_eq!(host.header_height(), 160.0);
        assert_eq!(host.header_frame().position(), host.outer_frame().position());
        assert_eq!(host.container_frame().height, 603.0);

        assert!(!host.layout_if_needed());
    }

    #[test]
    fn test_header_never_exceeds_max() {
        let (mut host, _) = host_with_tabs(1);

        host.drag_outer_begin();
        host.scroll_outer_to(AbsoluteOffset::vertical(-500.0));
        let _ = host.layout_if_needed();

        assert_eq!(host.outer_offset(), AbsoluteOffset::vertical(-100.0));
        assert_eq!(host.header_height(), 200.0);
        assert!(host.arbitrator().header_is_max(&host.surfaces));
    }

    #[test]
    fn test_on_appear_collapses_header() {
        let (mut host, _) = host_with_tabs(1);

        host.drag_outer_begin();
        host.scroll_outer_to(AbsoluteOffset::vertical(-80.0));
        let _ = host.layout_if_needed();
        assert_eq!(host.header_height(), 180.0);

        host.on_appear();

        assert_eq!(host.outer_offset(), AbsoluteOffset::ZERO);
        assert!(host.layout_if_needed());
        assert_eq!(host.header_height(), 100.0);
    }

    #[test]
    fn test_disabled_outer_converges() {
        let (mut host, tabs) = host_with_tabs(1);

        host.drag_outer_begin();
        host.drag_inner_begin(tabs[0]);
        host.scroll_inner_to(tabs[0], AbsoluteOffset::vertical(10.0));
        assert_eq!(host.arbitrator().owner(), Owner::Inner);

        host.drag_outer_begin();
        host.scroll_outer_to(AbsoluteOffset::vertical(-40.0));

        assert_eq!(host.outer_offset(), AbsoluteOffset::ZERO);
        assert!(!host.surfaces.outer.take_notification());
        assert!(!host.is_layout_invalid());
    }

    #[test]
    fn test_inner_pull_up_while_header_expanded() {
        let (mut host, tabs) = host_with_tabs(1);
        assert_eq!(host.header_height(), 100.0);

        host.drag_outer_begin();
        host.scroll_outer_to(AbsoluteOffset::vertical(-50.0));
        let _ = host.layout_if_needed();
        assert_eq!(host.header_height(), 150.0);

        host.drag_inner_begin(tabs[0]);
        host.scroll_inner_to(tabs[0], AbsoluteOffset::vertical(10.0));

        assert!(host.arbitrator().state().main_scroll_enabled);
        assert_eq!(host.inner_offset(tabs[0]), Some(AbsoluteOffset::ZERO));

        let _ = host.layout_if_needed();
        assert_eq!(host.header_height(), 150.0);
    }

    #[test]
    fn test_inner_pull_down_reveals_header() {
        let (mut host, tabs) = host_with_tabs(1);

        host.drag_outer_begin();
        host.scroll_outer_to(AbsoluteOffset::vertical(-50.0));
        host.drag_inner_begin(tabs[0]);
        host.scroll_inner_to(tabs[0], AbsoluteOffset::vertical(-12.0));

        assert_eq!(host.arbitrator().owner(), Owner::Outer);
        assert_eq!(host.inner_offset(tabs[0]), Some(AbsoluteOffset::ZERO));
    }

    #[test]
    fn test_stale_tab_is_ignored() {
        let (mut host, tabs) = host_with_tabs(2);

        host.drag_outer_begin();
        host.drag_inner_begin(tabs[0]);
        host.scroll_inner_to(tabs[0], AbsoluteOffset::vertical(10.0));
        assert!(host.select_tab(tabs[1]));
        host.drag_inner_begin(tabs[1]);
        let state = *host.arbitrator().state();

        host.scroll_inner_to(tabs[0], AbsoluteOffset::vertical(30.0));

        assert_eq!(*host.arbitrator().state(), state);
        assert_eq!(host.inner_offset(tabs[0]), Some(AbsoluteOffset::vertical(30.0)));
    }

    #[test]
    fn test_tab_switch_enables_outer() {
        let (mut host, tabs) = host_with_tabs(2);

        host.drag_outer_begin();
        host.drag_inner_begin(tabs[0]);
        host.scroll_inner_to(tabs[0], AbsoluteOffset::vertical(10.0));
        assert_eq!(host.arbitrator().owner(), Owner::Inner);

        assert!(host.select_tab(tabs[1]));
        host.drag_inner_begin(tabs[1]);

        assert_eq!(host.selected_tab(), Some(tabs[1]));
        assert_eq!(host.arbitrator().owner(), Owner::Outer);
    }

    #[test]
    fn test_unknown_tab_is_ignored() {
        let (mut host, _) = host_with_tabs(1);
        let stranger = ScrollSurface::inner().id();

        host.drag_inner_begin(stranger);
        host.scroll_inner_to(stranger, AbsoluteOffset::vertical(10.0));

        assert_eq!(host.arbitrator().state().active_inner, None);
        assert_eq!(host.inner_offset(stranger), None);
    }

    #[test]
    fn test_zero_feedback_limit_still_delivers() {
        let mut host = Host::new(Settings {
            max_feedback_notifications: 0,
            ..Settings::default()
        });
        let _ = host.add_tab();
        host.layout(Size::new(320.0, 640.0), Padding::ZERO);
        let _ = host.layout_if_needed();

        host.drag_outer_begin();
        host.scroll_outer_to(AbsoluteOffset::vertical(-20.0));

        assert!(host.layout_if_needed());
        assert_eq!(host.header_height(), 120.0);
    }

    #[test]
    fn test_tab_pages_fill_container() {
        let (host, tabs) = host_with_tabs(2);

        for id in tabs {
            let bounds = host.tabs().get(id).map(ScrollSurface::bounds);

            assert_eq!(
                bounds,
                Some(Rectangle {
                    x: 0.0,
                    y: 0.0,
                    width: 390.0,
                    height: 663.0,
                })
            );
        }
    }
}
