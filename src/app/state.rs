// src/app/state.rs

use eframe::egui::{Pos2, Rect};

use crate::{
    config::{DF, LAYOUT},
    domain::NotificationState,
};

#[derive(Clone, Default)]
pub(crate) struct BootState;

#[derive(Clone)]
pub(crate) struct RunningState;

pub(crate) enum AppState {
    Booting(BootState),
    Running(RunningState),
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Booting(BootState)
    }
}

/// Sidebar layout flags. Nothing here is persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SidebarState {
    /// Desktop: narrow icon-only sidebar
    pub collapsed: bool,
    /// Mobile: sidebar overlay shown
    pub active: bool,
}

impl SidebarState {
    pub fn is_mobile(viewport_width: f32) -> bool {
        viewport_width <= LAYOUT.mobile_breakpoint
    }

    pub fn toggle_collapsed(&mut self) {
        self.collapsed = !self.collapsed;
    }

    pub fn toggle_active(&mut self) {
        self.active = !self.active;
    }

    /// Page-level click: at mobile widths, a click outside both the sidebar
    /// and the mobile toggle closes an active sidebar.
    pub fn handle_page_click(
        &mut self,
        viewport_width: f32,
        in_sidebar: bool,
        in_mobile_toggle: bool,
    ) {
        let outside = !in_sidebar && !in_mobile_toggle;
        if Self::is_mobile(viewport_width) && self.active && outside {
            self.active = false;
        }
    }
}

/// The frame's primary click as seen by page-level handlers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageClick {
    pub pos: Pos2,
    propagation_stopped: bool,
}

impl PageClick {
    pub fn new(pos: Pos2) -> Self {
        Self {
            pos,
            propagation_stopped: false,
        }
    }

    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    pub fn is_stopped(&self) -> bool {
        self.propagation_stopped
    }
}

/// Areas recorded while rendering, used to resolve page clicks.
#[derive(Debug, Clone, Default)]
pub(crate) struct HitAreas {
    pub(crate) sidebar: Option<Rect>,
    pub(crate) mobile_toggle: Option<Rect>,
    pub(crate) bell: Option<Rect>,
    pub(crate) dropdown: Option<Rect>,
}

impl HitAreas {
    fn within(rect: Option<Rect>, pos: Pos2) -> bool {
        rect.is_some_and(|r| r.contains(pos))
    }

    pub(crate) fn in_sidebar(&self, pos: Pos2) -> bool {
        Self::within(self.sidebar, pos)
    }

    pub(crate) fn in_mobile_toggle(&self, pos: Pos2) -> bool {
        Self::within(self.mobile_toggle, pos)
    }

    /// Bell plus its dropdown panel.
    pub(crate) fn in_notification(&self, pos: Pos2) -> bool {
        Self::within(self.bell, pos) || Self::within(self.dropdown, pos)
    }
}

/// Resolves the frame's click once every widget has been drawn.
///
/// A click on the bell or inside its panel toggles the dropdown and stops
/// there. Any other click reaches the page-level close handlers.
pub(crate) fn route_page_click(
    click: Option<PageClick>,
    hits: &HitAreas,
    bell_clicked: bool,
    viewport_width: f32,
    sidebar: &mut SidebarState,
    notifications: &mut NotificationState,
) {
    let mut click = click;
    let in_subtree = bell_clicked || click.is_some_and(|c| hits.in_notification(c.pos));
    if in_subtree {
        if let Some(click) = click.as_mut() {
            click.stop_propagation();
        }
        let open = notifications.toggle();
        if DF.log_layout {
            log::info!("Notification dropdown open: {}", open);
        }
    }

    let Some(click) = click.filter(|c| !c.is_stopped()) else {
        return;
    };
    sidebar.handle_page_click(
        viewport_width,
        hits.in_sidebar(click.pos),
        hits.in_mobile_toggle(click.pos),
    );
    notifications.handle_page_click(hits.in_notification(click.pos));
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::pos2;

    #[test]
    fn test_desktop_toggle() {
        let mut s = SidebarState::default();
        s.toggle_collapsed();
        assert!(s.collapsed);
        s.toggle_collapsed();
        assert!(!s.collapsed);
    }

    #[test]
    fn test_outside_click_closes_on_mobile() {
        let mut s = SidebarState::default();
        s.toggle_active();
        s.handle_page_click(768.0, false, false);
        assert!(!s.active);
    }

    #[test]
    fn test_inside_clicks_keep_open() {
        let mut s = SidebarState::default();
        s.toggle_active();
        s.handle_page_click(500.0, true, false);
        assert!(s.active);
        s.handle_page_click(500.0, false, true);
        assert!(s.active);
    }

    #[test]
    fn test_wide_viewport_ignores_outside_click() {
        let mut s = SidebarState::default();
        s.toggle_active();
        s.handle_page_click(769.0, false, false);
        assert!(s.active);
    }

    #[test]
    fn test_hit_areas() {
        let hits = HitAreas {
            bell: Some(Rect::from_min_max(pos2(100.0, 0.0), pos2(120.0, 20.0))),
            dropdown: Some(Rect::from_min_max(pos2(0.0, 30.0), pos2(120.0, 120.0))),
            ..Default::default()
        };
        assert!(hits.in_notification(pos2(110.0, 10.0)));
        assert!(hits.in_notification(pos2(50.0, 60.0)));
        assert!(!hits.in_notification(pos2(300.0, 300.0)));
        assert!(!hits.in_sidebar(pos2(10.0, 10.0)));
    }

    #[test]
    fn test_page_click_propagation() {
        let mut click = PageClick::new(pos2(1.0, 1.0));
        assert!(!click.is_stopped());
        click.stop_propagation();
        assert!(click.is_stopped());
    }

    fn header_hits() -> HitAreas {
        HitAreas {
            sidebar: Some(Rect::from_min_max(pos2(0.0, 48.0), pos2(220.0, 600.0))),
            mobile_toggle: Some(Rect::from_min_max(pos2(4.0, 4.0), pos2(28.0, 28.0))),
            bell: Some(Rect::from_min_max(pos2(560.0, 4.0), pos2(584.0, 28.0))),
            dropdown: None,
        }
    }

    #[test]
    fn test_bell_click_does_not_close_mobile_sidebar() {
        let hits = header_hits();
        let mut sidebar = SidebarState::default();
        sidebar.toggle_active();
        let mut alerts = NotificationState::default();

        let click = Some(PageClick::new(pos2(570.0, 16.0)));
        route_page_click(click, &hits, true, 600.0, &mut sidebar, &mut alerts);

        assert!(sidebar.active);
        assert!(alerts.is_open());
        assert_eq!(alerts.items().len(), 3);
    }

    #[test]
    fn test_click_inside_open_panel_toggles_it_closed() {
        let mut hits = header_hits();
        hits.dropdown = Some(Rect::from_min_max(pos2(324.0, 34.0), pos2(584.0, 160.0)));
        let mut sidebar = SidebarState::default();
        sidebar.toggle_active();
        let mut alerts = NotificationState::default();
        alerts.toggle();

        let click = Some(PageClick::new(pos2(400.0, 100.0)));
        route_page_click(click, &hits, false, 600.0, &mut sidebar, &mut alerts);

        assert!(!alerts.is_open());
        assert!(sidebar.active);
    }

    #[test]
    fn test_other_header_clicks_close_open_panel() {
        let hits = header_hits();

        // Theme switch: outside every tracked area.
        let mut sidebar = SidebarState::default();
        let mut alerts = NotificationState::default();
        alerts.toggle();
        let click = Some(PageClick::new(pos2(530.0, 16.0)));
        route_page_click(click, &hits, false, 1024.0, &mut sidebar, &mut alerts);
        assert!(!alerts.is_open());

        // Mobile toggle: the header already flipped the sidebar open.
        let mut sidebar = SidebarState::default();
        sidebar.toggle_active();
        let mut alerts = NotificationState::default();
        alerts.toggle();
        let click = Some(PageClick::new(pos2(16.0, 16.0)));
        route_page_click(click, &hits, false, 600.0, &mut sidebar, &mut alerts);
        assert!(!alerts.is_open());
        assert!(sidebar.active);
    }

    #[test]
    fn test_outside_click_closes_sidebar_and_panel() {
        let hits = header_hits();
        let mut sidebar = SidebarState::default();
        sidebar.toggle_active();
        let mut alerts = NotificationState::default();
        alerts.toggle();

        let click = Some(PageClick::new(pos2(400.0, 400.0)));
        route_page_click(click, &hits, false, 600.0, &mut sidebar, &mut alerts);

        assert!(!sidebar.active);
        assert!(!alerts.is_open());
    }

    #[test]
    fn test_keyboard_bell_activation_without_pointer() {
        let hits = header_hits();
        let mut sidebar = SidebarState::default();
        let mut alerts = NotificationState::default();

        route_page_click(None, &hits, true, 1024.0, &mut sidebar, &mut alerts);
        assert!(alerts.is_open());
        route_page_click(None, &hits, true, 1024.0, &mut sidebar, &mut alerts);
        assert!(!alerts.is_open());
    }
}
