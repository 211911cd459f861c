//! Disclosure state for collapsible panels (mobile menu, dropdowns)
//!
//! Each panel is an independent two-state machine. Opening one panel never
//! closes another; only [`DisclosureController::dismiss_all`] (normally
//! driven by a pointer-down outside the component) touches every panel.

use std::collections::BTreeMap;
use std::fmt;

use tracing::debug;

use crate::nav::Navigation;

/// Identifies one collapsible region within a component
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PanelId {
    /// The single mobile navigation menu
    MobileMenu,
    /// A dropdown, keyed by its label
    Dropdown(String),
}

impl From<&str> for PanelId {
    fn from(label: &str) -> Self {
        PanelId::Dropdown(label.to_string())
    }
}

impl From<String> for PanelId {
    fn from(label: String) -> Self {
        PanelId::Dropdown(label)
    }
}

impl From<&PanelId> for PanelId {
    fn from(id: &PanelId) -> Self {
        id.clone()
    }
}

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PanelId::MobileMenu => write!(f, "mobile menu"),
            PanelId::Dropdown(label) => write!(f, "dropdown '{label}'"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PanelState {
    #[default]
    Closed,
    Open,
}

impl PanelState {
    pub fn toggled(self) -> Self {
        match self {
            PanelState::Closed => PanelState::Open,
            PanelState::Open => PanelState::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        self == PanelState::Open
    }
}

/// Open/closed state of every panel in one component instance.
///
/// Panels never registered or toggled read as closed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DisclosureState {
    panels: BTreeMap<PanelId, PanelState>,
}

impl DisclosureState {
    pub fn state(&self, id: &PanelId) -> PanelState {
        self.panels.get(id).copied().unwrap_or_default()
    }

    pub fn is_open(&self, id: impl Into<PanelId>) -> bool {
        self.state(&id.into()).is_open()
    }

    pub fn any_open(&self) -> bool {
        self.panels.values().any(|s| s.is_open())
    }

    pub fn open_panels(&self) -> impl Iterator<Item = &PanelId> {
        self.panels
            .iter()
            .filter(|(_, s)| s.is_open())
            .map(|(id, _)| id)
    }

    /// Every known panel with its state, in identifier order
    pub fn iter(&self) -> impl Iterator<Item = (&PanelId, PanelState)> {
        self.panels.iter().map(|(id, s)| (id, *s))
    }
}

/// A point in the same coordinate space as the component's [`Bounds`]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned bounding box of a rendered component
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Edges count as inside
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }
}

/// Where a pointer-down landed relative to a component
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PressTarget {
    /// On the component or anything it renders, including open menus
    Inside,
    Outside,
}

type ChangeListener = Box<dyn FnMut(&DisclosureState)>;

/// Owns a component's [`DisclosureState`] and applies transitions to it.
///
/// Every transition returns the resulting state. A listener registered
/// with [`on_change`](Self::on_change) is called synchronously once per
/// transition that actually changed something.
#[derive(Default)]
pub struct DisclosureController {
    state: DisclosureState,
    on_change: Option<ChangeListener>,
}

impl fmt::Debug for DisclosureController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DisclosureController")
            .field("state", &self.state)
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}

impl DisclosureController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Controller with the given panels registered, all closed
    pub fn with_panels<I>(panels: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<PanelId>,
    {
        let mut controller = Self::new();
        for id in panels {
            controller.register(id);
        }
        controller
    }

    /// Controller for a header: the mobile menu plus one panel per dropdown group
    pub fn for_navigation(navigation: &Navigation) -> Self {
        let mut controller = Self::with_panels([PanelId::MobileMenu]);
        for group in navigation.dropdown_items() {
            controller.register(group.label.as_str());
        }
        controller
    }

    /// Register a panel as closed. Already-known panels keep their state.
    pub fn register(&mut self, id: impl Into<PanelId>) {
        self.state.panels.entry(id.into()).or_default();
    }

    /// Subscribe to state changes, replacing any previous listener
    pub fn on_change(mut self, listener: impl FnMut(&DisclosureState) + 'static) -> Self {
        self.on_change = Some(Box::new(listener));
        self
    }

    pub fn state(&self) -> &DisclosureState {
        &self.state
    }

    pub fn is_open(&self, id: impl Into<PanelId>) -> bool {
        self.state.is_open(id)
    }

    /// Flip one panel. Other panels are untouched.
    pub fn toggle(&mut self, id: impl Into<PanelId>) -> &DisclosureState {
        let id = id.into();
        let panel = self.state.panels.entry(id.clone()).or_default();
        *panel = panel.toggled();
        debug!(target: "vela::disclosure", "{id} -> {:?}", *panel);
        self.notify();
        &self.state
    }

    /// Close one panel, e.g. after the user picked one of its items
    pub fn request_close(&mut self, id: impl Into<PanelId>) -> &DisclosureState {
        let id = id.into();
        if let Some(panel) = self.state.panels.get_mut(&id) {
            if panel.is_open() {
                *panel = PanelState::Closed;
                debug!(target: "vela::disclosure", "{id} closed on request");
                self.notify();
            }
        }
        &self.state
    }

    /// Close every panel
    pub fn dismiss_all(&mut self) -> &DisclosureState {
        if self.state.any_open() {
            for panel in self.state.panels.values_mut() {
                *panel = PanelState::Closed;
            }
            debug!(target: "vela::disclosure", "all panels dismissed");
            self.notify();
        }
        &self.state
    }

    /// Pointer-down whose containment the caller already decided, e.g. by
    /// walking the DOM from the event target. Only an outside press
    /// dismisses.
    pub fn press(&mut self, target: PressTarget) -> &DisclosureState {
        match target {
            PressTarget::Inside => &self.state,
            PressTarget::Outside => self.dismiss_all(),
        }
    }

    /// Pointer-down notification. Dismisses everything when `point` falls
    /// outside the component's `bounds`; a pointer inside changes nothing.
    pub fn pointer_down(&mut self, point: Point, bounds: Bounds) -> &DisclosureState {
        self.pointer_down_within(point, &[bounds])
    }

    /// Like [`pointer_down`](Self::pointer_down) for a component that spans
    /// several regions, such as a toggle and the menu floating below it.
    pub fn pointer_down_within(&mut self, point: Point, regions: &[Bounds]) -> &DisclosureState {
        let target = if regions.iter().any(|r| r.contains(point)) {
            PressTarget::Inside
        } else {
            PressTarget::Outside
        };
        self.press(target)
    }

    fn notify(&mut self) {
        if let Some(listener) = self.on_change.as_mut() {
            listener(&self.state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn nav_controller() -> DisclosureController {
        DisclosureController::with_panels(["Products", "Resources", "Company"])
    }

    #[test]
    fn test_initially_closed() {
        let controller = nav_controller();
        assert_eq!(controller.state().iter().count(), 3);
        assert!(!controller.state().any_open());
        assert!(!controller.is_open("Unknown"));
    }

    #[test]
    fn test_toggle_opens_then_closes() {
        let mut controller = nav_controller();
        assert!(controller.toggle("Products").is_open("Products"));
        assert!(!controller.toggle("Products").is_open("Products"));
    }

    #[test]
    fn test_toggle_is_independent() {
        let mut controller = nav_controller();
        controller.toggle("Resources");
        let state = controller.toggle("Products");
        assert!(state.is_open("Products"));
        assert!(state.is_open("Resources"));
        assert!(!state.is_open("Company"));
    }

    #[test]
    fn test_toggle_unregistered_panel() {
        let mut controller = DisclosureController::new();
        assert!(controller.toggle("Later").is_open("Later"));
    }

    #[test]
    fn test_mobile_menu_does_not_alias_dropdown() {
        let mut controller = DisclosureController::new();
        controller.toggle(PanelId::MobileMenu);
        assert!(controller.is_open(PanelId::MobileMenu));
        assert!(!controller.is_open("mobile menu"));
    }

    #[test]
    fn test_request_close() {
        let mut controller = nav_controller();
        controller.toggle("Company");
        controller.toggle("Resources");
        let state = controller.request_close("Company");
        assert!(!state.is_open("Company"));
        assert!(state.is_open("Resources"));
    }

    #[test]
    fn test_dismiss_all() {
        let mut controller = nav_controller();
        controller.toggle(PanelId::MobileMenu);
        controller.toggle("Products");
        controller.toggle("Company");
        controller.toggle("Company");
        let state = controller.dismiss_all();
        assert!(!state.any_open());
        assert_eq!(state.open_panels().count(), 0);
    }

    #[test]
    fn test_pointer_inside_keeps_state() {
        let mut controller = nav_controller();
        controller.toggle("Products");
        let bounds = Bounds::new(0.0, 0.0, 800.0, 64.0);
        let state = controller.pointer_down(Point::new(400.0, 64.0), bounds);
        assert!(state.is_open("Products"));
    }

    #[test]
    fn test_pointer_outside_dismisses() {
        let mut controller = nav_controller();
        controller.toggle("Products");
        let bounds = Bounds::new(0.0, 0.0, 800.0, 64.0);
        let state = controller.pointer_down(Point::new(400.0, 300.0), bounds);
        assert!(!state.any_open());
    }

    #[test]
    fn test_press_on_item_below_toggle_keeps_menu_open() {
        let mut controller = DisclosureController::with_panels(["Language"]);
        controller.toggle("Language");
        let toggle = Bounds::new(100.0, 100.0, 120.0, 28.0);
        let menu = Bounds::new(100.0, 136.0, 160.0, 96.0);
        let item = Point::new(140.0, 148.0);

        // The toggle's rect alone does not cover the floating menu
        assert!(!toggle.contains(item));
        let state = controller.pointer_down_within(item, &[toggle, menu]);
        assert!(state.is_open("Language"));

        let state = controller.press(PressTarget::Inside);
        assert!(state.is_open("Language"));

        let state = controller.pointer_down_within(Point::new(600.0, 400.0), &[toggle, menu]);
        assert!(!state.is_open("Language"));
    }

    #[test]
    fn test_press_outside_dismisses_and_notifies_once() {
        let calls = Rc::new(RefCell::new(0));
        let sink = calls.clone();
        let mut controller = nav_controller().on_change(move |_| *sink.borrow_mut() += 1);
        controller.toggle("Products");
        controller.press(PressTarget::Inside);
        controller.press(PressTarget::Outside);
        controller.press(PressTarget::Outside);
        assert!(!controller.state().any_open());
        assert_eq!(*calls.borrow(), 2);
    }

    #[test]
    fn test_listener_called_on_real_changes_only() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let mut controller = nav_controller().on_change(move |state| {
            sink.borrow_mut()
                .push(state.open_panels().cloned().collect::<Vec<_>>());
        });

        controller.dismiss_all();
        controller.request_close("Products");
        assert!(seen.borrow().is_empty());

        controller.toggle("Products");
        controller.request_close("Products");
        controller.toggle("Company");
        controller.dismiss_all();

        let seen = seen.borrow();
        assert_eq!(seen.len(), 4);
        assert_eq!(seen[0], vec![PanelId::from("Products")]);
        assert!(seen[1].is_empty());
        assert_eq!(seen[2], vec![PanelId::from("Company")]);
        assert!(seen[3].is_empty());
    }

    #[test]
    fn test_register_keeps_existing_state() {
        let mut controller = nav_controller();
        controller.toggle("Products");
        controller.register("Products");
        assert!(controller.is_open("Products"));
    }

    #[test]
    fn test_bounds_edges_inside() {
        let bounds = Bounds::new(10.0, 10.0, 5.0, 5.0);
        assert!(bounds.contains(Point::new(10.0, 15.0)));
        assert!(!bounds.contains(Point::new(9.9, 12.0)));
    }
}
