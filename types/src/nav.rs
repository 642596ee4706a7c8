//! Navigation shell state: compact menu and the Services dropdown.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavState {
    mobile_menu_open: bool,
    services_dropdown_open: bool,
}

impl NavState {
    #[must_use]
    pub fn mobile_menu_open(&self) -> bool {
        self.mobile_menu_open
    }

    #[must_use]
    pub fn services_dropdown_open(&self) -> bool {
        self.services_dropdown_open
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    pub fn close_mobile_menu(&mut self) {
        self.mobile_menu_open = false;
    }

    /// Pointer entered the Services entry (or its dropdown).
    pub fn dropdown_enter(&mut self) {
        self.services_dropdown_open = true;
    }

    pub fn dropdown_leave(&mut self) {
        self.services_dropdown_open = false;
    }

    /// Any navigation closes both menus.
    pub fn navigated(&mut self) {
        self.mobile_menu_open = false;
        self.services_dropdown_open = false;
    }
}
