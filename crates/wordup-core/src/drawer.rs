use wordup_types::DrawerState;

pub const DEFAULT_BREAKPOINT: u32 = 768;

/// History drawer visibility.
///
/// Resizes set the state from the width; a toggle overrides it until the next resize.
#[derive(Debug, Clone, Copy)]
pub struct Drawer {
    breakpoint: u32,
    state: DrawerState,
}

impl Drawer {
    /// Evaluate once against the width seen at mount
    pub fn mount(breakpoint: u32, width: u32) -> Self {
        let mut drawer = Self {
            breakpoint,
            state: DrawerState::Open,
        };
        drawer.resize(width);
        drawer
    }

    pub fn resize(&mut self, width: u32) {
        self.state = if width < self.breakpoint {
            DrawerState::Closed
        } else {
            DrawerState::Open
        };
    }

    pub fn toggle(&mut self) {
        self.state = self.state.flipped();
    }

    pub fn state(&self) -> DrawerState {
        self.state
    }
}

impl Default for Drawer {
    fn default() -> Self {
        Self::mount(DEFAULT_BREAKPOINT, DEFAULT_BREAKPOINT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mount_evaluates_width() {
        assert_eq!(Drawer::mount(768, 500).state(), DrawerState::Closed);
        assert_eq!(Drawer::mount(768, 768).state(), DrawerState::Open);
    }

    #[test]
    fn resize_follows_breakpoint() {
        let mut drawer = Drawer::mount(768, 1024);

        drawer.resize(500);
        assert_eq!(drawer.state(), DrawerState::Closed);

        drawer.resize(1024);
        assert_eq!(drawer.state(), DrawerState::Open);

        drawer.resize(767);
        assert_eq!(drawer.state(), DrawerState::Closed);
    }

    #[test]
    fn toggle_overrides_until_next_resize() {
        let mut drawer = Drawer::mount(768, 500);

        drawer.toggle();
        assert_eq!(drawer.state(), DrawerState::Open);
        drawer.toggle();
        assert_eq!(drawer.state(), DrawerState::Closed);
        drawer.toggle();

        drawer.resize(400);
        assert_eq!(drawer.state(), DrawerState::Closed);
    }
}
