use crate::domain::model::{SubmenuItem, SubmenuState, SubmenuView, Transition};
use crate::domain::ports::SidebarHost;

/// Expand/collapse state of the sidebar submenus.
///
/// The state is the only source of truth; markup is produced from it by
/// [`SubmenuController::render`] and never read back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmenuController {
    count: usize,
    state: SubmenuState,
}

impl SubmenuController {
    pub fn new(count: usize) -> Self {
        Self {
            count,
            state: SubmenuState::AllClosed,
        }
    }

    /// Initial state from the server-rendered markup: the first submenu that
    /// holds the active link starts open.
    pub fn on_load(items: &[SubmenuItem]) -> Self {
        let state = match items.iter().position(|item| item.active_link) {
            Some(index) => {
                tracing::debug!("Restoring submenu {} from active link", index);
                SubmenuState::Open(index)
            }
            None => SubmenuState::AllClosed,
        };

        Self {
            count: items.len(),
            state,
        }
    }

    pub fn state(&self) -> SubmenuState {
        self.state
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn open_index(&self) -> Option<usize> {
        match self.state {
            SubmenuState::Open(index) => Some(index),
            SubmenuState::AllClosed => None,
        }
    }

    /// Click on the toggle of submenu `index`.
    pub fn toggle(&mut self, index: usize) -> Transition {
        if index >= self.count {
            tracing::debug!("Toggle for unknown submenu {} ignored", index);
            return Transition::Ignored { index };
        }

        let transition = match self.state {
            SubmenuState::Open(open) if open == index => {
                self.state = SubmenuState::AllClosed;
                Transition::Closed { index }
            }
            previous => {
                self.state = SubmenuState::Open(index);
                let closed = match previous {
                    SubmenuState::Open(open) => Some(open),
                    SubmenuState::AllClosed => None,
                };
                Transition::Opened { index, closed }
            }
        };

        tracing::debug!("Submenu transition: {:?}", transition);
        transition
    }

    pub fn render(&self) -> Vec<SubmenuView> {
        (0..self.count)
            .map(|index| {
                let open = self.open_index() == Some(index);
                SubmenuView {
                    index,
                    expanded: open,
                    arrow_rotated: open,
                    parent_active: open,
                }
            })
            .collect()
    }

    /// Writes every view into the host, so stale presentation on any other
    /// submenu is reset as well.
    pub fn apply<H: SidebarHost>(&self, host: &mut H) {
        let available = host.submenu_count();
        for view in self.render().iter().take(available) {
            host.render_submenu(view);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(active: Option<usize>, count: usize) -> Vec<SubmenuItem> {
        (0..count)
            .map(|i| SubmenuItem {
                label: format!("menu-{}", i),
                active_link: Some(i) == active,
            })
            .collect()
    }

    #[test]
    fn test_on_load_without_active_link() {
        let controller = SubmenuController::on_load(&items(None, 3));
        assert_eq!(controller.state(), SubmenuState::AllClosed);
        assert!(controller.render().iter().all(|v| !v.expanded));
    }

    #[test]
    fn test_on_load_first_active_wins() {
        let mut list = items(Some(2), 4);
        list[3].active_link = true;

        let controller = SubmenuController::on_load(&list);
        assert_eq!(controller.open_index(), Some(2));
    }

    #[test]
    fn test_toggle_transitions() {
        let mut controller = SubmenuController::new(3);

        assert_eq!(controller.toggle(0), Transition::Opened { index: 0, closed: None });
        assert_eq!(controller.toggle(2), Transition::Opened { index: 2, closed: Some(0) });
        assert_eq!(controller.toggle(2), Transition::Closed { index: 2 });
        assert_eq!(controller.state(), SubmenuState::AllClosed);
    }

    #[test]
    fn test_toggle_out_of_range() {
        let mut controller = SubmenuController::new(2);
        controller.toggle(1);

        let transition = controller.toggle(5);
        assert_eq!(transition, Transition::Ignored { index: 5 });
        assert!(transition.prevents_default());
        assert_eq!(controller.open_index(), Some(1));
    }

    #[test]
    fn test_render_projection() {
        let mut controller = SubmenuController::new(3);
        controller.toggle(1);

        let views = controller.render();
        assert_eq!(views.len(), 3);
        assert_eq!(views[1].display(), "block");
        assert_eq!(views[1].arrow_transform(), "rotate(180deg)");
        assert!(views[1].parent_active);
        assert_eq!(views[0].display(), "none");
        assert_eq!(views[2].arrow_transform(), "rotate(0deg)");
        assert!(!views[2].parent_active);
    }
}
