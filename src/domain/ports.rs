use crate::domain::model::SubmenuView;

/// Access to form inputs by element id.
///
/// `None` from [`FieldHost::value`] means the element is not on the page.
pub trait FieldHost {
    fn value(&self, id: &str) -> Option<String>;
    fn set_value(&mut self, id: &str, value: &str);
    fn is_read_only(&self, id: &str) -> bool;

    fn contains(&self, id: &str) -> bool {
        self.value(id).is_some()
    }
}

/// Sink for the submenu projection.
pub trait SidebarHost {
    fn submenu_count(&self) -> usize;
    fn render_submenu(&mut self, view: &SubmenuView);
}
