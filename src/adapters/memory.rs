use crate::config::page::PageFixture;
use crate::domain::model::SubmenuView;
use crate::domain::ports::{FieldHost, SidebarHost};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemoryField {
    pub value: String,
    pub read_only: bool,
}

/// Presentation state of one `.has-submenu` item, the way the DOM would hold it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemorySubmenu {
    pub label: String,
    pub display: String,
    pub arrow_transform: String,
    pub parent_classes: BTreeSet<String>,
}

impl MemorySubmenu {
    fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            display: "none".to_string(),
            arrow_transform: String::new(),
            parent_classes: BTreeSet::from(["has-submenu".to_string()]),
        }
    }

    pub fn is_parent_active(&self) -> bool {
        self.parent_classes.contains(SubmenuView::ACTIVE_CLASS)
    }
}

/// Page host backed by plain collections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MemoryPage {
    fields: BTreeMap<String, MemoryField>,
    submenus: Vec<MemorySubmenu>,
}

impl MemoryPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_fixture(fixture: &PageFixture) -> Self {
        let mut page = Self::new();
        for field in &fixture.fields {
            page.insert_field(&field.id, &field.value, field.read_only);
        }
        for item in &fixture.submenus {
            page.push_submenu(&item.label);
        }
        page
    }

    pub fn insert_field(&mut self, id: &str, value: &str, read_only: bool) {
        self.fields.insert(
            id.to_string(),
            MemoryField {
                value: value.to_string(),
                read_only,
            },
        );
    }

    pub fn with_field(mut self, id: &str, value: &str) -> Self {
        self.insert_field(id, value, false);
        self
    }

    pub fn push_submenu(&mut self, label: &str) {
        self.submenus.push(MemorySubmenu::new(label));
    }

    pub fn field(&self, id: &str) -> Option<&MemoryField> {
        self.fields.get(id)
    }

    pub fn submenu(&self, index: usize) -> Option<&MemorySubmenu> {
        self.submenus.get(index)
    }

    pub fn submenus(&self) -> &[MemorySubmenu] {
        &self.submenus
    }
}

impl FieldHost for MemoryPage {
    fn value(&self, id: &str) -> Option<String> {
        self.fields.get(id).map(|f| f.value.clone())
    }

    fn set_value(&mut self, id: &str, value: &str) {
        if let Some(field) = self.fields.get_mut(id) {
            field.value = value.to_string();
        }
    }

    fn is_read_only(&self, id: &str) -> bool {
        self.fields.get(id).map(|f| f.read_only).unwrap_or(false)
    }

    fn contains(&self, id: &str) -> bool {
        self.fields.contains_key(id)
    }
}

impl SidebarHost for MemoryPage {
    fn submenu_count(&self) -> usize {
        self.submenus.len()
    }

    fn render_submenu(&mut self, view: &SubmenuView) {
        let Some(submenu) = self.submenus.get_mut(view.index) else {
            return;
        };

        submenu.display = view.display().to_string();
        submenu.arrow_transform = view.arrow_transform().to_string();
        if view.parent_active {
            submenu
                .parent_classes
                .insert(SubmenuView::ACTIVE_CLASS.to_string());
        } else {
            submenu.parent_classes.remove(SubmenuView::ACTIVE_CLASS);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_value_ignores_missing_element() {
        let mut page = MemoryPage::new().with_field("conta", "1");
        page.set_value("agencia", "0001");

        assert!(page.field("agencia").is_none());
        assert_eq!(page.value("conta").as_deref(), Some("1"));
    }

    #[test]
    fn test_render_submenu_toggles_active_class() {
        let mut page = MemoryPage::new();
        page.push_submenu("Contas");

        let open = SubmenuView {
            index: 0,
            expanded: true,
            arrow_rotated: true,
            parent_active: true,
        };
        page.render_submenu(&open);
        let submenu = page.submenu(0).unwrap();
        assert_eq!(submenu.display, "block");
        assert_eq!(submenu.arrow_transform, "rotate(180deg)");
        assert!(submenu.is_parent_active());
        assert!(submenu.parent_classes.contains("has-submenu"));

        page.render_submenu(&SubmenuView {
            expanded: false,
            arrow_rotated: false,
            parent_active: false,
            ..open
        });
        let submenu = page.submenu(0).unwrap();
        assert_eq!(submenu.display, "none");
        assert!(!submenu.is_parent_active());
    }
}
