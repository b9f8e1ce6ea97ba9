use crate::core::normalize;
use crate::core::registry::FieldTable;
use crate::domain::model::{EventOutcome, FieldEvent, FieldKind, FieldRule};
use crate::domain::ports::FieldHost;
use crate::utils::error::Result;

/// Binds the field table to whatever inputs a page actually has and runs the
/// matching transform for each event.
pub struct FormEnhancer {
    table: FieldTable,
    bindings: Vec<FieldRule>,
}

impl FormEnhancer {
    pub fn new(table: FieldTable) -> Self {
        Self {
            table,
            bindings: Vec::new(),
        }
    }

    /// On-load wiring. Rules whose element is missing are skipped, and name
    /// fields that are read-only at load time are never bound.
    pub fn attach<H: FieldHost>(&mut self, host: &H) -> &[FieldRule] {
        self.bindings.clear();

        for rule in self.table.rules() {
            if !host.contains(&rule.id) {
                tracing::debug!("Field '{}' not on page, skipping", rule.id);
                continue;
            }
            if rule.kind.respects_read_only() && host.is_read_only(&rule.id) {
                tracing::debug!("Field '{}' is read-only, skipping", rule.id);
                continue;
            }
            tracing::debug!("Bound '{}' as {}", rule.id, rule.kind.label());
            self.bindings.push(rule.clone());
        }

        &self.bindings
    }

    pub fn bindings(&self) -> &[FieldRule] {
        &self.bindings
    }

    pub fn binding(&self, id: &str) -> Option<&FieldRule> {
        self.bindings.iter().find(|r| r.id == id)
    }

    pub fn table(&self) -> &FieldTable {
        &self.table
    }

    pub fn handle<H: FieldHost>(&self, host: &mut H, event: &FieldEvent) -> EventOutcome {
        let id = event.id().to_string();

        let Some(rule) = self.binding(&id) else {
            return EventOutcome::Ignored { id };
        };
        let Some(current) = host.value(&id) else {
            return EventOutcome::Ignored { id };
        };

        match (event, rule.kind) {
            (FieldEvent::Input { .. }, kind) => {
                let next = kind.apply(&current);
                if next == current {
                    EventOutcome::Unchanged { id }
                } else {
                    host.set_value(&id, &next);
                    EventOutcome::Updated {
                        id,
                        before: current,
                        after: next,
                    }
                }
            }
            (FieldEvent::Blur { .. }, FieldKind::Numeric) => {
                // 只檢查，不修正
                let check = normalize::check_numeric(&current);
                if !check.is_acceptable() {
                    tracing::debug!("Field '{}' left with {:?}: '{}'", id, check, current);
                }
                EventOutcome::Checked { id, check }
            }
            (FieldEvent::Blur { .. }, _) => EventOutcome::Ignored { id },
        }
    }

    /// Transform a value for a registered id without a page.
    pub fn apply(&self, id: &str, value: &str) -> Result<String> {
        self.table.apply(id, value)
    }
}

impl Default for FormEnhancer {
    fn default() -> Self {
        Self::new(FieldTable::builtin())
    }
}
