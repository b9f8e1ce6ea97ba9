use crate::core::enhancer::FormEnhancer;
use crate::core::registry::FieldTable;
use crate::core::submenu::SubmenuController;
use crate::domain::model::{
    EventOutcome, FieldEvent, FieldRule, ScriptedEvent, SubmenuItem, SubmenuView, Transition,
};
use crate::domain::ports::{FieldHost, SidebarHost};
use crate::utils::error::Result;
use serde::Serialize;
use std::collections::BTreeMap;

/// A loaded page: the field bindings and the sidebar controller sharing one host.
pub struct PageSession<H: FieldHost + SidebarHost> {
    host: H,
    enhancer: FormEnhancer,
    submenus: SubmenuController,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StepReport {
    Field(EventOutcome),
    Submenu(Transition),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionReport {
    pub bindings: Vec<FieldRule>,
    pub steps: Vec<StepReport>,
    pub fields: BTreeMap<String, String>,
    pub submenus: Vec<SubmenuView>,
}

impl SessionReport {
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl<H: FieldHost + SidebarHost> PageSession<H> {
    /// Page-load wiring: bind fields, restore the active submenu and paint it.
    pub fn load(host: H, table: FieldTable, items: &[SubmenuItem]) -> Self {
        let mut enhancer = FormEnhancer::new(table);
        let bound = enhancer.attach(&host).len();

        let submenus = SubmenuController::on_load(items);
        let mut session = Self {
            host,
            enhancer,
            submenus,
        };
        session.submenus.apply(&mut session.host);

        tracing::info!(
            "Page loaded: {} field(s) bound, {} submenu(s)",
            bound,
            session.submenus.len()
        );
        session
    }

    /// The element receives `value` as typed, then the `input` handler runs.
    /// Read-only elements keep their value.
    pub fn type_into(&mut self, id: &str, value: &str) -> EventOutcome {
        if self.host.contains(id) && !self.host.is_read_only(id) {
            self.host.set_value(id, value);
        }
        self.enhancer.handle(
            &mut self.host,
            &FieldEvent::Input { id: id.to_string() },
        )
    }

    pub fn input(&mut self, id: &str) -> EventOutcome {
        self.enhancer.handle(
            &mut self.host,
            &FieldEvent::Input { id: id.to_string() },
        )
    }

    pub fn blur(&mut self, id: &str) -> EventOutcome {
        self.enhancer.handle(
            &mut self.host,
            &FieldEvent::Blur { id: id.to_string() },
        )
    }

    pub fn click(&mut self, index: usize) -> Transition {
        let transition = self.submenus.toggle(index);
        self.submenus.apply(&mut self.host);
        transition
    }

    pub fn dispatch(&mut self, event: &ScriptedEvent) -> StepReport {
        match event {
            ScriptedEvent::Input { id, value: Some(value) } => {
                StepReport::Field(self.type_into(id, value))
            }
            ScriptedEvent::Input { id, value: None } => StepReport::Field(self.input(id)),
            ScriptedEvent::Blur { id } => StepReport::Field(self.blur(id)),
            ScriptedEvent::Click { submenu } => StepReport::Submenu(self.click(*submenu)),
        }
    }

    pub fn run<'a, I>(mut self, events: I) -> (SessionReport, H)
    where
        I: IntoIterator<Item = &'a ScriptedEvent>,
    {
        let steps: Vec<_> = events.into_iter().map(|e| self.dispatch(e)).collect();
        tracing::info!("Replayed {} event(s)", steps.len());

        let report = SessionReport {
            bindings: self.enhancer.bindings().to_vec(),
            steps,
            fields: self.field_values(),
            submenus: self.submenus.render(),
        };
        (report, self.host)
    }

    /// Current value of every registered field present on the page.
    pub fn field_values(&self) -> BTreeMap<String, String> {
        self.enhancer
            .table()
            .rules()
            .iter()
            .filter_map(|rule| self.host.value(&rule.id).map(|v| (rule.id.clone(), v)))
            .collect()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn enhancer(&self) -> &FormEnhancer {
        &self.enhancer
    }

    pub fn submenus(&self) -> &SubmenuController {
        &self.submenus
    }
}
