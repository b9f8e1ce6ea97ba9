use serde::{Deserialize, Serialize};

/// What a bound input does to its value on every keystroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldKind {
    /// Name-like free text: filtered, whitespace-collapsed, uppercased.
    Name,
    Email,
    Digits {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max_len: Option<usize>,
    },
    /// Money amounts: digits with a single `.` decimal separator.
    Numeric,
}

impl FieldKind {
    pub fn label(&self) -> &'static str {
        match self {
            FieldKind::Name => "name",
            FieldKind::Email => "email",
            FieldKind::Digits { .. } => "digits",
            FieldKind::Numeric => "numeric",
        }
    }

    /// Name fields are left alone when the element is read-only.
    pub fn respects_read_only(&self) -> bool {
        matches!(self, FieldKind::Name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRule {
    pub id: String,
    #[serde(flatten)]
    pub kind: FieldKind,
}

impl FieldRule {
    pub fn new(id: impl Into<String>, kind: FieldKind) -> Self {
        Self { id: id.into(), kind }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEvent {
    Input { id: String },
    Blur { id: String },
}

impl FieldEvent {
    pub fn id(&self) -> &str {
        match self {
            FieldEvent::Input { id } | FieldEvent::Blur { id } => id,
        }
    }
}

/// Focus-loss classification of a numeric field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "outcome", content = "value", rename_all = "snake_case")]
pub enum BlurOutcome {
    Valid(f64),
    Negative(f64),
    NotANumber,
}

impl BlurOutcome {
    pub fn is_acceptable(&self) -> bool {
        matches!(self, BlurOutcome::Valid(_))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum EventOutcome {
    Updated { id: String, before: String, after: String },
    Unchanged { id: String },
    Checked { id: String, check: BlurOutcome },
    Ignored { id: String },
}

/// One sidebar entry as found in the rendered markup at load time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmenuItem {
    #[serde(default)]
    pub label: String,
    /// The submenu holds a link carrying the `active` marker.
    #[serde(default)]
    pub active_link: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", content = "index", rename_all = "snake_case")]
pub enum SubmenuState {
    #[default]
    AllClosed,
    Open(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "transition", rename_all = "snake_case")]
pub enum Transition {
    Opened { index: usize, closed: Option<usize> },
    Closed { index: usize },
    Ignored { index: usize },
}

impl Transition {
    /// The toggle is an anchor; its navigation is always suppressed.
    pub fn prevents_default(&self) -> bool {
        true
    }
}

/// Presentation of one submenu, derived from [`SubmenuState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SubmenuView {
    pub index: usize,
    pub expanded: bool,
    pub arrow_rotated: bool,
    pub parent_active: bool,
}

impl SubmenuView {
    pub const ACTIVE_CLASS: &'static str = "active";

    pub fn display(&self) -> &'static str {
        if self.expanded {
            "block"
        } else {
            "none"
        }
    }

    pub fn arrow_transform(&self) -> &'static str {
        if self.arrow_rotated {
            "rotate(180deg)"
        } else {
            "rotate(0deg)"
        }
    }
}

/// One step of a recorded interaction with a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScriptedEvent {
    /// The user typed so that the element now holds `value`, then `input` fired.
    Input {
        id: String,
        #[serde(default)]
        value: Option<String>,
    },
    Blur {
        id: String,
    },
    Click {
        submenu: usize,
    },
}
