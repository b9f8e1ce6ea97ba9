use crate::core::normalize;
use crate::domain::model::{FieldKind, FieldRule};
use crate::utils::error::{FormError, Result};

/// Four-digit cap shared by branch codes and card tails.
pub const SHORT_CODE_LEN: usize = 4;

/// Built-in wiring: element id -> behaviour.
const BUILTIN: &[(&str, FieldKind)] = &[
    ("nome", FieldKind::Name),
    ("nome_banco", FieldKind::Name),
    ("transacao", FieldKind::Name),
    ("crediario", FieldKind::Name),
    ("grupo", FieldKind::Name),
    ("descricao", FieldKind::Name),
    ("despesa_receita", FieldKind::Name),
    ("email", FieldKind::Email),
    ("agencia", FieldKind::Digits { max_len: Some(SHORT_CODE_LEN) }),
    ("conta", FieldKind::Digits { max_len: None }),
    ("final", FieldKind::Digits { max_len: Some(SHORT_CODE_LEN) }),
    ("saldo_inicial", FieldKind::Numeric),
    ("limite", FieldKind::Numeric),
    ("valor", FieldKind::Numeric),
];

impl FieldKind {
    /// Runs the keystroke transform for this kind.
    pub fn apply(&self, value: &str) -> String {
        match self {
            FieldKind::Name => normalize::normalize_name(value),
            FieldKind::Email => normalize::lowercase_email(value),
            FieldKind::Digits { max_len } => normalize::digits_only(value, *max_len),
            FieldKind::Numeric => normalize::format_numeric(value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldTable {
    rules: Vec<FieldRule>,
}

impl FieldTable {
    pub fn builtin() -> Self {
        Self {
            rules: BUILTIN
                .iter()
                .map(|(id, kind)| FieldRule::new(*id, *kind))
                .collect(),
        }
    }

    /// Adds rows on top of this table. A row whose id already exists replaces
    /// the existing row in place; new ids are appended in order.
    pub fn with_overrides<I>(mut self, overrides: I) -> Self
    where
        I: IntoIterator<Item = FieldRule>,
    {
        for rule in overrides {
            match self.rules.iter_mut().find(|r| r.id == rule.id) {
                Some(existing) => {
                    tracing::debug!(
                        "Overriding field '{}': {} -> {}",
                        rule.id,
                        existing.kind.label(),
                        rule.kind.label()
                    );
                    existing.kind = rule.kind;
                }
                None => self.rules.push(rule),
            }
        }
        self
    }

    pub fn lookup(&self, id: &str) -> Option<&FieldRule> {
        self.rules.iter().find(|r| r.id == id)
    }

    pub fn rules(&self) -> &[FieldRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.rules)?)
    }

    /// Table lookup plus transform, without a page behind it.
    pub fn apply(&self, id: &str, value: &str) -> Result<String> {
        self.lookup(id)
            .map(|rule| rule.kind.apply(value))
            .ok_or_else(|| FormError::UnknownField { id: id.to_string() })
    }
}

impl Default for FieldTable {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_covers_every_page_field() {
        let table = FieldTable::builtin();
        assert_eq!(table.len(), 14);

        for id in ["nome", "nome_banco", "transacao", "crediario", "grupo", "descricao", "despesa_receita"] {
            assert_eq!(table.lookup(id).map(|r| r.kind), Some(FieldKind::Name), "{}", id);
        }
        assert_eq!(table.lookup("email").unwrap().kind, FieldKind::Email);
        assert_eq!(
            table.lookup("agencia").unwrap().kind,
            FieldKind::Digits { max_len: Some(4) }
        );
        assert_eq!(
            table.lookup("final").unwrap().kind,
            FieldKind::Digits { max_len: Some(4) }
        );
        assert_eq!(table.lookup("conta").unwrap().kind, FieldKind::Digits { max_len: None });
        for id in ["saldo_inicial", "limite", "valor"] {
            assert_eq!(table.lookup(id).unwrap().kind, FieldKind::Numeric);
        }
        assert!(table.lookup("senha").is_none());
    }

    #[test]
    fn test_apply_dispatches_by_kind() {
        let table = FieldTable::builtin();
        assert_eq!(table.apply("nome_banco", "caixa  econômica").unwrap(), "CAIXA ECONÔMICA");
        assert_eq!(table.apply("agencia", "12a345").unwrap(), "1234");
        assert_eq!(table.apply("conta", "12345-6").unwrap(), "123456");
        assert_eq!(table.apply("limite", "1.500,00").unwrap(), "1.50000");
        assert_eq!(table.apply("email", "A@B.COM").unwrap(), "a@b.com");
    }

    #[test]
    fn test_apply_unknown_field() {
        let err = FieldTable::builtin().apply("senha", "x").unwrap_err();
        assert!(matches!(err, FormError::UnknownField { ref id } if id == "senha"));
    }

    #[test]
    fn test_table_json_lists_rules() {
        let json = FieldTable::builtin().to_json_pretty().unwrap();
        let rows: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(rows.as_array().unwrap().len(), 14);
        assert_eq!(rows[8]["id"], "agencia");
        assert_eq!(rows[8]["kind"], "digits");
        assert_eq!(rows[8]["max_len"], 4);
        assert!(rows[9].get("max_len").is_none());
    }

    #[test]
    fn test_overrides_replace_and_append() {
        let table = FieldTable::builtin().with_overrides(vec![
            FieldRule::new("conta", FieldKind::Digits { max_len: Some(8) }),
            FieldRule::new("apelido", FieldKind::Name),
        ]);

        assert_eq!(table.len(), 15);
        assert_eq!(table.apply("conta", "123456789").unwrap(), "12345678");
        assert_eq!(table.rules().last().unwrap().id, "apelido");
        // 覆蓋後順序不變
        assert_eq!(table.rules()[9].id, "conta");
    }
}
