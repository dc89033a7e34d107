use crate::spec::control::Control;
use crate::spec::form::{Page, Rule, Section};

/// Items that may carry a visibility rule reference.
pub trait VisibilityHost {
    fn visibility_rule_id(&self) -> Option<&str>;
}

impl VisibilityHost for Page {
    fn visibility_rule_id(&self) -> Option<&str> {
        self.visibility_rule_id.as_deref()
    }
}

impl VisibilityHost for Section {
    fn visibility_rule_id(&self) -> Option<&str> {
        self.visibility_rule_id.as_deref()
    }
}

impl VisibilityHost for Control {
    fn visibility_rule_id(&self) -> Option<&str> {
        self.visibility_rule_id.as_deref()
    }
}

/// Finds the name of the form rule applied to an item.
///
/// An identifier that matches no rule in the document is assumed to refer to
/// a rule defined outside it and is reported as a global rule, never as an
/// error. Returns `None` when no rule is set (missing or empty identifier).
pub fn resolve_visibility(item: &impl VisibilityHost, rules: &[Rule]) -> Option<String> {
    let vis_id = item.visibility_rule_id().filter(|id| !id.is_empty())?;
    match rules.iter().find(|rule| rule.definition_id == vis_id) {
        Some(rule) => Some(rule.name.clone()),
        None => Some(format!("global rule {vis_id}")),
    }
}
