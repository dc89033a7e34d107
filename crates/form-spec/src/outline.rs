use crate::spec::control::Control;
use crate::spec::form::{Form, Section};
use crate::visibility::resolve_visibility;

/// Sentinel used by the designer for controls that are explicitly optional.
const NOT_MANDATORY: &str = "NOT_MANDATORY";

/// Placeholder printed for absent names and types.
const NONE_PLACEHOLDER: &str = "<none>";

/// Returns the controls of a section in display order.
///
/// Direct rows come first (row, then column, then control order), followed by
/// every group's rows in the same nesting order. Group rows are always
/// deferred to the end of the section regardless of their intended row
/// position; downstream output diffs rely on this ordering, so it stays.
pub fn flatten_section(section: &Section) -> impl Iterator<Item = &Control> {
    section
        .rows
        .iter()
        .chain(section.groups.iter().flat_map(|group| group.rows.iter()))
        .flat_map(|row| row.columns.iter())
        .flat_map(|column| column.controls.iter())
}

/// Formats a control's choices back into the designer's `label:value` form,
/// with a trailing ` *` marking the default selection.
pub fn format_choices(control: &Control) -> impl Iterator<Item = String> + '_ {
    control.choices.iter().flatten().map(|choice| {
        let default = if choice.selected_by_default { " *" } else { "" };
        format!("{}:{}{}", choice.label, choice.value, default)
    })
}

/// Mandatory classification of a control, if one is set.
///
/// The `NOT_MANDATORY` sentinel counts as unset.
pub fn mandatory_status(control: &Control) -> Option<&str> {
    let mandatory = control.validation.as_ref()?.mandatory.as_deref()?;
    if mandatory == NOT_MANDATORY {
        None
    } else {
        Some(mandatory)
    }
}

/// Renders the full text outline: summary pass, detailed pass, trailer.
pub fn render_outline(form: &Form) -> String {
    let mut lines = Vec::new();
    push_summary(&mut lines, form);
    push_detail(&mut lines, form);
    lines.push(String::new());
    lines.push(format!("Form outliner v{}", env!("CARGO_PKG_VERSION")));
    lines.join("\n")
}

fn push_summary(lines: &mut Vec<String>, form: &Form) {
    lines.push(form.name.clone());
    lines.push(format!("Version: {}", form.version));

    lines.push(String::new());
    lines.push("Form rules:".to_string());
    let mut rule_names = form
        .rules
        .iter()
        .map(|rule| rule.name.as_str())
        .collect::<Vec<_>>();
    rule_names.sort_unstable();
    for name in rule_names {
        lines.push(format!("  {name}"));
    }

    lines.push(String::new());
    lines.push("Form outline:".to_string());
    for page in &form.pages {
        match resolve_visibility(page, &form.rules) {
            Some(rule) => lines.push(format!("  {} (Visibility rule: {})", page.title, rule)),
            None => lines.push(format!("  {}", page.title)),
        }

        for section in &page.sections {
            match resolve_visibility(section, &form.rules) {
                Some(rule) => {
                    lines.push(format!("    {} (Visibility rule: {})", section.title, rule));
                }
                None => lines.push(format!("    {}", section.title)),
            }
        }
    }
}

fn push_detail(lines: &mut Vec<String>, form: &Form) {
    lines.push(String::new());
    lines.push("Detailed form outline:".to_string());
    for page in &form.pages {
        lines.push(String::new());
        lines.push(format!("Page:\t{}", page.title));
        lines.push(format!("Name:\t{}", page.name));
        if let Some(rule) = resolve_visibility(page, &form.rules) {
            lines.push(format!("Visibility:\t{rule}"));
        }

        for section in &page.sections {
            lines.push(String::new());
            lines.push(format!("Section:\t{}", section.title));
            lines.push(format!("Name:\t{}", section.name));
            if let Some(rule) = resolve_visibility(section, &form.rules) {
                lines.push(format!("Visibility:\t{rule}"));
            }

            for control in flatten_section(section) {
                push_control(lines, control, form);
            }
        }
    }
}

fn push_control(lines: &mut Vec<String>, control: &Control, form: &Form) {
    lines.push(String::new());
    if let Some(label) = control.label.as_ref().and_then(|label| label.value.as_deref()) {
        lines.push(format!("Field:\t{label}"));
    }
    lines.push(format!(
        "Name:\t{}",
        control.name.as_deref().unwrap_or(NONE_PLACEHOLDER)
    ));
    lines.push(format!(
        "Type:\t{}",
        control.sub_type.as_deref().unwrap_or(NONE_PLACEHOLDER)
    ));
    if control.choices.is_some() {
        lines.push("Choices:".to_string());
        for choice in format_choices(control) {
            lines.push(format!("\t\t{choice}"));
        }
    }
    if control.group_scope {
        lines.push("Group scope:\tTrue".to_string());
    }
    if let Some(mandatory) = mandatory_status(control) {
        lines.push(format!("Mandatory:\t{mandatory}"));
    }
    if let Some(rule) = resolve_visibility(control, &form.rules) {
        lines.push(format!("Visibility:\t{rule}"));
    }
}
