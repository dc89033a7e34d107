use form_spec::{
    Choice, Control, Rule, Validation, form_schema, format_choices, mandatory_status,
    resolve_visibility,
};

fn make_rules() -> Vec<Rule> {
    vec![
        Rule {
            name: "AgeCheck".into(),
            definition_id: "r1".into(),
        },
        Rule {
            name: "RegionCheck".into(),
            definition_id: "r2".into(),
        },
    ]
}

fn make_control(visibility_rule_id: Option<&str>) -> Control {
    Control {
        name: Some("field".into()),
        label: None,
        sub_type: None,
        validation: None,
        choices: None,
        group_scope: false,
        visibility_rule_id: visibility_rule_id.map(Into::into),
    }
}

#[test]
fn resolve_visibility_returns_none_without_identifier() {
    let rules = make_rules();
    assert_eq!(resolve_visibility(&make_control(None), &rules), None);
}

#[test]
fn resolve_visibility_treats_empty_identifier_as_unset() {
    let rules = make_rules();
    assert_eq!(resolve_visibility(&make_control(Some("")), &rules), None);
}

#[test]
fn resolve_visibility_finds_matching_rule_name() {
    let rules = make_rules();
    assert_eq!(
        resolve_visibility(&make_control(Some("r2")), &rules),
        Some("RegionCheck".into())
    );
}

#[test]
fn resolve_visibility_falls_back_to_global_rule() {
    let rules = make_rules();
    assert_eq!(
        resolve_visibility(&make_control(Some("unknown-guid")), &rules),
        Some("global rule unknown-guid".into())
    );
}

#[test]
fn mandatory_status_skips_sentinel_and_absent_values() {
    let mut control = make_control(None);
    assert_eq!(mandatory_status(&control), None);

    control.validation = Some(Validation { mandatory: None });
    assert_eq!(mandatory_status(&control), None);

    control.validation = Some(Validation {
        mandatory: Some("NOT_MANDATORY".into()),
    });
    assert_eq!(mandatory_status(&control), None);

    control.validation = Some(Validation {
        mandatory: Some("MANDATORY_TO_SAVE".into()),
    });
    assert_eq!(mandatory_status(&control), Some("MANDATORY_TO_SAVE"));
}

#[test]
fn format_choices_marks_only_defaults() {
    let mut control = make_control(None);
    control.choices = Some(vec![
        Choice {
            label: "Yes".into(),
            value: "Y".into(),
            selected_by_default: true,
        },
        Choice {
            label: "No".into(),
            value: "N".into(),
            selected_by_default: false,
        },
    ]);

    let rendered = format_choices(&control).collect::<Vec<_>>();
    assert_eq!(rendered, vec!["Yes:Y *", "No:N"]);
}

#[test]
fn format_choices_is_empty_without_choice_list() {
    let control = make_control(None);
    assert_eq!(format_choices(&control).count(), 0);
}

#[test]
fn schema_exposes_required_top_level_fields() {
    let schema = form_schema();
    let required = schema
        .get("required")
        .and_then(|value| value.as_array())
        .expect("required array");
    for field in ["name", "version", "rules", "pages"] {
        assert!(required.iter().any(|value| value.as_str() == Some(field)));
    }
}
