use form_contract::{
    control_attrs, description_attrs, fieldset_attrs, label_attrs, legend_attrs,
    validation_attrs, validation_error_attrs, AttrMap, Attributes, FieldState, ERROR_SENTINEL,
};
use pretty_assertions::assert_eq;

fn all_states() -> Vec<FieldState> {
    let mut states = Vec::new();
    for has_error in [false, true] {
        for has_description in [false, true] {
            for required in [false, true] {
                states.push(
                    FieldState::new("account.email")
                        .with_error(has_error)
                        .with_description(has_description)
                        .with_required(required),
                );
            }
        }
    }
    states
}

fn role_maps(state: &FieldState) -> Vec<(&'static str, AttrMap)> {
    vec![
        ("control", control_attrs(state).to_attr_map()),
        ("label", label_attrs(state).to_attr_map()),
        ("validation", validation_attrs(state).to_attr_map()),
        ("validation-error", validation_error_attrs(state).to_attr_map()),
        ("legend", legend_attrs(state).to_attr_map()),
        ("description", description_attrs(state).to_attr_map()),
        ("fieldset", fieldset_attrs(state).to_attr_map()),
    ]
}

#[test]
fn error_flag_is_consistent_across_every_role() {
    for state in all_states() {
        for (role, map) in role_maps(&state) {
            if state.has_error {
                assert_eq!(
                    map.get("data-fs-error"),
                    Some(ERROR_SENTINEL),
                    "role={role} state={state:?}"
                );
            } else {
                assert!(
                    !map.contains_key("data-fs-error") && !map.contains_key("aria-invalid"),
                    "role={role} state={state:?}"
                );
            }
        }
    }
}

#[test]
fn error_state_drives_invalid_and_live_region() {
    for state in all_states() {
        let control = control_attrs(&state).to_attr_map();
        let validation = validation_attrs(&state).to_attr_map();
        if state.has_error {
            assert_eq!(control.get("aria-invalid"), Some("true"));
            assert_eq!(validation.get("aria-live"), Some("assertive"));
        } else {
            assert_eq!(control.get("aria-invalid"), None);
            assert_eq!(validation.get("aria-live"), Some("polite"));
        }
    }
}

#[test]
fn required_key_is_absent_rather_than_false() {
    for state in all_states() {
        let control = control_attrs(&state).to_attr_map();
        let expected = state.required.then_some("true");
        assert_eq!(control.get("aria-required"), expected, "state={state:?}");
    }
}

#[test]
fn described_by_is_absent_only_without_error_and_description() {
    for state in all_states() {
        let described_by = control_attrs(&state).aria_describedby;
        if !state.has_error && !state.has_description {
            assert_eq!(described_by, None);
        } else {
            let described_by = described_by.expect("aria-describedby present");
            assert!(!described_by.trim().is_empty());
            for id in described_by.split(' ') {
                assert!(
                    id == state.description_id || id == state.validation_id,
                    "unexpected id {id}"
                );
            }
        }
    }
}

#[test]
fn control_always_carries_fixed_keys() {
    for state in all_states() {
        let control = control_attrs(&state).to_attr_map();
        assert_eq!(control.get("name"), Some("account.email"));
        assert_eq!(control.get("id"), Some("fs-account-email"));
        assert_eq!(control.get("data-fs-control"), Some(""));
    }
}

#[test]
fn synthesis_is_idempotent() {
    for state in all_states() {
        assert_eq!(control_attrs(&state), control_attrs(&state));
        assert_eq!(label_attrs(&state), label_attrs(&state));
        assert_eq!(validation_attrs(&state), validation_attrs(&state));
        assert_eq!(
            validation_error_attrs(&state),
            validation_error_attrs(&state)
        );
        assert_eq!(legend_attrs(&state), legend_attrs(&state));
        assert_eq!(description_attrs(&state), description_attrs(&state));
        assert_eq!(fieldset_attrs(&state), fieldset_attrs(&state));
    }
}

#[test]
fn passthrough_merge_keeps_the_fixed_contract() {
    let state = FieldState::new("email").with_error(true);
    let (map, rejected) = control_attrs(&state).to_attr_map_with([
        ("aria-invalid", "false"),
        ("data-fs-error", "nope"),
        ("placeholder", "you@example.com"),
    ]);

    assert_eq!(
        rejected,
        vec!["aria-invalid".to_string(), "data-fs-error".to_string()]
    );
    assert_eq!(map.get("aria-invalid"), Some("true"));
    assert_eq!(map.get("data-fs-error"), Some(ERROR_SENTINEL));
    assert_eq!(map.get("placeholder"), Some("you@example.com"));
}

const ERROR_KEYS: [(&str, &str); 3] = [
    ("data-fs-error", ""),
    ("aria-invalid", "true"),
    ("aria-required", "false"),
];

fn merged_role_maps(state: &FieldState) -> Vec<(&'static str, AttrMap, Vec<String>)> {
    fn tag<T: Attributes>(role: &'static str, attrs: T) -> (&'static str, AttrMap, Vec<String>) {
        let (map, rejected) = attrs.to_attr_map_with(ERROR_KEYS);
        (role, map, rejected)
    }
    vec![
        tag("control", control_attrs(state)),
        tag("label", label_attrs(state)),
        tag("validation", validation_attrs(state)),
        tag("validation-error", validation_error_attrs(state)),
        tag("legend", legend_attrs(state)),
        tag("description", description_attrs(state)),
        tag("fieldset", fieldset_attrs(state)),
    ]
}

#[test]
fn passthrough_cannot_add_contract_keys_to_a_clean_field() {
    let state = FieldState::new("email");
    for (role, map, rejected) in merged_role_maps(&state) {
        assert!(!map.contains_key("data-fs-error"), "role={role}");
        assert!(
            rejected.iter().any(|key| key == "data-fs-error"),
            "role={role} rejected={rejected:?}"
        );
        if role == "control" {
            assert!(!map.contains_key("aria-invalid"));
            assert!(!map.contains_key("aria-required"));
            assert_eq!(rejected.len(), ERROR_KEYS.len());
        }
    }
}

#[test]
fn passthrough_leaves_synthesized_values_untouched() {
    for state in all_states() {
        for (role, map, _) in merged_role_maps(&state) {
            let clean = role_maps(&state)
                .into_iter()
                .find(|(name, _)| *name == role)
                .map(|(_, map)| map)
                .expect("role");
            for (key, value) in clean.iter() {
                assert_eq!(map.get(key), Some(value), "role={role} key={key}");
            }
        }
    }
}
