//! Integration tests for utility/component class generation and the
//! dynamic modifier matcher.

use std::collections::HashSet;

use dtcss::ThemeColors;
use dtcss::ast::Declaration;
use dtcss::tokens::{
    Category, VariableTable, builtin_table, generate_components, generate_utilities,
};
use dtcss::transform::resolve_modifier;

// ============================================================================
// UTILITY GENERATION
// ============================================================================

#[test]
fn default_token_maps_to_bare_category_selector() {
    let table = VariableTable::new().with_tokens(Category::Background, &["primary", "DEFAULT"]);
    let rules = generate_utilities(&table);

    let selectors: HashSet<&str> = rules.iter().map(|r| r.selector.as_str()).collect();
    assert!(selectors.contains(".bg-primary"));
    assert!(selectors.contains(".bg"));
    assert!(!selectors.contains(".bg-DEFAULT"));
}

#[test]
fn each_utility_references_its_custom_property() {
    let table = VariableTable::new()
        .with_tokens(Category::Text, &["muted"])
        .with_tokens(Category::Border, &["emphasis"]);
    let rules = generate_utilities(&table);

    assert_eq!(
        rules[0].declarations,
        vec![Declaration::new("color", "var(--text-muted)")]
    );
    assert_eq!(
        rules[1].declarations,
        vec![Declaration::new("border-color", "var(--border-emphasis)")]
    );
}

#[test]
fn generation_is_total_and_deterministic() {
    let first = generate_utilities(builtin_table());
    let second = generate_utilities(builtin_table());

    let token_count: usize = builtin_table().iter().map(|(_, t)| t.len()).sum();
    assert_eq!(first.len(), token_count);
    assert_eq!(first, second);
}

#[test]
fn builtin_selectors_are_globally_disjoint() {
    let rules = generate_utilities(builtin_table());
    let mut seen = HashSet::new();
    for rule in &rules {
        assert!(seen.insert(rule.selector.clone()), "collision: {}", rule.selector);
    }
}

#[test]
fn divide_utilities_target_non_last_children() {
    let rules = generate_utilities(builtin_table());
    let divide: Vec<&str> = rules
        .iter()
        .map(|r| r.selector.as_str())
        .filter(|s| s.contains(".divide"))
        .collect();

    assert!(!divide.is_empty());
    for selector in divide {
        assert!(selector.starts_with(":where("), "got {selector}");
        assert!(selector.ends_with("> :not(:last-child))"), "got {selector}");
    }
}

// ============================================================================
// COMPONENT GENERATION
// ============================================================================

#[test]
fn component_classes_are_fixed_and_ordered() {
    let a = generate_components();
    let b = generate_components();
    assert_eq!(a, b);

    let selectors: Vec<&str> = a.iter().map(|r| r.selector.as_str()).collect();
    assert_eq!(
        selectors,
        vec![".badge", ".button", ".card", ".input", ".panel"]
    );
}

#[test]
fn component_declarations_reference_per_element_properties() {
    for rule in generate_components() {
        let element = rule.selector.trim_start_matches('.');
        for decl in &rule.declarations {
            assert!(
                decl.value.contains(&format!("var(--{element}-")),
                "{} must reference --{element}-* properties, got {}",
                rule.selector,
                decl.value
            );
        }
    }
}

#[test]
fn component_selectors_do_not_collide_with_utilities() {
    let utilities: HashSet<String> = generate_utilities(builtin_table())
        .into_iter()
        .map(|r| r.selector)
        .collect();

    for rule in generate_components() {
        assert!(!utilities.contains(&rule.selector));
    }
}

// ============================================================================
// MODIFIER MATCHER
// ============================================================================

fn theme() -> ThemeColors {
    [("primary", "500", "#336699"), ("accent", "200", "#fde68a")]
        .into_iter()
        .collect()
}

#[test]
fn known_color_with_modifier_resolves() {
    let decl = resolve_modifier("primary-500/disabled", &theme()).unwrap();
    assert_eq!(
        decl,
        Declaration::new(
            "background-color",
            "color-mix(in oklab, #336699 var(--opacity-disabled), transparent)"
        )
    );
}

#[test]
fn value_without_modifier_yields_nothing() {
    assert_eq!(resolve_modifier("primary-500", &theme()), None);
}

#[test]
fn unknown_color_yields_nothing() {
    assert_eq!(resolve_modifier("unknown-500/disabled", &theme()), None);
    assert_eq!(resolve_modifier("primary-900/disabled", &theme()), None);
}

#[test]
fn opacity_stays_a_custom_property_reference() {
    let decl = resolve_modifier("accent-200/hover", &theme()).unwrap();
    assert!(decl.value.contains("var(--opacity-hover)"));
    assert!(!decl.value.contains('%'));
}
