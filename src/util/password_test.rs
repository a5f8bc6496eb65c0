use super::*;

fn result(results: &[RuleResult], id: &str) -> RuleResult {
    *results
        .iter()
        .find(|r| r.id == id)
        .unwrap_or_else(|| panic!("missing rule {id}"))
}

// =============================================================
// Rule ordering and identity
// =============================================================

#[test]
fn rules_evaluate_in_declaration_order() {
    let ids: Vec<&str> = evaluate("anything").iter().map(|r| r.id).collect();
    assert_eq!(
        ids,
        vec!["min_length", "uppercase", "lowercase", "special_char", "no_underscore"]
    );
}

#[test]
fn only_underscore_rule_is_warning() {
    for r in evaluate("x") {
        assert_eq!(r.is_warning, r.id == "no_underscore", "rule {}", r.id);
    }
}

// =============================================================
// Individual rules
// =============================================================

#[test]
fn length_counts_chars_not_bytes() {
    // 12 two-byte chars.
    let pw = "åååååååååååå";
    assert!(result(&evaluate(pw), "min_length").passed);
    assert!(!result(&evaluate("elevenchars"), "min_length").passed);
}

#[test]
fn special_char_excludes_alphanumerics_and_underscore() {
    assert!(!result(&evaluate("Abc123_"), "special_char").passed);
    assert!(result(&evaluate("Abc123!"), "special_char").passed);
}

#[test]
fn empty_password_fails_length_only_where_expected() {
    let results = evaluate("");
    assert!(!result(&results, "min_length").passed);
    assert!(!result(&results, "uppercase").passed);
    // No underscore present, so the warning rule passes.
    assert!(result(&results, "no_underscore").passed);
}

// =============================================================
// Overall validity
// =============================================================

#[test]
fn strong_password_passes_everything() {
    let results = evaluate("Password123!");
    assert!(results.iter().all(|r| r.passed));
    assert!(is_valid("Password123!"));
}

#[test]
fn short_password_is_invalid() {
    let results = evaluate("short1!");
    assert!(!result(&results, "min_length").passed);
    assert!(!is_valid("short1!"));
}

#[test]
fn underscore_invalidates_despite_warning_severity() {
    let results = evaluate("Valid_Password123!");
    let underscore = result(&results, "no_underscore");
    assert!(!underscore.passed);
    assert!(underscore.is_warning);
    // Every blocking rule passes, yet the password is still rejected.
    assert!(results.iter().filter(|r| !r.is_warning).all(|r| r.passed));
    assert!(!is_valid("Valid_Password123!"));
}

#[test]
fn validity_matches_rule_conjunction() {
    for pw in ["Password123!", "short1!", "Valid_Password123!", "", "nouppercase123!", "NOLOWERCASE123!", "NoSpecialChar123"] {
        assert_eq!(is_valid(pw), evaluate(pw).iter().all(|r| r.passed), "password {pw:?}");
    }
}
