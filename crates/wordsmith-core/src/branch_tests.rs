use crate::ParseError;
use crate::branch::{BranchOptions, BranchPrefix, Divider, compose_branch_name, slugify};

#[test]
fn slugify_strips_punctuation() {
    assert_eq!(slugify("Add User Login!!", Divider::Dash), "add-user-login");
    assert_eq!(slugify("Fix bug #42", Divider::Dash), "fix-bug-42");
    assert_eq!(slugify("don't panic", Divider::Dash), "dont-panic");
}

#[test]
fn slugify_collapses_whitespace() {
    assert_eq!(
        slugify("  multiple   spaces  ", Divider::Underscore),
        "multiple_spaces"
    );
    assert_eq!(slugify("tab\tand\nnewline", Divider::Dash), "tab-and-newline");
}

#[test]
fn slugify_collapses_mixed_separators() {
    assert_eq!(slugify("snake_case - kebab--case", Divider::Dash), "snake-case-kebab-case");
    assert_eq!(slugify("a - ! - b", Divider::Underscore), "a_b");
}

#[test]
fn slugify_trims_dividers_at_edges() {
    assert_eq!(slugify("--leading and trailing__", Divider::Dash), "leading-and-trailing");
    assert_eq!(slugify("!!! shout", Divider::Dash), "shout");
}

#[test]
fn slugify_drops_non_ascii_letters() {
    assert_eq!(slugify("Café Über", Divider::Dash), "caf-ber");
}

#[test]
fn slugify_empty_results() {
    assert_eq!(slugify("", Divider::Dash), "");
    assert_eq!(slugify("   ", Divider::Dash), "");
    assert_eq!(slugify("?!#$%", Divider::Dash), "");
    assert_eq!(slugify("- _ -", Divider::Underscore), "");
}

#[test]
fn slug_alphabet_invariant() {
    let inputs = [
        "Hello, World!",
        "  __weird--input__  ",
        "Ünïcödé & émojis 🎉 2024",
        "path/to/thing.rs",
        "MiXeD_CaSe-and spaces",
    ];
    for input in inputs {
        for divider in [Divider::Dash, Divider::Underscore] {
            let slug = slugify(input, divider);
            let d = divider.as_char();
            assert!(
                slug.chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == d),
                "{slug:?}"
            );
            assert!(!slug.starts_with(d) && !slug.ends_with(d), "{slug:?}");
        }
    }
}

#[test]
fn compose_with_named_prefix() {
    assert_eq!(
        compose_branch_name("Fix bug #42", BranchPrefix::Feature, "", Divider::Dash),
        "feature/fix-bug-42"
    );
    assert_eq!(
        compose_branch_name("Crash on save", BranchPrefix::Bug, "ignored", Divider::Underscore),
        "bug/crash_on_save"
    );
}

#[test]
fn compose_without_prefix() {
    assert_eq!(
        compose_branch_name("Add login", BranchPrefix::None, "hotfix", Divider::Dash),
        "add-login"
    );
}

#[test]
fn compose_with_custom_prefix() {
    assert_eq!(
        compose_branch_name("Refactor auth", BranchPrefix::Custom, "hotfix", Divider::Underscore),
        "hotfix/refactor_auth"
    );
    assert_eq!(
        compose_branch_name("Refactor auth", BranchPrefix::Custom, "HotFix", Divider::Dash),
        "hotfix/refactor-auth"
    );
}

#[test]
fn compose_with_empty_custom_prefix_has_no_separator() {
    assert_eq!(
        compose_branch_name("Refactor auth", BranchPrefix::Custom, "", Divider::Dash),
        "refactor-auth"
    );
}

#[test]
fn compose_blank_task_is_empty() {
    for prefix in BranchPrefix::ALL {
        assert_eq!(compose_branch_name("", prefix, "x", Divider::Dash), "");
        assert_eq!(compose_branch_name("  \t ", prefix, "x", Divider::Dash), "");
    }
}

#[test]
fn compose_keeps_prefix_for_punctuation_only_task() {
    // The task is not blank, so the prefix survives an empty slug.
    assert_eq!(
        compose_branch_name("!!!", BranchPrefix::Feature, "", Divider::Dash),
        "feature/"
    );
}

#[test]
fn options_defaults() {
    let options = BranchOptions::new();
    assert_eq!(options.prefix, BranchPrefix::None);
    assert_eq!(options.divider, Divider::Dash);
    assert_eq!(options.compose("Add login"), "add-login");
}

#[test]
fn options_cleared_selects_feature() {
    let options = BranchOptions::cleared();
    assert_eq!(options.prefix, BranchPrefix::Feature);
    assert_eq!(options.divider, Divider::Dash);
    assert!(options.custom_prefix.is_empty());
    assert_eq!(options.compose("Add login"), "feature/add-login");
}

#[test]
fn options_builder() {
    let options = BranchOptions::new()
        .prefix(BranchPrefix::Bug)
        .divider(Divider::Underscore);
    assert_eq!(options.compose("Null deref in parser"), "bug/null_deref_in_parser");
}

#[test]
fn prefix_parsing() {
    assert_eq!("feature".parse::<BranchPrefix>(), Ok(BranchPrefix::Feature));
    assert_eq!("BUG".parse::<BranchPrefix>(), Ok(BranchPrefix::Bug));
    assert_eq!(
        "chore".parse::<BranchPrefix>(),
        Err(ParseError::UnknownPrefix("chore".to_string()))
    );
}

#[test]
fn divider_parsing() {
    assert_eq!("-".parse::<Divider>(), Ok(Divider::Dash));
    assert_eq!("underscore".parse::<Divider>(), Ok(Divider::Underscore));
    assert_eq!(
        ".".parse::<Divider>(),
        Err(ParseError::UnknownDivider(".".to_string()))
    );
    assert_eq!(Divider::Underscore.to_string(), "_");
}

#[test]
fn serde_names() {
    assert_eq!(serde_json::to_string(&Divider::Underscore).unwrap(), r#""_""#);
    assert_eq!(serde_json::to_string(&BranchPrefix::Feature).unwrap(), r#""feature""#);
    let options: BranchOptions =
        serde_json::from_str(r#"{"prefix":"custom","custom_prefix":"chore","divider":"-"}"#)
            .unwrap();
    assert_eq!(options.compose("Bump deps"), "chore/bump-deps");
}
