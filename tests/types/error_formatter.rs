use causal_rail::types::{ErrorFormatConfig, ErrorFormatter};
use causal_rail::Outcome;
use std::borrow::Cow;

fn sample() -> Outcome {
    let root = Outcome::from_error("connection reset");
    let middle = Outcome::wrap("fetching page 3", root);
    Outcome::wrap("syncing catalog", middle)
}

#[test]
fn default_display_uses_arrows() {
    let outcome = sample();
    let failure = outcome.failure().unwrap();
    assert_eq!(failure.error_chain(), "syncing catalog -> fetching page 3 -> connection reset");
}

#[test]
fn builder_separator_and_root_first() {
    let outcome = sample();
    let failure = outcome.failure().unwrap();

    let custom = failure.fmt().with_separator(" <- ").root_first(true).to_string();
    assert_eq!(custom, "connection reset <- fetching page 3 <- syncing catalog");
}

#[test]
fn compact_preset() {
    let outcome = sample();
    let compact = outcome.failure().unwrap().fmt().compact().to_string();
    assert_eq!(compact, "syncing catalog | fetching page 3 | connection reset");
}

#[test]
fn pretty_preset_draws_a_tree() {
    let outcome = sample();
    let pretty = outcome.failure().unwrap().fmt().pretty().to_string();
    assert_eq!(pretty, "┌ syncing catalog\n├─ fetching page 3\n└─ connection reset");
}

#[test]
fn cascade_toggle_switches_separator() {
    let outcome = sample();
    let cascaded = outcome.failure().unwrap().fmt().cascade(true).to_string();
    assert_eq!(cascaded, "syncing catalog\n  fetching page 3\n    connection reset");
}

#[test]
fn show_kind_prefixes_each_layer() {
    let outcome = Outcome::wrap("outer", Outcome::from_error(causal_rail::NotFoundError::new("key")));
    let rendered = outcome.failure().unwrap().fmt().show_kind(true).to_string();
    assert_eq!(rendered, "[message] outer -> [not_found] key not found");
}

#[test]
fn custom_formatter_trait() {
    struct Upper;

    impl ErrorFormatter for Upper {
        fn format_item(&self, item: &str) -> String {
            item.to_uppercase()
        }

        fn separator(&self) -> &str {
            " / "
        }
    }

    let outcome = sample();
    let rendered = outcome.failure().unwrap().error_chain_with(Upper);
    assert_eq!(rendered, "SYNCING CATALOG / FETCHING PAGE 3 / CONNECTION RESET");
}

#[test]
fn config_prefixes_and_suffixes() {
    let config = ErrorFormatConfig {
        context_prefix: Some("<".into()),
        context_suffix: Some(">".into()),
        root_prefix: Some("(".into()),
        root_suffix: Some(")".into()),
        ..Default::default()
    };
    let messages = [Cow::Borrowed("a"), Cow::Borrowed("b")];
    assert_eq!(config.format_chain(&messages), "<a> -> (b)");
}

#[test]
fn empty_chain_renders_empty() {
    let messages: [Cow<'_, str>; 0] = [];
    assert_eq!(ErrorFormatConfig::default().format_chain(&messages), "");
}

#[test]
fn with_kinds_preset_through_error_chain_with() {
    let outer = Outcome::wrap("outer", Outcome::from_error("root"));
    let rendered = outer.failure().unwrap().error_chain_with(ErrorFormatConfig::with_kinds());
    assert_eq!(rendered, "[message] outer -> [message] root");
}

#[test]
fn custom_formatter_can_ask_for_kinds() {
    struct Tagged;

    impl ErrorFormatter for Tagged {
        fn show_kind(&self) -> bool {
            true
        }
    }

    let outcome =
        Outcome::wrap("loading", Outcome::from_error(causal_rail::NotFoundError::new("key")));
    let rendered = outcome.failure().unwrap().error_chain_with(Tagged);
    assert_eq!(rendered, "[message] loading -> [not_found] key not found");
}

#[test]
fn presets_keep_show_kind() {
    let outcome = Outcome::wrap("outer", Outcome::from_error("root"));
    let failure = outcome.failure().unwrap();

    let compact = failure.fmt().show_kind(true).compact().to_string();
    assert_eq!(compact, "[message] outer | [message] root");

    let cascaded = failure.fmt().show_kind(true).cascaded().to_string();
    assert_eq!(cascaded, "[message] outer\n  [message] root");

    let pretty = failure.fmt().show_kind(true).pretty().to_string();
    assert_eq!(pretty, "┌ [message] outer\n└─ [message] root");
}
