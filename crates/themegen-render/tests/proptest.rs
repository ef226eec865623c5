//! Property-based tests for shadow joining and table rendering.

use proptest::prelude::*;
use themegen_render::shadow::list;
use themegen_render::{declarations, render_stylesheet, Palette, Token, TokenTable, Variant};

// ============================================================================
// Strategies
// ============================================================================

fn fragment_strategy() -> impl Strategy<Value = String> {
    // No commas, so ", " only ever appears between fragments.
    "[0-9a-z#. -]{1,24}"
}

fn token_strategy() -> impl Strategy<Value = Token> {
    (
        "[a-z][a-z0-9-]{0,15}",
        "#[0-9a-f]{6}",
        "#[0-9a-f]{6}",
        "#[0-9a-f]{6}",
    )
        .prop_map(|(name, light, dark, black)| Token::new(name, [light, dark, black]))
}

fn table_strategy() -> impl Strategy<Value = TokenTable> {
    prop::collection::vec(token_strategy(), 0..12)
        .prop_map(|tokens| tokens.into_iter().collect::<TokenTable>())
}

fn variant_strategy() -> impl Strategy<Value = Variant> {
    prop_oneof![
        Just(Variant::Light),
        Just(Variant::Dark),
        Just(Variant::Black)
    ]
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// Joining keeps every fragment, in order, separated by ", ".
    #[test]
    fn list_preserves_fragment_order(parts in prop::collection::vec(fragment_strategy(), 1..8)) {
        let joined = list(&parts);
        let split: Vec<&str> = joined.split(", ").collect();
        prop_assert_eq!(split, parts.iter().map(String::as_str).collect::<Vec<_>>());
    }

    /// One declaration line per token, in table order, with the variant's value.
    #[test]
    fn declarations_follow_table_order(table in table_strategy(), variant in variant_strategy()) {
        let rendered = declarations(&table, variant);
        let lines: Vec<&str> = rendered.lines().collect();
        prop_assert_eq!(lines.len(), table.len());

        for (line, token) in lines.iter().zip(&table) {
            let expected = format!("  --{}: {};", token.name(), token.value(variant));
            prop_assert_eq!(*line, expected.as_str());
        }
    }

    /// The same palette always renders to the same bytes.
    #[test]
    fn stylesheet_is_deterministic(root in table_strategy(), child in table_strategy()) {
        let palette = Palette::new(root, child);
        prop_assert_eq!(render_stylesheet(&palette), render_stylesheet(&palette.clone()));
    }

    /// Ten rules are always emitted, whatever the table sizes.
    #[test]
    fn stylesheet_line_count(root in table_strategy(), child in table_strategy()) {
        let palette = Palette::new(root, child);
        let css = render_stylesheet(&palette);

        // header + media open/close + 10 rules × 2 brace lines + 5 × declarations
        let expected = 3 + 20 + 5 * (palette.root.len() + palette.child.len());
        prop_assert_eq!(css.lines().count(), expected);
        prop_assert!(css.ends_with('\n'));
        prop_assert!(!css.ends_with("\n\n"));
    }
}
