//! The root and child token tables a stylesheet is rendered from.
//!
//! [`Palette::builtin`] holds the application's production tokens. Palettes
//! can also be loaded from YAML token files, which is mostly useful for
//! trying out a palette without recompiling:
//!
//! ```yaml
//! root:
//!   primary-color: ["#000000", "#ffffff", "#ffffff"]
//!   link-color: ["#0066ee", "#22aaff", "#22aaff"]
//! child:
//!   log-color: ["var(--light-log-color)", "var(--dark-log-color)", "var(--dark-log-color)"]
//! ```
//!
//! Both sections are optional. Values are `[light, dark, black]` and must be
//! quoted when they start with `#`, since YAML reads an unquoted `#` as a
//! comment.

use std::path::Path;

use serde::Deserialize;
use serde_yaml::{Mapping, Value};

use crate::error::TokenFileError;
use crate::shadow::{dark_ffrf, dark_p3d, inset, light_ffrf, light_p3d, Bevel};
use crate::shadows;
use crate::token::{Token, TokenTable};

/// Root tokens (applied on `body.<class>`) and child tokens (applied on
/// `body.<class> *`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Palette {
    pub root: TokenTable,
    pub child: TokenTable,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TokenFile {
    #[serde(default)]
    root: Mapping,
    #[serde(default)]
    child: Mapping,
}

impl Palette {
    pub fn new(root: TokenTable, child: TokenTable) -> Self {
        Self { root, child }
    }

    /// The embedded production palette.
    pub fn builtin() -> Self {
        Self::new(root_tokens(), child_tokens())
    }

    /// Parses a palette from YAML token file content.
    ///
    /// # Errors
    ///
    /// Returns [`TokenFileError::Parse`] for malformed YAML or unknown
    /// top-level sections, and [`TokenFileError::InvalidToken`] for a token
    /// that is not a sequence of exactly three scalar values.
    pub fn from_yaml(yaml: &str) -> Result<Self, TokenFileError> {
        // An empty document deserializes as null rather than an empty mapping.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let file: TokenFile =
            serde_yaml::from_str(yaml).map_err(|e| TokenFileError::Parse {
                path: None,
                message: e.to_string(),
            })?;

        Ok(Self {
            root: parse_section("root", &file.root)?,
            child: parse_section("child", &file.child)?,
        })
    }

    /// Loads a palette from a YAML token file.
    ///
    /// # Errors
    ///
    /// Returns [`TokenFileError::Load`] if the file cannot be read, or the
    /// errors of [`from_yaml`](Palette::from_yaml) annotated with the path.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, TokenFileError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| TokenFileError::Load {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Self::from_yaml(&content).map_err(|e| e.with_path(path.to_path_buf()))
    }
}

fn parse_section(section: &str, mapping: &Mapping) -> Result<TokenTable, TokenFileError> {
    let mut table = TokenTable::new();

    for (key, value) in mapping {
        let name = scalar_to_string(key).ok_or_else(|| TokenFileError::Parse {
            path: None,
            message: format!("token names in '{}' must be strings, got {:?}", section, key),
        })?;

        let invalid = |message: String| TokenFileError::InvalidToken {
            section: section.to_string(),
            token: name.clone(),
            message,
            path: None,
        };

        let Value::Sequence(items) = value else {
            return Err(invalid(
                "expected a [light, dark, black] sequence".to_string(),
            ));
        };

        if items.len() != 3 {
            return Err(invalid(format!("expected 3 values, got {}", items.len())));
        }

        let mut values: [String; 3] = Default::default();
        for (slot, item) in values.iter_mut().zip(items) {
            *slot = scalar_to_string(item)
                .ok_or_else(|| invalid(format!("value {:?} is not a string or number", item)))?;
        }

        table.push(Token::new(name, values));
    }

    Ok(table)
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Tokens applied on `body.<class>`.
fn root_tokens() -> TokenTable {
    TokenTable::new()
        .add("primary-color", ["#000000", "#ffffff", "#ffffff"])
        .add("strong-color", ["#000000", "#ffffff", "#ffffff"])
        .add("grey-1-color", ["#111111", "#eeeeee", "#eeeeee"])
        .add("grey-2-color", ["#222222", "#dddddd", "#dddddd"])
        .add("grey-3-color", ["#333333", "#cccccc", "#cccccc"])
        .add("grey-4-color", ["#444444", "#bbbbbb", "#bbbbbb"])
        .add("grey-5-color", ["#555555", "#aaaaaa", "#aaaaaa"])
        .add("grey-6-color", ["#666666", "#999999", "#999999"])
        .add("grey-7-color", ["#777777", "#888888", "#888888"])
        .add("grey-8-color", ["#888888", "#777777", "#777777"])
        .add("grey-9-color", ["#999999", "#666666", "#666666"])
        .add("grey-a-color", ["#aaaaaa", "#555555", "#555555"])
        .add("grey-b-color", ["#bbbbbb", "#444444", "#444444"])
        .add("grey-c-color", ["#cccccc", "#333333", "#333333"])
        .add("grey-d-color", ["#dddddd", "#222222", "#222222"])
        .add("grey-e-color", ["#eeeeee", "#111111", "#111111"])
        .add("grey-e7-color", ["#e7e7e7", "#0c0c0c", "#0c0c0c"])
        .add("grey-f9-color", ["#f9f9f9", "#070707", "#070707"])
        .add("layout-bg-color", ["#cccccc", "#222222", "#222222"])
        .add("secondary-bg-color", ["#f5f5f5", "#050505", "#050505"])
        .add("primary-bg-color", ["#ffffff", "#000000", "#000000"])
        // Contextual
        .add("error-color", ["#d00000", "#ff1111", "#ff1111"])
        .add("error-color-faded", ["#ff1111", "#d00000", "#d00000"])
        .add("link-color", ["#0066ee", "#22aaff", "#22aaff"])
        .add("online-green-color", ["#00c220", "#00c220", "#00c220"])
        // Danger buttons
        .add("danger-button-color", ["#ffffff", "#ffffff", "#ffffff"])
        .add(
            "danger-button-background",
            [
                "linear-gradient(#ff0000, #cc0000)",
                "linear-gradient(#dd0000, #aa0000)",
                "linear-gradient(#dd0000, #aa0000)",
            ],
        )
        .add(
            "danger-button-hover-background",
            [
                "linear-gradient(#dd0000, #aa0000)",
                "linear-gradient(#bb0000, #880000)",
                "linear-gradient(#bb0000, #880000)",
            ],
        )
        .add(
            "danger-button-active-background",
            [
                "linear-gradient(#cc0000, #880000)",
                "linear-gradient(#aa0000, #660000)",
                "linear-gradient(#aa0000, #660000)",
            ],
        )
        .add(
            "danger-button-shadow",
            [
                shadows![
                    "0 4px 8px -3px #00000026",
                    "0 0.4px 0 0.8px #880000ff",
                    light_ffrf()
                ],
                shadows!["0 -0.33px 0 1px #ff555533", dark_ffrf()],
                shadows!["0 -0.33px 0 1px #ff555533", dark_ffrf()],
            ],
        )
        .add(
            "danger-button-hover-shadow",
            [
                shadows![
                    "0 6px 8px -4px #00000033",
                    "0 0.4px 0 0.8px #660000ff",
                    light_ffrf()
                ],
                shadows!["0 -0.33px 0 1px #ff555555", dark_ffrf()],
                shadows!["0 -0.33px 0 1px #ff555555", dark_ffrf()],
            ],
        )
        .add(
            "danger-button-active-shadow",
            [
                shadows![
                    "0 4px 6px -3px #00000026",
                    "0 0.4px 0 0.8px #660000ff",
                    light_ffrf()
                ],
                shadows!["0 -0.33px 0 1px #ff555544", dark_ffrf()],
                shadows!["0 -0.33px 0 1px #ff555544", dark_ffrf()],
            ],
        )
        // Nav
        .add("nav-bg-color", ["#e7e7e7", "#050505", "#050505"])
        .add("nav-button-active-bg-color", ["#d5d5d5", "#111111", "#111111"])
        .add(
            "nav-button-active-hover-bg-color",
            ["#cccccc", "#1c1c1c", "#1c1c1c"],
        )
        // Code
        .add("code-bg-color", ["#44444411", "#aaaaaa11", "#aaaaaa11"])
        .add(
            "code-shadow",
            [
                shadows![
                    "0 6px 9px -4px #00000033",
                    "0 0.4px 0 0.8px #0000001a",
                    light_ffrf()
                ],
                shadows!["0 0.33px 0 1px #ffffff26", dark_ffrf()],
                shadows!["0 0.33px 0 1px #ffffff26", dark_ffrf()],
            ],
        )
        // Process details
        .add("sparkline-stroke", ["#ee0000", "#ee0000", "#ee0000"])
        .add("sparkline-fill", ["#ee000044", "#ee000044", "#ee000044"])
        // Spinners
        .add("spinner-grey", ["#777777ff", "#777777ff", "#777777ff"])
        .add("spinner-grey-light", ["#77777733", "#77777733", "#77777733"])
        // Checkbox
        .add("checkbox-color", ["#777777ff", "#999999ff", "#999999ff"])
        .add("checkbox-bg-color", ["#77777700", "#99999900", "#99999900"])
        .add("checkbox-border-color", ["#77777777", "#99999977", "#99999977"])
        .add("checkbox-hover-color", ["#444444", "#777777", "#777777"])
        .add("checkbox-hover-bg-color", ["#77777711", "#99999922", "#99999922"])
        .add("checkbox-focus-bg-color", ["#77777722", "#99999944", "#99999944"])
        .add(
            "checkbox-active-hover-bg-color",
            ["#55ccff22", "#19baff22", "#19baff22"],
        )
        .add(
            "checkbox-active-focus-bg-color",
            ["#55ccff44", "#19baff44", "#19baff44"],
        )
        .add("checkbox-active-color", ["#008ac5", "#19baff", "#19baff"])
        .add(
            "checkbox-active-border-color",
            ["#008ac577", "#19baff77", "#19baff77"],
        )
        // Buttons
        .add("icon-button-bg-color", ["#00000000", "#eeeeee00", "#eeeeee00"])
        .add(
            "icon-button-hover-bg-color",
            ["#00000010", "#eeeeee18", "#eeeeee18"],
        )
        .add(
            "icon-button-focus-bg-color",
            ["#00000018", "#eeeeee33", "#eeeeee33"],
        )
        .add(
            "button-background",
            [
                "linear-gradient(#fff, #f5f5f5)",
                "linear-gradient(#141414, #040404)",
                "linear-gradient(#141414, #040404)",
            ],
        )
        .add(
            "button-hover-background",
            [
                "linear-gradient(#fafafa, #e7e7e7)",
                "linear-gradient(#242424, #111111)",
                "linear-gradient(#242424, #111111)",
            ],
        )
        .add(
            "button-active-background",
            [
                "linear-gradient(#f7f7f7, #e0e0e0)",
                "linear-gradient(#111111, #000000)",
                "linear-gradient(#111111, #000000)",
            ],
        )
        .add(
            "button-inset-background",
            [
                "linear-gradient(#00000022, #00000011)",
                "linear-gradient(#222222, #333333)",
                "linear-gradient(#222222, #333333)",
            ],
        )
        .add(
            "button-shadow",
            [
                shadows!["0 4px 8px -3px #00000022", light_p3d("40"), light_ffrf()],
                shadows![dark_p3d("30"), dark_ffrf()],
                shadows![dark_p3d("30"), dark_ffrf()],
            ],
        )
        .add(
            "button-hover-shadow",
            [
                shadows!["0 6px 8px -4px #00000030", light_p3d("59"), light_ffrf()],
                shadows![dark_p3d("50"), dark_ffrf()],
                shadows![dark_p3d("50"), dark_ffrf()],
            ],
        )
        .add(
            "button-active-shadow",
            [
                shadows!["0 4px 6px -3px #00000024", light_p3d("73"), light_ffrf()],
                shadows![dark_p3d("40"), dark_ffrf()],
                shadows![dark_p3d("40"), dark_ffrf()],
            ],
        )
        .add(
            "button-inset-shadow",
            [
                shadows![
                    inset("0 4px 8px -3px #00000022"),
                    inset(light_p3d("40")),
                    inset(light_ffrf())
                ],
                shadows![inset(dark_p3d("40")), inset(dark_ffrf())],
                shadows![inset(dark_p3d("40")), inset(dark_ffrf())],
            ],
        )
        // Shadows
        .add(
            "heavy-3d-box-shadow",
            [
                shadows![
                    "0 8px 12px -6px #0000004d",
                    Bevel::light("30").offset(0.0, 0.5).thickness(1.0).to_string(),
                    light_ffrf()
                ],
                shadows![dark_p3d("23"), "0 8px 12px -6px #0000004d", dark_ffrf()],
                shadows![dark_p3d("23"), "0 8px 12px -6px #0000004d", dark_ffrf()],
            ],
        )
        .add(
            "text-input-shadow",
            [
                shadows![
                    inset("0 6px 9px -4px #0000001a"),
                    inset(light_p3d("1a")),
                    inset(light_ffrf())
                ],
                shadows![
                    dark_p3d("26"),
                    inset("0 6px 9px -4px #0000001a"),
                    inset(dark_ffrf())
                ],
                shadows![
                    dark_p3d("26"),
                    inset("0 6px 9px -4px #0000001a"),
                    inset(dark_ffrf())
                ],
            ],
        )
        .add(
            "text-input-shadow-focus",
            [
                shadows![
                    "0 0px 0 1px #0066ee",
                    inset("0 6px 9px -4px #0000001a"),
                    inset(light_p3d("1a")),
                    inset(light_ffrf())
                ],
                shadows![
                    "0 0px 0 1px #22aaff",
                    inset("0 6px 9px -4px #0000001a"),
                    inset(light_p3d("1a")),
                    inset(dark_ffrf())
                ],
                shadows![
                    "0 0px 0 1px #22aaff",
                    inset("0 6px 9px -4px #0000001a"),
                    inset(light_p3d("1a")),
                    inset(dark_ffrf())
                ],
            ],
        )
        .add(
            "shadow-focus",
            [
                "0 0px 0 1px #0066ee",
                "0 0px 0 1px #22aaff",
                "0 0px 0 1px #22aaff",
            ],
        )
        .add(
            "dropdown-shadow",
            [
                shadows!["0 12px 12px -4px #00000033", light_p3d("52"), light_ffrf()],
                shadows![dark_p3d("55"), "0 12px 12px -4px #00000033", dark_ffrf()],
                shadows![dark_p3d("55"), "0 12px 12px -4px #00000033", dark_ffrf()],
            ],
        )
        .add(
            "card-shadow",
            [
                shadows![
                    "0 4px 8px -3px #00000022",
                    "0.2px 0.3px 0 0.7px #00000030",
                    light_ffrf()
                ],
                shadows![
                    "0.25px -0.25px 0 0.75px #ffffff30",
                    "0 4px 8px -3px #00000022",
                    dark_ffrf()
                ],
                shadows![
                    "0.25px -0.25px 0 0.75px #ffffff30",
                    "0 4px 8px -3px #00000022",
                    dark_ffrf()
                ],
            ],
        )
        .add(
            "card-hover-shadow",
            [
                shadows![
                    "0 6px 8px -4px #00000044",
                    "0.2px 0.25px 0 0.85px #00000050",
                    light_ffrf()
                ],
                shadows![
                    "0.25px -0.25px 0 1px #ffffff50",
                    "0 6px 8px -4px #00000044",
                    dark_ffrf()
                ],
                shadows![
                    "0.25px -0.25px 0 1px #ffffff50",
                    "0 6px 8px -4px #00000044",
                    dark_ffrf()
                ],
            ],
        )
}

/// Tokens applied on `body.<class> *`, so log colors follow the theme even
/// where an element sets its own.
fn child_tokens() -> TokenTable {
    TokenTable::new()
        .add(
            "log-color",
            [
                "var(--light-log-color)",
                "var(--dark-log-color)",
                "var(--dark-log-color)",
            ],
        )
        .add(
            "log-bg-color",
            [
                "var(--light-log-bg-color)",
                "var(--dark-log-bg-color)",
                "var(--dark-log-bg-color)",
            ],
        )
        .add(
            "log-hover-color",
            [
                "var(--light-log-hover-color)",
                "var(--dark-log-hover-color)",
                "var(--dark-log-hover-color)",
            ],
        )
        .add(
            "log-bg-hover-color",
            [
                "var(--light-log-bg-hover-color)",
                "var(--dark-log-bg-hover-color)",
                "var(--dark-log-bg-hover-color)",
            ],
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variant::Variant;

    #[test]
    fn test_builtin_table_sizes() {
        let palette = Palette::builtin();
        assert_eq!(palette.root.len(), 69);
        assert_eq!(palette.child.len(), 4);
    }

    #[test]
    fn test_builtin_starts_and_ends_in_declaration_order() {
        let palette = Palette::builtin();
        let names: Vec<&str> = palette.root.names().collect();
        assert_eq!(names.first(), Some(&"primary-color"));
        assert_eq!(names.last(), Some(&"card-hover-shadow"));

        let child: Vec<&str> = palette.child.names().collect();
        assert_eq!(
            child,
            vec!["log-color", "log-bg-color", "log-hover-color", "log-bg-hover-color"]
        );
    }

    #[test]
    fn test_builtin_shadow_values() {
        let palette = Palette::builtin();

        let button = palette.root.get("button-shadow").unwrap();
        assert_eq!(
            button.value(Variant::Light),
            "0 4px 8px -3px #00000022, 0px 0.4px 0 0.8px #00000040, 0 0 0 1px #00000012"
        );
        assert_eq!(
            button.value(Variant::Dark),
            "0px -0.33px 0 1px #ffffff30, 0 0 0 1px #ffffff15"
        );

        let heavy = palette.root.get("heavy-3d-box-shadow").unwrap();
        assert_eq!(
            heavy.value(Variant::Light),
            "0 8px 12px -6px #0000004d, 0px 0.5px 0 1px #00000030, 0 0 0 1px #00000012"
        );

        let inset_shadow = palette.root.get("button-inset-shadow").unwrap();
        assert_eq!(
            inset_shadow.value(Variant::Black),
            "0px -0.33px 0 1px #ffffff40 inset, 0 0 0 1px #ffffff15 inset"
        );
    }

    #[test]
    fn test_builtin_child_values_reference_root_properties() {
        let palette = Palette::builtin();
        for token in &palette.child {
            assert!(token.value(Variant::Light).starts_with("var(--light-"));
            assert!(token.value(Variant::Dark).starts_with("var(--dark-"));
            assert!(token.value(Variant::Black).starts_with("var(--dark-"));
        }
    }

    #[test]
    fn test_from_yaml_keeps_order() {
        let palette = Palette::from_yaml(
            r##"
            root:
                zeta: ["#000", "#111", "#222"]
                alpha: ["#333", "#444", "#555"]
            child:
                log-color: ["var(--a)", "var(--b)", "var(--c)"]
            "##,
        )
        .unwrap();

        let names: Vec<&str> = palette.root.names().collect();
        assert_eq!(names, vec!["zeta", "alpha"]);
        assert_eq!(
            palette.root.get("alpha").unwrap().value(Variant::Black),
            "#555"
        );
        assert_eq!(palette.child.len(), 1);
    }

    #[test]
    fn test_from_yaml_sections_are_optional() {
        let palette = Palette::from_yaml(
            r##"
            root:
                link-color: ["#0066ee", "#22aaff", "#22aaff"]
            "##,
        )
        .unwrap();
        assert_eq!(palette.root.len(), 1);
        assert!(palette.child.is_empty());

        assert_eq!(Palette::from_yaml("").unwrap(), Palette::default());
    }

    #[test]
    fn test_from_yaml_numbers_become_strings() {
        let palette = Palette::from_yaml(
            r#"
            root:
                line-height: [1.5, 1.4, 1.4]
                z-index: [0, 10, 10]
            "#,
        )
        .unwrap();

        assert_eq!(
            palette.root.get("line-height").unwrap().value(Variant::Light),
            "1.5"
        );
        assert_eq!(palette.root.get("z-index").unwrap().value(Variant::Dark), "10");
    }

    #[test]
    fn test_from_yaml_wrong_arity() {
        let err = Palette::from_yaml(
            r##"
            root:
                link-color: ["#0066ee", "#22aaff"]
            "##,
        )
        .unwrap_err();

        match err {
            TokenFileError::InvalidToken {
                section,
                token,
                message,
                ..
            } => {
                assert_eq!(section, "root");
                assert_eq!(token, "link-color");
                assert!(message.contains("got 2"));
            }
            other => panic!("Expected InvalidToken, got {:?}", other),
        }
    }

    #[test]
    fn test_from_yaml_value_not_sequence() {
        let err = Palette::from_yaml(
            r##"
            child:
                log-color: "#000000"
            "##,
        )
        .unwrap_err();
        assert!(matches!(err, TokenFileError::InvalidToken { .. }));
    }

    #[test]
    fn test_from_yaml_nested_value_rejected() {
        let err = Palette::from_yaml(
            r#"
            root:
                bad: [[1], "b", "c"]
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("not a string or number"));
    }

    #[test]
    fn test_from_yaml_unknown_section() {
        let err = Palette::from_yaml(
            r##"
            extra:
                link-color: ["#0066ee", "#22aaff", "#22aaff"]
            "##,
        )
        .unwrap_err();
        assert!(matches!(err, TokenFileError::Parse { .. }));
    }

    #[test]
    fn test_from_yaml_invalid() {
        let result = Palette::from_yaml("root: [");
        assert!(matches!(result, Err(TokenFileError::Parse { .. })));
    }

    #[test]
    fn test_from_file() {
        use std::fs;
        use tempfile::TempDir;

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("tokens.yaml");
        fs::write(
            &path,
            r##"
            root:
                link-color: ["#0066ee", "#22aaff", "#22aaff"]
            "##,
        )
        .unwrap();

        let palette = Palette::from_file(&path).unwrap();
        assert_eq!(palette.root.len(), 1);
    }

    #[test]
    fn test_from_file_errors_name_the_path() {
        use std::fs;
        use tempfile::TempDir;

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.yaml");
        fs::write(&path, "root:\n  link-color: [\"#0066ee\"]\n").unwrap();

        let err = Palette::from_file(&path).unwrap_err();
        assert!(err.to_string().contains("broken.yaml"));
    }

    #[test]
    fn test_from_file_not_found() {
        let result = Palette::from_file("/nonexistent/path/tokens.yaml");
        assert!(matches!(result, Err(TokenFileError::Load { .. })));
    }
}
