//! Tests for the theme preset table

use std::collections::BTreeSet;

use rstest::rstest;

use moltron::domain::theme::VARIABLE_NAMES;
use moltron::domain::{generate_theme_variables, theme_variables, Aesthetic, Theme};

fn keys(aesthetic: Aesthetic, theme: Theme) -> BTreeSet<&'static str> {
    theme_variables(aesthetic, theme)
        .variables()
        .iter()
        .map(|(name, _)| *name)
        .collect()
}

#[test]
fn given_all_presets_when_resolved_then_key_sets_are_identical() {
    let expected = keys(Aesthetic::CyberNeon, Theme::Light);
    assert_eq!(expected.len(), VARIABLE_NAMES.len());

    for aesthetic in Aesthetic::ALL {
        for theme in Theme::ALL {
            let block = theme_variables(aesthetic, theme);
            assert!(
                block.variables().iter().all(|(_, v)| !v.is_empty()),
                "{} {} has an empty value",
                aesthetic,
                theme
            );
            assert_eq!(keys(aesthetic, theme), expected, "{} {}", aesthetic, theme);
        }
    }
}

#[test]
fn given_presets_when_compared_then_each_pair_is_distinct() {
    let mut seen = Vec::new();
    for aesthetic in Aesthetic::ALL {
        for theme in Theme::ALL {
            let block = theme_variables(aesthetic, theme);
            assert!(!seen.contains(&block), "{} {} duplicates another preset", aesthetic, theme);
            seen.push(block);
        }
    }
}

#[test]
fn given_unknown_aesthetic_when_generating_then_falls_back_to_default() {
    let fallback = generate_theme_variables("vaporwave", Theme::Dark);
    let default = generate_theme_variables("cyber-neon", Theme::Dark);
    assert_eq!(fallback, default);
}

#[rstest]
#[case("brutalist", Theme::Dark, "0px", "'Space Grotesk', system-ui, sans-serif")]
#[case("organic", Theme::Light, "1rem", "'Instrument Serif', Georgia, serif")]
#[case("retro-future", Theme::Dark, "0.25rem", "'Orbitron', system-ui, sans-serif")]
#[case("minimal-luxury", Theme::Light, "0.125rem", "'Cormorant Garamond', 'Times New Roman', serif")]
fn given_known_aesthetic_when_generating_then_returns_its_preset(
    #[case] id: &str,
    #[case] theme: Theme,
    #[case] radius: &str,
    #[case] font_sans: &str,
) {
    let block = generate_theme_variables(id, theme);
    assert_eq!(block.radius, radius);
    assert_eq!(block.font_sans, font_sans);
}

#[test]
fn given_block_when_rendered_then_emits_root_rule() {
    let css = theme_variables(Aesthetic::CyberNeon, Theme::Dark).to_css();

    assert!(css.starts_with(":root {\n"));
    assert!(css.ends_with("}\n"));
    assert!(css.contains("  --background: 0 0% 4%;\n"));
    assert!(css.contains("  --primary: 180 100% 50%;\n"));
    assert!(css.contains("  --font-mono: 'JetBrains Mono', monospace;\n"));
    assert_eq!(css.matches("--").count(), VARIABLE_NAMES.len());
}
