//! Theme presets: CSS custom properties per aesthetic and light/dark mode
//!
//! The table is static data. Colors are `H S% L%` triples as consumed by
//! shadcn/ui's `hsl(var(--x))` convention.

use serde::Serialize;
use tracing::debug;

use crate::domain::{Aesthetic, Theme};

/// Names of all variables in a [`StyleBlock`], in render order.
pub const VARIABLE_NAMES: [&str; 22] = [
    "background",
    "foreground",
    "card",
    "card-foreground",
    "popover",
    "popover-foreground",
    "primary",
    "primary-foreground",
    "secondary",
    "secondary-foreground",
    "muted",
    "muted-foreground",
    "accent",
    "accent-foreground",
    "destructive",
    "destructive-foreground",
    "border",
    "input",
    "ring",
    "radius",
    "font-sans",
    "font-mono",
];

/// Style variables for one (aesthetic, theme) pair.
///
/// A struct rather than a map: every preset has exactly the same keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct StyleBlock {
    pub background: &'static str,
    pub foreground: &'static str,
    pub card: &'static str,
    pub card_foreground: &'static str,
    pub popover: &'static str,
    pub popover_foreground: &'static str,
    pub primary: &'static str,
    pub primary_foreground: &'static str,
    pub secondary: &'static str,
    pub secondary_foreground: &'static str,
    pub muted: &'static str,
    pub muted_foreground: &'static str,
    pub accent: &'static str,
    pub accent_foreground: &'static str,
    pub destructive: &'static str,
    pub destructive_foreground: &'static str,
    pub border: &'static str,
    pub input: &'static str,
    pub ring: &'static str,
    pub radius: &'static str,
    pub font_sans: &'static str,
    pub font_mono: &'static str,
}

impl StyleBlock {
    /// Variables as `(name, value)` pairs, names without the `--` prefix.
    pub fn variables(&self) -> [(&'static str, &'static str); 22] {
        let values = [
            self.background,
            self.foreground,
            self.card,
            self.card_foreground,
            self.popover,
            self.popover_foreground,
            self.primary,
            self.primary_foreground,
            self.secondary,
            self.secondary_foreground,
            self.muted,
            self.muted_foreground,
            self.accent,
            self.accent_foreground,
            self.destructive,
            self.destructive_foreground,
            self.border,
            self.input,
            self.ring,
            self.radius,
            self.font_sans,
            self.font_mono,
        ];
        std::array::from_fn(|i| (VARIABLE_NAMES[i], values[i]))
    }

    /// Render as a `:root { ... }` rule.
    pub fn to_css(&self) -> String {
        let mut css = String::from(":root {\n");
        for (name, value) in self.variables() {
            css.push_str(&format!("  --{}: {};\n", name, value));
        }
        css.push_str("}\n");
        css
    }
}

/// Total lookup of the preset table.
pub fn theme_variables(aesthetic: Aesthetic, theme: Theme) -> &'static StyleBlock {
    match (aesthetic, theme) {
        (Aesthetic::CyberNeon, Theme::Light) => &CYBER_NEON_LIGHT,
        (Aesthetic::CyberNeon, Theme::Dark) => &CYBER_NEON_DARK,
        (Aesthetic::Brutalist, Theme::Light) => &BRUTALIST_LIGHT,
        (Aesthetic::Brutalist, Theme::Dark) => &BRUTALIST_DARK,
        (Aesthetic::Organic, Theme::Light) => &ORGANIC_LIGHT,
        (Aesthetic::Organic, Theme::Dark) => &ORGANIC_DARK,
        (Aesthetic::RetroFuture, Theme::Light) => &RETRO_FUTURE_LIGHT,
        (Aesthetic::RetroFuture, Theme::Dark) => &RETRO_FUTURE_DARK,
        (Aesthetic::Editorial, Theme::Light) => &EDITORIAL_LIGHT,
        (Aesthetic::Editorial, Theme::Dark) => &EDITORIAL_DARK,
        (Aesthetic::MinimalLuxury, Theme::Light) => &MINIMAL_LUXURY_LIGHT,
        (Aesthetic::MinimalLuxury, Theme::Dark) => &MINIMAL_LUXURY_DARK,
    }
}

/// Look up a preset by identifier; unknown identifiers use the default aesthetic.
pub fn generate_theme_variables(aesthetic: &str, theme: Theme) -> &'static StyleBlock {
    let resolved = Aesthetic::resolve(aesthetic);
    debug!("generate_theme_variables: {} ({})", resolved, theme);
    theme_variables(resolved, theme)
}

static CYBER_NEON_LIGHT: StyleBlock = StyleBlock {
    background: "0 0% 98%",
    foreground: "0 0% 10%",
    card: "0 0% 100%",
    card_foreground: "0 0% 10%",
    popover: "0 0% 100%",
    popover_foreground: "0 0% 10%",
    primary: "180 100% 40%",
    primary_foreground: "0 0% 98%",
    secondary: "300 100% 45%",
    secondary_foreground: "0 0% 98%",
    muted: "0 0% 92%",
    muted_foreground: "0 0% 40%",
    accent: "60 100% 50%",
    accent_foreground: "0 0% 10%",
    destructive: "0 84% 60%",
    destructive_foreground: "0 0% 98%",
    border: "0 0% 85%",
    input: "0 0% 85%",
    ring: "180 100% 40%",
    radius: "0.5rem",
    font_sans: "'Geist', system-ui, sans-serif",
    font_mono: "'JetBrains Mono', monospace",
};

static CYBER_NEON_DARK: StyleBlock = StyleBlock {
    background: "0 0% 4%",
    foreground: "0 0% 95%",
    card: "0 0% 6%",
    card_foreground: "0 0% 95%",
    popover: "0 0% 6%",
    popover_foreground: "0 0% 95%",
    primary: "180 100% 50%",
    primary_foreground: "0 0% 4%",
    secondary: "300 100% 50%",
    secondary_foreground: "0 0% 95%",
    muted: "0 0% 15%",
    muted_foreground: "0 0% 65%",
    accent: "60 100% 50%",
    accent_foreground: "0 0% 4%",
    destructive: "0 84% 60%",
    destructive_foreground: "0 0% 95%",
    border: "0 0% 20%",
    input: "0 0% 20%",
    ring: "180 100% 50%",
    radius: "0.5rem",
    font_sans: "'Geist', system-ui, sans-serif",
    font_mono: "'JetBrains Mono', monospace",
};

static BRUTALIST_LIGHT: StyleBlock = StyleBlock {
    background: "0 0% 96%",
    foreground: "0 0% 8%",
    card: "0 0% 100%",
    card_foreground: "0 0% 8%",
    popover: "0 0% 100%",
    popover_foreground: "0 0% 8%",
    primary: "0 0% 8%",
    primary_foreground: "0 0% 96%",
    secondary: "0 0% 85%",
    secondary_foreground: "0 0% 8%",
    muted: "0 0% 90%",
    muted_foreground: "0 0% 40%",
    accent: "0 100% 50%",
    accent_foreground: "0 0% 96%",
    destructive: "0 84% 60%",
    destructive_foreground: "0 0% 98%",
    border: "0 0% 0%",
    input: "0 0% 80%",
    ring: "0 0% 8%",
    radius: "0px",
    font_sans: "'Space Grotesk', system-ui, sans-serif",
    font_mono: "'Space Mono', monospace",
};

static BRUTALIST_DARK: StyleBlock = StyleBlock {
    background: "0 0% 8%",
    foreground: "0 0% 98%",
    card: "0 0% 12%",
    card_foreground: "0 0% 98%",
    popover: "0 0% 12%",
    popover_foreground: "0 0% 98%",
    primary: "0 0% 98%",
    primary_foreground: "0 0% 8%",
    secondary: "0 0% 25%",
    secondary_foreground: "0 0% 98%",
    muted: "0 0% 20%",
    muted_foreground: "0 0% 60%",
    accent: "0 100% 50%",
    accent_foreground: "0 0% 98%",
    destructive: "0 84% 60%",
    destructive_foreground: "0 0% 98%",
    border: "0 0% 30%",
    input: "0 0% 30%",
    ring: "0 0% 98%",
    radius: "0px",
    font_sans: "'Space Grotesk', system-ui, sans-serif",
    font_mono: "'Space Mono', monospace",
};

static ORGANIC_LIGHT: StyleBlock = StyleBlock {
    background: "40 30% 97%",
    foreground: "150 20% 15%",
    card: "40 25% 100%",
    card_foreground: "150 20% 15%",
    popover: "40 25% 100%",
    popover_foreground: "150 20% 15%",
    primary: "140 40% 35%",
    primary_foreground: "0 0% 98%",
    secondary: "30 40% 55%",
    secondary_foreground: "0 0% 98%",
    muted: "40 20% 92%",
    muted_foreground: "150 10% 40%",
    accent: "35 80% 50%",
    accent_foreground: "0 0% 98%",
    destructive: "0 60% 50%",
    destructive_foreground: "0 0% 98%",
    border: "40 20% 85%",
    input: "40 20% 85%",
    ring: "140 40% 35%",
    radius: "1rem",
    font_sans: "'Instrument Serif', Georgia, serif",
    font_mono: "'IBM Plex Mono', monospace",
};

static ORGANIC_DARK: StyleBlock = StyleBlock {
    background: "150 20% 8%",
    foreground: "40 30% 95%",
    card: "150 15% 12%",
    card_foreground: "40 30% 95%",
    popover: "150 15% 12%",
    popover_foreground: "40 30% 95%",
    primary: "140 40% 45%",
    primary_foreground: "0 0% 98%",
    secondary: "30 40% 50%",
    secondary_foreground: "0 0% 98%",
    muted: "150 10% 20%",
    muted_foreground: "40 20% 65%",
    accent: "35 80% 55%",
    accent_foreground: "0 0% 98%",
    destructive: "0 60% 50%",
    destructive_foreground: "0 0% 98%",
    border: "150 15% 25%",
    input: "150 15% 25%",
    ring: "140 40% 45%",
    radius: "1rem",
    font_sans: "'Instrument Serif', Georgia, serif",
    font_mono: "'IBM Plex Mono', monospace",
};

static RETRO_FUTURE_LIGHT: StyleBlock = StyleBlock {
    background: "45 30% 96%",
    foreground: "220 30% 15%",
    card: "45 25% 100%",
    card_foreground: "220 30% 15%",
    popover: "45 25% 100%",
    popover_foreground: "220 30% 15%",
    primary: "280 60% 50%",
    primary_foreground: "0 0% 98%",
    secondary: "45 90% 50%",
    secondary_foreground: "220 30% 15%",
    muted: "45 20% 92%",
    muted_foreground: "220 20% 45%",
    accent: "190 70% 45%",
    accent_foreground: "0 0% 98%",
    destructive: "0 70% 55%",
    destructive_foreground: "0 0% 98%",
    border: "45 20% 85%",
    input: "45 20% 85%",
    ring: "280 60% 50%",
    radius: "0.25rem",
    font_sans: "'Orbitron', system-ui, sans-serif",
    font_mono: "'Share Tech Mono', monospace",
};

static RETRO_FUTURE_DARK: StyleBlock = StyleBlock {
    background: "220 30% 8%",
    foreground: "45 80% 95%",
    card: "220 25% 12%",
    card_foreground: "45 80% 95%",
    popover: "220 25% 12%",
    popover_foreground: "45 80% 95%",
    primary: "280 70% 55%",
    primary_foreground: "0 0% 98%",
    secondary: "45 90% 50%",
    secondary_foreground: "220 30% 8%",
    muted: "220 20% 20%",
    muted_foreground: "45 40% 70%",
    accent: "190 80% 50%",
    accent_foreground: "220 30% 8%",
    destructive: "0 70% 55%",
    destructive_foreground: "0 0% 98%",
    border: "220 20% 25%",
    input: "220 20% 25%",
    ring: "280 70% 55%",
    radius: "0.25rem",
    font_sans: "'Orbitron', system-ui, sans-serif",
    font_mono: "'Share Tech Mono', monospace",
};

static EDITORIAL_LIGHT: StyleBlock = StyleBlock {
    background: "30 20% 97%",
    foreground: "220 20% 12%",
    card: "30 20% 100%",
    card_foreground: "220 20% 12%",
    popover: "30 20% 100%",
    popover_foreground: "220 20% 12%",
    primary: "30 60% 45%",
    primary_foreground: "0 0% 98%",
    secondary: "220 15% 92%",
    secondary_foreground: "220 20% 12%",
    muted: "30 15% 94%",
    muted_foreground: "220 10% 45%",
    accent: "0 60% 50%",
    accent_foreground: "0 0% 98%",
    destructive: "0 60% 50%",
    destructive_foreground: "0 0% 98%",
    border: "30 15% 85%",
    input: "30 15% 85%",
    ring: "30 60% 45%",
    radius: "0px",
    font_sans: "'Playfair Display', Georgia, serif",
    font_mono: "'Fira Code', monospace",
};

static EDITORIAL_DARK: StyleBlock = StyleBlock {
    background: "220 20% 6%",
    foreground: "30 20% 95%",
    card: "220 15% 10%",
    card_foreground: "30 20% 95%",
    popover: "220 15% 10%",
    popover_foreground: "30 20% 95%",
    primary: "30 60% 55%",
    primary_foreground: "220 20% 6%",
    secondary: "220 15% 20%",
    secondary_foreground: "30 20% 95%",
    muted: "220 10% 18%",
    muted_foreground: "30 10% 65%",
    accent: "0 60% 55%",
    accent_foreground: "0 0% 98%",
    destructive: "0 60% 50%",
    destructive_foreground: "0 0% 98%",
    border: "220 10% 25%",
    input: "220 10% 25%",
    ring: "30 60% 55%",
    radius: "0px",
    font_sans: "'Playfair Display', Georgia, serif",
    font_mono: "'Fira Code', monospace",
};

static MINIMAL_LUXURY_LIGHT: StyleBlock = StyleBlock {
    background: "40 20% 98%",
    foreground: "0 0% 10%",
    card: "40 20% 100%",
    card_foreground: "0 0% 10%",
    popover: "40 20% 100%",
    popover_foreground: "0 0% 10%",
    primary: "40 30% 45%",
    primary_foreground: "0 0% 98%",
    secondary: "40 10% 94%",
    secondary_foreground: "0 0% 10%",
    muted: "40 10% 96%",
    muted_foreground: "0 0% 45%",
    accent: "40 40% 55%",
    accent_foreground: "0 0% 98%",
    destructive: "0 50% 50%",
    destructive_foreground: "0 0% 98%",
    border: "40 10% 88%",
    input: "40 10% 88%",
    ring: "40 30% 45%",
    radius: "0.125rem",
    font_sans: "'Cormorant Garamond', 'Times New Roman', serif",
    font_mono: "'Source Code Pro', monospace",
};

static MINIMAL_LUXURY_DARK: StyleBlock = StyleBlock {
    background: "0 0% 7%",
    foreground: "40 20% 96%",
    card: "0 0% 10%",
    card_foreground: "40 20% 96%",
    popover: "0 0% 10%",
    popover_foreground: "40 20% 96%",
    primary: "40 30% 65%",
    primary_foreground: "0 0% 7%",
    secondary: "0 0% 18%",
    secondary_foreground: "40 20% 96%",
    muted: "0 0% 15%",
    muted_foreground: "40 10% 60%",
    accent: "40 40% 70%",
    accent_foreground: "0 0% 7%",
    destructive: "0 50% 50%",
    destructive_foreground: "0 0% 98%",
    border: "0 0% 22%",
    input: "0 0% 22%",
    ring: "40 30% 65%",
    radius: "0.125rem",
    font_sans: "'Cormorant Garamond', 'Times New Roman', serif",
    font_mono: "'Source Code Pro', monospace",
};
