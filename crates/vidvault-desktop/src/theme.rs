//! Theme configuration for the desktop app

use std::sync::OnceLock;

/// Cached system dark mode preference (detected once at startup)
static SYSTEM_DARK_MODE: OnceLock<bool> = OnceLock::new();

/// Resolved theme (light or dark)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolvedTheme {
    #[default]
    Light,
    Dark,
}

impl ResolvedTheme {
    /// Follow the operating system preference.
    #[must_use]
    pub fn from_system() -> Self {
        if *SYSTEM_DARK_MODE.get_or_init(detect_system_dark_mode) {
            Self::Dark
        } else {
            Self::Light
        }
    }

    /// Get the color palette for this theme
    #[must_use]
    pub const fn palette(self) -> &'static ColorPalette {
        match self {
            Self::Light => &LIGHT_PALETTE,
            Self::Dark => &DARK_PALETTE,
        }
    }
}

#[cfg(target_os = "macos")]
fn detect_system_dark_mode() -> bool {
    std::process::Command::new("defaults")
        .args(["read", "-g", "AppleInterfaceStyle"])
        .output()
        .map(|output| {
            String::from_utf8_lossy(&output.stdout)
                .trim()
                .eq_ignore_ascii_case("dark")
        })
        .unwrap_or_else(|error| {
            tracing::warn!("Failed to detect system theme: {}", error);
            false
        })
}

#[cfg(target_os = "windows")]
fn detect_system_dark_mode() -> bool {
    // AppsUseLightTheme is 0x0 in dark mode
    std::process::Command::new("reg")
        .args([
            "query",
            r"HKCU\SOFTWARE\Microsoft\Windows\CurrentVersion\Themes\Personalize",
            "/v",
            "AppsUseLightTheme",
        ])
        .output()
        .map(|output| String::from_utf8_lossy(&output.stdout).contains("0x0"))
        .unwrap_or_else(|error| {
            tracing::warn!("Failed to detect system theme: {}", error);
            false
        })
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn detect_system_dark_mode() -> bool {
    std::env::var("GTK_THEME").is_ok_and(|theme| theme.to_lowercase().contains("dark"))
}

/// Color palette for the application
#[derive(Debug, Clone, Copy)]
pub struct ColorPalette {
    pub bg_page: &'static str,
    pub bg_card: &'static str,
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
    pub border: &'static str,
    pub accent: &'static str,
    pub accent_text: &'static str,
    pub busy: &'static str,
    pub danger: &'static str,
    pub link: &'static str,
    pub error_bg: &'static str,
    pub success: &'static str,
    pub success_bg: &'static str,
    pub track: &'static str,
    pub overlay: &'static str,
}

/// Light theme colors
pub const LIGHT_PALETTE: ColorPalette = ColorPalette {
    bg_page: "#f3f4f6",
    bg_card: "#ffffff",
    text_primary: "#1f2937",
    text_secondary: "#4b5563",
    border: "#d1d5db",
    accent: "#4f46e5",
    accent_text: "#ffffff",
    busy: "#4b5563",
    danger: "#dc2626",
    link: "#2563eb",
    error_bg: "#fee2e2",
    success: "#16a34a",
    success_bg: "#dcfce7",
    track: "#d1d5db",
    overlay: "rgba(0, 0, 0, 0.5)",
};

/// Dark theme colors
pub const DARK_PALETTE: ColorPalette = ColorPalette {
    bg_page: "#1a1a1a",
    bg_card: "#242424",
    text_primary: "#e8eaed",
    text_secondary: "#9aa0a6",
    border: "#3c4043",
    accent: "#818cf8",
    accent_text: "#1a1a1a",
    busy: "#5f6368",
    danger: "#f87171",
    link: "#93c5fd",
    error_bg: "#3f1d1d",
    success: "#4ade80",
    success_bg: "#14301f",
    track: "#3c4043",
    overlay: "rgba(0, 0, 0, 0.7)",
};
