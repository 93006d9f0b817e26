//! Configuration system with embedded defaults and XDG-compliant paths.
//!
//! Boot sequence:
//! 1. Parse the embedded `default_config.toml` (compile-time guarantee it exists).
//! 2. Resolve `~/.config/companyscope/config.toml` via the `directories` crate.
//! 3. If the user file doesn't exist, create the directory tree and write the default.
//! 4. Parse the user file (falling back to embedded defaults on any error).
//! 5. Store the resolved `Config` in a `OnceLock` for global access.
//!
//! Every other module calls `config::get()` to obtain a `&'static Config`.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use color_eyre::eyre::{eyre, WrapErr};
use color_eyre::Result;
use crossterm::event::KeyCode;
use ratatui::style::Color;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::{info, warn};

use crate::listing::{SortField, SortOrder};

/// Embedded default configuration, baked into the binary at compile time.
const DEFAULT_CONFIG_STR: &str = include_str!("../default_config.toml");

/// Listing endpoint used when the config does not name one.
pub const DEFAULT_SOURCE_URL: &str = "https://dujour.squiz.cloud/developer-challenge/data";

static CONFIG: OnceLock<Config> = OnceLock::new();

// ─── Public API ─────────────────────────────────────────────────────────────

/// Initialise the configuration system. Call once at startup, after tracing
/// and before anything reads `get()`.
pub fn init() -> Result<()> {
    let config = load()?;
    CONFIG
        .set(config)
        .map_err(|_| eyre!("Config already initialised"))?;
    Ok(())
}

/// Return the loaded configuration. Falls back to the built-in defaults if
/// `init()` never ran (unit tests, for instance).
pub fn get() -> &'static Config {
    CONFIG.get_or_init(Config::default)
}

/// Directory the application keeps its files under, if `$HOME` resolves.
pub fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("", "", "companyscope")
}

// ─── Loading logic ──────────────────────────────────────────────────────────

fn load() -> Result<Config> {
    let defaults = parse_defaults()?;

    let user_path = config_path();
    info!("Config path: {}", user_path.display());

    ensure_config_file(&user_path)?;

    let raw = match fs::read_to_string(&user_path) {
        Ok(contents) => match toml::from_str::<RawConfig>(&contents) {
            Ok(parsed) => {
                info!("Loaded user config from {}", user_path.display());
                parsed
            }
            Err(e) => {
                warn!(
                    "Parse error in {}: {e}, falling back to defaults",
                    user_path.display()
                );
                defaults
            }
        },
        Err(e) => {
            warn!(
                "Cannot read {}: {e}, falling back to defaults",
                user_path.display()
            );
            defaults
        }
    };

    Ok(Config::from(raw))
}

fn parse_defaults() -> Result<RawConfig> {
    toml::from_str(DEFAULT_CONFIG_STR).wrap_err("BUG: failed to parse embedded default_config.toml")
}

fn config_path() -> PathBuf {
    project_dirs()
        .map(|dirs| dirs.config_dir().join("config.toml"))
        .unwrap_or_else(|| PathBuf::from(".config/companyscope/config.toml"))
}

/// Create the config directory tree and write the default file if absent.
fn ensure_config_file(path: &Path) -> Result<()> {
    if path.exists() {
        return Ok(());
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .wrap_err_with(|| format!("Failed to create config dir: {}", parent.display()))?;
    }
    fs::write(path, DEFAULT_CONFIG_STR)
        .wrap_err_with(|| format!("Failed to write default config to {}", path.display()))?;
    info!("Created default config at {}", path.display());
    Ok(())
}

// ─── Hex colour helper ─────────────────────────────────────────────────────

/// Parse a `#RRGGBB` hex string into an RGB `Color`.
fn parse_hex_color(s: &str) -> Option<Color> {
    let hex = s.strip_prefix('#').unwrap_or(s);
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(hex.get(0..2)?, 16).ok()?;
    let g = u8::from_str_radix(hex.get(2..4)?, 16).ok()?;
    let b = u8::from_str_radix(hex.get(4..6)?, 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

/// Newtype that serialises as `"#RRGGBB"` and deserialises from the same.
#[derive(Debug, Clone, Copy)]
pub struct HexColor(pub Color);

impl Default for HexColor {
    fn default() -> Self {
        HexColor(Color::Reset)
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, s: S) -> std::result::Result<S::Ok, S::Error> {
        match self.0 {
            Color::Rgb(r, g, b) => s.serialize_str(&format!("#{r:02X}{g:02X}{b:02X}")),
            _ => s.serialize_str("#FFFFFF"),
        }
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D: Deserializer<'de>>(d: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(d)?;
        Ok(HexColor(parse_hex_color(&s).unwrap_or(Color::Reset)))
    }
}

// ─── Raw TOML structures (serde targets) ────────────────────────────────────
//
// Each struct carries `#[serde(default)]` so that missing keys or entire
// sections fill in from the built-in defaults.

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
struct RawConfig {
    general: RawGeneral,
    source: RawSource,
    display: RawDisplay,
    theme: RawTheme,
    keybindings: RawKeybindings,
}

// ── General ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
struct RawGeneral {
    tick_rate_ms: u64,
    mouse: bool,
}

impl Default for RawGeneral {
    fn default() -> Self {
        Self {
            tick_rate_ms: 80,
            mouse: true,
        }
    }
}

// ── Source ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
struct RawSource {
    url: String,
}

impl Default for RawSource {
    fn default() -> Self {
        Self {
            url: DEFAULT_SOURCE_URL.into(),
        }
    }
}

// ── Display ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
struct RawDisplay {
    default_sort_field: String,
    default_sort_order: String,
    thousands_separator: String,
    name_column_percent: u16,
}

impl Default for RawDisplay {
    fn default() -> Self {
        Self {
            default_sort_field: "name".into(),
            default_sort_order: "asc".into(),
            thousands_separator: ",".into(),
            name_column_percent: 40,
        }
    }
}

// ── Theme ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
struct RawTheme {
    palette: RawPalette,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
struct RawPalette {
    accent_primary: HexColor,
    accent_secondary: HexColor,
    accent_error: HexColor,
    text_primary: HexColor,
    text_dim: HexColor,
    success: HexColor,
    border_inactive: HexColor,
}

impl Default for RawPalette {
    fn default() -> Self {
        Self {
            accent_primary: HexColor(Color::Rgb(120, 220, 255)),
            accent_secondary: HexColor(Color::Rgb(180, 160, 255)),
            accent_error: HexColor(Color::Rgb(255, 140, 160)),
            text_primary: HexColor(Color::Rgb(225, 223, 240)),
            text_dim: HexColor(Color::Rgb(120, 124, 150)),
            success: HexColor(Color::Rgb(130, 235, 175)),
            border_inactive: HexColor(Color::Rgb(140, 143, 165)),
        }
    }
}

// ── Keybindings ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
struct RawKeybindings {
    quit: String,
    nav_down: String,
    nav_up: String,
    jump_top: String,
    jump_bottom: String,
    open: String,
    next_option: String,
    prev_option: String,
    cycle_country: String,
    cycle_industry: String,
    toggle_sort_field: String,
    toggle_sort_order: String,
    clear_filters: String,
    help: String,
}

impl Default for RawKeybindings {
    fn default() -> Self {
        Self {
            quit: "q".into(),
            nav_down: "j".into(),
            nav_up: "k".into(),
            jump_top: "g".into(),
            jump_bottom: "G".into(),
            open: "Enter".into(),
            next_option: "l".into(),
            prev_option: "h".into(),
            cycle_country: "c".into(),
            cycle_industry: "i".into(),
            toggle_sort_field: "s".into(),
            toggle_sort_order: "o".into(),
            clear_filters: "x".into(),
            help: "?".into(),
        }
    }
}

// ─── Resolved runtime config ────────────────────────────────────────────────
//
// These are the structs the rest of the app reads. All values are validated,
// clamped, and ready to use.

#[derive(Debug, Clone)]
pub struct Config {
    pub general: GeneralConfig,
    pub source: SourceConfig,
    pub display: DisplayConfig,
    pub theme: ThemeConfig,
    pub keys: KeybindingsConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config::from(RawConfig::default())
    }
}

#[derive(Debug, Clone)]
pub struct GeneralConfig {
    pub tick_rate_ms: u64,
    pub mouse: bool,
}

#[derive(Debug, Clone)]
pub struct SourceConfig {
    pub url: String,
}

#[derive(Debug, Clone)]
pub struct DisplayConfig {
    pub default_sort_field: SortField,
    pub default_sort_order: SortOrder,
    pub thousands_separator: String,
    pub name_column_percent: u16,
}

#[derive(Debug, Clone)]
pub struct ThemeConfig {
    pub palette: Palette,
}

/// Resolved colour palette.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub accent_primary: Color,
    pub accent_secondary: Color,
    pub accent_error: Color,
    pub text_primary: Color,
    pub text_dim: Color,
    pub success: Color,
    pub border_inactive: Color,
}

/// Pre-parsed keybindings, each a `KeyCode` ready for matching.
#[derive(Debug, Clone)]
pub struct KeybindingsConfig {
    pub quit: KeyCode,
    pub nav_down: KeyCode,
    pub nav_up: KeyCode,
    pub jump_top: KeyCode,
    pub jump_bottom: KeyCode,
    pub open: KeyCode,
    pub next_option: KeyCode,
    pub prev_option: KeyCode,
    pub cycle_country: KeyCode,
    pub cycle_industry: KeyCode,
    pub toggle_sort_field: KeyCode,
    pub toggle_sort_order: KeyCode,
    pub clear_filters: KeyCode,
    pub help: KeyCode,
}

// ─── Raw → Resolved conversion ─────────────────────────────────────────────

impl From<RawConfig> for Config {
    fn from(raw: RawConfig) -> Self {
        let url = if raw.source.url.trim().is_empty() {
            warn!("Empty source.url, using {DEFAULT_SOURCE_URL}");
            DEFAULT_SOURCE_URL.to_string()
        } else {
            raw.source.url
        };

        Self {
            general: GeneralConfig {
                tick_rate_ms: raw.general.tick_rate_ms.clamp(16, 500),
                mouse: raw.general.mouse,
            },
            source: SourceConfig { url },
            display: DisplayConfig {
                default_sort_field: SortField::parse(&raw.display.default_sort_field),
                default_sort_order: SortOrder::parse(&raw.display.default_sort_order),
                thousands_separator: raw.display.thousands_separator,
                name_column_percent: raw.display.name_column_percent.clamp(20, 70),
            },
            theme: ThemeConfig {
                palette: Palette {
                    accent_primary: raw.theme.palette.accent_primary.0,
                    accent_secondary: raw.theme.palette.accent_secondary.0,
                    accent_error: raw.theme.palette.accent_error.0,
                    text_primary: raw.theme.palette.text_primary.0,
                    text_dim: raw.theme.palette.text_dim.0,
                    success: raw.theme.palette.success.0,
                    border_inactive: raw.theme.palette.border_inactive.0,
                },
            },
            keys: KeybindingsConfig {
                quit: parse_key(&raw.keybindings.quit),
                nav_down: parse_key(&raw.keybindings.nav_down),
                nav_up: parse_key(&raw.keybindings.nav_up),
                jump_top: parse_key(&raw.keybindings.jump_top),
                jump_bottom: parse_key(&raw.keybindings.jump_bottom),
                open: parse_key(&raw.keybindings.open),
                next_option: parse_key(&raw.keybindings.next_option),
                prev_option: parse_key(&raw.keybindings.prev_option),
                cycle_country: parse_key(&raw.keybindings.cycle_country),
                cycle_industry: parse_key(&raw.keybindings.cycle_industry),
                toggle_sort_field: parse_key(&raw.keybindings.toggle_sort_field),
                toggle_sort_order: parse_key(&raw.keybindings.toggle_sort_order),
                clear_filters: parse_key(&raw.keybindings.clear_filters),
                help: parse_key(&raw.keybindings.help),
            },
        }
    }
}

/// Parse a human-readable key name into a crossterm `KeyCode`.
fn parse_key(s: &str) -> KeyCode {
    match s {
        "Enter" => KeyCode::Enter,
        "Esc" => KeyCode::Esc,
        "Tab" => KeyCode::Tab,
        "Backspace" => KeyCode::Backspace,
        "Space" => KeyCode::Char(' '),
        "Up" => KeyCode::Up,
        "Down" => KeyCode::Down,
        "Left" => KeyCode::Left,
        "Right" => KeyCode::Right,
        "Home" => KeyCode::Home,
        "End" => KeyCode::End,
        "PageUp" => KeyCode::PageUp,
        "PageDown" => KeyCode::PageDown,
        "Delete" => KeyCode::Delete,
        "Insert" => KeyCode::Insert,
        other => {
            let mut chars = other.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c),
                _ => {
                    warn!("Unknown keybinding \"{other}\" in config, ignoring");
                    KeyCode::Null
                }
            }
        }
    }
}
