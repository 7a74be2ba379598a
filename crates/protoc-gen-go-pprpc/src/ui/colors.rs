use std::io::IsTerminal;

use clap::{ValueEnum, builder::styling::Ansi256Color};
use comfy_table::Color as ComfyColor;
use crossterm::style::Color;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorMode {
  Always,
  Auto,
  Never,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ThemeMode {
  Dark,
  Light,
  Auto,
}

pub enum Theme {
  Dark,
  Light,
}

pub struct Colors {
  enabled: bool,
  theme: Theme,
}

pub trait IntoComfyColor {
  fn into(self) -> ComfyColor;
}

/// Every themed color is RGB, or `Reset` when colors are off.
impl IntoComfyColor for Color {
  fn into(self) -> ComfyColor {
    match self {
      Color::Rgb { r, g, b } => ComfyColor::Rgb { r, g, b },
      Color::AnsiValue(value) => ComfyColor::AnsiValue(value),
      _ => ComfyColor::Reset,
    }
  }
}

impl Colors {
  pub const fn new(enabled: bool, theme: Theme) -> Self {
    Self { enabled, theme }
  }

  const fn pick(&self, dark: Color, light: Color) -> Color {
    if !self.enabled {
      return Color::Reset;
    }

    match self.theme {
      Theme::Dark => dark,
      Theme::Light => light,
    }
  }

  pub const fn timestamp(&self) -> Color {
    self.pick(Color::Rgb { r: 118, g: 166, b: 166 }, Color::Rgb { r: 92, g: 62, b: 38 })
  }

  pub const fn primary(&self) -> Color {
    self.pick(Color::Rgb { r: 191, g: 126, b: 4 }, Color::Rgb { r: 70, g: 42, b: 25 })
  }

  pub const fn accent(&self) -> Color {
    self.pick(Color::Rgb { r: 166, g: 84, b: 55 }, Color::Rgb { r: 211, g: 99, b: 70 })
  }

  pub const fn info(&self) -> Color {
    self.pick(Color::Rgb { r: 118, g: 166, b: 166 }, Color::Rgb { r: 40, g: 111, b: 170 })
  }

  pub const fn success(&self) -> Color {
    self.pick(Color::Rgb { r: 118, g: 166, b: 166 }, Color::Rgb { r: 34, g: 142, b: 90 })
  }

  pub const fn label(&self) -> Color {
    self.pick(Color::Rgb { r: 217, g: 164, b: 4 }, Color::Rgb { r: 176, g: 103, b: 66 })
  }

  pub const fn value(&self) -> Color {
    self.pick(Color::Rgb { r: 242, g: 211, b: 56 }, Color::Rgb { r: 199, g: 146, b: 76 })
  }

  const fn to_clap(color: Color) -> Option<clap::builder::styling::Color> {
    use clap::builder::styling::{Color as ClapColor, RgbColor};

    match color {
      Color::Rgb { r, g, b } => Some(ClapColor::Rgb(RgbColor(r, g, b))),
      Color::AnsiValue(value) => Some(ClapColor::Ansi256(Ansi256Color(value))),
      _ => None,
    }
  }

  pub const fn clap_styles() -> clap::builder::Styles {
    use clap::builder::styling::{Style, Styles};

    let colors = Self::new(true, Theme::Dark);

    Styles::styled()
      .header(Style::new().bold().underline().fg_color(Self::to_clap(colors.label())))
      .usage(Style::new().bold().fg_color(Self::to_clap(colors.label())))
      .literal(Style::new().fg_color(Self::to_clap(colors.success())))
      .placeholder(Style::new().fg_color(Self::to_clap(colors.info())))
      .error(Style::new().bold().fg_color(Self::to_clap(colors.accent())))
      .valid(Style::new().fg_color(Self::to_clap(colors.success())))
      .invalid(Style::new().bold().fg_color(Self::to_clap(colors.accent())))
  }
}

/// Log output goes to stderr, so that is the stream checked for a terminal.
pub fn colors_enabled(mode: ColorMode) -> bool {
  match mode {
    ColorMode::Always => true,
    ColorMode::Never => false,
    ColorMode::Auto => std::io::stderr().is_terminal(),
  }
}

pub fn detect_theme(mode: ThemeMode) -> Theme {
  match mode {
    ThemeMode::Dark => Theme::Dark,
    ThemeMode::Light => Theme::Light,
    ThemeMode::Auto => detect_terminal_theme(),
  }
}

fn detect_terminal_theme() -> Theme {
  if let Ok(colorfgbg) = std::env::var("COLORFGBG")
    && let Some(bg) = colorfgbg.split(';').next_back()
    && let Ok(bg_num) = bg.parse::<u8>()
  {
    return if bg_num >= 8 { Theme::Light } else { Theme::Dark };
  }

  Theme::Dark
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_disabled_colors_reset() {
    let colors = Colors::new(false, Theme::Light);
    assert_eq!(colors.primary(), Color::Reset);
    assert_eq!(IntoComfyColor::into(colors.label()), ComfyColor::Reset);
    assert!(Colors::to_clap(colors.accent()).is_none());
  }

  #[test]
  fn test_theme_selects_palette() {
    let dark = Colors::new(true, Theme::Dark);
    let light = Colors::new(true, Theme::Light);
    assert_ne!(dark.info(), light.info());
    assert_eq!(
      IntoComfyColor::into(dark.value()),
      ComfyColor::Rgb { r: 242, g: 211, b: 56 }
    );
  }
}
