use owo_colors::{OwoColorize, Style};
use rescaler_decimal::{to_f64, Decimal};

// Stylesheet used to colorize prints.
#[derive(Debug, Default)]
pub(crate) struct Styles {
    colorized: bool,
    pub heading_style: Style,
    pub section_style: Style,
    pub good_style: Style,
    pub fair_style: Style,
    pub poor_style: Style,
}

impl Styles {
    /// Colorized if stdout supports colour, plain otherwise
    pub(crate) fn for_stdout() -> Self {
        let mut styles = Self::default();
        if supports_color::on(supports_color::Stream::Stdout).is_some() {
            styles.colorize();
        }
        styles
    }

    pub(crate) fn colorize(&mut self) {
        self.colorized = true;
        self.heading_style = Style::new().bright_blue().bold();
        self.section_style = Style::new().bright_blue();
        self.good_style = Style::new().bright_green();
        self.fair_style = Style::new().yellow();
        self.poor_style = Style::new().bright_red();
    }

    /// Apply `style` to already padded text
    pub(crate) fn paint(&self, text: &str, style: Style) -> String {
        if self.colorized {
            text.style(style).to_string()
        } else {
            text.to_string()
        }
    }

    /// Green below one part per million, yellow below one percent, red otherwise
    pub(crate) fn relative_error_style(&self, relative_error: &Decimal) -> Style {
        let relative_error = to_f64(relative_error);
        if relative_error < 1e-6 {
            self.good_style
        } else if relative_error < 1e-2 {
            self.fair_style
        } else {
            self.poor_style
        }
    }
}
