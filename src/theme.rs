//! Shared presentation configuration.
//!
//! The font weights and viewport breakpoints the storefront renders with,
//! carried as an explicit [`Theme`] value provided through Leptos context
//! rather than ambient constants. The stylesheet consumes the same numbers
//! via the custom properties from [`Theme::css_vars`].

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Font weights used across the storefront.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FontWeights {
    pub normal: u16,
    pub medium: u16,
    pub bold: u16,
}

/// Viewport-width thresholds, in CSS pixels, at which the layout changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Breakpoints {
    pub phone: u16,
    pub tablet: u16,
}

impl Breakpoints {
    /// `max-width` media query matching phones, in rem so user font-size
    /// scaling moves the breakpoint too.
    pub fn phone_and_smaller(self) -> String {
        max_width_query(self.phone)
    }

    /// `max-width` media query matching tablets and phones. Below this the
    /// desktop nav is hidden and the mobile actions are shown.
    pub fn tablet_and_smaller(self) -> String {
        max_width_query(self.tablet)
    }
}

fn max_width_query(px: u16) -> String {
    // 16px per rem at the default root font size.
    format!("(max-width: {}rem)", f64::from(px) / 16.0)
}

/// Bundle of presentation configuration handed to rendering components.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub weights: FontWeights,
    pub breakpoints: Breakpoints,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            weights: FontWeights { normal: 500, medium: 600, bold: 800 },
            breakpoints: Breakpoints { phone: 600, tablet: 950 },
        }
    }
}

impl Theme {
    /// Inline `style` value exposing the theme as CSS custom properties on
    /// the app root, e.g. `--weight-medium: 600;`.
    pub fn css_vars(self) -> String {
        format!(
            "--weight-normal: {}; --weight-medium: {}; --weight-bold: {};",
            self.weights.normal, self.weights.medium, self.weights.bold
        )
    }
}
