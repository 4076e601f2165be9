//! The variables a single evaluation can see. A [`Scope`] starts out empty apart from the input
//! colors, and gains the component variables of a color space the first time the expression
//! mentions that space by name. For a space with letters `l0 l1 l2` and `N` colors, declaring it
//! binds `li<k>` to component `i` of color `k` for every `k` in `0..N`, plus `li` as an alias for
//! `li0`, the current color.
//!
//! Scopes are built fresh for every evaluation and thrown away afterwards, so bindings never leak
//! from one evaluation to the next.

use std::collections::HashMap;

use tracing::trace;

use crate::color::RGBColor;
use crate::colorspace::ColorSpace;
use crate::number::Number;

/// The bindings of one evaluation, along with the colors they're computed from.
#[derive(Debug, Clone)]
pub struct Scope<'a> {
    colors: &'a [RGBColor],
    bindings: HashMap<String, Number>,
    declared: Vec<ColorSpace>,
}

impl<'a> Scope<'a> {
    /// An empty scope over the given colors. The first color is the current one; any others are
    /// references.
    pub fn new(colors: &'a [RGBColor]) -> Scope<'a> {
        Scope {
            colors,
            bindings: HashMap::new(),
            declared: vec![],
        }
    }

    /// Binds the component variables of `space` for every color. Declaring a space again binds
    /// the same values again, so it's harmless. If two declared spaces share a letter (like `h` in
    /// `hls` and `hsv`), the later declaration wins.
    ///
    /// # Example
    /// ```
    /// # use chameleon::scope::Scope;
    /// # use chameleon::color::RGBColor;
    /// # use chameleon::colorspace::ColorSpace;
    /// # use chameleon::number::Number;
    /// let colors = [RGBColor::new(1, 2, 3), RGBColor::new(9, 8, 7)];
    /// let mut scope = Scope::new(&colors);
    /// assert_eq!(scope.get("g"), None);
    /// scope.declare(ColorSpace::Rgb);
    /// assert_eq!(scope.get("g"), Some(Number::Int(2)));
    /// assert_eq!(scope.get("g0"), Some(Number::Int(2)));
    /// assert_eq!(scope.get("g1"), Some(Number::Int(8)));
    /// assert_eq!(scope.get("g2"), None);
    /// ```
    pub fn declare(&mut self, space: ColorSpace) {
        trace!(space = space.name(), colors = self.colors.len(), "declaring color space");
        let letters = space.letters();
        for (k, color) in self.colors.iter().enumerate() {
            let components = space.components(color);
            for (letter, value) in letters.iter().zip(components.iter()) {
                if k == 0 {
                    self.bindings.insert(letter.to_string(), *value);
                }
                self.bindings.insert(format!("{}{}", letter, k), *value);
            }
        }
        if !self.declared.contains(&space) {
            self.declared.push(space);
        }
    }

    /// The value bound to `name`, if any.
    pub fn get(&self, name: &str) -> Option<Number> {
        self.bindings.get(name).cloned()
    }

    /// The spaces declared so far, in the order they were first declared.
    pub fn declared(&self) -> &[ColorSpace] {
        &self.declared
    }

    /// The colors this scope computes its bindings from.
    pub fn colors(&self) -> &'a [RGBColor] {
        self.colors
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_declare_binds_every_color() {
        let colors = [
            RGBColor::new(255, 0, 0),
            RGBColor::new(0, 255, 0),
            RGBColor::new(0, 0, 255),
        ];
        let mut scope = Scope::new(&colors);
        scope.declare(ColorSpace::Hsv);
        assert_eq!(scope.get("h"), Some(Number::Float(0.)));
        assert_eq!(scope.get("h0"), Some(Number::Float(0.)));
        assert_eq!(scope.get("h1"), Some(Number::Float(120.)));
        assert_eq!(scope.get("h2"), Some(Number::Float(240.)));
        assert_eq!(scope.get("v2"), Some(Number::Float(1.)));
        assert_eq!(scope.get("h3"), None);
        assert_eq!(scope.declared(), &[ColorSpace::Hsv]);
    }

    #[test]
    fn test_declare_is_idempotent() {
        let colors = [RGBColor::new(10, 20, 30)];
        let mut scope = Scope::new(&colors);
        scope.declare(ColorSpace::Rgb);
        let before = scope.clone();
        scope.declare(ColorSpace::Rgb);
        assert_eq!(scope.bindings, before.bindings);
        assert_eq!(scope.declared(), &[ColorSpace::Rgb]);
    }

    #[test]
    fn test_later_declaration_wins_shared_letters() {
        let color = RGBColor::new(200, 100, 100);
        let colors = [color];
        let hls = ColorSpace::Hls.components(&color);
        let hsv = ColorSpace::Hsv.components(&color);
        assert!(hls[2] != hsv[1]);

        let mut scope = Scope::new(&colors);
        scope.declare(ColorSpace::Hls);
        assert_eq!(scope.get("s"), Some(hls[2]));
        scope.declare(ColorSpace::Hsv);
        assert_eq!(scope.get("s"), Some(hsv[1]));
        assert_eq!(scope.get("s0"), Some(hsv[1]));
        // letters only hls has are left alone
        assert_eq!(scope.get("l"), Some(hls[1]));
        assert_eq!(scope.declared(), &[ColorSpace::Hls, ColorSpace::Hsv]);
    }

    #[test]
    fn test_nothing_bound_without_colors() {
        let mut scope = Scope::new(&[]);
        scope.declare(ColorSpace::Rgb);
        assert_eq!(scope.get("r"), None);
        assert!(scope.colors().is_empty());
    }
}
