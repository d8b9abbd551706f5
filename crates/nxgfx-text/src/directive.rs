//! Inline color directives.
//!
//! A directive is a sentinel codepoint mapped to a color. Meeting it during
//! layout switches the active color to that color, or back to the base color
//! when that color is already active. Directives toggle and do not nest: with
//! two different directives open, closing the first switches to the base
//! color rather than to the second.

use nxgfx_core::alloc::HashMap;
use nxgfx_render::Color;

/// Codepoints that toggle the draw color.
#[derive(Debug, Clone, Default)]
pub struct ColorDirectiveSet {
    directives: HashMap<char, Color>,
}

impl ColorDirectiveSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `ch` as a directive for `color`, replacing any earlier color.
    pub fn add(&mut self, ch: char, color: Color) -> Option<Color> {
        self.directives.insert(ch, color)
    }

    pub fn extend(&mut self, directives: impl IntoIterator<Item = (char, Color)>) {
        self.directives.extend(directives);
    }

    pub fn get(&self, ch: char) -> Option<Color> {
        self.directives.get(&ch).copied()
    }

    pub fn contains(&self, ch: char) -> bool {
        self.directives.contains_key(&ch)
    }

    pub fn len(&self) -> usize {
        self.directives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.directives.is_empty()
    }
}

impl FromIterator<(char, Color)> for ColorDirectiveSet {
    fn from_iter<I: IntoIterator<Item = (char, Color)>>(iter: I) -> Self {
        Self {
            directives: iter.into_iter().collect(),
        }
    }
}

/// Active color during one layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorState {
    base: Color,
    active: Color,
}

impl ColorState {
    pub fn new(base: Color) -> Self {
        Self { base, active: base }
    }

    /// Apply `ch` if it is a directive in `set`.
    ///
    /// Returns `true` when `ch` was consumed as a directive and must not be
    /// drawn.
    pub fn apply(&mut self, ch: char, set: &ColorDirectiveSet) -> bool {
        let Some(color) = set.get(ch) else {
            return false;
        };
        self.active = if self.active == color { self.base } else { color };
        true
    }

    pub fn active(&self) -> Color {
        self.active
    }

    pub fn base(&self) -> Color {
        self.base
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn red_and_blue() -> ColorDirectiveSet {
        [('*', Color::RED), ('#', Color::BLUE)].into_iter().collect()
    }

    #[test]
    fn test_toggle_on_and_off() {
        let set = red_and_blue();
        let mut state = ColorState::new(Color::WHITE);

        assert!(state.apply('*', &set));
        assert_eq!(state.active(), Color::RED);
        assert!(state.apply('*', &set));
        assert_eq!(state.active(), Color::WHITE);
    }

    #[test]
    fn test_even_applications_restore_base() {
        let set = red_and_blue();
        let mut state = ColorState::new(Color::GREEN);
        for _ in 0..6 {
            state.apply('*', &set);
        }
        assert_eq!(state.active(), state.base());
    }

    #[test]
    fn test_plain_character_is_not_consumed() {
        let set = red_and_blue();
        let mut state = ColorState::new(Color::WHITE);
        assert!(!state.apply('a', &set));
        assert_eq!(state.active(), Color::WHITE);
    }

    #[test]
    fn test_directives_do_not_nest() {
        let set = red_and_blue();
        let mut state = ColorState::new(Color::WHITE);
        state.apply('*', &set);
        state.apply('#', &set);
        assert_eq!(state.active(), Color::BLUE);

        // Blue is active, so the red directive turns red on again.
        state.apply('*', &set);
        assert_eq!(state.active(), Color::RED);
    }

    #[test]
    fn test_directive_matching_base_is_a_no_op_toggle() {
        let set: ColorDirectiveSet = [('!', Color::WHITE)].into_iter().collect();
        let mut state = ColorState::new(Color::WHITE);
        assert!(state.apply('!', &set));
        assert_eq!(state.active(), Color::WHITE);
    }

    #[test]
    fn test_readding_replaces_color() {
        let mut set = red_and_blue();
        assert_eq!(set.add('*', Color::YELLOW), Some(Color::RED));
        assert_eq!(set.get('*'), Some(Color::YELLOW));
        assert_eq!(set.len(), 2);
    }
}
