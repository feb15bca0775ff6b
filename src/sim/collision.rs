//! Collision tests between the hero and the block
//!
//! Boxes are axis-aligned and integer, so every test is a handful of edge
//! comparisons. Comparisons are strict: touching edges do not collide.

use super::state::Rect;

/// Hero moving right has pushed its right edge into the block's span while
/// low enough to hit the block's side.
pub fn blocks_rightward(hero: &Rect, block: &Rect) -> bool {
    hero.right() > block.left() && hero.right() < block.right() && hero.bottom() > block.top()
}

/// Hero moving left has pushed its left edge into the block's span while
/// low enough to hit the block's side.
pub fn blocks_leftward(hero: &Rect, block: &Rect) -> bool {
    hero.left() < block.right() && hero.left() > block.left() && hero.bottom() > block.top()
}

/// Hero's feet are below the block's top while horizontally over it.
pub fn lands_on(hero: &Rect, block: &Rect) -> bool {
    hero.bottom() > block.top() && hero.right() > block.left() && hero.left() < block.right()
}

/// Hero is entirely to the left or entirely to the right of the block.
pub fn clear_of_span(hero: &Rect, block: &Rect) -> bool {
    hero.right() < block.left() || hero.left() > block.right()
}
