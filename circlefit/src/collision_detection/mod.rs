mod circle_grid;

#[doc(inline)]
pub use circle_grid::CircleGrid;
