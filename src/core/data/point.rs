/// A grid cell addressed by column (`x`) and row (`y`), both zero-based.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}
