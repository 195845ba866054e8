/// Clickable island regions and the fixed board catalog
///
/// Every island on the board is a `Region`: an axis-aligned rectangle in
/// logical (800x600) coordinates tagged with an `OutcomeKind`. The catalog is
/// built once at startup and never changes during a run.
///
/// # Architecture
///
/// - `OutcomeKind`: what clicking a region does (Neutral, Victory, Defeat)
/// - `Region`: immutable rectangle + kind + label
/// - `RegionCatalog`: ordered, non-empty list with first-match hit testing
use sdl2::rect::{Point, Rect};

/// Logical board size every island coordinate is expressed in
pub const BOARD_WIDTH: u32 = 800;
pub const BOARD_HEIGHT: u32 = 600;

/// Classification of a region's effect when clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutcomeKind {
    /// Nothing happens beyond a console message
    Neutral,
    /// Ends the game in victory
    Victory,
    /// Ends the game in defeat
    Defeat,
}

/// A fixed rectangular clickable area on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    bounds: Rect,
    kind: OutcomeKind,
    label: &'static str,
}

impl Region {
    pub fn new(x: i32, y: i32, width: u32, height: u32, kind: OutcomeKind, label: &'static str) -> Self {
        Region {
            bounds: Rect::new(x, y, width, height),
            kind,
            label,
        }
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn kind(&self) -> OutcomeKind {
        self.kind
    }

    /// Human-readable position name, only used in log output
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Half-open containment: `left <= x < right` and `top <= y < bottom`.
    ///
    /// SDL2's `Rect::contains_point` already uses exclusive right/bottom edges,
    /// so two regions that share an edge never both claim a point on it.
    pub fn contains(&self, point: Point) -> bool {
        self.bounds.contains_point(point)
    }
}

/// Ordered sequence of regions, fixed at construction.
///
/// Regions may overlap; catalog order decides precedence.
#[derive(Debug, Clone)]
pub struct RegionCatalog {
    regions: Vec<Region>,
}

impl RegionCatalog {
    /// Creates a catalog from the given regions.
    ///
    /// Returns `None` for an empty list: a board without islands cannot be played.
    pub fn new(regions: Vec<Region>) -> Option<Self> {
        if regions.is_empty() {
            None
        } else {
            Some(RegionCatalog { regions })
        }
    }

    /// The nine-island 3x3 board the game ships with.
    pub fn islands() -> Self {
        use OutcomeKind::*;

        RegionCatalog::new(vec![
            Region::new(30, 25, 200, 150, Victory, "top-left"),
            Region::new(295, 25, 213, 150, Defeat, "top-center"),
            Region::new(570, 25, 205, 150, Neutral, "top-right"),
            Region::new(30, 225, 200, 154, Neutral, "mid-left"),
            Region::new(295, 225, 213, 154, Victory, "mid-center"),
            Region::new(570, 225, 205, 154, Defeat, "mid-right"),
            Region::new(30, 430, 200, 150, Defeat, "bottom-left"),
            Region::new(295, 430, 213, 150, Neutral, "bottom-center"),
            Region::new(570, 430, 205, 150, Victory, "bottom-right"),
        ])
        .expect("island board is a non-empty literal")
    }

    /// Returns the first region (in catalog order) containing `point`.
    pub fn find_hit(&self, point: Point) -> Option<&Region> {
        self.regions.iter().find(|region| region.contains(point))
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }
}
