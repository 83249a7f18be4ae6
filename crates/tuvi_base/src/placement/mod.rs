//! Star placement engine.
//!
//! Placement runs as an ordered sequence of rule groups over a shared
//! [`PlacementContext`]. Each group appends `(star, branch)` pairs to a
//! [`StarPlacements`] builder; later groups may read positions placed by
//! earlier ones. The builder is folded into palaces by the chart module.
//!
//! Group order:
//! 1. main stars (Tử Vi and Thiên Phủ chains)
//! 2. hour-keyed
//! 3. month-keyed
//! 4. day-keyed (derived from hour/month anchors)
//! 5. year-stem-keyed
//! 6. rings (Thái Tuế, Bác Sỹ, Tràng Sinh)
//! 7. year-branch-keyed
//! 8. fixed
//! 9. Tứ Hóa

pub mod by_branch;
pub mod by_day;
pub mod by_hour;
pub mod by_month;
pub mod by_stem;
pub mod fixed;
pub mod main_stars;
pub mod rings;
pub mod tu_hoa;

use tracing::trace;

use crate::can_chi::Branch;
use crate::cuc::Cuc;
use crate::direction::RingDirection;
use crate::pillar::YearPillar;
use crate::star::{STAR_COUNT, StarId, Transformation};

/// Everything a placement rule may read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementContext {
    pub hour: Branch,
    /// Lunar month 1..=12.
    pub month: u8,
    /// Lunar day 1..=30.
    pub day: u8,
    pub year: YearPillar,
    pub menh: Branch,
    pub cuc: Cuc,
    pub direction: RingDirection,
}

impl PlacementContext {
    /// Hour branch index `h`.
    pub fn h(&self) -> i32 {
        self.hour.index() as i32
    }

    /// Zero-based month `m`.
    pub fn m(&self) -> i32 {
        self.month as i32 - 1
    }

    /// Year branch index `y`.
    pub fn y(&self) -> i32 {
        self.year.branch.index() as i32
    }
}

/// One star sitting in one branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub star: StarId,
    pub branch: Branch,
}

/// Accumulates placements and acts as the typed star registry.
#[derive(Debug, Clone)]
pub struct StarPlacements {
    placements: Vec<Placement>,
    positions: [Option<Branch>; STAR_COUNT],
    transformations: [Option<Transformation>; STAR_COUNT],
}

impl Default for StarPlacements {
    fn default() -> Self {
        Self::new()
    }
}

impl StarPlacements {
    pub fn new() -> Self {
        Self {
            placements: Vec::with_capacity(STAR_COUNT),
            positions: [None; STAR_COUNT],
            transformations: [None; STAR_COUNT],
        }
    }

    /// Record `star` at `branch`. A star is placed at most once per chart;
    /// placing it again moves it.
    pub fn place(&mut self, star: StarId, branch: Branch) {
        match self.positions[star as usize] {
            Some(_) => {
                if let Some(p) = self.placements.iter_mut().find(|p| p.star == star) {
                    p.branch = branch;
                }
            }
            None => self.placements.push(Placement { star, branch }),
        }
        self.positions[star as usize] = Some(branch);
    }

    /// Place `stars[i]` at `start` stepped `i` times along `direction`.
    pub fn place_ring(&mut self, stars: &[StarId], start: Branch, direction: RingDirection) {
        for (i, &star) in stars.iter().enumerate() {
            self.place(star, start.offset(direction.sign() * i as i32));
        }
    }

    /// Where `star` was placed, if it has been.
    pub fn position(&self, star: StarId) -> Option<Branch> {
        self.positions[star as usize]
    }

    /// Attach a Tứ Hóa transformation to an already placed star.
    pub fn tag(&mut self, star: StarId, transformation: Transformation) {
        self.transformations[star as usize] = Some(transformation);
    }

    pub fn transformation(&self, star: StarId) -> Option<Transformation> {
        self.transformations[star as usize]
    }

    /// Placements in the order they were made.
    pub fn iter(&self) -> impl Iterator<Item = &Placement> {
        self.placements.iter()
    }

    /// Stars sitting in `branch`, in placement order.
    pub fn in_branch(&self, branch: Branch) -> impl Iterator<Item = StarId> + '_ {
        self.placements
            .iter()
            .filter(move |p| p.branch == branch)
            .map(|p| p.star)
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }
}

/// Run every rule group in order.
pub fn place_all(ctx: &PlacementContext) -> StarPlacements {
    let mut placements = StarPlacements::new();

    main_stars::place(ctx, &mut placements);
    trace!(count = placements.len(), "main stars placed");
    by_hour::place(ctx, &mut placements);
    by_month::place(ctx, &mut placements);
    by_day::place(ctx, &mut placements);
    trace!(count = placements.len(), "hour, month and day groups placed");
    by_stem::place(ctx, &mut placements);
    rings::place(ctx, &mut placements);
    by_branch::place(ctx, &mut placements);
    fixed::place(ctx, &mut placements);
    trace!(count = placements.len(), "stem, ring, branch and fixed groups placed");
    tu_hoa::place(ctx, &mut placements);
    trace!(count = placements.len(), "tứ hóa placed");

    placements
}
