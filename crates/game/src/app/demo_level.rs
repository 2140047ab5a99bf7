use engine::{LevelGrid, LevelGridError};

pub(crate) const DEMO_LEVEL_NAME: &str = "Demo Crypt";
const DEMO_WIDTH: u16 = 8;
const DEMO_HEIGHT: u16 = 6;

/// Player start, pickups, one zombie with a hint below it, a wall skeleton
/// anchored on a stone wall and a bat in every tier.
#[rustfmt::skip]
const DEMO_FLOOR: [u16; 48] = [
    0, 0,  0,  0,  0,      0,      0, 0,
    0, 1,  5,  8,  12,     0,      52, 0,
    0, 0,  0,  0,  0,      0,      0x0400, 0,
    0, 25, 38, 43, 0,      69,     0, 0,
    0, 21, 58, 0,  0,      0x0300, 0, 0,
    0, 0,  0,  0,  0,      0,      0, 0,
];

#[rustfmt::skip]
const DEMO_WALLS: [u16; 48] = [
    1, 1, 1, 1, 1, 1,  1, 1,
    1, 0, 0, 0, 0, 0,  0, 1,
    1, 0, 0, 0, 0, 0,  0, 1,
    1, 0, 0, 0, 0, 0,  0, 1,
    1, 0, 0, 0, 0, 41, 0, 1,
    1, 1, 1, 1, 1, 1,  1, 1,
];

pub(crate) fn demo_level() -> Result<LevelGrid, LevelGridError> {
    LevelGrid::new(
        DEMO_LEVEL_NAME,
        DEMO_WIDTH,
        DEMO_HEIGHT,
        DEMO_FLOOR.to_vec(),
        DEMO_WALLS.to_vec(),
    )
}
