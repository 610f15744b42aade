/// Index of a spot on the circular track, always in `0..BOARD_SIZE`.
pub type Spot = usize;

pub const BOARD_SIZE: usize = 40;

pub const GO: Spot = 0;
pub const JAIL: Spot = 10;
pub const FREE_PARKING: Spot = 20;
pub const GO_TO_JAIL: Spot = 30;

pub const COMMUNITY_CHEST_SPOTS: [Spot; 3] = [2, 17, 33];
pub const CHANCE_SPOTS: [Spot; 3] = [7, 22, 36];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpotKind {
    Go,
    Jail,
    FreeParking,
    GoToJail,
    CommunityChest,
    Chance,
    Ordinary,
}

impl SpotKind {
    pub fn of(spot: Spot) -> SpotKind {
        match spot {
            GO => SpotKind::Go,
            JAIL => SpotKind::Jail,
            FREE_PARKING => SpotKind::FreeParking,
            GO_TO_JAIL => SpotKind::GoToJail,
            s if COMMUNITY_CHEST_SPOTS.contains(&s) => SpotKind::CommunityChest,
            s if CHANCE_SPOTS.contains(&s) => SpotKind::Chance,
            _ => SpotKind::Ordinary,
        }
    }
}

pub fn is_on_board(spot: Spot) -> bool {
    spot < BOARD_SIZE
}

/// Moves `offset` spots from `from`, wrapping around in either direction.
pub fn offset_spot(from: Spot, offset: i32) -> Spot {
    (from as i64 + offset as i64).rem_euclid(BOARD_SIZE as i64) as Spot
}
