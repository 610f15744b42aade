use crate::game::board::Spot;
use crate::game::card::Card;
pub(crate) use crate::game::deck::Deck;

const UTILITIES: [Spot; 2] = [12, 28];
const RAILROADS: [Spot; 4] = [5, 15, 25, 35];

static COMMUNITY_CHEST_CARDS: [Card; 3] = [
    Card::AdvanceTo(0),
    Card::AdvanceTo(10),
    Card::ReleaseToken,
];

static CHANCE_CARDS: [Card; 10] = [
    Card::AdvanceTo(0),
    Card::AdvanceTo(5),
    Card::AdvanceTo(10),
    Card::AdvanceTo(11),
    Card::AdvanceTo(24),
    Card::AdvanceTo(39),
    Card::AdvanceToNearest(&UTILITIES),
    Card::AdvanceToNearest(&RAILROADS),
    Card::ReleaseToken,
    Card::AdvanceBy(-3),
];

/// Drawn on spots 2, 17 and 33. 3 movement cards out of 17.
pub static COMMUNITY_CHEST: Deck = Deck::new(&COMMUNITY_CHEST_CARDS, 14);

/// Drawn on spots 7, 22 and 36. 10 movement cards out of 16.
pub static CHANCE: Deck = Deck::new(&CHANCE_CARDS, 6);
