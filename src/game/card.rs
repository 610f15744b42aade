use crate::game::board::Spot;

/// Effect printed on a community chest or chance card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Card {
    /// Get out of jail free.
    ReleaseToken,
    AdvanceTo(Spot),
    /// Relative move, negative values go backwards.
    AdvanceBy(i32),
    /// Move to the listed spot closest to the current one. The list is sorted ascending.
    AdvanceToNearest(&'static [Spot]),
    NoOp,
}
