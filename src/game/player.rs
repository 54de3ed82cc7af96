use std::fmt;

/// Seat of a player: one moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    /// Get the other player
    pub fn other(self) -> PlayerId {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// Sequence number, 1 or 2
    pub fn number(self) -> u8 {
        match self {
            PlayerId::One => 1,
            PlayerId::Two => 2,
        }
    }

    fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// A seat plus whatever the front end attaches to it (a colour, a name).
/// The engine never looks at the attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player<A> {
    id: PlayerId,
    attribute: A,
}

impl<A> Player<A> {
    pub fn new(id: PlayerId, attribute: A) -> Self {
        Player { id, attribute }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn number(&self) -> u8 {
        self.id.number()
    }

    pub fn attribute(&self) -> &A {
        &self.attribute
    }
}

/// Both players, indexed by seat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Seats<A>([Player<A>; 2]);

impl<A> Seats<A> {
    pub(crate) fn new(first: A, second: A) -> Self {
        Seats([
            Player::new(PlayerId::One, first),
            Player::new(PlayerId::Two, second),
        ])
    }

    pub(crate) fn get(&self, id: PlayerId) -> &Player<A> {
        &self.0[id.index()]
    }

    pub(crate) fn as_slice(&self) -> &[Player<A>; 2] {
        &self.0
    }
}
