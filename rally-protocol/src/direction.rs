//! Six-way compass used for the ball's heading
//!
//! The board is oriented with the paddle on the west edge and the peer board
//! beyond the east edge. "North" is toward the top row.

/// Ball heading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    NorthEast,
    East,
    SouthEast,
    SouthWest,
    West,
    NorthWest,
}

/// East/west component of a heading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Heading {
    /// Travelling away from the paddle, toward the peer board
    Eastbound,
    /// Travelling toward the paddle
    Westbound,
}

/// North/south component of a heading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Vertical {
    North,
    South,
    Level,
}

impl Direction {
    /// All six headings
    pub const ALL: [Direction; 6] = [
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// East/west category
    pub const fn heading(self) -> Heading {
        match self {
            Direction::NorthEast | Direction::East | Direction::SouthEast => Heading::Eastbound,
            Direction::SouthWest | Direction::West | Direction::NorthWest => Heading::Westbound,
        }
    }

    /// North/south category
    pub const fn vertical(self) -> Vertical {
        match self {
            Direction::NorthEast | Direction::NorthWest => Vertical::North,
            Direction::SouthEast | Direction::SouthWest => Vertical::South,
            Direction::East | Direction::West => Vertical::Level,
        }
    }

    /// Build a heading from its components
    pub const fn from_parts(heading: Heading, vertical: Vertical) -> Self {
        match (heading, vertical) {
            (Heading::Eastbound, Vertical::North) => Direction::NorthEast,
            (Heading::Eastbound, Vertical::Level) => Direction::East,
            (Heading::Eastbound, Vertical::South) => Direction::SouthEast,
            (Heading::Westbound, Vertical::North) => Direction::NorthWest,
            (Heading::Westbound, Vertical::Level) => Direction::West,
            (Heading::Westbound, Vertical::South) => Direction::SouthWest,
        }
    }

    /// Column change for one step (east is toward column 0)
    pub const fn column_delta(self) -> i8 {
        match self.heading() {
            Heading::Eastbound => -1,
            Heading::Westbound => 1,
        }
    }

    /// Row change for one step (north is toward the top row)
    pub const fn row_delta(self) -> i8 {
        match self.vertical() {
            Vertical::North => 1,
            Vertical::South => -1,
            Vertical::Level => 0,
        }
    }

    /// Same east/west component, vertical component reversed
    ///
    /// Level headings are returned unchanged.
    pub const fn reflect_vertical(self) -> Self {
        let vertical = match self.vertical() {
            Vertical::North => Vertical::South,
            Vertical::South => Vertical::North,
            Vertical::Level => Vertical::Level,
        };
        Self::from_parts(self.heading(), vertical)
    }

    /// Heading as seen from the facing board
    ///
    /// The boards face each other, so both the east/west and the north/south
    /// axes are flipped: E ↔ W, NE ↔ SW, SE ↔ NW.
    pub const fn mirrored(self) -> Self {
        match self {
            Direction::NorthEast => Direction::SouthWest,
            Direction::East => Direction::West,
            Direction::SouthEast => Direction::NorthWest,
            Direction::SouthWest => Direction::NorthEast,
            Direction::West => Direction::East,
            Direction::NorthWest => Direction::SouthEast,
        }
    }

    pub const fn is_eastbound(self) -> bool {
        matches!(self.heading(), Heading::Eastbound)
    }

    pub const fn is_westbound(self) -> bool {
        matches!(self.heading(), Heading::Westbound)
    }

    /// True for the four diagonal headings
    pub const fn is_diagonal(self) -> bool {
        !matches!(self.vertical(), Vertical::Level)
    }
}
