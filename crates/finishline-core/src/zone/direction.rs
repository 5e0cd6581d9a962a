use serde::{Deserialize, Serialize};

use crate::page::Geometry;

/// Scroll direction a zone reacts to.
///
/// `North` mirrors `South` through a single sign flip: every offset is
/// subtracted instead of added and every `>=` comparison becomes `<=`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    South,
    North,
}

impl Direction {
    pub fn from_north(north: bool) -> Self {
        if north {
            Direction::North
        } else {
            Direction::South
        }
    }

    pub fn is_north(self) -> bool {
        self == Direction::North
    }

    fn sign(self) -> f64 {
        match self {
            Direction::South => 1.0,
            Direction::North => -1.0,
        }
    }

    /// Edge a zone starts from: the bottom of the line when scrolling down,
    /// its top when scrolling up.
    pub fn leading_edge(self, line: Geometry) -> f64 {
        match self {
            Direction::South => line.bottom(),
            Direction::North => line.top,
        }
    }

    /// Edge a zone finishes at: the top of the line when scrolling down, its
    /// bottom when scrolling up.
    pub fn trailing_edge(self, line: Geometry) -> f64 {
        match self {
            Direction::South => line.top,
            Direction::North => line.bottom(),
        }
    }

    /// Move `point` by `offset` in the direction of travel.
    pub fn shift(self, point: f64, offset: f64) -> f64 {
        point + self.sign() * offset
    }

    /// Whether `scroll_top` has reached `trigger` in the direction of travel.
    pub fn reached(self, scroll_top: f64, trigger: f64) -> bool {
        self.sign() * scroll_top >= self.sign() * trigger
    }
}
