use geodisc_types::Point;
use serde::{Serialize, Serializer};

/// Output of `f3`: one point, or both roots at a branch point, in `+1, -1` order.
#[derive(Debug, Clone, PartialEq)]
pub enum Roots {
    One(Point),
    Two([Point; 2]),
}

impl Roots {
    /// No branch of `f3` emits more than this many points.
    pub const MAX: usize = 2;

    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    pub fn is_multivalued(&self) -> bool {
        matches!(self, Roots::Two(_))
    }

    pub fn as_slice(&self) -> &[Point] {
        match self {
            Roots::One(p) => std::slice::from_ref(p),
            Roots::Two(pair) => pair,
        }
    }

    pub fn first(&self) -> &Point {
        &self.as_slice()[0]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.as_slice().iter()
    }

    pub fn into_vec(self) -> Vec<Point> {
        match self {
            Roots::One(p) => vec![p],
            Roots::Two(pair) => pair.into(),
        }
    }
}

impl IntoIterator for Roots {
    type Item = Point;
    type IntoIter = std::vec::IntoIter<Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

impl<'a> IntoIterator for &'a Roots {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Serialize for Roots {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}
