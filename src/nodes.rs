//! Node coordinates and the editable node list.
//!
//! A [`NodeList`] is the only input the colony needs besides its
//! [`AcoConfig`](crate::aco::AcoConfig). Once a run starts the colony copies
//! the coordinates, so edits never affect a run in progress.

use crate::error::AcoError;
use std::fmt;
use std::io::Read;
use std::path::Path;

/// A point in the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The 30-city instance the command-line tool starts with.
const SAMPLE_NODES: [(f64, f64); 30] = [
    (-4.0, 4.0),
    (16.0, -5.0),
    (22.0, 8.0),
    (0.0, -16.0),
    (3.0, -19.0),
    (24.0, -20.0),
    (24.0, -15.0),
    (16.0, -1.0),
    (10.0, -15.0),
    (-7.0, -2.0),
    (13.0, 10.0),
    (17.0, -6.0),
    (19.0, 1.0),
    (19.0, -16.0),
    (-8.0, -8.0),
    (-4.0, -1.0),
    (20.0, -3.0),
    (17.0, -17.0),
    (-2.0, 9.0),
    (23.0, -24.0),
    (31.0, -26.0),
    (37.0, -20.0),
    (30.0, -30.0),
    (26.0, -22.0),
    (37.0, -16.0),
    (25.0, -18.0),
    (17.0, -30.0),
    (26.0, -28.0),
    (27.0, -15.0),
    (18.0, -24.0),
];

/// Ordered, editable list of node coordinates.
///
/// Node `i` of a tour refers to `points()[i]`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeList {
    points: Vec<Point>,
}

impl NodeList {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// The built-in 30-node instance.
    pub fn sample() -> Self {
        Self::new(SAMPLE_NODES.iter().map(|&p| Point::from(p)).collect())
    }

    /// Reads `x,y` rows (no header) from a CSV file.
    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self, AcoError> {
        let file = std::fs::File::open(path)?;
        Self::from_csv_reader(file)
    }

    /// Reads `x,y` rows (no header) from any reader.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, AcoError> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .trim(csv::Trim::All)
            .comment(Some(b'#'))
            .from_reader(reader);

        let mut points = Vec::new();
        for record in rdr.deserialize::<(f64, f64)>() {
            points.push(Point::from(record?));
        }
        Ok(Self::new(points))
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Appends a node at the end of the list.
    pub fn append(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Removes and returns the node at `index`.
    pub fn remove(&mut self, index: usize) -> Result<Point, AcoError> {
        self.check_index(index)?;
        Ok(self.points.remove(index))
    }

    /// Replaces the node at `index`, returning the previous coordinate.
    pub fn replace(&mut self, index: usize, point: Point) -> Result<Point, AcoError> {
        self.check_index(index)?;
        Ok(std::mem::replace(&mut self.points[index], point))
    }

    fn check_index(&self, index: usize) -> Result<(), AcoError> {
        if index >= self.points.len() {
            return Err(AcoError::OutOfRangeEdit {
                index,
                len: self.points.len(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for NodeList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, p) in self.points.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{p}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert!((a.distance(&b) - 5.0).abs() < 1e-12);
        assert!((b.distance(&a) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_sample_has_thirty_nodes() {
        let nodes = NodeList::sample();
        assert_eq!(nodes.len(), 30);
        assert_eq!(nodes.points()[0], Point::new(-4.0, 4.0));
    }

    #[test]
    fn test_append_remove_replace() {
        let mut nodes = NodeList::default();
        assert!(nodes.is_empty());

        nodes.append(Point::new(1.0, 1.0));
        nodes.append(Point::new(2.0, 2.0));
        nodes.append(Point::new(3.0, 3.0));

        let removed = nodes.remove(1).unwrap();
        assert_eq!(removed, Point::new(2.0, 2.0));
        assert_eq!(nodes.len(), 2);

        let old = nodes.replace(1, Point::new(9.0, 9.0)).unwrap();
        assert_eq!(old, Point::new(3.0, 3.0));
        assert_eq!(nodes.points()[1], Point::new(9.0, 9.0));
    }

    #[test]
    fn test_out_of_range_edit() {
        let mut nodes = NodeList::new(vec![Point::new(0.0, 0.0)]);

        let err = nodes.remove(3).unwrap_err();
        assert!(matches!(err, AcoError::OutOfRangeEdit { index: 3, len: 1 }));

        let err = nodes.replace(1, Point::new(1.0, 1.0)).unwrap_err();
        assert!(matches!(err, AcoError::OutOfRangeEdit { index: 1, len: 1 }));

        // list untouched after failed edits
        assert_eq!(nodes.points(), &[Point::new(0.0, 0.0)]);
    }

    #[test]
    fn test_from_csv_reader() {
        let data = "# city coordinates\n0, 0\n0,1\n 1.5 , 1\n";
        let nodes = NodeList::from_csv_reader(data.as_bytes()).unwrap();
        assert_eq!(
            nodes.points(),
            &[
                Point::new(0.0, 0.0),
                Point::new(0.0, 1.0),
                Point::new(1.5, 1.0)
            ]
        );
    }

    #[test]
    fn test_from_csv_reader_rejects_garbage() {
        let data = "0,0\nabc,1\n";
        assert!(matches!(
            NodeList::from_csv_reader(data.as_bytes()),
            Err(AcoError::Csv(_))
        ));
    }

    #[test]
    fn test_display() {
        let nodes = NodeList::new(vec![Point::new(1.0, -2.0), Point::new(0.5, 3.0)]);
        assert_eq!(nodes.to_string(), "[(1, -2), (0.5, 3)]");
    }
}
