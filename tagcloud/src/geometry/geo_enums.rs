#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Possible relations between two rectangles A and B.
/// A is `GeoRelation` to B
pub enum GeoRelation {
    /// The interiors of A and B intersect, but neither A ⊆ B nor B ⊆ A
    Intersecting,
    /// A ⊆ B
    Enclosed,
    /// B ⊆ A
    Surrounding,
    /// The interiors of A and B do not intersect, sharing an edge or corner is allowed
    Disjoint,
}
