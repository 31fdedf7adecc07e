/// Trait for types that can detect collisions between `Self` and `T`.
///
/// Only the interiors count: two primitives that merely touch do not collide.
pub trait CollidesWith<T> {
    fn collides_with(&self, other: &T) -> bool;
}
