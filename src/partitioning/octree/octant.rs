use crate::math::{Point, Real, NUM_OCTANTS};

/// One of the eight octants around the origin of a local frame.
///
/// The octant code packs the sign of each coordinate on three bits: the bit `0b100` is set iff
/// `x ≥ 0`, the bit `0b010` iff `y ≥ 0` and the bit `0b001` iff `z ≥ 0`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Octant(u8);

impl Octant {
    /// All the octants, in increasing code order.
    pub const ALL: [Octant; NUM_OCTANTS] = [
        Octant(0),
        Octant(1),
        Octant(2),
        Octant(3),
        Octant(4),
        Octant(5),
        Octant(6),
        Octant(7),
    ];

    /// The octant with the given sign pattern (`true` meaning non-negative).
    #[inline]
    pub fn new(x: bool, y: bool, z: bool) -> Self {
        Octant(((x as u8) << 2) | ((y as u8) << 1) | z as u8)
    }

    /// The octant a point expressed in a local frame belongs to.
    ///
    /// Zero (and negative zero) coordinates count as non-negative.
    #[inline]
    pub fn from_local_point(pt: &Point<Real>) -> Self {
        Self::new(pt.x >= 0.0, pt.y >= 0.0, pt.z >= 0.0)
    }

    /// The 3-bit code of this octant, which is also its index in a node's children array.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}
