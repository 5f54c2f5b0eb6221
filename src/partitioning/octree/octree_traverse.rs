use super::Octree;
use crate::math::{Isometry, Real};

impl Octree {
    /// Descends `self` and `other` simultaneously and returns the indices of the nodes the
    /// descent stopped at, in `self` and in `other` respectively.
    ///
    /// Both descents start at the roots. At each step, the current node of `self` moves to its
    /// child covering the octant containing the representative point of the current node of
    /// `other`, then the current node of `other` does the same toward the (updated) current node
    /// of `self`. A side stops descending as soon as its current node is a singleton or has no
    /// child in the selected octant.
    ///
    /// `self_pos` and `other_pos` are the positions of the bodies owning each tree, `None`
    /// meaning the identity.
    pub fn simultaneous_descent(
        &self,
        self_pos: Option<&Isometry<Real>>,
        other: &Octree,
        other_pos: Option<&Isometry<Real>>,
    ) -> (u32, u32) {
        let mut id1 = Self::ROOT;
        let mut id2 = Self::ROOT;
        let mut descending1 = true;
        let mut descending2 = true;

        while descending1 || descending2 {
            if descending1 {
                let node1 = self.node(id1);
                let target = other.node(id2).representative_point();

                match node1
                    .corner_for(target, self_pos, other_pos)
                    .and_then(|octant| node1.child(octant))
                {
                    Some(child) => {
                        log::trace!("Octree descent: first tree {} -> {}.", id1, child);
                        id1 = child;
                    }
                    None => descending1 = false,
                }
            }

            if descending2 {
                let node2 = other.node(id2);
                let target = self.node(id1).representative_point();

                match node2
                    .corner_for(target, other_pos, self_pos)
                    .and_then(|octant| node2.child(octant))
                {
                    Some(child) => {
                        log::trace!("Octree descent: second tree {} -> {}.", id2, child);
                        id2 = child;
                    }
                    None => descending2 = false,
                }
            }
        }

        (id1, id2)
    }
}
