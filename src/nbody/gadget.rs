use log::debug;

use crate::nbody::{Body, Bounds};
use crate::utils::{NBodyError, DEFAULT_MAX_DEPTH};

/// The two shapes a quadtree node can take over its lifetime.
#[derive(Debug, Clone)]
enum NodeKind {
    /// A leaf holds zero or one body.
    Leaf(Option<Body>),
    /// An internal node holds exactly four children, ordered `[NE, NW, SW, SE]`,
    /// whose boxes partition this node's box at its midpoint.
    Internal(Box<[GNode; 4]>),
}

/// A node of the quadtree: its box, the number of bodies beneath it, and a
/// cached aggregate body (`com`) for the total mass and mass-weighted centroid
/// of everything it contains.
///
/// Invariants, restored after every mutation:
/// - `is_leaf() == (nbodies() < 2)`;
/// - an internal node's `nbodies` equals the sum of its children's;
/// - the `com` of an empty leaf is a zero-mass aggregate at the box center,
///   of an occupied leaf its body's mass and position, and of an internal node
///   the mass-weighted average of its children's `com`.
#[derive(Debug, Clone)]
pub struct GNode {
    bounds: Bounds,
    nbodies: usize,
    com: Body,
    kind: NodeKind,
}

impl GNode {
    fn new(bounds: Bounds) -> Self {
        let (mx, my) = bounds.center();
        GNode {
            bounds,
            nbodies: 0,
            com: Body::aggregate(0.0, mx, my),
            kind: NodeKind::Leaf(None),
        }
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn nbodies(&self) -> usize {
        self.nbodies
    }

    /// The cached aggregate body for this subtree.
    pub fn com(&self) -> &Body {
        &self.com
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf(_))
    }

    /// The body held by this node, if it is an occupied leaf.
    pub fn body(&self) -> Option<&Body> {
        match &self.kind {
            NodeKind::Leaf(slot) => slot.as_ref(),
            NodeKind::Internal(_) => None,
        }
    }

    /// The four children of this node, if it is internal.
    pub fn children(&self) -> Option<&[GNode; 4]> {
        match &self.kind {
            NodeKind::Leaf(_) => None,
            NodeKind::Internal(children) => Some(children),
        }
    }

    fn update_com(&mut self) {
        let (mx, my) = self.bounds.center();
        self.com = match &self.kind {
            NodeKind::Leaf(None) => Body::aggregate(0.0, mx, my),
            NodeKind::Leaf(Some(p)) => Body::aggregate(p.mass, p.x, p.y),
            NodeKind::Internal(children) => {
                let mut mass = 0.0;
                let mut x = 0.0;
                let mut y = 0.0;
                for c in children.iter() {
                    mass += c.com.mass;
                    x += c.com.x * c.com.mass;
                    y += c.com.y * c.com.mass;
                }
                if mass > 0.0 {
                    Body::aggregate(mass, x / mass, y / mass)
                } else {
                    Body::aggregate(0.0, mx, my)
                }
            }
        };
    }

    /// Sends a body into the first child whose box contains it. Children are
    /// visited in `[NE, NW, SW, SE]` order, which fixes the tie-break for
    /// bodies sitting on a shared quadrant edge.
    fn route(children: &mut [GNode; 4], p: Body, depth: usize, max_depth: usize) -> Result<(), NBodyError> {
        for child in children.iter_mut() {
            if child.bounds.contains(p.x, p.y) {
                return child.insert(p, depth + 1, max_depth);
            }
        }
        Err(NBodyError::OutOfBounds { x: p.x, y: p.y })
    }

    fn insert(&mut self, p: Body, depth: usize, max_depth: usize) -> Result<(), NBodyError> {
        match &mut self.kind {
            NodeKind::Internal(children) => {
                Self::route(children, p, depth, max_depth)?;
            }
            NodeKind::Leaf(slot) => match slot.take() {
                None => *slot = Some(p),
                Some(resident) => {
                    if depth >= max_depth {
                        *slot = Some(resident);
                        return Err(NBodyError::MaxDepthExceeded { x: p.x, y: p.y });
                    }
                    // Convert the leaf to an internal node: the resident body
                    // descends one level, then the new body follows. If the
                    // cascade fails, the displaced resident goes back into the
                    // slot and the node is left exactly as it was.
                    let mut children = Box::new(self.bounds.split4().map(GNode::new));
                    let split = Self::route(&mut children, resident, depth, max_depth)
                        .and_then(|()| Self::route(&mut children, p, depth, max_depth));
                    if let Err(e) = split {
                        *slot = Some(resident);
                        return Err(e);
                    }
                    self.kind = NodeKind::Internal(children);
                }
            },
        }
        self.nbodies += 1;
        self.update_com();
        Ok(())
    }

    fn remove(&mut self, target: &Body) -> Result<Body, NBodyError> {
        let removed = match &mut self.kind {
            NodeKind::Leaf(slot) => match slot.take() {
                Some(resident) if resident.id == target.id => resident,
                other => {
                    *slot = other;
                    return Err(NBodyError::BodyNotFound);
                }
            },
            NodeKind::Internal(children) => {
                // Same descent as insertion: the first containing child is the
                // one the body was routed into.
                let mut removed = None;
                for child in children.iter_mut() {
                    if child.bounds.contains(target.x, target.y) {
                        removed = Some(child.remove(target)?);
                        break;
                    }
                }
                removed.ok_or(NBodyError::BodyNotFound)?
            }
        };

        self.nbodies -= 1;
        if self.nbodies < 2 && !self.is_leaf() {
            // The moment an internal node drops below two bodies it flattens
            // back into a leaf holding its sole remaining descendant.
            let survivor = self.take_sole_body();
            self.kind = NodeKind::Leaf(survivor);
        }
        self.update_com();
        Ok(removed)
    }

    fn take_sole_body(&mut self) -> Option<Body> {
        match &mut self.kind {
            NodeKind::Leaf(slot) => slot.take(),
            NodeKind::Internal(children) => children.iter_mut().find_map(GNode::take_sole_body),
        }
    }
}

/// An adaptive quadtree over a fixed root box, supporting incremental `add`
/// and `remove` with bottom-up center-of-mass maintenance.
///
/// In the tree-accelerated driver a `Gadget` is rebuilt from each snapshot and
/// discarded after the step, so bodies never move while indexed.
///
/// # Examples
///
/// ```
/// use rs_nbody::nbody::{Body, Bounds, Gadget};
///
/// let mut gadget = Gadget::new(Bounds::new(0.0, 0.0, 4.0, 4.0));
/// gadget.add(Body::at_rest(0, 1.0, 1.0, 1.0)).unwrap();
/// gadget.add(Body::at_rest(1, 3.0, 3.0, 3.0)).unwrap();
///
/// assert_eq!(gadget.size(), 2);
/// assert_eq!(gadget.com().mass, 4.0);
/// assert_eq!((gadget.com().x, gadget.com().y), (2.5, 2.5));
/// ```
#[derive(Debug, Clone)]
pub struct Gadget {
    root: GNode,
    size: usize,
    max_depth: usize,
}

impl Gadget {
    /// Creates an empty tree over the given root box, with the default depth cap.
    pub fn new(bounds: Bounds) -> Self {
        Gadget::with_max_depth(bounds, DEFAULT_MAX_DEPTH)
    }

    pub fn with_max_depth(bounds: Bounds, max_depth: usize) -> Self {
        Gadget {
            root: GNode::new(bounds),
            size: 0,
            max_depth,
        }
    }

    /// Number of bodies currently indexed. Always equals `root().nbodies()`.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn root(&self) -> &GNode {
        &self.root
    }

    /// Aggregate body for the whole tree: total mass and mass-weighted centroid.
    pub fn com(&self) -> &Body {
        self.root.com()
    }

    /// Inserts a body into the tree.
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if the body's position lies outside the root box,
    /// and `MaxDepthExceeded` when splitting cannot separate two bodies within
    /// the depth cap. A failed insertion leaves the tree unchanged.
    pub fn add(&mut self, p: Body) -> Result<(), NBodyError> {
        if !self.root.bounds.contains(p.x, p.y) {
            return Err(NBodyError::OutOfBounds { x: p.x, y: p.y });
        }
        self.root.insert(p, 0, self.max_depth)?;
        self.size += 1;
        Ok(())
    }

    /// Removes a body, matched by id, descending by box containment exactly as
    /// insertion did.
    ///
    /// # Errors
    ///
    /// Returns `BodyNotFound` if no body with this id is on the descent path;
    /// removing an absent body is an error, never a silent no-op.
    pub fn remove(&mut self, p: &Body) -> Result<Body, NBodyError> {
        let removed = self.root.remove(p)?;
        self.size -= 1;
        Ok(removed)
    }

    /// Collects every body in the tree, in unspecified order.
    pub fn bodies(&self) -> Vec<Body> {
        let mut out = Vec::with_capacity(self.size);
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            match node.children() {
                Some(children) => stack.extend(children.iter()),
                None => {
                    if let Some(p) = node.body() {
                        out.push(*p);
                    }
                }
            }
        }
        out
    }

    /// Builds a tree over the tight bounding box of `bodies` and inserts each
    /// of them.
    ///
    /// # Errors
    ///
    /// Returns `EmptyBodySet` for an empty slice, and propagates insertion
    /// errors (coincident bodies exceeding the depth cap).
    pub fn from_bodies(bodies: &[Body]) -> Result<Gadget, NBodyError> {
        Gadget::from_bodies_with_depth(bodies, DEFAULT_MAX_DEPTH)
    }

    /// [`Gadget::from_bodies`] with an explicit depth cap.
    pub fn from_bodies_with_depth(bodies: &[Body], max_depth: usize) -> Result<Gadget, NBodyError> {
        let bounds = Bounds::enclosing(bodies)?;
        let mut gadget = Gadget::with_max_depth(bounds, max_depth);
        for p in bodies {
            gadget.add(*p)?;
        }
        debug!(
            "built gadget over {:?}: {} bodies, total mass {}",
            bounds,
            gadget.size,
            gadget.com().mass
        );
        Ok(gadget)
    }
}
