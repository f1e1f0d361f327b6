use crate::nbody::{Body, GNode, Gadget};
use crate::utils::SimConstants;

/// Builds the default Barnes-Hut opening predicate for opening angle `theta`.
///
/// A node is opened when the reference body lies inside the node's box, or
/// when the node's angular size relative to the reference body is too large:
/// `max_side^2 / square_dist(com, body) >= theta^2`. Because a body in the
/// tree is contained by every ancestor of its leaf, the predicate guarantees
/// that the leaf holding the reference body itself is always reached rather
/// than approximated.
pub fn opening_criterion(theta: f64) -> impl Fn(&GNode, &Body) -> bool {
    move |node, p| {
        if node.bounds().contains(p.x, p.y) {
            return true;
        }
        let sq_dist = node.com().square_dist(p);
        node.bounds().max_side().powi(2) / sq_dist >= theta * theta
    }
}

/// Collects the gravity sources the tree offers for the reference body `p`.
///
/// Opened subtrees contribute their actual leaf bodies; unopened subtrees
/// contribute one synthetic aggregate built from the node's cached center of
/// mass. Together the returned bodies cover the tree's mass exactly once. The
/// reference body itself appears in the list when it is indexed in the tree;
/// it is excluded later by id in [`Body::next`], not here.
///
/// # Examples
///
/// ```
/// use rs_nbody::nbody::{opening_criterion, source_bodies, Body, Gadget};
///
/// let bodies = vec![
///     Body::at_rest(0, 1.0, 0.0, 0.0),
///     Body::at_rest(1, 1.0, 1.0, 0.0),
///     Body::at_rest(2, 1.0, 0.0, 1.0),
/// ];
/// let gadget = Gadget::from_bodies(&bodies).unwrap();
///
/// let sources = source_bodies(&gadget, &bodies[0], opening_criterion(0.7));
/// let total: f64 = sources.iter().map(|b| b.mass).sum();
/// assert_eq!(total, 3.0); // full coverage; the reference body is excluded later, by id
/// ```
pub fn source_bodies(
    gadget: &Gadget,
    p: &Body,
    should_open: impl Fn(&GNode, &Body) -> bool,
) -> Vec<Body> {
    let mut sources = Vec::new();
    collect(gadget.root(), p, &should_open, &mut sources);
    sources
}

/// [`source_bodies`] with the default predicate at `constants.theta`.
pub fn default_sources(gadget: &Gadget, p: &Body, constants: &SimConstants) -> Vec<Body> {
    source_bodies(gadget, p, opening_criterion(constants.theta))
}

fn collect<F>(node: &GNode, p: &Body, should_open: &F, sources: &mut Vec<Body>)
where
    F: Fn(&GNode, &Body) -> bool,
{
    match node.children() {
        None => {
            if let Some(body) = node.body() {
                sources.push(*body);
            }
        }
        Some(children) => {
            if should_open(node, p) {
                for child in children {
                    collect(child, p, should_open, sources);
                }
            } else {
                sources.push(*node.com());
            }
        }
    }
}
