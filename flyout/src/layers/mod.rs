//! Collaborators the dropdown talks to but doesn't own.
//!
//! - [`outside`]: reports clicks that land outside a set of excluded subtrees
//! - [`position`]: turns an anchor rect and a placement into panel coordinates

pub mod outside;
pub mod position;
