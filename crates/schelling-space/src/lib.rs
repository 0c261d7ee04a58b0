//! Lattice topology for Schelling simulations.
//!
//! Defines [`Square8`], a fixed 2D lattice with an 8-connected (Moore)
//! neighbourhood and absorbing edges: border cells simply have fewer
//! neighbours. Cells are addressed by a flat row-major index; adjacency is
//! stored as index slots, one per [`Direction`], so the lattice can be
//! iterated and mutated in bulk without any shared ownership between cells.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod direction;
pub mod error;
pub mod square8;

pub use direction::Direction;
pub use error::SpaceError;
pub use square8::Square8;
