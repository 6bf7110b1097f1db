//! NURBS core algorithms: knot vectors and Cox–de Boor basis functions.

pub mod basis;
pub mod knot;

pub use basis::{basis_row, cox_de_boor, EndPolicy};
pub use knot::KnotVector;
