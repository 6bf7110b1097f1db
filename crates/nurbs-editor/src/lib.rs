//! nurbs-sketch editor: a headless model of the interactive curve editor.
//!
//! The editor owns the ordered control polygon and turns pointer and slider
//! events into [`Frame`]s, re-evaluating the whole curve on every change.

pub mod editor;
pub mod frame;
pub mod io;

pub use editor::{Editor, Interaction, LabeledPoint};
pub use frame::Frame;
pub use io::{CurveReport, PointRecord, XY};
