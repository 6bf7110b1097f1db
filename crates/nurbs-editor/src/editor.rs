//! Editor state: the control polygon, the picked point and the current drag.

use nurbs_core::{CurveOptions, NurbsError, Result};
use nurbs_geometry::{evaluate_with, ControlPoint, SampledCurve};
use nurbs_math::Point2;
use serde::{Deserialize, Serialize};

use crate::frame::Frame;

/// Radius (in canvas units) within which a press picks an existing point.
pub const DEFAULT_PICK_RADIUS: f64 = 10.0;
/// Range of the weight slider.
pub const MIN_WEIGHT: f64 = 0.1;
pub const MAX_WEIGHT: f64 = 10.0;

/// A control point as the editor stores it: position, label and weight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabeledPoint {
    pub position: Point2,
    pub label: char,
    pub weight: f64,
}

impl From<&LabeledPoint> for ControlPoint {
    fn from(p: &LabeledPoint) -> Self {
        ControlPoint {
            position: p.position,
            weight: p.weight,
        }
    }
}

/// Pointer state between press and release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Interaction {
    #[default]
    Idle,
    Dragging(usize),
}

#[derive(Debug, Clone)]
pub struct Editor {
    points: Vec<LabeledPoint>,
    options: CurveOptions,
    pick_radius: f64,
    interaction: Interaction,
    selected: Option<usize>,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(CurveOptions::default())
    }
}

impl Editor {
    pub fn new(options: CurveOptions) -> Self {
        Self {
            points: Vec::new(),
            options,
            pick_radius: DEFAULT_PICK_RADIUS,
            interaction: Interaction::Idle,
            selected: None,
        }
    }

    pub fn with_pick_radius(mut self, radius: f64) -> Self {
        self.pick_radius = radius;
        self
    }

    pub fn points(&self) -> &[LabeledPoint] {
        &self.points
    }

    pub fn options(&self) -> &CurveOptions {
        &self.options
    }

    pub fn interaction(&self) -> Interaction {
        self.interaction
    }

    /// Index of the point the weight slider edits.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// First point within the pick radius of `pos` (boundary included).
    pub fn find_nearby(&self, pos: Point2) -> Option<usize> {
        let r2 = self.pick_radius * self.pick_radius;
        self.points
            .iter()
            .position(|p| p.position.distance_squared(pos) <= r2)
    }

    /// Label for the next placed point: `'A'`, or the successor of the
    /// largest label in use.
    pub fn next_label(&self) -> char {
        match self.points.iter().map(|p| p.label).max() {
            None => 'A',
            Some(c) => char::from_u32(c as u32 + 1).unwrap_or(char::REPLACEMENT_CHARACTER),
        }
    }

    /// Left button down: pick a nearby point for dragging and weight editing,
    /// or place a new point.
    pub fn press(&mut self, pos: Point2) -> Frame {
        match self.find_nearby(pos) {
            Some(index) => {
                log::debug!("picked {} at {:?}", self.points[index].label, pos);
                self.interaction = Interaction::Dragging(index);
                self.selected = Some(index);
            }
            None => {
                let label = self.next_label();
                self.points.push(LabeledPoint {
                    position: pos,
                    label,
                    weight: 1.0,
                });
                log::debug!("placed {} at {:?}", label, pos);
            }
        }
        self.frame()
    }

    /// Pointer motion with the button held. Returns `None` when no point is
    /// being dragged.
    pub fn drag(&mut self, pos: Point2) -> Option<Frame> {
        let Interaction::Dragging(index) = self.interaction else {
            return None;
        };
        self.points[index].position = pos;
        Some(self.frame())
    }

    /// Left button up. The picked point stays selected for the weight slider.
    pub fn release(&mut self) {
        self.interaction = Interaction::Idle;
    }

    /// Set the weight of the selected point, clamped to the slider range.
    ///
    /// # Errors
    /// `InvalidOperation` when no point has been picked.
    pub fn set_weight(&mut self, weight: f64) -> Result<Frame> {
        let index = self
            .selected
            .ok_or_else(|| NurbsError::InvalidOperation("no control point selected".into()))?;
        if !weight.is_finite() {
            return Err(NurbsError::invalid_config(format!(
                "weight must be finite, got {}",
                weight
            )));
        }
        self.points[index].weight = weight.clamp(MIN_WEIGHT, MAX_WEIGHT);
        Ok(self.frame())
    }

    /// Remove every point and reset the selection.
    pub fn clear(&mut self) -> Frame {
        self.points.clear();
        self.selected = None;
        self.interaction = Interaction::Idle;
        self.frame()
    }

    /// Owned copy of the control polygon for evaluation.
    pub fn snapshot(&self) -> Vec<ControlPoint> {
        self.points.iter().map(ControlPoint::from).collect()
    }

    /// Re-evaluate the curve from scratch and describe the canvas.
    pub fn frame(&self) -> Frame {
        Frame::new(
            self.points.iter().map(|p| p.position).collect(),
            self.points.iter().map(|p| p.label).collect(),
            self.recompute(),
            self.selected.map(|i| self.points[i].weight),
        )
    }

    fn recompute(&self) -> Option<SampledCurve> {
        if self.points.len() <= self.options.degree {
            return None;
        }

        log::debug!(
            "{}",
            self.points
                .iter()
                .map(|p| format!("{}: ({}, {})", p.label, p.position.x, p.position.y))
                .collect::<Vec<_>>()
                .join(", ")
        );
        log::debug!(
            "{}",
            self.points
                .iter()
                .map(|p| format!("w.{}: {}", p.label, p.weight))
                .collect::<Vec<_>>()
                .join(", ")
        );

        match evaluate_with(&self.snapshot(), &self.options) {
            Ok(curve) => Some(curve),
            Err(e) => {
                log::warn!("curve evaluation failed: {}", e);
                None
            }
        }
    }
}
