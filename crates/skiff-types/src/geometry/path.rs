//! Path type - an ordered sequence of drawing commands.

use super::{Offset, Rect};

/// A single path command. Coordinates are absolute.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PathCommand {
    /// Starts a new contour at the given point.
    MoveTo {
        /// Target x.
        x: f64,
        /// Target y.
        y: f64,
    },

    /// Draws a straight segment to the given point.
    LineTo {
        /// Target x.
        x: f64,
        /// Target y.
        y: f64,
    },

    /// Draws a quadratic bezier through one control point.
    QuadTo {
        /// Control point x.
        cx: f64,
        /// Control point y.
        cy: f64,
        /// Target x.
        x: f64,
        /// Target y.
        y: f64,
    },

    /// Draws a cubic bezier through two control points.
    CubicTo {
        /// First control point x.
        c1x: f64,
        /// First control point y.
        c1y: f64,
        /// Second control point x.
        c2x: f64,
        /// Second control point y.
        c2y: f64,
        /// Target x.
        x: f64,
        /// Target y.
        y: f64,
    },

    /// Closes the current contour.
    Close,
}

/// An ordered sequence of [`PathCommand`]s with a computed bounding rect.
///
/// The bounding rect is conservative: bezier control points are included, so
/// the reported bounds may exceed the curve's true extent but never
/// undershoot it. Occlusion math only ever consumes path bounds, so a
/// conservative box errs toward hiding, never toward leaking native content.
///
/// The canonical single-rect form produced by [`Path::from_rect`] is
/// recognized by [`Path::as_rect`]; occlusion merging uses it to replace
/// overlapping shapes with their rect union.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    /// Creates an empty path.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Creates the canonical single-rect path: a closed contour running
    /// clockwise from the rect's top-left corner.
    #[must_use]
    pub fn from_rect(rect: Rect) -> Self {
        Self {
            commands: vec![
                PathCommand::MoveTo {
                    x: rect.left,
                    y: rect.top,
                },
                PathCommand::LineTo {
                    x: rect.right,
                    y: rect.top,
                },
                PathCommand::LineTo {
                    x: rect.right,
                    y: rect.bottom,
                },
                PathCommand::LineTo {
                    x: rect.left,
                    y: rect.bottom,
                },
                PathCommand::Close,
            ],
        }
    }

    // ========================================================================
    // Builder operations
    // ========================================================================

    /// Starts a new contour.
    pub fn move_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.commands.push(PathCommand::MoveTo { x, y });
        self
    }

    /// Adds a line segment.
    pub fn line_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.commands.push(PathCommand::LineTo { x, y });
        self
    }

    /// Adds a quadratic bezier segment.
    pub fn quad_to(&mut self, cx: f64, cy: f64, x: f64, y: f64) -> &mut Self {
        self.commands.push(PathCommand::QuadTo { cx, cy, x, y });
        self
    }

    /// Adds a cubic bezier segment.
    pub fn cubic_to(&mut self, c1x: f64, c1y: f64, c2x: f64, c2y: f64, x: f64, y: f64) -> &mut Self {
        self.commands.push(PathCommand::CubicTo {
            c1x,
            c1y,
            c2x,
            c2y,
            x,
            y,
        });
        self
    }

    /// Closes the current contour.
    pub fn close(&mut self) -> &mut Self {
        self.commands.push(PathCommand::Close);
        self
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Returns the command sequence.
    #[inline]
    #[must_use]
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Returns true if the path has no commands.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Computes the axis-aligned bounding rect over every coordinate in the
    /// path, control points included.
    ///
    /// Returns [`Rect::EMPTY`] for an empty path.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        let mut min_x = f64::INFINITY;
        let mut min_y = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut max_y = f64::NEG_INFINITY;
        let mut any = false;

        let mut visit = |x: f64, y: f64| {
            any = true;
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
        };

        for command in &self.commands {
            match *command {
                PathCommand::MoveTo { x, y } | PathCommand::LineTo { x, y } => visit(x, y),
                PathCommand::QuadTo { cx, cy, x, y } => {
                    visit(cx, cy);
                    visit(x, y);
                }
                PathCommand::CubicTo {
                    c1x,
                    c1y,
                    c2x,
                    c2y,
                    x,
                    y,
                } => {
                    visit(c1x, c1y);
                    visit(c2x, c2y);
                    visit(x, y);
                }
                PathCommand::Close => {}
            }
        }

        if any {
            Rect::from_ltrb(min_x, min_y, max_x, max_y)
        } else {
            Rect::EMPTY
        }
    }

    /// Returns the rect this path describes, if it is in the canonical
    /// single-rect form produced by [`Path::from_rect`].
    #[must_use]
    pub fn as_rect(&self) -> Option<Rect> {
        match self.commands.as_slice() {
            [PathCommand::MoveTo { x: x0, y: y0 }, PathCommand::LineTo { x: x1, y: y1 }, PathCommand::LineTo { x: x2, y: y2 }, PathCommand::LineTo { x: x3, y: y3 }, PathCommand::Close]
                if x0 == x3 && x1 == x2 && y0 == y1 && y2 == y3 =>
            {
                Some(Rect::from_ltrb(*x0, *y0, *x1, *y2))
            }
            _ => None,
        }
    }

    /// Returns a copy of this path shifted by `offset`.
    #[must_use]
    pub fn translate(&self, offset: Offset) -> Path {
        let commands = self
            .commands
            .iter()
            .map(|command| match *command {
                PathCommand::MoveTo { x, y } => PathCommand::MoveTo {
                    x: x + offset.dx,
                    y: y + offset.dy,
                },
                PathCommand::LineTo { x, y } => PathCommand::LineTo {
                    x: x + offset.dx,
                    y: y + offset.dy,
                },
                PathCommand::QuadTo { cx, cy, x, y } => PathCommand::QuadTo {
                    cx: cx + offset.dx,
                    cy: cy + offset.dy,
                    x: x + offset.dx,
                    y: y + offset.dy,
                },
                PathCommand::CubicTo {
                    c1x,
                    c1y,
                    c2x,
                    c2y,
                    x,
                    y,
                } => PathCommand::CubicTo {
                    c1x: c1x + offset.dx,
                    c1y: c1y + offset.dy,
                    c2x: c2x + offset.dx,
                    c2y: c2y + offset.dy,
                    x: x + offset.dx,
                    y: y + offset.dy,
                },
                PathCommand::Close => PathCommand::Close,
            })
            .collect();
        Path { commands }
    }
}
