//! Summaries of what a texture pass changed.

use std::iter::Sum;
use std::ops::Add;

/// Outcome of texturing one stroke.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StrokeReport {
    /// The stroke passed the influence filter.
    pub affected: bool,
    /// The fill UV state was rewritten.
    pub fill_changed: bool,
    /// Points whose UV factor and rotation were rewritten.
    pub points_changed: usize,
    /// Points left untouched because they are outside the vertex group.
    pub points_skipped: usize,
}

impl StrokeReport {
    /// Report for a stroke rejected by the filter.
    pub fn unaffected() -> Self {
        Self::default()
    }
}

/// Outcome of texturing many strokes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModifierReport {
    /// Frames visited.
    pub frames: usize,
    /// Strokes that passed the filter.
    pub strokes_affected: usize,
    /// Strokes rejected by the filter.
    pub strokes_skipped: usize,
    /// Strokes whose fill UV state was rewritten.
    pub fills_changed: usize,
    /// Points rewritten.
    pub points_changed: usize,
    /// Points excluded by vertex-group weight.
    pub points_skipped: usize,
}

impl ModifierReport {
    /// Record one stroke.
    pub fn record(&mut self, stroke: StrokeReport) {
        if stroke.affected {
            self.strokes_affected += 1;
        } else {
            self.strokes_skipped += 1;
        }
        self.fills_changed += usize::from(stroke.fill_changed);
        self.points_changed += stroke.points_changed;
        self.points_skipped += stroke.points_skipped;
    }
}

impl Add for ModifierReport {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            frames: self.frames + rhs.frames,
            strokes_affected: self.strokes_affected + rhs.strokes_affected,
            strokes_skipped: self.strokes_skipped + rhs.strokes_skipped,
            fills_changed: self.fills_changed + rhs.fills_changed,
            points_changed: self.points_changed + rhs.points_changed,
            points_skipped: self.points_skipped + rhs.points_skipped,
        }
    }
}

impl Sum for ModifierReport {
    fn sum<It: Iterator<Item = Self>>(iter: It) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

impl FromIterator<StrokeReport> for ModifierReport {
    fn from_iter<It: IntoIterator<Item = StrokeReport>>(iter: It) -> Self {
        let mut report = Self::default();
        for stroke in iter {
            report.record(stroke);
        }
        report
    }
}
