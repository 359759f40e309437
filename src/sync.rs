//! Scroll synchronization between panes that must stay aligned.

/// Every scrollable area the app keeps in lockstep with another one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pane {
    ViewA,
    ViewB,
    GutterA,
    GutterB,
    InputA,
    InputGutterA,
    InputB,
    InputGutterB,
}

#[derive(Debug, Clone, Copy)]
struct PaneState {
    pane: Pane,
    /// Last offset reported by, or pushed to, the pane
    offset: f32,
    /// Offset the pane must adopt on its next draw
    pending: Option<f32>,
    /// Offset handed out by the last `take_pending`, until the pane reports
    /// back where it actually landed
    seeked: Option<f32>,
}

/// A set of panes sharing one vertical scroll offset.
///
/// Panes report their offset after drawing with [`on_scroll`]. When one of
/// them moved, every other member is handed the new offset through
/// [`take_pending`] on its next draw.
///
/// [`on_scroll`]: ScrollGroup::on_scroll
/// [`take_pending`]: ScrollGroup::take_pending
#[derive(Debug, Clone)]
pub struct ScrollGroup {
    offset: f32,
    members: Vec<PaneState>,
}

impl ScrollGroup {
    pub fn new(panes: &[Pane]) -> Self {
        Self {
            offset: 0.0,
            members: panes
                .iter()
                .map(|&pane| PaneState {
                    pane,
                    offset: 0.0,
                    pending: None,
                    seeked: None,
                })
                .collect(),
        }
    }

    /// Group for the two rendered diff views and their gutters
    pub fn display() -> Self {
        Self::new(&[Pane::ViewA, Pane::ViewB, Pane::GutterA, Pane::GutterB])
    }

    /// Group for one input editor and its gutter
    pub fn input(pane: Pane, gutter: Pane) -> Self {
        Self::new(&[pane, gutter])
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Record the offset `source` ended up at. Returns true if it moved and
    /// the rest of the group needs a redraw.
    pub fn on_scroll(&mut self, source: Pane, offset: f32) -> bool {
        let Some(member) = self.members.iter_mut().find(|m| m.pane == source) else {
            return false;
        };
        // A pane still catching up with a seek reports its old offset
        if member.pending.is_some() {
            return false;
        }
        // A shorter pane clamps an offset it cannot reach. That is not a
        // scroll, so the rest of the group keeps the requested offset.
        if let Some(target) = member.seeked.take() {
            if offset < target - 0.5 {
                member.offset = offset;
                return false;
            }
        }
        if (member.offset - offset).abs() < 0.5 {
            return false;
        }
        member.offset = offset;
        self.offset = offset;

        for other in self.members.iter_mut().filter(|m| m.pane != source) {
            other.offset = offset;
            other.pending = Some(offset);
        }
        true
    }

    /// Move every pane in the group to `offset`
    pub fn seek(&mut self, offset: f32) {
        let offset = offset.max(0.0);
        self.offset = offset;
        for member in &mut self.members {
            member.offset = offset;
            member.pending = Some(offset);
        }
    }

    /// Move every pane so `line` (1-based) is at the top
    pub fn seek_to_line(&mut self, line: usize, line_height: f32) {
        self.seek(line.saturating_sub(1) as f32 * line_height);
    }

    /// Offset `pane` must be forced to on this draw, if any
    pub fn take_pending(&mut self, pane: Pane) -> Option<f32> {
        let member = self.members.iter_mut().find(|m| m.pane == pane)?;
        let pending = member.pending.take();
        if pending.is_some() {
            member.seeked = pending;
        }
        pending
    }
}
