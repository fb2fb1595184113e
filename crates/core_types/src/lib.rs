/// Handle to an element in a `Document` arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl NodeId {
    pub fn from_raw(raw: u32) -> Self {
        NodeId(raw)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A rectangle in CSS px units, document space unless stated otherwise.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Rect { x, y, width, height }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    /// Closed-edge test: rects that merely touch still intersect.
    /// Zero-sized rects sitting on an edge count as well, which is what
    /// intersection observation needs for collapsed root bands.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x <= other.right()
            && other.x <= self.right()
            && self.y <= other.bottom()
            && other.y <= self.bottom()
    }

    /// Overlapping region, clamped to zero size when the rects are disjoint.
    pub fn overlap(&self, other: &Rect) -> Rect {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        Rect {
            x,
            y,
            width: (right - x).max(0.0),
            height: (bottom - y).max(0.0),
        }
    }
}

/// Result of one form submission attempt, delivered from the transport
/// worker back to the page thread.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SubmitOutcome {
    /// HTTP status when a response arrived, `None` on transport failure.
    pub status: Option<u16>,
    /// Transport-level failure message (DNS, TLS, refused URL, ...).
    pub error: Option<String>,
    pub duration_ms: u64,
}

impl SubmitOutcome {
    /// A submission succeeded when a 2xx response arrived cleanly.
    pub fn is_success(&self) -> bool {
        self.error.is_none() && matches!(self.status, Some(s) if (200..300).contains(&s))
    }
}
