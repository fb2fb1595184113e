use core_types::Rect;

/// Fixed duration of an animated scroll. Browsers leave `behavior: "smooth"`
/// timing to the UA; this engine pins it so tests can step it frame by frame.
pub const SMOOTH_SCROLL_MS: f32 = 400.0;

struct SmoothScroll {
    from: f32,
    to: f32,
    elapsed_ms: f32,
}

/// Scroll state of the visible window over the document.
///
/// The viewport owns only `scroll_y` and an optional in-flight animation;
/// element geometry stays in the document. Offsets are clamped to
/// `[0, content_height - height]` at every entry point.
pub struct Viewport {
    width: f32,
    height: f32,
    content_height: f32,
    scroll_y: f32,
    animation: Option<SmoothScroll>,
}

impl Viewport {
    pub fn new(width: f32, height: f32, content_height: f32) -> Self {
        Self {
            width,
            height,
            content_height,
            scroll_y: 0.0,
            animation: None,
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn content_height(&self) -> f32 {
        self.content_height
    }

    pub fn scroll_y(&self) -> f32 {
        self.scroll_y
    }

    pub fn max_scroll(&self) -> f32 {
        (self.content_height - self.height).max(0.0)
    }

    /// Jump to an offset. A user scroll interrupts any animated one.
    /// Returns `true` when the offset actually moved.
    pub fn scroll_to(&mut self, y: f32) -> bool {
        self.animation = None;
        let clamped = self.clamp(y);
        let moved = clamped != self.scroll_y;
        self.scroll_y = clamped;
        moved
    }

    /// Begin animating toward `target` with an ease-in-out cubic curve.
    /// Animating to the current offset is a no-op.
    pub fn start_smooth_scroll(&mut self, target: f32) {
        let to = self.clamp(target);
        if to == self.scroll_y {
            self.animation = None;
            return;
        }
        log::trace!(target: "viewport", "smooth scroll {} -> {to}", self.scroll_y);
        self.animation = Some(SmoothScroll {
            from: self.scroll_y,
            to,
            elapsed_ms: 0.0,
        });
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Advance the in-flight animation by one frame's worth of time.
    /// Returns `true` when the offset moved.
    pub fn step(&mut self, dt_ms: u64) -> bool {
        let Some(anim) = &mut self.animation else {
            return false;
        };
        anim.elapsed_ms += dt_ms as f32;
        let t = (anim.elapsed_ms / SMOOTH_SCROLL_MS).min(1.0);
        let next = anim.from + (anim.to - anim.from) * ease_in_out_cubic(t);
        let finished = t >= 1.0;
        let moved = next != self.scroll_y;
        self.scroll_y = next;
        if finished {
            self.animation = None;
        }
        moved
    }

    /// The document-space rect currently on screen.
    pub fn visible_rect(&self) -> Rect {
        Rect::new(0.0, self.scroll_y, self.width, self.height)
    }

    /// Translate a document-space rect into viewport coordinates, as
    /// `getBoundingClientRect` would report it.
    pub fn to_viewport(&self, rect: Rect) -> Rect {
        Rect {
            y: rect.y - self.scroll_y,
            ..rect
        }
    }

    fn clamp(&self, y: f32) -> f32 {
        y.clamp(0.0, self.max_scroll())
    }
}

fn ease_in_out_cubic(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Viewport {
        Viewport::new(1200.0, 800.0, 3000.0)
    }

    #[test]
    fn scroll_to_clamps_to_the_document() {
        let mut vp = viewport();
        assert!(vp.scroll_to(10_000.0));
        assert_eq!(vp.scroll_y(), 2200.0);
        assert!(vp.scroll_to(-50.0));
        assert_eq!(vp.scroll_y(), 0.0);
        // no movement, no event
        assert!(!vp.scroll_to(-1.0));
    }

    #[test]
    fn short_documents_never_scroll() {
        let mut vp = Viewport::new(1200.0, 800.0, 500.0);
        assert_eq!(vp.max_scroll(), 0.0);
        assert!(!vp.scroll_to(300.0));
        assert_eq!(vp.scroll_y(), 0.0);
    }

    #[test]
    fn smooth_scroll_reaches_the_target_and_stops() {
        let mut vp = viewport();
        vp.start_smooth_scroll(1000.0);
        assert!(vp.is_animating());

        let mut frames = 0;
        while vp.is_animating() {
            vp.step(16);
            frames += 1;
            assert!(frames <= 26, "animation must finish within 400ms of frames");
        }
        assert_eq!(vp.scroll_y(), 1000.0);
        // a finished animation steps no further
        assert!(!vp.step(16));
    }

    #[test]
    fn smooth_scroll_eases_rather_than_jumping() {
        let mut vp = viewport();
        vp.start_smooth_scroll(1000.0);
        vp.step(16);
        let early = vp.scroll_y();
        assert!(early > 0.0 && early < 100.0, "ease-in starts slow, got {early}");

        // halfway through the duration the curve crosses the midpoint
        let mut vp2 = viewport();
        vp2.start_smooth_scroll(1000.0);
        vp2.step(200);
        assert_eq!(vp2.scroll_y(), 500.0);
    }

    #[test]
    fn user_scroll_cancels_the_animation() {
        let mut vp = viewport();
        vp.start_smooth_scroll(1000.0);
        vp.step(16);
        vp.scroll_to(50.0);
        assert!(!vp.is_animating());
        assert_eq!(vp.scroll_y(), 50.0);
        assert!(!vp.step(16));
    }

    #[test]
    fn animating_to_the_current_offset_is_a_no_op() {
        let mut vp = viewport();
        vp.scroll_to(100.0);
        vp.start_smooth_scroll(100.0);
        assert!(!vp.is_animating());
    }

    #[test]
    fn visible_rect_tracks_the_offset() {
        let mut vp = viewport();
        vp.scroll_to(600.0);
        let rect = vp.visible_rect();
        assert_eq!((rect.y, rect.height), (600.0, 800.0));
    }

    #[test]
    fn to_viewport_subtracts_the_scroll_offset() {
        let mut vp = viewport();
        vp.scroll_to(600.0);
        let on_screen = vp.to_viewport(Rect::new(100.0, 900.0, 300.0, 200.0));
        assert_eq!(on_screen.y, 300.0);
        assert_eq!(on_screen.x, 100.0);
    }
}
