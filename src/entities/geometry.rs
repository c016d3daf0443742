/// Axis-aligned rectangle in world pixels (origin top-left, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Strict overlap: rectangles that only share an edge do not collide
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }
}

/// 24-bit color used for entity fills
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const RED: Rgb = Rgb(255, 0, 0);
}

/// Anything the renderer can draw as a filled rectangle
pub trait Sprite {
    fn bounds(&self) -> Rect;

    /// `None` means the sprite is currently invisible
    fn fill(&self) -> Option<Rgb>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlapping_rects() {
        let a = Rect::new(0, 0, 20, 20);
        let b = Rect::new(10, 10, 4, 10);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Rect::new(0, 0, 20, 20);
        let right = Rect::new(20, 0, 4, 10);
        let below = Rect::new(0, 20, 4, 10);
        assert!(!a.overlaps(&right));
        assert!(!a.overlaps(&below));
    }

    #[test]
    fn test_contained_rect_overlaps() {
        let outer = Rect::new(0, 0, 100, 100);
        let inner = Rect::new(40, 40, 4, 10);
        assert!(outer.overlaps(&inner));
    }

    #[test]
    fn test_negative_coordinates() {
        let a = Rect::new(-10, -10, 12, 12);
        let b = Rect::new(0, 0, 20, 20);
        assert!(a.overlaps(&b));
        assert_eq!(a.right(), 2);
        assert_eq!(a.bottom(), 2);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_overlap_is_symmetric(
                ax in -50i32..650, ay in -50i32..850, aw in 1i32..40, ah in 1i32..40,
                bx in -50i32..650, by in -50i32..850, bw in 1i32..40, bh in 1i32..40,
            ) {
                let a = Rect::new(ax, ay, aw, ah);
                let b = Rect::new(bx, by, bw, bh);
                prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
            }

            #[test]
            fn test_rect_overlaps_itself(x in -50i32..650, y in -50i32..850, w in 1i32..40, h in 1i32..40) {
                let r = Rect::new(x, y, w, h);
                prop_assert!(r.overlaps(&r));
            }
        }
    }
}
