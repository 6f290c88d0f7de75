/// Nesting counter for drag enter/leave pairs over the drop region and its
/// descendants. The overlay is shown exactly while the depth is positive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DragDepth {
    depth: u32,
}

impl DragDepth {
    pub fn enter(&mut self) -> bool {
        self.depth = self.depth.saturating_add(1);
        self.overlay_visible()
    }

    pub fn leave(&mut self) -> bool {
        self.depth = self.depth.saturating_sub(1);
        self.overlay_visible()
    }

    pub fn drop_reset(&mut self) {
        self.depth = 0;
    }

    #[inline]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    #[inline]
    pub fn overlay_visible(&self) -> bool {
        self.depth > 0
    }
}
