use bitflags::bitflags;

bitflags! {
    /// Display state of a single card for one render pass.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct CardFlags: u8 {
        const SELECTED = 1 << 0;
        const FEATURED = 1 << 1;
        const CHANGED = 1 << 2;
        /// Plain rendering: no overlays, grey header, always opaque.
        const CONVENTIONAL = 1 << 3;
        const HOVERED = 1 << 4;
    }
}

impl CardFlags {
    /// Builds the flag set from the individual booleans a card receives.
    #[must_use]
    pub fn from_state(
        selected: bool,
        featured: bool,
        changed: bool,
        conventional: bool,
        hovered: bool,
    ) -> Self {
        let mut flags = Self::empty();
        flags.set(Self::SELECTED, selected);
        flags.set(Self::FEATURED, featured);
        flags.set(Self::CHANGED, changed);
        flags.set(Self::CONVENTIONAL, conventional);
        flags.set(Self::HOVERED, hovered);
        flags
    }

    /// Whether the card is drawn at full opacity.
    #[must_use]
    pub const fn is_prominent(self) -> bool {
        self.intersects(Self::CONVENTIONAL.union(Self::SELECTED).union(Self::HOVERED))
    }

    /// Whether overlays (folder, marker, indicator strip) may be drawn at all.
    #[must_use]
    pub const fn has_overlays(self) -> bool {
        !self.contains(Self::CONVENTIONAL)
    }
}
