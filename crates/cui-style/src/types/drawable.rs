//! Drawable references into the visual-asset atlas.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Nine-patch split insets, in pixels from each edge of the region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NinePatchSplits {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

/// How a drawable is stretched when painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawableKind {
    /// Plain texture region, scaled as a whole.
    Region,
    /// Nine-patch with fixed corners and stretched edges.
    NinePatch(NinePatchSplits),
}

/// A named, cheaply clonable reference to an atlas region.
///
/// The drawing layer looks the region up by name; the style system only
/// carries the reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Drawable {
    name: Arc<str>,
    kind: DrawableKind,
}

impl Drawable {
    /// A plain region drawable.
    pub fn region(name: impl AsRef<str>) -> Self {
        Self {
            name: Arc::from(name.as_ref()),
            kind: DrawableKind::Region,
        }
    }

    /// A nine-patch drawable.
    pub fn nine_patch(name: impl AsRef<str>, splits: NinePatchSplits) -> Self {
        Self {
            name: Arc::from(name.as_ref()),
            kind: DrawableKind::NinePatch(splits),
        }
    }

    /// The atlas region name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// How the region is stretched.
    pub fn kind(&self) -> DrawableKind {
        self.kind
    }

    /// Check if this is a nine-patch.
    pub fn is_nine_patch(&self) -> bool {
        matches!(self.kind, DrawableKind::NinePatch(_))
    }
}

impl fmt::Display for Drawable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A region as listed by the asset atlas.
///
/// `splits` is `[left, right, top, bottom]` when the region is a nine-patch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtlasRegion {
    pub name: String,
    pub splits: Option<[u32; 4]>,
}

impl AtlasRegion {
    /// A plain region.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            splits: None,
        }
    }

    /// A nine-patch region.
    pub fn with_splits(name: impl Into<String>, splits: [u32; 4]) -> Self {
        Self {
            name: name.into(),
            splits: Some(splits),
        }
    }
}

/// Drawables available to a stylesheet, by name.
#[derive(Debug, Clone, Default)]
pub struct DrawableAtlas {
    drawables: HashMap<String, Drawable>,
}

impl DrawableAtlas {
    /// Create an empty atlas.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build drawables for every region; regions with splits become nine-patches.
    pub fn from_regions(regions: impl IntoIterator<Item = AtlasRegion>) -> Self {
        let mut atlas = Self::new();
        for region in regions {
            let drawable = match region.splits {
                Some([left, right, top, bottom]) => Drawable::nine_patch(
                    &region.name,
                    NinePatchSplits {
                        left,
                        right,
                        top,
                        bottom,
                    },
                ),
                None => Drawable::region(&region.name),
            };
            atlas.insert(region.name, drawable);
        }
        atlas
    }

    /// Register or replace a drawable.
    pub fn insert(&mut self, name: impl Into<String>, drawable: Drawable) {
        self.drawables.insert(name.into(), drawable);
    }

    /// Look up a drawable.
    pub fn get(&self, name: &str) -> Option<&Drawable> {
        self.drawables.get(name)
    }

    /// Check if a drawable exists.
    pub fn contains(&self, name: &str) -> bool {
        self.drawables.contains_key(name)
    }

    /// Number of drawables.
    pub fn len(&self) -> usize {
        self.drawables.len()
    }

    /// Check if the atlas is empty.
    pub fn is_empty(&self) -> bool {
        self.drawables.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_regions_become_nine_patches() {
        let atlas = DrawableAtlas::from_regions([
            AtlasRegion::new("icon-play"),
            AtlasRegion::with_splits("button", [4, 4, 6, 2]),
        ]);

        assert_eq!(atlas.len(), 2);
        assert!(!atlas.get("icon-play").unwrap().is_nine_patch());

        let button = atlas.get("button").unwrap();
        assert_eq!(
            button.kind(),
            DrawableKind::NinePatch(NinePatchSplits {
                left: 4,
                right: 4,
                top: 6,
                bottom: 2
            })
        );
        assert_eq!(button.name(), "button");
        assert!(atlas.get("missing").is_none());
    }
}
