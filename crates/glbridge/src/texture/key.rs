use std::collections::HashMap;

use crate::consts;

/// Identity of one texture image.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct TextureKey {
    /// Texture object name; `0` is the default texture of the target.
    pub texture: u32,
    /// Bind target (`TEXTURE_2D`, `TEXTURE_CUBE_MAP`, `TEXTURE_3D`...).
    pub target: u32,
    pub level: i32,
    /// Cube face index `0..6` for cube map images.
    pub face: Option<u8>,
}

/// Splits an image target into its bind target and cube face.
///
/// `TEXTURE_CUBE_MAP_POSITIVE_X..=NEGATIVE_Z` map to `TEXTURE_CUBE_MAP`
/// with face `0..6`; every other target is its own bind target.
pub fn split_image_target(target: u32) -> (u32, Option<u8>) {
    if (consts::TEXTURE_CUBE_MAP_POSITIVE_X..=consts::TEXTURE_CUBE_MAP_NEGATIVE_Z).contains(&target) {
        (
            consts::TEXTURE_CUBE_MAP,
            Some((target - consts::TEXTURE_CUBE_MAP_POSITIVE_X) as u8),
        )
    } else {
        (target, None)
    }
}

/// Inverse of [`split_image_target`].
pub fn image_target(target: u32, face: Option<u8>) -> u32 {
    match face {
        Some(face) => consts::TEXTURE_CUBE_MAP_POSITIVE_X + u32::from(face),
        None => target,
    }
}

/// Images making up one level of a bind target.
pub fn faces(target: u32) -> Vec<Option<u8>> {
    if target == consts::TEXTURE_CUBE_MAP {
        (0..6).map(Some).collect()
    } else {
        vec![None]
    }
}

/// Texture bound to each (unit, target) pair.
///
/// Mirrors the driver's binding state so texture images can be keyed by
/// object rather than by bind point.
#[derive(Debug, Default, Clone)]
pub struct TextureBindings {
    active_unit: u32,
    bound: HashMap<(u32, u32), u32>,
}

impl TextureBindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects the unit for an `activeTexture(TEXTURE0 + n)` call.
    pub fn set_active(&mut self, texture_enum: u32) {
        self.active_unit = texture_enum.saturating_sub(consts::TEXTURE0);
    }

    pub fn active_unit(&self) -> u32 {
        self.active_unit
    }

    pub fn bind(&mut self, target: u32, texture: u32) {
        if texture == 0 {
            self.bound.remove(&(self.active_unit, target));
        } else {
            self.bound.insert((self.active_unit, target), texture);
        }
    }

    /// Texture bound to `target` on the active unit.
    pub fn bound(&self, target: u32) -> u32 {
        self.bound
            .get(&(self.active_unit, target))
            .copied()
            .unwrap_or(0)
    }

    /// Unbinds `texture` from every unit, as deletion does.
    pub fn forget(&mut self, texture: u32) {
        self.bound.retain(|_, t| *t != texture);
    }

    /// Key of the image `target`/`level` of the texture bound on the active unit.
    pub fn key(&self, image_target: u32, level: i32) -> TextureKey {
        let (target, face) = split_image_target(image_target);
        TextureKey {
            texture: self.bound(target),
            target,
            level,
            face,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cube_faces_split_and_join() {
        let (target, face) = split_image_target(consts::TEXTURE_CUBE_MAP_POSITIVE_X + 3);
        assert_eq!(target, consts::TEXTURE_CUBE_MAP);
        assert_eq!(face, Some(3));
        assert_eq!(image_target(target, face), consts::TEXTURE_CUBE_MAP_POSITIVE_X + 3);
        assert_eq!(split_image_target(consts::TEXTURE_2D), (consts::TEXTURE_2D, None));
    }

    #[test]
    fn cube_maps_have_six_faces() {
        assert_eq!(faces(consts::TEXTURE_CUBE_MAP).len(), 6);
        assert_eq!(faces(consts::TEXTURE_2D), vec![None]);
    }

    #[test]
    fn bindings_are_per_unit() {
        let mut b = TextureBindings::new();
        b.bind(consts::TEXTURE_2D, 5);
        b.set_active(consts::TEXTURE0 + 1);
        assert_eq!(b.bound(consts::TEXTURE_2D), 0);
        b.bind(consts::TEXTURE_2D, 6);
        b.set_active(consts::TEXTURE0);
        assert_eq!(b.key(consts::TEXTURE_2D, 1).texture, 5);
    }

    #[test]
    fn forgetting_unbinds_everywhere() {
        let mut b = TextureBindings::new();
        b.bind(consts::TEXTURE_CUBE_MAP, 9);
        b.set_active(consts::TEXTURE0 + 4);
        b.bind(consts::TEXTURE_2D, 9);
        b.forget(9);
        assert_eq!(b.bound(consts::TEXTURE_2D), 0);
        b.set_active(consts::TEXTURE0);
        assert_eq!(b.bound(consts::TEXTURE_CUBE_MAP), 0);
    }
}
