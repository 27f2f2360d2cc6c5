use std::collections::HashMap;

use crate::caps::{self, ParamValue};
use crate::consts;
use crate::driver::{Dispatcher, GlCmd, GlDriver};
use crate::error::BridgeError;
use crate::marshal::{ElementKind, NativeBuffer};

use super::format::{bytes_per_pixel, transfer_for};
use super::key::{TextureBindings, TextureKey, faces, image_target};
use super::layout::PixelLayout;
use super::record::{StorageRecord, StorageState};

/// Size of a texture image. `depth` is `1` for two-dimensional images.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Extent {
    pub width: i32,
    pub height: i32,
    pub depth: i32,
}

impl Extent {
    pub fn flat(width: i32, height: i32) -> Self {
        Self { width, height, depth: 1 }
    }

    /// Size of mip `level` of a chain starting at `self`.
    ///
    /// `depth_halves` is false for array textures, whose layer count is
    /// the same on every level.
    fn mip(self, level: i32, depth_halves: bool) -> Self {
        let shift = level.clamp(0, 31) as u32;
        let halve = |v: i32| (v >> shift).max(1);
        Self {
            width: halve(self.width),
            height: halve(self.height),
            depth: if depth_halves { halve(self.depth) } else { self.depth },
        }
    }

    /// Length of the full mip chain: `floor(log2(largest dimension)) + 1`.
    fn mip_levels(self, depth_halves: bool) -> i32 {
        let depth = if depth_halves { self.depth } else { 1 };
        let largest = self.width.max(self.height).max(depth).max(1);
        (u32::BITS - largest.leading_zeros()) as i32
    }

    /// Whether an image of this size fits the advertised limits of `target`.
    fn within_limits(self, target: u32) -> bool {
        let limit = |pname| match caps::parameter(pname) {
            ParamValue::Int(v) => v,
            _ => 0,
        };
        let (side, depth) = match target {
            consts::TEXTURE_3D => (limit(consts::MAX_3D_TEXTURE_SIZE), limit(consts::MAX_3D_TEXTURE_SIZE)),
            consts::TEXTURE_2D_ARRAY => (limit(consts::MAX_TEXTURE_SIZE), limit(consts::MAX_ARRAY_TEXTURE_LAYERS)),
            consts::TEXTURE_CUBE_MAP => (limit(consts::MAX_CUBE_MAP_TEXTURE_SIZE), 1),
            _ => (limit(consts::MAX_TEXTURE_SIZE), 1),
        };
        self.width <= side && self.height <= side && self.depth <= depth
    }
}

/// A mutable image definition (`texImage2D`, `texImage3D`, `copyTexImage2D`,
/// compressed images).
#[derive(Debug, Clone, PartialEq)]
pub struct ImageRequest {
    pub key: TextureKey,
    pub extent: Extent,
    pub internal_format: u32,
    /// Driver call defining the image, pixel data included.
    pub cmd: GlCmd,
}

/// An immutable storage definition (`texStorage2D`, `texStorage3D`).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct StorageRequest {
    pub texture: u32,
    /// Bind target, e.g. `TEXTURE_2D` or `TEXTURE_CUBE_MAP`.
    pub target: u32,
    pub levels: i32,
    pub internal_format: u32,
    pub extent: Extent,
    /// Issued as `texStorage3D`.
    pub volumetric: bool,
}

/// A sub-region update (`texSubImage2D`, `texSubImage3D`).
#[derive(Debug, Clone, PartialEq)]
pub struct SubImageRequest {
    pub key: TextureKey,
    /// `[x, y, z]` offset of the region.
    pub offset: [i32; 3],
    pub extent: Extent,
    pub format: u32,
    pub ty: u32,
    /// Internal format used if the image has to be defined first.
    pub internal_format: u32,
    pub volumetric: bool,
    /// Unpack layout in effect, which the zero fill of an implicit
    /// definition has to satisfy.
    pub unpack: PixelLayout,
    /// Driver call uploading the region.
    pub cmd: GlCmd,
}

/// Per-image allocation state plus the texture bindings used to key it.
///
/// Rules enforced:
/// - immutable images are never redefined, only updated
/// - a failed immutable allocation falls back to one mutable definition per image
/// - a sub-region update on an undefined image defines it zero-filled first
/// - stale driver errors are drained before an allocation is checked
#[derive(Debug)]
pub struct TextureStorage {
    records: HashMap<TextureKey, StorageRecord>,
    bindings: TextureBindings,
    drain_limit: u32,
}

impl TextureStorage {
    pub fn new(drain_limit: u32) -> Self {
        Self {
            records: HashMap::new(),
            bindings: TextureBindings::new(),
            drain_limit,
        }
    }

    pub fn bindings(&self) -> &TextureBindings {
        &self.bindings
    }

    pub fn bindings_mut(&mut self) -> &mut TextureBindings {
        &mut self.bindings
    }

    pub fn record(&self, key: &TextureKey) -> Option<&StorageRecord> {
        self.records.get(key)
    }

    pub fn state(&self, key: &TextureKey) -> StorageState {
        self.records
            .get(key)
            .map_or(StorageState::Unallocated, StorageRecord::state)
    }

    /// Drops every record of a deleted texture.
    pub fn forget_texture(&mut self, texture: u32) {
        self.records.retain(|key, _| key.texture != texture);
        self.bindings.forget(texture);
    }

    // ── mutable definitions ──────────────────────────────────────────────

    /// Defines a mutable image unless it is immutable already.
    ///
    /// Returns whether the image ended up allocated.
    pub fn define<D: GlDriver>(&mut self, gl: &mut Dispatcher<D>, req: ImageRequest) -> bool {
        if self.state(&req.key) == StorageState::Immutable {
            log::debug!(
                "ignoring {} on immutable texture {} level {}",
                req.cmd.name(),
                req.key.texture,
                req.key.level
            );
            return false;
        }

        gl.drain_errors(self.drain_limit);
        gl.call(req.cmd);
        let code = gl.error();
        let allocated = code == consts::NO_ERROR;
        if !allocated {
            log::warn!(
                "texture {} level {} definition failed with GL error 0x{code:04X}",
                req.key.texture,
                req.key.level
            );
        }
        self.records.insert(
            req.key,
            StorageRecord {
                width: req.extent.width,
                height: req.extent.height,
                depth: req.extent.depth,
                internal_format: req.internal_format,
                immutable: false,
                allocated,
            },
        );
        allocated
    }

    // ── immutable storage ────────────────────────────────────────────────

    /// Allocates immutable storage for every level (and face) of a texture.
    ///
    /// A driver error or a missing storage entry point triggers exactly one
    /// mutable definition per image. Only when that also fails is an error
    /// returned.
    pub fn allocate<D: GlDriver>(
        &mut self,
        gl: &mut Dispatcher<D>,
        req: StorageRequest,
    ) -> Result<(), BridgeError> {
        let depth_halves = req.target == consts::TEXTURE_3D;
        let full_chain = req.extent.mip_levels(depth_halves);
        if req.levels > full_chain {
            log::debug!(
                "texture {}: {} levels requested, the mip chain has {full_chain}",
                req.texture,
                req.levels
            );
        }
        let req = StorageRequest {
            levels: req.levels.clamp(1, full_chain),
            ..req
        };
        let keys: Vec<TextureKey> = (0..req.levels)
            .flat_map(|level| {
                faces(req.target).into_iter().map(move |face| TextureKey {
                    texture: req.texture,
                    target: req.target,
                    level,
                    face,
                })
            })
            .collect();

        if keys.iter().any(|k| self.state(k) == StorageState::Immutable) {
            log::debug!(
                "texture {} already has immutable storage; ignoring reallocation",
                req.texture
            );
            return Ok(());
        }

        gl.drain_errors(self.drain_limit);
        let cmd = if req.volumetric {
            GlCmd::TexStorage3D {
                target: req.target,
                levels: req.levels,
                internal_format: req.internal_format,
                width: req.extent.width,
                height: req.extent.height,
                depth: req.extent.depth,
            }
        } else {
            GlCmd::TexStorage2D {
                target: req.target,
                levels: req.levels,
                internal_format: req.internal_format,
                width: req.extent.width,
                height: req.extent.height,
            }
        };

        let failure = match gl.submit(cmd) {
            Ok(_) => match gl.error() {
                consts::NO_ERROR => None,
                code => Some(format!("GL error 0x{code:04X}")),
            },
            Err(err) => Some(err.to_string()),
        };

        let Some(reason) = failure else {
            for key in keys {
                let extent = req.extent.mip(key.level, depth_halves);
                self.records.insert(key, record(extent, req.internal_format, true, true));
            }
            return Ok(());
        };

        log::warn!(
            "immutable storage for texture {} failed ({reason}); using mutable storage",
            req.texture
        );
        gl.drain_errors(self.drain_limit);

        let (format, ty) = transfer_for(req.internal_format);
        let mut first_failure = None;
        for key in keys {
            let extent = req.extent.mip(key.level, depth_halves);
            let target = image_target(key.target, key.face);
            let cmd = if req.volumetric {
                GlCmd::TexImage3D {
                    target,
                    level: key.level,
                    internal_format: req.internal_format as i32,
                    width: extent.width,
                    height: extent.height,
                    depth: extent.depth,
                    border: 0,
                    format,
                    ty,
                    pixels: None,
                }
            } else {
                GlCmd::TexImage2D {
                    target,
                    level: key.level,
                    internal_format: req.internal_format as i32,
                    width: extent.width,
                    height: extent.height,
                    border: 0,
                    format,
                    ty,
                    pixels: None,
                }
            };
            gl.call(cmd);
            let code = gl.error();
            let allocated = code == consts::NO_ERROR;
            if !allocated && first_failure.is_none() {
                first_failure = Some(BridgeError::AllocationFailed {
                    target,
                    level: key.level,
                    code,
                });
            }
            self.records.insert(key, record(extent, req.internal_format, false, allocated));
        }

        match first_failure {
            Some(err) => {
                log::warn!("mutable fallback for texture {} failed: {err}", req.texture);
                Err(err)
            }
            None => Ok(()),
        }
    }

    // ── sub-region updates ───────────────────────────────────────────────

    /// Uploads a sub-region, defining the image zero-filled first if needed.
    ///
    /// Returns whether the update was issued. It is skipped when the
    /// implicit definition fails.
    pub fn update<D: GlDriver>(&mut self, gl: &mut Dispatcher<D>, req: SubImageRequest) -> bool {
        gl.drain_errors(self.drain_limit);

        if self.state(&req.key) == StorageState::Unallocated && !self.define_zeroed(gl, &req) {
            log::warn!(
                "skipping {} on texture {} level {}: image could not be defined",
                req.cmd.name(),
                req.key.texture,
                req.key.level
            );
            return false;
        }

        gl.call(req.cmd);
        true
    }

    fn define_zeroed<D: GlDriver>(&mut self, gl: &mut Dispatcher<D>, req: &SubImageRequest) -> bool {
        // The image must at least cover the region being written.
        let extent = Extent {
            width: req.offset[0].saturating_add(req.extent.width).max(1),
            height: req.offset[1].saturating_add(req.extent.height).max(1),
            depth: if req.volumetric {
                req.offset[2].saturating_add(req.extent.depth).max(1)
            } else {
                1
            },
        };
        let zeros = extent
            .within_limits(req.key.target)
            .then(|| zeroed_pixels(extent, req.format, req.ty, req.unpack))
            .flatten();
        let Some(zeros) = zeros else {
            log::warn!(
                "texture {} level {}: a {}x{}x{} image exceeds the texture size limits",
                req.key.texture,
                req.key.level,
                extent.width,
                extent.height,
                extent.depth
            );
            return false;
        };
        let target = image_target(req.key.target, req.key.face);

        let cmd = if req.volumetric {
            GlCmd::TexImage3D {
                target,
                level: req.key.level,
                internal_format: req.internal_format as i32,
                width: extent.width,
                height: extent.height,
                depth: extent.depth,
                border: 0,
                format: req.format,
                ty: req.ty,
                pixels: Some(zeros),
            }
        } else {
            GlCmd::TexImage2D {
                target,
                level: req.key.level,
                internal_format: req.internal_format as i32,
                width: extent.width,
                height: extent.height,
                border: 0,
                format: req.format,
                ty: req.ty,
                pixels: Some(zeros),
            }
        };

        gl.call(cmd);
        let code = gl.error();
        let allocated = code == consts::NO_ERROR;
        if !allocated {
            log::warn!(
                "implicit definition of texture {} level {} failed with GL error 0x{code:04X}",
                req.key.texture,
                req.key.level
            );
        }
        self.records
            .insert(req.key, record(extent, req.internal_format, false, allocated));
        allocated
    }
}

fn record(extent: Extent, internal_format: u32, immutable: bool, allocated: bool) -> StorageRecord {
    StorageRecord {
        width: extent.width,
        height: extent.height,
        depth: extent.depth,
        internal_format,
        immutable,
        allocated,
    }
}

/// Zero bytes for an image of `extent` laid out as `unpack` says, or `None`
/// when the size overflows.
fn zeroed_pixels(extent: Extent, format: u32, ty: u32, unpack: PixelLayout) -> Option<NativeBuffer> {
    let len = unpack.required_bytes(extent, bytes_per_pixel(format, ty))?;
    Some(NativeBuffer::zeroed(ElementKind::Byte, len))
}
