//! Texture image definitions, uploads and parameters.
//!
//! Every call that defines or writes a texture image goes through
//! [`TextureStorage`](crate::texture::TextureStorage), keyed by the texture
//! bound to the call's target on the active unit.

use crate::args::normalize::{enum_or, float, int, seq, uint};
use crate::args::{Arg, NumericSeq};
use crate::consts;
use crate::driver::{GlCmd, GlDriver};
use crate::error::BridgeError;
use crate::marshal::{ElementKind, NativeBuffer, natural_kind, write, write_natural};
use crate::texture::{
    Extent, ImageRequest, StorageRequest, SubImageRequest, UploadFormat, bytes_per_pixel,
    default_internal_format, upload_format,
};

use super::value::FLOAT_PNAMES;
use super::{ImageSource, Value, WebGl2};

/// Marshals pixel data and picks the transfer type it implies.
fn prepare(format: u32, ty: u32, pixels: Arg<'_>) -> (Option<NativeBuffer>, UploadFormat) {
    let data = seq(pixels);
    let upload = upload_format(format, ty, data.as_ref().map(natural_kind));
    (data.map(write_natural), upload)
}

/// Internal format of a definition. The caller's choice wins unless the
/// pixel data forced a different transfer type.
fn internal_for(requested: Arg<'_>, upload: &UploadFormat, requested_ty: u32) -> u32 {
    if upload.ty != requested_ty {
        upload.internal_format
    } else {
        enum_or(requested, upload.internal_format)
    }
}

fn image_bytes(source: &ImageSource<'_>) -> NativeBuffer {
    write(NumericSeq::Uint8(&source.rgba()), ElementKind::Byte)
}

fn compressed_bytes(data: Arg<'_>) -> NativeBuffer {
    seq(data).map_or_else(
        || NativeBuffer::zeroed(ElementKind::Byte, 0),
        |bytes| write(bytes, ElementKind::Byte),
    )
}

impl<D: GlDriver> WebGl2<D> {
    /// Source-API typed arrays are tightly packed.
    fn tighten_unpack(&mut self, pixels: Option<&NativeBuffer>) {
        let narrow = matches!(
            pixels.map(NativeBuffer::kind),
            Some(ElementKind::Byte | ElementKind::Short)
        );
        if self.config.tight_unpack_alignment && narrow {
            self.pixel_store.set(consts::UNPACK_ALIGNMENT, 1);
            self.gl.call(GlCmd::PixelStorei {
                pname: consts::UNPACK_ALIGNMENT,
                param: 1,
            });
        }
    }

    /// Whether `pixels` holds every byte the driver reads for the region
    /// under the current unpack layout.
    fn covers_upload(&self, call: &str, extent: Extent, format: u32, ty: u32, pixels: &NativeBuffer) -> bool {
        let covered = self
            .pixel_store
            .unpack
            .covers(extent, bytes_per_pixel(format, ty), pixels.byte_len());
        if !covered {
            log::warn!(
                "{call}: {} bytes of pixel data are too few for a {}x{}x{} region, skipped",
                pixels.byte_len(),
                extent.width,
                extent.height,
                extent.depth
            );
        }
        covered
    }

    fn define_image(&mut self, target: u32, level: i32, extent: Extent, internal_format: u32, cmd: GlCmd) {
        let req = ImageRequest {
            key: self.textures.bindings().key(target, level),
            extent,
            internal_format,
            cmd,
        };
        self.textures.define(&mut self.gl, req);
    }

    fn update_image(&mut self, target: u32, level: i32, region: ([i32; 3], Extent), upload: UploadFormat, cmd: GlCmd) {
        let volumetric = matches!(
            cmd,
            GlCmd::TexSubImage3D { .. } | GlCmd::CopyTexSubImage3D { .. } | GlCmd::CompressedTexSubImage3D { .. }
        );
        let req = SubImageRequest {
            key: self.textures.bindings().key(target, level),
            offset: region.0,
            extent: region.1,
            format: upload.format,
            ty: upload.ty,
            internal_format: upload.internal_format,
            volumetric,
            unpack: self.pixel_store.unpack,
            cmd,
        };
        self.textures.update(&mut self.gl, req);
    }

    // ── mutable definitions ──────────────────────────────────────────────

    /// Defaults: `TEXTURE_2D`, level `0`, `RGBA`, `UNSIGNED_BYTE`, and a
    /// sized internal format matching format and type.
    ///
    /// `Uint16` pixel data is uploaded as half floats into a 16F format.
    /// Ignored when the image has immutable storage.
    #[allow(clippy::too_many_arguments)]
    pub fn tex_image_2d(
        &mut self,
        target: Arg<'_>,
        level: Arg<'_>,
        internal_format: Arg<'_>,
        width: Arg<'_>,
        height: Arg<'_>,
        border: Arg<'_>,
        format: Arg<'_>,
        ty: Arg<'_>,
        pixels: Arg<'_>,
    ) {
        let target = enum_or(target, consts::TEXTURE_2D);
        let level = int(level, 0);
        let (width, height) = (int(width, 0), int(height, 0));
        let format = enum_or(format, consts::RGBA);
        let requested_ty = enum_or(ty, consts::UNSIGNED_BYTE);
        let (pixels, upload) = prepare(format, requested_ty, pixels);
        let internal_format = internal_for(internal_format, &upload, requested_ty);

        self.tighten_unpack(pixels.as_ref());
        if pixels
            .as_ref()
            .is_some_and(|data| !self.covers_upload("texImage2D", Extent::flat(width, height), format, upload.ty, data))
        {
            return;
        }
        let cmd = GlCmd::TexImage2D {
            target,
            level,
            internal_format: internal_format as i32,
            width,
            height,
            border: int(border, 0),
            format,
            ty: upload.ty,
            pixels,
        };
        self.define_image(target, level, Extent::flat(width, height), internal_format, cmd);
    }

    /// Image-source form of `texImage2D`. The image is always transferred
    /// as `RGBA`/`UNSIGNED_BYTE`; `format` only picks the default internal
    /// format.
    pub fn tex_image_2d_source(
        &mut self,
        target: Arg<'_>,
        level: Arg<'_>,
        internal_format: Arg<'_>,
        format: Arg<'_>,
        source: &ImageSource<'_>,
    ) {
        let target = enum_or(target, consts::TEXTURE_2D);
        let level = int(level, 0);
        let internal_format = enum_or(
            internal_format,
            default_internal_format(enum_or(format, consts::RGBA)),
        );
        let (width, height) = (source.width as i32, source.height as i32);
        let pixels = image_bytes(source);

        self.tighten_unpack(Some(&pixels));
        if !self.covers_upload("texImage2D", Extent::flat(width, height), consts::RGBA, consts::UNSIGNED_BYTE, &pixels) {
            return;
        }
        let cmd = GlCmd::TexImage2D {
            target,
            level,
            internal_format: internal_format as i32,
            width,
            height,
            border: 0,
            format: consts::RGBA,
            ty: consts::UNSIGNED_BYTE,
            pixels: Some(pixels),
        };
        self.define_image(target, level, Extent::flat(width, height), internal_format, cmd);
    }

    /// Defaults: `TEXTURE_3D`, otherwise as [`Self::tex_image_2d`].
    #[allow(clippy::too_many_arguments)]
    pub fn tex_image_3d(
        &mut self,
        target: Arg<'_>,
        level: Arg<'_>,
        internal_format: Arg<'_>,
        width: Arg<'_>,
        height: Arg<'_>,
        depth: Arg<'_>,
        border: Arg<'_>,
        format: Arg<'_>,
        ty: Arg<'_>,
        pixels: Arg<'_>,
    ) {
        let target = enum_or(target, consts::TEXTURE_3D);
        let level = int(level, 0);
        let extent = Extent {
            width: int(width, 0),
            height: int(height, 0),
            depth: int(depth, 0),
        };
        let format = enum_or(format, consts::RGBA);
        let requested_ty = enum_or(ty, consts::UNSIGNED_BYTE);
        let (pixels, upload) = prepare(format, requested_ty, pixels);
        let internal_format = internal_for(internal_format, &upload, requested_ty);

        self.tighten_unpack(pixels.as_ref());
        if pixels
            .as_ref()
            .is_some_and(|data| !self.covers_upload("texImage3D", extent, format, upload.ty, data))
        {
            return;
        }
        let cmd = GlCmd::TexImage3D {
            target,
            level,
            internal_format: internal_format as i32,
            width: extent.width,
            height: extent.height,
            depth: extent.depth,
            border: int(border, 0),
            format,
            ty: upload.ty,
            pixels,
        };
        self.define_image(target, level, extent, internal_format, cmd);
    }

    /// Defaults: internal format `RGBA8`.
    #[allow(clippy::too_many_arguments)]
    pub fn copy_tex_image_2d(
        &mut self,
        target: Arg<'_>,
        level: Arg<'_>,
        internal_format: Arg<'_>,
        x: Arg<'_>,
        y: Arg<'_>,
        width: Arg<'_>,
        height: Arg<'_>,
        border: Arg<'_>,
    ) {
        let target = enum_or(target, consts::TEXTURE_2D);
        let level = int(level, 0);
        let internal_format = enum_or(internal_format, consts::RGBA8);
        let (width, height) = (int(width, 0), int(height, 0));
        let cmd = GlCmd::CopyTexImage2D {
            target,
            level,
            internal_format,
            x: int(x, 0),
            y: int(y, 0),
            width,
            height,
            border: int(border, 0),
        };
        self.define_image(target, level, Extent::flat(width, height), internal_format, cmd);
    }

    #[allow(clippy::too_many_arguments)]
    pub fn compressed_tex_image_2d(
        &mut self,
        target: Arg<'_>,
        level: Arg<'_>,
        internal_format: Arg<'_>,
        width: Arg<'_>,
        height: Arg<'_>,
        border: Arg<'_>,
        data: Arg<'_>,
    ) {
        let target = enum_or(target, consts::TEXTURE_2D);
        let level = int(level, 0);
        let internal_format = uint(internal_format, 0);
        let (width, height) = (int(width, 0), int(height, 0));
        let cmd = GlCmd::CompressedTexImage2D {
            target,
            level,
            internal_format,
            width,
            height,
            border: int(border, 0),
            data: compressed_bytes(data),
        };
        self.define_image(target, level, Extent::flat(width, height), internal_format, cmd);
    }

    #[allow(clippy::too_many_arguments)]
    pub fn compressed_tex_image_3d(
        &mut self,
        target: Arg<'_>,
        level: Arg<'_>,
        internal_format: Arg<'_>,
        width: Arg<'_>,
        height: Arg<'_>,
        depth: Arg<'_>,
        border: Arg<'_>,
        data: Arg<'_>,
    ) {
        let target = enum_or(target, consts::TEXTURE_2D_ARRAY);
        let level = int(level, 0);
        let internal_format = uint(internal_format, 0);
        let extent = Extent {
            width: int(width, 0),
            height: int(height, 0),
            depth: int(depth, 0),
        };
        let cmd = GlCmd::CompressedTexImage3D {
            target,
            level,
            internal_format,
            width: extent.width,
            height: extent.height,
            depth: extent.depth,
            border: int(border, 0),
            data: compressed_bytes(data),
        };
        self.define_image(target, level, extent, internal_format, cmd);
    }

    // ── immutable storage ────────────────────────────────────────────────

    /// Defaults: one level, `RGBA8`.
    ///
    /// Falls back to one mutable definition per image when the driver has
    /// no immutable storage or rejects it. Only a failed fallback is an
    /// error.
    pub fn tex_storage_2d(
        &mut self,
        target: Arg<'_>,
        levels: Arg<'_>,
        internal_format: Arg<'_>,
        width: Arg<'_>,
        height: Arg<'_>,
    ) -> Result<(), BridgeError> {
        let target = enum_or(target, consts::TEXTURE_2D);
        let req = StorageRequest {
            texture: self.textures.bindings().bound(target),
            target,
            levels: int(levels, 1).max(1),
            internal_format: enum_or(internal_format, consts::RGBA8),
            extent: Extent::flat(int(width, 0), int(height, 0)),
            volumetric: false,
        };
        self.textures.allocate(&mut self.gl, req)
    }

    /// Defaults: `TEXTURE_3D`, one level, `RGBA8`.
    pub fn tex_storage_3d(
        &mut self,
        target: Arg<'_>,
        levels: Arg<'_>,
        internal_format: Arg<'_>,
        width: Arg<'_>,
        height: Arg<'_>,
        depth: Arg<'_>,
    ) -> Result<(), BridgeError> {
        let target = enum_or(target, consts::TEXTURE_3D);
        let req = StorageRequest {
            texture: self.textures.bindings().bound(target),
            target,
            levels: int(levels, 1).max(1),
            internal_format: enum_or(internal_format, consts::RGBA8),
            extent: Extent {
                width: int(width, 0),
                height: int(height, 0),
                depth: int(depth, 0),
            },
            volumetric: true,
        };
        self.textures.allocate(&mut self.gl, req)
    }

    // ── sub-region updates ───────────────────────────────────────────────

    /// Writes a region of an image, defining the image zero-filled first
    /// if it was never allocated. Without pixel data nothing is written.
    #[allow(clippy::too_many_arguments)]
    pub fn tex_sub_image_2d(
        &mut self,
        target: Arg<'_>,
        level: Arg<'_>,
        xoffset: Arg<'_>,
        yoffset: Arg<'_>,
        width: Arg<'_>,
        height: Arg<'_>,
        format: Arg<'_>,
        ty: Arg<'_>,
        pixels: Arg<'_>,
    ) {
        let target = enum_or(target, consts::TEXTURE_2D);
        let level = int(level, 0);
        let format = enum_or(format, consts::RGBA);
        let (Some(pixels), upload) = prepare(format, enum_or(ty, consts::UNSIGNED_BYTE), pixels) else {
            log::debug!("texSubImage2D without pixel data ignored");
            return;
        };
        let (x, y) = (int(xoffset, 0), int(yoffset, 0));
        let extent = Extent::flat(int(width, 0), int(height, 0));

        self.tighten_unpack(Some(&pixels));
        if !self.covers_upload("texSubImage2D", extent, format, upload.ty, &pixels) {
            return;
        }
        let cmd = GlCmd::TexSubImage2D {
            target,
            level,
            x,
            y,
            width: extent.width,
            height: extent.height,
            format,
            ty: upload.ty,
            pixels,
        };
        self.update_image(target, level, ([x, y, 0], extent), upload, cmd);
    }

    /// Image-source form of `texSubImage2D`, transferred as `RGBA`/`UNSIGNED_BYTE`.
    pub fn tex_sub_image_2d_source(
        &mut self,
        target: Arg<'_>,
        level: Arg<'_>,
        xoffset: Arg<'_>,
        yoffset: Arg<'_>,
        source: &ImageSource<'_>,
    ) {
        let target = enum_or(target, consts::TEXTURE_2D);
        let level = int(level, 0);
        let (x, y) = (int(xoffset, 0), int(yoffset, 0));
        let extent = Extent::flat(source.width as i32, source.height as i32);
        let pixels = image_bytes(source);
        let upload = upload_format(consts::RGBA, consts::UNSIGNED_BYTE, Some(ElementKind::Byte));

        self.tighten_unpack(Some(&pixels));
        if !self.covers_upload("texSubImage2D", extent, consts::RGBA, consts::UNSIGNED_BYTE, &pixels) {
            return;
        }
        let cmd = GlCmd::TexSubImage2D {
            target,
            level,
            x,
            y,
            width: extent.width,
            height: extent.height,
            format: consts::RGBA,
            ty: consts::UNSIGNED_BYTE,
            pixels,
        };
        self.update_image(target, level, ([x, y, 0], extent), upload, cmd);
    }

    #[allow(clippy::too_many_arguments)]
    pub fn tex_sub_image_3d(
        &mut self,
        target: Arg<'_>,
        level: Arg<'_>,
        xoffset: Arg<'_>,
        yoffset: Arg<'_>,
        zoffset: Arg<'_>,
        width: Arg<'_>,
        height: Arg<'_>,
        depth: Arg<'_>,
        format: Arg<'_>,
        ty: Arg<'_>,
        pixels: Arg<'_>,
    ) {
        let target = enum_or(target, consts::TEXTURE_3D);
        let level = int(level, 0);
        let format = enum_or(format, consts::RGBA);
        let (Some(pixels), upload) = prepare(format, enum_or(ty, consts::UNSIGNED_BYTE), pixels) else {
            log::debug!("texSubImage3D without pixel data ignored");
            return;
        };
        let offset = [int(xoffset, 0), int(yoffset, 0), int(zoffset, 0)];
        let extent = Extent {
            width: int(width, 0),
            height: int(height, 0),
            depth: int(depth, 0),
        };

        self.tighten_unpack(Some(&pixels));
        if !self.covers_upload("texSubImage3D", extent, format, upload.ty, &pixels) {
            return;
        }
        let cmd = GlCmd::TexSubImage3D {
            target,
            level,
            x: offset[0],
            y: offset[1],
            z: offset[2],
            width: extent.width,
            height: extent.height,
            depth: extent.depth,
            format,
            ty: upload.ty,
            pixels,
        };
        self.update_image(target, level, (offset, extent), upload, cmd);
    }

    /// Copies from the read framebuffer. An undefined image is defined as
    /// zero-filled `RGBA8` first.
    #[allow(clippy::too_many_arguments)]
    pub fn copy_tex_sub_image_2d(
        &mut self,
        target: Arg<'_>,
        level: Arg<'_>,
        xoffset: Arg<'_>,
        yoffset: Arg<'_>,
        x: Arg<'_>,
        y: Arg<'_>,
        width: Arg<'_>,
        height: Arg<'_>,
    ) {
        let target = enum_or(target, consts::TEXTURE_2D);
        let level = int(level, 0);
        let (xoffset, yoffset) = (int(xoffset, 0), int(yoffset, 0));
        let extent = Extent::flat(int(width, 0), int(height, 0));
        let cmd = GlCmd::CopyTexSubImage2D {
            target,
            level,
            xoffset,
            yoffset,
            x: int(x, 0),
            y: int(y, 0),
            width: extent.width,
            height: extent.height,
        };
        let upload = upload_format(consts::RGBA, consts::UNSIGNED_BYTE, None);
        self.update_image(target, level, ([xoffset, yoffset, 0], extent), upload, cmd);
    }

    #[allow(clippy::too_many_arguments)]
    pub fn copy_tex_sub_image_3d(
        &mut self,
        target: Arg<'_>,
        level: Arg<'_>,
        xoffset: Arg<'_>,
        yoffset: Arg<'_>,
        zoffset: Arg<'_>,
        x: Arg<'_>,
        y: Arg<'_>,
        width: Arg<'_>,
        height: Arg<'_>,
    ) {
        let target = enum_or(target, consts::TEXTURE_3D);
        let level = int(level, 0);
        let offset = [int(xoffset, 0), int(yoffset, 0), int(zoffset, 0)];
        let extent = Extent::flat(int(width, 0), int(height, 0));
        let cmd = GlCmd::CopyTexSubImage3D {
            target,
            level,
            xoffset: offset[0],
            yoffset: offset[1],
            zoffset: offset[2],
            x: int(x, 0),
            y: int(y, 0),
            width: extent.width,
            height: extent.height,
        };
        let upload = upload_format(consts::RGBA, consts::UNSIGNED_BYTE, None);
        self.update_image(target, level, (offset, extent), upload, cmd);
    }

    /// An undefined image is defined with the compressed `format` first,
    /// letting the driver compress the zero fill.
    #[allow(clippy::too_many_arguments)]
    pub fn compressed_tex_sub_image_2d(
        &mut self,
        target: Arg<'_>,
        level: Arg<'_>,
        xoffset: Arg<'_>,
        yoffset: Arg<'_>,
        width: Arg<'_>,
        height: Arg<'_>,
        format: Arg<'_>,
        data: Arg<'_>,
    ) {
        let target = enum_or(target, consts::TEXTURE_2D);
        let level = int(level, 0);
        let format = uint(format, 0);
        let (x, y) = (int(xoffset, 0), int(yoffset, 0));
        let extent = Extent::flat(int(width, 0), int(height, 0));
        let cmd = GlCmd::CompressedTexSubImage2D {
            target,
            level,
            x,
            y,
            width: extent.width,
            height: extent.height,
            format,
            data: compressed_bytes(data),
        };
        let upload = UploadFormat {
            internal_format: format,
            format: consts::RGBA,
            ty: consts::UNSIGNED_BYTE,
        };
        self.update_image(target, level, ([x, y, 0], extent), upload, cmd);
    }

    #[allow(clippy::too_many_arguments)]
    pub fn compressed_tex_sub_image_3d(
        &mut self,
        target: Arg<'_>,
        level: Arg<'_>,
        xoffset: Arg<'_>,
        yoffset: Arg<'_>,
        zoffset: Arg<'_>,
        width: Arg<'_>,
        height: Arg<'_>,
        depth: Arg<'_>,
        format: Arg<'_>,
        data: Arg<'_>,
    ) {
        let target = enum_or(target, consts::TEXTURE_2D_ARRAY);
        let level = int(level, 0);
        let format = uint(format, 0);
        let offset = [int(xoffset, 0), int(yoffset, 0), int(zoffset, 0)];
        let extent = Extent {
            width: int(width, 0),
            height: int(height, 0),
            depth: int(depth, 0),
        };
        let cmd = GlCmd::CompressedTexSubImage3D {
            target,
            level,
            x: offset[0],
            y: offset[1],
            z: offset[2],
            width: extent.width,
            height: extent.height,
            depth: extent.depth,
            format,
            data: compressed_bytes(data),
        };
        let upload = UploadFormat {
            internal_format: format,
            format: consts::RGBA,
            ty: consts::UNSIGNED_BYTE,
        };
        self.update_image(target, level, (offset, extent), upload, cmd);
    }

    // ── parameters ───────────────────────────────────────────────────────

    pub fn tex_parameteri(&mut self, target: Arg<'_>, pname: Arg<'_>, param: Arg<'_>) {
        self.gl.call(GlCmd::TexParameterI {
            target: enum_or(target, consts::TEXTURE_2D),
            pname: uint(pname, 0),
            param: int(param, 0),
        });
    }

    pub fn tex_parameterf(&mut self, target: Arg<'_>, pname: Arg<'_>, param: Arg<'_>) {
        self.gl.call(GlCmd::TexParameterF {
            target: enum_or(target, consts::TEXTURE_2D),
            pname: uint(pname, 0),
            param: float(param, 0.0),
        });
    }

    /// LOD and anisotropy parameters are read as floats, everything else as
    /// integers.
    pub fn get_tex_parameter(&mut self, target: Arg<'_>, pname: Arg<'_>) -> Value {
        let target = enum_or(target, consts::TEXTURE_2D);
        let pname = uint(pname, 0);
        let cmd = if FLOAT_PNAMES.contains(&pname) {
            GlCmd::GetTexParameterF { target, pname }
        } else {
            GlCmd::GetTexParameterI { target, pname }
        };
        Value::from_reply(pname, self.gl.call(cmd))
    }

    pub fn generate_mipmap(&mut self, target: Arg<'_>) {
        self.gl.call(GlCmd::GenerateMipmap(enum_or(target, consts::TEXTURE_2D)));
    }
}
