//! Texture storage bookkeeping.
//!
//! Desktop drivers distinguish mutable storage (`glTexImage*`) from
//! immutable storage (`glTexStorage*`) and reject redefinitions of the
//! latter. Source-API code mixes both styles freely and often uploads cube
//! faces one at a time without an explicit allocation. [`TextureStorage`]
//! tracks every (texture, target, level, face) image and issues only the
//! calls the driver will accept.

mod format;
mod key;
mod layout;
mod record;
mod storage;

pub use format::{UploadFormat, bytes_per_pixel, default_internal_format, transfer_for, upload_format};
pub use key::{TextureBindings, TextureKey, faces, image_target, split_image_target};
pub use layout::{PixelLayout, PixelStore};
pub use record::{StorageRecord, StorageState};
pub use storage::{Extent, ImageRequest, StorageRequest, SubImageRequest, TextureStorage};
