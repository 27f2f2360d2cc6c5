/// Element type of a [`NativeBuffer`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// 32-bit float.
    Float,
    /// 32-bit integer. Unsigned data keeps its bit pattern.
    Int,
    /// 16-bit integer. Unsigned data keeps its bit pattern.
    Short,
    /// 8-bit integer in the driver's signed representation.
    Byte,
}

impl ElementKind {
    /// Width of one element in bytes.
    pub const fn width(self) -> usize {
        match self {
            ElementKind::Float | ElementKind::Int => 4,
            ElementKind::Short => 2,
            ElementKind::Byte => 1,
        }
    }
}

/// Element-typed, fixed-capacity memory handed to one driver call.
///
/// A buffer is created per call and owned by the command that carries it.
/// Read-back calls move the buffer into the driver and get it back filled in.
#[derive(Debug, Clone, PartialEq)]
pub enum NativeBuffer {
    Float(Box<[f32]>),
    Int(Box<[i32]>),
    Short(Box<[i16]>),
    Byte(Box<[i8]>),
}

impl NativeBuffer {
    /// Zero-filled buffer with room for `len` elements.
    pub fn zeroed(kind: ElementKind, len: usize) -> Self {
        match kind {
            ElementKind::Float => NativeBuffer::Float(vec![0.0; len].into_boxed_slice()),
            ElementKind::Int => NativeBuffer::Int(vec![0; len].into_boxed_slice()),
            ElementKind::Short => NativeBuffer::Short(vec![0; len].into_boxed_slice()),
            ElementKind::Byte => NativeBuffer::Byte(vec![0; len].into_boxed_slice()),
        }
    }

    pub fn kind(&self) -> ElementKind {
        match self {
            NativeBuffer::Float(_) => ElementKind::Float,
            NativeBuffer::Int(_) => ElementKind::Int,
            NativeBuffer::Short(_) => ElementKind::Short,
            NativeBuffer::Byte(_) => ElementKind::Byte,
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        match self {
            NativeBuffer::Float(v) => v.len(),
            NativeBuffer::Int(v) => v.len(),
            NativeBuffer::Short(v) => v.len(),
            NativeBuffer::Byte(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Size in bytes as passed to sized driver calls.
    pub fn byte_len(&self) -> usize {
        self.len() * self.kind().width()
    }

    /// Raw byte view of the elements in native byte order.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            NativeBuffer::Float(v) => bytemuck::cast_slice(v),
            NativeBuffer::Int(v) => bytemuck::cast_slice(v),
            NativeBuffer::Short(v) => bytemuck::cast_slice(v),
            NativeBuffer::Byte(v) => bytemuck::cast_slice(v),
        }
    }

    /// Mutable byte view, used by drivers writing read-back results.
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        match self {
            NativeBuffer::Float(v) => bytemuck::cast_slice_mut(v),
            NativeBuffer::Int(v) => bytemuck::cast_slice_mut(v),
            NativeBuffer::Short(v) => bytemuck::cast_slice_mut(v),
            NativeBuffer::Byte(v) => bytemuck::cast_slice_mut(v),
        }
    }

    /// Element `index` widened to `f64`.
    pub fn get(&self, index: usize) -> Option<f64> {
        match self {
            NativeBuffer::Float(v) => v.get(index).map(|&x| f64::from(x)),
            NativeBuffer::Int(v) => v.get(index).map(|&x| f64::from(x)),
            NativeBuffer::Short(v) => v.get(index).map(|&x| f64::from(x)),
            NativeBuffer::Byte(v) => v.get(index).map(|&x| f64::from(x)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeroed_has_requested_capacity() {
        let buf = NativeBuffer::zeroed(ElementKind::Short, 6);
        assert_eq!(buf.len(), 6);
        assert_eq!(buf.byte_len(), 12);
        assert!(buf.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn byte_view_matches_native_layout() {
        let buf = NativeBuffer::Float(vec![1.0f32].into_boxed_slice());
        assert_eq!(buf.as_bytes(), &1.0f32.to_ne_bytes());
    }

    #[test]
    fn mutable_view_writes_through() {
        let mut buf = NativeBuffer::zeroed(ElementKind::Int, 1);
        buf.as_bytes_mut().copy_from_slice(&7i32.to_ne_bytes());
        assert_eq!(buf, NativeBuffer::Int(vec![7].into_boxed_slice()));
    }
}
