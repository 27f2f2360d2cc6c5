use crate::args::{NumericSeq, NumericSeqMut, to_int32, to_uint32};

use super::{ElementKind, NativeBuffer};

/// Unsigned byte to the driver's signed 8-bit representation.
#[inline]
pub fn to_signed_byte(v: u8) -> i8 {
    v as i8
}

/// Inverse of [`to_signed_byte`].
#[inline]
pub fn from_signed_byte(v: i8) -> u8 {
    v as u8
}

/// Element kind a sequence maps to when the call does not impose one.
pub fn natural_kind(seq: &NumericSeq<'_>) -> ElementKind {
    match seq {
        NumericSeq::Float32(_) | NumericSeq::Numbers(_) => ElementKind::Float,
        NumericSeq::Int32(_) | NumericSeq::Uint32(_) => ElementKind::Int,
        NumericSeq::Uint16(_) => ElementKind::Short,
        NumericSeq::Uint8(_) => ElementKind::Byte,
    }
}

/// Builds a buffer of the sequence's natural element kind.
pub fn write_natural(seq: NumericSeq<'_>) -> NativeBuffer {
    write(seq, natural_kind(&seq))
}

/// Builds a buffer of `kind` holding `seq` index-for-index.
///
/// Matching element types are copied in bulk. Anything else is converted
/// element by element: integers wrap like the source API's typed arrays and
/// bytes keep only their low eight bits.
pub fn write(seq: NumericSeq<'_>, kind: ElementKind) -> NativeBuffer {
    match (seq, kind) {
        (NumericSeq::Float32(v), ElementKind::Float) => NativeBuffer::Float(v.into()),
        (NumericSeq::Int32(v), ElementKind::Int) => NativeBuffer::Int(v.into()),
        (NumericSeq::Uint32(v), ElementKind::Int) => {
            NativeBuffer::Int(bytemuck::cast_slice::<u32, i32>(v).into())
        }
        (NumericSeq::Uint16(v), ElementKind::Short) => {
            NativeBuffer::Short(bytemuck::cast_slice::<u16, i16>(v).into())
        }
        (NumericSeq::Uint8(v), ElementKind::Byte) => {
            NativeBuffer::Byte(bytemuck::cast_slice::<u8, i8>(v).into())
        }
        (seq, kind) => convert_each(seq, kind),
    }
}

fn convert_each(seq: NumericSeq<'_>, kind: ElementKind) -> NativeBuffer {
    let values = (0..seq.len()).filter_map(|i| seq.get(i));
    match kind {
        ElementKind::Float => NativeBuffer::Float(values.map(|v| v as f32).collect()),
        ElementKind::Int => NativeBuffer::Int(values.map(to_int32).collect()),
        ElementKind::Short => NativeBuffer::Short(values.map(|v| to_uint32(v) as u16 as i16).collect()),
        ElementKind::Byte => NativeBuffer::Byte(values.map(|v| to_signed_byte(to_uint32(v) as u8)).collect()),
    }
}

/// Zero-filled buffer with the capacity and element kind of `dst`.
pub fn destination_for(dst: &NumericSeqMut<'_>) -> NativeBuffer {
    let kind = match dst {
        NumericSeqMut::Float32(_) => ElementKind::Float,
        NumericSeqMut::Int32(_) | NumericSeqMut::Uint32(_) => ElementKind::Int,
        NumericSeqMut::Uint16(_) => ElementKind::Short,
        NumericSeqMut::Uint8(_) => ElementKind::Byte,
    };
    NativeBuffer::zeroed(kind, dst.len())
}

/// Copies a filled buffer back into caller storage, preserving order.
///
/// Copies `min(buf.len(), dst.len())` elements; the rest of `dst` is left
/// untouched.
pub fn read_back(buf: &NativeBuffer, dst: &mut NumericSeqMut<'_>) {
    match (buf, dst) {
        (NativeBuffer::Float(src), NumericSeqMut::Float32(dst)) => copy_prefix(src, dst),
        (NativeBuffer::Int(src), NumericSeqMut::Int32(dst)) => copy_prefix(src, dst),
        (NativeBuffer::Int(src), NumericSeqMut::Uint32(dst)) => {
            copy_prefix(bytemuck::cast_slice::<i32, u32>(src), dst)
        }
        (NativeBuffer::Short(src), NumericSeqMut::Uint16(dst)) => {
            copy_prefix(bytemuck::cast_slice::<i16, u16>(src), dst)
        }
        (NativeBuffer::Byte(src), NumericSeqMut::Uint8(dst)) => {
            for (d, &s) in dst.iter_mut().zip(src.iter()) {
                *d = from_signed_byte(s);
            }
        }
        (buf, dst) => convert_back(buf, dst),
    }
}

fn copy_prefix<T: Copy>(src: &[T], dst: &mut [T]) {
    let n = src.len().min(dst.len());
    dst[..n].copy_from_slice(&src[..n]);
}

fn convert_back(buf: &NativeBuffer, dst: &mut NumericSeqMut<'_>) {
    let n = buf.len().min(dst.len());
    for i in 0..n {
        let Some(v) = buf.get(i) else { break };
        match dst {
            NumericSeqMut::Float32(d) => d[i] = v as f32,
            NumericSeqMut::Int32(d) => d[i] = to_int32(v),
            NumericSeqMut::Uint32(d) => d[i] = to_uint32(v),
            NumericSeqMut::Uint16(d) => d[i] = to_uint32(v) as u16,
            NumericSeqMut::Uint8(d) => d[i] = to_uint32(v) as u8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ── write ────────────────────────────────────────────────────────────

    #[test]
    fn bytes_above_127_become_negative() {
        let buf = write(NumericSeq::Uint8(&[0, 127, 128, 255]), ElementKind::Byte);
        assert_eq!(buf, NativeBuffer::Byte(vec![0, 127, -128, -1].into_boxed_slice()));
    }

    #[test]
    fn plain_numbers_convert_to_the_requested_kind() {
        let nums = [1.5, -2.0, 256.0 + 3.0];
        assert_eq!(
            write(NumericSeq::Numbers(&nums), ElementKind::Float),
            NativeBuffer::Float(vec![1.5, -2.0, 259.0].into_boxed_slice())
        );
        assert_eq!(
            write(NumericSeq::Numbers(&nums), ElementKind::Int),
            NativeBuffer::Int(vec![1, -2, 259].into_boxed_slice())
        );
        assert_eq!(
            write(NumericSeq::Numbers(&nums), ElementKind::Byte),
            NativeBuffer::Byte(vec![1, -2, 3].into_boxed_slice())
        );
    }

    #[test]
    fn natural_kinds() {
        assert_eq!(natural_kind(&NumericSeq::Uint16(&[])), ElementKind::Short);
        assert_eq!(natural_kind(&NumericSeq::Uint32(&[])), ElementKind::Int);
        assert_eq!(natural_kind(&NumericSeq::Numbers(&[])), ElementKind::Float);
    }

    // ── read-back ────────────────────────────────────────────────────────

    #[test]
    fn read_back_stops_at_the_shorter_side() {
        let buf = NativeBuffer::Float(vec![1.0, 2.0, 3.0].into_boxed_slice());
        let mut out = [9.0f32; 2];
        read_back(&buf, &mut NumericSeqMut::Float32(&mut out));
        assert_eq!(out, [1.0, 2.0]);

        let mut longer = [9.0f32; 4];
        read_back(&buf, &mut NumericSeqMut::Float32(&mut longer));
        assert_eq!(longer, [1.0, 2.0, 3.0, 9.0]);
    }

    #[test]
    fn destination_matches_caller_capacity() {
        let mut out = [0u16; 5];
        let buf = destination_for(&NumericSeqMut::Uint16(&mut out));
        assert_eq!(buf.kind(), ElementKind::Short);
        assert_eq!(buf.len(), 5);
    }

    #[test]
    fn mismatched_kinds_convert_elementwise() {
        let buf = NativeBuffer::Byte(vec![-1, 2].into_boxed_slice());
        let mut out = [0.0f32; 2];
        read_back(&buf, &mut NumericSeqMut::Float32(&mut out));
        assert_eq!(out, [-1.0, 2.0]);
    }

    // ── laws ─────────────────────────────────────────────────────────────

    proptest! {
        #[test]
        fn byte_sign_round_trip(v in any::<u8>()) {
            prop_assert_eq!(from_signed_byte(to_signed_byte(v)), v);
        }

        #[test]
        fn float_round_trip(src in proptest::collection::vec(any::<f32>().prop_filter("nan", |x| !x.is_nan()), 0..64)) {
            let buf = write(NumericSeq::Float32(&src), ElementKind::Float);
            let mut out = vec![0.0f32; src.len()];
            read_back(&buf, &mut NumericSeqMut::Float32(&mut out));
            prop_assert_eq!(out, src);
        }

        #[test]
        fn short_round_trip(src in proptest::collection::vec(any::<u16>(), 0..64)) {
            let buf = write(NumericSeq::Uint16(&src), ElementKind::Short);
            let mut out = vec![0u16; src.len()];
            read_back(&buf, &mut NumericSeqMut::Uint16(&mut out));
            prop_assert_eq!(out, src);
        }

        #[test]
        fn byte_round_trip(src in proptest::collection::vec(any::<u8>(), 0..64)) {
            let buf = write(NumericSeq::Uint8(&src), ElementKind::Byte);
            let mut out = vec![0u8; src.len()];
            read_back(&buf, &mut NumericSeqMut::Uint8(&mut out));
            prop_assert_eq!(out, src);
        }

        #[test]
        fn int_round_trip(src in proptest::collection::vec(any::<u32>(), 0..64)) {
            let buf = write(NumericSeq::Uint32(&src), ElementKind::Int);
            let mut out = vec![0u32; src.len()];
            read_back(&buf, &mut NumericSeqMut::Uint32(&mut out));
            prop_assert_eq!(out, src);
        }
    }
}
