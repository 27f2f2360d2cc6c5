/// One positional argument of a source-API call.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Arg<'a> {
    /// The caller did not pass this argument (`undefined`).
    #[default]
    Absent,
    /// An explicit `null`.
    Null,
    Bool(bool),
    Number(f64),
    /// An opaque object handle (buffer, texture, program, uniform location...).
    Handle(u32),
    Str(&'a str),
    /// A list of strings, e.g. transform feedback varyings.
    Strs(&'a [&'a str]),
    /// A typed array or plain numeric array.
    Seq(NumericSeq<'a>),
}

impl Arg<'_> {
    /// `true` for `undefined` and `null`.
    pub fn is_nullish(&self) -> bool {
        matches!(self, Arg::Absent | Arg::Null)
    }
}

/// Read-only numeric sequence as handed over by the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericSeq<'a> {
    Float32(&'a [f32]),
    Int32(&'a [i32]),
    Uint32(&'a [u32]),
    Uint16(&'a [u16]),
    /// `Uint8Array` and raw `ArrayBuffer` contents.
    Uint8(&'a [u8]),
    /// A plain array of numbers.
    Numbers(&'a [f64]),
}

impl NumericSeq<'_> {
    pub fn len(&self) -> usize {
        match self {
            NumericSeq::Float32(v) => v.len(),
            NumericSeq::Int32(v) => v.len(),
            NumericSeq::Uint32(v) => v.len(),
            NumericSeq::Uint16(v) => v.len(),
            NumericSeq::Uint8(v) => v.len(),
            NumericSeq::Numbers(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Element `index` widened to `f64`.
    pub fn get(&self, index: usize) -> Option<f64> {
        match self {
            NumericSeq::Float32(v) => v.get(index).map(|&x| f64::from(x)),
            NumericSeq::Int32(v) => v.get(index).map(|&x| f64::from(x)),
            NumericSeq::Uint32(v) => v.get(index).map(|&x| f64::from(x)),
            NumericSeq::Uint16(v) => v.get(index).map(|&x| f64::from(x)),
            NumericSeq::Uint8(v) => v.get(index).map(|&x| f64::from(x)),
            NumericSeq::Numbers(v) => v.get(index).copied(),
        }
    }
}

/// Caller-owned destination of a read-back call.
#[derive(Debug, PartialEq)]
pub enum NumericSeqMut<'a> {
    Float32(&'a mut [f32]),
    Int32(&'a mut [i32]),
    Uint32(&'a mut [u32]),
    Uint16(&'a mut [u16]),
    Uint8(&'a mut [u8]),
}

impl NumericSeqMut<'_> {
    pub fn len(&self) -> usize {
        match self {
            NumericSeqMut::Float32(v) => v.len(),
            NumericSeqMut::Int32(v) => v.len(),
            NumericSeqMut::Uint32(v) => v.len(),
            NumericSeqMut::Uint16(v) => v.len(),
            NumericSeqMut::Uint8(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ── conversions ──────────────────────────────────────────────────────────

impl From<bool> for Arg<'_> {
    fn from(v: bool) -> Self {
        Arg::Bool(v)
    }
}

impl From<f64> for Arg<'_> {
    fn from(v: f64) -> Self {
        Arg::Number(v)
    }
}

impl From<f32> for Arg<'_> {
    fn from(v: f32) -> Self {
        Arg::Number(f64::from(v))
    }
}

impl From<i32> for Arg<'_> {
    fn from(v: i32) -> Self {
        Arg::Number(f64::from(v))
    }
}

impl From<u32> for Arg<'_> {
    fn from(v: u32) -> Self {
        Arg::Number(f64::from(v))
    }
}

impl<'a> From<&'a str> for Arg<'a> {
    fn from(v: &'a str) -> Self {
        Arg::Str(v)
    }
}

impl<'a> From<&'a [&'a str]> for Arg<'a> {
    fn from(v: &'a [&'a str]) -> Self {
        Arg::Strs(v)
    }
}

impl<'a> From<NumericSeq<'a>> for Arg<'a> {
    fn from(v: NumericSeq<'a>) -> Self {
        Arg::Seq(v)
    }
}

impl<'a> From<&'a [f32]> for Arg<'a> {
    fn from(v: &'a [f32]) -> Self {
        Arg::Seq(NumericSeq::Float32(v))
    }
}

impl<'a> From<&'a [i32]> for Arg<'a> {
    fn from(v: &'a [i32]) -> Self {
        Arg::Seq(NumericSeq::Int32(v))
    }
}

impl<'a> From<&'a [u32]> for Arg<'a> {
    fn from(v: &'a [u32]) -> Self {
        Arg::Seq(NumericSeq::Uint32(v))
    }
}

impl<'a> From<&'a [u16]> for Arg<'a> {
    fn from(v: &'a [u16]) -> Self {
        Arg::Seq(NumericSeq::Uint16(v))
    }
}

impl<'a> From<&'a [u8]> for Arg<'a> {
    fn from(v: &'a [u8]) -> Self {
        Arg::Seq(NumericSeq::Uint8(v))
    }
}

impl<'a> From<&'a [f64]> for Arg<'a> {
    fn from(v: &'a [f64]) -> Self {
        Arg::Seq(NumericSeq::Numbers(v))
    }
}

impl<'a, T> From<Option<T>> for Arg<'a>
where
    T: Into<Arg<'a>>,
{
    fn from(v: Option<T>) -> Self {
        v.map_or(Arg::Null, Into::into)
    }
}

impl<'a> From<&'a mut [f32]> for NumericSeqMut<'a> {
    fn from(v: &'a mut [f32]) -> Self {
        NumericSeqMut::Float32(v)
    }
}

impl<'a> From<&'a mut [u8]> for NumericSeqMut<'a> {
    fn from(v: &'a mut [u8]) -> Self {
        NumericSeqMut::Uint8(v)
    }
}

impl<'a> From<&'a mut [u16]> for NumericSeqMut<'a> {
    fn from(v: &'a mut [u16]) -> Self {
        NumericSeqMut::Uint16(v)
    }
}

impl<'a> From<&'a mut [i32]> for NumericSeqMut<'a> {
    fn from(v: &'a mut [i32]) -> Self {
        NumericSeqMut::Int32(v)
    }
}

impl<'a> From<&'a mut [u32]> for NumericSeqMut<'a> {
    fn from(v: &'a mut [u32]) -> Self {
        NumericSeqMut::Uint32(v)
    }
}
