//! Per-parameter normalizers.
//!
//! Each function takes one [`Arg`] and the parameter's default and always
//! returns a value. `undefined` and `null` yield the default; shapes the
//! parameter has no use for yield the default as well.

use super::{Arg, NumericSeq};

const TWO_32: f64 = 4_294_967_296.0;

/// Number to signed 32-bit integer with wrap-around (ECMAScript `ToInt32`).
pub fn to_int32(n: f64) -> i32 {
    to_uint32(n) as i32
}

/// Number to unsigned 32-bit integer with wrap-around (ECMAScript `ToUint32`).
pub fn to_uint32(n: f64) -> u32 {
    if !n.is_finite() {
        return 0;
    }
    n.trunc().rem_euclid(TWO_32) as u32
}

/// Parses string arguments the way numeric coercion would: decimal
/// literals, `0x`/`0o`/`0b` integers and a signed `Infinity`. Anything
/// else, `"nan"` and `"inf"` included, is not a number.
fn parse_number(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() {
        return Some(0.0);
    }
    for (prefix, radix) in [("0x", 16), ("0o", 8), ("0b", 2)] {
        if s.get(..2).is_some_and(|p| p.eq_ignore_ascii_case(prefix)) {
            let digits = &s[2..];
            if digits.starts_with('+') {
                return None;
            }
            return u128::from_str_radix(digits, radix).ok().map(|v| v as f64);
        }
    }
    let unsigned = s.strip_prefix(['+', '-']).unwrap_or(s);
    if unsigned == "Infinity" {
        return Some(if s.starts_with('-') { f64::NEG_INFINITY } else { f64::INFINITY });
    }
    if !unsigned.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
        return None;
    }
    s.parse::<f64>().ok()
}

/// Signed integer parameter (levels, offsets, sizes, counts, locations of
/// attributes).
pub fn int(arg: Arg<'_>, default: i32) -> i32 {
    match arg {
        Arg::Absent | Arg::Null => default,
        Arg::Bool(b) => i32::from(b),
        Arg::Number(n) if n.is_nan() => default,
        Arg::Number(n) => to_int32(n),
        Arg::Handle(h) => h as i32,
        Arg::Str(s) => parse_number(s).map_or(default, to_int32),
        Arg::Strs(_) | Arg::Seq(_) => default,
    }
}

/// Unsigned integer parameter (enums, object counts, indices).
pub fn uint(arg: Arg<'_>, default: u32) -> u32 {
    match arg {
        Arg::Absent | Arg::Null => default,
        Arg::Bool(b) => u32::from(b),
        Arg::Number(n) if n.is_nan() => default,
        Arg::Number(n) => to_uint32(n),
        Arg::Handle(h) => h,
        Arg::Str(s) => parse_number(s).map_or(default, to_uint32),
        Arg::Strs(_) | Arg::Seq(_) => default,
    }
}

/// Enum parameter whose zero value is never meaningful (formats, types).
///
/// `0` is treated like a missing argument.
pub fn enum_or(arg: Arg<'_>, default: u32) -> u32 {
    match uint(arg, default) {
        0 => default,
        v => v,
    }
}

/// 32-bit bit-field (stencil masks and references).
///
/// Values wider than 32 bits are floored and truncated to the low 32 bits.
pub fn mask(arg: Arg<'_>, default: u32) -> u32 {
    match arg {
        Arg::Number(n) if n.is_finite() => n.floor().rem_euclid(TWO_32) as u32,
        other => uint(other, default),
    }
}

/// Single-precision float parameter.
pub fn float(arg: Arg<'_>, default: f32) -> f32 {
    double(arg, f64::from(default)) as f32
}

/// Double-precision float parameter (depth clear value, depth range).
pub fn double(arg: Arg<'_>, default: f64) -> f64 {
    match arg {
        Arg::Absent | Arg::Null => default,
        Arg::Bool(b) => f64::from(u8::from(b)),
        Arg::Number(n) => n,
        Arg::Handle(h) => f64::from(h),
        Arg::Str(s) => parse_number(s).unwrap_or(default),
        Arg::Strs(_) | Arg::Seq(_) => default,
    }
}

/// Byte offset or size parameter (buffer offsets, `bufferData` sizes).
///
/// Fractions are truncated and out-of-range values saturate.
pub fn offset(arg: Arg<'_>, default: isize) -> isize {
    match arg {
        Arg::Number(n) if n.is_nan() => default,
        Arg::Number(n) => n.trunc() as isize,
        other => int(other, default as i32) as isize,
    }
}

/// Boolean parameter. Follows source-API truthiness.
pub fn flag(arg: Arg<'_>, default: bool) -> bool {
    match arg {
        Arg::Absent | Arg::Null => default,
        Arg::Bool(b) => b,
        Arg::Number(n) => n != 0.0 && !n.is_nan(),
        Arg::Str(s) => !s.is_empty(),
        Arg::Handle(_) | Arg::Strs(_) | Arg::Seq(_) => true,
    }
}

/// Object handle parameter. `0` is the null object.
pub fn handle(arg: Arg<'_>) -> u32 {
    match arg {
        Arg::Handle(h) => h,
        Arg::Number(n) => to_uint32(n),
        Arg::Absent | Arg::Null | Arg::Bool(_) | Arg::Str(_) | Arg::Strs(_) | Arg::Seq(_) => 0,
    }
}

/// Uniform location parameter. A missing location is `-1`, which drivers
/// silently ignore.
pub fn location(arg: Arg<'_>) -> i32 {
    match arg {
        Arg::Handle(h) => h as i32,
        Arg::Number(n) if n.is_nan() => -1,
        Arg::Number(n) => to_int32(n),
        Arg::Absent | Arg::Null | Arg::Bool(_) | Arg::Str(_) | Arg::Strs(_) | Arg::Seq(_) => -1,
    }
}

/// String parameter (names, shader sources).
pub fn string<'a>(arg: Arg<'a>) -> &'a str {
    match arg {
        Arg::Str(s) => s,
        Arg::Absent
        | Arg::Null
        | Arg::Bool(_)
        | Arg::Number(_)
        | Arg::Handle(_)
        | Arg::Strs(_)
        | Arg::Seq(_) => "",
    }
}

/// List of strings parameter.
pub fn strings<'a>(arg: Arg<'a>) -> &'a [&'a str] {
    match arg {
        Arg::Strs(list) => list,
        Arg::Absent
        | Arg::Null
        | Arg::Bool(_)
        | Arg::Number(_)
        | Arg::Handle(_)
        | Arg::Str(_)
        | Arg::Seq(_) => &[],
    }
}

/// Numeric sequence parameter. `None` when the caller passed no data.
pub fn seq(arg: Arg<'_>) -> Option<NumericSeq<'_>> {
    match arg {
        Arg::Seq(seq) => Some(seq),
        Arg::Absent
        | Arg::Null
        | Arg::Bool(_)
        | Arg::Number(_)
        | Arg::Handle(_)
        | Arg::Str(_)
        | Arg::Strs(_) => None,
    }
}
