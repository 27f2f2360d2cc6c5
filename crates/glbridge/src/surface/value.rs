use crate::driver::GlReply;

/// Typed answer of a parameter query on an object.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// The query produced nothing.
    #[default]
    Null,
    Bool(bool),
    Int(i32),
    Uint(u32),
    Float(f32),
    Ints(Vec<i32>),
    Uints(Vec<u32>),
}

/// Parameters the source API reports as booleans.
const BOOL_PNAMES: &[u32] = &[
    0x8B80, // DELETE_STATUS
    0x8B81, // COMPILE_STATUS
    0x8B82, // LINK_STATUS
    0x8B83, // VALIDATE_STATUS
    0x8867, // QUERY_RESULT_AVAILABLE
    0x912F, // TEXTURE_IMMUTABLE_FORMAT
    0x8A44, // UNIFORM_BLOCK_REFERENCED_BY_VERTEX_SHADER
    0x8A46, // UNIFORM_BLOCK_REFERENCED_BY_FRAGMENT_SHADER
    0x8A3E, // UNIFORM_IS_ROW_MAJOR
];

/// Parameters read through the float variant of a getter.
pub(crate) const FLOAT_PNAMES: &[u32] = &[
    0x813A, // TEXTURE_MIN_LOD
    0x813B, // TEXTURE_MAX_LOD
    0x84FE, // TEXTURE_MAX_ANISOTROPY_EXT
];

impl Value {
    /// Shapes a driver reply for `pname`.
    pub(crate) fn from_reply(pname: u32, reply: GlReply) -> Self {
        if BOOL_PNAMES.contains(&pname) {
            return Value::Bool(reply.bool());
        }
        match reply {
            GlReply::Unit => Value::Null,
            GlReply::Bool(b) => Value::Bool(b),
            GlReply::Int(v) => Value::Int(v),
            GlReply::Uint(v) | GlReply::Name(v) => Value::Uint(v),
            GlReply::Float(v) => Value::Float(v),
            GlReply::Ints(v) => Value::Ints(v),
            GlReply::Uints(v) => Value::Uints(v),
            GlReply::Text(_) | GlReply::Active(_) | GlReply::Buffer(_) => Value::Null,
        }
    }

    pub fn as_bool(&self) -> bool {
        match self {
            Value::Bool(b) => *b,
            Value::Int(v) => *v != 0,
            Value::Uint(v) => *v != 0,
            Value::Float(v) => *v != 0.0,
            Value::Null | Value::Ints(_) | Value::Uints(_) => false,
        }
    }

    pub fn as_i32(&self) -> i32 {
        match self {
            Value::Bool(b) => i32::from(*b),
            Value::Int(v) => *v,
            Value::Uint(v) => *v as i32,
            Value::Float(v) => *v as i32,
            Value::Null | Value::Ints(_) | Value::Uints(_) => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_pnames_become_booleans() {
        assert_eq!(Value::from_reply(0x8B81, GlReply::Int(1)), Value::Bool(true));
        assert_eq!(Value::from_reply(0x8B82, GlReply::Unit), Value::Bool(false));
    }

    #[test]
    fn other_pnames_keep_their_shape() {
        assert_eq!(Value::from_reply(0x8B4F, GlReply::Int(0x8B31)), Value::Int(0x8B31));
        assert_eq!(Value::from_reply(0x813A, GlReply::Float(-1000.0)), Value::Float(-1000.0));
        assert_eq!(Value::from_reply(0x1234, GlReply::Unit), Value::Null);
    }
}
