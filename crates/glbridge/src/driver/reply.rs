use crate::marshal::NativeBuffer;

/// Name, size and type of an active attribute, uniform or varying.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ActiveInfo {
    pub name: String,
    pub size: i32,
    pub ty: u32,
}

/// Result of executing one [`super::GlCmd`].
///
/// The accessors are lenient: asking for a shape the reply does not carry
/// yields the zero value, matching how the source API reports failures.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum GlReply {
    #[default]
    Unit,
    Bool(bool),
    Int(i32),
    Uint(u32),
    Float(f32),
    /// A freshly generated object name.
    Name(u32),
    Text(String),
    Ints(Vec<i32>),
    Uints(Vec<u32>),
    Active(ActiveInfo),
    /// A read-back buffer handed back by the driver.
    Buffer(NativeBuffer),
}

impl GlReply {
    pub fn int(&self) -> i32 {
        match *self {
            GlReply::Int(v) => v,
            GlReply::Uint(v) | GlReply::Name(v) => v as i32,
            GlReply::Bool(b) => i32::from(b),
            GlReply::Float(v) => v as i32,
            _ => 0,
        }
    }

    pub fn uint(&self) -> u32 {
        match *self {
            GlReply::Uint(v) | GlReply::Name(v) => v,
            GlReply::Int(v) => v as u32,
            GlReply::Bool(b) => u32::from(b),
            _ => 0,
        }
    }

    pub fn float(&self) -> f32 {
        match *self {
            GlReply::Float(v) => v,
            GlReply::Int(v) => v as f32,
            GlReply::Uint(v) => v as f32,
            _ => 0.0,
        }
    }

    pub fn bool(&self) -> bool {
        match *self {
            GlReply::Bool(b) => b,
            GlReply::Int(v) => v != 0,
            GlReply::Uint(v) | GlReply::Name(v) => v != 0,
            _ => false,
        }
    }

    /// Object name of a `create*` reply; `0` when the driver produced none.
    pub fn name(&self) -> u32 {
        match *self {
            GlReply::Name(v) | GlReply::Uint(v) => v,
            _ => 0,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            GlReply::Text(s) => s,
            _ => String::new(),
        }
    }

    pub fn into_ints(self) -> Vec<i32> {
        match self {
            GlReply::Ints(v) => v,
            GlReply::Int(v) => vec![v],
            _ => Vec::new(),
        }
    }

    pub fn into_uints(self) -> Vec<u32> {
        match self {
            GlReply::Uints(v) => v,
            GlReply::Uint(v) => vec![v],
            _ => Vec::new(),
        }
    }

    pub fn into_active(self) -> Option<ActiveInfo> {
        match self {
            GlReply::Active(info) => Some(info),
            _ => None,
        }
    }

    pub fn into_buffer(self) -> Option<NativeBuffer> {
        match self {
            GlReply::Buffer(buf) => Some(buf),
            _ => None,
        }
    }
}
