use std::ffi::CString;

use gl::types::{GLchar, GLint, GLsizei};

/// NUL-terminated copy of `s`, cut at the first interior NUL.
pub(crate) fn c_string(s: &str) -> CString {
    let head = s.split('\0').next().unwrap_or_default();
    CString::new(head).unwrap_or_default()
}

/// A list of C strings plus the pointer array naming them.
pub(crate) struct CStrings {
    _owned: Vec<CString>,
    ptrs: Vec<*const GLchar>,
}

impl CStrings {
    pub(crate) fn new(items: &[String]) -> Self {
        let owned: Vec<CString> = items.iter().map(|s| c_string(s)).collect();
        let ptrs = owned.iter().map(|s| s.as_ptr()).collect();
        Self { _owned: owned, ptrs }
    }

    pub(crate) fn len(&self) -> GLsizei {
        self.ptrs.len() as GLsizei
    }

    pub(crate) fn as_ptr(&self) -> *const *const GLchar {
        self.ptrs.as_ptr()
    }
}

/// Runs a driver string getter against a scratch buffer of `capacity` bytes
/// and returns what it wrote.
pub(crate) fn read_string(capacity: GLint, fill: impl FnOnce(GLsizei, *mut GLsizei, *mut GLchar)) -> String {
    let capacity = capacity.max(1);
    let mut buf = vec![0u8; capacity as usize];
    let mut len: GLsizei = 0;
    fill(capacity, &mut len, buf.as_mut_ptr().cast());
    buf.truncate(len.clamp(0, capacity) as usize);
    String::from_utf8_lossy(&buf).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interior_nul_truncates() {
        assert_eq!(c_string("uColor\0junk").as_bytes(), b"uColor");
        assert_eq!(c_string("").as_bytes(), b"");
    }

    #[test]
    fn pointer_array_names_every_string() {
        let list = CStrings::new(&["a".to_owned(), "bc".to_owned()]);
        assert_eq!(list.len(), 2);
        let second = unsafe { std::ffi::CStr::from_ptr(*list.as_ptr().add(1)) };
        assert_eq!(second.to_bytes(), b"bc");
    }

    #[test]
    fn read_string_keeps_reported_length() {
        let text = read_string(16, |cap, len, buf| {
            assert_eq!(cap, 16);
            let src = b"ERROR: 0:1";
            unsafe {
                std::ptr::copy_nonoverlapping(src.as_ptr().cast(), buf, src.len());
                *len = src.len() as GLsizei;
            }
        });
        assert_eq!(text, "ERROR: 0:1");
    }

    #[test]
    fn read_string_clamps_bad_lengths() {
        let text = read_string(0, |cap, len, _| unsafe { *len = cap + 100 });
        assert_eq!(text, "\0");
    }
}
