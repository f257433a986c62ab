/// Type Width Oracle
///
/// Maps a textual C type spelling (as found in `qualType`) to a storage width
/// in bytes. Unrecognized spellings resolve to `Width::Unknown`; that outcome
/// is logged and returned, never raised.

use std::fmt;

/// Pointer width on the default target ABI (x86_64 / aarch64 LP64).
pub const DEFAULT_POINTER_WIDTH: u32 = 8;

/// Result of a width lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Width {
    Bytes(u32),
    Unknown,
}

impl Width {
    pub fn bytes(self) -> Option<u32> {
        match self {
            Width::Bytes(n) => Some(n),
            Width::Unknown => None,
        }
    }

    pub fn is_known(self) -> bool {
        matches!(self, Width::Bytes(_))
    }
}

impl fmt::Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Width::Bytes(n) => write!(f, "{} bytes", n),
            Width::Unknown => write!(f, "unknown"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidthOracle {
    pointer_width: u32,
}

impl Default for WidthOracle {
    fn default() -> Self {
        Self::new(DEFAULT_POINTER_WIDTH)
    }
}

impl WidthOracle {
    pub fn new(pointer_width: u32) -> Self {
        Self { pointer_width }
    }

    pub fn pointer_width(&self) -> u32 {
        self.pointer_width
    }

    pub fn width_of(&self, type_text: &str) -> Width {
        if is_pointer(type_text) {
            return Width::Bytes(self.pointer_width);
        }

        match primitive_width(strip_qualifiers(type_text)) {
            Some(n) => Width::Bytes(n),
            None => {
                tracing::debug!(type_text, "no width known for type spelling");
                Width::Unknown
            }
        }
    }

    /// True iff the oracle resolves a width. Pointers count; callers that
    /// care check `is_pointer` separately.
    pub fn is_integral(&self, type_text: &str) -> bool {
        self.width_of(type_text).is_known()
    }
}

pub fn is_pointer(type_text: &str) -> bool {
    type_text.contains('*')
}

fn strip_qualifiers(type_text: &str) -> &str {
    let mut rest = type_text.trim();
    loop {
        if let Some(r) = rest.strip_prefix("const ") {
            rest = r.trim_start();
        } else if let Some(r) = rest.strip_prefix("volatile ") {
            rest = r.trim_start();
        } else {
            return rest;
        }
    }
}

fn primitive_width(spelling: &str) -> Option<u32> {
    let width = match spelling {
        "_Bool" | "bool" | "char" | "signed char" | "unsigned char" => 1,
        "int8_t" | "uint8_t" => 1,
        "short" | "short int" | "signed short" | "unsigned short" | "unsigned short int" => 2,
        "int16_t" | "uint16_t" => 2,
        "int" | "signed" | "signed int" | "unsigned" | "unsigned int" => 4,
        "int32_t" | "uint32_t" => 4,
        "long" | "long int" | "signed long" | "unsigned long" | "unsigned long int" => 8,
        "long long" | "long long int" | "unsigned long long" | "unsigned long long int" => 8,
        "int64_t" | "uint64_t" | "size_t" | "ssize_t" | "ptrdiff_t" | "intptr_t" | "uintptr_t" => 8,
        "__int128" | "unsigned __int128" | "__int128_t" | "__uint128_t" => 16,
        _ => return None,
    };
    Some(width)
}
