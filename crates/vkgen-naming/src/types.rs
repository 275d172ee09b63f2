//! C# type substitution.
//!
//! Three layers, checked in order:
//!
//! 1. identifiers that are already C# scalar types pass straight through
//!    (except `char`, which denotes a byte in registry signatures);
//! 2. a fixed table maps registry built-ins and platform handles to C#
//!    scalars;
//! 3. identifiers following the API's own `Vk` naming convention pass
//!    through unless a small remap table overrides them; `PFN_vk`
//!    function-pointer names resolve to a raw address type.
//!
//! Anything else is an unresolved identifier and fails the resolution.

use crate::error::{ResolveError, Result};

/// C# scalar type names that survive substitution unchanged.
const CSHARP_SCALARS: &[&str] = &[
    "void", "bool", "byte", "sbyte", "short", "ushort", "int", "uint", "long", "ulong", "float",
    "double",
];

/// Registry built-in and platform types → C# scalars.
const BUILTIN_TYPES: &[(&str, &str)] = &[
    ("char", "byte"),
    ("int8_t", "sbyte"),
    ("uint8_t", "byte"),
    ("int16_t", "short"),
    ("uint16_t", "ushort"),
    ("int32_t", "int"),
    ("uint32_t", "uint"),
    ("int64_t", "long"),
    ("uint64_t", "ulong"),
    ("size_t", "ulong"),
    // Platform window-system types.
    ("HINSTANCE", "IntPtr"),
    ("HWND", "IntPtr"),
    ("HMONITOR", "IntPtr"),
    ("HANDLE", "IntPtr"),
    ("DWORD", "uint"),
    ("LPCWSTR", "IntPtr"),
    ("SECURITY_ATTRIBUTES", "IntPtr"),
    ("Display", "IntPtr"),
    ("VisualID", "ulong"),
    ("Window", "ulong"),
    ("RROutput", "ulong"),
    ("xcb_connection_t", "IntPtr"),
    ("xcb_window_t", "uint"),
    ("xcb_visualid_t", "uint"),
    ("wl_display", "IntPtr"),
    ("wl_surface", "IntPtr"),
    ("ANativeWindow", "IntPtr"),
    ("AHardwareBuffer", "IntPtr"),
    ("CAMetalLayer", "IntPtr"),
    ("MirConnection", "IntPtr"),
    ("MirSurface", "IntPtr"),
];

/// API-convention identifiers that do not pass through verbatim.
const API_REMAP: &[(&str, &str)] = &[
    ("VkDeviceSize", "ulong"),
    ("VkDeviceAddress", "ulong"),
    ("VkBool32", "uint"),
    ("VkSampleMask", "uint"),
    ("VkFlags", "uint"),
    ("VkFlags64", "ulong"),
];

/// Substitute a registry type name, re-appending pointer depth.
pub fn csharp_type(raw: &str, pointer_depth: u32) -> Result<String> {
    let base = substitute(raw)?;
    let mut out = base.to_string();
    for _ in 0..pointer_depth {
        out.push('*');
    }
    Ok(out)
}

fn substitute(raw: &str) -> Result<&str> {
    if let Some(&(_, mapped)) = BUILTIN_TYPES.iter().find(|(from, _)| *from == raw) {
        return Ok(mapped);
    }
    if CSHARP_SCALARS.contains(&raw) {
        return Ok(raw);
    }
    if let Some(&(_, mapped)) = API_REMAP.iter().find(|(from, _)| *from == raw) {
        return Ok(mapped);
    }
    // Function-pointer fields marshal as raw addresses; the named
    // delegate types exist separately for callers that want them.
    if raw.starts_with("PFN_vk") {
        return Ok("IntPtr");
    }
    if raw.starts_with("Vk") {
        return Ok(raw);
    }
    Err(ResolveError::UnknownType(raw.to_string()))
}

/// Is this output type a C# scalar (pointer-free)?
pub fn is_csharp_scalar(output_type: &str) -> bool {
    CSHARP_SCALARS.contains(&output_type) || output_type == "IntPtr"
}

/// Can a fixed-size array of this output type become an inline C# `fixed`
/// buffer? Only pointer-free primitive scalars qualify; everything else is
/// flattened into discrete numbered fields.
pub fn fixed_buffer_eligible(output_type: &str) -> bool {
    !output_type.contains('*')
        && output_type != "void"
        && output_type != "IntPtr"
        && CSHARP_SCALARS.contains(&output_type)
}
