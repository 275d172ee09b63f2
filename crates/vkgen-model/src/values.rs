//! Numeric value computation for enum/bitmask containers and the API
//! constants namespace.

use vkgen_types::{RawEnumValue, RawValue};

use crate::error::{BuildError, Result};
use crate::output::OutEnumValue;

/// Base of the extension-promoted value formula.
const EXTENSION_BASE: i64 = 1_000_000_000;
/// Per-extension block size of the formula.
const EXTENSION_BLOCK: i64 = 1_000;

/// Compute the value list for one container.
///
/// Values resolve in declaration order. A repeated name with an equal
/// computed value is silently dropped (multiple aliases legitimately
/// projecting the same literal); a repeated name with a differing value
/// is an error. Value aliases resolve against the list built so far, so
/// a target must precede its aliases.
///
/// `rename` maps a raw value name to its output name.
pub fn compute_values(
    container: &str,
    raw_values: &[RawEnumValue],
    mut rename: impl FnMut(&str) -> String,
) -> Result<Vec<OutEnumValue>> {
    let mut out: Vec<OutEnumValue> = Vec::new();
    let mut raw_lookup: Vec<(&str, i64)> = Vec::new();

    for raw in raw_values {
        let value = match &raw.value {
            RawValue::Literal(literal) => parse_int(&raw.name, literal)?,
            RawValue::Bitpos(position) => {
                1i64.checked_shl(*position)
                    .ok_or_else(|| BuildError::BitPositionOutOfRange {
                        name: raw.name.clone(),
                        position: *position,
                    })?
            }
            RawValue::Offset {
                extension_number,
                offset,
                negative,
            } => {
                let number = extension_number
                    .ok_or_else(|| BuildError::MissingExtensionNumber(raw.name.clone()))?;
                let value = EXTENSION_BASE + (number - 1) * EXTENSION_BLOCK + offset;
                if *negative {
                    -value
                } else {
                    value
                }
            }
            RawValue::Alias(target) => raw_lookup
                .iter()
                .find(|(name, _)| name == target)
                .map(|&(_, value)| value)
                .ok_or_else(|| BuildError::UnknownValueAlias {
                    container: container.to_string(),
                    target: target.clone(),
                })?,
        };
        raw_lookup.push((raw.name.as_str(), value));

        let name = rename(&raw.name);
        match out.iter().find(|v| v.name == name) {
            // First entry wins; identical re-declarations collapse.
            Some(existing) if existing.value == value => {}
            Some(existing) => {
                return Err(BuildError::ConflictingValue {
                    container: container.to_string(),
                    name,
                    existing: existing.value,
                    conflicting: value,
                });
            }
            None => out.push(OutEnumValue { name, value }),
        }
    }
    Ok(out)
}

/// Parse a decimal or `0x`-hexadecimal integer literal, optionally
/// negative.
pub fn parse_int(entity: &str, literal: &str) -> Result<i64> {
    let trimmed = literal.trim();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };
    let parsed = if let Some(hex) = digits.strip_prefix("0x").or_else(|| digits.strip_prefix("0X"))
    {
        i64::from_str_radix(hex, 16).ok()
    } else {
        digits.parse::<i64>().ok()
    };
    match parsed {
        Some(value) if negative => Ok(-value),
        Some(value) => Ok(value),
        None => Err(BuildError::MalformedLiteral {
            entity: entity.to_string(),
            literal: literal.to_string(),
        }),
    }
}

/// Render an API-constant literal as a C# type/value pair, plus its
/// integer value when it has one (array sizing reads it).
pub fn constant_literal(name: &str, value: &str) -> Result<(String, String, Option<u64>)> {
    let trimmed = value.trim();
    match trimmed {
        "(~0U)" => return Ok(("uint".into(), "uint.MaxValue".into(), None)),
        "(~0ULL)" => return Ok(("ulong".into(), "ulong.MaxValue".into(), None)),
        "(~0U-1)" => return Ok(("uint".into(), "uint.MaxValue - 1".into(), None)),
        "(~0U-2)" => return Ok(("uint".into(), "uint.MaxValue - 2".into(), None)),
        _ => {}
    }
    if trimmed.ends_with('f') || trimmed.ends_with('F') {
        return Ok(("float".into(), trimmed.to_string(), None));
    }
    if let Ok(integer) = trimmed.parse::<u64>() {
        return Ok(("uint".into(), trimmed.to_string(), Some(integer)));
    }
    Err(BuildError::MalformedConstant {
        name: name.to_string(),
        value: value.to_string(),
    })
}
