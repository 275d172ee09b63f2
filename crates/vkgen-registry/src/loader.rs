//! Registry loader: fixed multi-pass population of the Raw Spec Model.
//!
//! Pass order is significant and never retried:
//!
//! 1. vendor tags
//! 2. type discovery (dispatch on the `category` attribute)
//! 3. value population (enum/bitmask containers, the flat API-constants
//!    container, struct members, function-pointer arguments)
//! 4. command discovery
//! 5. core feature levels (value promotion + command provenance stamping)
//! 6. extensions (same, keyed by the extension number)
//!
//! Alias declarations require their target to already be present in the
//! table under construction; the first failure anywhere aborts the load.

use vkgen_types::{
    BitmaskDef, CommandDef, CommandProvenance, ConstantDef, EnumDef, FuncPointerDef, HandleDef,
    LoadError, Raw, RawArraySize, RawDecl, RawEnumValue, RawExtension, RawMember, RawParam,
    RawRegistry, RawValue, Result, StructDef,
};

use crate::xml::{self, Element, Node};

/// Load a registry document into the Raw Spec Model.
pub fn load(source: &str) -> Result<RawRegistry> {
    let doc = xml::parse_document(source)?;
    let mut loader = Loader::default();
    loader.load_vendor_tags(&doc)?;
    loader.discover_types(&doc)?;
    loader.populate_values(&doc)?;
    loader.populate_members(&doc)?;
    loader.load_commands(&doc)?;
    loader.apply_features(&doc)?;
    loader.apply_extensions(&doc)?;
    Ok(loader.registry)
}

#[derive(Default)]
struct Loader {
    registry: RawRegistry,
}

impl Loader {
    // ── Pass 0: vendor tags ──────────────────────────────────────────────

    fn load_vendor_tags(&mut self, doc: &Element) -> Result<()> {
        for tags in doc.children("tags") {
            for tag in tags.children("tag") {
                let name = required_attr(tag, "tag", "name", "vendor tag")?;
                self.registry.vendor_tags.push(name.to_string());
            }
        }
        Ok(())
    }

    // ── Pass 1: type discovery ───────────────────────────────────────────

    fn discover_types(&mut self, doc: &Element) -> Result<()> {
        for types in doc.children("types") {
            for ty in types.children("type") {
                match ty.attr("category") {
                    Some("bitmask") => self.discover_bitmask(ty)?,
                    Some("handle") => self.discover_handle(ty)?,
                    Some("enum") => self.discover_enum(ty)?,
                    Some("struct") => self.discover_struct(ty, false)?,
                    Some("union") => self.discover_struct(ty, true)?,
                    Some("funcpointer") => self.discover_func_pointer(ty)?,
                    // basetype, define, include, requires-only entries.
                    _ => {}
                }
            }
        }
        Ok(())
    }

    fn discover_bitmask(&mut self, ty: &Element) -> Result<()> {
        if let Some(target) = ty.attr("alias") {
            let name = required_attr(ty, "type", "name", "bitmask alias")?;
            if !self.registry.bitmasks.contains(target) {
                return Err(alias_error("bitmask", name, target));
            }
            self.registry.bitmasks.insert(Raw::alias(name, target));
            return Ok(());
        }
        let name = required_child_text(ty, "type", "name")?;
        let values_name = ty
            .attr("requires")
            .or_else(|| ty.attr("bitvalues"))
            .map(str::to_string);
        self.registry.bitmasks.insert(Raw::definition(
            name,
            BitmaskDef {
                values_name,
                values: Vec::new(),
            },
        ));
        Ok(())
    }

    fn discover_handle(&mut self, ty: &Element) -> Result<()> {
        if let Some(target) = ty.attr("alias") {
            let name = required_attr(ty, "type", "name", "handle alias")?;
            if !self.registry.handles.contains(target) {
                return Err(alias_error("handle", name, target));
            }
            self.registry.handles.insert(Raw::alias(name, target));
            return Ok(());
        }
        let name = required_child_text(ty, "type", "name")?;
        let dispatchable = ty
            .child_text("type")
            .is_some_and(|t| t.trim() == "VK_DEFINE_HANDLE");
        self.registry.handles.insert(Raw::definition(
            name,
            HandleDef {
                parent: ty.attr("parent").map(str::to_string),
                dispatchable,
            },
        ));
        Ok(())
    }

    fn discover_enum(&mut self, ty: &Element) -> Result<()> {
        let name = required_attr(ty, "type", "name", "enum type")?;
        if let Some(target) = ty.attr("alias") {
            if !self.registry.enums.contains(target) {
                return Err(alias_error("enum", name, target));
            }
            self.registry.enums.insert(Raw::alias(name, target));
        } else {
            self.registry
                .enums
                .insert(Raw::definition(name, EnumDef::default()));
        }
        Ok(())
    }

    fn discover_struct(&mut self, ty: &Element, is_union: bool) -> Result<()> {
        let name = required_attr(ty, "type", "name", if is_union { "union" } else { "struct" })?;
        if let Some(target) = ty.attr("alias") {
            if !self.registry.structs.contains(target) {
                return Err(alias_error("struct", name, target));
            }
            self.registry.structs.insert(Raw::alias(name, target));
        } else {
            self.registry.structs.insert(Raw::definition(
                name,
                StructDef {
                    is_union,
                    members: Vec::new(),
                },
            ));
        }
        Ok(())
    }

    fn discover_func_pointer(&mut self, ty: &Element) -> Result<()> {
        if let Some(target) = ty.attr("alias") {
            let name = required_attr(ty, "type", "name", "funcpointer alias")?;
            if !self.registry.func_pointers.contains(target) {
                return Err(alias_error("funcpointer", name, target));
            }
            self.registry.func_pointers.insert(Raw::alias(name, target));
            return Ok(());
        }
        let name = required_child_text(ty, "type", "name")?;
        self.registry
            .func_pointers
            .insert(Raw::definition(name, FuncPointerDef::default()));
        Ok(())
    }

    // ── Pass 2a: enum/bitmask value containers + API constants ───────────

    fn populate_values(&mut self, doc: &Element) -> Result<()> {
        for enums in doc.children("enums") {
            let name = required_attr(enums, "enums", "name", "values container")?.to_string();
            match enums.attr("type") {
                // No type attribute: the flat API-constants namespace.
                None => self.populate_constants(enums)?,
                Some(_) => {
                    let values = parse_value_entries(&name, enums)?;
                    self.attach_values(&name, values)?;
                }
            }
        }
        Ok(())
    }

    fn populate_constants(&mut self, enums: &Element) -> Result<()> {
        for entry in enums.children("enum") {
            let name = required_attr(entry, "enum", "name", "API constant")?;
            if let Some(target) = entry.attr("alias") {
                if !self.registry.constants.contains(target) {
                    return Err(alias_error("constant", name, target));
                }
                self.registry.constants.insert(Raw::alias(name, target));
            } else {
                let value = required_attr(entry, "enum", "value", name)?;
                self.registry.constants.insert(Raw::definition(
                    name,
                    ConstantDef {
                        value: value.to_string(),
                    },
                ));
            }
        }
        Ok(())
    }

    /// Attach a parsed value list to the enum or bitmask container it
    /// names. Bitmask containers may be addressed either by the bitmask's
    /// own name or by its declared values-container name.
    fn attach_values(&mut self, container: &str, values: Vec<RawEnumValue>) -> Result<()> {
        if let Some(owner) = self.bitmask_owner(container) {
            if let Some(Raw {
                decl: RawDecl::Definition(def),
                ..
            }) = self.registry.bitmasks.get_mut(&owner)
            {
                def.values.extend(values);
            }
            return Ok(());
        }
        if let Some(Raw {
            decl: RawDecl::Definition(def),
            ..
        }) = self.registry.enums.get_mut(container)
        {
            def.values.extend(values);
            return Ok(());
        }
        if self.registry.enums.contains(container) {
            // Alias container: values are inherited from the target.
            return Ok(());
        }
        Err(LoadError::UnknownValueContainer(container.to_string()))
    }

    /// The defining bitmask fed by the given values-container name.
    fn bitmask_owner(&self, container: &str) -> Option<String> {
        for raw in self.registry.bitmasks.iter() {
            match &raw.decl {
                RawDecl::Definition(def) => {
                    if raw.name == container || def.values_name.as_deref() == Some(container) {
                        return Some(raw.name.clone());
                    }
                }
                RawDecl::AliasOf(_) => {
                    if raw.name == container {
                        return Some(raw.name.clone());
                    }
                }
            }
        }
        None
    }

    // ── Pass 2b: struct members and function-pointer signatures ──────────

    fn populate_members(&mut self, doc: &Element) -> Result<()> {
        for types in doc.children("types") {
            for ty in types.children("type") {
                if ty.attr("alias").is_some() {
                    // Alias structs inherit their target's members.
                    continue;
                }
                match ty.attr("category") {
                    Some("struct") | Some("union") => {
                        let name = required_attr(ty, "type", "name", "struct")?.to_string();
                        let mut members = Vec::new();
                        for member in ty.children("member") {
                            members.push(parse_member(&name, member)?);
                        }
                        if let Some(Raw {
                            decl: RawDecl::Definition(def),
                            ..
                        }) = self.registry.structs.get_mut(&name)
                        {
                            def.members = members;
                        }
                    }
                    Some("funcpointer") => {
                        let name = required_child_text(ty, "funcpointer", "name")?;
                        let parsed = parse_func_pointer(&name, ty)?;
                        if let Some(Raw {
                            decl: RawDecl::Definition(def),
                            ..
                        }) = self.registry.func_pointers.get_mut(&name)
                        {
                            *def = parsed;
                        }
                    }
                    _ => {}
                }
            }
        }
        Ok(())
    }

    // ── Pass 3: commands ─────────────────────────────────────────────────

    fn load_commands(&mut self, doc: &Element) -> Result<()> {
        for commands in doc.children("commands") {
            for command in commands.children("command") {
                if let Some(target) = command.attr("alias") {
                    let name = required_attr(command, "command", "name", "command alias")?;
                    if !self.registry.commands.contains(target) {
                        return Err(alias_error("command", name, target));
                    }
                    self.registry.commands.insert(Raw::alias(name, target));
                    continue;
                }
                let proto = command.child("proto").ok_or(LoadError::MissingChild {
                    element: "command",
                    entity: "command".to_string(),
                    child: "proto",
                })?;
                let name = required_child_text(proto, "proto", "name")?;
                let return_type = proto
                    .child_text("type")
                    .ok_or(LoadError::MissingChild {
                        element: "proto",
                        entity: name.clone(),
                        child: "type",
                    })?
                    .trim()
                    .to_string();
                let return_pointer_depth = count_stars(&proto.text());

                let mut params = Vec::new();
                for param in command.children("param") {
                    params.push(parse_param(&name, param)?);
                }

                self.registry.commands.insert(Raw::definition(
                    name,
                    CommandDef {
                        return_type,
                        return_pointer_depth,
                        params,
                        provenance: None,
                    },
                ));
            }
        }
        Ok(())
    }

    // ── Pass 4a: core feature levels ─────────────────────────────────────

    fn apply_features(&mut self, doc: &Element) -> Result<()> {
        for feature in doc.children("feature") {
            let number = required_attr(feature, "feature", "number", "feature")?;
            let (major, minor) = parse_feature_number(number)?;
            if (major, minor) == (1, 0) {
                // The baseline level adds nothing on top of the base API.
                continue;
            }
            for require in feature.children("require") {
                for entry in require.elements() {
                    match entry.name.as_str() {
                        "enum" => self.apply_feature_enum(entry)?,
                        "command" => {
                            let name = required_attr(entry, "command", "name", "feature command")?;
                            self.stamp_command(
                                name,
                                CommandProvenance::FeatureLevel { major, minor },
                            )?;
                        }
                        _ => {}
                    }
                }
            }
        }
        Ok(())
    }

    /// A promoted value inside a core feature's require block. The
    /// enclosing context carries no extension number, so offset entries
    /// must supply their own.
    fn apply_feature_enum(&mut self, entry: &Element) -> Result<()> {
        let name = required_attr(entry, "enum", "name", "feature enum")?.to_string();
        let Some(extends) = entry.attr("extends") else {
            // A bare reference to an existing value; nothing to add.
            return Ok(());
        };
        let value = if entry.attr("offset").is_some() {
            let extnumber = entry
                .attr("extnumber")
                .ok_or_else(|| LoadError::MissingExtensionNumber(name.clone()))?;
            promoted_value(&name, entry, Some(parse_i64(&name, extnumber)?))?
        } else {
            promoted_value(&name, entry, None)?
        };
        self.apply_promoted(extends, value)
    }

    // ── Pass 4b: extensions ──────────────────────────────────────────────

    fn apply_extensions(&mut self, doc: &Element) -> Result<()> {
        for extensions in doc.children("extensions") {
            for extension in extensions.children("extension") {
                if extension.attr("supported") == Some("disabled") {
                    continue;
                }
                self.apply_extension(extension)?;
            }
        }
        Ok(())
    }

    fn apply_extension(&mut self, extension: &Element) -> Result<()> {
        let name = required_attr(extension, "extension", "name", "extension")?.to_string();
        let number_attr = required_attr(extension, "extension", "number", &name)?;
        let number = parse_i64(&name, number_attr)?;

        let mut spec_version: Option<u32> = None;
        for require in extension.children("require") {
            for entry in require.elements() {
                match entry.name.as_str() {
                    "enum" => {
                        self.apply_extension_enum(&name, number, entry, &mut spec_version)?;
                    }
                    "command" => {
                        let command = required_attr(entry, "command", "name", "extension command")?;
                        self.stamp_command(command, CommandProvenance::Extension(name.clone()))?;
                    }
                    // Type references add no information at this stage.
                    _ => {}
                }
            }
        }

        let spec_version = spec_version.ok_or_else(|| LoadError::MissingSpecVersion(name.clone()))?;
        self.registry.extensions.push(RawExtension {
            name,
            number,
            spec_version,
        });
        Ok(())
    }

    fn apply_extension_enum(
        &mut self,
        extension: &str,
        extension_number: i64,
        entry: &Element,
        spec_version: &mut Option<u32>,
    ) -> Result<()> {
        let name = required_attr(entry, "enum", "name", "extension enum")?.to_string();

        if name.ends_with("_SPEC_VERSION") {
            let value = required_attr(entry, "enum", "value", &name)?;
            let parsed = value
                .parse::<u32>()
                .map_err(|_| LoadError::MalformedLiteral {
                    entity: extension.to_string(),
                    literal: value.to_string(),
                })?;
            match *spec_version {
                None => *spec_version = Some(parsed),
                Some(existing) if existing == parsed => {}
                Some(_) => {
                    return Err(LoadError::ConflictingSpecVersion(extension.to_string()));
                }
            }
            return Ok(());
        }
        if name.ends_with("_EXTENSION_NAME") {
            return Ok(());
        }

        if let Some(extends) = entry.attr("extends") {
            let extnumber = match entry.attr("extnumber") {
                Some(n) => Some(parse_i64(&name, n)?),
                None => Some(extension_number),
            };
            let value = if entry.attr("offset").is_some() {
                promoted_value(&name, entry, extnumber)?
            } else {
                promoted_value(&name, entry, None)?
            };
            return self.apply_promoted(extends, value);
        }

        // Extension-scoped plain constants.
        if let Some(value) = entry.attr("value") {
            self.registry.constants.insert(Raw::definition(
                name,
                ConstantDef {
                    value: value.to_string(),
                },
            ));
        }
        Ok(())
    }

    // ── Shared promotion/stamping helpers ────────────────────────────────

    /// Append a promoted value to the enum or bitmask container it
    /// extends. Bitmask ownership is checked first, the same as in
    /// [`Loader::attach_values`]: a FlagBits container name addresses
    /// the bitmask it feeds.
    fn apply_promoted(&mut self, extends: &str, value: RawEnumValue) -> Result<()> {
        if let Some(owner) = self.bitmask_owner(extends) {
            if let Some(Raw {
                decl: RawDecl::Definition(def),
                ..
            }) = self.registry.bitmasks.get_mut(&owner)
            {
                def.values.push(value);
                return Ok(());
            }
        }
        if let Some(Raw {
            decl: RawDecl::Definition(def),
            ..
        }) = self.registry.enums.get_mut(extends)
        {
            def.values.push(value);
            return Ok(());
        }
        Err(LoadError::UnknownRequireTarget {
            category: "enum",
            name: extends.to_string(),
        })
    }

    /// Stamp a command's provenance; the first stamp wins.
    fn stamp_command(&mut self, name: &str, provenance: CommandProvenance) -> Result<()> {
        match self.registry.commands.get_mut(name) {
            Some(raw) => {
                if let RawDecl::Definition(def) = &mut raw.decl {
                    if def.provenance.is_none() {
                        def.provenance = Some(provenance);
                    }
                }
                Ok(())
            }
            None => Err(LoadError::UnknownRequireTarget {
                category: "command",
                name: name.to_string(),
            }),
        }
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Element-level parse routines
// ══════════════════════════════════════════════════════════════════════════════

/// Parse the `enum` children of a values container.
fn parse_value_entries(container: &str, enums: &Element) -> Result<Vec<RawEnumValue>> {
    let mut values = Vec::new();
    for entry in enums.children("enum") {
        let name = required_attr(entry, "enum", "name", container)?.to_string();
        let value = if let Some(target) = entry.attr("alias") {
            RawValue::Alias(target.to_string())
        } else if let Some(bitpos) = entry.attr("bitpos") {
            RawValue::Bitpos(parse_bitpos(&name, bitpos)?)
        } else if let Some(literal) = entry.attr("value") {
            RawValue::Literal(literal.to_string())
        } else {
            return Err(LoadError::MissingAttribute {
                element: "enum",
                entity: name,
                attribute: "value",
            });
        };
        values.push(RawEnumValue { name, value });
    }
    Ok(values)
}

/// Build a promoted value from a feature/extension `enum` entry.
fn promoted_value(
    name: &str,
    entry: &Element,
    extension_number: Option<i64>,
) -> Result<RawEnumValue> {
    let value = if let Some(offset) = entry.attr("offset") {
        RawValue::Offset {
            extension_number,
            offset: parse_i64(name, offset)?,
            negative: entry.attr("dir") == Some("-"),
        }
    } else if let Some(bitpos) = entry.attr("bitpos") {
        RawValue::Bitpos(parse_bitpos(name, bitpos)?)
    } else if let Some(literal) = entry.attr("value") {
        RawValue::Literal(literal.to_string())
    } else if let Some(target) = entry.attr("alias") {
        RawValue::Alias(target.to_string())
    } else {
        return Err(LoadError::MissingAttribute {
            element: "enum",
            entity: name.to_string(),
            attribute: "offset",
        });
    };
    Ok(RawEnumValue {
        name: name.to_string(),
        value,
    })
}

/// Parse one struct/union `member` element.
fn parse_member(struct_name: &str, member: &Element) -> Result<RawMember> {
    let type_name = member
        .child_text("type")
        .ok_or(LoadError::MissingChild {
            element: "member",
            entity: struct_name.to_string(),
            child: "type",
        })?
        .trim()
        .to_string();
    let name = member
        .child_text("name")
        .ok_or(LoadError::MissingChild {
            element: "member",
            entity: struct_name.to_string(),
            child: "name",
        })?
        .trim()
        .to_string();

    let direct_text = member.text();
    let pointer_depth = count_stars(&direct_text);
    let is_const = leading_const(member);
    let array_size = parse_array_size(struct_name, member)?;

    Ok(RawMember {
        name,
        type_name,
        pointer_depth,
        is_const,
        array_size,
        tag_value: member.attr("values").map(str::to_string),
    })
}

/// Parse one command `param` element.
fn parse_param(command: &str, param: &Element) -> Result<RawParam> {
    let type_name = param
        .child_text("type")
        .ok_or(LoadError::MissingChild {
            element: "param",
            entity: command.to_string(),
            child: "type",
        })?
        .trim()
        .to_string();
    let name = param
        .child_text("name")
        .ok_or(LoadError::MissingChild {
            element: "param",
            entity: command.to_string(),
            child: "name",
        })?
        .trim()
        .to_string();

    Ok(RawParam {
        name,
        type_name,
        pointer_depth: count_stars(&param.text()),
        is_const: leading_const(param),
        len: param.attr("len").map(str::to_string),
        optional: param
            .attr("optional")
            .is_some_and(|o| o.starts_with("true")),
    })
}

/// Parse a funcpointer typedef body.
///
/// The registry interleaves the signature text with `type` children:
///
/// ```text
/// typedef void* (VKAPI_PTR *<name>PFN_x</name>)(
///     <type>void</type>* pUserData, <type>size_t</type> size);
/// ```
fn parse_func_pointer(name: &str, ty: &Element) -> Result<FuncPointerDef> {
    // Return type comes from the leading text node, before the first '('.
    let first_text = ty
        .nodes
        .iter()
        .find_map(|n| match n {
            Node::Text(t) => Some(t.as_str()),
            Node::Element(_) => None,
        })
        .unwrap_or("");
    let head = first_text.split('(').next().unwrap_or("");
    let head = head.trim_start_matches("typedef").trim();
    let return_pointer_depth = count_stars(head);
    let return_type = head.trim_end_matches('*').trim().to_string();
    if return_type.is_empty() {
        return Err(LoadError::MissingChild {
            element: "funcpointer",
            entity: name.to_string(),
            child: "type",
        });
    }

    // Arguments: each `type` child plus the text that follows it, which
    // carries pointer stars and the argument name. The text *before* a
    // type child signals const-ness.
    let mut args = Vec::new();
    let mut seen_name_child = false;
    let mut pending_const = false;
    let mut current: Option<(String, bool)> = None;
    for node in &ty.nodes {
        match node {
            Node::Element(e) if e.name == "name" => {
                seen_name_child = true;
            }
            Node::Element(e) if e.name == "type" && seen_name_child => {
                current = Some((e.text().trim().to_string(), pending_const));
                pending_const = false;
            }
            Node::Text(t) if seen_name_child => {
                if let Some((type_name, is_const)) = current.take() {
                    args.push(RawParam {
                        name: arg_name_from_text(t),
                        type_name,
                        pointer_depth: count_stars(t),
                        is_const,
                        len: None,
                        optional: false,
                    });
                }
                pending_const = t.trim_end().ends_with("const");
            }
            _ => {}
        }
    }

    Ok(FuncPointerDef {
        return_type,
        return_pointer_depth,
        args,
    })
}

/// Extract an argument identifier from the text trailing a type child.
fn arg_name_from_text(text: &str) -> String {
    text.chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '_' {
                c
            } else {
                ' '
            }
        })
        .collect::<String>()
        .split_whitespace()
        .last()
        .unwrap_or("")
        .to_string()
}

/// Fixed-array size trailing a member's `name` child: either a bracketed
/// literal in the text, or a bracketed `enum` child naming an API constant.
fn parse_array_size(struct_name: &str, member: &Element) -> Result<Option<RawArraySize>> {
    if let Some(constant) = member.child("enum") {
        return Ok(Some(RawArraySize::NamedConstant(
            constant.text().trim().to_string(),
        )));
    }
    let mut past_name = false;
    for node in &member.nodes {
        match node {
            Node::Element(e) if e.name == "name" => past_name = true,
            Node::Text(t) if past_name => {
                if let Some(open) = t.find('[') {
                    let rest = &t[open + 1..];
                    let close = rest.find(']').ok_or_else(|| LoadError::MalformedLiteral {
                        entity: struct_name.to_string(),
                        literal: t.trim().to_string(),
                    })?;
                    let digits = rest[..close].trim();
                    let size = digits.parse::<u64>().map_err(|_| LoadError::MalformedLiteral {
                        entity: struct_name.to_string(),
                        literal: digits.to_string(),
                    })?;
                    return Ok(Some(RawArraySize::Literal(size)));
                }
            }
            _ => {}
        }
    }
    Ok(None)
}

// ══════════════════════════════════════════════════════════════════════════════
// Small shared helpers
// ══════════════════════════════════════════════════════════════════════════════

fn required_attr<'a>(
    element: &'a Element,
    element_name: &'static str,
    attribute: &'static str,
    entity: &str,
) -> Result<&'a str> {
    element.attr(attribute).ok_or_else(|| LoadError::MissingAttribute {
        element: element_name,
        entity: entity.to_string(),
        attribute,
    })
}

/// Text of a required child element (e.g. the nested `name` of a
/// definition-shaped type entry).
fn required_child_text(element: &Element, element_name: &'static str, child: &'static str) -> Result<String> {
    element
        .child_text(child)
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .ok_or(LoadError::MissingChild {
            element: element_name,
            entity: element.attr("name").unwrap_or("<unnamed>").to_string(),
            child,
        })
}

fn alias_error(category: &'static str, name: &str, target: &str) -> LoadError {
    LoadError::UnknownAliasTarget {
        category,
        name: name.to_string(),
        target: target.to_string(),
    }
}

fn count_stars(text: &str) -> u32 {
    text.chars().filter(|&c| c == '*').count() as u32
}

/// `true` when the element's first text node opens with `const`.
fn leading_const(element: &Element) -> bool {
    element
        .nodes
        .iter()
        .find_map(|n| match n {
            Node::Text(t) => Some(t.trim_start().starts_with("const")),
            Node::Element(_) => Some(false),
        })
        .unwrap_or(false)
}

fn parse_feature_number(number: &str) -> Result<(u32, u32)> {
    let mut parts = number.splitn(2, '.');
    let major = parts.next().and_then(|p| p.parse().ok());
    let minor = parts.next().and_then(|p| p.parse().ok());
    match (major, minor) {
        (Some(major), Some(minor)) => Ok((major, minor)),
        _ => Err(LoadError::MalformedLiteral {
            entity: "feature".to_string(),
            literal: number.to_string(),
        }),
    }
}

fn parse_bitpos(entity: &str, bitpos: &str) -> Result<u32> {
    bitpos.parse::<u32>().map_err(|_| LoadError::MalformedLiteral {
        entity: entity.to_string(),
        literal: bitpos.to_string(),
    })
}

fn parse_i64(entity: &str, literal: &str) -> Result<i64> {
    literal.parse::<i64>().map_err(|_| LoadError::MalformedLiteral {
        entity: entity.to_string(),
        literal: literal.to_string(),
    })
}
