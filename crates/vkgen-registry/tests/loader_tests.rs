//! Integration tests for the registry loader.
//!
//! Tests validate:
//! - Vendor tag discovery
//! - Type discovery for every category, definitions and aliases
//! - Value population (bitmask containers, enums, the API-constants namespace)
//! - Struct member and function-pointer signature parsing
//! - Command prototype/parameter parsing and provenance stamping
//! - Feature-level and extension processing, including rejection rules

use vkgen_types::{
    CommandProvenance, LoadError, RawArraySize, RawDecl, RawRegistry, RawValue,
};

// ══════════════════════════════════════════════════════════════════════════════
// Helpers and fixture
// ══════════════════════════════════════════════════════════════════════════════

fn load(source: &str) -> RawRegistry {
    vkgen_registry::load(source).unwrap_or_else(|e| panic!("load failed: {e}"))
}

fn try_load(source: &str) -> Result<RawRegistry, LoadError> {
    vkgen_registry::load(source)
}

/// Miniature registry exercising every loader pass.
const REGISTRY: &str = r#"
<registry>
  <tags>
    <tag name="KHR" author="Khronos" contact=""/>
    <tag name="EXT" author="Multivendor" contact=""/>
  </tags>
  <types>
    <type category="bitmask" requires="VkAccessFlagBits">typedef <type>VkFlags</type> <name>VkAccessFlags</name>;</type>
    <type category="bitmask" name="VkAccessFlags2KHR" alias="VkAccessFlags"/>
    <type category="bitmask">typedef <type>VkFlags</type> <name>VkFenceCreateFlags</name>;</type>
    <type category="handle"><type>VK_DEFINE_HANDLE</type>(<name>VkInstance</name>)</type>
    <type category="handle" parent="VkInstance"><type>VK_DEFINE_HANDLE</type>(<name>VkPhysicalDevice</name>)</type>
    <type category="handle" parent="VkPhysicalDevice"><type>VK_DEFINE_HANDLE</type>(<name>VkDevice</name>)</type>
    <type category="handle" parent="VkDevice"><type>VK_DEFINE_HANDLE</type>(<name>VkQueue</name>)</type>
    <type category="handle" parent="VkDevice"><type>VK_DEFINE_HANDLE</type>(<name>VkCommandBuffer</name>)</type>
    <type category="handle" parent="VkDevice"><type>VK_DEFINE_NON_DISPATCHABLE_HANDLE</type>(<name>VkFence</name>)</type>
    <type category="handle" parent="VkDevice"><type>VK_DEFINE_NON_DISPATCHABLE_HANDLE</type>(<name>VkSwapchainKHR</name>)</type>
    <type category="enum" name="VkStructureType"/>
    <type category="enum" name="VkResult"/>
    <type category="enum" name="VkAccessFlagBits"/>
    <type category="funcpointer">typedef void* (VKAPI_PTR *<name>PFN_vkAllocationFunction</name>)(
<type>void</type>* pUserData,
<type>size_t</type> size);</type>
    <type category="struct" name="VkExtent2D">
      <member><type>uint32_t</type> <name>width</name></member>
      <member><type>uint32_t</type> <name>height</name></member>
    </type>
    <type category="struct" name="VkApplicationInfo">
      <member values="VK_STRUCTURE_TYPE_APPLICATION_INFO"><type>VkStructureType</type> <name>sType</name></member>
      <member>const <type>void</type>* <name>pNext</name></member>
      <member>const <type>char</type>* <name>pApplicationName</name></member>
      <member><type>uint32_t</type> <name>applicationVersion</name></member>
    </type>
    <type category="struct" name="VkInstanceCreateInfo">
      <member values="VK_STRUCTURE_TYPE_INSTANCE_CREATE_INFO"><type>VkStructureType</type> <name>sType</name></member>
      <member>const <type>void</type>* <name>pNext</name></member>
      <member>const <type>VkApplicationInfo</type>* <name>pApplicationInfo</name></member>
    </type>
    <type category="struct" name="VkSubmitInfo">
      <member values="VK_STRUCTURE_TYPE_SUBMIT_INFO"><type>VkStructureType</type> <name>sType</name></member>
      <member>const <type>void</type>* <name>pNext</name></member>
      <member><type>uint32_t</type> <name>commandBufferCount</name></member>
      <member>const <type>VkCommandBuffer</type>* <name>pCommandBuffers</name></member>
    </type>
    <type category="struct" name="VkPhysicalDeviceProperties">
      <member><type>uint32_t</type> <name>apiVersion</name></member>
      <member><type>char</type> <name>deviceName</name>[<enum>VK_MAX_PHYSICAL_DEVICE_NAME_SIZE</enum>]</member>
      <member><type>float</type> <name>lineWidthRange</name>[2]</member>
    </type>
    <type category="struct" name="VkSwapchainCreateInfoKHR">
      <member values="VK_STRUCTURE_TYPE_SWAPCHAIN_CREATE_INFO_KHR"><type>VkStructureType</type> <name>sType</name></member>
      <member>const <type>void</type>* <name>pNext</name></member>
      <member><type>uint32_t</type> <name>minImageCount</name></member>
      <member><type>VkExtent2D</type> <name>imageExtent</name></member>
    </type>
  </types>
  <enums name="API Constants">
    <enum name="VK_MAX_PHYSICAL_DEVICE_NAME_SIZE" value="256"/>
    <enum name="VK_LOD_CLAMP_NONE" value="1000.0f"/>
    <enum name="VK_ATTACHMENT_UNUSED" value="(~0U)"/>
    <enum name="VK_QUEUE_FAMILY_IGNORED" alias="VK_ATTACHMENT_UNUSED"/>
  </enums>
  <enums name="VkStructureType" type="enum">
    <enum name="VK_STRUCTURE_TYPE_APPLICATION_INFO" value="0"/>
    <enum name="VK_STRUCTURE_TYPE_INSTANCE_CREATE_INFO" value="1"/>
    <enum name="VK_STRUCTURE_TYPE_SUBMIT_INFO" value="4"/>
  </enums>
  <enums name="VkResult" type="enum">
    <enum name="VK_SUCCESS" value="0"/>
    <enum name="VK_NOT_READY" value="1"/>
    <enum name="VK_ERROR_OUT_OF_HOST_MEMORY" value="-1"/>
  </enums>
  <enums name="VkAccessFlagBits" type="bitmask">
    <enum name="VK_ACCESS_INDIRECT_COMMAND_READ_BIT" bitpos="0"/>
    <enum name="VK_ACCESS_INDEX_READ_BIT" bitpos="1"/>
  </enums>
  <commands>
    <command>
      <proto><type>VkResult</type> <name>vkCreateInstance</name></proto>
      <param>const <type>VkInstanceCreateInfo</type>* <name>pCreateInfo</name></param>
      <param><type>VkInstance</type>* <name>pInstance</name></param>
    </command>
    <command>
      <proto><type>VkResult</type> <name>vkEnumeratePhysicalDevices</name></proto>
      <param><type>VkInstance</type> <name>instance</name></param>
      <param optional="false,true"><type>uint32_t</type>* <name>pPhysicalDeviceCount</name></param>
      <param optional="true"><type>VkPhysicalDevice</type>* <name>pPhysicalDevices</name></param>
    </command>
    <command>
      <proto><type>void</type> <name>vkGetPhysicalDeviceProperties</name></proto>
      <param><type>VkPhysicalDevice</type> <name>physicalDevice</name></param>
      <param><type>VkPhysicalDeviceProperties</type>* <name>pProperties</name></param>
    </command>
    <command>
      <proto><type>void</type> <name>vkGetDeviceQueue</name></proto>
      <param><type>VkDevice</type> <name>device</name></param>
      <param><type>uint32_t</type> <name>queueFamilyIndex</name></param>
      <param><type>uint32_t</type> <name>queueIndex</name></param>
      <param><type>VkQueue</type>* <name>pQueue</name></param>
    </command>
    <command>
      <proto><type>VkResult</type> <name>vkQueueSubmit</name></proto>
      <param><type>VkQueue</type> <name>queue</name></param>
      <param><type>uint32_t</type> <name>submitCount</name></param>
      <param len="submitCount">const <type>VkSubmitInfo</type>* <name>pSubmits</name></param>
      <param optional="true"><type>VkFence</type> <name>fence</name></param>
    </command>
    <command>
      <proto><type>void</type> <name>vkDestroyFence</name></proto>
      <param><type>VkDevice</type> <name>device</name></param>
      <param><type>VkFence</type> <name>fence</name></param>
    </command>
    <command>
      <proto><type>void</type> <name>vkCmdSetScissor</name></proto>
      <param><type>VkCommandBuffer</type> <name>commandBuffer</name></param>
      <param><type>uint32_t</type> <name>firstScissor</name></param>
      <param><type>uint32_t</type> <name>scissorCount</name></param>
      <param len="scissorCount">const <type>VkExtent2D</type>* <name>pScissors</name></param>
    </command>
    <command>
      <proto><type>void</type> <name>vkResetQueryPool</name></proto>
      <param><type>VkDevice</type> <name>device</name></param>
      <param><type>uint32_t</type> <name>firstQuery</name></param>
      <param><type>uint32_t</type> <name>queryCount</name></param>
    </command>
    <command>
      <proto><type>VkResult</type> <name>vkCreateSwapchainKHR</name></proto>
      <param><type>VkDevice</type> <name>device</name></param>
      <param len="null-terminated">const <type>char</type>* <name>pLayerName</name></param>
      <param>const <type>VkSwapchainCreateInfoKHR</type>* <name>pCreateInfo</name></param>
      <param><type>VkSwapchainKHR</type>* <name>pSwapchain</name></param>
    </command>
    <command name="vkEnumeratePhysicalDevices2KHR" alias="vkEnumeratePhysicalDevices"/>
  </commands>
  <feature api="vulkan" name="VK_VERSION_1_0" number="1.0">
    <require>
      <command name="vkCreateInstance"/>
      <command name="vkQueueSubmit"/>
    </require>
  </feature>
  <feature api="vulkan" name="VK_VERSION_1_2" number="1.2">
    <require>
      <command name="vkResetQueryPool"/>
      <enum extends="VkStructureType" extnumber="147" offset="0" name="VK_STRUCTURE_TYPE_PHYSICAL_DEVICE_VULKAN_1_1_FEATURES"/>
    </require>
  </feature>
  <extensions>
    <extension name="VK_KHR_swapchain" number="2" supported="vulkan">
      <require>
        <enum name="VK_KHR_SWAPCHAIN_SPEC_VERSION" value="70"/>
        <enum name="VK_KHR_SWAPCHAIN_EXTENSION_NAME" value="&quot;VK_KHR_swapchain&quot;"/>
        <enum extends="VkStructureType" offset="0" name="VK_STRUCTURE_TYPE_SWAPCHAIN_CREATE_INFO_KHR"/>
        <enum extends="VkResult" offset="1" dir="-" name="VK_ERROR_OUT_OF_DATE_KHR"/>
        <enum extends="VkAccessFlagBits" bitpos="25" name="VK_ACCESS_SWAPCHAIN_READ_BIT_KHR"/>
        <command name="vkCreateSwapchainKHR"/>
        <command name="vkEnumeratePhysicalDevices2KHR"/>
      </require>
    </extension>
    <extension name="VK_KHR_promote" number="5" supported="vulkan">
      <require>
        <enum name="VK_KHR_PROMOTE_SPEC_VERSION" value="1"/>
        <enum extends="VkStructureType" offset="1" name="VK_STRUCTURE_TYPE_PROMOTE_KHR"/>
      </require>
    </extension>
    <extension name="VK_EXT_abandoned" number="9" supported="disabled">
      <require>
        <enum name="VK_EXT_ABANDONED_SPEC_VERSION" value="1"/>
        <enum extends="VkResult" offset="0" name="VK_ERROR_ABANDONED_EXT"/>
      </require>
    </extension>
  </extensions>
</registry>
"#;

// ══════════════════════════════════════════════════════════════════════════════
// Discovery
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn vendor_tags_load_in_declaration_order() {
    let registry = load(REGISTRY);
    assert_eq!(registry.vendor_tags, vec!["KHR", "EXT"]);
}

#[test]
fn handles_record_parent_and_dispatchability() {
    let registry = load(REGISTRY);
    let instance = registry.handles.get("VkInstance").expect("VkInstance");
    let RawDecl::Definition(instance) = &instance.decl else {
        panic!("VkInstance is not a definition");
    };
    assert!(instance.dispatchable);
    assert_eq!(instance.parent, None);

    let fence = registry.handles.get("VkFence").expect("VkFence");
    let RawDecl::Definition(fence) = &fence.decl else {
        panic!("VkFence is not a definition");
    };
    assert!(!fence.dispatchable);
    assert_eq!(fence.parent.as_deref(), Some("VkDevice"));
}

#[test]
fn bitmask_alias_resolves_to_existing_target() {
    let registry = load(REGISTRY);
    let (target, def) = registry
        .bitmasks
        .resolve("VkAccessFlags2KHR")
        .expect("alias resolves");
    assert_eq!(target, "VkAccessFlags");
    // Values attached to the FlagBits container land on the bitmask.
    assert_eq!(def.values.len(), 3);
}

#[test]
fn alias_to_missing_target_fails() {
    let source = r#"
<registry>
  <types>
    <type category="handle" name="VkThing" alias="VkMissing"/>
  </types>
</registry>
"#;
    match try_load(source) {
        Err(LoadError::UnknownAliasTarget { category, name, target }) => {
            assert_eq!(category, "handle");
            assert_eq!(name, "VkThing");
            assert_eq!(target, "VkMissing");
        }
        other => panic!("expected UnknownAliasTarget, got {other:?}"),
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Value population
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn api_constants_populate_the_flat_namespace() {
    let registry = load(REGISTRY);
    let (_, size) = registry
        .constants
        .resolve("VK_MAX_PHYSICAL_DEVICE_NAME_SIZE")
        .expect("constant");
    assert_eq!(size.value, "256");

    // Constant aliases resolve through the target.
    let (target, ignored) = registry
        .constants
        .resolve("VK_QUEUE_FAMILY_IGNORED")
        .expect("aliased constant");
    assert_eq!(target, "VK_ATTACHMENT_UNUSED");
    assert_eq!(ignored.value, "(~0U)");
}

#[test]
fn enum_values_attach_to_their_container() {
    let registry = load(REGISTRY);
    let (_, result) = registry.enums.resolve("VkResult").expect("VkResult");
    let names: Vec<&str> = result.values.iter().map(|v| v.name.as_str()).collect();
    assert!(names.contains(&"VK_SUCCESS"));
    assert!(names.contains(&"VK_ERROR_OUT_OF_HOST_MEMORY"));
    // Promoted values append after the direct declarations.
    assert!(names.contains(&"VK_ERROR_OUT_OF_DATE_KHR"));
}

#[test]
fn bitpos_values_record_positions() {
    let registry = load(REGISTRY);
    let (_, access) = registry.bitmasks.resolve("VkAccessFlags").expect("bitmask");
    assert_eq!(access.values[0].value, RawValue::Bitpos(0));
    assert_eq!(access.values[1].value, RawValue::Bitpos(1));
    // The extension-promoted bit landed through the FlagBits name.
    assert_eq!(access.values[2].value, RawValue::Bitpos(25));
}

#[test]
fn values_for_unknown_container_fail() {
    let source = r#"
<registry>
  <enums name="VkNowhere" type="enum">
    <enum name="VK_NOWHERE_ONE" value="1"/>
  </enums>
</registry>
"#;
    match try_load(source) {
        Err(LoadError::UnknownValueContainer(name)) => assert_eq!(name, "VkNowhere"),
        other => panic!("expected UnknownValueContainer, got {other:?}"),
    }
}

#[test]
fn malformed_bitpos_fails() {
    let source = r#"
<registry>
  <types>
    <type category="enum" name="VkThing"/>
  </types>
  <enums name="VkThing" type="bitmask">
    <enum name="VK_THING_BAD_BIT" bitpos="twelve"/>
  </enums>
</registry>
"#;
    match try_load(source) {
        Err(LoadError::MalformedLiteral { entity, literal }) => {
            assert_eq!(entity, "VK_THING_BAD_BIT");
            assert_eq!(literal, "twelve");
        }
        other => panic!("expected MalformedLiteral, got {other:?}"),
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Struct members and function pointers
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn struct_members_capture_pointers_const_and_tags() {
    let registry = load(REGISTRY);
    let (_, info) = registry.structs.resolve("VkApplicationInfo").expect("struct");
    assert_eq!(info.members.len(), 4);

    let tag = &info.members[0];
    assert_eq!(tag.name, "sType");
    assert_eq!(tag.tag_value.as_deref(), Some("VK_STRUCTURE_TYPE_APPLICATION_INFO"));
    assert_eq!(tag.pointer_depth, 0);

    let chain = &info.members[1];
    assert_eq!(chain.name, "pNext");
    assert_eq!(chain.type_name, "void");
    assert_eq!(chain.pointer_depth, 1);
    assert!(chain.is_const);

    let name = &info.members[2];
    assert_eq!(name.type_name, "char");
    assert_eq!(name.pointer_depth, 1);
}

#[test]
fn array_members_parse_literal_and_named_sizes() {
    let registry = load(REGISTRY);
    let (_, props) = registry
        .structs
        .resolve("VkPhysicalDeviceProperties")
        .expect("struct");
    assert_eq!(
        props.members[1].array_size,
        Some(RawArraySize::NamedConstant(
            "VK_MAX_PHYSICAL_DEVICE_NAME_SIZE".to_string()
        ))
    );
    assert_eq!(props.members[2].array_size, Some(RawArraySize::Literal(2)));
}

#[test]
fn func_pointer_signatures_parse() {
    let registry = load(REGISTRY);
    let (_, alloc) = registry
        .func_pointers
        .resolve("PFN_vkAllocationFunction")
        .expect("funcpointer");
    assert_eq!(alloc.return_type, "void");
    assert_eq!(alloc.return_pointer_depth, 1);
    assert_eq!(alloc.args.len(), 2);
    assert_eq!(alloc.args[0].name, "pUserData");
    assert_eq!(alloc.args[0].type_name, "void");
    assert_eq!(alloc.args[0].pointer_depth, 1);
    assert_eq!(alloc.args[1].name, "size");
    assert_eq!(alloc.args[1].type_name, "size_t");
    assert_eq!(alloc.args[1].pointer_depth, 0);
}

// ══════════════════════════════════════════════════════════════════════════════
// Commands
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn command_prototypes_and_params_parse() {
    let registry = load(REGISTRY);
    let (_, submit) = registry.commands.resolve("vkQueueSubmit").expect("command");
    assert_eq!(submit.return_type, "VkResult");
    assert_eq!(submit.return_pointer_depth, 0);
    assert_eq!(submit.params.len(), 4);

    let submits = &submit.params[2];
    assert_eq!(submits.name, "pSubmits");
    assert_eq!(submits.type_name, "VkSubmitInfo");
    assert_eq!(submits.pointer_depth, 1);
    assert!(submits.is_const);
    assert_eq!(submits.len.as_deref(), Some("submitCount"));

    assert!(submit.params[3].optional);
}

#[test]
fn command_alias_stores_target_only() {
    let registry = load(REGISTRY);
    let alias = registry
        .commands
        .get("vkEnumeratePhysicalDevices2KHR")
        .expect("alias entry");
    assert!(alias.is_alias());
    let (target, def) = registry
        .commands
        .resolve("vkEnumeratePhysicalDevices2KHR")
        .expect("alias resolves");
    assert_eq!(target, "vkEnumeratePhysicalDevices");
    assert_eq!(def.params.len(), 3);
}

#[test]
fn provenance_stamps_feature_levels_and_extensions() {
    let registry = load(REGISTRY);

    // Baseline requires stamp nothing; unstamped means baseline.
    let (_, create) = registry.commands.resolve("vkCreateInstance").expect("command");
    assert_eq!(create.provenance, None);

    let (_, reset) = registry.commands.resolve("vkResetQueryPool").expect("command");
    assert_eq!(
        reset.provenance,
        Some(CommandProvenance::FeatureLevel { major: 1, minor: 2 })
    );

    let (_, swapchain) = registry.commands.resolve("vkCreateSwapchainKHR").expect("command");
    assert_eq!(
        swapchain.provenance,
        Some(CommandProvenance::Extension("VK_KHR_swapchain".to_string()))
    );
}

// ══════════════════════════════════════════════════════════════════════════════
// Features and extensions
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn feature_offset_entries_require_their_own_extension_number() {
    let registry = load(REGISTRY);
    let (_, structure_type) = registry.enums.resolve("VkStructureType").expect("enum");
    let promoted = structure_type
        .values
        .iter()
        .find(|v| v.name == "VK_STRUCTURE_TYPE_PHYSICAL_DEVICE_VULKAN_1_1_FEATURES")
        .expect("feature-promoted value");
    assert_eq!(
        promoted.value,
        RawValue::Offset {
            extension_number: Some(147),
            offset: 0,
            negative: false,
        }
    );
}

#[test]
fn feature_offset_without_extnumber_fails() {
    let source = r#"
<registry>
  <types>
    <type category="enum" name="VkStructureType"/>
  </types>
  <enums name="VkStructureType" type="enum">
    <enum name="VK_STRUCTURE_TYPE_APPLICATION_INFO" value="0"/>
  </enums>
  <feature api="vulkan" name="VK_VERSION_1_1" number="1.1">
    <require>
      <enum extends="VkStructureType" offset="0" name="VK_STRUCTURE_TYPE_LOST"/>
    </require>
  </feature>
</registry>
"#;
    match try_load(source) {
        Err(LoadError::MissingExtensionNumber(name)) => {
            assert_eq!(name, "VK_STRUCTURE_TYPE_LOST");
        }
        other => panic!("expected MissingExtensionNumber, got {other:?}"),
    }
}

#[test]
fn extension_entries_inherit_the_extension_number() {
    let registry = load(REGISTRY);
    let (_, result) = registry.enums.resolve("VkResult").expect("enum");
    let out_of_date = result
        .values
        .iter()
        .find(|v| v.name == "VK_ERROR_OUT_OF_DATE_KHR")
        .expect("promoted value");
    assert_eq!(
        out_of_date.value,
        RawValue::Offset {
            extension_number: Some(2),
            offset: 1,
            negative: true,
        }
    );
}

#[test]
fn extensions_record_name_number_and_spec_version() {
    let registry = load(REGISTRY);
    let names: Vec<&str> = registry.extensions.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["VK_KHR_swapchain", "VK_KHR_promote"]);

    let swapchain = &registry.extensions[0];
    assert_eq!(swapchain.number, 2);
    assert_eq!(swapchain.spec_version, 70);
}

#[test]
fn disabled_extensions_are_skipped_entirely() {
    let registry = load(REGISTRY);
    assert!(registry.extensions.iter().all(|e| e.name != "VK_EXT_abandoned"));
    let (_, result) = registry.enums.resolve("VkResult").expect("enum");
    assert!(result.values.iter().all(|v| v.name != "VK_ERROR_ABANDONED_EXT"));
}

#[test]
fn extension_without_spec_version_fails() {
    let source = r#"
<registry>
  <types>
    <type category="enum" name="VkResult"/>
  </types>
  <enums name="VkResult" type="enum">
    <enum name="VK_SUCCESS" value="0"/>
  </enums>
  <extensions>
    <extension name="VK_KHR_versionless" number="3" supported="vulkan">
      <require>
        <enum extends="VkResult" offset="0" name="VK_ERROR_VERSIONLESS_KHR"/>
      </require>
    </extension>
  </extensions>
</registry>
"#;
    match try_load(source) {
        Err(LoadError::MissingSpecVersion(name)) => assert_eq!(name, "VK_KHR_versionless"),
        other => panic!("expected MissingSpecVersion, got {other:?}"),
    }
}

#[test]
fn conflicting_spec_versions_fail() {
    let source = r#"
<registry>
  <types>
    <type category="enum" name="VkResult"/>
  </types>
  <enums name="VkResult" type="enum">
    <enum name="VK_SUCCESS" value="0"/>
  </enums>
  <extensions>
    <extension name="VK_KHR_twice" number="3" supported="vulkan">
      <require>
        <enum name="VK_KHR_TWICE_SPEC_VERSION" value="70"/>
        <enum name="VK_KHR_TWICE_SPEC_VERSION" value="71"/>
      </require>
    </extension>
  </extensions>
</registry>
"#;
    match try_load(source) {
        Err(LoadError::ConflictingSpecVersion(name)) => assert_eq!(name, "VK_KHR_twice"),
        other => panic!("expected ConflictingSpecVersion, got {other:?}"),
    }
}

#[test]
fn repeated_equal_spec_versions_collapse() {
    let source = r#"
<registry>
  <types>
    <type category="enum" name="VkResult"/>
  </types>
  <enums name="VkResult" type="enum">
    <enum name="VK_SUCCESS" value="0"/>
  </enums>
  <extensions>
    <extension name="VK_KHR_twice" number="3" supported="vulkan">
      <require>
        <enum name="VK_KHR_TWICE_SPEC_VERSION" value="70"/>
        <enum name="VK_KHR_TWICE_SPEC_VERSION" value="70"/>
      </require>
    </extension>
  </extensions>
</registry>
"#;
    let registry = load(source);
    assert_eq!(registry.extensions[0].spec_version, 70);
}

#[test]
fn missing_attribute_diagnostics_name_the_element() {
    let source = r#"
<registry>
  <tags>
    <tag author="Khronos" contact=""/>
  </tags>
</registry>
"#;
    match try_load(source) {
        Err(LoadError::MissingAttribute { element, attribute, .. }) => {
            assert_eq!(element, "tag");
            assert_eq!(attribute, "name");
        }
        other => panic!("expected MissingAttribute, got {other:?}"),
    }
}

#[test]
fn malformed_xml_fails_structurally() {
    assert!(try_load("<registry><types></registry>").is_err());
}
