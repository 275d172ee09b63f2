//! End-to-end pipeline tests: registry XML in, generated files on disk.
//!
//! Tests validate:
//! - The full run writes the expected file tree and summary counts
//! - Regeneration is idempotent (equal digests, byte-identical files)
//! - The verbose reporter receives the load/vendor/file messages
//! - Load failures surface through the pipeline error type

use std::fs;

use vkgen::{generate, GeneratorConfig};

// ══════════════════════════════════════════════════════════════════════════════
// Fixture
// ══════════════════════════════════════════════════════════════════════════════

/// Miniature registry exercising every pipeline stage.
const REGISTRY: &str = r#"
<registry>
  <tags>
    <tag name="KHR" author="Khronos" contact=""/>
  </tags>
  <types>
    <type category="bitmask" requires="VkAccessFlagBits">typedef <type>VkFlags</type> <name>VkAccessFlags</name>;</type>
    <type category="handle"><type>VK_DEFINE_HANDLE</type>(<name>VkInstance</name>)</type>
    <type category="handle" parent="VkInstance"><type>VK_DEFINE_HANDLE</type>(<name>VkPhysicalDevice</name>)</type>
    <type category="handle" parent="VkPhysicalDevice"><type>VK_DEFINE_HANDLE</type>(<name>VkDevice</name>)</type>
    <type category="handle" parent="VkDevice"><type>VK_DEFINE_NON_DISPATCHABLE_HANDLE</type>(<name>VkSwapchainKHR</name>)</type>
    <type category="enum" name="VkStructureType"/>
    <type category="enum" name="VkResult"/>
    <type category="enum" name="VkAccessFlagBits"/>
    <type category="struct" name="VkApplicationInfo">
      <member values="VK_STRUCTURE_TYPE_APPLICATION_INFO"><type>VkStructureType</type> <name>sType</name></member>
      <member>const <type>void</type>* <name>pNext</name></member>
      <member><type>uint32_t</type> <name>applicationVersion</name></member>
    </type>
    <type category="struct" name="VkSwapchainCreateInfoKHR">
      <member values="VK_STRUCTURE_TYPE_SWAPCHAIN_CREATE_INFO_KHR"><type>VkStructureType</type> <name>sType</name></member>
      <member>const <type>void</type>* <name>pNext</name></member>
      <member><type>uint32_t</type> <name>minImageCount</name></member>
    </type>
  </types>
  <enums name="API Constants">
    <enum name="VK_ATTACHMENT_UNUSED" value="(~0U)"/>
  </enums>
  <enums name="VkStructureType" type="enum">
    <enum name="VK_STRUCTURE_TYPE_APPLICATION_INFO" value="0"/>
  </enums>
  <enums name="VkResult" type="enum">
    <enum name="VK_SUCCESS" value="0"/>
  </enums>
  <enums name="VkAccessFlagBits" type="bitmask">
    <enum name="VK_ACCESS_INDEX_READ_BIT" bitpos="1"/>
  </enums>
  <commands>
    <command>
      <proto><type>VkResult</type> <name>vkCreateInstance</name></proto>
      <param><type>VkInstance</type>* <name>pInstance</name></param>
    </command>
    <command>
      <proto><type>VkResult</type> <name>vkCreateSwapchainKHR</name></proto>
      <param><type>VkDevice</type> <name>device</name></param>
      <param>const <type>VkSwapchainCreateInfoKHR</type>* <name>pCreateInfo</name></param>
      <param><type>VkSwapchainKHR</type>* <name>pSwapchain</name></param>
    </command>
  </commands>
  <feature api="vulkan" name="VK_VERSION_1_0" number="1.0">
    <require>
      <command name="vkCreateInstance"/>
    </require>
  </feature>
  <extensions>
    <extension name="VK_KHR_swapchain" number="2" supported="vulkan">
      <require>
        <enum name="VK_KHR_SWAPCHAIN_SPEC_VERSION" value="70"/>
        <enum extends="VkStructureType" offset="0" name="VK_STRUCTURE_TYPE_SWAPCHAIN_CREATE_INFO_KHR"/>
        <command name="vkCreateSwapchainKHR"/>
      </require>
    </extension>
  </extensions>
</registry>
"#;

fn config(dir: &tempfile::TempDir) -> GeneratorConfig {
    GeneratorConfig {
        output_dir: dir.path().to_path_buf(),
        verbose: false,
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Tests
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn full_run_writes_the_expected_tree() {
    let dir = tempfile::tempdir().expect("tempdir");
    let summary = generate(REGISTRY, &config(&dir), &mut |_| {}).expect("generate");

    for path in [
        "Bitmasks.gen.cs",
        "Enums.gen.cs",
        "Structs.gen.cs",
        "Handles.gen.cs",
        "Constants.gen.cs",
        "Commands.gen.cs",
        "KHR/Structs.gen.cs",
        "KHR/Handles.gen.cs",
    ] {
        assert!(dir.path().join(path).is_file(), "missing {path}");
    }

    assert_eq!(summary.files, 8);
    assert_eq!(summary.bitmasks, 1);
    assert_eq!(summary.enums, 2);
    assert_eq!(summary.handles, 4);
    assert_eq!(summary.structs, 2);
    assert_eq!(summary.constants, 1);
    assert_eq!(summary.commands, 2);
    let vendors: Vec<&str> = summary.vendors.iter().map(|v| v.name.as_str()).collect();
    assert_eq!(vendors, vec!["Core", "KHR"]);
}

#[test]
fn written_files_hold_generated_source() {
    let dir = tempfile::tempdir().expect("tempdir");
    generate(REGISTRY, &config(&dir), &mut |_| {}).expect("generate");

    let handles = fs::read_to_string(dir.path().join("Handles.gen.cs")).expect("read");
    assert!(handles.starts_with("// <auto-generated>"));
    assert!(handles.contains("public unsafe partial struct VkInstance : IEquatable<VkInstance>"));

    let khr = fs::read_to_string(dir.path().join("KHR/Structs.gen.cs")).expect("read");
    assert!(khr.contains("namespace Vulkan.KHR"));
    assert!(khr.contains("VkSwapchainCreateInfoKHR"));
}

#[test]
fn regeneration_is_idempotent() {
    let dir = tempfile::tempdir().expect("tempdir");
    let first = generate(REGISTRY, &config(&dir), &mut |_| {}).expect("first run");
    let first_bitmasks = fs::read_to_string(dir.path().join("Bitmasks.gen.cs")).expect("read");

    let second = generate(REGISTRY, &config(&dir), &mut |_| {}).expect("second run");
    let second_bitmasks = fs::read_to_string(dir.path().join("Bitmasks.gen.cs")).expect("read");

    assert_eq!(first.digest, second.digest);
    assert_eq!(first_bitmasks, second_bitmasks);
}

#[test]
fn digests_differ_when_the_registry_differs() {
    let dir_a = tempfile::tempdir().expect("tempdir");
    let a = generate(REGISTRY, &config(&dir_a), &mut |_| {}).expect("generate");

    let changed = REGISTRY.replace("bitpos=\"1\"", "bitpos=\"2\"");
    let dir_b = tempfile::tempdir().expect("tempdir");
    let b = generate(&changed, &config(&dir_b), &mut |_| {}).expect("generate");

    assert_ne!(a.digest, b.digest);
}

#[test]
fn verbose_reports_load_vendor_and_file_messages() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut messages: Vec<String> = Vec::new();
    let config = GeneratorConfig {
        output_dir: dir.path().to_path_buf(),
        verbose: true,
    };
    generate(REGISTRY, &config, &mut |message| {
        messages.push(message.to_string());
    })
    .expect("generate");

    assert!(messages.iter().any(|m| m.starts_with("registry loaded:")));
    assert!(messages.iter().any(|m| m.starts_with("vendor Core:")));
    assert!(messages.iter().any(|m| m.starts_with("vendor KHR:")));
    assert!(messages.iter().any(|m| m == "wrote Commands.gen.cs"));
    assert!(messages.iter().any(|m| m == "wrote KHR/Handles.gen.cs"));
}

#[test]
fn quiet_runs_report_nothing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut count = 0usize;
    generate(REGISTRY, &config(&dir), &mut |_| count += 1).expect("generate");
    assert_eq!(count, 0);
}

#[test]
fn malformed_registries_fail_the_pipeline() {
    let dir = tempfile::tempdir().expect("tempdir");
    let result = generate("<registry><types>", &config(&dir), &mut |_| {});
    assert!(result.is_err());
}

#[test]
fn summary_serializes_to_json() {
    let dir = tempfile::tempdir().expect("tempdir");
    let summary = generate(REGISTRY, &config(&dir), &mut |_| {}).expect("generate");
    let json = summary.to_json();
    assert!(json.contains("\"digest\""));
    assert!(json.contains("\"vendors\""));
    assert!(json.contains("\"Core\""));
}
