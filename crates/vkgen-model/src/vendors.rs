//! Vendor partitioning.
//!
//! Every bitmask/handle/enum/struct/function-pointer entity is assigned
//! to the vendor whose tag suffixes its name, or to the synthetic core
//! vendor. Vendors owning zero entities after partitioning are pruned.

use vkgen_naming::NameTables;

use crate::output::{OutputModel, Vendor, CORE_VENDOR};

pub(crate) fn partition(tables: &NameTables, tag_order: &[String], model: &mut OutputModel) {
    let mut vendors: Vec<Vendor> = Vec::with_capacity(tag_order.len() + 1);
    vendors.push(Vendor {
        name: CORE_VENDOR.to_string(),
        ..Vendor::default()
    });
    for tag in tag_order {
        vendors.push(Vendor {
            name: tag.clone(),
            ..Vendor::default()
        });
    }

    let bucket = |vendors: &[Vendor], name: &str| -> usize {
        let vendor = tables.vendor_suffix(name).unwrap_or(CORE_VENDOR);
        vendors
            .iter()
            .position(|v| v.name == vendor)
            // A tag seen on an identifier but absent from the tag block.
            .unwrap_or(0)
    };

    for (id, entry) in model.bitmasks.iter() {
        let b = bucket(&vendors, &entry.name);
        vendors[b].bitmasks.push(id);
    }
    for (id, entry) in model.enums.iter() {
        let b = bucket(&vendors, &entry.name);
        vendors[b].enums.push(id);
    }
    for (id, entry) in model.handles.iter() {
        let b = bucket(&vendors, &entry.name);
        vendors[b].handles.push(id);
    }
    for (id, entry) in model.structs.iter() {
        let b = bucket(&vendors, &entry.name);
        vendors[b].structs.push(id);
    }
    for (id, entry) in model.func_pointers.iter() {
        let b = bucket(&vendors, &entry.name);
        vendors[b].func_pointers.push(id);
    }

    vendors.retain(|v| v.entity_count() > 0);
    model.vendors = vendors;
}
