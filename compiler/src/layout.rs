use crate::types::FieldDef;

/// Indices of the non-extension fields, largest element first. Ties keep
/// declaration order. Both the CRC_EXTRA input and the offsets follow it.
pub fn base_order(fields: &[FieldDef]) -> Vec<usize> {
    let mut base: Vec<usize> = (0..fields.len()).filter(|&i| !fields[i].is_extension).collect();
    base.sort_by(|&a, &b| fields[b].element_size.cmp(&fields[a].element_size));
    base
}

/// Indices in payload order: [`base_order`], then extension fields in
/// declaration order.
pub fn wire_order_indices(fields: &[FieldDef]) -> Vec<usize> {
    let mut order = base_order(fields);
    order.extend((0..fields.len()).filter(|&i| fields[i].is_extension));
    order
}

pub fn wire_order(fields: &[FieldDef]) -> Vec<&FieldDef> {
    wire_order_indices(fields).into_iter().map(|i| &fields[i]).collect()
}

pub fn base_fields_by_size(fields: &[FieldDef]) -> Vec<&FieldDef> {
    base_order(fields).into_iter().map(|i| &fields[i]).collect()
}

/// Assigns payload offsets in place and returns the payload length.
pub fn assign_offsets(fields: &mut [FieldDef]) -> usize {
    let mut offset = 0;
    for i in wire_order_indices(fields) {
        fields[i].offset = offset;
        offset += fields[i].total_size;
    }
    offset
}
