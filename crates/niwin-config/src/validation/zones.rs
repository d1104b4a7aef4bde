//! Hit-zone geometry validation.

use crate::schema::NiwinConfig;

use super::helpers::validate_range;

/// Zone sizes must be non-negative; the edge strip must stay thin enough
/// to leave a pass-through interior.
pub(crate) fn validate_hit_zones(errors: &mut Vec<String>, config: &NiwinConfig) {
    let z = &config.hit_zones;
    validate_range(errors, "hit_zones.menu_width", z.menu_width, 0, 4000);
    validate_range(errors, "hit_zones.menu_height", z.menu_height, 0, 4000);
    validate_range(errors, "hit_zones.menu_padding", z.menu_padding, 0, 200);
    validate_range(errors, "hit_zones.panel_width", z.panel_width, 0, 4000);
    validate_range(errors, "hit_zones.panel_overhang", z.panel_overhang, 0, 400);
    validate_range(errors, "hit_zones.panel_drop", z.panel_drop, 0, 4000);
    validate_range(
        errors,
        "hit_zones.panel_right_inset",
        z.panel_right_inset,
        0,
        4000,
    );
    validate_range(errors, "hit_zones.edge_margin", z.edge_margin, 0, 200);
}
