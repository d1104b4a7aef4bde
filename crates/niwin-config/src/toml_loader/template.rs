//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# niwin Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.
# NIWIN_PASS_THROUGH=0 in the environment disables click-through.

[window]
# title = "niwin"
# width = 540
# height = 360
# always_on_top = true
# transparent = true
# decorations = false

[pass_through]
# enabled = true
# poll_interval_ms = 80      # 10-1000

[hit_zones]
# menu_width = 200
# menu_height = 160
# menu_padding = 16
# panel_width = 240
# panel_overhang = 40
# panel_drop = 140
# panel_right_inset = 120
# edge_margin = 24           # 0-200

[resize]
# min_width = 200            # 1-10000
# min_height = 130           # 1-10000
# frame_interval_ms = 16     # 1-250
# handle_size = 24

[logging]
# level = "info"             # trace, debug, info, warn, error
"##
    .to_string()
}
