use dh_css_units::{batch_convert, convert, convert_value, ConversionSettings, CssUnit, PresetCatalog};
use proptest::prelude::*;

fn unit() -> impl Strategy<Value = CssUnit> {
    proptest::sample::select(CssUnit::ALL.to_vec())
}

fn frame() -> impl Strategy<Value = ConversionSettings> {
    (1.0f64..64.0, 1.0f64..64.0, 1.0f64..64.0, 1.0f64..4000.0, 1.0f64..4000.0).prop_map(
        |(base, root, parent, w, h)| ConversionSettings {
            base_font_size: base,
            root_font_size: root,
            parent_font_size: parent,
            viewport_width: w,
            viewport_height: h,
        },
    )
}

proptest! {
    #[test]
    fn from_px_inverts_to_px(v in -10_000.0f64..10_000.0, u in unit(), s in frame()) {
        let back = u.from_px(u.to_px(v, &s), &s);
        prop_assert!((back - v).abs() <= 1e-9 * v.abs().max(1.0), "{} -> {}", v, back);
    }

    #[test]
    fn any_pair_round_trips(v in 0.0f64..5_000.0, a in unit(), b in unit(), s in frame()) {
        let there = convert_value(v, a, b, &s).unwrap();
        let back = convert_value(there, b, a, &s).unwrap();
        prop_assert!((back - v).abs() <= 1e-9 * v.abs().max(1.0));
    }
}

#[test]
fn rem_scenario_with_root_16() {
    let settings = ConversionSettings {
        root_font_size: 16.0,
        ..ConversionSettings::default()
    };
    assert_eq!(convert("16", "px", "rem", &settings).unwrap(), "1");
    assert_eq!(convert("1", "rem", "px", &settings).unwrap(), "16");
}

#[test]
fn batch_scenario() {
    let settings = ConversionSettings {
        root_font_size: 16.0,
        ..ConversionSettings::default()
    };
    let out = batch_convert("16px\n2rem", "px", &settings).unwrap();
    assert_eq!(out, vec!["16px = 16.000px", "2rem = 32.000px"]);
}

#[test]
fn preset_frame_drives_viewport_units() {
    let catalog = PresetCatalog::with_builtins();
    let mobile = catalog.get("mobile").unwrap();
    assert_eq!(convert("100", "vw", "px", &mobile.settings).unwrap(), "375");
}

#[test]
fn settings_parse_from_toml_with_defaults() {
    let settings: ConversionSettings = toml::from_str("root_font_size = 10.0").unwrap();
    assert_eq!(settings.root_font_size, 10.0);
    assert_eq!(settings.viewport_width, 1920.0);
    assert_eq!(convert("25", "px", "rem", &settings).unwrap(), "2.5");
}
