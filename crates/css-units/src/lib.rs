//! CSS length unit conversion.
//!
//! Every conversion goes through pixels under a caller-supplied
//! [`ConversionSettings`] reference frame. Bad input is always returned as
//! an error: unknown units, non-numeric values and non-positive
//! reference-frame settings never degrade into `0`, `NaN` or `Infinity`.

pub mod batch;
pub mod convert;
pub mod settings;
pub mod units;

pub use batch::{batch_convert, INVALID_FORMAT, INVALID_UNIT};
pub use convert::{
    convert, convert_all, convert_from_px, convert_to_px, convert_value, format_result, parse_value,
    Conversion,
};
pub use settings::{ConversionPreset, ConversionSettings, PresetCatalog};
pub use units::CssUnit;
