mod conversion;
mod equality;
mod string;

// conversion
pub(crate) use conversion::{from_24bit, rgb_to_cmyk, rgb_to_hsl, to_channels};

// equality
pub use equality::to_eq_bits;

// string
pub(crate) use string::{format, parse_hex};
