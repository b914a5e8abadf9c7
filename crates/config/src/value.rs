//! Conversions from raw string values to typed settings.

/// Words that read as `true` in a boolean setting (compared lowercased).
pub const TRUE_WORDS: [&str; 4] = ["true", "1", "yes", "on"];

/// A type that can be read out of a raw configuration value.
///
/// `parse` receives a non-empty value; empty values never reach it and fall
/// back to the caller's default instead.
pub trait FromConfigValue: Sized {
    /// Human-readable type name used in warnings.
    const KIND: &'static str;

    fn parse(raw: &str) -> Option<Self>;
}

impl FromConfigValue for String {
    const KIND: &'static str = "string";

    fn parse(raw: &str) -> Option<Self> {
        Some(raw.to_string())
    }
}

/// Any value outside [`TRUE_WORDS`] is `false`, so this never fails.
impl FromConfigValue for bool {
    const KIND: &'static str = "bool";

    fn parse(raw: &str) -> Option<Self> {
        let lower = raw.to_ascii_lowercase();
        Some(TRUE_WORDS.contains(&lower.as_str()))
    }
}

macro_rules! from_str_value {
    ($($ty:ty => $kind:literal),* $(,)?) => {
        $(
            impl FromConfigValue for $ty {
                const KIND: &'static str = $kind;

                fn parse(raw: &str) -> Option<Self> {
                    raw.parse::<$ty>().ok()
                }
            }
        )*
    };
}

from_str_value! {
    i32 => "integer",
    u32 => "uint32",
    u64 => "uint64",
    f32 => "float",
}

/// Splits a comma-separated value, trimming pieces and dropping empty ones.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(crate::parser::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}
