/// Length of a national mobile number once the country code is stripped.
pub const PHONE_NUMBER_LENGTH: usize = 11;
/// Number of leading digits used as the lookup key into the area table.
pub const PHONE_PREFIX_LENGTH: usize = 7;

// Country calling code spellings accepted in front of the 11 digits.
pub const COUNTRY_CODE_PREFIXES: [&'static str; 3] = ["86", "086", "+86"];

// Only the 13x, 14x, 15x and 18x ranges known when the area table was built
// are recognized. Newer ranges (17x, 19x, ...) are rejected on purpose.
pub const MOBILE_NUMBER_PATTERN: &'static str = r"^(13[0-9]|14[0-9]|15[0-9]|18[0-9])\d{8}$";

/// Number of comma separated fields in a source line, index included.
pub const SOURCE_FIELD_COUNT: usize = 6;
pub const SOURCE_FIELD_SEPARATOR: char = ',';
pub const SOURCE_QUOTE: char = '"';

// Store layout. These keys must stay bit-exact to remain readable by stores
// generated earlier; the layout carries no version.
pub const KEY_PREFIX_INCR: &'static str = "prefix_incr";
pub const KEY_PREFIX: &'static str = "p:";
pub const KEY_PROVINCE: &'static str = "pv:";
pub const KEY_CITY: &'static str = "ct:";
pub const KEY_MODEL: &'static str = "md:";
pub const KEY_POST_CODE: &'static str = "pc:";
pub const KEY_AREA_CODE: &'static str = "ac:";

/// File created by the persistent store inside the store directory.
pub const STORE_FILE_NAME: &'static str = "phonearea.redb";
/// Namespace used by [`crate::RedbStore::open`].
pub const DEFAULT_NAMESPACE: u8 = 0;
