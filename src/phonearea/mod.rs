mod area;
mod enums;
pub mod errors;
pub(crate) mod helper_constants;
pub(crate) mod helper_functions;
mod helper_types;
mod loader;
pub mod phonearea;
mod validator;

pub use area::Area;
pub use enums::AreaField;
pub use helper_functions::parse_area_line;
pub use helper_types::AreaRecord;
pub use loader::{generate_db, load_records};
pub use phonearea::PhoneArea;
pub use validator::normalize_phone_number;
