pub mod campaign;

pub use campaign::{Campaign, MAX_NAME_LEN};
