//! The creative hierarchy: a closed set of ad variants, each with its own
//! allowed sub-kind table.

pub mod creative;
pub mod registry;

pub use creative::{Creative, DisplayAd, SocialAd, VideoAd};
pub use registry::describe_formats;
