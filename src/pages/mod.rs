//! Pages
//!
//! One component per route.

mod career;
mod home;
mod skills;

pub use career::CareerPage;
pub use home::HomePage;
pub use skills::SkillsPage;
