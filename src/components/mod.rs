//! UI Components
//!
//! Reusable Leptos components.

mod career_card;
mod nav_link;
mod role_list;
mod skill_card;

pub use career_card::CareerCard;
pub use nav_link::NavLink;
pub use role_list::RoleList;
pub use skill_card::SkillCard;
