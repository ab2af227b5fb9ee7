//! UI Components
//!
//! Page sections and the modals they open.

mod header;
mod hero;
mod about;
mod services;
mod experience;
mod category_tabs;
mod projects;
mod project_modal;
mod team_section;
mod employee_form_modal;
mod delete_employee_modal;
mod footer;
mod scroll_to_top;

pub use header::Header;
pub use hero::Hero;
pub use about::About;
pub use services::Services;
pub use experience::Experience;
pub use projects::Projects;
pub use team_section::TeamSection;
pub use footer::Footer;
pub use scroll_to_top::ScrollToTop;
