mod dropdown_page;
mod gallery;
mod header_page;
mod layout;

pub use dropdown_page::DropdownPage;
pub use gallery::Gallery;
pub use header_page::HeaderPage;
pub use layout::DemoLayout;
