//! Styled components

pub mod badge;
pub mod button;
pub mod dropdown;
pub mod flex_layout;
pub mod header;
pub mod icons;
pub mod layout_box;
pub mod typography;
pub mod utils;

pub use badge::Badge;
pub use button::{Button, ChromelessButton};
pub use dropdown::Dropdown;
pub use flex_layout::FlexLayout;
pub use header::Header;
pub use icons::{ChevronDownIcon, ChevronUpIcon, HomeIcon};
pub use layout_box::LayoutBox;
pub use typography::Typography;
