pub mod badge;
pub mod button;
pub mod scroll_area;
pub mod tooltip;

pub use badge::{Badge, StatusDot};
pub use button::Button;
pub use scroll_area::ScrollArea;
pub use tooltip::{Tooltip, TooltipConfig};
