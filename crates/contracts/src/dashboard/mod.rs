//! Dashboard navigation contracts
//!
//! Содержит:
//! - `tab_id` - закрытый набор идентификаторов вкладок
//! - `registry` - статический реестр вкладок (единственный источник правды для порядка и заголовков)
//! - `active_tab` - машина состояний активной вкладки

pub mod active_tab;
pub mod registry;
pub mod tab_id;

pub use active_tab::{ActiveTabState, RegionState, Transition};
pub use registry::{descriptor, TabDescriptor, TAB_REGISTRY};
pub use tab_id::{ParseTabIdError, TabId};
