//! Tab management module
//!
//! Содержит:
//! - `attrs` - атрибуты кнопок и страниц вкладок (test id, data-state, скрытие)
//! - `tab_bar` - горизонтальная панель кнопок вкладок
//! - `page` - компонент TabPage для обёртки контента вкладки
//! - `registry` - маппинг TabId → View (единственный источник правды)

pub mod attrs;
pub mod page;
pub mod registry;
pub mod tab_bar;

pub use page::TabPage;
pub use tab_bar::TabBar;
