//! Product catalog UI: category tabs, card/list renderings, filtering, and
//! the detail modal.

mod category_tabs;
mod detail_modal;
mod featured;
mod filter_panel;
mod product_card;
mod product_image;
mod product_list_item;
mod view_toggle;

pub use category_tabs::CategoryTabs;
pub use detail_modal::ProductDetailModal;
pub use featured::FeaturedProducts;
pub use filter_panel::FilterPanel;
pub use product_card::ProductCard;
pub use product_image::ProductImage;
pub use product_list_item::ProductListItem;
pub use view_toggle::ViewToggle;
