pub mod back_link;
pub mod feature_card;
pub mod icons;
pub mod navbar;
pub mod status_card;
pub mod step;
pub mod sub_page;
pub mod update_item;
