pub mod lyrics_modal;
pub mod result_list;
pub mod search_bar;
pub mod spinner;
