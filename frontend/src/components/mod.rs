// Reusable components live here.

pub mod add_room_dialog;
pub mod confirm_popover;
pub mod loading_spinner;
pub mod status_tag;
