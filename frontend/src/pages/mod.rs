pub mod file_list;
pub mod not_found;
pub mod room_list;
