pub mod batch_data;
pub mod completion_data;
pub mod draw_list;
pub mod view_request;
