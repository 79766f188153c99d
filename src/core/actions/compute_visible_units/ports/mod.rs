pub mod draw_list_sink;
pub mod unit_generator;
