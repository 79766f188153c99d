pub mod pythagoras;
