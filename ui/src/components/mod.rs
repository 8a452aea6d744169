pub mod multi_select;
