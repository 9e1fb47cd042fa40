pub mod catalog;
pub mod providers;
pub mod recommend;
pub mod view;
