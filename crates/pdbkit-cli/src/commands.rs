pub mod rename;
pub mod split;
pub mod split_all;
pub mod table;
