pub mod dom;
pub mod menu;
pub mod scroll;
pub mod tenure;
pub mod theme;
pub mod typing;
