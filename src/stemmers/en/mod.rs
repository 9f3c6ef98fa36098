pub mod porter2;
