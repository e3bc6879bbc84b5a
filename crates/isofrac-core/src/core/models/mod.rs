pub mod molecule;
