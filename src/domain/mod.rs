// Seam traits shared by the predicate, contract and collection layers.

pub mod ports;
