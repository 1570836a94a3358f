//! simple crate with no logic used so that the large amounts of data stored
//! directly in the binary are not repeatedly re-compiled

pub mod cie;
