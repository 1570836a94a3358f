mod cie;
mod coefficient_spectrum;
