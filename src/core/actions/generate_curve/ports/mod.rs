pub mod curve_motif;
