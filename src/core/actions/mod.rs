pub mod generate_curve;
