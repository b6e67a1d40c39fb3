pub mod cycling_gradient;
