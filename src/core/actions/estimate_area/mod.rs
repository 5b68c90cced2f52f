pub mod estimate_area;
pub mod estimate_area_rayon;
